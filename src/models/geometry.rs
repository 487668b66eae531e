use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Field names follow the map side of the system (`lat`/`lng`), so positions
/// serialize into exactly the shape the browser map consumes. The GeoJSON
/// input uses `[lon, lat]` arrays instead; the store swaps the axes when it
/// decodes (see [`crate::store`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both coordinates are finite numbers. Non-finite positions come
    /// from defective source rows and are skipped by the renderer.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// An axis-aligned geographic rectangle, used for viewport fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Degenerate bounds containing a single position.
    pub fn of(position: LatLng) -> Self {
        Self {
            south_west: position,
            north_east: position,
        }
    }

    /// Grow the bounds to include `position`.
    pub fn extend(&mut self, position: LatLng) {
        self.south_west.lat = self.south_west.lat.min(position.lat);
        self.south_west.lng = self.south_west.lng.min(position.lng);
        self.north_east.lat = self.north_east.lat.max(position.lat);
        self.north_east.lng = self.north_east.lng.max(position.lng);
    }

    /// Bounds covering all finite positions in `positions`, or `None` when
    /// there is nothing to cover.
    pub fn covering<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut bounds: Option<Self> = None;
        for position in positions {
            if !position.is_finite() {
                continue;
            }
            match bounds.as_mut() {
                Some(b) => b.extend(position),
                None => bounds = Some(Self::of(position)),
            }
        }
        bounds
    }

    pub fn contains(&self, position: LatLng) -> bool {
        position.lat >= self.south_west.lat
            && position.lat <= self.north_east.lat
            && position.lng >= self.south_west.lng
            && position.lng <= self.north_east.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_spans_all_positions() {
        let bounds = LatLngBounds::covering([
            LatLng::new(50.85, 4.35),
            LatLng::new(52.37, 4.89),
            LatLng::new(48.86, 2.35),
        ])
        .unwrap();

        assert_eq!(bounds.south_west, LatLng::new(48.86, 2.35));
        assert_eq!(bounds.north_east, LatLng::new(52.37, 4.89));
    }

    #[test]
    fn covering_ignores_non_finite_positions() {
        let bounds = LatLngBounds::covering([
            LatLng::new(f64::NAN, 4.35),
            LatLng::new(50.85, 4.35),
        ])
        .unwrap();

        assert_eq!(bounds.south_west, LatLng::new(50.85, 4.35));
        assert_eq!(bounds.north_east, LatLng::new(50.85, 4.35));
    }

    #[test]
    fn covering_nothing_is_none() {
        assert!(LatLngBounds::covering([]).is_none());
        assert!(LatLngBounds::covering([LatLng::new(f64::NAN, f64::NAN)]).is_none());
    }

    #[test]
    fn contains_includes_edges() {
        let bounds = LatLngBounds::covering([
            LatLng::new(50.0, 4.0),
            LatLng::new(51.0, 5.0),
        ])
        .unwrap();

        assert!(bounds.contains(LatLng::new(50.0, 4.0)));
        assert!(bounds.contains(LatLng::new(50.5, 4.5)));
        assert!(!bounds.contains(LatLng::new(49.9, 4.5)));
    }
}
