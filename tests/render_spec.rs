use netatlas::models::{
    FeatureCollection, LatLng, LatLngBounds, LineFeature, NetworkFeature, PointFeature,
};
use netatlas::render::{fit_viewport, Layer, LayerHandle, MapCanvas, Renderer, FIT_PADDING_PX};
use netatlas::view::{FilterQuery, LineVisibility, TypeFilter, View};

/// Canvas double that records every operation in order, so tests can
/// observe the renderer's layer lifecycle.
#[derive(Debug, Default)]
struct RecordingCanvas {
    next_handle: u64,
    ops: Vec<CanvasOp>,
    attached: Vec<(LayerHandle, Layer)>,
}

#[derive(Debug, Clone, PartialEq)]
enum CanvasOp {
    Add(LayerHandle),
    Remove(LayerHandle),
    Fit(LatLngBounds, u32),
}

impl RecordingCanvas {
    fn attached_layers(&self) -> Vec<&Layer> {
        self.attached.iter().map(|(_, layer)| layer).collect()
    }

    fn fits(&self) -> Vec<(LatLngBounds, u32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Fit(bounds, padding) => Some((*bounds, *padding)),
                _ => None,
            })
            .collect()
    }
}

impl MapCanvas for RecordingCanvas {
    fn add_layer(&mut self, layer: Layer) -> LayerHandle {
        let handle = LayerHandle::new(self.next_handle);
        self.next_handle += 1;
        self.ops.push(CanvasOp::Add(handle));
        self.attached.push((handle, layer));
        handle
    }

    fn remove_layer(&mut self, handle: LayerHandle) {
        self.ops.push(CanvasOp::Remove(handle));
        self.attached.retain(|(h, _)| *h != handle);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding_px: u32) {
        self.ops.push(CanvasOp::Fit(bounds, padding_px));
    }
}

fn point_at(id: &str, label: &str, entity_type: &str, position: LatLng) -> NetworkFeature {
    NetworkFeature::Point(PointFeature {
        id: id.to_string(),
        label: label.to_string(),
        entity_type: entity_type.to_string(),
        relations: vec![],
        position,
    })
}

fn line_between(source: (&str, &str), target: (&str, &str), path: [LatLng; 2]) -> NetworkFeature {
    NetworkFeature::Line(LineFeature {
        relationship: "woont in".to_string(),
        source_id: source.0.to_string(),
        target_id: target.0.to_string(),
        source_label: source.1.to_string(),
        target_label: target.1.to_string(),
        path,
    })
}

fn sample_collection() -> FeatureCollection {
    let anna = LatLng::new(50.85, 4.35);
    let brussels = LatLng::new(50.84, 4.36);
    FeatureCollection::new(vec![
        point_at("1", "Anna", "Person", anna),
        point_at("2", "Brussels", "City", brussels),
        line_between(("1", "Anna"), ("2", "Brussels"), [anna, brussels]),
    ])
}

mod layer_lifecycle {
    use super::*;

    #[test]
    fn render_attaches_one_cluster_and_one_path_per_line() {
        let collection = sample_collection();
        let view = View::build(&collection, &FilterQuery::default(), LineVisibility::Always);

        let mut renderer = Renderer::new();
        let mut canvas = RecordingCanvas::default();
        let summary = renderer.render(&view, &mut canvas);

        assert_eq!(summary.markers, 2);
        assert_eq!(summary.paths, 1);
        assert_eq!(summary.skipped, 0);

        let layers = canvas.attached_layers();
        assert_eq!(layers.len(), 2);
        assert!(matches!(layers[0], Layer::Cluster(_)));
        assert!(matches!(layers[1], Layer::Path(_)));
    }

    #[test]
    fn second_render_fully_replaces_the_first() {
        let collection = sample_collection();
        let mut renderer = Renderer::new();
        let mut canvas = RecordingCanvas::default();

        let everything = View::build(&collection, &FilterQuery::default(), LineVisibility::Always);
        renderer.render(&everything, &mut canvas);
        let first_pass_ops = canvas.ops.len();

        let persons_only = View::build(
            &collection,
            &FilterQuery::new("", TypeFilter::Only("Person".to_string())),
            LineVisibility::Always,
        );
        renderer.render(&persons_only, &mut canvas);

        // No ghost layers: only the second render's cluster + path remain.
        assert_eq!(canvas.attached.len(), 2);

        // The second pass removes everything from the first before adding.
        let second_pass = &canvas.ops[first_pass_ops..];
        let last_remove = second_pass
            .iter()
            .rposition(|op| matches!(op, CanvasOp::Remove(_)))
            .unwrap();
        let first_add = second_pass
            .iter()
            .position(|op| matches!(op, CanvasOp::Add(_)))
            .unwrap();
        assert!(last_remove < first_add);
    }

    #[test]
    fn non_finite_positions_are_skipped_not_fatal() {
        let collection = FeatureCollection::new(vec![
            point_at("1", "Anna", "Person", LatLng::new(50.85, 4.35)),
            point_at("2", "Lost", "Person", LatLng::new(f64::NAN, 4.0)),
        ]);
        let view = View::build(&collection, &FilterQuery::default(), LineVisibility::Always);

        let mut renderer = Renderer::new();
        let mut canvas = RecordingCanvas::default();
        let summary = renderer.render(&view, &mut canvas);

        assert_eq!(summary.markers, 1);
        assert_eq!(summary.skipped, 1);

        let layers = canvas.attached_layers();
        let Layer::Cluster(cluster) = layers[0] else {
            panic!("expected a cluster layer");
        };
        assert_eq!(cluster.markers.len(), 1);
        assert_eq!(cluster.markers[0].feature_id, "1");
    }
}

mod viewport {
    use super::*;

    #[test]
    fn fit_covers_the_rendered_markers() {
        let collection = sample_collection();
        let view = View::build(&collection, &FilterQuery::default(), LineVisibility::Always);

        let mut renderer = Renderer::new();
        let mut canvas = RecordingCanvas::default();
        let summary = renderer.render(&view, &mut canvas);
        fit_viewport(&summary, &mut canvas);

        let fits = canvas.fits();
        assert_eq!(fits.len(), 1);
        let (bounds, padding) = fits[0];
        assert_eq!(padding, FIT_PADDING_PX);
        assert!(bounds.contains(LatLng::new(50.85, 4.35)));
        assert!(bounds.contains(LatLng::new(50.84, 4.36)));
    }

    #[test]
    fn fit_falls_back_to_lines_when_no_markers_survive() {
        let anna = LatLng::new(50.85, 4.35);
        let brussels = LatLng::new(50.84, 4.36);
        let collection = FeatureCollection::new(vec![
            point_at("1", "Anna", "Person", anna),
            line_between(("1", "Anna"), ("2", "Brussels"), [anna, brussels]),
        ]);

        // Nothing matches the search, but the line stays visible.
        let view = View::build(
            &collection,
            &FilterQuery::new("zzz", TypeFilter::All),
            LineVisibility::Always,
        );

        let mut renderer = Renderer::new();
        let mut canvas = RecordingCanvas::default();
        let summary = renderer.render(&view, &mut canvas);
        fit_viewport(&summary, &mut canvas);

        assert_eq!(summary.markers, 0);
        let fits = canvas.fits();
        assert_eq!(fits.len(), 1);
        assert!(fits[0].0.contains(anna));
    }

    #[test]
    fn empty_render_leaves_the_viewport_alone() {
        let collection = sample_collection();
        let view = View::build(
            &collection,
            &FilterQuery::new("zzz", TypeFilter::All),
            LineVisibility::BothEndpoints,
        );

        let mut renderer = Renderer::new();
        let mut canvas = RecordingCanvas::default();
        let summary = renderer.render(&view, &mut canvas);
        fit_viewport(&summary, &mut canvas);

        assert_eq!(summary.markers, 0);
        assert!(canvas.fits().is_empty());
        assert!(canvas.attached.is_empty());
    }
}

mod scenario {
    use super::*;

    /// Filtering to persons keeps the Anna marker and, per the documented
    /// relaxation, still renders the connecting line.
    #[test]
    fn person_filter_keeps_anna_and_the_line() {
        let collection = sample_collection();
        let view = View::build(
            &collection,
            &FilterQuery::new("", TypeFilter::Only("Person".to_string())),
            LineVisibility::Always,
        );

        let mut renderer = Renderer::new();
        let mut canvas = RecordingCanvas::default();
        let summary = renderer.render(&view, &mut canvas);

        assert_eq!(summary.markers, 1);
        assert_eq!(summary.paths, 1);

        let layers = canvas.attached_layers();
        let Layer::Cluster(cluster) = layers[0] else {
            panic!("expected a cluster layer");
        };
        assert!(cluster.markers[0].popup.contains("Anna"));
        assert!(matches!(layers[1], Layer::Path(_)));
    }
}
