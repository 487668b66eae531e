//! Popup body rendering for markers and paths.
//!
//! Popups are small HTML fragments handed to the map widget's popup binding.
//! All dataset text is escaped before it is interpolated.

use crate::models::{Direction, LineFeature, PointFeature, Relation};

/// Popup body for a point feature: label, type, and the relation list.
///
/// Relations are ordered with all outgoing entries before all incoming
/// ones, preserving source order within each group. A point without
/// relations says so instead of showing an empty list.
pub fn point_popup(point: &PointFeature) -> String {
    let mut html = format!(
        "<b>{}</b><br>Type: {}",
        escape(&point.label),
        escape(&point.entity_type)
    );

    if point.relations.is_empty() {
        html.push_str("<br><i>no relations</i>");
        return html;
    }

    html.push_str("<ul class=\"relations\">");
    for relation in sorted_relations(&point.relations) {
        let arrow = match relation.dir {
            Direction::Outgoing => "→",
            Direction::Incoming => "←",
        };
        html.push_str(&format!(
            "<li>{} {}: {}</li>",
            arrow,
            escape(&relation.rel),
            escape(&relation.target)
        ));
    }
    html.push_str("</ul>");
    html
}

/// Popup body for a relationship path.
pub fn line_popup(line: &LineFeature) -> String {
    format!(
        "<b>Relation:</b> {}<br><b>From:</b> {}<br><b>To:</b> {}",
        escape(&line.relationship),
        escape(&line.source_label),
        escape(&line.target_label)
    )
}

/// Relations ordered for display: outgoing first, then incoming, stable
/// within each group.
fn sorted_relations(relations: &[Relation]) -> Vec<&Relation> {
    let mut sorted: Vec<&Relation> = relations.iter().collect();
    sorted.sort_by_key(|r| match r.dir {
        Direction::Outgoing => 0,
        Direction::Incoming => 1,
    });
    sorted
}

/// Minimal HTML escaping for dataset-controlled text.
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatLng;

    fn relation(rel: &str, dir: Direction, target: &str) -> Relation {
        Relation {
            rel: rel.to_string(),
            dir,
            target: target.to_string(),
        }
    }

    fn point_with_relations(relations: Vec<Relation>) -> PointFeature {
        PointFeature {
            id: "1".to_string(),
            label: "Anna".to_string(),
            entity_type: "Person".to_string(),
            relations,
            position: LatLng::new(50.85, 4.35),
        }
    }

    #[test]
    fn outgoing_relations_come_before_incoming() {
        let point = point_with_relations(vec![
            relation("woont in", Direction::Incoming, "Brussels"),
            relation("kent", Direction::Outgoing, "Bob"),
            relation("werkt bij", Direction::Incoming, "Acme"),
            relation("bezoekt", Direction::Outgoing, "Paris"),
        ]);

        let html = point_popup(&point);
        let kent = html.find("kent").unwrap();
        let bezoekt = html.find("bezoekt").unwrap();
        let woont = html.find("woont in").unwrap();
        let werkt = html.find("werkt bij").unwrap();

        // Outgoing block first, source order kept inside each block.
        assert!(kent < bezoekt);
        assert!(bezoekt < woont);
        assert!(woont < werkt);
    }

    #[test]
    fn point_without_relations_says_so() {
        let html = point_popup(&point_with_relations(vec![]));
        assert!(html.contains("no relations"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn line_popup_names_relationship_and_endpoints() {
        let line = LineFeature {
            relationship: "In Land".to_string(),
            source_id: "2".to_string(),
            target_id: "3".to_string(),
            source_label: "Brussels".to_string(),
            target_label: "Belgium".to_string(),
            path: [LatLng::new(50.85, 4.35), LatLng::new(50.5, 4.47)],
        };

        let html = line_popup(&line);
        assert!(html.contains("In Land"));
        assert!(html.contains("From:</b> Brussels"));
        assert!(html.contains("To:</b> Belgium"));
    }

    #[test]
    fn dataset_text_is_escaped() {
        let mut point = point_with_relations(vec![]);
        point.label = "<script>alert(1)</script>".to_string();

        let html = point_popup(&point);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
