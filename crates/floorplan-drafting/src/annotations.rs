//! Building outline, dimensions and captions.

use floorplan_ir::{Footprint, Room};

use crate::settings::DraftingSettings;
use crate::sink::DrawingSink;
use crate::types::{Layer, LineWeight, LinearDimension, Point2D, TextAlign};

/// Closed outer and inner boundary rings, each five points starting at the
/// min corner.
pub fn boundary_rings(footprint: &Footprint) -> ([Point2D; 5], [Point2D; 5]) {
    let (w, l, t) = (footprint.width, footprint.length, footprint.wall_thickness);
    let ring = |x0: f64, y0: f64, x1: f64, y1: f64| {
        [
            Point2D::new(x0, y0),
            Point2D::new(x1, y0),
            Point2D::new(x1, y1),
            Point2D::new(x0, y1),
            Point2D::new(x0, y0),
        ]
    };
    (ring(0.0, 0.0, w, l), ring(t, t, w - t, l - t))
}

/// Outer and inner wall outlines plus one cross-section quad per wall.
pub fn draw_outline(footprint: &Footprint, sink: &mut dyn DrawingSink) {
    let (outer, inner) = boundary_rings(footprint);
    sink.add_polyline(&outer, Layer::Walls, LineWeight::WALL);
    sink.add_polyline(&inner, Layer::Walls, LineWeight::WALL);

    for i in 0..4 {
        let quad = [outer[i], outer[i + 1], inner[i + 1], inner[i], outer[i]];
        sink.add_polyline(&quad, Layer::WallThickness, LineWeight::FINE);
    }
}

/// Overall width above the building and length to its right.
pub fn draw_primary_dimensions(
    footprint: &Footprint,
    settings: &DraftingSettings,
    sink: &mut dyn DrawingSink,
) {
    let (w, l) = (footprint.width, footprint.length);
    let offset = settings.overall_dimension_offset;
    let height = settings.primary_dimension_text_height;

    sink.add_linear_dimension(
        LinearDimension::new(
            Point2D::new(0.0, l + offset),
            Point2D::new(0.0, l),
            Point2D::new(w, l),
            0.0,
            height,
        ),
        Layer::Dimensions,
    );
    sink.add_linear_dimension(
        LinearDimension::new(
            Point2D::new(w + offset, 0.0),
            Point2D::new(w, 0.0),
            Point2D::new(w, l),
            90.0,
            height,
        ),
        Layer::Dimensions,
    );
}

/// Overall width below the building and length to its left.
pub fn draw_secondary_dimensions(
    footprint: &Footprint,
    settings: &DraftingSettings,
    sink: &mut dyn DrawingSink,
) {
    let (w, l) = (footprint.width, footprint.length);
    let offset = settings.overall_dimension_offset;
    let height = settings.secondary_dimension_text_height;

    sink.add_linear_dimension(
        LinearDimension::new(
            Point2D::new(0.0, -offset),
            Point2D::ORIGIN,
            Point2D::new(w, 0.0),
            0.0,
            height,
        ),
        Layer::Dimensions,
    );
    sink.add_linear_dimension(
        LinearDimension::new(
            Point2D::new(-offset, 0.0),
            Point2D::ORIGIN,
            Point2D::new(0.0, l),
            90.0,
            height,
        ),
        Layer::Dimensions,
    );
}

/// Caption for the wall thickness.
pub fn wall_thickness_caption(thickness: f64) -> String {
    format!("Wall Thickness: {thickness}m")
}

/// Wall-thickness caption above the top dimension, with a small folded
/// section symbol beneath it.
pub fn draw_wall_thickness_note(footprint: &Footprint, sink: &mut dyn DrawingSink) {
    let (w, l, t) = (footprint.width, footprint.length, footprint.wall_thickness);
    let mid = w / 2.0;

    sink.add_text(
        &wall_thickness_caption(t),
        Layer::Text,
        0.2,
        Point2D::new(mid, l + 0.9),
        TextAlign::MiddleCenter,
    );

    let y0 = l + 0.7;
    let y1 = y0 - t;
    let (a, b) = (mid - 0.5, mid + 0.5);
    for (start, end) in [
        ((a, y0), (b, y0)),
        ((a + t, y1), (b - t, y1)),
        ((a, y0), (a + t, y1)),
        ((b, y0), (b - t, y1)),
    ] {
        sink.add_line(
            start.into(),
            end.into(),
            Layer::Dimensions,
            LineWeight::BY_LAYER,
        );
    }
}

/// Area caption such as `Area: 12.50m²`.
pub fn area_caption(area: f64) -> String {
    format!("Area: {area:.2}m²")
}

/// Room name and area at the room center, plus its width and length
/// dimensions along the top and left sides.
pub fn draw_room_labels(room: &Room, settings: &DraftingSettings, sink: &mut dyn DrawingSink) {
    let bounds = &room.bounds;
    let (cx, cy) = bounds.center();
    let min_side = bounds.min_side();
    let offset = settings.room_dimension_offset;
    let height = settings.room_dimension_text_height;

    sink.add_text(
        room.name(),
        Layer::Text,
        min_side / 10.0,
        Point2D::new(cx, cy),
        TextAlign::MiddleCenter,
    );

    let corner = Point2D::new(bounds.x, bounds.y);
    sink.add_linear_dimension(
        LinearDimension::new(
            Point2D::new(bounds.x, bounds.y - offset),
            corner,
            Point2D::new(bounds.max_x(), bounds.y),
            0.0,
            height,
        ),
        Layer::Dimensions,
    );
    sink.add_linear_dimension(
        LinearDimension::new(
            Point2D::new(bounds.x - offset, bounds.y),
            corner,
            Point2D::new(bounds.x, bounds.max_y()),
            90.0,
            height,
        ),
        Layer::Dimensions,
    );

    sink.add_text(
        &area_caption(bounds.area()),
        Layer::Text,
        min_side / 15.0,
        Point2D::new(cx, cy - min_side / 7.0),
        TextAlign::MiddleCenter,
    );
}

/// Scale note and drawing title centered below the building.
pub fn draw_title_block(footprint: &Footprint, sink: &mut dyn DrawingSink) {
    let mid = footprint.width / 2.0;
    let y = -1.5;
    sink.add_text(
        "SCALE 1:100",
        Layer::Text,
        0.3,
        Point2D::new(mid, y),
        TextAlign::MiddleCenter,
    );
    sink.add_text(
        "FLOOR PLAN",
        Layer::Text,
        0.4,
        Point2D::new(mid, y - 0.8),
        TextAlign::MiddleCenter,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Drawing, Entity};
    use approx::assert_relative_eq;
    use floorplan_ir::{Rect, RoomConfig};

    #[test]
    fn test_outline_rings() {
        let footprint = Footprint::new(10.0, 8.0, 0.15);
        let mut drawing = Drawing::new();
        draw_outline(&footprint, &mut drawing);

        assert_eq!(drawing.count(Layer::Walls), 2);
        assert_eq!(drawing.count(Layer::WallThickness), 4);

        let (outer, inner) = boundary_rings(&footprint);
        assert_eq!(outer[0], outer[4]);
        assert_eq!(outer[2], Point2D::new(10.0, 8.0));
        assert_relative_eq!(inner[0].x, 0.15);
        assert_relative_eq!(inner[2].x, 9.85);
        assert_relative_eq!(inner[2].y, 7.85);
    }

    #[test]
    fn test_thickness_quads_span_the_wall() {
        let footprint = Footprint::new(10.0, 8.0, 0.2);
        let mut drawing = Drawing::new();
        draw_outline(&footprint, &mut drawing);

        for entity in drawing.on_layer(Layer::WallThickness) {
            let Entity::Polyline { points, weight, .. } = entity else {
                panic!("expected polyline, got {entity:?}");
            };
            assert_eq!(points.len(), 5);
            assert_eq!(points[0], points[4]);
            assert_eq!(*weight, LineWeight::FINE);
        }
    }

    #[test]
    fn test_wall_thickness_note() {
        let footprint = Footprint::new(10.0, 8.0, 0.15);
        let mut drawing = Drawing::new();
        draw_wall_thickness_note(&footprint, &mut drawing);

        assert_eq!(drawing.count(Layer::Dimensions), 4);
        let (text, anchor) = drawing.texts().next().unwrap();
        assert_eq!(text, "Wall Thickness: 0.15m");
        assert_relative_eq!(anchor.x, 5.0);
        assert_relative_eq!(anchor.y, 8.9);
    }

    #[test]
    fn test_room_labels() {
        let room = Room::new(Rect::new(0.0, 0.0, 5.0, 2.5), RoomConfig::numbered(2));
        let mut drawing = Drawing::new();
        draw_room_labels(&room, &DraftingSettings::default(), &mut drawing);

        let texts: Vec<_> = drawing.texts().collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0, "Room 2");
        assert_eq!(texts[1].0, "Area: 12.50m²");
        assert_relative_eq!(texts[1].1.y, 1.25 - 2.5 / 7.0);

        let dims: Vec<_> = drawing
            .entities
            .iter()
            .filter_map(|e| match e {
                Entity::Dimension { dimension, .. } => Some(*dimension),
                _ => None,
            })
            .collect();
        assert_eq!(dims.len(), 2);
        assert_relative_eq!(dims[0].measurement(), 5.0);
        assert_relative_eq!(dims[1].measurement(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_overall_dimensions() {
        let footprint = Footprint::new(12.0, 9.0, 0.15);
        let settings = DraftingSettings::default();
        let mut drawing = Drawing::new();
        draw_primary_dimensions(&footprint, &settings, &mut drawing);
        draw_secondary_dimensions(&footprint, &settings, &mut drawing);

        let dims: Vec<_> = drawing
            .entities
            .iter()
            .filter_map(|e| match e {
                Entity::Dimension { dimension, .. } => Some(*dimension),
                _ => None,
            })
            .collect();
        let heights: Vec<_> = dims.iter().map(|d| d.text_height).collect();
        assert_eq!(heights, [0.25, 0.25, 0.2, 0.2]);
        assert_relative_eq!(dims[0].base.y, 9.5);
        assert_relative_eq!(dims[1].base.x, 12.5);
        assert_relative_eq!(dims[2].base.y, -0.5);
        assert_relative_eq!(dims[3].base.x, -0.5);
    }

    #[test]
    fn test_title_block() {
        let mut drawing = Drawing::new();
        draw_title_block(&Footprint::new(10.0, 10.0, 0.15), &mut drawing);
        let texts: Vec<_> = drawing.texts().collect();
        assert_eq!(texts[0].0, "SCALE 1:100");
        assert_relative_eq!(texts[1].1.y, -2.3);
    }
}
