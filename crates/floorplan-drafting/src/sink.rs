//! Drawing sink abstraction and an in-memory recording drawing.
//!
//! Geometry routines never know which output format they feed. They push
//! primitives through [`DrawingSink`]; the DXF writer in the `floorplan`
//! crate is one implementation, [`Drawing`] is another, used to inspect
//! what a drawing pass emits.

use serde::{Deserialize, Serialize};

use crate::types::{BoundingBox2D, Layer, LineWeight, LinearDimension, Point2D, TextAlign};

/// Receiver of drawing primitives.
pub trait DrawingSink {
    /// Straight line segment.
    fn add_line(&mut self, start: Point2D, end: Point2D, layer: Layer, weight: LineWeight);

    /// Open polyline through `points`. A closed outline repeats its first
    /// point at the end.
    fn add_polyline(&mut self, points: &[Point2D], layer: Layer, weight: LineWeight);

    /// Circular arc, drawn counterclockwise from `start_angle` to
    /// `end_angle` (degrees).
    fn add_arc(
        &mut self,
        center: Point2D,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        layer: Layer,
        weight: LineWeight,
    );

    /// Full circle.
    fn add_circle(&mut self, center: Point2D, radius: f64, layer: Layer);

    /// Single-line text.
    fn add_text(
        &mut self,
        content: &str,
        layer: Layer,
        height: f64,
        anchor: Point2D,
        align: TextAlign,
    );

    /// Linear dimension.
    fn add_linear_dimension(&mut self, dimension: LinearDimension, layer: Layer);
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Entity {
    /// Line segment.
    Line {
        start: Point2D,
        end: Point2D,
        layer: Layer,
        weight: LineWeight,
    },
    /// Open polyline.
    Polyline {
        points: Vec<Point2D>,
        layer: Layer,
        weight: LineWeight,
    },
    /// Circular arc (degrees, counterclockwise).
    Arc {
        center: Point2D,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        layer: Layer,
        weight: LineWeight,
    },
    /// Circle.
    Circle {
        center: Point2D,
        radius: f64,
        layer: Layer,
    },
    /// Text.
    Text {
        content: String,
        layer: Layer,
        height: f64,
        anchor: Point2D,
        align: TextAlign,
    },
    /// Linear dimension.
    Dimension {
        dimension: LinearDimension,
        layer: Layer,
    },
}

impl Entity {
    /// Layer the entity is drawn on.
    pub fn layer(&self) -> Layer {
        match self {
            Entity::Line { layer, .. }
            | Entity::Polyline { layer, .. }
            | Entity::Arc { layer, .. }
            | Entity::Circle { layer, .. }
            | Entity::Text { layer, .. }
            | Entity::Dimension { layer, .. } => *layer,
        }
    }

    /// Extend `bb` with the entity's extent. Text contributes its anchor only.
    fn include_in(&self, bb: &mut BoundingBox2D) {
        match self {
            Entity::Line { start, end, .. } => {
                bb.include_point(*start);
                bb.include_point(*end);
            }
            Entity::Polyline { points, .. } => {
                for p in points {
                    bb.include_point(*p);
                }
            }
            Entity::Arc { center, radius, .. } | Entity::Circle { center, radius, .. } => {
                bb.include_point(Point2D::new(center.x - radius, center.y - radius));
                bb.include_point(Point2D::new(center.x + radius, center.y + radius));
            }
            Entity::Text { anchor, .. } => bb.include_point(*anchor),
            Entity::Dimension { dimension, .. } => {
                let (a, b) = dimension.dimension_line();
                for p in [dimension.p1, dimension.p2, a, b] {
                    bb.include_point(p);
                }
            }
        }
    }
}

/// In-memory drawing that records every primitive in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Recorded entities, in the order they were added.
    pub entities: Vec<Entity>,
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities on `layer`, in emission order.
    pub fn on_layer(&self, layer: Layer) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.layer() == layer)
    }

    /// Number of entities on `layer`.
    pub fn count(&self, layer: Layer) -> usize {
        self.on_layer(layer).count()
    }

    /// Texts with their anchors, in emission order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point2D)> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Text {
                content, anchor, ..
            } => Some((content.as_str(), *anchor)),
            _ => None,
        })
    }

    /// Extent of all entities.
    pub fn bounds(&self) -> BoundingBox2D {
        let mut bb = BoundingBox2D::empty();
        for entity in &self.entities {
            entity.include_in(&mut bb);
        }
        bb
    }
}

impl DrawingSink for Drawing {
    fn add_line(&mut self, start: Point2D, end: Point2D, layer: Layer, weight: LineWeight) {
        self.entities.push(Entity::Line {
            start,
            end,
            layer,
            weight,
        });
    }

    fn add_polyline(&mut self, points: &[Point2D], layer: Layer, weight: LineWeight) {
        if points.len() < 2 {
            return;
        }
        self.entities.push(Entity::Polyline {
            points: points.to_vec(),
            layer,
            weight,
        });
    }

    fn add_arc(
        &mut self,
        center: Point2D,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        layer: Layer,
        weight: LineWeight,
    ) {
        self.entities.push(Entity::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            layer,
            weight,
        });
    }

    fn add_circle(&mut self, center: Point2D, radius: f64, layer: Layer) {
        self.entities.push(Entity::Circle {
            center,
            radius,
            layer,
        });
    }

    fn add_text(
        &mut self,
        content: &str,
        layer: Layer,
        height: f64,
        anchor: Point2D,
        align: TextAlign,
    ) {
        self.entities.push(Entity::Text {
            content: content.to_string(),
            layer,
            height,
            anchor,
            align,
        });
    }

    fn add_linear_dimension(&mut self, dimension: LinearDimension, layer: Layer) {
        self.entities.push(Entity::Dimension { dimension, layer });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_records_in_order_with_layers() {
        let mut drawing = Drawing::new();
        drawing.add_line(
            Point2D::ORIGIN,
            Point2D::new(1.0, 0.0),
            Layer::Walls,
            LineWeight::WALL,
        );
        drawing.add_circle(Point2D::new(2.0, 2.0), 0.5, Layer::Fixtures);
        drawing.add_text(
            "WC",
            Layer::Text,
            0.2,
            Point2D::new(2.0, 2.0),
            TextAlign::MiddleCenter,
        );

        assert_eq!(drawing.len(), 3);
        assert_eq!(drawing.count(Layer::Walls), 1);
        assert_eq!(drawing.count(Layer::Doors), 0);
        assert_eq!(drawing.entities[1].layer(), Layer::Fixtures);
        assert_eq!(drawing.texts().map(|(t, _)| t).collect::<Vec<_>>(), ["WC"]);
    }

    #[test]
    fn test_degenerate_polyline_is_skipped() {
        let mut drawing = Drawing::new();
        drawing.add_polyline(&[Point2D::ORIGIN], Layer::Walls, LineWeight::WALL);
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_bounds() {
        let mut drawing = Drawing::new();
        drawing.add_polyline(
            &[
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(4.0, 3.0),
            ],
            Layer::Walls,
            LineWeight::WALL,
        );
        drawing.add_circle(Point2D::new(4.0, 3.0), 1.0, Layer::Fixtures);

        let bb = drawing.bounds();
        assert_relative_eq!(bb.min_x, 0.0);
        assert_relative_eq!(bb.max_x, 5.0);
        assert_relative_eq!(bb.max_y, 4.0);
    }
}
