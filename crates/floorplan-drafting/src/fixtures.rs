//! Furniture and sanitary fixtures.
//!
//! A room's name selects a [`RoomCategory`] once; the category's
//! [`FixtureSet`] places its catalog at offsets proportional to the room
//! size, capped so large rooms do not get giant furniture.

use std::fmt;

use floorplan_ir::Rect;
use serde::{Deserialize, Serialize};

use crate::sink::DrawingSink;
use crate::types::{Layer, LineWeight, Point2D, TextAlign};

/// Room category inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    /// Toilet, sink, tub.
    Bathroom,
    /// Counter, sink, stove, dining table with chairs.
    Kitchen,
    /// Bed, pillow, nightstand, wardrobe.
    Bedroom,
    /// Sofa, coffee table, TV cabinet.
    Living,
    /// Car, workbench.
    Garage,
    /// No fixtures.
    Other,
}

/// Name keywords per category. Checked in order, first match wins, so
/// "Bathroom" never falls through to the bedroom's "bed".
const KEYWORDS: &[(RoomCategory, &[&str])] = &[
    (RoomCategory::Bathroom, &["bathroom", "bath", "wc", "toilet"]),
    (RoomCategory::Kitchen, &["kitchen", "dining"]),
    (RoomCategory::Bedroom, &["bedroom", "bed"]),
    (RoomCategory::Living, &["living", "lounge", "family"]),
    (RoomCategory::Garage, &["garage"]),
];

impl RoomCategory {
    /// Category for a room name, matched case-insensitively by substring.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| name.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(RoomCategory::Other)
    }

    /// Fixture catalog for this category, if it has one.
    pub fn fixture_set(&self) -> Option<&'static dyn FixtureSet> {
        match self {
            RoomCategory::Bathroom => Some(&Bathroom),
            RoomCategory::Kitchen => Some(&Kitchen),
            RoomCategory::Bedroom => Some(&Bedroom),
            RoomCategory::Living => Some(&Living),
            RoomCategory::Garage => Some(&Garage),
            RoomCategory::Other => None,
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomCategory::Bathroom => "bathroom",
            RoomCategory::Kitchen => "kitchen",
            RoomCategory::Bedroom => "bedroom",
            RoomCategory::Living => "living",
            RoomCategory::Garage => "garage",
            RoomCategory::Other => "other",
        };
        f.write_str(name)
    }
}

/// Outline of a fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FixtureShape {
    /// Axis-aligned rectangle, drawn as a closed five-point polyline.
    Rectangle {
        /// Center position.
        center: Point2D,
        /// Extent along x.
        width: f64,
        /// Extent along y.
        length: f64,
    },
    /// Circle.
    Circle {
        /// Center position.
        center: Point2D,
        /// Radius.
        radius: f64,
    },
}

impl FixtureShape {
    fn rect(cx: f64, cy: f64, width: f64, length: f64) -> Self {
        FixtureShape::Rectangle {
            center: Point2D::new(cx, cy),
            width,
            length,
        }
    }

    fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        FixtureShape::Circle {
            center: Point2D::new(cx, cy),
            radius,
        }
    }

    /// Center of the shape.
    pub fn center(&self) -> Point2D {
        match self {
            FixtureShape::Rectangle { center, .. } | FixtureShape::Circle { center, .. } => *center,
        }
    }

    /// Closed outline of a rectangle, starting and ending at its min corner.
    pub fn outline(&self) -> Option<[Point2D; 5]> {
        match *self {
            FixtureShape::Rectangle {
                center,
                width,
                length,
            } => {
                let (x0, x1) = (center.x - width / 2.0, center.x + width / 2.0);
                let (y0, y1) = (center.y - length / 2.0, center.y + length / 2.0);
                Some([
                    Point2D::new(x0, y0),
                    Point2D::new(x1, y0),
                    Point2D::new(x1, y1),
                    Point2D::new(x0, y1),
                    Point2D::new(x0, y0),
                ])
            }
            FixtureShape::Circle { .. } => None,
        }
    }
}

/// One placed fixture with an optional caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Catalog name, e.g. `"toilet"`.
    pub name: &'static str,
    /// Outline.
    pub shape: FixtureShape,
    /// Caption text and height, centered on the shape.
    pub label: Option<(&'static str, f64)>,
}

impl Fixture {
    fn new(name: &'static str, shape: FixtureShape) -> Self {
        Self {
            name,
            shape,
            label: None,
        }
    }

    fn labeled(mut self, text: &'static str, height: f64) -> Self {
        self.label = Some((text, height));
        self
    }

    /// Emit the outline on FIXTURES and the caption on TEXT.
    pub fn draw(&self, sink: &mut dyn DrawingSink) {
        match self.shape {
            FixtureShape::Circle { center, radius } => {
                sink.add_circle(center, radius, Layer::Fixtures);
            }
            FixtureShape::Rectangle { .. } => {
                if let Some(outline) = self.shape.outline() {
                    sink.add_polyline(&outline, Layer::Fixtures, LineWeight::BY_LAYER);
                }
            }
        }
        if let Some((text, height)) = self.label {
            sink.add_text(
                text,
                Layer::Text,
                height,
                self.shape.center(),
                TextAlign::MiddleCenter,
            );
        }
    }
}

/// Fixture catalog for one room category.
pub trait FixtureSet: Sync {
    /// Fixtures for a room occupying `room`.
    fn place(&self, room: &Rect) -> Vec<Fixture>;
}

/// Position at fractions of the room's width and length.
fn at(room: &Rect, fx: f64, fy: f64) -> (f64, f64) {
    (room.x + room.width * fx, room.y + room.length * fy)
}

struct Bathroom;

impl FixtureSet for Bathroom {
    fn place(&self, room: &Rect) -> Vec<Fixture> {
        let (w, l) = (room.width, room.length);
        let (toilet_x, toilet_y) = at(room, 0.75, 0.3);
        let (sink_x, sink_y) = at(room, 0.25, 0.3);
        let (tub_x, tub_y) = at(room, 0.5, 0.7);

        vec![
            Fixture::new("toilet", FixtureShape::rect(toilet_x, toilet_y, 0.4, 0.6))
                .labeled("WC", 0.2),
            Fixture::new("sink", FixtureShape::circle(sink_x, sink_y, 0.3)).labeled("SINK", 0.15),
            Fixture::new(
                "tub",
                FixtureShape::rect(tub_x, tub_y, (w * 0.7).min(1.8), (l * 0.3).min(0.8)),
            )
            .labeled("TUB", 0.2),
        ]
    }
}

struct Kitchen;

impl FixtureSet for Kitchen {
    fn place(&self, room: &Rect) -> Vec<Fixture> {
        let (w, l) = (room.width, room.length);

        let (counter_x, counter_y) = at(room, 0.8, 0.5);
        let counter_width = 0.6;
        let mut fixtures = vec![
            Fixture::new(
                "counter",
                FixtureShape::rect(counter_x, counter_y, counter_width, w * 0.6),
            )
            .labeled("COUNTER", 0.15),
            Fixture::new(
                "sink",
                FixtureShape::circle(counter_x - counter_width / 4.0, counter_y, 0.2),
            ),
        ];

        let (stove_x, stove_y) = (counter_x + counter_width / 4.0, counter_y);
        let half = 0.3;
        fixtures.push(Fixture::new(
            "stove",
            FixtureShape::rect(stove_x, stove_y, half * 2.0, half * 2.0),
        ));
        for (dx, dy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            fixtures.push(Fixture::new(
                "burner",
                FixtureShape::circle(stove_x + dx * half / 2.0, stove_y + dy * half / 2.0, 0.05),
            ));
        }

        let (table_x, table_y) = at(room, 0.3, 0.5);
        let (table_w, table_l) = ((w * 0.4).min(1.2), (l * 0.4).min(1.2));
        fixtures.push(
            Fixture::new("table", FixtureShape::rect(table_x, table_y, table_w, table_l))
                .labeled("TABLE", 0.15),
        );
        for (cx, cy) in [
            (table_x, table_y - table_l / 2.0 - 0.2),
            (table_x, table_y + table_l / 2.0 + 0.2),
            (table_x - table_w / 2.0 - 0.2, table_y),
            (table_x + table_w / 2.0 + 0.2, table_y),
        ] {
            fixtures.push(Fixture::new("chair", FixtureShape::circle(cx, cy, 0.2)));
        }

        fixtures
    }
}

struct Bedroom;

impl FixtureSet for Bedroom {
    fn place(&self, room: &Rect) -> Vec<Fixture> {
        let (w, l) = (room.width, room.length);
        let (bed_x, bed_y) = at(room, 0.6, 0.5);
        let (bed_w, bed_l) = ((w * 0.7).min(1.8), (l * 0.5).min(2.0));
        let head_y = bed_y - bed_l / 2.0 + 0.3;
        let (wardrobe_x, wardrobe_y) = at(room, 0.2, 0.2);

        vec![
            Fixture::new("bed", FixtureShape::rect(bed_x, bed_y, bed_w, bed_l)).labeled("BED", 0.25),
            Fixture::new("pillow", FixtureShape::rect(bed_x, head_y, bed_w * 0.8, 0.4)),
            Fixture::new(
                "nightstand",
                FixtureShape::rect(bed_x - bed_w / 2.0 - 0.3, head_y, 0.4, 0.4),
            ),
            Fixture::new(
                "wardrobe",
                FixtureShape::rect(wardrobe_x, wardrobe_y, 0.6, 1.5),
            )
            .labeled("WARDROBE", 0.15),
        ]
    }
}

struct Living;

impl FixtureSet for Living {
    fn place(&self, room: &Rect) -> Vec<Fixture> {
        let (w, l) = (room.width, room.length);
        let (sofa_x, sofa_y) = at(room, 0.3, 0.8);
        let (sofa_w, sofa_l) = ((w * 0.6).min(2.5), (l * 0.25).min(1.0));
        let (tv_x, tv_y) = at(room, 0.7, 0.2);
        let (cabinet_w, cabinet_l) = (1.2, 0.4);
        let (screen_w, screen_l) = (0.8, 0.1);

        vec![
            Fixture::new("sofa", FixtureShape::rect(sofa_x, sofa_y, sofa_w, sofa_l))
                .labeled("SOFA", 0.15),
            Fixture::new(
                "coffee table",
                FixtureShape::rect(sofa_x, sofa_y - sofa_l - 0.5, sofa_w * 0.6, 0.6),
            )
            .labeled("TABLE", 0.1),
            Fixture::new(
                "tv cabinet",
                FixtureShape::rect(tv_x, tv_y, cabinet_w, cabinet_l),
            )
            .labeled("TV", 0.15),
            // Screen sits against the cabinet's min-y edge.
            Fixture::new(
                "tv",
                FixtureShape::rect(
                    tv_x,
                    tv_y - cabinet_l / 2.0 - screen_l / 2.0,
                    screen_w,
                    screen_l,
                ),
            ),
        ]
    }
}

struct Garage;

impl FixtureSet for Garage {
    fn place(&self, room: &Rect) -> Vec<Fixture> {
        let (w, l) = (room.width, room.length);
        let (car_x, car_y) = at(room, 0.5, 0.5);
        let (bench_x, bench_y) = at(room, 0.8, 0.2);

        vec![
            Fixture::new(
                "car",
                FixtureShape::rect(car_x, car_y, (w * 0.8).min(2.2), (l * 0.8).min(4.5)),
            )
            .labeled("CAR", 0.3),
            Fixture::new("workbench", FixtureShape::rect(bench_x, bench_y, 0.6, w * 0.6))
                .labeled("WORKBENCH", 0.15),
        ]
    }
}

/// Fixtures for a room with the given name and bounds. Rooms whose name
/// matches no category get none.
pub fn place_fixtures(name: &str, room: &Rect) -> Vec<Fixture> {
    RoomCategory::from_name(name)
        .fixture_set()
        .map(|set| set.place(room))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Drawing;
    use approx::assert_relative_eq;

    #[test]
    fn test_category_from_name() {
        assert_eq!(RoomCategory::from_name("Master Bathroom"), RoomCategory::Bathroom);
        assert_eq!(RoomCategory::from_name("Guest WC"), RoomCategory::Bathroom);
        assert_eq!(RoomCategory::from_name("KITCHEN"), RoomCategory::Kitchen);
        assert_eq!(RoomCategory::from_name("Dining Room"), RoomCategory::Kitchen);
        assert_eq!(RoomCategory::from_name("Bedroom 2"), RoomCategory::Bedroom);
        assert_eq!(RoomCategory::from_name("Family Room"), RoomCategory::Living);
        assert_eq!(RoomCategory::from_name("Garage"), RoomCategory::Garage);
        assert_eq!(RoomCategory::from_name("Room 1"), RoomCategory::Other);
        assert_eq!(RoomCategory::from_name(""), RoomCategory::Other);
    }

    #[test]
    fn test_first_match_wins() {
        // "bath" is checked before "bed".
        assert_eq!(RoomCategory::from_name("Bed & Bath"), RoomCategory::Bathroom);
        // "dining" is checked before "living".
        assert_eq!(RoomCategory::from_name("Living/Dining"), RoomCategory::Kitchen);
    }

    #[test]
    fn test_other_room_has_no_fixtures() {
        assert!(place_fixtures("Study", &Rect::new(0.0, 0.0, 4.0, 4.0)).is_empty());
        assert!(RoomCategory::Other.fixture_set().is_none());
    }

    #[test]
    fn test_bathroom_layout() {
        let room = Rect::new(2.0, 0.0, 4.0, 5.0);
        let fixtures = place_fixtures("Bathroom", &room);
        let names: Vec<_> = fixtures.iter().map(|f| f.name).collect();
        assert_eq!(names, ["toilet", "sink", "tub"]);

        let toilet = fixtures[0].shape.center();
        assert_relative_eq!(toilet.x, 5.0);
        assert_relative_eq!(toilet.y, 1.5);

        match fixtures[2].shape {
            FixtureShape::Rectangle { width, length, .. } => {
                assert_relative_eq!(width, 1.8);
                assert_relative_eq!(length, 0.8);
            }
            other => panic!("tub should be a rectangle, got {other:?}"),
        }
    }

    #[test]
    fn test_small_bathroom_caps_tub() {
        let fixtures = place_fixtures("bath", &Rect::new(0.0, 0.0, 2.0, 2.0));
        match fixtures[2].shape {
            FixtureShape::Rectangle { width, length, .. } => {
                assert_relative_eq!(width, 1.4);
                assert_relative_eq!(length, 0.6);
            }
            other => panic!("tub should be a rectangle, got {other:?}"),
        }
    }

    #[test]
    fn test_kitchen_catalog() {
        let fixtures = place_fixtures("Kitchen", &Rect::new(0.0, 0.0, 5.0, 4.0));
        let count = |name: &str| fixtures.iter().filter(|f| f.name == name).count();
        assert_eq!(count("counter"), 1);
        assert_eq!(count("stove"), 1);
        assert_eq!(count("burner"), 4);
        assert_eq!(count("chair"), 4);
        assert_eq!(fixtures.len(), 12);
    }

    #[test]
    fn test_bedroom_pillow_at_head() {
        let fixtures = place_fixtures("Bedroom", &Rect::new(0.0, 0.0, 4.0, 5.0));
        let bed = fixtures[0].shape.center();
        let pillow = fixtures[1].shape.center();
        assert_relative_eq!(pillow.x, bed.x);
        // Bed length is min(2.5, 2.0) = 2.0.
        assert_relative_eq!(pillow.y, bed.y - 1.0 + 0.3);
    }

    #[test]
    fn test_rectangle_outline_is_closed() {
        let outline = FixtureShape::rect(1.0, 1.0, 2.0, 4.0).outline().unwrap();
        assert_eq!(outline[0], outline[4]);
        assert_relative_eq!(outline[2].x, 2.0);
        assert_relative_eq!(outline[2].y, 3.0);
        assert!(FixtureShape::circle(0.0, 0.0, 1.0).outline().is_none());
    }

    #[test]
    fn test_draw_uses_fixture_and_text_layers() {
        let mut drawing = Drawing::new();
        for fixture in place_fixtures("Garage", &Rect::new(0.0, 0.0, 6.0, 6.0)) {
            fixture.draw(&mut drawing);
        }
        assert_eq!(drawing.count(Layer::Fixtures), 2);
        let labels: Vec<_> = drawing.texts().map(|(t, _)| t).collect();
        assert_eq!(labels, ["CAR", "WORKBENCH"]);
    }
}
