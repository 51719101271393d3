//! Wall and opening geometry.
//!
//! All four room sides are handled by one routine working in a wall-local
//! frame: `u` runs along the side from its start corner, `v` points out of
//! the room. [`WallFrame::point`] maps local coordinates to world space.
//!
//! | side   | origin         | +u  | +v  | door swing |
//! |--------|----------------|-----|-----|------------|
//! | left   | `(x, y)`       | +y  | -x  | 270 -> 90  |
//! | top    | `(x, y)`       | +x  | -y  | 0 -> 180   |
//! | right  | `(x + w, y)`   | +y  | +x  | 90 -> 270  |
//! | bottom | `(x, y + l)`   | +x  | +y  | 180 -> 0   |

use floorplan_ir::{FloorplanError, Footprint, OpeningKind, Rect, Result, Room, WallSide};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::jitter::Jitter;
use crate::settings::DraftingSettings;
use crate::sink::DrawingSink;
use crate::types::{Layer, LineWeight, LinearDimension, Point2D, TextAlign};

/// Local coordinate frame of one room side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFrame {
    /// Which side this frame describes.
    pub side: WallSide,
    /// World position of `u = 0, v = 0`.
    pub origin: Point2D,
    /// Unit vector of `+u`.
    pub along: (f64, f64),
    /// Unit vector of `+v`, pointing out of the room.
    pub outward: (f64, f64),
    /// Length of the side.
    pub span: f64,
}

impl WallFrame {
    /// Frame for `side` of `rect`.
    pub fn new(rect: &Rect, side: WallSide) -> Self {
        let (origin, along, outward) = match side {
            WallSide::Left => (Point2D::new(rect.x, rect.y), (0.0, 1.0), (-1.0, 0.0)),
            WallSide::Top => (Point2D::new(rect.x, rect.y), (1.0, 0.0), (0.0, -1.0)),
            WallSide::Right => (Point2D::new(rect.max_x(), rect.y), (0.0, 1.0), (1.0, 0.0)),
            WallSide::Bottom => (Point2D::new(rect.x, rect.max_y()), (1.0, 0.0), (0.0, 1.0)),
        };
        Self {
            side,
            origin,
            along,
            outward,
            span: side.span(rect),
        }
    }

    /// World point at local `(u, v)`.
    pub fn point(&self, u: f64, v: f64) -> Point2D {
        Point2D::new(
            self.origin.x + u * self.along.0 + v * self.outward.0,
            self.origin.y + u * self.along.1 + v * self.outward.1,
        )
    }

    /// Door swing arc `(start, end)` in degrees, counterclockwise.
    pub fn swing_angles(&self) -> (f64, f64) {
        match self.side {
            WallSide::Left => (270.0, 90.0),
            WallSide::Top => (0.0, 180.0),
            WallSide::Right => (90.0, 270.0),
            WallSide::Bottom => (180.0, 0.0),
        }
    }

    /// Measurement angle for dimensions along this side.
    pub fn dimension_angle(&self) -> f64 {
        if self.side.is_vertical() {
            90.0
        } else {
            0.0
        }
    }

    /// Alignment that keeps a label on the outside of the wall.
    pub fn label_align(&self) -> TextAlign {
        match self.side {
            WallSide::Left => TextAlign::MiddleRight,
            WallSide::Top => TextAlign::TopCenter,
            WallSide::Right => TextAlign::MiddleLeft,
            WallSide::Bottom => TextAlign::BottomCenter,
        }
    }

    /// Wall line along `v` from `u0` to `u1`, skipped when empty.
    fn segment(
        &self,
        sink: &mut dyn DrawingSink,
        u0: f64,
        u1: f64,
        v: f64,
        layer: Layer,
        weight: LineWeight,
    ) {
        if u1 > u0 {
            sink.add_line(self.point(u0, v), self.point(u1, v), layer, weight);
        }
    }

    /// Line across the wall thickness at `u`.
    fn jamb(&self, sink: &mut dyn DrawingSink, u: f64, thickness: f64, weight: LineWeight) {
        sink.add_line(
            self.point(u, 0.0),
            self.point(u, -thickness),
            Layer::Windows,
            weight,
        );
    }
}

/// Which sides of a room can take doors and windows, and which are shared
/// with a neighbour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallClassification {
    /// Sides eligible for doors, in classification order.
    pub door_walls: Vec<WallSide>,
    /// Sides on the footprint boundary, eligible for windows.
    pub window_walls: Vec<WallSide>,
    /// Sides not on the footprint boundary.
    pub interior: Vec<WallSide>,
}

impl WallClassification {
    /// Classify the sides of `rect` against `footprint`.
    ///
    /// Left and top sides take doors only when they are shared with another
    /// room. Right and bottom sides always take doors, exterior or not.
    pub fn classify(rect: &Rect, footprint: &Footprint, tolerance: f64) -> Self {
        let exterior = |side: WallSide| match side {
            WallSide::Left => rect.x <= tolerance,
            WallSide::Top => rect.y <= tolerance,
            WallSide::Right => rect.max_x() >= footprint.width - tolerance,
            WallSide::Bottom => rect.max_y() >= footprint.length - tolerance,
        };

        let door_walls = WallSide::ALL
            .into_iter()
            .filter(|side| match side {
                WallSide::Left => rect.x > tolerance,
                WallSide::Top => rect.y > tolerance,
                WallSide::Right | WallSide::Bottom => true,
            })
            .collect();
        let window_walls = WallSide::ALL.into_iter().filter(|s| exterior(*s)).collect();
        let interior = WallSide::ALL.into_iter().filter(|s| !exterior(*s)).collect();

        Self {
            door_walls,
            window_walls,
            interior,
        }
    }

    /// Eligible sides for openings of `kind`.
    pub fn walls_for(&self, kind: OpeningKind) -> &[WallSide] {
        match kind {
            OpeningKind::Door => &self.door_walls,
            OpeningKind::Window => &self.window_walls,
        }
    }
}

/// A placed door or window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Door or window.
    pub kind: OpeningKind,
    /// Zero-based index among the room's openings of this kind.
    pub index: usize,
    /// Side the opening sits on.
    pub side: WallSide,
    /// Distance from the side's start corner to the opening.
    pub start: f64,
    /// Opening width.
    pub width: f64,
}

impl Opening {
    /// Far edge of the opening along the side.
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    /// Label such as `D1-2` for the second door of room 1.
    pub fn label(&self, room_number: usize) -> String {
        format!(
            "{}{}-{}",
            self.kind.label_prefix(),
            room_number,
            self.index + 1
        )
    }
}

/// Openings chosen for one room.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomOpenings {
    /// Doors in placement order.
    pub doors: Vec<Opening>,
    /// Windows in placement order.
    pub windows: Vec<Opening>,
}

impl RoomOpenings {
    /// All openings, doors first.
    pub fn iter(&self) -> impl Iterator<Item = &Opening> {
        self.doors.iter().chain(self.windows.iter())
    }
}

/// Place the doors and windows of `room`.
///
/// At most one opening of each kind goes on each eligible side; requests
/// beyond that are dropped. An opening wider than the side it lands on is
/// an error; any other opening is shifted to lie within its side. Samples
/// are drawn doors first, then windows.
pub fn plan_openings(
    room_number: usize,
    room: &Room,
    walls: &WallClassification,
    jitter: &mut dyn Jitter,
) -> Result<RoomOpenings> {
    let mut planned = RoomOpenings::default();

    for kind in [OpeningKind::Door, OpeningKind::Window] {
        let eligible = walls.walls_for(kind);
        let requested = room.config.opening_count(kind) as usize;
        let count = requested.min(eligible.len());
        let width = room.config.opening_width(kind);

        for index in 0..count {
            let side = eligible[index % eligible.len()];
            let span = side.span(&room.bounds);
            if width > span {
                return Err(FloorplanError::OpeningTooWide {
                    room: room_number,
                    name: room.config.name.clone(),
                    kind,
                    side,
                    width,
                    span,
                });
            }

            let start = match kind {
                OpeningKind::Door => {
                    span / 2.0 - width / 2.0 + jitter.sample(-span / 4.0, span / 4.0)
                }
                OpeningKind::Window => jitter.sample(span * 0.2, span * 0.8) - width / 2.0,
            };
            // Keep wide openings inside the side.
            let start = start.clamp(0.0, span - width);
            debug!(room = room_number, %kind, %side, start, width, "placed opening");

            let opening = Opening {
                kind,
                index,
                side,
                start,
                width,
            };
            match kind {
                OpeningKind::Door => planned.doors.push(opening),
                OpeningKind::Window => planned.windows.push(opening),
            }
        }
    }

    Ok(planned)
}

/// Double wall line along a side shared with a neighbour.
pub fn draw_interior_wall(frame: &WallFrame, thickness: f64, sink: &mut dyn DrawingSink) {
    frame.segment(sink, 0.0, frame.span, 0.0, Layer::Walls, LineWeight::WALL);
    frame.segment(
        sink,
        thickness,
        frame.span - thickness,
        -thickness,
        Layer::Walls,
        LineWeight::WALL,
    );
}

/// Draw a door: wall runs on either side, swing arc, swing line and, when
/// there is room past the opening, its dimension and label.
///
/// Returns `true` if the dimension and label were drawn.
pub fn draw_door(
    frame: &WallFrame,
    door: &Opening,
    room_number: usize,
    settings: &DraftingSettings,
    sink: &mut dyn DrawingSink,
) -> bool {
    let (p, w) = (door.start, door.width);
    frame.segment(sink, 0.0, p, 0.0, Layer::Walls, LineWeight::WALL);
    frame.segment(sink, p + w, frame.span, 0.0, Layer::Walls, LineWeight::WALL);

    let center = frame.point(p + w / 2.0, w / 4.0);
    let radius = w / 2.0;
    let (start_angle, end_angle) = frame.swing_angles();
    sink.add_arc(
        center,
        radius,
        start_angle,
        end_angle,
        Layer::Doors,
        LineWeight::DOOR,
    );
    sink.add_line(
        center.polar(radius, start_angle),
        frame.point(p + w / 2.0, 0.0),
        Layer::Doors,
        LineWeight::DOOR,
    );

    annotate_opening(frame, door, room_number, settings.door_label_offset, settings, sink)
}

/// Draw a window: outer and inner wall runs broken at the opening, two
/// jambs across the wall and a glazing line, plus dimension and label when
/// there is room.
///
/// Returns `true` if the dimension and label were drawn.
pub fn draw_window(
    frame: &WallFrame,
    window: &Opening,
    thickness: f64,
    room_number: usize,
    settings: &DraftingSettings,
    sink: &mut dyn DrawingSink,
) -> bool {
    let (p, w, t) = (window.start, window.width, thickness);
    frame.segment(sink, 0.0, p, 0.0, Layer::Walls, LineWeight::WALL);
    frame.segment(sink, p + w, frame.span, 0.0, Layer::Walls, LineWeight::WALL);
    frame.segment(sink, t, p, -t, Layer::Walls, LineWeight::WALL);
    frame.segment(sink, p + w, frame.span - t, -t, Layer::Walls, LineWeight::WALL);

    frame.jamb(sink, p, t, LineWeight::WINDOW_FRAME);
    frame.jamb(sink, p + w, t, LineWeight::WINDOW_FRAME);
    frame.jamb(sink, p + w / 2.0, t, LineWeight::FINE);

    annotate_opening(
        frame,
        window,
        room_number,
        settings.window_label_offset,
        settings,
        sink,
    )
}

fn annotate_opening(
    frame: &WallFrame,
    opening: &Opening,
    room_number: usize,
    label_offset: f64,
    settings: &DraftingSettings,
    sink: &mut dyn DrawingSink,
) -> bool {
    let (p, w) = (opening.start, opening.width);
    if p + w + settings.annotation_clearance >= frame.span {
        return false;
    }

    sink.add_linear_dimension(
        LinearDimension::new(
            frame.point(p, settings.opening_dimension_offset),
            frame.point(p, 0.0),
            frame.point(p + w, 0.0),
            frame.dimension_angle(),
            settings.opening_text_height,
        ),
        Layer::Dimensions,
    );
    sink.add_text(
        &opening.label(room_number),
        Layer::Text,
        settings.opening_text_height,
        frame.point(p + w / 2.0, label_offset),
        frame.label_align(),
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::{CenteredJitter, RandomJitter};
    use crate::sink::{Drawing, Entity};
    use approx::assert_relative_eq;
    use floorplan_ir::RoomConfig;

    fn footprint() -> Footprint {
        Footprint::new(10.0, 10.0, 0.15)
    }

    fn room(rect: Rect) -> Room {
        Room::new(rect, RoomConfig::numbered(1))
    }

    #[test]
    fn test_frame_points() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);

        let left = WallFrame::new(&rect, WallSide::Left);
        let p = left.point(1.0, 0.5);
        assert_relative_eq!(p.x, 1.5);
        assert_relative_eq!(p.y, 4.0);
        assert_relative_eq!(left.span, 5.0);

        let top = WallFrame::new(&rect, WallSide::Top);
        let p = top.point(1.0, 0.5);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 2.5);

        let right = WallFrame::new(&rect, WallSide::Right);
        let p = right.point(1.0, 0.5);
        assert_relative_eq!(p.x, 6.5);
        assert_relative_eq!(p.y, 4.0);

        let bottom = WallFrame::new(&rect, WallSide::Bottom);
        let p = bottom.point(1.0, 0.5);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 8.5);
        assert_relative_eq!(bottom.span, 4.0);
    }

    #[test]
    fn test_classify_single_room() {
        let walls = WallClassification::classify(&Rect::new(0.0, 0.0, 10.0, 10.0), &footprint(), 0.01);
        assert_eq!(walls.door_walls, [WallSide::Right, WallSide::Bottom]);
        assert_eq!(walls.window_walls, WallSide::ALL);
        assert!(walls.interior.is_empty());
    }

    #[test]
    fn test_classify_middle_strip() {
        let walls = WallClassification::classify(&Rect::new(0.0, 3.0, 10.0, 4.0), &footprint(), 0.01);
        assert_eq!(walls.door_walls, [WallSide::Top, WallSide::Right, WallSide::Bottom]);
        assert_eq!(walls.window_walls, [WallSide::Left, WallSide::Right]);
        assert_eq!(walls.interior, [WallSide::Top, WallSide::Bottom]);
    }

    #[test]
    fn test_classify_uses_tolerance() {
        // Accumulated strip heights can land a hair short of the boundary.
        let rect = Rect::new(0.0, 6.666_666, 10.0, 3.333_33);
        let walls = WallClassification::classify(&rect, &footprint(), 0.01);
        assert!(walls.window_walls.contains(&WallSide::Bottom));
        assert!(!walls.interior.contains(&WallSide::Bottom));
    }

    #[test]
    fn test_centered_door_and_window() {
        let room = room(Rect::new(0.0, 0.0, 10.0, 10.0));
        let walls = WallClassification::classify(&room.bounds, &footprint(), 0.01);
        let planned = plan_openings(1, &room, &walls, &mut CenteredJitter).unwrap();

        assert_eq!(planned.doors.len(), 1);
        let door = planned.doors[0];
        assert_eq!(door.side, WallSide::Right);
        assert_relative_eq!(door.start, 5.0 - 0.45);

        assert_eq!(planned.windows.len(), 1);
        let window = planned.windows[0];
        assert_eq!(window.side, WallSide::Left);
        assert_relative_eq!(window.start, 5.0 - 0.6);
    }

    #[test]
    fn test_extra_openings_are_dropped() {
        let mut room = room(Rect::new(0.0, 0.0, 10.0, 10.0));
        room.config.doors = 40;
        room.config.windows = 6;
        let walls = WallClassification::classify(&room.bounds, &footprint(), 0.01);
        let planned = plan_openings(1, &room, &walls, &mut CenteredJitter).unwrap();

        assert_eq!(planned.doors.len(), 2);
        assert_eq!(planned.windows.len(), 4);
        let sides: Vec<_> = planned.windows.iter().map(|w| w.side).collect();
        assert_eq!(sides, WallSide::ALL);
    }

    #[test]
    fn test_random_placement_stays_in_bounds() {
        let room = room(Rect::new(0.0, 0.0, 10.0, 10.0));
        let walls = WallClassification::classify(&room.bounds, &footprint(), 0.01);
        let mut jitter = RandomJitter::seeded(7);
        for _ in 0..200 {
            let planned = plan_openings(1, &room, &walls, &mut jitter).unwrap();
            let door = planned.doors[0];
            assert!(door.start >= 5.0 - 0.45 - 2.5 - 1e-9);
            assert!(door.start <= 5.0 - 0.45 + 2.5 + 1e-9);
            let window = planned.windows[0];
            assert!(window.start + 0.6 >= 2.0 - 1e-9);
            assert!(window.start + 0.6 <= 8.0 + 1e-9);
        }
    }

    #[test]
    fn test_wide_openings_stay_on_their_wall() {
        let mut room = room(Rect::new(0.0, 0.0, 4.0, 4.0));
        room.config.door_width = 3.5;
        room.config.window_width = 3.5;
        room.config.windows = 4;
        let walls = WallClassification::classify(&room.bounds, &Footprint::new(4.0, 4.0, 0.1), 0.01);
        let mut jitter = RandomJitter::seeded(1);
        for _ in 0..50 {
            let planned = plan_openings(1, &room, &walls, &mut jitter).unwrap();
            for opening in planned.iter() {
                assert!(opening.start >= 0.0, "{opening:?} starts before its wall");
                assert!(opening.end() <= 4.0 + 1e-9, "{opening:?} runs past its wall");
            }
        }
    }

    #[test]
    fn test_opening_as_wide_as_wall_fills_it() {
        let mut room = room(Rect::new(0.0, 0.0, 2.0, 2.0));
        room.config.door_width = 2.0;
        room.config.windows = 0;
        let walls = WallClassification::classify(&room.bounds, &Footprint::new(2.0, 2.0, 0.1), 0.01);
        let mut jitter = RandomJitter::seeded(3);
        for _ in 0..20 {
            let planned = plan_openings(1, &room, &walls, &mut jitter).unwrap();
            assert_relative_eq!(planned.doors[0].start, 0.0);
        }
    }

    #[test]
    fn test_grid_center_cell_gets_doors_but_no_windows() {
        let mut room = room(Rect::new(3.0, 3.0, 3.0, 3.0));
        room.config.doors = 6;
        room.config.windows = 2;
        let walls = WallClassification::classify(&room.bounds, &Footprint::new(9.0, 9.0, 0.15), 0.01);
        assert_eq!(walls.walls_for(OpeningKind::Door), WallSide::ALL);
        assert!(walls.walls_for(OpeningKind::Window).is_empty());
        assert_eq!(walls.interior, WallSide::ALL);

        let planned = plan_openings(5, &room, &walls, &mut CenteredJitter).unwrap();
        assert_eq!(planned.doors.len(), 4);
        assert!(planned.windows.is_empty());
    }

    #[test]
    fn test_too_wide_door_is_rejected() {
        let mut room = room(Rect::new(0.0, 0.0, 2.0, 2.0));
        room.config.door_width = 3.0;
        let walls = WallClassification::classify(&room.bounds, &Footprint::new(2.0, 2.0, 0.1), 0.01);
        let err = plan_openings(1, &room, &walls, &mut CenteredJitter).unwrap_err();
        match err {
            FloorplanError::OpeningTooWide {
                kind, side, span, ..
            } => {
                assert_eq!(kind, OpeningKind::Door);
                assert_eq!(side, WallSide::Right);
                assert_relative_eq!(span, 2.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_door_geometry_on_right_wall() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let frame = WallFrame::new(&rect, WallSide::Right);
        let door = Opening {
            kind: OpeningKind::Door,
            index: 0,
            side: WallSide::Right,
            start: 4.55,
            width: 0.9,
        };
        let mut drawing = Drawing::new();
        let annotated = draw_door(&frame, &door, 1, &DraftingSettings::default(), &mut drawing);
        assert!(annotated);

        assert_eq!(drawing.count(Layer::Walls), 2);
        assert_eq!(drawing.count(Layer::Doors), 2);
        assert_eq!(drawing.count(Layer::Dimensions), 1);

        let arc = drawing
            .entities
            .iter()
            .find_map(|e| match e {
                Entity::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    ..
                } => Some((*center, *radius, *start_angle, *end_angle)),
                _ => None,
            })
            .unwrap();
        assert_relative_eq!(arc.0.x, 10.0 + 0.225);
        assert_relative_eq!(arc.0.y, 5.0);
        assert_relative_eq!(arc.1, 0.45);
        assert_eq!((arc.2, arc.3), (90.0, 270.0));

        let labels: Vec<_> = drawing.texts().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].0, "D1-1");
        assert_relative_eq!(labels[0].1.x, 10.2);
    }

    #[test]
    fn test_door_annotation_needs_clearance() {
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
        let frame = WallFrame::new(&rect, WallSide::Bottom);
        let door = Opening {
            kind: OpeningKind::Door,
            index: 0,
            side: WallSide::Bottom,
            start: 2.7,
            width: 0.9,
        };
        let mut drawing = Drawing::new();
        let annotated = draw_door(&frame, &door, 2, &DraftingSettings::default(), &mut drawing);
        assert!(!annotated);
        assert_eq!(drawing.count(Layer::Dimensions), 0);
        assert_eq!(drawing.count(Layer::Text), 0);
        // Both flanks still drawn: [0, 2.7] and [3.6, 4.0].
        assert_eq!(drawing.count(Layer::Walls), 2);
    }

    #[test]
    fn test_flank_omitted_at_wall_end() {
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
        let frame = WallFrame::new(&rect, WallSide::Top);
        let door = Opening {
            kind: OpeningKind::Door,
            index: 0,
            side: WallSide::Top,
            start: 0.0,
            width: 0.9,
        };
        let mut drawing = Drawing::new();
        draw_door(&frame, &door, 1, &DraftingSettings::default(), &mut drawing);
        assert_eq!(drawing.count(Layer::Walls), 1);
    }

    #[test]
    fn test_window_geometry_on_left_wall() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let frame = WallFrame::new(&rect, WallSide::Left);
        let window = Opening {
            kind: OpeningKind::Window,
            index: 0,
            side: WallSide::Left,
            start: 4.4,
            width: 1.2,
        };
        let mut drawing = Drawing::new();
        let annotated = draw_window(&frame, &window, 0.15, 3, &DraftingSettings::default(), &mut drawing);
        assert!(annotated);

        // Outer and inner runs on both sides of the opening.
        assert_eq!(drawing.count(Layer::Walls), 4);
        // Two jambs and the glazing line, all across the wall thickness.
        let frame_lines: Vec<_> = drawing
            .on_layer(Layer::Windows)
            .filter_map(|e| match e {
                Entity::Line { start, end, .. } => Some((*start, *end)),
                _ => None,
            })
            .collect();
        assert_eq!(frame_lines.len(), 3);
        for (start, end) in &frame_lines {
            assert_relative_eq!(start.x, 0.0);
            assert_relative_eq!(end.x, 0.15);
        }
        assert_relative_eq!(frame_lines[2].0.y, 5.0);

        let labels: Vec<_> = drawing.texts().map(|(t, _)| t.to_string()).collect();
        assert_eq!(labels, ["W3-1"]);
    }

    #[test]
    fn test_interior_wall_is_double_line() {
        let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
        let frame = WallFrame::new(&rect, WallSide::Bottom);
        let mut drawing = Drawing::new();
        draw_interior_wall(&frame, 0.15, &mut drawing);

        match &drawing.entities[..] {
            [Entity::Line { start: a, end: b, .. }, Entity::Line { start: c, end: d, .. }] => {
                assert_relative_eq!(a.y, 5.0);
                assert_relative_eq!(b.x, 10.0);
                assert_relative_eq!(c.x, 0.15);
                assert_relative_eq!(c.y, 4.85);
                assert_relative_eq!(d.x, 9.85);
            }
            other => panic!("unexpected entities: {other:?}"),
        }
    }
}
