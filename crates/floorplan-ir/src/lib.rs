#![warn(missing_docs)]

//! Data model for the floorplan generator.
//!
//! This crate defines the plain values that flow through the pipeline: the
//! building footprint, per-room configuration, room rectangles and wall
//! sides. It also owns the request format read from TOML or JSON and the
//! validation boundary that rejects physically impossible inputs.
//!
//! Nothing here draws anything. Layout lives in `floorplan-layout`, geometry
//! emission in `floorplan-drafting`.

pub mod error;
pub mod request;

pub use error::{FloorplanError, Result};
pub use request::{FloorplanRequest, RoomRequest};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall building outline in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub length: f64,
    /// Uniform wall thickness.
    pub wall_thickness: f64,
}

impl Footprint {
    /// Create a new footprint.
    pub fn new(width: f64, length: f64, wall_thickness: f64) -> Self {
        Self {
            width,
            length,
            wall_thickness,
        }
    }

    /// The footprint as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.length)
    }

    /// Reject non-positive dimensions and walls thicker than half the
    /// shorter side.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("width", self.width),
            ("length", self.length),
            ("wall_thickness", self.wall_thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FloorplanError::InvalidFootprint(format!(
                    "{field} must be a positive number, got {value}"
                )));
            }
        }

        let limit = self.width.min(self.length) / 2.0;
        if self.wall_thickness >= limit {
            return Err(FloorplanError::WallTooThick {
                thickness: self.wall_thickness,
                limit,
            });
        }
        Ok(())
    }
}

/// Door and window settings for a single room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Display name; also selects the fixture category.
    pub name: String,
    /// Requested number of doors.
    pub doors: u32,
    /// Width of each door opening.
    pub door_width: f64,
    /// Requested number of windows.
    pub windows: u32,
    /// Width of each window opening.
    pub window_width: f64,
}

impl RoomConfig {
    /// Default door width in meters.
    pub const DEFAULT_DOOR_WIDTH: f64 = 0.9;
    /// Default window width in meters.
    pub const DEFAULT_WINDOW_WIDTH: f64 = 1.2;

    /// Default configuration for the room with the given one-based number:
    /// `"Room {number}"`, one door, one window.
    pub fn numbered(number: usize) -> Self {
        Self {
            name: format!("Room {number}"),
            doors: 1,
            door_width: Self::DEFAULT_DOOR_WIDTH,
            windows: 1,
            window_width: Self::DEFAULT_WINDOW_WIDTH,
        }
    }

    /// Width of an opening of the given kind.
    pub fn opening_width(&self, kind: OpeningKind) -> f64 {
        match kind {
            OpeningKind::Door => self.door_width,
            OpeningKind::Window => self.window_width,
        }
    }

    /// Requested count of openings of the given kind.
    pub fn opening_count(&self, kind: OpeningKind) -> u32 {
        match kind {
            OpeningKind::Door => self.doors,
            OpeningKind::Window => self.windows,
        }
    }

    /// Check opening widths. `number` is the one-based room number used in
    /// error messages.
    pub fn validate(&self, number: usize) -> Result<()> {
        for kind in [OpeningKind::Door, OpeningKind::Window] {
            let width = self.opening_width(kind);
            if self.opening_count(kind) > 0 && (!width.is_finite() || width <= 0.0) {
                return Err(FloorplanError::InvalidRoom {
                    room: number,
                    name: self.name.clone(),
                    reason: format!("{kind} width must be a positive number, got {width}"),
                });
            }
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in footprint coordinates (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum x.
    pub x: f64,
    /// Minimum y.
    pub y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub length: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, length: f64) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }

    /// Maximum x.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Maximum y.
    pub fn max_y(&self) -> f64 {
        self.y + self.length
    }

    /// Area in square meters.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Center point as `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.length / 2.0)
    }

    /// Length of the shorter side.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.length)
    }

    /// True if the interiors intersect by more than `tolerance` on both axes.
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect, tolerance: f64) -> bool {
        let dx = self.max_x().min(other.max_x()) - self.x.max(other.x);
        let dy = self.max_y().min(other.max_y()) - self.y.max(other.y);
        dx > tolerance && dy > tolerance
    }

    /// True if `other` lies inside this rectangle, with `tolerance` slack.
    pub fn contains(&self, other: &Rect, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.max_x() <= self.max_x() + tolerance
            && other.max_y() <= self.max_y() + tolerance
    }
}

/// A planned room: its rectangle plus the configuration it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Position and size within the footprint.
    pub bounds: Rect,
    /// Door, window and naming settings.
    pub config: RoomConfig,
}

impl Room {
    /// Create a new room.
    pub fn new(bounds: Rect, config: RoomConfig) -> Self {
        Self { bounds, config }
    }

    /// Room name.
    pub fn name(&self) -> &str {
        &self.config.name
    }
}

/// One of the four sides of a room.
///
/// `Top` is the edge at the room's minimum y and `Bottom` the edge at its
/// maximum y, following the screen convention the request format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    /// Edge at minimum x.
    Left,
    /// Edge at minimum y.
    Top,
    /// Edge at maximum x.
    Right,
    /// Edge at maximum y.
    Bottom,
}

impl WallSide {
    /// All sides in classification order.
    pub const ALL: [WallSide; 4] = [
        WallSide::Left,
        WallSide::Top,
        WallSide::Right,
        WallSide::Bottom,
    ];

    /// True for sides that run along the y axis.
    pub fn is_vertical(&self) -> bool {
        matches!(self, WallSide::Left | WallSide::Right)
    }

    /// Length of this side of `rect`.
    pub fn span(&self, rect: &Rect) -> f64 {
        if self.is_vertical() {
            rect.length
        } else {
            rect.width
        }
    }

    /// Lowercase name used in reports and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            WallSide::Left => "left",
            WallSide::Top => "top",
            WallSide::Right => "right",
            WallSide::Bottom => "bottom",
        }
    }
}

impl fmt::Display for WallSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    /// Door, drawn with a swing arc.
    Door,
    /// Window, drawn with a frame and glazing line.
    Window,
}

impl OpeningKind {
    /// Prefix used in opening labels (`D1-1`, `W2-1`).
    pub fn label_prefix(&self) -> char {
        match self {
            OpeningKind::Door => 'D',
            OpeningKind::Window => 'W',
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningKind::Door => f.write_str("door"),
            OpeningKind::Window => f.write_str("window"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_footprint_validation() {
        assert!(Footprint::new(10.0, 10.0, 0.15).validate().is_ok());

        let err = Footprint::new(0.0, 10.0, 0.15).validate().unwrap_err();
        assert!(matches!(err, FloorplanError::InvalidFootprint(_)));

        let err = Footprint::new(10.0, f64::NAN, 0.15).validate().unwrap_err();
        assert!(matches!(err, FloorplanError::InvalidFootprint(_)));

        let err = Footprint::new(10.0, 10.0, -0.1).validate().unwrap_err();
        assert!(matches!(err, FloorplanError::InvalidFootprint(_)));
    }

    #[test]
    fn test_wall_thickness_limit() {
        let err = Footprint::new(4.0, 10.0, 2.0).validate().unwrap_err();
        match err {
            FloorplanError::WallTooThick { thickness, limit } => {
                assert_relative_eq!(thickness, 2.0);
                assert_relative_eq!(limit, 2.0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(Footprint::new(4.0, 10.0, 1.99).validate().is_ok());
    }

    #[test]
    fn test_room_config_defaults() {
        let config = RoomConfig::numbered(3);
        assert_eq!(config.name, "Room 3");
        assert_eq!(config.doors, 1);
        assert_eq!(config.windows, 1);
        assert_relative_eq!(config.door_width, 0.9);
        assert_relative_eq!(config.window_width, 1.2);
    }

    #[test]
    fn test_room_config_validation() {
        let mut config = RoomConfig::numbered(1);
        config.door_width = 0.0;
        let err = config.validate(1).unwrap_err();
        assert!(err.to_string().contains("door width"));

        // A zero width is harmless when no door is requested.
        config.doors = 0;
        assert!(config.validate(1).is_ok());
    }

    #[test]
    fn test_rect_overlap_and_containment() {
        let a = Rect::new(0.0, 0.0, 5.0, 5.0);
        let b = Rect::new(5.0, 0.0, 5.0, 5.0);
        let c = Rect::new(4.0, 4.0, 2.0, 2.0);

        assert!(!a.overlaps(&b, 1e-9), "shared edge is not an overlap");
        assert!(a.overlaps(&c, 1e-9));

        let footprint = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(footprint.contains(&a, 1e-9));
        assert!(footprint.contains(&b, 1e-9));
        assert!(!a.contains(&b, 1e-9));
    }

    #[test]
    fn test_wall_side_span() {
        let rect = Rect::new(1.0, 2.0, 4.0, 3.0);
        assert_relative_eq!(WallSide::Left.span(&rect), 3.0);
        assert_relative_eq!(WallSide::Right.span(&rect), 3.0);
        assert_relative_eq!(WallSide::Top.span(&rect), 4.0);
        assert_relative_eq!(WallSide::Bottom.span(&rect), 4.0);
        assert_eq!(WallSide::Bottom.to_string(), "bottom");
    }
}
