//! Core types for 2D floor-plan drafting.

use serde::{Deserialize, Serialize};

/// A 2D point in drawing units (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Point on the circle of `radius` around `self` at `angle_deg`
    /// (counterclockwise from +x).
    pub fn polar(&self, radius: f64, angle_deg: f64) -> Self {
        let a = angle_deg.to_radians();
        Self::new(self.x + radius * a.cos(), self.y + radius * a.sin())
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Create an empty bounding box.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Expand the bounding box to include a point.
    pub fn include_point(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if the bounding box is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

/// Named drawing layer. Every primitive belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Wall outlines and wall runs around openings.
    Walls,
    /// Door swing arcs and swing lines.
    Doors,
    /// Window frames and glazing lines.
    Windows,
    /// Furniture and sanitary fixtures.
    Fixtures,
    /// Dimension lines.
    Dimensions,
    /// Labels and captions.
    Text,
    /// Wall cross-section outlines.
    WallThickness,
}

impl Layer {
    /// All layers in table order.
    pub const ALL: [Layer; 7] = [
        Layer::Walls,
        Layer::Doors,
        Layer::Windows,
        Layer::Fixtures,
        Layer::Dimensions,
        Layer::Text,
        Layer::WallThickness,
    ];

    /// Layer name as written to the drawing.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Walls => "WALLS",
            Layer::Doors => "DOORS",
            Layer::Windows => "WINDOWS",
            Layer::Fixtures => "FIXTURES",
            Layer::Dimensions => "DIMENSIONS",
            Layer::Text => "TEXT",
            Layer::WallThickness => "WALL_THICKNESS",
        }
    }

    /// AutoCAD color index used for the layer.
    pub fn color(&self) -> u8 {
        match self {
            Layer::Walls => 5,         // blue
            Layer::Doors => 1,         // red
            Layer::Windows => 3,       // green
            Layer::Fixtures => 4,      // cyan
            Layer::Dimensions => 7,    // white/black
            Layer::Text => 2,          // yellow
            Layer::WallThickness => 6, // magenta
        }
    }
}

/// Line weight in hundredths of a millimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWeight(pub i16);

impl LineWeight {
    /// Use the layer's default weight.
    pub const BY_LAYER: Self = Self(-1);
    /// Wall outlines (0.35 mm).
    pub const WALL: Self = Self(35);
    /// Door symbols (0.30 mm).
    pub const DOOR: Self = Self(30);
    /// Window jambs (0.25 mm).
    pub const WINDOW_FRAME: Self = Self(25);
    /// Glazing lines and wall cross-sections (0.15 mm).
    pub const FINE: Self = Self(15);
}

impl Default for LineWeight {
    fn default() -> Self {
        Self::BY_LAYER
    }
}

/// Placement of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// Centered both ways.
    MiddleCenter,
    /// Horizontally centered, text sits above the anchor.
    BottomCenter,
    /// Horizontally centered, text hangs below the anchor.
    TopCenter,
    /// Vertically centered, text runs to the right of the anchor.
    MiddleLeft,
    /// Vertically centered, text ends at the anchor.
    MiddleRight,
}

/// A linear dimension measured along `angle` (degrees, CCW from +x).
///
/// The dimension line passes through `base`; `p1` and `p2` are the measured
/// points. Angle 0 measures horizontal distance, 90 vertical distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearDimension {
    /// A point the dimension line passes through.
    pub base: Point2D,
    /// First measured point.
    pub p1: Point2D,
    /// Second measured point.
    pub p2: Point2D,
    /// Measurement direction in degrees.
    pub angle: f64,
    /// Height of the measurement text.
    pub text_height: f64,
}

impl LinearDimension {
    /// Create a new linear dimension.
    pub fn new(base: Point2D, p1: Point2D, p2: Point2D, angle: f64, text_height: f64) -> Self {
        Self {
            base,
            p1,
            p2,
            angle,
            text_height,
        }
    }

    /// Unit vector of the measurement direction.
    pub fn direction(&self) -> (f64, f64) {
        let a = self.angle.to_radians();
        (a.cos(), a.sin())
    }

    /// Measured distance between `p1` and `p2` along the direction.
    pub fn measurement(&self) -> f64 {
        let (dx, dy) = self.direction();
        ((self.p2.x - self.p1.x) * dx + (self.p2.y - self.p1.y) * dy).abs()
    }

    /// End points of the dimension line: `p1` and `p2` projected onto the
    /// line through `base`.
    pub fn dimension_line(&self) -> (Point2D, Point2D) {
        let (dx, dy) = self.direction();
        let project = |p: Point2D| {
            let t = (p.x - self.base.x) * dx + (p.y - self.base.y) * dy;
            Point2D::new(self.base.x + t * dx, self.base.y + t * dy)
        };
        (project(self.p1), project(self.p2))
    }
}
