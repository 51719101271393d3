#![warn(missing_docs)]

//! 2D drafting for the floorplan generator.
//!
//! Turns a planned [`Layout`](floorplan_layout::Layout) into drawing
//! primitives: boundary walls, interior walls, doors with swing arcs,
//! windows with frames and glazing, fixtures, dimensions and captions.
//!
//! Output goes through the [`DrawingSink`] trait, so the same pass can feed
//! a file writer or the in-memory [`Drawing`] used for inspection and tests.
//!
//! # Example
//!
//! ```
//! use floorplan_drafting::{draw_floorplan, CenteredJitter, Drawing, DraftingSettings, Layer};
//! use floorplan_ir::{Footprint, RoomConfig};
//! use floorplan_layout::plan;
//!
//! let footprint = Footprint::new(10.0, 10.0, 0.15);
//! let layout = plan(10.0, 10.0, vec![RoomConfig::numbered(1)]);
//!
//! let mut drawing = Drawing::new();
//! let report = draw_floorplan(
//!     &footprint,
//!     &layout,
//!     &mut CenteredJitter,
//!     &DraftingSettings::default(),
//!     &mut drawing,
//! )
//! .unwrap();
//!
//! assert_eq!(report.rooms[0].doors_placed(), 1);
//! assert_eq!(drawing.count(Layer::WallThickness), 4);
//! ```

pub mod annotations;
pub mod emit;
pub mod fixtures;
pub mod jitter;
pub mod report;
pub mod settings;
pub mod sink;
pub mod types;
pub mod walls;

pub use emit::draw_floorplan;
pub use fixtures::{place_fixtures, Fixture, FixtureSet, FixtureShape, RoomCategory};
pub use jitter::{CenteredJitter, Jitter, RandomJitter};
pub use report::{GenerationReport, RoomReport};
pub use settings::DraftingSettings;
pub use sink::{Drawing, DrawingSink, Entity};
pub use types::{BoundingBox2D, Layer, LineWeight, LinearDimension, Point2D, TextAlign};
pub use walls::{Opening, WallClassification, WallFrame};
