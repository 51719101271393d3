#![warn(missing_docs)]

//! floorplan - parametric 2D floor plans with DXF export.
//!
//! Takes a building footprint and a list of rooms, partitions the footprint,
//! places doors, windows and fixtures, and writes an annotated drawing.
//!
//! # Example
//!
//! ```rust,no_run
//! use floorplan::{generate, DraftingSettings, FloorplanRequest, RandomJitter};
//!
//! let request = FloorplanRequest::from_toml(
//!     r#"
//!     width = 12.0
//!     length = 9.0
//!
//!     [[room]]
//!     name = "Kitchen"
//!
//!     [[room]]
//!     name = "Bedroom"
//!     "#,
//! )
//! .unwrap();
//!
//! let plan = generate(&request, &mut RandomJitter::seeded(7), &DraftingSettings::default()).unwrap();
//! plan.document.export("floorplan.dxf").unwrap();
//! ```

pub mod export;

pub use export::{DxfDocument, ExportError};
pub use floorplan_drafting::{
    CenteredJitter, DraftingSettings, Drawing, DrawingSink, GenerationReport, Jitter, Layer,
    RandomJitter, RoomCategory, RoomReport,
};
pub use floorplan_ir::{
    FloorplanError, FloorplanRequest, Footprint, Rect, Result, Room, RoomConfig, RoomRequest,
};
pub use floorplan_layout::{Layout, LayoutStrategy};

use tracing::{debug, info};

/// Everything produced for one request.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    /// Validated building footprint.
    pub footprint: Footprint,
    /// Planned room rectangles.
    pub layout: Layout,
    /// The drawing, ready to export.
    pub document: DxfDocument,
    /// What was placed and what was dropped.
    pub report: GenerationReport,
}

/// Validate `request`, plan its rooms and draw the full plan.
///
/// Fails before drawing anything if the request is invalid or an opening
/// does not fit its wall.
pub fn generate(
    request: &FloorplanRequest,
    jitter: &mut dyn Jitter,
    settings: &DraftingSettings,
) -> Result<FloorPlan> {
    request.validate()?;
    let footprint = request.footprint();
    let layout = floorplan_layout::plan(footprint.width, footprint.length, request.room_configs());
    debug!(strategy = ?layout.strategy, rooms = layout.len(), "layout planned");

    let mut document = DxfDocument::new();
    let report = floorplan_drafting::draw_floorplan(
        &footprint,
        &layout,
        jitter,
        settings,
        &mut document,
    )?;

    info!(
        rooms = report.rooms.len(),
        openings = report.placed_openings(),
        dropped = report.dropped_openings(),
        entities = document.num_entities(),
        "generated floor plan"
    );

    Ok(FloorPlan {
        footprint,
        layout,
        document,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_request() {
        let plan = generate(
            &FloorplanRequest::default(),
            &mut CenteredJitter,
            &DraftingSettings::default(),
        )
        .unwrap();
        assert_eq!(plan.layout.strategy, LayoutStrategy::Single);
        assert_eq!(plan.report.rooms.len(), 1);
        assert!(plan.document.num_entities() > 0);
    }

    #[test]
    fn test_generate_rejects_invalid_request() {
        let request = FloorplanRequest {
            width: -1.0,
            ..Default::default()
        };
        let err = generate(&request, &mut CenteredJitter, &DraftingSettings::default()).unwrap_err();
        assert!(matches!(err, FloorplanError::InvalidFootprint(_)));
    }
}
