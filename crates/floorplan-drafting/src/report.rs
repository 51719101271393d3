//! Summary of what a drawing run placed and what it had to leave out.

use floorplan_ir::{OpeningKind, Rect};
use serde::Serialize;

use crate::fixtures::RoomCategory;
use crate::walls::Opening;

/// Per-room outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomReport {
    /// One-based room number, as used in opening labels.
    pub number: usize,
    /// Room name.
    pub name: String,
    /// Fixture category inferred from the name.
    pub category: RoomCategory,
    /// Room rectangle.
    pub bounds: Rect,
    /// Doors asked for.
    pub doors_requested: u32,
    /// Windows asked for.
    pub windows_requested: u32,
    /// Openings actually placed, doors first.
    pub openings: Vec<Opening>,
    /// Labels of openings whose dimension and label were left out for lack
    /// of wall length.
    pub unannotated: Vec<String>,
    /// Number of fixtures drawn.
    pub fixtures: usize,
}

impl RoomReport {
    fn placed(&self, kind: OpeningKind) -> usize {
        self.openings.iter().filter(|o| o.kind == kind).count()
    }

    /// Doors placed.
    pub fn doors_placed(&self) -> usize {
        self.placed(OpeningKind::Door)
    }

    /// Windows placed.
    pub fn windows_placed(&self) -> usize {
        self.placed(OpeningKind::Window)
    }

    /// Doors requested but not placed.
    pub fn dropped_doors(&self) -> usize {
        (self.doors_requested as usize).saturating_sub(self.doors_placed())
    }

    /// Windows requested but not placed.
    pub fn dropped_windows(&self) -> usize {
        (self.windows_requested as usize).saturating_sub(self.windows_placed())
    }
}

/// Outcome of one drawing run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GenerationReport {
    /// One entry per room, in layout order.
    pub rooms: Vec<RoomReport>,
    /// Grid cells that received no room.
    pub unused_cells: Vec<Rect>,
}

impl GenerationReport {
    /// Total area of the unused grid cells.
    pub fn unused_area(&self) -> f64 {
        self.unused_cells.iter().map(Rect::area).sum()
    }

    /// Doors and windows dropped across all rooms.
    pub fn dropped_openings(&self) -> usize {
        self.rooms
            .iter()
            .map(|r| r.dropped_doors() + r.dropped_windows())
            .sum()
    }

    /// Openings placed across all rooms.
    pub fn placed_openings(&self) -> usize {
        self.rooms.iter().map(|r| r.openings.len()).sum()
    }
}
