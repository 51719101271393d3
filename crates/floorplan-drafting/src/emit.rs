//! Full drawing pass over a planned layout.

use floorplan_ir::{FloorplanError, Footprint, Result, Room};
use floorplan_layout::Layout;
use tracing::{debug, warn};

use crate::annotations;
use crate::fixtures::{place_fixtures, RoomCategory};
use crate::jitter::Jitter;
use crate::report::{GenerationReport, RoomReport};
use crate::settings::DraftingSettings;
use crate::sink::DrawingSink;
use crate::walls::{self, RoomOpenings, WallClassification, WallFrame};

/// Validate, place every opening, then draw the whole plan into `sink`.
///
/// Nothing reaches the sink unless the footprint, every room and every
/// opening placement are valid. Draw order: building outline and overall
/// top/right dimensions, room captions, walls with doors and windows,
/// bottom/left dimensions, fixtures, title block.
pub fn draw_floorplan(
    footprint: &Footprint,
    layout: &Layout,
    jitter: &mut dyn Jitter,
    settings: &DraftingSettings,
    sink: &mut dyn DrawingSink,
) -> Result<GenerationReport> {
    footprint.validate()?;
    if layout.is_empty() {
        return Err(FloorplanError::NoRooms);
    }
    for (i, room) in layout.rooms.iter().enumerate() {
        room.config.validate(i + 1)?;
    }

    let tolerance = settings.exterior_tolerance;
    let mut planned = Vec::with_capacity(layout.len());
    for (i, room) in layout.rooms.iter().enumerate() {
        let classification = WallClassification::classify(&room.bounds, footprint, tolerance);
        let openings = walls::plan_openings(i + 1, room, &classification, jitter)?;
        planned.push((classification, openings));
    }

    annotations::draw_outline(footprint, sink);
    annotations::draw_primary_dimensions(footprint, settings, sink);
    annotations::draw_wall_thickness_note(footprint, sink);
    for room in &layout.rooms {
        annotations::draw_room_labels(room, settings, sink);
    }

    let mut report = GenerationReport {
        rooms: Vec::with_capacity(layout.len()),
        unused_cells: layout.unused_cells.clone(),
    };

    for (i, (room, (classification, openings))) in layout.rooms.iter().zip(&planned).enumerate() {
        let number = i + 1;
        if layout.len() > 1 {
            for side in &classification.interior {
                let frame = WallFrame::new(&room.bounds, *side);
                walls::draw_interior_wall(&frame, footprint.wall_thickness, sink);
            }
        }
        let unannotated = draw_openings(room, number, openings, footprint, settings, sink);

        let entry = RoomReport {
            number,
            name: room.config.name.clone(),
            category: RoomCategory::from_name(room.name()),
            bounds: room.bounds,
            doors_requested: room.config.doors,
            windows_requested: room.config.windows,
            openings: openings.iter().copied().collect(),
            unannotated,
            fixtures: 0,
        };
        if entry.dropped_doors() + entry.dropped_windows() > 0 {
            warn!(
                room = number,
                name = %entry.name,
                dropped_doors = entry.dropped_doors(),
                dropped_windows = entry.dropped_windows(),
                "not enough eligible walls for every requested opening"
            );
        }
        report.rooms.push(entry);
    }

    annotations::draw_secondary_dimensions(footprint, settings, sink);

    for (room, entry) in layout.rooms.iter().zip(report.rooms.iter_mut()) {
        let fixtures = place_fixtures(room.name(), &room.bounds);
        for fixture in &fixtures {
            fixture.draw(sink);
        }
        entry.fixtures = fixtures.len();
        debug!(room = entry.number, category = %entry.category, fixtures = entry.fixtures, "placed fixtures");
    }

    annotations::draw_title_block(footprint, sink);

    Ok(report)
}

/// Draw the room's doors then windows. Returns the labels of openings left
/// without dimension and label.
fn draw_openings(
    room: &Room,
    number: usize,
    openings: &RoomOpenings,
    footprint: &Footprint,
    settings: &DraftingSettings,
    sink: &mut dyn DrawingSink,
) -> Vec<String> {
    let mut unannotated = Vec::new();

    for door in &openings.doors {
        let frame = WallFrame::new(&room.bounds, door.side);
        if !walls::draw_door(&frame, door, number, settings, sink) {
            unannotated.push(door.label(number));
        }
    }
    for window in &openings.windows {
        let frame = WallFrame::new(&room.bounds, window.side);
        if !walls::draw_window(
            &frame,
            window,
            footprint.wall_thickness,
            number,
            settings,
            sink,
        ) {
            unannotated.push(window.label(number));
        }
    }

    if !unannotated.is_empty() {
        debug!(room = number, labels = ?unannotated, "opening annotations suppressed");
    }
    unannotated
}
