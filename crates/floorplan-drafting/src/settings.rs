//! Drafting tunables.

use serde::{Deserialize, Serialize};

/// Offsets, clearances and text heights used while drafting.
///
/// All values are in meters. Every field can be overridden from a config
/// file; unset fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftingSettings {
    /// Free wall length required past an opening before its dimension and
    /// label are drawn.
    pub annotation_clearance: f64,
    /// Distance within which a room side counts as lying on the footprint
    /// boundary.
    pub exterior_tolerance: f64,
    /// Outward offset of opening dimension lines.
    pub opening_dimension_offset: f64,
    /// Outward offset of door labels.
    pub door_label_offset: f64,
    /// Outward offset of window labels.
    pub window_label_offset: f64,
    /// Text height for opening dimensions and labels.
    pub opening_text_height: f64,
    /// Offset of per-room width and length dimensions.
    pub room_dimension_offset: f64,
    /// Text height for per-room dimensions.
    pub room_dimension_text_height: f64,
    /// Offset of the overall footprint dimensions.
    pub overall_dimension_offset: f64,
    /// Text height for the top and right overall dimensions.
    pub primary_dimension_text_height: f64,
    /// Text height for the bottom and left overall dimensions.
    pub secondary_dimension_text_height: f64,
}

impl Default for DraftingSettings {
    fn default() -> Self {
        Self {
            annotation_clearance: 0.5,
            exterior_tolerance: 0.01,
            opening_dimension_offset: 0.3,
            door_label_offset: 0.2,
            window_label_offset: 0.4,
            opening_text_height: 0.1,
            room_dimension_offset: 0.3,
            room_dimension_text_height: 0.15,
            overall_dimension_offset: 0.5,
            primary_dimension_text_height: 0.25,
            secondary_dimension_text_height: 0.2,
        }
    }
}
