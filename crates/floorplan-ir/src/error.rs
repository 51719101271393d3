//! Error types for floor-plan requests.

use thiserror::Error;

use crate::{OpeningKind, WallSide};

/// Errors raised at the validation boundary, before any geometry is emitted.
#[derive(Error, Debug)]
pub enum FloorplanError {
    /// Footprint width, length or wall thickness is not a positive number.
    #[error("invalid footprint: {0}")]
    InvalidFootprint(String),

    /// Walls would overlap in the middle of the building.
    #[error("wall thickness {thickness}m must be less than half the shorter footprint side ({limit}m)")]
    WallTooThick {
        /// Requested wall thickness.
        thickness: f64,
        /// Exclusive upper bound, `min(width, length) / 2`.
        limit: f64,
    },

    /// The request asks for zero rooms.
    #[error("at least one room is required")]
    NoRooms,

    /// A room configuration carries an unusable value.
    #[error("room {room} ({name}): {reason}")]
    InvalidRoom {
        /// One-based room number.
        room: usize,
        /// Room name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An opening does not fit on the wall it was assigned to.
    #[error("room {room} ({name}): {kind} width {width}m exceeds the {side} wall span of {span}m")]
    OpeningTooWide {
        /// One-based room number.
        room: usize,
        /// Room name.
        name: String,
        /// Door or window.
        kind: OpeningKind,
        /// Wall the opening was assigned to.
        side: WallSide,
        /// Requested opening width.
        width: f64,
        /// Length of the wall.
        span: f64,
    },

    /// Request file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for floor-plan operations.
pub type Result<T> = std::result::Result<T, FloorplanError>;
