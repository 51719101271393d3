//! Floor-plan request format.
//!
//! A request is read from TOML or JSON. Every field is optional and has a
//! sensible default:
//!
//! ```toml
//! width = 12.0
//! length = 9.0
//! wall_thickness = 0.15
//!
//! [[room]]
//! name = "Kitchen"
//! windows = 2
//!
//! [[room]]
//! name = "Bedroom"
//! door_width = 0.8
//! ```

use serde::{Deserialize, Serialize};

use crate::{Footprint, FloorplanError, Result, RoomConfig};

mod defaults {
    pub fn width() -> f64 {
        10.0
    }

    pub fn length() -> f64 {
        10.0
    }

    pub fn wall_thickness() -> f64 {
        0.15
    }
}

/// Parameters for one drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorplanRequest {
    /// Building width in meters.
    #[serde(default = "defaults::width")]
    pub width: f64,
    /// Building length in meters.
    #[serde(default = "defaults::length")]
    pub length: f64,
    /// Wall thickness in meters.
    #[serde(default = "defaults::wall_thickness")]
    pub wall_thickness: f64,
    /// Number of rooms. Missing entries in `rooms` are filled with numbered
    /// defaults; extra entries are ignored. When absent, the number of
    /// listed rooms is used (at least one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_count: Option<usize>,
    /// Per-room settings, in layout order.
    #[serde(default, rename = "room")]
    pub rooms: Vec<RoomRequest>,
}

impl Default for FloorplanRequest {
    fn default() -> Self {
        Self {
            width: defaults::width(),
            length: defaults::length(),
            wall_thickness: defaults::wall_thickness(),
            room_count: None,
            rooms: Vec::new(),
        }
    }
}

/// Per-room settings as written in a request; unset fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomRequest {
    /// Room name (default `"Room {n}"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of doors (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<u32>,
    /// Door width (default 0.9).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_width: Option<f64>,
    /// Number of windows (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<u32>,
    /// Window width (default 1.2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_width: Option<f64>,
}

impl RoomRequest {
    /// A request that only sets the name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Fill unset fields with the defaults for room `number` (one-based).
    pub fn resolve(&self, number: usize) -> RoomConfig {
        let defaults = RoomConfig::numbered(number);
        RoomConfig {
            name: self.name.clone().unwrap_or(defaults.name),
            doors: self.doors.unwrap_or(defaults.doors),
            door_width: self.door_width.unwrap_or(defaults.door_width),
            windows: self.windows.unwrap_or(defaults.windows),
            window_width: self.window_width.unwrap_or(defaults.window_width),
        }
    }
}

impl FloorplanRequest {
    /// Parse a request from TOML.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The building footprint.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.width, self.length, self.wall_thickness)
    }

    /// Number of rooms the drawing will contain.
    pub fn effective_room_count(&self) -> usize {
        self.room_count.unwrap_or_else(|| self.rooms.len().max(1))
    }

    /// Fully resolved room configurations, in layout order.
    pub fn room_configs(&self) -> Vec<RoomConfig> {
        (1..=self.effective_room_count())
            .map(|number| match self.rooms.get(number - 1) {
                Some(room) => room.resolve(number),
                None => RoomConfig::numbered(number),
            })
            .collect()
    }

    /// Validate the footprint, the room count and every room configuration.
    pub fn validate(&self) -> Result<()> {
        self.footprint().validate()?;
        let configs = self.room_configs();
        if configs.is_empty() {
            return Err(FloorplanError::NoRooms);
        }
        for (i, config) in configs.iter().enumerate() {
            config.validate(i + 1)?;
        }
        Ok(())
    }
}
