//! Request files and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use floorplan::{DraftingSettings, FloorplanRequest};
use serde::Deserialize;

/// Contents of a request file: the request itself plus optional drafting
/// tunables under `[drafting]`.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(flatten)]
    pub request: FloorplanRequest,
    #[serde(default)]
    pub drafting: DraftingSettings,
}

impl CliConfig {
    /// Load from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display()))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config = match ext.to_lowercase().as_str() {
            "toml" => toml::from_str(&text)
                .with_context(|| format!("Invalid TOML in {}", path.display()))?,
            "json" => serde_json::from_str(&text)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?,
            _ => bail!("Unknown request format: {:?} (expected .toml or .json)", ext),
        };
        Ok(config)
    }
}

/// Request source and overrides shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Request file (.toml or .json)
    #[arg(short, long)]
    pub request: Option<std::path::PathBuf>,

    /// Building width in meters
    #[arg(long)]
    pub width: Option<f64>,

    /// Building length in meters
    #[arg(long)]
    pub length: Option<f64>,

    /// Wall thickness in meters
    #[arg(long)]
    pub wall_thickness: Option<f64>,

    /// Number of rooms (unlisted rooms get default names)
    #[arg(long)]
    pub rooms: Option<usize>,

    /// Seed for opening placement; omit for a different plan every run
    #[arg(long)]
    pub seed: Option<u64>,
}

impl InputArgs {
    /// Load the request file, if any, and apply flag overrides.
    pub fn resolve(&self) -> Result<CliConfig> {
        let mut config = match &self.request {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let request = &mut config.request;
        if let Some(width) = self.width {
            request.width = width;
        }
        if let Some(length) = self.length {
            request.length = length;
        }
        if let Some(thickness) = self.wall_thickness {
            request.wall_thickness = thickness;
        }
        if let Some(rooms) = self.rooms {
            request.room_count = Some(rooms);
        }
        Ok(config)
    }
}
