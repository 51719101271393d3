//! File export for generated floor plans.

pub mod dxf;

pub use dxf::DxfDocument;

use thiserror::Error;

/// Errors returned while writing a drawing to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    /// An I/O error occurred during export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
