#![warn(missing_docs)]

//! Room layout planner.
//!
//! Partitions a rectangular footprint into one rectangle per requested room
//! using a fixed strategy chosen by the room count:
//!
//! - **1 room**: the whole footprint.
//! - **2–3 rooms**: equal full-width strips stacked along y.
//! - **4+ rooms**: a `rows x cols` grid with `rows = ceil(sqrt(n))` and
//!   `cols = ceil(n / rows)`, filled row-major. Cells past the n-th are left
//!   empty and reported in [`Layout::unused_cells`].
//!
//! # Example
//!
//! ```
//! use floorplan_ir::RoomConfig;
//! use floorplan_layout::{plan, LayoutStrategy};
//!
//! let configs: Vec<_> = (1..=5).map(RoomConfig::numbered).collect();
//! let layout = plan(12.0, 9.0, configs);
//!
//! assert_eq!(layout.strategy, LayoutStrategy::Grid { rows: 3, cols: 2 });
//! assert_eq!(layout.rooms.len(), 5);
//! assert_eq!(layout.unused_cells.len(), 1);
//! ```

use floorplan_ir::{Rect, Room, RoomConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Which placement strategy produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// No rooms were requested.
    Empty,
    /// One room covering the footprint.
    Single,
    /// Full-width strips stacked along y.
    Strips {
        /// Number of strips.
        count: usize,
    },
    /// Regular grid filled row-major.
    Grid {
        /// Number of rows (along y).
        rows: usize,
        /// Number of columns (along x).
        cols: usize,
    },
}

/// Result of planning: rooms in input order plus any grid cells left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Strategy selected by the room count.
    pub strategy: LayoutStrategy,
    /// Planned rooms, in the order their configurations were given.
    pub rooms: Vec<Room>,
    /// Grid cells beyond the last room. They get no walls or label.
    pub unused_cells: Vec<Rect>,
}

impl Layout {
    /// Total area of the unused grid cells.
    pub fn unused_area(&self) -> f64 {
        self.unused_cells.iter().map(Rect::area).sum()
    }

    /// Number of planned rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// True if no rooms were planned.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Grid shape used for `n >= 4` rooms: `(rows, cols)`.
pub fn grid_dimensions(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    // Integer ceil(sqrt(n)).
    let mut rows = 1;
    while rows * rows < n {
        rows += 1;
    }
    let cols = n.div_ceil(rows);
    (rows, cols)
}

/// Partition a `width x length` footprint into one rectangle per config.
///
/// An empty `configs` yields an empty layout; callers are expected to reject
/// that case before planning.
pub fn plan(width: f64, length: f64, configs: Vec<RoomConfig>) -> Layout {
    let n = configs.len();
    let layout = match n {
        0 => Layout {
            strategy: LayoutStrategy::Empty,
            rooms: Vec::new(),
            unused_cells: Vec::new(),
        },
        1 => single(width, length, configs),
        2..=3 => strips(width, length, configs),
        _ => grid(width, length, configs),
    };

    debug!(
        rooms = n,
        strategy = ?layout.strategy,
        "planned layout for {width}x{length} footprint"
    );
    if !layout.unused_cells.is_empty() {
        warn!(
            cells = layout.unused_cells.len(),
            area = layout.unused_area(),
            "grid layout leaves cells without a room"
        );
    }
    layout
}

fn single(width: f64, length: f64, configs: Vec<RoomConfig>) -> Layout {
    let rooms = configs
        .into_iter()
        .map(|config| Room::new(Rect::new(0.0, 0.0, width, length), config))
        .collect();
    Layout {
        strategy: LayoutStrategy::Single,
        rooms,
        unused_cells: Vec::new(),
    }
}

fn strips(width: f64, length: f64, configs: Vec<RoomConfig>) -> Layout {
    let count = configs.len();
    let strip_length = length / count as f64;

    let mut rooms = Vec::with_capacity(count);
    let mut y = 0.0;
    for config in configs {
        rooms.push(Room::new(Rect::new(0.0, y, width, strip_length), config));
        y += strip_length;
    }

    Layout {
        strategy: LayoutStrategy::Strips { count },
        rooms,
        unused_cells: Vec::new(),
    }
}

fn grid(width: f64, length: f64, configs: Vec<RoomConfig>) -> Layout {
    let n = configs.len();
    let (rows, cols) = grid_dimensions(n);
    let cell_width = width / cols as f64;
    let cell_length = length / rows as f64;

    let cell = |index: usize| {
        let (row, col) = (index / cols, index % cols);
        Rect::new(
            col as f64 * cell_width,
            row as f64 * cell_length,
            cell_width,
            cell_length,
        )
    };

    let rooms = configs
        .into_iter()
        .enumerate()
        .map(|(i, config)| Room::new(cell(i), config))
        .collect();
    let unused_cells = (n..rows * cols).map(cell).collect();

    Layout {
        strategy: LayoutStrategy::Grid { rows, cols },
        rooms,
        unused_cells,
    }
}
