//! Projection of raw maze positions onto per-cell display tags.
//!
//! The service describes a maze as a flat, row-major list of cells plus
//! linear indices for the pony, the domokun and the exit. The view needs a
//! 2D grid where each cell knows what to draw; this module builds it.

use std::collections::BTreeSet;

/// A single display tag attached to a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellTag {
    North,
    South,
    East,
    West,
    Pony,
    Domokun,
    EndPoint,
}

impl CellTag {
    /// Parses a wall tag as sent by the service. Unknown strings yield `None`.
    pub fn from_wall(wall: &str) -> Option<Self> {
        match wall {
            "north" => Some(CellTag::North),
            "south" => Some(CellTag::South),
            "east" => Some(CellTag::East),
            "west" => Some(CellTag::West),
            _ => None,
        }
    }
}

/// Set of tags for one cell.
pub type CellTags = BTreeSet<CellTag>;

/// Largest grid the projection will build. Bigger sizes yield an empty grid.
pub const MAX_GRID_CELLS: usize = 1 << 16;

/// Builds the tagged grid for a maze.
///
/// `size` is `[width, height]`. Only the first element of each position list
/// is used. The result has `height` rows of `width` cells; cells with no
/// entry in `data` start without walls. A zero dimension, or a cell count
/// that overflows or exceeds [`MAX_GRID_CELLS`], yields an empty grid.
///
/// Only the last column of every row is tagged `East`, closing the
/// right-hand edge the service never reports. Tagging every cell would draw a
/// wall on both sides of each west wall.
///
/// # Examples
///
/// ```
/// use pony_maze::domain::{project_grid, CellTag};
///
/// let data = vec![vec!["north".to_string()]; 4];
/// let grid = project_grid(&[0], &[3], &[2], &[2, 2], &data);
///
/// assert_eq!(grid.len(), 2);
/// assert!(grid[0][0].contains(&CellTag::Pony));
/// assert!(grid[1][1].contains(&CellTag::Domokun));
/// assert!(grid[1][0].contains(&CellTag::EndPoint));
/// assert!(grid[0][1].contains(&CellTag::East));
/// ```
pub fn project_grid(
    pony: &[usize],
    domokun: &[usize],
    end_point: &[usize],
    size: &[usize],
    data: &[Vec<String>],
) -> Vec<Vec<CellTags>> {
    let width = size.first().copied().unwrap_or(0);
    let height = size.get(1).copied().unwrap_or(0);
    let cell_count = match width.checked_mul(height) {
        Some(count) if count > 0 && count <= MAX_GRID_CELLS => count,
        _ => return Vec::new(),
    };

    let mut cells: Vec<CellTags> = (0..cell_count)
        .map(|index| {
            data.get(index)
                .map(|walls| walls.iter().filter_map(|w| CellTag::from_wall(w)).collect::<CellTags>())
                .unwrap_or_default()
        })
        .collect();

    for (positions, tag) in [
        (pony, CellTag::Pony),
        (domokun, CellTag::Domokun),
        (end_point, CellTag::EndPoint),
    ] {
        if let Some(cell) = positions.first().and_then(|&index| cells.get_mut(index)) {
            cell.insert(tag);
        }
    }

    let mut rows: Vec<Vec<CellTags>> = cells.chunks(width).map(<[CellTags]>::to_vec).collect();
    for row in &mut rows {
        if let Some(last) = row.last_mut() {
            last.insert(CellTag::East);
        }
    }
    rows
}
