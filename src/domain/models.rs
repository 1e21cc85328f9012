use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity returned by the service when a maze is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MazeIdentity {
    pub maze_id: Option<String>,
}

/// Maze state exactly as the service sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMazeSnapshot {
    pub pony: Vec<usize>,
    pub domokun: Vec<usize>,
    #[serde(rename = "end-point")]
    pub end_point: Vec<usize>,
    pub size: Vec<usize>,
    pub difficulty: i64,
    pub data: Vec<Vec<String>>,
}

/// Maze state as held by the store.
///
/// Positions are linear indices into a row-major grid of `width * height`
/// cells. `data` holds the wall tags of each cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeSnapshot {
    pub pony: Vec<usize>,
    pub domokun: Vec<usize>,
    #[serde(rename = "endPoint")]
    pub end_point: Vec<usize>,
    pub size: Vec<usize>,
    pub difficulty: i64,
    pub data: Vec<Vec<String>>,
}

impl Default for MazeSnapshot {
    fn default() -> Self {
        Self {
            pony: vec![70],
            domokun: vec![218],
            end_point: vec![186],
            size: vec![15, 15],
            difficulty: 0,
            data: Vec::new(),
        }
    }
}

impl MazeSnapshot {
    /// Grid width, the first element of `size`.
    pub fn width(&self) -> usize {
        self.size.first().copied().unwrap_or(0)
    }

    /// Grid height, the second element of `size`.
    pub fn height(&self) -> usize {
        self.size.get(1).copied().unwrap_or(0)
    }
}

impl From<RawMazeSnapshot> for MazeSnapshot {
    fn from(raw: RawMazeSnapshot) -> Self {
        Self {
            pony: raw.pony,
            domokun: raw.domokun,
            end_point: raw.end_point,
            size: raw.size,
            difficulty: raw.difficulty,
            data: raw.data,
        }
    }
}

/// Reply to a move command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveResult {
    pub state: Option<String>,
    #[serde(rename = "state-result")]
    pub state_result: Option<String>,
}

/// Requested maze dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { width: 15, height: 15 }
    }
}

/// Direction of a pony move, serialized the way the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stay,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stay => "stay",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
