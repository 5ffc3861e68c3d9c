//! Move directions - the four discrete inputs the engine accepts

use serde::{Deserialize, Serialize};

/// A directional move request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum Direction {
    /// Slide tiles toward column 0
    #[default]
    Left = 0,
    /// Slide tiles toward column 3
    Right = 1,
    /// Slide tiles toward row 0
    Up = 2,
    /// Slide tiles toward row 3
    Down = 3,
}

impl Direction {
    /// Convert from move index (0-3) to Direction
    pub fn from_index(index: u8) -> Option<Direction> {
        match index {
            0 => Some(Direction::Left),
            1 => Some(Direction::Right),
            2 => Some(Direction::Up),
            3 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Get all four directions
    pub fn all() -> [Direction; 4] {
        [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ]
    }

    /// The direction pointing the opposite way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Check if this move slides along rows rather than columns
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::from_index(value).ok_or(())
    }
}
