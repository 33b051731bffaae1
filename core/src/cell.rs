use serde::{Deserialize, Serialize};

/// What a cell holds, fixed once the field is seeded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    SafeCount(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// A safe cell with no adjacent mines, the source of a cascade.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::SafeCount(0))
    }
}

/// Player-facing state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellVisibility {
    Hidden,
    Marked,
    Opened,
}

impl Default for CellVisibility {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Rendering view of one cell, see [`crate::Snapshot`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Marked,
    Empty,
    Number(u8),
    /// Only produced by a reveal-all snapshot.
    Mine,
}

impl CellView {
    pub const fn opened(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            n => Self::Number(n),
        }
    }
}
