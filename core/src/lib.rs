#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use counter::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod counter;
mod error;
mod field;
mod generator;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub size: FieldSize,
    pub mines: CellCount,
}

impl FieldConfig {
    /// Validates that the field is non-empty and leaves at least one safe cell for the first move.
    pub fn new((rows, cols): FieldSize, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(FieldError::InvalidSize);
        }
        let config = Self {
            size: (rows, cols),
            mines,
        };
        if mines >= config.total_cells() {
            return Err(FieldError::TooManyMines);
        }
        Ok(config)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub const fn in_bounds(&self, pos: CellPosition) -> bool {
        in_bounds(self.size, pos)
    }
}

/// Concrete set of mine positions for one field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    size: FieldSize,
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size = (
            rows.try_into().map_err(|_| FieldError::InvalidSize)?,
            cols.try_into().map_err(|_| FieldError::InvalidSize)?,
        );
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Ok(Self {
            size,
            mine_mask,
            mine_count,
        })
    }

    pub fn from_positions(size: FieldSize, mines: &[CellPosition]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &pos in mines {
            if !in_bounds(size, pos) {
                return Err(FieldError::InvalidPosition);
            }
            mine_mask[pos.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn size(&self) -> FieldSize {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, pos: CellPosition) -> bool {
        in_bounds(self.size, pos) && self[pos]
    }

    pub fn adjacent_mine_count(&self, pos: CellPosition) -> u8 {
        self.mine_mask
            .iter_neighbors(pos)
            .filter(|&neighbor| self[neighbor])
            .count() as u8
    }

    /// Mine positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> + '_ {
        iter_positions(self.size).filter(|&pos| self[pos])
    }
}

impl Index<CellPosition> for MineLayout {
    type Output = bool;

    fn index(&self, pos: CellPosition) -> &Self::Output {
        &self.mine_mask[pos.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Marked,
    Unmarked,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    AlreadyOpen,
    Detonated,
    Opened,
}
