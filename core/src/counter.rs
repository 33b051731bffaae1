use ndarray::Array2;

use crate::*;

/// Derives the content of every cell from a mine layout.
///
/// Mines stay [`CellContent::Mine`], every other cell gets the number of mines in its
/// clamped Moore neighborhood.
pub fn count_neighbors(layout: &MineLayout) -> Array2<CellContent> {
    Array2::from_shape_fn(layout.size().to_nd_index(), |(row, col)| {
        let pos = (row as Coord, col as Coord);
        if layout[pos] {
            CellContent::Mine
        } else {
            CellContent::SafeCount(layout.adjacent_mine_count(pos))
        }
    })
}
