use ndarray::Array2;

/// Single coordinate axis used for row/column indices and field dimensions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Position of a cell as `(row, col)`, both zero-based.
pub type CellPosition = (Coord, Coord);

/// Field dimensions as `(rows, cols)`.
pub type FieldSize = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for CellPosition {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn in_bounds((rows, cols): FieldSize, (row, col): CellPosition) -> bool {
    row < rows && col < cols
}

/// Row-major iteration over every position of a field.
pub fn iter_positions((rows, cols): FieldSize) -> impl Iterator<Item = CellPosition> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, pos: CellPosition) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, pos: CellPosition) -> NeighborIter {
        let (rows, cols) = self.dim();
        let size = (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(pos, size)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: CellPosition, delta: (i8, i8), bounds: FieldSize) -> Option<CellPosition> {
    let next = (
        pos.0.checked_add_signed(delta.0)?,
        pos.1.checked_add_signed(delta.1)?,
    );
    in_bounds(bounds, next).then_some(next)
}

/// Moore neighborhood of a cell, clamped at the field edges.
#[derive(Debug)]
pub struct NeighborIter {
    center: CellPosition,
    bounds: FieldSize,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: CellPosition, bounds: FieldSize) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellPosition;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn far_corner_stays_in_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((4, 2), (5, 3)).collect();

        assert_eq!(neighbors, [(3, 1), (3, 2), (4, 1)]);
    }

    #[test]
    fn single_cell_field_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn positions_are_row_major() {
        let positions: Vec<_> = iter_positions((2, 3)).collect();

        assert_eq!(positions, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn in_bounds_rejects_edges() {
        assert!(in_bounds((2, 3), (1, 2)));
        assert!(!in_bounds((2, 3), (2, 0)));
        assert!(!in_bounds((2, 3), (0, 3)));
    }
}
