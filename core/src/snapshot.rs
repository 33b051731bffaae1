use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a field, the only input a renderer needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: FieldSize,
    pub mine_count: CellCount,
    pub marks_left: i32,
    pub state: FieldState,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    /// Builds the player view of `field`.
    ///
    /// With `reveal_all`, every mine is shown as [`CellView::Mine`] whatever its visibility; other cells are
    /// unaffected. Before the mines are placed there is nothing to reveal.
    pub fn from_field<G>(field: &Field<G>, reveal_all: bool) -> Self {
        let size = field.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let pos = (row as Coord, col as Coord);
            let content = field.content_at(pos);

            match (field.visibility_at(pos), content) {
                (_, Some(CellContent::Mine)) if reveal_all => CellView::Mine,
                (CellVisibility::Hidden, _) => CellView::Hidden,
                (CellVisibility::Marked, _) => CellView::Marked,
                (CellVisibility::Opened, Some(CellContent::SafeCount(count))) => {
                    CellView::opened(count)
                }
                // opened cells only exist once seeded and are never mines
                (CellVisibility::Opened, _) => CellView::Hidden,
            }
        });

        Self {
            size,
            mine_count: field.mine_count(),
            marks_left: field.marks_left(),
            state: field.state(),
            cells,
        }
    }

    pub fn cell(&self, pos: CellPosition) -> CellView {
        self.cells[pos.to_nd_index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, CellView>> {
        self.cells.rows().into_iter()
    }
}
