use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a field, tracked for display only.
///
/// Moves on a won or lost field are still accepted; callers are expected to stop on their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    /// No cell opened yet, mines not placed.
    Unseeded,
    Active,
    Won,
    Lost,
}

impl FieldState {
    pub const fn is_seeded(self) -> bool {
        !matches!(self, Self::Unseeded)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::Unseeded
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Seeded {
    layout: MineLayout,
    contents: Array2<CellContent>,
}

/// A single game: mines, per-cell contents and the player's opened and marked cells.
///
/// Mines are placed on the first [`Field::open`], so the first opened cell is never a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<G = ScanGenerator> {
    config: FieldConfig,
    generator: G,
    seeded: Option<Seeded>,
    board: Array2<CellVisibility>,
    opened_count: CellCount,
    marked_count: CellCount,
    state: FieldState,
    detonated_at: Option<CellPosition>,
}

impl Field {
    /// Field whose mines will come from a [`ScanGenerator`] seeded with `seed`.
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, ScanGenerator::from_seed(seed))
    }
}

impl<G: MineGenerator> Field<G> {
    pub fn with_generator(config: FieldConfig, generator: G) -> Result<Self> {
        let config = FieldConfig::new(config.size, config.mines)?;
        Ok(Self {
            config,
            generator,
            seeded: None,
            board: Array2::default(config.size.to_nd_index()),
            opened_count: 0,
            marked_count: 0,
            state: FieldState::Unseeded,
            detonated_at: None,
        })
    }

    /// Opens `pos`, placing the mines first if this is the first open.
    ///
    /// Opening an empty cell also opens its whole empty region and the numbered cells around it, clearing
    /// any marks on the way. A mine is reported as [`OpenOutcome::Detonated`] and leaves the board as is.
    pub fn open(&mut self, pos: CellPosition) -> Result<OpenOutcome> {
        let pos = self.validate_position(pos)?;

        if self.seeded.is_none() {
            self.seed(pos)?;
        }
        let Some(seeded) = self.seeded.as_ref() else {
            return Err(FieldError::GenerationFailed);
        };

        if self.board[pos.to_nd_index()] == CellVisibility::Opened {
            return Ok(OpenOutcome::AlreadyOpen);
        }

        if seeded.contents[pos.to_nd_index()].is_mine() {
            log::debug!("Mine detonated at {pos:?}");
            self.detonated_at = Some(pos);
            self.state = FieldState::Lost;
            return Ok(OpenOutcome::Detonated);
        }

        let region = open_region(&mut self.board, &seeded.contents, pos);
        if region.opened > 1 {
            log::debug!("Cascade from {pos:?} opened {} cells", region.opened);
        }
        self.opened_count += region.opened;
        self.marked_count -= region.unmarked;
        self.refresh_state();

        Ok(OpenOutcome::Opened)
    }

    /// Toggles the mark on an unopened cell, opened cells are left alone.
    pub fn mark(&mut self, pos: CellPosition) -> Result<MarkOutcome> {
        use CellVisibility::*;

        let pos = self.validate_position(pos)?;

        let outcome = match self.board[pos.to_nd_index()] {
            Hidden => {
                self.board[pos.to_nd_index()] = Marked;
                self.marked_count += 1;
                MarkOutcome::Marked
            }
            Marked => {
                self.board[pos.to_nd_index()] = Hidden;
                self.marked_count -= 1;
                MarkOutcome::Unmarked
            }
            Opened => MarkOutcome::NoChange,
        };
        self.refresh_state();

        Ok(outcome)
    }

    fn seed(&mut self, origin: CellPosition) -> Result<()> {
        let layout = self.generator.generate(self.config, origin)?;
        let contents = count_neighbors(&layout);
        log::debug!(
            "Field {:?} seeded with {} mines, origin {origin:?}",
            self.config.size,
            layout.mine_count()
        );
        self.seeded = Some(Seeded { layout, contents });
        self.state = FieldState::Active;
        Ok(())
    }

    fn refresh_state(&mut self) {
        if self.state == FieldState::Active && self.is_won() {
            log::debug!("Field won");
            self.state = FieldState::Won;
        }
    }

    fn validate_position(&self, pos: CellPosition) -> Result<CellPosition> {
        if self.in_bounds(pos) {
            Ok(pos)
        } else {
            Err(FieldError::InvalidPosition)
        }
    }
}

impl<G> Field<G> {
    /// Won once every safe cell is opened, or once the marks are exactly the mines.
    ///
    /// A field without mines placed yet is never won.
    pub fn is_won(&self) -> bool {
        let Some(seeded) = &self.seeded else {
            return false;
        };

        if self.opened_count == self.config.safe_cells() {
            return true;
        }

        self.marked_count == self.config.mines
            && self
                .board
                .indexed_iter()
                .filter(|(_, visibility)| **visibility == CellVisibility::Marked)
                .all(|((row, col), _)| seeded.layout[(row as Coord, col as Coord)])
    }

    pub fn snapshot(&self, reveal_all: bool) -> Snapshot {
        Snapshot::from_field(self, reveal_all)
    }

    pub fn in_bounds(&self, pos: CellPosition) -> bool {
        self.config.in_bounds(pos)
    }

    pub fn size(&self) -> FieldSize {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn opened_count(&self) -> CellCount {
        self.opened_count
    }

    pub fn marked_count(&self) -> CellCount {
        self.marked_count
    }

    /// Mines minus marks, negative when the player over-marks.
    pub fn marks_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.marked_count)
    }

    /// The mine that was opened, if any.
    pub fn detonated_at(&self) -> Option<CellPosition> {
        self.detonated_at
    }

    pub fn visibility_at(&self, pos: CellPosition) -> CellVisibility {
        self.board[pos.to_nd_index()]
    }

    /// Content of a cell, `None` until the mines are placed.
    pub fn content_at(&self, pos: CellPosition) -> Option<CellContent> {
        self.seeded
            .as_ref()
            .map(|seeded| seeded.contents[pos.to_nd_index()])
    }

    pub fn mine_layout(&self) -> Option<&MineLayout> {
        self.seeded.as_ref().map(|seeded| &seeded.layout)
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct Region {
    opened: CellCount,
    unmarked: CellCount,
}

/// Opens the safe cell at `start` and cascades through empty cells with a work-list.
///
/// Cells are opened before their neighbors are queued, so each cell is opened and queued at most once.
fn open_region(
    board: &mut Array2<CellVisibility>,
    contents: &Array2<CellContent>,
    start: CellPosition,
) -> Region {
    let mut region = Region::default();
    let mut to_visit = VecDeque::new();

    let mut open_cell = |pos: CellPosition, to_visit: &mut VecDeque<CellPosition>| {
        let cell = &mut board[pos.to_nd_index()];
        if *cell == CellVisibility::Opened {
            return;
        }
        if *cell == CellVisibility::Marked {
            region.unmarked += 1;
        }
        *cell = CellVisibility::Opened;
        region.opened += 1;

        if contents[pos.to_nd_index()].is_empty() {
            to_visit.push_back(pos);
        }
    };

    open_cell(start, &mut to_visit);
    while let Some(pos) = to_visit.pop_front() {
        for neighbor in contents.iter_neighbors(pos) {
            open_cell(neighbor, &mut to_visit);
        }
    }

    region
}
