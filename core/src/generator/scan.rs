use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Single-pass row-major generator.
///
/// Every cell except the origin gets a mine with probability equal to the requested density. Once the
/// mines still to place equal the cells still to visit, every remaining cell is mined, which is what keeps
/// the final count exact whatever the random draws were. If that point is reached on the origin, the mine
/// it would have taken goes to the first free cell in row-major order instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanGenerator<R = SmallRng> {
    rng: R,
}

impl ScanGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ScanGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineGenerator for ScanGenerator<R> {
    fn generate(&mut self, config: FieldConfig, origin: CellPosition) -> Result<MineLayout> {
        if !config.in_bounds(origin) {
            return Err(FieldError::InvalidPosition);
        }

        let total_cells = config.total_cells();
        let density = (f64::from(config.mines) / f64::from(total_cells)).min(1.0);
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut remaining_mines = config.mines;

        for (index, pos) in iter_positions(config.size).enumerate() {
            let remaining_cells = total_cells - index as CellCount;

            if pos == origin {
                if remaining_mines >= remaining_cells {
                    let displaced =
                        first_free_cell(&mines, origin).ok_or(FieldError::GenerationFailed)?;
                    log::warn!("Origin {origin:?} would be mined, placing its mine at {displaced:?}");
                    mines[displaced.to_nd_index()] = true;
                    remaining_mines -= 1;
                }
                continue;
            }

            let forced = remaining_mines == remaining_cells;
            if forced || (remaining_mines > 0 && self.rng.random_bool(density)) {
                log::trace!("Mine placed at {pos:?}, forced: {forced}");
                mines[pos.to_nd_index()] = true;
                remaining_mines -= 1;
            }
        }

        check_layout(MineLayout::from_mine_mask(mines)?, config, origin)
    }
}

fn first_free_cell(mines: &Array2<bool>, origin: CellPosition) -> Option<CellPosition> {
    let (rows, cols) = mines.dim();
    let size = (rows as Coord, cols as Coord);
    iter_positions(size).find(|&pos| pos != origin && !mines[pos.to_nd_index()])
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use rand::RngCore;

    use super::*;

    /// Always yields the same word, so every density draw has a fixed answer.
    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(self.0 as u8);
        }
    }

    fn always_accept() -> ScanGenerator<ConstRng> {
        ScanGenerator::new(ConstRng(0))
    }

    fn never_accept() -> ScanGenerator<ConstRng> {
        ScanGenerator::new(ConstRng(u64::MAX))
    }

    fn mines_of(layout: &MineLayout) -> Vec<CellPosition> {
        layout.positions().collect()
    }

    #[test]
    fn accepted_draws_fill_from_the_start_skipping_origin() {
        let config = FieldConfig::new((3, 3), 3).unwrap();

        let layout = always_accept().generate(config, (0, 0)).unwrap();

        assert_eq!(mines_of(&layout), [(0, 1), (0, 2), (1, 0)]);
    }

    #[test]
    fn rejected_draws_force_the_tail() {
        let config = FieldConfig::new((3, 3), 3).unwrap();

        let layout = never_accept().generate(config, (0, 0)).unwrap();

        assert_eq!(mines_of(&layout), [(2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn forced_mine_on_origin_is_displaced() {
        let config = FieldConfig::new((3, 3), 3).unwrap();

        let layout = never_accept().generate(config, (2, 2)).unwrap();

        assert_eq!(mines_of(&layout), [(0, 0), (2, 0), (2, 1)]);
    }

    #[test]
    fn full_field_leaves_only_origin_safe() {
        let config = FieldConfig::new((2, 2), 3).unwrap();

        for origin in iter_positions((2, 2)) {
            for mut generator in [always_accept(), never_accept()] {
                let layout = generator.generate(config, origin).unwrap();

                assert_eq!(layout.mine_count(), 3);
                assert!(!layout.contains_mine(origin));
            }
        }
    }

    #[test]
    fn zero_mines_generates_empty_layout() {
        let config = FieldConfig::new((4, 4), 0).unwrap();

        let layout = always_accept().generate(config, (1, 1)).unwrap();

        assert_eq!(layout.mine_count(), 0);
    }

    #[test]
    fn seeded_generation_is_exact_and_reproducible() {
        for seed in 0..200 {
            let rows = (seed % 7 + 1) as Coord;
            let cols = (seed % 5 + 2) as Coord;
            let mines = (seed as CellCount * 3) % mult(rows, cols);
            let config = FieldConfig::new((rows, cols), mines).unwrap();
            let origin = ((seed % rows as u64) as Coord, (seed % cols as u64) as Coord);

            let layout = ScanGenerator::from_seed(seed).generate(config, origin).unwrap();
            let again = ScanGenerator::from_seed(seed).generate(config, origin).unwrap();

            assert_eq!(layout.mine_count(), mines);
            assert!(!layout.contains_mine(origin));
            assert_eq!(layout, again);
        }
    }

    #[test]
    fn rejects_origin_outside_field() {
        let config = FieldConfig::new((2, 2), 1).unwrap();

        assert_eq!(
            always_accept().generate(config, (2, 0)),
            Err(FieldError::InvalidPosition)
        );
    }
}
