use crate::*;
pub use fixed::*;
pub use scan::*;

mod fixed;
mod scan;

/// Places the mines of a field once the first cell to open is known.
pub trait MineGenerator {
    /// Produces exactly `config.mines` mines, none of them at `origin`.
    fn generate(&mut self, config: FieldConfig, origin: CellPosition) -> Result<MineLayout>;
}

/// Final invariant check shared by every generator.
fn check_layout(layout: MineLayout, config: FieldConfig, origin: CellPosition) -> Result<MineLayout> {
    if layout.size() != config.size {
        log::warn!(
            "Generated layout size mismatch, actual: {:?}, requested: {:?}",
            layout.size(),
            config.size
        );
        return Err(FieldError::GenerationFailed);
    }
    if layout.mine_count() != config.mines {
        log::warn!(
            "Generated mine count mismatch, actual: {}, requested: {}",
            layout.mine_count(),
            config.mines
        );
        return Err(FieldError::GenerationFailed);
    }
    if layout.contains_mine(origin) {
        log::warn!("Generated layout mines the origin {origin:?}");
        return Err(FieldError::GenerationFailed);
    }
    Ok(layout)
}
