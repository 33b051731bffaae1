use super::*;

/// Replays a predetermined layout, for scripted scenarios and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedGenerator {
    layout: MineLayout,
}

impl FixedGenerator {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }
}

impl MineGenerator for FixedGenerator {
    fn generate(&mut self, config: FieldConfig, origin: CellPosition) -> Result<MineLayout> {
        if !config.in_bounds(origin) {
            return Err(FieldError::InvalidPosition);
        }
        check_layout(self.layout.clone(), config, origin)
    }
}
