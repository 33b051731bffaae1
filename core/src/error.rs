use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field must have at least one row and one column")]
    InvalidSize,
    #[error("Too many mines, at least one cell must stay safe")]
    TooManyMines,
    #[error("Position is outside of the field")]
    InvalidPosition,
    #[error("Mine generation broke its invariants")]
    GenerationFailed,
}

pub type Result<T> = core::result::Result<T, FieldError>;
