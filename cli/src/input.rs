use minefield_core::{CellPosition, Coord};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Free,
    Mark,
}

impl Action {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "free" => Some(Self::Free),
            "mine" | "mark" => Some(Self::Mark),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub pos: CellPosition,
    pub action: Action,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected a row number and a column letter")]
    Coordinates,
    #[error("Typo in query. Try again.")]
    Action,
}

/// Parses `<row> <column letter> [free|mine]`, rows counted from 1.
///
/// The row and the column may come in either order. A missing action means `free`.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
        return Err(ParseError::Coordinates);
    };

    let row = parse_row(first)
        .or_else(|| parse_row(second))
        .ok_or(ParseError::Coordinates)?;
    let col = parse_col(second)
        .or_else(|| parse_col(first))
        .ok_or(ParseError::Coordinates)?;
    let action = match tokens.next() {
        Some(token) => Action::parse(token).ok_or(ParseError::Action)?,
        None => Action::Free,
    };

    Ok(Command {
        pos: (row, col),
        action,
    })
}

fn parse_row(token: &str) -> Option<Coord> {
    let row: u16 = token.parse().ok()?;
    Coord::try_from(row.checked_sub(1)?).ok()
}

fn parse_col(token: &str) -> Option<Coord> {
    match token.as_bytes() {
        [letter @ b'a'..=b'z'] => Some(letter - b'a'),
        _ => None,
    }
}
