use std::io::{self, Write};

use minefield_core::{CellView, Snapshot};

const HIDDEN_CHAR: char = '.';
const MARK_CHAR: char = '*';
const EMPTY_CHAR: char = '/';
const MINE_CHAR: char = 'X';

fn cell_char(cell: CellView) -> char {
    match cell {
        CellView::Hidden => HIDDEN_CHAR,
        CellView::Marked => MARK_CHAR,
        CellView::Empty => EMPTY_CHAR,
        CellView::Number(count) => char::from(b'0' + count),
        CellView::Mine => MINE_CHAR,
    }
}

/// Writes the board with letter columns and 1-based row numbers.
pub fn write_field(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    let (rows, cols) = snapshot.size;
    let indent = rows.to_string().len();
    let letters: String = (b'a'..).take(cols.into()).map(char::from).collect();
    let separator = format!("{}|{}|", "-".repeat(indent), "-".repeat(cols.into()));

    writeln!(out, "{}|{letters}|", " ".repeat(indent))?;
    writeln!(out, "{separator}")?;
    for (index, row) in snapshot.rows().enumerate() {
        let line: String = row.iter().map(|&cell| cell_char(cell)).collect();
        writeln!(out, "{:>indent$}|{line}|", index + 1)?;
    }
    writeln!(out, "{separator}")?;
    writeln!(out, "Mines left: {}", snapshot.marks_left)
}

#[cfg(test)]
mod tests {
    use minefield_core::*;

    use super::*;

    fn render(field: &Field<FixedGenerator>, reveal_all: bool) -> String {
        let mut out = Vec::new();
        write_field(&mut out, &field.snapshot(reveal_all)).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn field(size: FieldSize, mines: &[CellPosition]) -> Field<FixedGenerator> {
        let layout = MineLayout::from_positions(size, mines).unwrap();
        let config = FieldConfig::new(size, layout.mine_count()).unwrap();
        Field::with_generator(config, FixedGenerator::new(layout)).unwrap()
    }

    #[test]
    fn renders_hidden_marked_and_opened_cells() {
        let mut field = field((3, 4), &[(0, 0), (2, 3)]);
        field.open((0, 3)).unwrap();
        field.mark((2, 0)).unwrap();

        let expected = " |abcd|\n\
-|----|
1|.1//|
2|.111|
3|*...|
-|----|
Mines left: 1
";
        assert_eq!(render(&field, false), expected);
    }

    #[test]
    fn reveal_all_shows_mines() {
        let mut field = field((2, 2), &[(1, 1)]);
        field.open((0, 0)).unwrap();
        field.open((1, 1)).unwrap();

        assert!(render(&field, true).contains("1|1.|\n2|.X|"));
    }

    #[test]
    fn pads_row_numbers() {
        let field = field((10, 1), &[]);

        let output = render(&field, false);

        assert!(output.starts_with("  |a|\n--|-|\n"));
        assert!(output.contains(" 9|.|\n10|.|\n"));
    }
}
