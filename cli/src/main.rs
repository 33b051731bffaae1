use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use minefield_core::*;

use input::{Action, Command, ParseError, parse_command};

mod input;
mod render;

/// Terminal minesweeper: open cells with `<row> <column> free`, flag them with `<row> <column> mine`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u8).range(1..))]
    rows: Coord,

    /// Number of columns, each one is addressed by a letter
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u8).range(1..=26))]
    cols: Coord,

    /// Number of mines, asked for when omitted
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Seed for mine placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let mut lines = io::stdin().lock().lines();
    let mut out = io::stdout().lock();

    let config = match cli.mines {
        Some(mines) => FieldConfig::new((cli.rows, cli.cols), mines)
            .context("invalid field configuration")?,
        None => prompt_config(&mut lines, &mut out, (cli.rows, cli.cols))?,
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "Starting a {:?} field with {} mines, seed {seed}",
        config.size,
        config.mines
    );

    let mut field = Field::new(config, seed)?;
    play(&mut field, &mut lines, &mut out)
}

fn prompt_config(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    size: FieldSize,
) -> Result<FieldConfig> {
    loop {
        write!(out, "How many mines do you want on the field? ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            bail!("input closed before the mine count was given");
        };
        let line = line.context("failed to read the mine count")?;

        match line.trim().parse() {
            Ok(mines) => match FieldConfig::new(size, mines) {
                Ok(config) => return Ok(config),
                Err(err) => writeln!(out, "{err}. Enter a new number.")?,
            },
            Err(_) => writeln!(out, "The number of mines should be a non-negative integer.")?,
        }
    }
}

fn prompt_command<G>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    field: &Field<G>,
) -> Result<Option<Command>> {
    loop {
        write!(out, "Set/unset mine marks or claim a cell as free: ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read a move")?;

        match parse_command(&line) {
            Ok(command) if field.in_bounds(command.pos) => return Ok(Some(command)),
            Ok(_) => writeln!(out, "Those coordinates are outside of the field.")?,
            Err(err @ ParseError::Action) => writeln!(out, "{err}")?,
            Err(err) => log::debug!("Unparseable move {line:?}: {err}"),
        }
    }
}

fn play<G: MineGenerator>(
    field: &mut Field<G>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<()> {
    loop {
        render::write_field(out, &field.snapshot(false))?;

        let Some(Command { pos, action }) = prompt_command(lines, out, field)? else {
            log::info!("Input closed, leaving the game");
            return Ok(());
        };

        match action {
            Action::Free => {
                let outcome = field.open(pos)?;
                log::debug!("Opened {pos:?}: {outcome:?}");
            }
            Action::Mark => {
                if !field.mark(pos)?.has_update() {
                    writeln!(out, "Cell is opened")?;
                }
            }
        }

        if field.state().is_finished() {
            return write_ending(field, out);
        }
    }
}

fn write_ending<G>(field: &Field<G>, out: &mut impl Write) -> Result<()> {
    match field.state() {
        FieldState::Won => {
            render::write_field(out, &field.snapshot(false))?;
            writeln!(out, "Congratulations! You found all the mines!")?;
        }
        FieldState::Lost => {
            render::write_field(out, &field.snapshot(true))?;
            writeln!(out, "You stepped on a mine and failed!")?;
        }
        FieldState::Unseeded | FieldState::Active => {}
    }
    Ok(())
}
