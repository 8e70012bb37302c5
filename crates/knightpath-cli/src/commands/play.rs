//! Interactive play command

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use crate::output::{cell_label, format_report, render_board, OutputFormat};
use crate::session::{Selection, Session};
use crate::AppContext;
use knightpath_core::Cell;

const HELP: &str = "\
Enter a cell ('row,col' or algebraic, e.g. a1) to place the knight,
then another cell to search for a path to it.
Commands:
  show     print the board
  clear    remove the target, keep the knight
  reset    empty the board
  size N   switch to an N x N board
  quit     leave
";

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let session = Session::new(ctx.dimension, ctx.max_depth)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(session, stdin.lock(), stdout.lock(), ctx.format)
}

/// Drive a session from line-based input
pub fn run_session<R: BufRead, W: Write>(
    mut session: Session,
    input: R,
    mut out: W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let dimension = session.grid().dimension();
    writeln!(out, "{}x{} board. Type 'help' for commands.", dimension, dimension)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        let mut words = command.split_whitespace();

        match words.next() {
            None => continue,
            Some("quit") | Some("exit") => break,
            Some("help") => write!(out, "{}", HELP)?,
            Some("show") => write!(out, "{}", show_board(&session))?,
            Some("clear") => {
                session.clear_target();
                writeln!(out, "Target cleared")?;
            }
            Some("reset") => {
                session.reset();
                writeln!(out, "Board cleared")?;
            }
            Some("size") => match words.next().map(str::parse::<i32>) {
                Some(Ok(n)) => match session.resize(n) {
                    Ok(()) => writeln!(out, "Board is now {}x{}", n, n)?,
                    Err(e) => writeln!(out, "{}", e)?,
                },
                _ => writeln!(out, "Usage: size N")?,
            },
            Some(_) => {
                let cell: Cell = match command.parse() {
                    Ok(cell) => cell,
                    Err(e) => {
                        writeln!(out, "{}", e)?;
                        continue;
                    }
                };
                match session.select(cell) {
                    Ok(Selection::KnightPlaced(c)) => {
                        writeln!(out, "Knight placed on {}", cell_label(c))?
                    }
                    Ok(Selection::Searched(report)) => {
                        write!(out, "{}", format_report(&report, format))?
                    }
                    Ok(Selection::Ignored(reason)) => writeln!(out, "Ignored: {}", reason)?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn show_board(session: &Session) -> String {
    let mut marks = HashMap::new();
    if let Some(knight) = session.knight() {
        marks.insert(knight, "N".to_string());
    }
    if let Some(target) = session.target() {
        marks.insert(target, "T".to_string());
    }
    render_board(session.grid(), &marks)
}
