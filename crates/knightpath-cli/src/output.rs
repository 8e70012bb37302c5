//! Output formatting utilities

use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use knightpath_core::{Cell, DistanceMap, Grid, SearchReport, SearchResult};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}

/// Pretty JSON for any serializable value
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

/// Algebraic name when the board has letters for it, `(row, col)` otherwise
pub fn cell_label(cell: Cell) -> String {
    cell.to_algebraic().unwrap_or_else(|| cell.to_string())
}

fn file_label(col: i32) -> String {
    Cell::new(0, col)
        .to_algebraic()
        .and_then(|name| name.chars().next())
        .map(String::from)
        .unwrap_or_else(|| col.to_string())
}

fn plural_moves(n: u32) -> String {
    if n == 1 {
        "1 move".to_string()
    } else {
        format!("{} moves", n)
    }
}

/// Snake-case outcome name, as used in JSON and CSV
pub fn outcome_name(result: &SearchResult) -> &'static str {
    match result {
        SearchResult::Found { .. } => "found",
        SearchResult::ExceedsLimit { .. } => "exceeds_limit",
        SearchResult::Unreachable => "unreachable",
    }
}

/// Text board, highest rank on top, with `marks` drawn on their cells
pub fn render_board(grid: Grid, marks: &HashMap<Cell, String>) -> String {
    let dimension = grid.dimension();
    let width = marks
        .values()
        .map(|m| m.len())
        .chain(std::iter::once(file_label(dimension - 1).len()))
        .max()
        .unwrap_or(1)
        + 1;
    let rank_width = dimension.to_string().len();

    let mut out = String::new();
    for row in (0..dimension).rev() {
        out.push_str(&format!("{:>rank_width$}", row + 1));
        for col in 0..dimension {
            let mark = marks
                .get(&Cell::new(row, col))
                .map(String::as_str)
                .unwrap_or(".");
            out.push_str(&format!("{:>width$}", mark));
        }
        out.push('\n');
    }
    out.push_str(&" ".repeat(rank_width));
    for col in 0..dimension {
        out.push_str(&format!("{:>width$}", file_label(col)));
    }
    out.push('\n');
    out
}

/// Knight on the first cell, hop numbers on the rest
pub fn path_marks(path: &[Cell]) -> HashMap<Cell, String> {
    path.iter()
        .enumerate()
        .map(|(i, &cell)| {
            let mark = if i == 0 { "N".to_string() } else { i.to_string() };
            (cell, mark)
        })
        .collect()
}

/// Render a search report
pub fn format_report(report: &SearchReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(report),
        OutputFormat::Csv => report_csv(report),
        OutputFormat::Table => report_table(report),
    }
}

fn report_csv(report: &SearchReport) -> String {
    let move_count = report
        .result
        .move_count()
        .map(|n| n.to_string())
        .unwrap_or_default();
    let path = report
        .result
        .path()
        .map(|p| p.iter().map(|&c| cell_label(c)).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    format!(
        "outcome,move_count,path\n{},{},{}\n",
        outcome_name(&report.result),
        move_count,
        path
    )
}

fn report_table(report: &SearchReport) -> String {
    let query = &report.query;
    let board = format!("{}x{} board", query.dimension, query.dimension);
    let from = cell_label(query.start);
    let to = cell_label(query.target);

    let mut out = match &report.result {
        SearchResult::Found { path, move_count } => {
            let route: Vec<String> = path.iter().map(|&c| cell_label(c)).collect();
            let mut text = format!(
                "Path from {} to {} on {}: {} (limit {})\n",
                from,
                to,
                board,
                plural_moves(*move_count),
                query.max_depth
            );
            text.push_str(&format!("  Route: {}\n\n", route.join(" -> ")));
            if let Ok(grid) = Grid::new(query.dimension) {
                text.push_str(&render_board(grid, &path_marks(path)));
            }
            text
        }
        SearchResult::ExceedsLimit { move_count } => format!(
            "The target can not be reached in {} or less\n  ({} to {} needs {} on {})\n",
            plural_moves(query.max_depth.max(0) as u32),
            from,
            to,
            plural_moves(*move_count),
            board
        ),
        SearchResult::Unreachable => format!(
            "The target position is not reachable\n  (no knight path from {} to {} on {})\n",
            from, to, board
        ),
    };

    out.push_str(&format!(
        "\n  Stats: expanded {} cells, discovered {}\n",
        report.stats.cells_expanded, report.stats.cells_discovered
    ));
    out
}

#[derive(Serialize)]
struct ReachOutput<'a> {
    dimension: i32,
    start: Cell,
    reachable: usize,
    eccentricity: u32,
    rows: Vec<&'a [Option<u32>]>,
}

/// Render a distance map
pub fn format_distance_map(map: &DistanceMap, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&ReachOutput {
            dimension: map.grid.dimension(),
            start: map.start,
            reachable: map.reachable_count(),
            eccentricity: map.eccentricity(),
            rows: map.rows().collect(),
        }),
        OutputFormat::Csv => {
            let mut out = String::from("row,col,square,distance\n");
            for cell in map.grid.cells() {
                let distance = map.distance(cell).map(|d| d.to_string()).unwrap_or_default();
                out.push_str(&format!(
                    "{},{},{},{}\n",
                    cell.row,
                    cell.col,
                    cell_label(cell),
                    distance
                ));
            }
            out
        }
        OutputFormat::Table => {
            let marks: HashMap<Cell, String> = map
                .grid
                .cells()
                .map(|cell| {
                    let mark = map
                        .distance(cell)
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    (cell, mark)
                })
                .collect();
            let dimension = map.grid.dimension();
            format!(
                "Distances from {} on {}x{} board ({} of {} cells reachable, farthest {}):\n\n{}",
                cell_label(map.start),
                dimension,
                dimension,
                map.reachable_count(),
                map.grid.cell_count(),
                plural_moves(map.eccentricity()),
                render_board(map.grid, &marks)
            )
        }
    }
}
