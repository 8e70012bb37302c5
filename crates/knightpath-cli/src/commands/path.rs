//! Path command

use std::process::ExitCode;

use clap::Args;

use crate::output::format_report;
use crate::AppContext;
use knightpath_core::{Cell, SearchEngine, SearchQuery, SearchResult};

/// Exit status when the target needs more moves than allowed
pub const EXIT_EXCEEDS_LIMIT: u8 = 3;

/// Exit status when no knight path exists
pub const EXIT_UNREACHABLE: u8 = 4;

#[derive(Args)]
pub struct PathArgs {
    /// Starting cell ('row,col' or algebraic, e.g. a1)
    pub start: Cell,

    /// Target cell ('row,col' or algebraic, e.g. c2)
    pub target: Cell,
}

pub fn run(args: &PathArgs, ctx: &AppContext) -> anyhow::Result<ExitCode> {
    let query = SearchQuery::new(args.start, args.target)
        .on_board(ctx.dimension)
        .with_max_depth(ctx.max_depth);

    tracing::info!(
        "Finding path from {} to {} (dimension: {}, max_depth: {})",
        args.start,
        args.target,
        ctx.dimension,
        ctx.max_depth
    );

    let report = SearchEngine::execute(&query)?;
    print!("{}", format_report(&report, ctx.format));

    let code = match report.result {
        SearchResult::Found { .. } => ExitCode::SUCCESS,
        SearchResult::ExceedsLimit { .. } => ExitCode::from(EXIT_EXCEEDS_LIMIT),
        SearchResult::Unreachable => ExitCode::from(EXIT_UNREACHABLE),
    };
    Ok(code)
}
