//! Reach command

use clap::Args;

use crate::output::format_distance_map;
use crate::AppContext;
use knightpath_core::{Cell, SearchEngine};

#[derive(Args)]
pub struct ReachArgs {
    /// Starting cell ('row,col' or algebraic, e.g. a1)
    pub start: Cell,
}

pub fn run(args: &ReachArgs, ctx: &AppContext) -> anyhow::Result<()> {
    tracing::info!(
        "Computing distances from {} on {}x{} board",
        args.start,
        ctx.dimension,
        ctx.dimension
    );

    let map = SearchEngine::distances_from(ctx.dimension, args.start)?;
    print!("{}", format_distance_map(&map, ctx.format));
    Ok(())
}
