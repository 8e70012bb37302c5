//! CLI command implementations

pub mod completions;
pub mod config;
pub mod path;
pub mod play;
pub mod reach;
