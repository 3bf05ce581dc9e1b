//! Command-line interface over the Kruskal teaching engine.
//!
//! `walk` steps through the ascending-weight order, `seek` jumps to a step
//! index, and `practice` judges a sequence of picks with the greedy rule.
//! Each command works on a JSON graph file or the built-in four-node sample.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GraphArgs, PracticeCommand, PracticeSummary,
    SeekCommand, WalkCommand, run_cli, sample_graph,
};
pub use render::render_summary;
