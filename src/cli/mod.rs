//! CLI argument parsing for quizgen-tui.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
