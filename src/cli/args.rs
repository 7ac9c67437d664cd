//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::config::{self, FileConfig};
use crate::models::{GenerationMode, DEFAULT_QUESTION_COUNT};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Quizgen TUI - generate quizzes from documents in the terminal
#[derive(Debug, Parser)]
#[command(name = "quizgen-tui", version, about)]
pub struct Cli {
    /// Base URL of the quiz server
    #[arg(short, long)]
    pub server: Option<String>,

    /// Document to pre-fill in the upload field (PDF, DOCX or TXT)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Number of questions to request
    #[arg(short = 'n', long)]
    pub num_questions: Option<u32>,

    /// Generation mode
    #[arg(short, long, value_enum)]
    pub mode: Option<GenerationMode>,

    /// Ask the server to use its AI generator
    #[arg(long)]
    pub ai: bool,

    /// Config file (default: <config dir>/quizgen/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (default: <data dir>/quizgen/quizgen-tui.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Configuration from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub server_url: String,
    pub file: Option<PathBuf>,
    pub num_questions: u32,
    pub mode: GenerationMode,
    pub use_ai: bool,
    pub log_file: PathBuf,
    pub request_timeout: Option<Duration>,
    pub verbose: bool,
}

impl CliConfig {
    /// Merge flags over file values over defaults
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Self> {
        let server_url = cli
            .server
            .or(file.server_url)
            .unwrap_or_else(|| config::DEFAULT_SERVER_URL.to_string());

        Ok(Self {
            server_url: config::validate_server_url(&server_url)?,
            file: cli.file,
            num_questions: cli
                .num_questions
                .or(file.num_questions)
                .unwrap_or(DEFAULT_QUESTION_COUNT),
            mode: cli.mode.or(file.mode).unwrap_or_default(),
            use_ai: cli.ai || file.use_ai.unwrap_or(false),
            log_file: cli
                .log_file
                .or(file.log_file)
                .unwrap_or_else(config::default_log_path),
            request_timeout: file.request_timeout_secs.map(Duration::from_secs),
            verbose: cli.verbose,
        })
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let cli = Cli::parse();
    let file = FileConfig::discover(cli.config.as_deref())?;
    CliConfig::resolve(cli, file)
}
