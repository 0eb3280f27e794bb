//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "prreviewer")]
#[command(about = "Review code diffs with a versioned LLM prompt")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the JSON review API (default)
    Serve(ServeOptions),
    /// Review one diff from a file or stdin and print the model output
    Review(ReviewOptions),
    /// Show the effective configuration (API key redacted)
    Config,
}

/// `serve` 실행 옵션.
#[derive(Debug, Clone, Default, Args)]
pub struct ServeOptions {
    /// Listen address, overrides BIND_ADDR
    #[arg(long)]
    pub bind: Option<String>,

    /// Prompt version to load, overrides PROMPT_VERSION
    #[arg(long)]
    pub prompt_version: Option<String>,
}

/// `review` 1회 실행 옵션.
#[derive(Debug, Clone, Default, Args)]
pub struct ReviewOptions {
    /// Diff file to review; reads stdin when omitted or "-"
    #[arg(long, short = 'f')]
    pub diff_file: Option<PathBuf>,

    /// Programming language of the change
    #[arg(long)]
    pub language: Option<String>,

    /// Repository-specific rules passed to the prompt
    #[arg(long)]
    pub repo_rules: Option<String>,

    /// high, medium or low
    #[arg(long)]
    pub security_level: Option<String>,

    /// all, security, performance or quality
    #[arg(long)]
    pub review_focus: Option<String>,

    /// Prompt version to load, overrides PROMPT_VERSION
    #[arg(long)]
    pub prompt_version: Option<String>,
}

pub enum CliAction {
    Serve(ServeOptions),
    Review(ReviewOptions),
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Self::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            None => CliAction::Serve(ServeOptions::default()),
            Some(Commands::Serve(options)) => CliAction::Serve(options),
            Some(Commands::Review(options)) => CliAction::Review(options),
            Some(Commands::Config) => CliAction::InspectConfig,
        }
    }
}
