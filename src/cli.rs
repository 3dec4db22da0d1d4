//! CLI definitions: argument parsing, subcommands, and help text.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  bender-slack convert reply.md              Print reply.md as Slack mrkdwn
  bender-slack convert --preserve-code -     Convert stdin, leaving code fences alone
  bender-slack split --max-length 3000 log   Split a file into 3000-char chunks
  bender-slack send-ready --json reply.md    Convert then split, as a JSON report
  bender-slack completions bash              Generate bash completions

ENVIRONMENT:
  BENDER_SLACK_MSG_LIMIT   Default chunk length (default 4000)
  RUST_LOG                 Log filter, overrides -v/-q
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Format chat-bot replies for Slack: Markdown to mrkdwn and message splitting",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert Markdown to Slack mrkdwn
    Convert {
        /// Leave lines inside ``` fences untouched
        #[arg(long)]
        preserve_code: bool,
        #[command(flatten)]
        input: InputArg,
    },
    /// Split text into chunks that fit one Slack message
    Split {
        #[command(flatten)]
        output: ChunkOutput,
        #[command(flatten)]
        input: InputArg,
    },
    /// Convert to mrkdwn, then split into message-sized chunks
    SendReady {
        /// Leave lines inside ``` fences untouched
        #[arg(long)]
        preserve_code: bool,
        #[command(flatten)]
        output: ChunkOutput,
        #[command(flatten)]
        input: InputArg,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(ClapArgs)]
pub struct InputArg {
    /// Input file (reads stdin when omitted or '-')
    pub file: Option<PathBuf>,
}

#[derive(ClapArgs)]
pub struct ChunkOutput {
    /// Maximum chunk length in characters (overrides BENDER_SLACK_MSG_LIMIT)
    #[arg(short = 'n', long)]
    pub max_length: Option<NonZeroUsize>,

    /// Print chunks as a JSON report instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
