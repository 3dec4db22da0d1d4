//! Command handlers: logger init, input reading, and output of converted text and chunks.

use std::fs;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::Path;

use bender_slack::core::config::Config;
use bender_slack::{md_to_mrkdwn, md_to_mrkdwn_preserving_code, split_with_limit};
use clap::CommandFactory;
use serde::Serialize;

use crate::cli::{Args, Commands, InputArg, generate};

/// Line printed between chunks in plain-text output.
pub const CHUNK_SEPARATOR: &str = "---8<---";

/// Initialize env_logger on stderr so stdout stays clean for piping.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Run the parsed subcommand.
pub fn run(args: Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    match args.command {
        Commands::Convert {
            preserve_code,
            input,
        } => {
            let text = read_input(&input)?;
            write_text(&mut stdout, &convert(&text, preserve_code))?;
        }
        Commands::Split { output, input } => {
            let text = read_input(&input)?;
            let limit = output.max_length.unwrap_or(config.msg_limit);
            write_chunks(&mut stdout, &split_with_limit(&text, limit), limit, output.json)?;
        }
        Commands::SendReady {
            preserve_code,
            output,
            input,
        } => {
            let text = read_input(&input)?;
            let converted = convert(&text, preserve_code);
            let limit = output.max_length.unwrap_or(config.msg_limit);
            let chunks = split_with_limit(&converted, limit);
            log::info!("Prepared {} message(s) for Slack", chunks.len());
            write_chunks(&mut stdout, &chunks, limit, output.json)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut stdout);
        }
    }
    stdout.flush()?;
    Ok(())
}

fn convert(text: &str, preserve_code: bool) -> String {
    if preserve_code {
        md_to_mrkdwn_preserving_code(text)
    } else {
        md_to_mrkdwn(text)
    }
}

/// Read the whole input from the given file, or stdin when absent or '-'.
fn read_input(input: &InputArg) -> io::Result<String> {
    match input.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            log::debug!("Reading input from {}", path.display());
            fs::read_to_string(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
            })
        }
        _ => io::read_to_string(io::stdin()),
    }
}

/// Write text, ending with exactly one newline unless it is empty.
fn write_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.is_empty() && !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ChunkReport<'a> {
    max_length: usize,
    count: usize,
    chunks: &'a [&'a str],
}

fn write_chunks<W: Write>(
    out: &mut W,
    chunks: &[&str],
    limit: NonZeroUsize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let report = ChunkReport {
            max_length: limit.get(),
            count: chunks.len(),
            chunks,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{}", CHUNK_SEPARATOR)?;
        }
        write_text(out, chunk)?;
    }
    Ok(())
}
