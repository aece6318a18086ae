//! `bt-bot` - behavior-tree Planet Wars bot.
//!
//! Speaks the turn protocol on stdin/stdout. Logs never go to stdout.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use pw_bot::{Bot, BotConfig};
use pw_core::GameState;

#[derive(Parser)]
#[command(name = "bt-bot")]
#[command(about = "Behavior-tree Planet Wars bot", version)]
struct Cli {
    /// Bot configuration (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Append one JSON turn report per line to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the behavior tree and exit
    #[arg(long)]
    print_tree: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = BotConfig::load_or_default(cli.config.as_deref())?;
    let mut bot: Bot<GameState> = Bot::new(config);

    if cli.print_tree {
        print!("{}", bot.tree_string());
        return Ok(());
    }

    let mut report_file = match &cli.report {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open report file {}", path.display()))?,
        ),
        None => None,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let turns = pw_cli::run(
        &mut bot,
        stdin.lock(),
        &mut stdout.lock(),
        report_file.as_mut().map(|file| file as &mut dyn Write),
    )?;

    info!(turns, "input closed, shutting down");
    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = fmt().with_env_filter(filter).with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.json().with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}
