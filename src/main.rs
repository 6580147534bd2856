use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rougenoir_arena::session::{Command, Session};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const FILE_ENV: &str = "ROUGENOIR_FILE";

/// Build and explore a red-black tree, one command at a time.
#[derive(Parser, Debug)]
#[command(name = "rougenoir")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug output on stderr; repeat for more (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Insert every number in FILE before reading commands
    #[arg(short, long, env = FILE_ENV, value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,

    /// Don't print the instructions and the prompt (for piped commands)
    #[arg(long)]
    no_prompt: bool,

    /// Print the tree built from --file and exit
    #[arg(long, requires = "file")]
    print_only: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock());

    if let Some(file) = cli.file {
        // A read never ends the session; only quit does.
        let _flow = session
            .execute(Command::Read(file))
            .context("failed to write to stdout")?;
    }
    if cli.print_only {
        return Ok(());
    }

    session
        .run(io::stdin().lock(), !cli.no_prompt)
        .context("interactive session failed")?;
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // RUST_LOG, when set, wins over -d.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();

    tracing::debug!(?level, "logging initialized");
}
