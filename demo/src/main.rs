//! gridnav demo
//!
//! Reads one command per line from stdin: an action token (`up`, `down`,
//! `left`, `right`, `enter`, `back`, `esc`), `goto X Y`, `context N`,
//! `clear`, `state` or `quit`.

mod state;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gridnav_core::Config;

use state::{DemoState, Outcome};

/// Drive a fully occupied grid with keyboard-style commands from stdin
#[derive(Parser, Debug)]
#[command(name = "gridnav-demo")]
#[command(version)]
struct Args {
    /// Number of columns
    #[arg(default_value = "3", value_parser = clap::value_parser!(u32).range(1..))]
    cols: u32,

    /// Number of rows
    #[arg(default_value = "8", value_parser = clap::value_parser!(u32).range(1..))]
    rows: u32,

    /// Remember the last column visited in each row
    #[arg(long)]
    cache: bool,

    /// Keep the column on row changes instead of resetting it to 0
    #[arg(long)]
    no_reset_axis: bool,

    /// JSON configuration file, flags are applied on top of it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Config::from_json(&json)?
            }
            None => Config::default(),
        };

        if self.cache {
            config.cache = true;
        }
        if self.no_reset_axis {
            config.reset_axis = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    gridnav_core::init_logging();

    let args = Args::parse();
    let state = DemoState::new(args.cols, args.rows, args.load_config()?)?;

    tracing::info!(
        cols = args.cols,
        rows = args.rows,
        cache = state.navigator().is_cache_enabled(),
        reset_axis = state.navigator().should_reset_axis(),
        "gridnav demo started"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", state.render())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        match state.execute(&line?) {
            Outcome::Quit => break,
            Outcome::Redraw => write!(stdout, "{}", state.render())?,
            Outcome::Message(message) => writeln!(stdout, "{}", message)?,
        }
        stdout.flush()?;
    }

    Ok(())
}
