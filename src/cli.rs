//! CLI interface for listcomp-tour

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::report::{Format, Report};
use crate::tour::{Tour, EXAMPLES};

#[derive(Parser)]
#[command(name = "listcomp-tour")]
#[command(about = "Walk through collection-building iterator chains, one printed example at a time", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Seed for the random matrix (overrides the config file)
    #[arg(short, long, env = "LISTCOMP_TOUR_SEED", global = true)]
    seed: Option<u64>,

    /// Use this config file instead of the default location
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every example in order (default when no command given)
    Run,
    /// Run a single example
    Show {
        /// Example id (see `list`)
        id: u8,
    },
    /// List the available examples
    List,
    /// Inspect or create the configuration file
    Config {
        /// Show the effective configuration
        #[arg(long)]
        show: bool,
        /// Write the default configuration to disk
        #[arg(long)]
        init: bool,
        /// Print the configuration file path
        #[arg(long)]
        path: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    execute(cli, &mut stdout.lock())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Dispatch a parsed command line, writing user-facing output to `out`
///
/// The config file is only read by commands that use it, so `config --init`
/// and `config --path` still work when the existing file is malformed.
fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let tour = Tour::new(load_config(cli.config.as_deref())?, cli.seed);
            let report = Report::new(tour.seed(), tour.run_all()?);
            write!(out, "{}", report.render(cli.format)?)?;
        }
        Commands::Show { id } => {
            let tour = Tour::new(load_config(cli.config.as_deref())?, cli.seed);
            let report = Report::new(tour.seed(), vec![tour.run(id)?]);
            write!(out, "{}", report.render(cli.format)?)?;
        }
        Commands::List => {
            for (id, title) in EXAMPLES {
                writeln!(out, "{:>2}  {}", id, title)?;
            }
        }
        Commands::Config { show, init, path } => {
            if init {
                let written = match cli.config {
                    Some(p) => {
                        Config::default().save_to(&p)?;
                        p
                    }
                    None => Config::default().save()?,
                };
                writeln!(out, "Wrote default configuration to {}", written.display())?;
            } else if path {
                let p = match cli.config {
                    Some(p) => p,
                    None => config::config_path()?,
                };
                writeln!(out, "{}", p.display())?;
            } else if show {
                config::show_config(&load_config(cli.config.as_deref())?, out)?;
            } else {
                writeln!(out, "Configuration options:")?;
                writeln!(out, "  --show   Display the effective configuration")?;
                writeln!(out, "  --init   Write the default configuration file")?;
                writeln!(out, "  --path   Print the configuration file location")?;
            }
        }
    }

    Ok(())
}
