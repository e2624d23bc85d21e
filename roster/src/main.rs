//! Employee roster CLI.
//!
//! Without a subcommand, runs the numbered menu against the roster file named
//! in `roster.toml` (default `employees.json`).

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster::dispatch::{list_lines, run_session};
use roster::exit_codes;
use roster::io::config::{DEFAULT_CONFIG_FILE, RosterConfig, load_config};
use roster::io::console::Console;
use roster::io::init::{InitOptions, init_roster};
use roster::logging;
use roster::store::{LoadStatus, RecordStore};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Interactive employee roster backed by a local file"
)]
struct Cli {
    /// Configuration file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Roster data file; overrides `data_file` from the config.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Run the interactive menu (default).
    Shell,
    /// Print every record and exit.
    List,
    /// Write a default config and an empty roster file if missing.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => cmd_shell(&cfg),
        Command::List => cmd_list(&cfg),
        Command::Init { force } => cmd_init(&cli.config, &cfg, force),
    }
}

fn resolve_config(cli: &Cli) -> Result<RosterConfig> {
    let mut cfg = load_config(&cli.config).context("load roster config")?;
    if let Some(data_file) = &cli.data_file {
        cfg.data_file = data_file.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_shell(cfg: &RosterConfig) -> Result<()> {
    let mut store = RecordStore::open(&cfg.data_file);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_session(&mut store, &mut console)
}

fn cmd_list(cfg: &RosterConfig) -> Result<()> {
    let store = RecordStore::open(&cfg.data_file);
    if let LoadStatus::Reset { reason } = store.load_status() {
        eprintln!("warning: {}", reason);
    }
    for line in list_lines(store.list()) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_init(config_path: &Path, cfg: &RosterConfig, force: bool) -> Result<()> {
    let report = init_roster(config_path, cfg, &InitOptions { force })?;
    println!(
        "init: config={} written={}",
        config_path.display(),
        report.config_written
    );
    println!(
        "init: data_file={} written={}",
        cfg.data_file.display(),
        report.roster_written
    );
    Ok(())
}
