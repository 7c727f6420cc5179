//! staticurl CLI - flat-file based URL shortener without any database.

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

const BANNER: &str = concat!(
    "staticurl v",
    env!("CARGO_PKG_VERSION"),
    "\nsimple and fast flat-file based url shortener without any database\n"
);

#[derive(Debug, Parser)]
#[command(name = "staticurl")]
#[command(about = "Simple and fast flat-file based url shortener without any database")]
#[command(version)]
pub struct Cli {
    /// Build current project
    #[arg(short, long)]
    build: bool,

    /// Create new staticurl site
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// What a parsed command line asks for. `-b` wins over `-n`.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Build,
    Init(String),
    Help,
}

impl Cli {
    fn action(&self) -> Action {
        if self.build {
            return Action::Build;
        }

        match &self.name {
            Some(name) if !name.is_empty() => Action::Init(name.clone()),
            _ => Action::Help,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stdout)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match cli.action() {
        Action::Build => commands::build::run()?,
        Action::Init(name) => commands::init::run(&name),
        Action::Help => {
            println!("{}", BANNER);
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
