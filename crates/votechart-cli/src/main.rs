use std::error::Error;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    check_config::{self, CheckConfigArgs},
    render::{self, RenderArgs},
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "votechart", about = "Vote similarity bar chart renderer")]
struct Cli {
    /// Minimum level of diagnostics written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a similarity list to SVG, HTML or a recorded scene.
    Render(RenderArgs),
    /// Validate a chart configuration file.
    CheckConfig(CheckConfigArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Render(args) => render::run(&args),
        Command::CheckConfig(args) => check_config::run(&args),
    }
}
