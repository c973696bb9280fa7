use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tracing::info;
use votechart_svg::load_config;

#[derive(Args, Debug)]
pub struct CheckConfigArgs {
    /// YAML or JSON chart configuration.
    #[arg(long)]
    pub config: PathBuf,
}

pub fn run(args: &CheckConfigArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args.config)?;
    info!(path = %args.config.display(), "configuration is valid");
    println!(
        "ok: height={} ticks={} label={:?}",
        config.total_height, config.tick_count, config.axis_label
    );
    Ok(())
}
