use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;
use votechart_core::errors::ChartError;
use votechart_svg::serde::to_canonical_json_bytes;
use votechart_svg::{
    load_config, read_request, render_with, ChartConfig, RecordingContainer, SvgContainer,
};

const DEFAULT_WIDTH: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Standalone SVG document.
    Svg,
    /// HTML fragment wrapping the SVG.
    Html,
    /// Recorded draw calls as canonical JSON.
    Scene,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file with the similarity list, or `-` for stdin.
    #[arg(long)]
    pub input: PathBuf,
    /// Container width in pixels. Overrides `container_width` from the input.
    #[arg(long)]
    pub width: Option<f64>,
    /// Optional YAML or JSON chart configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output file. Writes to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,
}

pub fn run(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ChartConfig::default(),
    };
    let request = read_request(&args.input)?;
    let width = args
        .width
        .or(request.container_width)
        .unwrap_or(DEFAULT_WIDTH);
    let data = &request.vote_similarity_list;

    let bytes = match args.format {
        OutputFormat::Svg | OutputFormat::Html => {
            let mut container = SvgContainer::new(width);
            render_with(&mut container, data, &config);
            if args.format == OutputFormat::Html {
                container.to_html().into_bytes()
            } else {
                container
                    .surfaces()
                    .last()
                    .map(|surface| surface.to_svg())
                    .unwrap_or_default()
                    .into_bytes()
            }
        }
        OutputFormat::Scene => {
            let mut container = RecordingContainer::new(width);
            render_with(&mut container, data, &config);
            to_canonical_json_bytes(&container)?
        }
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|err| ChartError::io("votechart.write", path, &err))?;
            }
            fs::write(path, &bytes)
                .map_err(|err| ChartError::io("votechart.write", path, &err))?;
            info!(path = %path.display(), bars = data.len(), width, "chart written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
