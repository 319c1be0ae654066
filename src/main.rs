//! Wheel Layout CLI
//!
//! Usage:
//!   wheel-layout [OPTIONS] [COUNT]
//!
//! Options:
//!   -c, --config <FILE>        Wheel description file (TOML)
//!   -f, --format <FORMAT>      Output format: svg or json
//!   -p, --popup <WxH>          Print the centering offset for a popup size
//!   -g, --guides               Draw inner/middle/outer radius guides
//!   -d, --debug                Log the computed layout
//!   -h, --help                 Print help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wheel_layout::{
    compute_centering_offset, layout, render_with_config, RenderConfig, WheelFile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser)]
#[command(name = "wheel-layout")]
#[command(version, about = "Lay out items around a wheel and preview the result")]
struct Cli {
    /// Number of items (overrides the count in the config file)
    count: Option<usize>,

    /// Wheel description file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Item side length
    #[arg(long)]
    item_size: Option<f64>,

    /// Gap between adjacent items (may be negative)
    #[arg(long, allow_hyphen_values = true)]
    spacing: Option<f64>,

    /// Minimum inner radius
    #[arg(long)]
    min_inner_radius: Option<f64>,

    /// Angle of the first item in degrees, clockwise from the top
    #[arg(long, allow_hyphen_values = true)]
    angle_offset: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Draw inner/middle/outer radius guides
    #[arg(short, long)]
    guides: bool,

    /// Print the centering offset for a popup of this size (e.g. 120x40)
    #[arg(short, long, value_parser = parse_popup_size)]
    popup: Option<(f64, f64)>,

    /// Log the computed layout
    #[arg(short, long)]
    debug: bool,
}

fn parse_popup_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let h = h.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((w, h))
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("wheel_layout={}", default_level))),
        )
        .init();

    if let Some((width, height)) = cli.popup {
        match compute_centering_offset(width, height) {
            Ok(offset) => {
                println!(
                    "horizontal_offset={} vertical_offset={}",
                    offset.horizontal_offset, offset.vertical_offset
                );
                return;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Load wheel file
    let file = match &cli.config {
        Some(path) => match WheelFile::from_file(path) {
            Ok(f) => {
                info!(path = %path.display(), name = ?f.name, "loaded wheel file");
                f
            }
            Err(e) => {
                eprintln!("Error loading wheel file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => WheelFile::default(),
    };

    let count = cli.count.or(file.count).unwrap_or(0);

    let mut config = RenderConfig::from(file).with_debug(cli.debug);
    if let Some(v) = cli.item_size {
        config.wheel.item_size = v;
    }
    if let Some(v) = cli.spacing {
        config.wheel.spacing = v;
    }
    if let Some(v) = cli.min_inner_radius {
        config.wheel.min_inner_radius = v;
    }
    if let Some(v) = cli.angle_offset {
        config.wheel.angle_offset = v;
    }
    if cli.guides {
        config.svg.show_guides = true;
    }

    let output = match cli.format {
        Format::Svg => render_with_config(count, config).map_err(|e| e.to_string()),
        Format::Json => layout::compute(count, &config.wheel)
            .map_err(|e| e.to_string())
            .and_then(|l| serde_json::to_string_pretty(&l).map_err(|e| e.to_string())),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
