//! Impossible-torus (paradox) logo generator.
//!
//! Computes the crossing topology of two interwoven elliptical bands and
//! writes the result as a small filled SVG.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use paradox_core::{parse_log_level, Scene, TorusConfig};

mod render;

#[derive(Parser)]
#[command(name = "paradox")]
#[command(about = "Impossible-torus logo generator", long_about = None)]
struct Cli {
    /// Output SVG path
    #[arg(short, long, default_value = "paradox.svg")]
    output: PathBuf,

    /// Band thickness override (annulus inner-to-outer width)
    #[arg(short, long)]
    thickness: Option<f64>,

    /// Print the computed crossings and segments as JSON instead of writing SVG
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(parse_log_level(cli.log_level.as_deref()))
        .init();

    let mut config = TorusConfig::default();
    if let Some(thickness) = cli.thickness {
        config.thickness = thickness;
    }
    let scene = Scene::new(config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    let svg = render::render_svg(&scene);
    fs::write(&cli.output, svg)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!("wrote {}", cli.output.display());
    Ok(())
}
