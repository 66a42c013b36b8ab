//! arcade - builds arcade courtyards and writes them as OBJ
//!
//! Without `--layout` the default courtyard is built: four rows of three
//! arches enclosing a 10×10 yard, repeated for every floor.

mod layout;

use anyhow::{Context, Result};
use arcade_mesh::{build_atomically, write_obj, MemoryScene, SceneSink};
use clap::Parser;
use config::constants::{BuildConfig, ARCH_STEPS};
use layout::LayoutFile;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Builds arcades of pillars and round arches as triangle meshes")]
#[command(version)]
struct Cli {
    /// JSON layout file (default: built-in courtyard)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Number of stacked floors (overrides the layout)
    #[arg(long)]
    floors: Option<u32>,

    /// Height of each floor (overrides the layout)
    #[arg(long)]
    floor_height: Option<f64>,

    /// Samples per arch profile curve, applied to every row
    #[arg(long)]
    arch_steps: Option<u32>,

    /// Output OBJ file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        // stdout carries the OBJ
        .with_writer(io::stderr)
        .init();

    run(Cli::parse())
}

/// Applies command-line overrides on top of the layout.
fn resolve_layout(cli: &Cli) -> Result<LayoutFile> {
    let mut layout = match &cli.layout {
        Some(path) => LayoutFile::load(path)?,
        None => LayoutFile::courtyard(),
    };

    if let Some(floors) = cli.floors {
        layout.floors = floors;
    }
    let config = BuildConfig::new(
        cli.floor_height.unwrap_or(layout.floor_height),
        cli.arch_steps.unwrap_or(ARCH_STEPS),
    )
    .context("invalid build settings")?;

    layout.floor_height = config.floor_height;
    if cli.arch_steps.is_some() {
        layout.set_arch_steps(config.arch_steps);
    }
    Ok(layout)
}

/// Clears `sink`, then builds every floor of `layout` into it atomically.
fn rebuild<S: SceneSink + ?Sized>(sink: &mut S, layout: &LayoutFile) -> Result<()> {
    sink.clear_scene().context("failed to clear scene")?;
    build_atomically(sink, |staging| layout.build(staging)).context("failed to build layout")
}

fn run(cli: Cli) -> Result<()> {
    let layout = resolve_layout(&cli)?;

    let mut scene = MemoryScene::new();
    rebuild(&mut scene, &layout)?;

    info!(
        floors = layout.floors,
        rows = layout.rows.len(),
        objects = scene.object_count(),
        triangles = scene.triangle_count(),
        volume = scene.signed_volume(),
        "built layout"
    );

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_obj(&scene, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote obj");
        }
        None => write_obj(&scene, io::stdout().lock()).context("failed to write obj")?,
    }

    Ok(())
}
