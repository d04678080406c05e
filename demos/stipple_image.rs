//! Example: Stipple an image file
//!
//! Loads any image the `image` crate can decode, stipples its grayscale
//! version and writes the stipples as black dots on a white canvas.
//!
//! ```text
//! cargo run --example stipple_image --features image-io -- -i portrait.png
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use glam::IVec2;
use std::io::Write;
use std::path::PathBuf;

use voronoi_stipple::raster::{from_dynamic, to_luma};
use voronoi_stipple::*;

/// Weighted Voronoi stippling
#[derive(Parser)]
#[command(name = "stipple_image")]
#[command(about = "Convert an image into a weighted Voronoi stippling", long_about = None)]
struct Cli {
    /// Input image path
    #[arg(short, long)]
    input: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "stippled.png")]
    output: PathBuf,

    /// Optional text file receiving one "x y" line per stipple
    #[arg(short, long)]
    points: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u32>,

    /// Number of Lloyd iterations
    #[arg(long, default_value = "3")]
    iterations: usize,

    /// Side length of the initial sampling blocks
    #[arg(long, default_value = "2")]
    block_size: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let decoded = image::open(&cli.input)
        .with_context(|| format!("Failed to open {}", cli.input.display()))?;
    let gray = from_dynamic(&decoded)?;

    let mut builder = StippleConfigBuilder::new()
        .lloyd_iterations(cli.iterations)?
        .block_size(cli.block_size)?;
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    println!("Stippling {} ({}x{})", cli.input.display(), gray.width(), gray.height());
    println!("  Seed: {}", config.seed);
    println!("  Lloyd Iterations: {}", config.lloyd_iterations);
    println!("  Block Size: {}", config.block_size);

    let stippling = Stippling::generate(&gray, config)?;

    to_luma(&stippling.render())
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!(
        "Wrote {} stipples ({} iterations) to {}",
        stippling.point_count(),
        stippling.iterations_run(),
        cli.output.display()
    );

    if let Some(path) = &cli.points {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut write_result = Ok(());
        let mut sink = |_: &GrayImage, stipples: &[IVec2]| {
            for p in stipples {
                if write_result.is_ok() {
                    write_result = writeln!(file, "{} {}", p.x, p.y);
                }
            }
        };
        stippling.emit(&gray, &mut sink);
        write_result.context("Failed to write stipple list")?;
        println!("Wrote stipple list to {}", path.display());
    }

    Ok(())
}
