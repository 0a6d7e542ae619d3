//! favforge: CLI tool for cleaning and exporting favicon images.

use clap::{Parser, Subcommand};
use favforge_image::{CleanOptions, clean_favicon, crop_favicon, inspect_alpha};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "favforge")]
#[command(about = "Favicon background removal and variant export CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove the background, crop to content, and export PNG variants
    Clean {
        /// Path to source image
        input: PathBuf,
        /// Primary output path (variants are written next to it)
        output: PathBuf,
        /// Per-channel color tolerance for background matching
        #[arg(long, default_value_t = 40)]
        tolerance: u8,
        /// Alpha cutoff for content detection
        #[arg(long, default_value_t = 100)]
        alpha_threshold: u8,
        /// Margin in pixels kept around the content box
        #[arg(long, default_value_t = 2)]
        margin: u32,
        /// Side length of the square output canvas
        #[arg(long, default_value_t = 512)]
        canvas_size: u32,
        /// Square sizes to export
        #[arg(long, value_delimiter = ',', default_values_t = vec![32, 180, 192, 512])]
        sizes: Vec<u32>,
        /// Output the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Crop to content and export variants without background removal
    Crop {
        /// Path to source image
        input: PathBuf,
        /// Primary output path (variants are written next to it)
        output: PathBuf,
        /// Alpha cutoff for content detection
        #[arg(long, default_value_t = 100)]
        alpha_threshold: u8,
        /// Margin in pixels kept around the content box
        #[arg(long, default_value_t = 2)]
        margin: u32,
        /// Side length of the square output canvas
        #[arg(long, default_value_t = 512)]
        canvas_size: u32,
        /// Square sizes to export
        #[arg(long, value_delimiter = ',', default_values_t = vec![32, 180, 192, 512])]
        sizes: Vec<u32>,
        /// Output the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report corner pixels and alpha range for an image
    Inspect {
        /// Path to image file
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scan a directory for icons that still carry an opaque backdrop
    Analyze {
        /// Directory to analyze
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            tolerance,
            alpha_threshold,
            margin,
            canvas_size,
            sizes,
            json,
        } => {
            let options = CleanOptions {
                tolerance,
                alpha_threshold,
                margin,
                canvas_size,
                export_sizes: sizes,
            };
            match clean_favicon(&input, &output, &options) {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        if let Some([r, g, b, a]) = report.background {
                            println!("Background: rgba({}, {}, {}, {})", r, g, b, a);
                        }
                        println!("Cleared {} pixels", report.cleared_pixels);
                        print_box_and_outputs(&report);
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", "✗".red(), e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Crop {
            input,
            output,
            alpha_threshold,
            margin,
            canvas_size,
            sizes,
            json,
        } => {
            let options = CleanOptions {
                alpha_threshold,
                margin,
                canvas_size,
                export_sizes: sizes,
                ..CleanOptions::default()
            };
            match crop_favicon(&input, &output, &options) {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        print_box_and_outputs(&report);
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", "✗".red(), e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Inspect { path, json } => {
            let img = match image::open(&path) {
                Ok(img) => img.to_rgba8(),
                Err(e) => {
                    eprintln!("{} Failed to decode {}: {}", "✗".red(), path.display(), e);
                    std::process::exit(1);
                }
            };
            match inspect_alpha(&img) {
                Some(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        println!("Dimensions: {}x{}", report.width, report.height);
                        println!("Alpha range: {} - {}", report.min_alpha, report.max_alpha);
                        println!("Corner pixels:");
                        for corner in &report.corners {
                            let [r, g, b, a] = corner.rgba;
                            println!(
                                "  ({}, {}): rgba({}, {}, {}, {})",
                                corner.x, corner.y, r, g, b, a
                            );
                        }
                        if report.needs_cleaning() {
                            println!("{} opaque backdrop detected, run `favforge clean`", "⚠".yellow());
                        } else {
                            println!("{} backdrop looks transparent", "✓".green());
                        }
                    }
                }
                None => {
                    eprintln!("{} Image is empty", "✗".red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Analyze { path, json } => {
            let entries: Vec<_> = WalkDir::new(&path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .collect();

            let pb = ProgressBar::new(entries.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                    .progress_chars("#>-"),
            );

            let mut results = Vec::new();
            for entry in entries {
                pb.inc(1);
                let Ok(img) = image::open(entry.path()) else {
                    continue;
                };
                if let Some(report) = inspect_alpha(&img.to_rgba8()) {
                    results.push(serde_json::json!({
                        "path": entry.path().to_string_lossy(),
                        "width": report.width,
                        "height": report.height,
                        "min_alpha": report.min_alpha,
                        "max_alpha": report.max_alpha,
                        "needs_cleaning": report.needs_cleaning(),
                    }));
                }
            }
            pb.finish_with_message("Done");

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("\nFound {} images", results.len());
                let needs_cleaning: Vec<_> = results
                    .iter()
                    .filter(|r| r["needs_cleaning"].as_bool().unwrap_or(false))
                    .collect();
                println!("{} images look like they need cleaning:", needs_cleaning.len());
                for r in needs_cleaning {
                    println!("  {} {}", "⚠".yellow(), r["path"].as_str().unwrap_or(""));
                }
            }
        }
    }

    Ok(())
}

fn print_box_and_outputs(report: &favforge_image::CleanReport) {
    let b = &report.content_box;
    println!(
        "Content box: ({}, {}) - ({}, {}) [{}x{}]",
        b.left,
        b.top,
        b.right,
        b.bottom,
        b.width(),
        b.height()
    );
    println!("Wrote:");
    for path in &report.outputs {
        println!("  {} {}", "✓".green(), path.display());
    }
}
