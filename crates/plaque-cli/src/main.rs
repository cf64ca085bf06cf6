//! Braille plaque CLI - translate text and export printable STL plaques.
//!
//! ```text
//! braille-plaque translate "Hello, world!"
//! braille-plaque export "Room 101" --segments 32
//! echo "from stdin" | braille-plaque export -o plaque.stl
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use braille_translate::{translate, Translation};
use plaque_io::{sanitize_file_base, save_stl};
use plaque_mesh::{build_plaque, PlaqueParams};

/// Supported cylinder tessellation range.
const SEGMENT_RANGE: std::ops::RangeInclusive<usize> = 8..=64;

#[derive(Parser)]
#[command(
    name = "braille-plaque",
    version,
    about = "Translate text to Grade-1 Braille and export 3D-printable plaques"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate text to Braille glyphs and print them
    Translate {
        /// Text to translate (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,
    },

    /// Build a plaque mesh and write it as an ASCII STL file
    Export {
        /// Text to translate (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Output path (derived from the text when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Total plaque thickness in inches
        #[arg(long, default_value_t = 0.2)]
        thickness_in: f64,

        /// Dot height in mm
        #[arg(long, default_value_t = 0.6)]
        dot_height: f64,

        /// Dot diameter in mm
        #[arg(long, default_value_t = 1.5)]
        dot_diameter: f64,

        /// Cylinder tessellation segments (8-64)
        #[arg(long, default_value_t = 24)]
        segments: usize,

        /// Margin around the cell grid in mm
        #[arg(long, default_value_t = 4.0)]
        margin: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Translate { text, input } => run_translate(text, input),
        Command::Export {
            text,
            input,
            output,
            thickness_in,
            dot_height,
            dot_diameter,
            segments,
            margin,
        } => {
            let params = PlaqueParams::default()
                .with_total_thickness_in(thickness_in)
                .with_dot_height(dot_height)
                .with_dot_diameter(dot_diameter)
                .with_segments(segments.clamp(*SEGMENT_RANGE.start(), *SEGMENT_RANGE.end()))
                .with_margin(margin);
            run_export(text, input, output, &params)
        }
    }
}

/// Resolve the input text: positional argument, file, or stdin.
fn read_text(text: Option<String>, input: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = input {
        return fs::read_to_string(&path)
            .with_context(|| format!("cannot read input file {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("cannot read stdin")?;
    Ok(buffer)
}

/// Log a warning listing skipped characters, if any.
fn report_unsupported(result: &Translation) {
    if result.has_unsupported() {
        let skipped: String = result
            .unsupported
            .iter()
            .map(|ch| format!("{ch:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        warn!("skipped unsupported characters: {skipped}");
    }
}

fn run_translate(text: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let text = read_text(text, input)?;
    let result = translate(&text);
    report_unsupported(&result);
    println!("{}", result.braille);
    Ok(())
}

fn run_export(
    text: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    params: &PlaqueParams,
) -> Result<()> {
    let text = read_text(text, input)?;
    if text.trim().is_empty() {
        bail!("nothing to export: input text is empty");
    }

    let result = translate(&text);
    report_unsupported(&result);

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("{}.stl", sanitize_file_base(&text)))
    });

    let plaque = build_plaque(&result.braille, params);
    save_stl(&plaque.mesh, &path)
        .with_context(|| format!("cannot write STL to {}", path.display()))?;

    println!(
        "{}: {:.1} x {:.1} x {:.1} mm, {} facets",
        path.display(),
        plaque.width_mm,
        plaque.height_mm,
        plaque.total_mm,
        plaque.mesh.facet_count()
    );
    Ok(())
}
