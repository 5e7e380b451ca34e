//! Skyregion: celestial regions in pixel and sky coordinates.
//!
//! Every region exists in two parallel forms: positioned in image pixels or
//! on the sky. A world coordinate system (WCS) converts between them, and
//! the conversion is uniform across shapes: it moves the center and carries
//! everything else (shape fields, metadata, visual attributes) across
//! unchanged.
//!
//! # Modules
//!
//! - [`coord`]: Coordinate primitives ([`coord::PixCoord`], [`coord::SkyCoord`]) and frame markers
//! - [`wcs`]: The WCS transform seam and a gnomonic (TAN) implementation
//! - [`region`]: The frame-generic region base, metadata and patches
//! - [`shapes`]: Point and text regions
//! - [`render`]: Drawing surfaces and the recording canvas
//! - [`io_json`]: JSON region lists used by the CLI
//! - [`error`]: Error types for skyregion operations

pub mod coord;
pub mod error;
pub mod io_json;
pub mod region;
pub mod render;
pub mod shapes;
pub mod wcs;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, info};

pub use error::RegionError;

use region::FramedRegion;
use shapes::AnyShape;

/// The skyregion CLI application.
#[derive(Parser)]
#[command(name = "skyregion")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert regions to sky coordinates.
    ToSky(ConvertArgs),
    /// Convert regions to pixel coordinates.
    ToPixel(ConvertArgs),
    /// Render regions as an SVG document.
    Plot(PlotArgs),
}

/// Arguments for the conversion subcommands.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Input region list (JSON).
    input: PathBuf,

    /// TAN WCS descriptor (JSON).
    #[arg(long, env = "SKYREGION_WCS")]
    wcs: PathBuf,

    /// Write the converted regions here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

/// Arguments for the plot subcommand.
#[derive(clap::Args)]
struct PlotArgs {
    /// Input region list (JSON).
    input: PathBuf,

    /// TAN WCS descriptor (JSON); required if any region is in sky coordinates.
    #[arg(long, env = "SKYREGION_WCS")]
    wcs: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long, default_value_t = 1024.0)]
    width: f64,

    /// Image height in pixels.
    #[arg(long, default_value_t = 1024.0)]
    height: f64,

    /// Style override applied to every region, as KEY=VALUE (repeatable).
    #[arg(long = "style", value_name = "KEY=VALUE")]
    styles: Vec<String>,

    /// Write the SVG here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy)]
enum Direction {
    ToSky,
    ToPixel,
}

/// Run the skyregion CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), RegionError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::ToSky(args)) => run_convert(args, Direction::ToSky),
        Some(Commands::ToPixel(args)) => run_convert(args, Direction::ToPixel),
        Some(Commands::Plot(args)) => run_plot(args),
        None => {
            println!("skyregion {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Celestial regions in pixel and sky coordinates.");
            println!();
            println!("Run 'skyregion --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the to-sky / to-pixel subcommands.
fn run_convert(args: ConvertArgs, direction: Direction) -> Result<(), RegionError> {
    let regions = io_json::read_regions_json(&args.input)?;
    let wcs = io_json::read_wcs_json(&args.wcs)?;

    let converted = regions
        .iter()
        .map(|region| match direction {
            Direction::ToSky => region.to_sky(&wcs).map(FramedRegion::from),
            Direction::ToPixel => region.to_pixel(&wcs).map(FramedRegion::from),
        })
        .collect::<Result<Vec<FramedRegion<AnyShape>>, _>>()?;

    info!(count = converted.len(), input = %args.input.display(), "converted regions");

    match args.output {
        Some(path) => io_json::write_regions_json(&path, &converted),
        None => {
            println!("{}", io_json::to_json_string(&converted)?);
            Ok(())
        }
    }
}

/// Execute the plot subcommand.
fn run_plot(args: PlotArgs) -> Result<(), RegionError> {
    let regions = io_json::read_regions_json(&args.input)?;
    let wcs = args
        .wcs
        .as_deref()
        .map(io_json::read_wcs_json)
        .transpose()?;
    let style = parse_styles(&args.styles)?;

    // Start from a clean current canvas so earlier plots do not leak in
    render::take_current_canvas();

    for region in &regions {
        let pixel = match (region, &wcs) {
            (FramedRegion::Pixel(r), _) => r.clone(),
            (FramedRegion::Sky(r), Some(wcs)) => r.to_pixel(wcs)?,
            (FramedRegion::Sky(_), None) => {
                return Err(RegionError::MissingArgument(
                    "sky regions need a WCS: pass --wcs or set SKYREGION_WCS".into(),
                ))
            }
        };
        let drawn = pixel.plot_current(&style, |canvas| canvas.len());
        debug!(kind = pixel.kind(), artists = drawn, "plotted region");
    }

    let canvas = render::take_current_canvas();
    info!(artists = canvas.len(), "rendered regions");
    let svg = canvas.to_svg(args.width, args.height);

    match args.output {
        Some(path) => write_text(&path, &svg),
        None => {
            print!("{}", svg);
            Ok(())
        }
    }
}

/// Parses KEY=VALUE pairs; values that parse as JSON keep their type,
/// everything else is a string.
fn parse_styles(raw: &[String]) -> Result<region::Visual, RegionError> {
    raw.iter()
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                RegionError::MissingArgument(format!("style '{}' is not KEY=VALUE", pair))
            })?;
            let value = serde_json::from_str(value)
                .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
            Ok((key.to_string(), value))
        })
        .collect()
}

fn write_text(path: &Path, text: &str) -> Result<(), RegionError> {
    std::fs::write(path, text).map_err(RegionError::Io)
}
