use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shapescan::display::{DisplaySurface, FileSurface};
use shapescan::{app, input, AppConfig, DisplayConfig, ShapeDetector, ShapeError};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Detector {
    /// Label triangles, quadrilaterals, pentagons, hexagons, stars and circles
    Shapes,
    /// Hough line detection
    Lines,
}

#[derive(Parser)]
#[command(name = "shapescan")]
#[command(about = "Detect and label shapes or lines in an image")]
struct Cli {
    /// Path to input image file (opens a file dialog when omitted in GUI builds)
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Which detector to run
    #[arg(short, long, value_enum, default_value_t = Detector::Shapes)]
    detector: Detector,

    /// Write the annotated image here instead of opening a window
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Save intermediate images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level))
        )
        .init();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let mut surface = make_surface(args.output.clone(), &config.display)?;

    let image_path = match input::resolve_input(args.image_path.clone()) {
        Ok(path) => path,
        Err(ShapeError::SelectionCancelled) => {
            info!("No image selected, nothing to do");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    info!("Loading image: {}", image_path.display());
    let img = input::load_image(&image_path)?;
    info!("Image loaded: {}x{}", img.width(), img.height());

    match args.detector {
        Detector::Shapes => {
            let mut detector = ShapeDetector::new(config.shapes.clone()).with_verbose(args.verbose);
            if let Some(dir) = args.debug_out {
                detector = detector.with_debug(dir);
            }

            let report = app::run_shapes(&img, &detector, surface.as_mut())?;

            println!("\n=== Shape Detection Results ===");
            println!("Total contours: {}", report.detections.len());
            for (i, detection) in report.detections.iter().enumerate() {
                let bbox = detection.contour.bounding_box();
                match bbox {
                    Some(bbox) => println!(
                        "  {}: {} ({} vertices) at ({}, {}) {}x{}",
                        i + 1,
                        detection.label,
                        detection.polygon.vertex_count(),
                        bbox.x,
                        bbox.y,
                        bbox.width,
                        bbox.height
                    ),
                    None => println!("  {}: {} (empty contour)", i + 1, detection.label),
                }
            }
        }
        Detector::Lines => {
            let report = app::run_lines(&img, &config.lines, surface.as_mut())?;
            println!("\n=== Line Detection Results ===");
            println!("Total lines: {}", report.lines.len());
            if args.verbose {
                for line in &report.lines {
                    println!("  r={:.1} angle={}°", line.r, line.angle_in_degrees);
                }
            }
        }
    }

    Ok(())
}

fn make_surface(output: Option<PathBuf>, config: &DisplayConfig) -> shapescan::Result<Box<dyn DisplaySurface>> {
    if let Some(path) = output {
        return Ok(Box::new(FileSurface::new(path)));
    }

    #[cfg(feature = "gui")]
    {
        Ok(Box::new(shapescan::display::WindowSurface::new(config.clone())))
    }

    #[cfg(not(feature = "gui"))]
    {
        let _ = config;
        Err(ShapeError::NoDisplay)
    }
}
