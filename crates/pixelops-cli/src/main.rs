//! pixelops CLI — command-line demos of classic image-processing operations.
//!
//! One operation per invocation, selected by a mutually exclusive flag.
//! Output file names are fixed literals written to the current working
//! directory.

use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};

use pixelops::subtract::DEFAULT_THRESHOLD;
use pixelops::{benchmark, io, quantize, sharpen, subtract};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

const CLUSTERED_OUT: &str = "clustered_output.png";
const DETECTION_OUT: &str = "body_detection_output.png";
const HIGH_BOOST_OUT: &str = "high_boost_output.png";
const HIGH_PASS_OUT: &str = "high_pass_output.png";
const SPATIAL_OUT: &str = "spatial_convolution_output.png";
const FREQUENCY_OUT: &str = "frequency_convolution_output.png";

#[derive(Parser)]
#[command(name = "pixelops")]
#[command(about = "Classic image-processing demos: grayscale clustering, background \
subtraction, sharpening filters, and spatial-vs-frequency convolution timing")]
#[command(version)]
#[command(group(
    ArgGroup::new("operation").args(["gray_cluster", "subtract", "filter", "benchmark"])
))]
struct Cli {
    /// Quantize gray levels into bands of 4; writes clustered_output.png.
    #[arg(long, value_name = "IMAGE")]
    gray_cluster: Option<PathBuf>,

    /// Background-subtraction object detection; writes body_detection_output.png.
    #[arg(long, num_args = 2, value_names = ["BACKGROUND", "FOREGROUND"])]
    subtract: Option<Vec<PathBuf>>,

    /// High-boost and high-pass sharpening; writes high_boost_output.png and
    /// high_pass_output.png.
    #[arg(long, value_name = "IMAGE")]
    filter: Option<PathBuf>,

    /// Spatial vs frequency-domain convolution timing; writes
    /// spatial_convolution_output.png and frequency_convolution_output.png.
    #[arg(long, value_name = "IMAGE")]
    benchmark: Option<PathBuf>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(path) = cli.gray_cluster {
        run_gray_cluster(&path)
    } else if let Some(paths) = cli.subtract {
        run_subtract(&paths[0], &paths[1])
    } else if let Some(path) = cli.filter {
        run_filter(&path)
    } else if let Some(path) = cli.benchmark {
        run_benchmark(&path)
    } else {
        println!("No operation specified. Use --help to see the options.");
        Ok(())
    }
}

// ── gray-cluster ───────────────────────────────────────────────────────

fn run_gray_cluster(image: &Path) -> CliResult<()> {
    let img = io::load_gray(image)?;
    let clustered = quantize::quantize_levels(&img);
    io::save_gray(&clustered, Path::new(CLUSTERED_OUT))?;
    println!("Clustered image saved as '{CLUSTERED_OUT}'");
    Ok(())
}

// ── subtract ───────────────────────────────────────────────────────────

fn run_subtract(background: &Path, foreground: &Path) -> CliResult<()> {
    let bg = io::load_gray(background)?;
    let fg = io::load_gray(foreground)?;
    let detection = subtract::detect_objects(&bg, &fg, DEFAULT_THRESHOLD)?;
    tracing::info!("{} object(s) detected", detection.boxes.len());
    io::save_rgb(&detection.overlay, Path::new(DETECTION_OUT))?;
    println!("Subtraction result saved as '{DETECTION_OUT}'");
    Ok(())
}

// ── filter ─────────────────────────────────────────────────────────────

fn run_filter(image: &Path) -> CliResult<()> {
    let img = io::load_gray(image)?;

    let boosted = sharpen::high_boost(&img, sharpen::DEFAULT_BOOST);
    let edges = sharpen::high_pass(&img);
    io::save_gray(&boosted, Path::new(HIGH_BOOST_OUT))?;
    io::save_gray(&edges, Path::new(HIGH_PASS_OUT))?;
    println!("High-boost filter saved as '{HIGH_BOOST_OUT}'");
    println!("High-pass filter saved as '{HIGH_PASS_OUT}'");

    println!();
    println!("--- Analysis of the results ---");
    println!(
        "The high-pass filter emphasizes mainly the edges, producing an image with \
highlighted contours,"
    );
    println!("but it can leave the image looking harsher and noisier.");
    println!(
        "The high-boost filter combines the edge enhancement with the original image, \
preserving its natural look"
    );
    println!("and improving overall sharpness without losing the context of the image.");
    Ok(())
}

// ── benchmark ──────────────────────────────────────────────────────────

fn run_benchmark(image: &Path) -> CliResult<()> {
    let img = io::load_gray(image)?;
    let bench = benchmark::run(&img);

    io::save_gray(&bench.spatial.image, Path::new(SPATIAL_OUT))?;
    io::save_gray(&bench.frequency.image, Path::new(FREQUENCY_OUT))?;

    let report = bench.report();
    println!("Spatial-domain time:   {:.4} seconds", report.spatial_secs);
    println!("Frequency-domain time: {:.4} seconds", report.frequency_secs);

    println!();
    println!("--- Analysis of the execution times ---");
    println!(
        "Spatial-domain convolution is direct and can be efficient for small kernels,"
    );
    println!("but its cost grows with the size of the kernel and of the image.");
    println!(
        "Frequency-domain convolution, based on the convolution theorem, has a higher \
up-front cost"
    );
    println!(
        "due to the FFT and inverse FFT, but it scales better for larger kernels, \
yielding a computational win"
    );
    println!("when large filters are applied or images are bigger.");
    println!(
        "The times shown demonstrate these characteristics; which method to choose \
depends on the context of use."
    );
    Ok(())
}
