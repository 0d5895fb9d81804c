use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pcbink::footprint::FootprintOptions;
use pcbink::worker::{self, DitherRequest, GenerateRequest, WorkerEvent};

#[derive(Parser)]
#[command(name = "pcbink")]
#[command(about = "Put Images on Copper - dithered image to KiCad footprint converter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a raw RGBA image to a binary bitmap
    Dither {
        /// Input file: 8-bit RGBA pixels, row-major
        #[arg(short, long)]
        input: PathBuf,

        /// Image width in pixels
        #[arg(long)]
        width: usize,

        /// Image height in pixels
        #[arg(long)]
        height: usize,

        /// Algorithm: threshold, random, bayer2, bayer4, bayer8,
        /// floydSteinberg, atkinson, or jarvis
        #[arg(short, long, default_value = "threshold")]
        algorithm: String,

        /// Ink cutoff in [0,1]; luminance above it stays blank
        #[arg(short, long, default_value_t = 0.5)]
        threshold: f32,

        /// Linearize sRGB before computing luminance
        #[arg(long)]
        gamma: bool,

        /// Invert the image before dithering
        #[arg(long)]
        invert: bool,

        /// Output file: one byte per pixel, 0 ink / 255 blank
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Generate a KiCad footprint from a binary bitmap
    Generate {
        /// Input file: one byte per pixel, 0 ink / 255 blank
        #[arg(short, long)]
        input: PathBuf,

        /// Bitmap width in pixels
        #[arg(long)]
        width: usize,

        /// Bitmap height in pixels
        #[arg(long)]
        height: usize,

        /// Edge length of one pixel square, in millimeters
        #[arg(short, long, default_value_t = 1.0)]
        pixel_size: f64,

        /// Footprint name inside the library
        #[arg(short, long, default_value = "IMAGE")]
        name: String,

        /// Library prefix in the document name
        #[arg(short, long, default_value = "Image")]
        library: String,

        /// Board layer for the pixel polygons
        #[arg(long, default_value = "F.SilkS")]
        layer: String,

        /// Output footprint file (.kicad_mod)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Dither and generate in one step
    Convert {
        /// Input file: 8-bit RGBA pixels, row-major
        #[arg(short, long)]
        input: PathBuf,

        /// Image width in pixels
        #[arg(long)]
        width: usize,

        /// Image height in pixels
        #[arg(long)]
        height: usize,

        /// Algorithm: threshold, random, bayer2, bayer4, bayer8,
        /// floydSteinberg, atkinson, or jarvis
        #[arg(short, long, default_value = "threshold")]
        algorithm: String,

        /// Ink cutoff in [0,1]; luminance above it stays blank
        #[arg(short, long, default_value_t = 0.5)]
        threshold: f32,

        /// Linearize sRGB before computing luminance
        #[arg(long)]
        gamma: bool,

        /// Invert the image before dithering
        #[arg(long)]
        invert: bool,

        /// Edge length of one pixel square, in millimeters
        #[arg(short, long, default_value_t = 1.0)]
        pixel_size: f64,

        /// Footprint name inside the library
        #[arg(short, long, default_value = "IMAGE")]
        name: String,

        /// Library prefix in the document name
        #[arg(short, long, default_value = "Image")]
        library: String,

        /// Board layer for the pixel polygons
        #[arg(long, default_value = "F.SilkS")]
        layer: String,

        /// Output footprint file (.kicad_mod)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Process JSON request lines from stdin, emitting event lines on stdout
    Worker,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI use; RUST_LOG overrides
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pcbink=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Dither {
            input,
            width,
            height,
            algorithm,
            threshold,
            gamma,
            invert,
            output,
        }) => run_dither_command(
            &input, width, height, algorithm, threshold, gamma, invert, &output,
        ),
        Some(Commands::Generate {
            input,
            width,
            height,
            pixel_size,
            name,
            library,
            layer,
            output,
        }) => run_generate_command(
            &input, width, height, pixel_size, name, library, layer, &output,
        ),
        Some(Commands::Convert {
            input,
            width,
            height,
            algorithm,
            threshold,
            gamma,
            invert,
            pixel_size,
            name,
            library,
            layer,
            output,
        }) => run_convert_command(
            &input, width, height, algorithm, threshold, gamma, invert, pixel_size, name, library,
            layer, &output,
        ),
        Some(Commands::Worker) => run_worker_command(),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Dither an RGBA file to a one-byte-per-pixel bitmap file
#[allow(clippy::too_many_arguments)]
fn run_dither_command(
    input: &PathBuf,
    width: usize,
    height: usize,
    algorithm: String,
    threshold: f32,
    gamma: bool,
    invert: bool,
    output: &PathBuf,
) -> anyhow::Result<()> {
    let image_data = std::fs::read(input)?;
    let request = DitherRequest {
        image_data,
        width,
        height,
        algorithm,
        threshold,
        gamma_correct: gamma,
        invert,
    };

    let bitmap = worker::dither(request)?;
    let ink = bitmap.ink_count();
    std::fs::write(output, bitmap.into_data())?;
    println!(
        "Dithered {width}x{height} image to {} ({ink} ink pixels)",
        output.display()
    );

    Ok(())
}

/// Generate a footprint document from a bitmap file
#[allow(clippy::too_many_arguments)]
fn run_generate_command(
    input: &PathBuf,
    width: usize,
    height: usize,
    pixel_size: f64,
    name: String,
    library: String,
    layer: String,
    output: &PathBuf,
) -> anyhow::Result<()> {
    let dithered_data = std::fs::read(input)?;
    let request = GenerateRequest {
        dithered_data,
        width,
        height,
        options: FootprintOptions {
            pixel_size,
            footprint_name: name,
            library_name: library,
            layer,
        },
    };

    let document = worker::generate(request, |progress| {
        tracing::info!(
            current = progress.current,
            total = progress.total,
            percent = progress.percent,
            "generating geometry"
        );
    })?;

    std::fs::write(output, &document)?;
    println!("Generated {} ({} bytes)", output.display(), document.len());

    Ok(())
}

/// Dither an RGBA file and generate the footprint in one pass
#[allow(clippy::too_many_arguments)]
fn run_convert_command(
    input: &PathBuf,
    width: usize,
    height: usize,
    algorithm: String,
    threshold: f32,
    gamma: bool,
    invert: bool,
    pixel_size: f64,
    name: String,
    library: String,
    layer: String,
    output: &PathBuf,
) -> anyhow::Result<()> {
    let image_data = std::fs::read(input)?;
    let bitmap = worker::dither(DitherRequest {
        image_data,
        width,
        height,
        algorithm,
        threshold,
        gamma_correct: gamma,
        invert,
    })?;
    let ink = bitmap.ink_count();

    let document = worker::generate(
        GenerateRequest {
            dithered_data: bitmap.into_data(),
            width,
            height,
            options: FootprintOptions {
                pixel_size,
                footprint_name: name,
                library_name: library,
                layer,
            },
        },
        |progress| {
            tracing::info!(
                current = progress.current,
                total = progress.total,
                percent = progress.percent,
                "generating geometry"
            );
        },
    )?;

    std::fs::write(output, &document)?;
    println!(
        "Converted {width}x{height} image to {} ({ink} polygons, {} bytes)",
        output.display(),
        document.len()
    );

    Ok(())
}

/// Blocking request loop: one JSON request per stdin line, events as
/// JSON lines on stdout. Malformed lines are skipped, failed requests
/// logged; the loop only ends at end of input.
fn run_worker_command() -> anyhow::Result<()> {
    use std::io::{BufRead, Write};

    let mut stdout = std::io::stdout().lock();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let request = match worker::decode_request(&line) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(%e, "Skipping malformed request line");
                continue;
            }
        };

        let mut emit = |event: WorkerEvent| match serde_json::to_string(&event) {
            Ok(json) => {
                if let Err(e) = writeln!(stdout, "{json}").and_then(|_| stdout.flush()) {
                    tracing::warn!(%e, "Failed to write event");
                }
            }
            Err(e) => tracing::warn!(%e, "Failed to encode event"),
        };

        if let Err(e) = worker::process(request, &mut emit) {
            tracing::error!(%e, "Request failed");
        }
    }

    Ok(())
}

/// Display version and command overview
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Pcbink v{VERSION} - Put Images on Copper");
    println!("Converts raster images into dithered KiCad footprints\n");

    println!("Commands:");
    println!("  pcbink dither     Dither an RGBA image to a binary bitmap");
    println!("  pcbink generate   Generate a footprint from a binary bitmap");
    println!("  pcbink convert    Dither and generate in one step");
    println!("  pcbink worker     Process JSON requests from stdin");
    println!("\nRun 'pcbink --help' for more details.");
}
