use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpress::models::{ContentCategory, DisplaySpec, PipelineConfig, StyleHint};
use inkpress::rendering::{decode_rgba, encode_preview, read_chunks, FitStrategy, PadColor};
use inkpress::services::{PressJob, PressService};

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(about = "Convert images into indexed PNGs for grey e-paper panels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline over a PNG and write the indexed container
    Convert {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output container path
        #[arg(short, long)]
        output: PathBuf,

        /// YAML pipeline configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also write the undithered buffer as a grayscale PNG
        #[arg(long)]
        preview: Option<PathBuf>,

        /// Target panel: "4in2" (400x300, 2-bit) or "7in5" (800x480, 1-bit)
        #[arg(short, long)]
        display: Option<String>,

        /// How to fit the input to the panel (requires --display)
        #[arg(long, value_enum, default_value_t = FitArg::Crop)]
        fit: FitArg,

        /// Content category used to pick gamma and sharpening
        /// (e.g. "photography", "screenshot", "line_art")
        #[arg(long)]
        style: Option<String>,

        /// Print a JSON report of the run
        #[arg(long)]
        json: bool,
    },
    /// List the chunks of a container and verify their checksums
    Inspect {
        /// Container file
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FitArg {
    Stretch,
    Crop,
    PadWhite,
    PadBlack,
}

impl From<FitArg> for FitStrategy {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Stretch => FitStrategy::Stretch,
            FitArg::Crop => FitStrategy::Crop,
            FitArg::PadWhite => FitStrategy::Pad(PadColor::White),
            FitArg::PadBlack => FitStrategy::Pad(PadColor::Black),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkpress=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            preview,
            display,
            fit,
            style,
            json,
        } => {
            let options = ConvertOptions {
                config,
                preview,
                display,
                fit,
                style,
                json,
            };
            run_convert_command(&input, &output, options).await
        }
        Commands::Inspect { file } => run_inspect_command(&file),
    }
}

struct ConvertOptions {
    config: Option<PathBuf>,
    preview: Option<PathBuf>,
    display: Option<String>,
    fit: FitArg,
    style: Option<String>,
    json: bool,
}

async fn run_convert_command(
    input: &Path,
    output: &Path,
    options: ConvertOptions,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let image = decode_rgba(&bytes)?;

    let mut config = match &options.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(name) = &options.style {
        let category: ContentCategory =
            serde_json::from_value(serde_json::Value::String(name.clone()))
                .map_err(|_| anyhow::anyhow!("Unknown style: {name}"))?;
        config = StyleHint::new(category).apply_to(config);
    }

    let display = match options.display.as_deref() {
        Some(name) => {
            let panel = DisplaySpec::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown display: {name} (use 4in2 or 7in5)"))?;
            config.bit_depth = panel.bit_depth.bits();
            Some(panel)
        }
        None => None,
    };

    // Without a panel the image keeps its size and the configured depth
    let panel = match display {
        Some(panel) => panel,
        None => DisplaySpec::new(image.width(), image.height(), config.bit_depth)?,
    };
    let mut job = PressJob::new(image, config);
    if display.is_some() {
        job = job.with_fit(options.fit.into());
    }
    let service = PressService::new(panel);
    let result = service.render(job).await?;

    std::fs::write(output, result.container())?;
    if let Some(path) = &options.preview {
        std::fs::write(path, encode_preview(result.preview())?)?;
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result.report())?);
    } else {
        let bounds = result.bounds();
        println!(
            "Wrote {} ({}x{}, {}-bit, {} bytes, stretch {}..{})",
            output.display(),
            result.indices().width(),
            result.indices().height(),
            result.depth().bits(),
            result.container().len(),
            bounds.left(),
            bounds.right(),
        );
    }
    Ok(())
}

fn run_inspect_command(file: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file.display()))?;
    let chunks = read_chunks(&bytes)?;

    println!("{}: {} chunks, all CRCs valid", file.display(), chunks.len());
    for chunk in &chunks {
        println!(
            "  {}  {:>8} bytes  crc {:08x}",
            chunk.kind_str(),
            chunk.data.len(),
            chunk.crc
        );
        if &chunk.kind == b"IHDR" && chunk.data.len() == 13 {
            let field = |at: usize| {
                u32::from_be_bytes([
                    chunk.data[at],
                    chunk.data[at + 1],
                    chunk.data[at + 2],
                    chunk.data[at + 3],
                ])
            };
            let (width, height) = (field(0), field(4));
            println!(
                "        {width}x{height}, bit depth {}, colour type {}",
                chunk.data[8], chunk.data[9]
            );
        }
    }
    Ok(())
}
