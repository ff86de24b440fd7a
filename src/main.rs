use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pico_dither::catalog::{self, CATALOG_SIZE};
use pico_dither::DitherMode;
use pico_imgproc::models::ConvertConfig;
use pico_imgproc::services::{
    percent_to_strength, ConversionPipeline, ConvertRequest, PaletteChoice,
};

#[derive(Parser)]
#[command(name = "pico-imgproc")]
#[command(about = "Convert images into 16-color PICO-8 cartridges")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to a cartridge and/or a PNG preview
    Convert(ConvertArgs),
    /// List the 32 catalog colors
    Catalog,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source image (PNG, JPEG, GIF or BMP)
    input: PathBuf,

    /// Cartridge to write (.p8)
    output: Option<PathBuf>,

    /// Only use the console color codes listed in this file, one per line
    #[arg(long, value_name = "FILE", conflicts_with = "default_palette")]
    use_palette: Option<PathBuf>,

    /// Use the 16 primary colors only (no secret colors)
    #[arg(long)]
    default_palette: bool,

    /// Remove a console color code from the candidates (repeatable)
    #[arg(long, value_name = "CODE")]
    ban: Vec<u8>,

    /// Floyd-Steinberg dithering strength in percent
    #[arg(long, value_name = "PERCENT", conflicts_with = "ordered_dither")]
    dither: Option<f32>,

    /// Ordered (Bayer) dithering strength in percent
    #[arg(long, value_name = "PERCENT")]
    ordered_dither: Option<f32>,

    /// Brightness shift, -100 to 100
    #[arg(long, allow_negative_numbers = true)]
    brighten: Option<f32>,

    /// Contrast in percent (100 = unchanged)
    #[arg(long)]
    contrast: Option<f32>,

    /// Write a PNG preview of the converted image
    #[arg(long, value_name = "PNG")]
    export: Option<PathBuf>,

    /// Measure palette usage with the chosen dithering (slower, closer match)
    #[arg(long)]
    slower_recommend: bool,

    /// Only log warnings and errors
    #[arg(long)]
    suppress_messages: bool,

    /// Overwrite an existing cartridge
    #[arg(long, short)]
    force: bool,

    /// YAML file with conversion defaults (or set PICO_IMGPROC_CONFIG)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => run_convert_command(args),
        Some(Commands::Catalog) => {
            run_catalog_command();
            Ok(())
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet {
        "pico_imgproc=warn,pico_dither=warn"
    } else {
        "pico_imgproc=info,pico_dither=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Convert one image
fn run_convert_command(args: ConvertArgs) -> anyhow::Result<()> {
    let quiet = args.suppress_messages;
    init_logging(quiet);

    let config =
        ConvertConfig::resolve(args.config.as_deref()).context("Failed to load configuration")?;
    let request = build_request(args, &config);

    let report = ConversionPipeline::new()
        .run(&request)
        .with_context(|| format!("Failed to convert {}", request.input.display()))?;

    if !quiet {
        if let Some(path) = &report.cartridge {
            println!("Wrote {} ({}x{})", path.display(), report.width, report.height);
        }
        if let Some(path) = &report.preview {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Config-file defaults, overridden by whatever was given on the command line
fn build_request(args: ConvertArgs, config: &ConvertConfig) -> ConvertRequest {
    let mut request = ConvertRequest::from_config(args.input, config);
    request.output = args.output;
    request.export = args.export;
    request.force = args.force;

    if let Some(path) = args.use_palette {
        request.palette = PaletteChoice::File(path);
    } else if args.default_palette {
        request.palette = PaletteChoice::Primaries;
    }
    request.ban.extend(args.ban);

    if let Some(percent) = args.dither {
        request.options = request
            .options
            .mode(DitherMode::ErrorDiffusion)
            .strength(percent_to_strength(percent));
    } else if let Some(percent) = args.ordered_dither {
        request.options = request
            .options
            .mode(DitherMode::Ordered)
            .strength(percent_to_strength(percent));
    }

    if let Some(brighten) = args.brighten {
        request.brighten = brighten;
    }
    if let Some(contrast) = args.contrast {
        request.contrast = contrast;
    }
    request.slower_recommend |= args.slower_recommend;

    request
}

/// Print the catalog table
fn run_catalog_command() {
    println!("index  code  color    bank");
    for index in 0..CATALOG_SIZE as u8 {
        let hex = catalog::hex(index).unwrap_or_default();
        let bank = if catalog::is_secret(index) {
            "secret"
        } else {
            "primary"
        };
        println!(
            "{index:>5}  {:>4}  {hex}  {bank}",
            catalog::index_to_code(index)
        );
    }
}
