use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cbz_gen::config::merged::{CliOverrides, GeneratorConfig};
use cbz_gen::config::{self};
use cbz_gen::pipeline::assembler::create_cbz;

/// Generate a CBZ archive of numbered placeholder pages.
#[derive(Parser, Debug)]
#[command(name = "cbz_gen", version, about)]
struct Cli {
    /// Number of pages to generate [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pages: Option<i32>,

    /// Name of the output CBZ file [default: output.cbz]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Font size of the text [default: 72]
    #[arg(long, allow_negative_numbers = true)]
    fontsize: Option<i32>,

    /// Width of the border in pixels [default: 50]
    #[arg(long, allow_negative_numbers = true)]
    border: Option<i32>,

    /// YAML file supplying defaults for the options above
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            pages: self.pages,
            output: self.output.clone(),
            font_size: self.fontsize,
            border_width: self.border,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let settings = match config::load_settings(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };
    let run_config = GeneratorConfig::merge(&settings, &cli.overrides());

    match create_cbz(&run_config) {
        Ok(summary) => {
            tracing::info!(
                pages = summary.pages_written,
                "Successfully created {}",
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to create CBZ file: {e}");
            ExitCode::FAILURE
        }
    }
}
