use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use scheme_import::config::Config;
use scheme_import::logging;
use scheme_import::metrics;
use scheme_import::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "scheme_import")]
#[command(about = "Convert the schemes workbook into the catalog JSON document")]
#[command(version)]
struct Cli {
    /// Config file (defaults to scheme_import.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input workbook, overriding config and environment
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output JSON file, overriding config and environment
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = logging::init_logging(&config.logging);

    let mut pipeline_config = config.pipeline_config();
    if let Some(input) = cli.input {
        pipeline_config.input_path = input;
    }
    if let Some(output) = cli.output {
        pipeline_config.output_path = output;
    }

    match Pipeline::new(pipeline_config).run() {
        Ok(result) => {
            info!(
                rows = result.rows_read,
                states = result.states.len(),
                categories = result.categories.len(),
                digest = %result.digest,
                "Import finished"
            );
            println!(
                "✅ Generated: {} (items: {})",
                result.output_path.display(),
                result.records_written
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            metrics::run_failed();
            error!("Import failed: {}", e);
            eprintln!("❌ Import failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
