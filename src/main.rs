// src/main.rs
use clap::Parser;
use std::path::PathBuf;
use tnufa_extractor::extractors::FormExtractor;
use tnufa_extractor::storage::StorageManager;
use tnufa_extractor::utils::error::StorageError;
use tnufa_extractor::utils::{self, AppError};

/// Command Line Interface for the Tnufa application extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the filled-in application (.docx)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for extracted answers (prints JSON to stdout when omitted)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Pretty-print the JSON written to stdout
    #[arg(long)]
    pretty: bool,

    /// Debug mode - save the fragment routing trace next to the results
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    if args.debug && args.output_dir.is_none() {
        return Err(AppError::Config("--debug requires --output-dir".to_string()));
    }

    // 3. Read the document
    let bytes = tokio::fs::read(&args.input).await?;
    tracing::info!("Read {} ({} bytes)", args.input.display(), bytes.len());

    // 4. Extract
    let report = FormExtractor::new().extract_with_report(&bytes)?;

    // 5. Save or print
    match &args.output_dir {
        Some(output_dir) => {
            let storage = StorageManager::new(output_dir)?;
            let name = args
                .input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("application");

            storage.save_result(name, &report.result)?;
            storage.save_metadata(name, &report.result, &report.stats)?;

            if args.debug {
                let trace_path = storage.base_dir().join(format!("{}_trace.txt", name));
                utils::trace_debug::save_routing_trace(&report, &trace_path)?;
            }
        }
        None => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&report.result)
            } else {
                serde_json::to_string(&report.result)
            }
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
            println!("{}", json);
        }
    }

    tracing::info!(
        "Processing finished. Answered sections: {}/{}",
        report.result.answered(),
        report.result.len()
    );

    Ok(())
}
