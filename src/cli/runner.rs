use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cropcenter::{process_directory_to_path, write_batch_report};

use super::args::CliArgs;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = args.params();
    info!("Starting batch processing from directory: {:?}", args.in_dir);
    info!("Output directory: {:?}", args.out_dir);
    info!(
        "Canvas: {}x{}, background threshold: {}, invert: {}",
        params.out_width, params.out_height, params.background_threshold, params.invert_image
    );

    let report = process_directory_to_path(&args.in_dir, &args.out_dir, &params, !args.fail_fast)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    if report.errors > 0 {
        warn!(
            "{} of {} images failed",
            report.errors,
            report.processed + report.errors
        );
    }

    if let Some(path) = &args.report {
        write_batch_report(&report, path)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}
