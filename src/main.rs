use branch_report::utils::{logger, validation::Validate};
use branch_report::{LocalStorage, ReportConfig, ReportEngine, ReportPipeline};

fn main() {
    let config = ReportConfig::default();

    logger::init_logger(config.verbose);

    tracing::info!("Starting branch-report");

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("branch-report: {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("Branch report completed: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Branch report failed: {}", e);
            eprintln!("branch-report: {}", e);
            std::process::exit(1);
        }
    }
}
