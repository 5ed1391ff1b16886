use clap::Parser;
use std::process::ExitCode;
use zoo_report::utils::{logger, validation::Validate};
use zoo_report::{CliConfig, LocalStorage, ReportEngine, ReportPipeline, ZooError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();

    // 合併命令列與設定檔
    let config = match cli.into_run_config() {
        Ok(config) => config,
        Err(e @ ZooError::MissingConfigError { .. }) => {
            println!("{}", e.user_friendly_message());
            return ExitCode::from(e.exit_code());
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            return ExitCode::from(e.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("Run config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        return ExitCode::from(e.exit_code());
    }

    let storage = LocalStorage::new(String::new());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "✅ Report written to {} ({} animals, {} skipped)",
                summary.output, summary.accepted, summary.rejected
            );
            ExitCode::SUCCESS
        }
        // 找不到輸入檔：提示後結束，不產生報告
        Err(e @ ZooError::InputNotFound { .. }) => {
            println!("{}", e.user_friendly_message());
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            tracing::error!("❌ Zoo report failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            ExitCode::from(e.exit_code())
        }
    }
}
