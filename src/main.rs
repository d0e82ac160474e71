use carrier_lookup::core::ConfigProvider;
use carrier_lookup::utils::{logger, validation::Validate};
use carrier_lookup::{
    CarrierClient, CliConfig, EtlEngine, LocalStorage, LookupError, LookupPipeline, RunReport,
    TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting carrier-lookup CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor = cli.monitor;
    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => run(config, monitor).await,
                Err(e) => Err(e),
            }
        }
        None => run(cli, monitor).await,
    };

    match result {
        Ok(report) => print_summary(&report),
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Carrier lookup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run<C>(config: C, monitor: bool) -> Result<RunReport, LookupError>
where
    C: ConfigProvider + Validate + 'static,
{
    // 驗證配置與憑證都在任何查詢之前完成
    config.validate()?;
    let client = CarrierClient::from_config(&config)?;

    tracing::info!(
        "Rate Limit: {} requests/second, timeout {}s",
        config.rate_limit(),
        config.timeout_seconds()
    );
    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = LookupPipeline::new(LocalStorage::new("."), config, client);
    EtlEngine::new_with_monitoring(pipeline, monitor).run().await
}

fn print_summary(report: &RunReport) {
    let line = "=".repeat(60);
    println!();
    println!("{}", line);
    println!("Summary");
    println!("{}", line);
    println!("Total processed: {}", report.summary.total);
    println!("Successful: {}", report.summary.successful);
    println!("Failed: {}", report.summary.failed);
    println!("Output file: {}", report.output_path);
    println!("{}", line);
}
