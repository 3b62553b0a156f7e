use clap::Parser;
use template_service::utils::{logger, validation::Validate};
use template_service::{CliArgs, Server, ServiceError, SERVICE_DESCRIPTION, SERVICE_NAME};

fn report_and_exit(e: &ServiceError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let verbose = args.verbose;

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            // 設定還沒載入完成，先用預設格式初始化日誌
            logger::init_logger(Default::default(), verbose);
            report_and_exit(&e);
        }
    };

    // 初始化日誌
    logger::init_logger(config.log_format, verbose);

    tracing::info!("Starting {} ({})", SERVICE_NAME, SERVICE_DESCRIPTION);
    if verbose {
        tracing::debug!(
            "Port: {}, database configured: {}, cache configured: {}",
            config.port,
            !config.database_url.is_empty(),
            !config.cache_url.is_empty()
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        report_and_exit(&e);
    }

    let server = Server::new(config);
    match server.run().await {
        Ok(signal) => std::process::exit(signal.exit_code()),
        Err(e) => report_and_exit(&e),
    }
}
