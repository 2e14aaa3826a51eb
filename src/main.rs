use clap::Parser;
use sales_ledger::utils::error::ErrorSeverity;
use sales_ledger::utils::logger;
use sales_ledger::app::cli_runner;
use sales_ledger::utils::validation::Validate;
use sales_ledger::{CliArgs, CsvFileStorage};
use std::io;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting sales-ledger CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 合併並驗證配置
    let config = match args.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    tracing::debug!(
        data_file = %config.data_file.display(),
        tax_rate = %config.pricing.tax_rate,
        discount = %config.pricing.discount,
        "Resolved configuration"
    );

    let storage = CsvFileStorage::new(config.data_file.clone());

    tracing::info!("📂 Using data file {}", config.data_file.display());

    if let Err(e) = cli_runner::run(
        args.command,
        &config,
        storage,
        io::stdin().lock(),
        io::stdout().lock(),
    ) {
        tracing::error!(
            "❌ sales-ledger failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
