use clap::Parser;
use fund_check::config::budget;
use fund_check::utils::{logger, validation::Validate};
use fund_check::{CheckEngine, CliConfig, LunchMoneyClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fund-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let token = std::env::var(budget::TOKEN_ENV_VAR).unwrap_or_default();
    if token.is_empty() {
        tracing::warn!(
            "{} is not set; requests will be sent unauthorized",
            budget::TOKEN_ENV_VAR
        );
    }

    let client = LunchMoneyClient::new(config.base_url.clone(), token);
    let engine = CheckEngine::new_with_monitoring(client, config.clone(), config.monitor);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Check completed, available funds: {:.2}", report.available);
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.should_notify);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                fund_check::utils::error::ErrorSeverity::Low => 0,
                fund_check::utils::error::ErrorSeverity::Medium => 2,
                fund_check::utils::error::ErrorSeverity::High => 1,
                fund_check::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
