use chrono::Local;
use clap::Parser;
use fund_check::config::budget;
use fund_check::core::month;
use fund_check::utils::logger;
use fund_check::LunchMoneyClient;

#[derive(Parser)]
#[command(name = "list-sinking")]
#[command(about = "Lists rollover-enabled budget categories for the embedded sinking-fund table")]
struct Args {
    #[arg(long, default_value = budget::DEFAULT_BASE_URL)]
    base_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let token = std::env::var(budget::TOKEN_ENV_VAR).unwrap_or_default();
    if token.is_empty() {
        tracing::warn!(
            "{} is not set; requests will be sent unauthorized",
            budget::TOKEN_ENV_VAR
        );
    }

    let client = LunchMoneyClient::new(args.base_url, token);
    let range = month::current_month(Local::now().date_naive());

    tracing::info!(
        "Fetching category settings for {} to {}",
        range.start_str(),
        range.end_str()
    );
    let summary = client.category_settings(&range).await?;

    // Output is ready to paste into config::budget::SINKING_CATEGORY_IDS.
    let mut listed = 0;
    for category in &summary.categories {
        let Some(props) = &category.properties else {
            continue;
        };
        if !props.rollover_enabled() {
            continue;
        }
        if let Some(info) = &props.category {
            println!("{}, // {}", info.id, info.name);
            listed += 1;
        }
    }

    tracing::info!(
        "✅ {} of {} categories have rollover enabled",
        listed,
        summary.categories.len()
    );

    Ok(())
}
