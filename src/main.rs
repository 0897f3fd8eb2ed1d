use chrono::Utc;
use clap::Parser;
use price_alert::utils::logger;
use price_alert::{build_job, AlertError, CliConfig, Credentials, LiveJob};

fn setup(config: &CliConfig) -> Result<LiveJob, AlertError> {
    let settings = config.resolve_settings()?;
    tracing::debug!("Settings: {:?}", settings);

    let credentials = Credentials::from_env()?;
    build_job(&settings, &credentials)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting price-alert");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Configuration problems are the only fatal errors
    let job = match setup(&config) {
        Ok(job) => job,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if config.test_push {
        match job.send_test_push().await {
            Ok(_) => println!("✅ Test push sent"),
            Err(e) => {
                tracing::warn!("Test push failed: {}", e);
                println!("⚠️ Test push failed: {}", e);
            }
        }
        return Ok(());
    }

    let now = config.at.unwrap_or_else(Utc::now);
    let outcome = job.run_at(now).await;

    match outcome.price() {
        Some(price) => println!("Processado. Preço final: {:.2} ({:?})", price, outcome),
        None => println!("Processado. Preço indisponível"),
    }

    Ok(())
}
