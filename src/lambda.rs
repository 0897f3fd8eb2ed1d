use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use price_alert::utils::logger;
use price_alert::utils::validation::Validate;
use price_alert::{build_job, Credentials, RunOutcome, Settings};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub outcome: RunOutcome,
}

// Invoked by a scheduled rule; the event payload carries nothing we need.
async fn function_handler(_event: LambdaEvent<serde_json::Value>) -> Result<Response, Error> {
    tracing::info!("Starting price-alert Lambda function");

    let settings = Settings::default().with_env_overrides(|k| std::env::var(k).ok())?;
    settings.validate()?;
    let credentials = Credentials::from_env()?;

    let job = build_job(&settings, &credentials)?;
    let outcome = job.run().await;

    let response = Response {
        message: match outcome.price() {
            Some(price) => format!("Processed. Final price: {:.2}", price),
            None => "Processed. Price unavailable".to_string(),
        },
        outcome,
    };

    tracing::info!("price-alert Lambda function completed");
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
