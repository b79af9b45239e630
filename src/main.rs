mod assertion;
mod case;
mod config;
mod error;
mod execution;
mod http;
mod json_path;
mod lead;
mod report;
mod run;
#[cfg(test)]
mod testing;

use crate::config::Config;
use crate::error::AppError;
use crate::http::ApiClient;
use crate::lead::model::LeadIdentity;
use crate::lead::service::run_scenarios;
use crate::report::{write_json_report, Summary};
use crate::run::service::Runner;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            eprintln!("leadprobe: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<ExitCode, AppError> {
    let config = Config::from_env()?;
    let client = ApiClient::new(config.base_url.clone(), config.timeout)?;
    let mut runner = Runner::new(client);
    info!(run_id = %runner.run().id, base_url = %config.base_url, "starting lead API smoke test");

    println!("Starting Lead API Testing...");
    println!("{}", "=".repeat(50));

    let identity = LeadIdentity::now();
    run_scenarios(&mut runner, &identity, config.validation_status).await;

    let run = runner.into_run();
    let summary = Summary::from_run(&run);
    summary.print();

    if let Some(path) = &config.report_path {
        if let Err(err) = write_json_report(path, &run) {
            error!("{}", err);
        }
    }
    Ok(ExitCode::from(summary.exit_status()))
}
