// Runs one end-to-end conformance pass against the plugin configured in the environment.
// Exit code: 0 completed, 1 fatal error, 2 stopped early on a negative plugin answer.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use plugin_conformance_harness::{connect, Harness, PluginEndpoint, RunOutcome};

async fn run() -> anyhow::Result<RunOutcome> {
    let endpoint = PluginEndpoint::from_env().context("Could not read plugin configuration")?;
    let client = connect(&endpoint).context("Could not set up plugin client")?;

    // Fresh seed every run
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    info!(seed, "Starting harness run");

    let outcome = Harness::new(client.as_ref(), seed).run_end_to_end().await?;
    Ok(outcome)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(RunOutcome::Completed(summary)) => {
            info!(
                plugin = %summary.plugin_name,
                product_id = %summary.product_id,
                booking_confirmation_code = %summary.booking_confirmation_code,
                "Run completed"
            );
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Stopped(reason)) => {
            warn!(%reason, "Run stopped early");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = ?e, "Run aborted");
            ExitCode::FAILURE
        }
    }
}
