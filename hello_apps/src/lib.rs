//! Startup and teardown shared by the hello_bus programs

use anyhow::Context;
use hello_core::{logging, ApplicationArguments, BusConfig, HelloResult, Shutdown};
use std::future::Future;
use std::process::ExitCode;
use tracing::info;

/// Run one program body after the common setup.
///
/// Sets up logging from `--verbosity`, routes Ctrl+C/SIGTERM to a shutdown
/// handle, loads the bus configuration, then awaits `body`. Any error is
/// printed to stderr, whatever the log filter, and turned into a failing exit
/// status.
pub async fn launch<F, Fut>(program: &str, args: &ApplicationArguments, body: F) -> ExitCode
where
    F: FnOnce(BusConfig, Shutdown) -> Fut,
    Fut: Future<Output = HelloResult<u32>>,
{
    logging::init(args.verbosity);

    match setup_and_run(args, body).await {
        Ok(samples) => {
            info!("{} done after {} samples", program, samples);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Exception in {}: {:#}", program, e);
            ExitCode::FAILURE
        }
    }
}

async fn setup_and_run<F, Fut>(args: &ApplicationArguments, body: F) -> anyhow::Result<u32>
where
    F: FnOnce(BusConfig, Shutdown) -> Fut,
    Fut: Future<Output = HelloResult<u32>>,
{
    let shutdown = Shutdown::new();
    shutdown
        .install_signal_handler()
        .context("installing the termination handler")?;

    let config = BusConfig::load(args.config.as_deref()).context("loading configuration")?;

    Ok(body(config, shutdown).await?)
}
