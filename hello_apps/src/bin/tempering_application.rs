/// Tempering station
///
/// Streams the tempering machine's temperature, takes chocolate lots queued
/// for TEMPERING_CONTROLLER and reports each one as processing.
use hello_core::args::{self, ParseOutcome};
use hello_core::{factory, TemperatureArguments};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match args::parse::<TemperatureArguments>() {
        ParseOutcome::Run(args) => args,
        ParseOutcome::Exit => return ExitCode::SUCCESS,
        ParseOutcome::Failure => return ExitCode::FAILURE,
    };

    let run_args = args.clone();
    hello_apps::launch("tempering_application", &args.common, |config, shutdown| async move {
        factory::run_tempering(&config, &run_args, &shutdown).await
    })
    .await
}
