/// Monitoring/control station
///
/// Starts `--sample-count` chocolate lots (0 for no limit), each queued for
/// the tempering station, and prints every lot update on "ChocolateLotState".
use hello_core::args::{self, ParseOutcome};
use hello_core::{factory, ApplicationArguments};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match args::parse::<ApplicationArguments>() {
        ParseOutcome::Run(args) => args,
        ParseOutcome::Exit => return ExitCode::SUCCESS,
        ParseOutcome::Failure => return ExitCode::FAILURE,
    };

    let run_args = args.clone();
    hello_apps::launch("monitoring_ctrl_application", &args, |config, shutdown| async move {
        factory::run_monitoring(&config, &run_args, &shutdown).await
    })
    .await
}
