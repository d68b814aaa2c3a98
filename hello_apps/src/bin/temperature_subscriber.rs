/// Chocolate temperature subscriber
///
/// Prints readings from every sensor publishing on "ChocolateTemperature".
use hello_core::args::{self, ParseOutcome};
use hello_core::{app, ApplicationArguments, Temperature};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match args::parse::<ApplicationArguments>() {
        ParseOutcome::Run(args) => args,
        ParseOutcome::Exit => return ExitCode::SUCCESS,
        ParseOutcome::Failure => return ExitCode::FAILURE,
    };

    let run_args = args.clone();
    hello_apps::launch("temperature_subscriber", &args, |config, shutdown| async move {
        app::subscribe::<Temperature>(&config, &run_args, &shutdown).await
    })
    .await
}
