/// Hello World publisher
///
/// Writes an empty HelloMessage on "Example HelloMessage" every few seconds
/// until the sample count is reached or the process is asked to stop.
use hello_core::args::{self, ParseOutcome};
use hello_core::{app, ApplicationArguments, HelloMessage};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match args::parse::<ApplicationArguments>() {
        ParseOutcome::Run(args) => args,
        ParseOutcome::Exit => return ExitCode::SUCCESS,
        ParseOutcome::Failure => return ExitCode::FAILURE,
    };

    let run_args = args.clone();
    hello_apps::launch("hello_world_publisher", &args, |config, shutdown| async move {
        app::publish(&config, &run_args, &shutdown, |_| HelloMessage::default()).await
    })
    .await
}
