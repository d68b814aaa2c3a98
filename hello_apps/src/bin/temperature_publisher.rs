/// Chocolate temperature publisher
///
/// Streams simulated tempering-machine readings (30-32 degrees) for one
/// sensor on "ChocolateTemperature".
use hello_core::args::{self, ParseOutcome};
use hello_core::{app, Temperature, TemperatureArguments};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match args::parse::<TemperatureArguments>() {
        ParseOutcome::Run(args) => args,
        ParseOutcome::Exit => return ExitCode::SUCCESS,
        ParseOutcome::Failure => return ExitCode::FAILURE,
    };

    let TemperatureArguments { common, sensor_id } = args;
    let run_args = common.clone();
    hello_apps::launch("temperature_publisher", &common, |config, shutdown| async move {
        let mut rng = StdRng::from_entropy();
        app::publish(&config, &run_args, &shutdown, |_| {
            Temperature::sample(&sensor_id, &mut rng)
        })
        .await
    })
    .await
}
