//! Chocolate factory programs
//!
//! Lots travel on the `ChocolateLotState` topic. The monitoring/control
//! application starts lots waiting for the tempering station and prints every
//! lot update it sees. The tempering application streams its temperature in
//! the background, picks up lots addressed to it and reports them as
//! processing.

use crate::app::{run_background_publisher, run_subscriber};
use crate::args::{ApplicationArguments, TemperatureArguments};
use crate::communication::{BusSession, SampleReader, SampleWriter};
use crate::config::{BusConfig, FactoryConfig};
use crate::error::HelloResult;
use crate::messages::{ChocolateLotState, StationKind, Temperature};
use crate::shutdown::Shutdown;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Lot ids wrap at this value
pub const LOT_ID_LIMIT: u32 = 100;

/// Take lots addressed to `station` and report each one as processing there.
///
/// Lots for other stations are ignored. Processing a lot takes
/// `timing.processing_time()`. Stops after `args.sample_count` lots (0 means
/// never) or on shutdown. Returns the number of lots processed.
pub async fn process_lots<R, W>(
    reader: &mut R,
    writer: &W,
    station: StationKind,
    args: &ApplicationArguments,
    timing: &FactoryConfig,
    shutdown: &Shutdown,
) -> HelloResult<u32>
where
    R: SampleReader<ChocolateLotState>,
    W: SampleWriter<ChocolateLotState>,
{
    let mut processed = 0u32;
    while !shutdown.is_requested() && !args.limit_reached(processed) {
        println!("waiting for lot");

        let taken = tokio::select! {
            taken = reader.take_timeout(timing.lot_wait()) => taken?,
            _ = shutdown.wait() => break,
        };

        for lot in taken.iter().filter(|lot| lot.next_station == station) {
            println!("Processing lot #{}", lot.lot_id);
            writer.write(&lot.processing_at(station)).await?;
            processed = processed.saturating_add(1);

            tokio::select! {
                _ = tokio::time::sleep(timing.processing_time()) => {}
                _ = shutdown.wait() => break,
            }
        }
    }

    tracing::debug!("{} processed {} lots", station, processed);
    Ok(processed)
}

/// Tempering station loops: temperature stream plus lot processing.
///
/// The temperature stream runs until lot processing ends. Returns the number
/// of lots processed.
pub async fn run_tempering_station<TW, LW, LR>(
    temperature_writer: &TW,
    lot_writer: &LW,
    lot_reader: &mut LR,
    args: &TemperatureArguments,
    timing: &FactoryConfig,
    shutdown: &Shutdown,
) -> HelloResult<u32>
where
    TW: SampleWriter<Temperature>,
    LW: SampleWriter<ChocolateLotState>,
    LR: SampleReader<ChocolateLotState>,
{
    let stop_temperatures = Shutdown::new();
    let unbounded = ApplicationArguments {
        sample_count: 0,
        ..args.common.clone()
    };
    let sensor_id = args.sensor_id.as_str();
    let mut rng = StdRng::from_entropy();

    let lots = process_lots(
        lot_reader,
        lot_writer,
        StationKind::TemperingController,
        &args.common,
        timing,
        shutdown,
    );
    let temperatures = run_background_publisher(
        temperature_writer,
        &unbounded,
        timing.temperature_period(),
        &stop_temperatures,
        |_| Temperature::sample(sensor_id, &mut rng),
    );
    tokio::pin!(lots);
    tokio::pin!(temperatures);

    tokio::select! {
        processed = &mut lots => {
            stop_temperatures.trigger();
            let written = temperatures.await?;
            tracing::debug!("Tempering station wrote {} temperatures", written);
            processed
        }
        written = &mut temperatures => {
            // The stream only ends early when a write fails
            written?;
            lots.await
        }
    }
}

/// Monitoring/control loops: start lots and count lot updates.
///
/// `args.sample_count` is the number of lots to start, and also the number
/// of lot updates to see before finishing. Returns the updates seen.
pub async fn run_monitoring_station<LW, LR>(
    lot_writer: &LW,
    lot_reader: &mut LR,
    args: &ApplicationArguments,
    timing: &FactoryConfig,
    shutdown: &Shutdown,
) -> HelloResult<u32>
where
    LW: SampleWriter<ChocolateLotState>,
    LR: SampleReader<ChocolateLotState>,
{
    let starts = run_background_publisher(
        lot_writer,
        args,
        timing.lot_start_period(),
        shutdown,
        |count| {
            let lot = ChocolateLotState::waiting_for(count % LOT_ID_LIMIT, StationKind::TemperingController);
            println!("\nStart lot with ID {} and next_station: {}", lot.lot_id, lot.next_station);
            lot
        },
    );
    let updates = run_subscriber(lot_reader, args, timing.lot_wait(), shutdown);
    tokio::pin!(starts);
    tokio::pin!(updates);

    tokio::select! {
        seen = &mut updates => {
            starts.await?;
            seen
        }
        started = &mut starts => {
            started?;
            updates.await
        }
    }
}

/// Tempering application over a Zenoh session
pub async fn run_tempering(
    config: &BusConfig,
    args: &TemperatureArguments,
    shutdown: &Shutdown,
) -> HelloResult<u32> {
    let domain_id = args.common.domain_id;
    let session = BusSession::open(config).await?;
    let temperature_writer = session.declare_publisher::<Temperature>(domain_id).await?;
    let lot_writer = session.declare_publisher::<ChocolateLotState>(domain_id).await?;
    let mut lot_reader = session.declare_subscriber::<ChocolateLotState>(domain_id).await?;

    println!("ChocolateTemperature Sensor with ID: {} starting", args.sensor_id);
    let processed = run_tempering_station(
        &temperature_writer,
        &lot_writer,
        &mut lot_reader,
        args,
        &config.factory,
        shutdown,
    )
    .await;

    let teardown = [
        temperature_writer.undeclare().await,
        lot_writer.undeclare().await,
        lot_reader.undeclare().await,
        session.close().await,
    ];
    let processed = processed?;
    teardown.into_iter().collect::<HelloResult<Vec<()>>>()?;
    Ok(processed)
}

/// Monitoring/control application over a Zenoh session
pub async fn run_monitoring(
    config: &BusConfig,
    args: &ApplicationArguments,
    shutdown: &Shutdown,
) -> HelloResult<u32> {
    let session = BusSession::open(config).await?;
    let lot_writer = session.declare_publisher::<ChocolateLotState>(args.domain_id).await?;
    let mut lot_reader = session.declare_subscriber::<ChocolateLotState>(args.domain_id).await?;

    let seen = run_monitoring_station(&lot_writer, &mut lot_reader, args, &config.factory, shutdown).await;

    let teardown = [
        lot_writer.undeclare().await,
        lot_reader.undeclare().await,
        session.close().await,
    ];
    let seen = seen?;
    teardown.into_iter().collect::<HelloResult<Vec<()>>>()?;
    Ok(seen)
}
