//! Publish and subscribe loops
//!
//! The loops stop when the requested sample count is reached or shutdown is
//! requested, whichever comes first. Shutdown also cuts short the wait
//! between samples.

use crate::args::ApplicationArguments;
use crate::communication::{BusSession, SampleReader, SampleWriter};
use crate::config::BusConfig;
use crate::error::HelloResult;
use crate::messages::Topic;
use crate::shutdown::Shutdown;
use std::time::Duration;

/// Write one sample every `period` until the limit or shutdown.
///
/// `make_sample` receives the zero-based sample count. Returns how many
/// samples were written.
pub async fn run_publisher<T, W, F>(
    writer: &W,
    args: &ApplicationArguments,
    period: Duration,
    shutdown: &Shutdown,
    make_sample: F,
) -> HelloResult<u32>
where
    T: Topic,
    W: SampleWriter<T>,
    F: FnMut(u32) -> T,
{
    publish_loop(writer, args, period, shutdown, make_sample, true).await
}

/// Same as [`run_publisher`] without the per-sample progress line, for
/// streams that run alongside another loop.
pub async fn run_background_publisher<T, W, F>(
    writer: &W,
    args: &ApplicationArguments,
    period: Duration,
    shutdown: &Shutdown,
    make_sample: F,
) -> HelloResult<u32>
where
    T: Topic,
    W: SampleWriter<T>,
    F: FnMut(u32) -> T,
{
    publish_loop(writer, args, period, shutdown, make_sample, false).await
}

async fn publish_loop<T, W, F>(
    writer: &W,
    args: &ApplicationArguments,
    period: Duration,
    shutdown: &Shutdown,
    mut make_sample: F,
    announce: bool,
) -> HelloResult<u32>
where
    T: Topic,
    W: SampleWriter<T>,
    F: FnMut(u32) -> T,
{
    let mut count = 0u32;
    while !shutdown.is_requested() && !args.limit_reached(count) {
        let sample = make_sample(count);

        if announce {
            println!("Writing {}, count {}", T::TYPE_NAME, count);
        }
        writer.write(&sample).await?;
        count = count.saturating_add(1);

        tokio::select! {
            _ = tokio::time::sleep(period) => {}
            _ = shutdown.wait() => break,
        }
    }

    tracing::debug!("Wrote {} samples on '{}'", count, writer.key_expr());
    Ok(count)
}

/// Print incoming samples until the limit or shutdown.
///
/// Each pass waits up to `wait` for data. Returns how many samples were read.
pub async fn run_subscriber<T, R>(
    reader: &mut R,
    args: &ApplicationArguments,
    wait: Duration,
    shutdown: &Shutdown,
) -> HelloResult<u32>
where
    T: Topic,
    R: SampleReader<T>,
{
    let mut samples_read = 0u32;
    while !shutdown.is_requested() && !args.limit_reached(samples_read) {
        println!(
            "{} subscriber sleeping up to {} sec...",
            T::TYPE_NAME,
            wait.as_secs_f64()
        );

        let taken = tokio::select! {
            taken = reader.take_timeout(wait) => taken?,
            _ = shutdown.wait() => break,
        };

        for sample in &taken {
            println!("{}", sample);
        }
        samples_read = samples_read.saturating_add(taken.len() as u32);
    }

    tracing::debug!("Read {} samples on '{}'", samples_read, reader.key_expr());
    Ok(samples_read)
}

/// Open a session, publish `T` until done, then tear everything down
pub async fn publish<T, F>(
    config: &BusConfig,
    args: &ApplicationArguments,
    shutdown: &Shutdown,
    make_sample: F,
) -> HelloResult<u32>
where
    T: Topic,
    F: FnMut(u32) -> T,
{
    let session = BusSession::open(config).await?;
    let publisher = session.declare_publisher::<T>(args.domain_id).await?;
    tracing::info!(
        "Publishing {} on '{}' every {:?}",
        T::TYPE_NAME,
        publisher.key_expr(),
        config.publish_period()
    );

    let written = run_publisher(&publisher, args, config.publish_period(), shutdown, make_sample).await;

    // Teardown runs on every path; a loop error wins over a teardown error
    let undeclared = publisher.undeclare().await;
    let closed = session.close().await;
    let written = written?;
    undeclared?;
    closed?;
    Ok(written)
}

/// Open a session, print `T` samples until done, then tear everything down
pub async fn subscribe<T: Topic>(
    config: &BusConfig,
    args: &ApplicationArguments,
    shutdown: &Shutdown,
) -> HelloResult<u32> {
    let session = BusSession::open(config).await?;
    let mut subscriber = session.declare_subscriber::<T>(args.domain_id).await?;
    tracing::info!("Subscribed to {} on '{}'", T::TYPE_NAME, subscriber.key_expr());

    let read = run_subscriber(&mut subscriber, args, config.subscribe_wait(), shutdown).await;

    let undeclared = subscriber.undeclare().await;
    let closed = session.close().await;
    let read = read?;
    undeclared?;
    closed?;
    Ok(read)
}
