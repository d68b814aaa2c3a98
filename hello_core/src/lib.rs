//! # hello_core
//!
//! Shared plumbing for the hello_bus example programs, which publish and
//! subscribe to periodic samples over the Zenoh middleware.
//!
//! - **Arguments**: domain id, sample count and verbosity flags
//! - **Shutdown**: Ctrl+C / SIGTERM hook observed by the sample loops
//! - **Communication**: typed publishers and subscribers on a Zenoh session
//! - **App**: the publish and subscribe loops themselves
//! - **Factory**: the tempering and monitoring/control stations for chocolate lots
//!
//! ## Quick Start
//!
//! ```no_run
//! use hello_core::{app, BusConfig, ApplicationArguments, HelloMessage, Shutdown};
//!
//! # async fn run() -> hello_core::HelloResult<()> {
//! let args = ApplicationArguments { sample_count: 3, ..Default::default() };
//! let shutdown = Shutdown::new();
//! app::publish(&BusConfig::default(), &args, &shutdown, |_| HelloMessage::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod args;
pub mod communication;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod messages;
pub mod shutdown;

#[cfg(test)]
mod test_support;

pub use args::{ApplicationArguments, ParseOutcome, TemperatureArguments};
pub use communication::{BusSession, Publisher, SampleReader, SampleWriter, Subscriber};
pub use config::{BusConfig, FactoryConfig, SessionMode};
pub use error::{HelloError, HelloResult};
pub use messages::{ChocolateLotState, HelloMessage, LotStatusKind, StationKind, Temperature, Topic};
pub use shutdown::Shutdown;
