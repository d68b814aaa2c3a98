//! Message types published on the bus
//!
//! Each type names the topic it travels on through [`Topic`]. Payloads are
//! handed to the middleware as JSON, so any `Serialize` type works here.

use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// A message type bound to a named topic
pub trait Topic: Serialize + DeserializeOwned + fmt::Display + Send + Sync + 'static {
    /// Topic name as seen by every participant in a domain
    const NAME: &'static str;

    /// Type name printed in progress lines ("Writing HelloMessage, count 3")
    const TYPE_NAME: &'static str;
}

/// Placeholder message with no content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloMessage {}

impl Topic for HelloMessage {
    const NAME: &'static str = "Example HelloMessage";
    const TYPE_NAME: &'static str = "HelloMessage";
}

impl fmt::Display for HelloMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[]")
    }
}

pub const MIN_DEGREES: i32 = 30;
pub const MAX_DEGREES: i32 = 32;

/// A temperature reading from one sensor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub sensor_id: String,
    pub degrees: i32,
}

impl Temperature {
    pub fn new(sensor_id: impl Into<String>, degrees: i32) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            degrees,
        }
    }

    /// Simulated reading between 30 and 32 degrees
    pub fn sample<R: Rng + ?Sized>(sensor_id: &str, rng: &mut R) -> Self {
        Self::new(sensor_id, rng.gen_range(MIN_DEGREES..=MAX_DEGREES))
    }
}

impl Topic for Temperature {
    const NAME: &'static str = "ChocolateTemperature";
    const TYPE_NAME: &'static str = "ChocolateTemperature";
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[sensor_id: {:?}, degrees: {}]", self.sensor_id, self.degrees)
    }
}

/// Stations a chocolate lot can pass through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationKind {
    #[default]
    InvalidController,
    CocoaButterController,
    SugarController,
    MilkController,
    VanillaController,
    TemperingController,
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StationKind::InvalidController => "INVALID_CONTROLLER",
            StationKind::CocoaButterController => "COCOA_BUTTER_CONTROLLER",
            StationKind::SugarController => "SUGAR_CONTROLLER",
            StationKind::MilkController => "MILK_CONTROLLER",
            StationKind::VanillaController => "VANILLA_CONTROLLER",
            StationKind::TemperingController => "TEMPERING_CONTROLLER",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LotStatusKind {
    #[default]
    Waiting,
    Processing,
    Completed,
}

impl fmt::Display for LotStatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LotStatusKind::Waiting => "WAITING",
            LotStatusKind::Processing => "PROCESSING",
            LotStatusKind::Completed => "COMPLETED",
        };
        f.write_str(name)
    }
}

/// Where a chocolate lot is and where it goes next. `lot_id` identifies the lot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChocolateLotState {
    pub lot_id: u32,
    pub station: StationKind,
    pub next_station: StationKind,
    pub lot_status: LotStatusKind,
}

impl ChocolateLotState {
    /// A new lot queued for `next_station`
    pub fn waiting_for(lot_id: u32, next_station: StationKind) -> Self {
        Self {
            lot_id,
            station: StationKind::InvalidController,
            next_station,
            lot_status: LotStatusKind::Waiting,
        }
    }

    /// The same lot, now being processed at `station` with no next station yet
    pub fn processing_at(&self, station: StationKind) -> Self {
        Self {
            lot_id: self.lot_id,
            station,
            next_station: StationKind::InvalidController,
            lot_status: LotStatusKind::Processing,
        }
    }
}

impl Topic for ChocolateLotState {
    const NAME: &'static str = "ChocolateLotState";
    const TYPE_NAME: &'static str = "ChocolateLotState";
}

impl fmt::Display for ChocolateLotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[lot_id: {}, station: {}, next_station: {}, lot_status: {}]",
            self.lot_id, self.station, self.next_station, self.lot_status
        )
    }
}
