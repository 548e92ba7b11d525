//! Seams between the control loop and the outside world.
//!
//! On the device these are hardware drivers and the network stack; in the
//! simulator they are synthetic signal generators. The loop only ever sees
//! these traits, which keeps the whole tick unit-testable without hardware
//! or network mocks beyond plain in-memory structs.
//!
//! A variant deployment can also implement [`SensorSource`] against the
//! remote store itself (readings written by another device); the loop does
//! not care where a sample originates.

use gaia_common::render::RenderOp;
use gaia_common::thresholds::ThresholdUpdate;

use crate::error::{DisplayError, SensorError, SyncError, UploadError};
use crate::telemetry::TelemetryRecord;

/// One raw acquisition, before validation.
///
/// `temperature`/`humidity` may be NaN when the air sensor fails mid-read;
/// the loop turns that into a discarded tick rather than an error here so
/// a flaky sensor does not look different from a slow one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorSample {
    /// Air temperature in C (NaN on a failed read).
    pub temperature: f32,
    /// Relative humidity in percent (NaN on a failed read).
    pub humidity: f32,
    /// Raw soil probe count, kept for diagnostic telemetry.
    pub soil_raw: i32,
    /// Illuminance in lux; may be negative on a failed conversion.
    pub illuminance: f32,
}

/// Acquires one full raw sample per tick.
pub trait SensorSource {
    /// Read all sensors once. An `Err` discards the whole tick.
    fn sample(&mut self) -> Result<SensorSample, SensorError>;
}

/// Fetches the remote threshold document on the slow cadence.
pub trait ThresholdSource {
    /// Fetch the current partial document (any subset of keys).
    fn fetch(&mut self) -> Result<ThresholdUpdate, SyncError>;
}

/// Delivers one telemetry record per tick to the remote store.
pub trait TelemetrySink {
    /// Upload one record. Failures are dropped, never queued.
    fn upload(&mut self, record: &TelemetryRecord) -> Result<(), UploadError>;
}

/// Executes one composed frame on the physical (or simulated) panel.
pub trait FrameSink {
    /// Flush one op list. A missing panel may simply return `Err` forever;
    /// the loop keeps running with rendering degraded to a no-op.
    fn present(&mut self, ops: &[RenderOp]) -> Result<(), DisplayError>;
}

/// Ambient device state shown in the status bar.
pub trait SystemStatus {
    /// True while the wireless link is associated.
    fn link_up(&self) -> bool;

    /// Battery charge in percent (0-100; values outside clamp at render).
    fn battery_percent(&self) -> i32;
}
