//! The per-tick telemetry upload record.

use gaia_common::reading::Reading;

/// One record written to the remote store per tick.
///
/// Field names match the document keys the companion app reads.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetryRecord {
    /// Air temperature in C.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Normalized soil moisture, 0-100.
    pub soil_moisture: i32,
    /// Raw soil probe count, diagnostic only.
    pub soil_raw: i32,
    /// Illuminance in lux, never negative.
    pub light_intensity: f32,
    /// Monotonic milliseconds since boot.
    pub timestamp: u64,
}

impl TelemetryRecord {
    /// Build the record for one validated reading.
    pub fn new(reading: &Reading, soil_raw: i32, timestamp: u64) -> Self {
        Self {
            temperature: reading.temperature,
            humidity: reading.humidity,
            soil_moisture: reading.moisture_percent,
            soil_raw,
            light_intensity: reading.illuminance,
            timestamp,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
