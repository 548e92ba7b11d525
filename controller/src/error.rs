//! Collaborator error taxonomy.
//!
//! Four failure classes, matching the loop's policies: discard the tick
//! (sensor), keep the last snapshot (sync), drop the record (upload), or
//! degrade to a no-op (display). None are fatal.

use core::fmt;

/// Raw acquisition failed or produced unusable values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorError {
    /// The air sensor (temperature/humidity) did not answer.
    AirSensor,
    /// The soil probe did not answer.
    SoilProbe,
    /// The light meter did not answer.
    LightMeter,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AirSensor => f.write_str("air sensor read failed"),
            Self::SoilProbe => f.write_str("soil probe read failed"),
            Self::LightMeter => f.write_str("light meter read failed"),
        }
    }
}

/// Remote threshold document unreachable or malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncError {
    /// The remote store could not be reached.
    Unreachable,
    /// The document existed but did not parse.
    Malformed,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => f.write_str("threshold store unreachable"),
            Self::Malformed => f.write_str("threshold document malformed"),
        }
    }
}

/// Telemetry record could not be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadError {
    /// The remote store rejected or never received the record.
    Rejected,
    /// No network link at upload time.
    LinkDown,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => f.write_str("telemetry upload rejected"),
            Self::LinkDown => f.write_str("telemetry upload failed: link down"),
        }
    }
}

/// The display refused a frame (absent panel, bus fault).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayError;

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("display flush failed")
    }
}
