//! Tick orchestration for the Gaia plant companion.
//!
//! The core in `gaia-common` is pure; this crate owns the once-per-second
//! control loop and talks to the outside world through collaborator traits:
//!
//! - [`collaborators`]: Seams for sensors, threshold sync, telemetry
//!   upload, the display, and system status
//! - [`error`]: Collaborator error taxonomy
//! - [`telemetry`]: The per-tick upload record
//! - [`tick`]: The control loop itself
//!
//! Hosts implement the traits (hardware drivers on the device, synthetic
//! sources in the simulator), then call [`tick::ControlLoop::run_tick`] at
//! their own cadence. Every collaborator failure is logged through the
//! `log` facade and absorbed; nothing here terminates the loop.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod collaborators;
pub mod error;
pub mod telemetry;
pub mod tick;

pub use collaborators::{FrameSink, SensorSample, SensorSource, SystemStatus, TelemetrySink, ThresholdSource};
pub use error::{DisplayError, SensorError, SyncError, UploadError};
pub use telemetry::TelemetryRecord;
pub use tick::{ControlLoop, TickOutcome};
