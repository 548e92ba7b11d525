//! Simulated collaborator implementations.
//!
//! Each trait the control loop needs is backed by the shared
//! [`Environment`] plus, for the display, the simulator framebuffer. The
//! remote threshold store is a small stack of JSON documents in the format
//! the companion app writes; `S` cycles through them and the next due sync
//! picks the change up, exactly like the real slow-cadence fetch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use gaia_common::render::{draw_ops, RenderOp};
use gaia_common::thresholds::ThresholdUpdate;
use gaia_controller::{
    DisplayError, FrameSink, SensorError, SensorSample, SensorSource, SyncError, SystemStatus,
    TelemetrySink, TelemetryRecord, ThresholdSource, UploadError,
};

use crate::environment::Environment;

/// Remote threshold documents, as the companion app would write them.
/// The last one is deliberately partial and carries a label long enough
/// to exercise status-bar truncation.
pub static THRESHOLD_DOCS: &[&str] = &[
    r#"{"species":"Monstera","moisture_low":35,"moisture_high":80,"temp_high":32.0,"temp_low":12.0,"lux_low":150.0,"lux_high":2500.0,"humidity_high":90.0,"humidity_low":40.0}"#,
    r#"{"species":"Cactus","moisture_low":10,"moisture_high":50,"temp_high":38.0,"temp_low":5.0,"lux_high":20000.0,"humidity_high":60.0,"humidity_low":5.0}"#,
    r#"{"species":"Chrysanthemum maximum","moisture_low":40}"#,
];

pub type SharedEnv = Rc<RefCell<Environment>>;
pub type SharedDisplay = Rc<RefCell<SimulatorDisplay<BinaryColor>>>;

/// Sensor frontend reading the synthetic environment.
pub struct SimSensors {
    pub env: SharedEnv,
}

impl SensorSource for SimSensors {
    fn sample(&mut self) -> Result<SensorSample, SensorError> {
        let env = self.env.borrow();
        Ok(SensorSample {
            temperature: env.temperature(),
            humidity: env.humidity(),
            soil_raw: env.soil_raw(),
            illuminance: env.illuminance(),
        })
    }
}

/// Remote threshold store backed by [`THRESHOLD_DOCS`].
pub struct SimThresholds {
    pub env: SharedEnv,
    pub doc_index: Rc<Cell<usize>>,
}

impl ThresholdSource for SimThresholds {
    fn fetch(&mut self) -> Result<ThresholdUpdate, SyncError> {
        if !self.env.borrow().link_up {
            return Err(SyncError::Unreachable);
        }
        let doc = THRESHOLD_DOCS[self.doc_index.get() % THRESHOLD_DOCS.len()];
        serde_json::from_str(doc).map_err(|_| SyncError::Malformed)
    }
}

/// Telemetry sink that logs the JSON document instead of talking to a
/// real store.
pub struct SimTelemetry {
    pub env: SharedEnv,
    pub uploaded: u64,
}

impl TelemetrySink for SimTelemetry {
    fn upload(&mut self, record: &TelemetryRecord) -> Result<(), UploadError> {
        if !self.env.borrow().link_up {
            return Err(UploadError::LinkDown);
        }
        let doc = serde_json::to_string(record).map_err(|_| UploadError::Rejected)?;
        self.uploaded += 1;
        log::info!("telemetry #{}: {doc}", self.uploaded);
        Ok(())
    }
}

/// Frame sink rendering into the simulator window's framebuffer.
pub struct SimFrameSink {
    pub display: SharedDisplay,
}

impl FrameSink for SimFrameSink {
    fn present(&mut self, ops: &[RenderOp]) -> Result<(), DisplayError> {
        let mut display = self.display.borrow_mut();
        display.clear(BinaryColor::Off).map_err(|_| DisplayError)?;
        draw_ops(ops, &mut *display).map_err(|_| DisplayError)
    }
}

/// Status source mirroring the environment's link and battery state.
pub struct SimStatus {
    pub env: SharedEnv,
}

impl SystemStatus for SimStatus {
    fn link_up(&self) -> bool { self.env.borrow().link_up }

    fn battery_percent(&self) -> i32 { self.env.borrow().battery_percent }
}

// =============================================================================
// Unit Tests
// =============================================================================
