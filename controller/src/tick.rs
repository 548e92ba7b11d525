//! The once-per-second control loop.
//!
//! Single-threaded and tick-driven: the host calls [`ControlLoop::run_tick`]
//! at its cadence with a monotonic timestamp, and one tick runs to
//! completion before the next begins. Bounding slow external I/O (so a
//! stalled collaborator cannot stall the cadence forever) is the host's
//! job, outside this loop.
//!
//! Per tick, in order:
//!
//! 1. Re-sync thresholds when due (every 30 ticks); failures keep the
//!    last-known snapshot and never reset to the defaults.
//! 2. Acquire one raw sample; an invalid or failed read discards the whole
//!    tick (no classification, no render, no upload).
//! 3. Classify against the current threshold snapshot.
//! 4. Compose status bar + face and hand the frame to the display; a
//!    refused frame is logged and rendering degrades to a no-op.
//! 5. Upload the telemetry record; failures are logged and dropped.

use gaia_common::config::THRESHOLD_SYNC_TICKS;
use gaia_common::cycle::compose_frame;
use gaia_common::reading::{soil_percent_from_raw, Reading};
use gaia_common::state::{classify, PlantState};
use gaia_common::thresholds::{PlantThresholds, ThresholdStore};

use crate::collaborators::{FrameSink, SensorSource, SystemStatus, TelemetrySink, ThresholdSource};
use crate::telemetry::TelemetryRecord;

/// What one tick did, for hosts that want to surface it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick ran end to end; the plant classified to this state.
    Rendered(PlantState),
    /// The sample was missing or invalid; the tick was discarded whole.
    Discarded,
}

/// Owns the threshold store and drives the collaborators.
///
/// The store is an explicit member passed by reference into
/// classification; there is no ambient state anywhere in the core.
pub struct ControlLoop<S, T, U, D, Y> {
    sensors: S,
    threshold_source: T,
    telemetry: U,
    display: D,
    status: Y,
    store: ThresholdStore,
    tick_count: u32,
}

impl<S, T, U, D, Y> ControlLoop<S, T, U, D, Y>
where
    S: SensorSource,
    T: ThresholdSource,
    U: TelemetrySink,
    D: FrameSink,
    Y: SystemStatus,
{
    /// Build a loop around its collaborators, thresholds at the defaults.
    pub fn new(sensors: S, threshold_source: T, telemetry: U, display: D, status: Y) -> Self {
        Self {
            sensors,
            threshold_source,
            telemetry,
            display,
            status,
            store: ThresholdStore::new(),
            tick_count: 0,
        }
    }

    /// Current threshold snapshot.
    pub fn thresholds(&self) -> &PlantThresholds { self.store.current() }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u32 { self.tick_count }

    /// Mutable access to the sensor collaborator (host-side steering).
    pub fn sensors_mut(&mut self) -> &mut S { &mut self.sensors }

    /// Mutable access to the threshold-sync collaborator.
    pub fn threshold_source_mut(&mut self) -> &mut T { &mut self.threshold_source }

    /// Mutable access to the telemetry collaborator.
    pub fn telemetry_mut(&mut self) -> &mut U { &mut self.telemetry }

    /// Mutable access to the display collaborator.
    pub fn display_mut(&mut self) -> &mut D { &mut self.display }

    /// Mutable access to the status collaborator.
    pub fn status_mut(&mut self) -> &mut Y { &mut self.status }

    /// Run one full tick at the given monotonic time.
    pub fn run_tick(&mut self, now_ms: u64) -> TickOutcome {
        let tick = self.tick_count;
        self.tick_count = self.tick_count.wrapping_add(1);

        // 1. Threshold sync on the slow cadence (including the first tick).
        if tick % THRESHOLD_SYNC_TICKS == 0 {
            self.sync_thresholds();
        }

        // 2. Acquire and validate
        let sample = match self.sensors.sample() {
            Ok(sample) => sample,
            Err(err) => {
                log::warn!("sensor acquisition failed: {err}; discarding tick");
                return TickOutcome::Discarded;
            }
        };
        let reading = Reading::new(
            sample.temperature,
            sample.humidity,
            soil_percent_from_raw(sample.soil_raw),
            sample.illuminance,
        );
        if !reading.is_valid() {
            log::warn!("invalid reading (air sensor NaN); discarding tick");
            return TickOutcome::Discarded;
        }

        // 3. Classify
        let state = classify(&reading, self.store.current());
        log::debug!(
            "tick {tick}: {} ({:.1}C {:.0}% soil {}% {:.0}lx)",
            state.label(),
            reading.temperature,
            reading.humidity,
            reading.moisture_percent,
            reading.illuminance,
        );

        // 4. Render
        let frame = compose_frame(
            state,
            self.status.link_up(),
            self.status.battery_percent(),
            self.store.current().species.as_str(),
        );
        if let Err(err) = self.display.present(&frame) {
            log::warn!("{err}; continuing without display");
        }

        // 5. Upload (log and drop on failure; no queueing, no retry)
        let record = TelemetryRecord::new(&reading, sample.soil_raw, now_ms);
        if let Err(err) = self.telemetry.upload(&record) {
            log::warn!("{err}; record dropped");
        }

        TickOutcome::Rendered(state)
    }

    fn sync_thresholds(&mut self) {
        match self.threshold_source.fetch() {
            Ok(update) => {
                if update.is_empty() {
                    log::debug!("threshold sync: document empty, keeping current values");
                } else {
                    self.store.apply_update(&update);
                    log::info!("thresholds updated for species: {}", self.store.current().species);
                }
            }
            Err(err) => {
                log::warn!("threshold sync failed: {err}; keeping last-known values");
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use gaia_common::thresholds::ThresholdUpdate;

    use super::*;
    use crate::collaborators::SensorSample;
    use crate::error::{DisplayError, SensorError, SyncError, UploadError};

    // -------------------------------------------------------------------------
    // In-memory collaborators
    // -------------------------------------------------------------------------

    struct StubSensors {
        sample: Result<SensorSample, SensorError>,
    }

    impl SensorSource for StubSensors {
        fn sample(&mut self) -> Result<SensorSample, SensorError> { self.sample }
    }

    struct StubSync {
        result: Result<ThresholdUpdate, SyncError>,
        calls: u32,
    }

    impl ThresholdSource for StubSync {
        fn fetch(&mut self) -> Result<ThresholdUpdate, SyncError> {
            self.calls += 1;
            self.result.clone()
        }
    }

    struct RecordingSink {
        uploads: u32,
        last: Option<TelemetryRecord>,
        fail: bool,
    }

    impl TelemetrySink for RecordingSink {
        fn upload(&mut self, record: &TelemetryRecord) -> Result<(), UploadError> {
            if self.fail {
                return Err(UploadError::Rejected);
            }
            self.uploads += 1;
            self.last = Some(*record);
            Ok(())
        }
    }

    struct RecordingDisplay {
        frames: u32,
        last_len: usize,
        fail: bool,
    }

    impl FrameSink for RecordingDisplay {
        fn present(&mut self, ops: &[gaia_common::render::RenderOp]) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError);
            }
            self.frames += 1;
            self.last_len = ops.len();
            Ok(())
        }
    }

    struct StubStatus;

    impl SystemStatus for StubStatus {
        fn link_up(&self) -> bool { true }
        fn battery_percent(&self) -> i32 { 85 }
    }

    /// A sample that classifies Happy under the default thresholds
    /// (soil raw 2350 maps to 50%).
    fn nominal_sample() -> SensorSample {
        SensorSample { temperature: 22.0, humidity: 55.0, soil_raw: 2_350, illuminance: 500.0 }
    }

    fn make_loop(
        sample: Result<SensorSample, SensorError>,
        sync: Result<ThresholdUpdate, SyncError>,
    ) -> ControlLoop<StubSensors, StubSync, RecordingSink, RecordingDisplay, StubStatus> {
        ControlLoop::new(
            StubSensors { sample },
            StubSync { result: sync, calls: 0 },
            RecordingSink { uploads: 0, last: None, fail: false },
            RecordingDisplay { frames: 0, last_len: 0, fail: false },
            StubStatus,
        )
    }

    // -------------------------------------------------------------------------
    // Tick behavior
    // -------------------------------------------------------------------------

    #[test]
    fn test_nominal_tick_renders_and_uploads() {
        let mut ctl = make_loop(Ok(nominal_sample()), Ok(ThresholdUpdate::default()));
        let outcome = ctl.run_tick(1_000);

        assert_eq!(outcome, TickOutcome::Rendered(PlantState::Happy));
        assert_eq!(ctl.display_mut().frames, 1, "frame should reach the display");
        assert!(ctl.display_mut().last_len > 0, "frame should contain ops");
        assert_eq!(ctl.telemetry_mut().uploads, 1, "record should be uploaded");

        let record = ctl.telemetry_mut().last.unwrap();
        assert_eq!(record.soil_moisture, 50);
        assert_eq!(record.soil_raw, 2_350);
        assert_eq!(record.timestamp, 1_000);
    }

    #[test]
    fn test_invalid_reading_discards_whole_tick() {
        let sample = SensorSample { temperature: f32::NAN, ..nominal_sample() };
        let mut ctl = make_loop(Ok(sample), Ok(ThresholdUpdate::default()));

        assert_eq!(ctl.run_tick(0), TickOutcome::Discarded);
        assert_eq!(ctl.display_mut().frames, 0, "discarded tick must not render");
        assert_eq!(ctl.telemetry_mut().uploads, 0, "discarded tick must not upload");
    }

    #[test]
    fn test_sensor_failure_discards_whole_tick() {
        let mut ctl = make_loop(Err(SensorError::AirSensor), Ok(ThresholdUpdate::default()));

        assert_eq!(ctl.run_tick(0), TickOutcome::Discarded);
        assert_eq!(ctl.display_mut().frames, 0);
        assert_eq!(ctl.telemetry_mut().uploads, 0);
    }

    #[test]
    fn test_upload_failure_does_not_stop_the_loop() {
        let mut ctl = make_loop(Ok(nominal_sample()), Ok(ThresholdUpdate::default()));
        ctl.telemetry_mut().fail = true;

        assert_eq!(ctl.run_tick(0), TickOutcome::Rendered(PlantState::Happy));
        assert_eq!(ctl.display_mut().frames, 1, "render proceeds despite upload failure");

        // Next tick simply attempts a fresh upload.
        ctl.telemetry_mut().fail = false;
        ctl.run_tick(1_000);
        assert_eq!(ctl.telemetry_mut().uploads, 1, "dropped records are not retried");
    }

    #[test]
    fn test_display_failure_does_not_stop_the_loop() {
        let mut ctl = make_loop(Ok(nominal_sample()), Ok(ThresholdUpdate::default()));
        ctl.display_mut().fail = true;

        assert_eq!(ctl.run_tick(0), TickOutcome::Rendered(PlantState::Happy));
        assert_eq!(ctl.telemetry_mut().uploads, 1, "upload proceeds despite display failure");
    }

    // -------------------------------------------------------------------------
    // Threshold sync
    // -------------------------------------------------------------------------

    #[test]
    fn test_sync_runs_on_first_tick_and_every_interval() {
        let mut ctl = make_loop(Ok(nominal_sample()), Ok(ThresholdUpdate::default()));
        for i in 0..=(2 * THRESHOLD_SYNC_TICKS) {
            ctl.run_tick(u64::from(i) * 1_000);
        }
        // Ticks 0, 30 and 60.
        assert_eq!(ctl.threshold_source_mut().calls, 3);
    }

    #[test]
    fn test_sync_applies_partial_update() {
        let update = ThresholdUpdate { moisture_low: Some(40), ..Default::default() };
        let mut ctl = make_loop(Ok(nominal_sample()), Ok(update));
        ctl.run_tick(0);

        assert_eq!(ctl.thresholds().moisture_low, 40);
        assert_eq!(ctl.thresholds().moisture_high, 85, "absent keys stay untouched");
    }

    #[test]
    fn test_sync_failure_keeps_last_known_values() {
        let update = ThresholdUpdate { moisture_low: Some(40), ..Default::default() };
        let mut ctl = make_loop(Ok(nominal_sample()), Ok(update));
        ctl.run_tick(0);
        assert_eq!(ctl.thresholds().moisture_low, 40);

        // The store goes unreachable; the next due sync must not reset
        // anything back to the defaults.
        ctl.threshold_source_mut().result = Err(SyncError::Unreachable);
        for i in 1..=THRESHOLD_SYNC_TICKS {
            ctl.run_tick(u64::from(i) * 1_000);
        }
        assert!(ctl.threshold_source_mut().calls >= 2, "a sync should have been attempted");
        assert_eq!(ctl.thresholds().moisture_low, 40, "failed sync must keep the snapshot");
    }

    #[test]
    fn test_updated_thresholds_change_classification() {
        // 50% soil is Happy under the defaults, Thirsty once the floor
        // is raised above it.
        let update = ThresholdUpdate { moisture_low: Some(60), ..Default::default() };
        let mut ctl = make_loop(Ok(nominal_sample()), Ok(update));

        assert_eq!(ctl.run_tick(0), TickOutcome::Rendered(PlantState::Thirsty));
    }
}
