//! Synthetic plant environment.
//!
//! Slow sine waves sweep each vital through its whole range so every mood
//! shows up within a couple of minutes of wall time; keyboard overrides in
//! `main` perturb the rest (link, battery, sensor faults).

use gaia_common::reading::{SOIL_RAW_DRY, SOIL_RAW_WET};

/// Sine sweep between `min` and `max` with angular frequency `freq`.
pub fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Mutable world state shared by the simulated collaborators.
pub struct Environment {
    /// Simulation time driving the signal generators.
    pub t: f32,
    /// Wireless link state (toggled with `L`).
    pub link_up: bool,
    /// Battery charge percent (adjusted with `B`/`V`).
    pub battery_percent: i32,
    /// When set, the air sensor reads NaN (toggled with `F`).
    pub sensor_fault: bool,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            t: 0.0,
            link_up: true,
            battery_percent: 85,
            sensor_fault: false,
        }
    }

    /// Advance simulation time by one tick.
    pub fn advance(&mut self) { self.t += 0.05; }

    /// Air temperature in C; sweeps through both cold and hot territory.
    pub fn temperature(&self) -> f32 {
        if self.sensor_fault {
            return f32::NAN;
        }
        fake_signal(self.t, 5.0, 38.0, 0.11)
    }

    /// Relative humidity in percent; sweeps dry-air to humid.
    pub fn humidity(&self) -> f32 {
        if self.sensor_fault {
            return f32::NAN;
        }
        fake_signal(self.t, 15.0, 95.0, 0.07)
    }

    /// Raw soil probe counts; sweeps past both calibration points.
    pub fn soil_raw(&self) -> i32 {
        fake_signal(self.t, SOIL_RAW_WET as f32 - 200.0, SOIL_RAW_DRY as f32 + 300.0, 0.05) as i32
    }

    /// Illuminance in lux; sweeps dark to glaring.
    pub fn illuminance(&self) -> f32 { fake_signal(self.t, 0.0, 3_000.0, 0.09) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_signal_stays_in_range() {
        let mut t = 0.0f32;
        while t < 1_000.0 {
            let v = fake_signal(t, 10.0, 20.0, 0.07);
            assert!((10.0..=20.0).contains(&v), "signal {v} escaped its range at t={t}");
            t += 0.37;
        }
    }

    #[test]
    fn test_signals_cover_all_classification_bands() {
        // Over a long sweep, each vital must cross both of its default
        // thresholds so all 9 faces are reachable in the simulator.
        let mut env = Environment::new();
        let (mut cold, mut hot, mut dry, mut humid) = (false, false, false, false);
        let (mut dark, mut bright, mut thirsty, mut soaked) = (false, false, false, false);
        for _ in 0..200_000 {
            env.advance();
            cold |= env.temperature() < 15.0;
            hot |= env.temperature() > 30.0;
            dry |= env.humidity() < 30.0;
            humid |= env.humidity() > 80.0;
            dark |= env.illuminance() < 100.0;
            bright |= env.illuminance() > 2_000.0;
            thirsty |= env.soil_raw() > SOIL_RAW_DRY - 100;
            soaked |= env.soil_raw() < SOIL_RAW_WET + 100;
        }
        assert!(cold && hot, "temperature sweep misses a band");
        assert!(dry && humid, "humidity sweep misses a band");
        assert!(dark && bright, "light sweep misses a band");
        assert!(thirsty && soaked, "soil sweep misses a band");
    }

    #[test]
    fn test_sensor_fault_yields_nan_air_values() {
        let mut env = Environment::new();
        env.sensor_fault = true;
        assert!(env.temperature().is_nan());
        assert!(env.humidity().is_nan());
        // Soil and light sensors are unaffected by an air sensor fault.
        assert!(env.illuminance().is_finite());
    }
}
