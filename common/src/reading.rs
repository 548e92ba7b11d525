//! One validated sensor snapshot per telemetry tick.
//!
//! A [`Reading`] is built once from the raw values the collaborators hand
//! over, normalized on construction, and never mutated afterwards. The
//! classifier requires a valid reading; ticks with an invalid one are
//! discarded upstream.

// =============================================================================
// Soil Calibration Window
// =============================================================================

/// Raw capacitive soil reading in open air (fully dry).
pub const SOIL_RAW_DRY: i32 = 3_500;

/// Raw capacitive soil reading submerged in water (fully wet).
pub const SOIL_RAW_WET: i32 = 1_200;

/// Map a raw soil count through the dry/wet window to 0-100 percent.
///
/// The sensor reads *lower* when wetter, so the window is inverted.
/// Output is clamped; readings outside the calibration window saturate.
pub fn soil_percent_from_raw(raw: i32) -> i32 {
    let span = SOIL_RAW_WET - SOIL_RAW_DRY;
    let pct = (raw - SOIL_RAW_DRY) * 100 / span;
    pct.clamp(0, 100)
}

// =============================================================================
// Reading
// =============================================================================

/// One validated snapshot of the plant's environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Air temperature in C. NaN when the air sensor failed.
    pub temperature: f32,
    /// Relative humidity in percent. NaN when the air sensor failed.
    pub humidity: f32,
    /// Normalized soil moisture, clamped to 0-100.
    pub moisture_percent: i32,
    /// Illuminance in lux; unknown/negative sensor output maps to 0.
    pub illuminance: f32,
}

impl Reading {
    /// Build a snapshot from acquired values, normalizing on the way in.
    pub fn new(temperature: f32, humidity: f32, moisture_percent: i32, illuminance: f32) -> Self {
        Self {
            temperature,
            humidity,
            moisture_percent: moisture_percent.clamp(0, 100),
            illuminance: if illuminance.is_finite() && illuminance >= 0.0 {
                illuminance
            } else {
                0.0
            },
        }
    }

    /// True when every value is numerically usable.
    ///
    /// The air sensor reports NaN on a failed read; such ticks are dropped
    /// whole (no classification, no render, no upload).
    pub fn is_valid(&self) -> bool {
        self.temperature.is_finite() && self.humidity.is_finite()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_percent_endpoints() {
        assert_eq!(soil_percent_from_raw(SOIL_RAW_DRY), 0, "dry calibration point is 0%");
        assert_eq!(soil_percent_from_raw(SOIL_RAW_WET), 100, "wet calibration point is 100%");
    }

    #[test]
    fn test_soil_percent_saturates_outside_window() {
        assert_eq!(soil_percent_from_raw(4_095), 0, "drier than calibrated air stays 0%");
        assert_eq!(soil_percent_from_raw(0), 100, "wetter than calibrated water stays 100%");
    }

    #[test]
    fn test_soil_percent_midpoint() {
        let mid = (SOIL_RAW_DRY + SOIL_RAW_WET) / 2;
        assert_eq!(soil_percent_from_raw(mid), 50);
    }

    #[test]
    fn test_moisture_clamped_on_construction() {
        assert_eq!(Reading::new(20.0, 50.0, 150, 500.0).moisture_percent, 100);
        assert_eq!(Reading::new(20.0, 50.0, -3, 500.0).moisture_percent, 0);
    }

    #[test]
    fn test_negative_lux_maps_to_zero() {
        // BH1750 reports a negative level on a failed conversion.
        assert_eq!(Reading::new(20.0, 50.0, 40, -1.0).illuminance, 0.0);
        assert_eq!(Reading::new(20.0, 50.0, 40, f32::NAN).illuminance, 0.0);
    }

    #[test]
    fn test_validity_tracks_air_sensor() {
        assert!(Reading::new(21.5, 55.0, 40, 300.0).is_valid());
        assert!(!Reading::new(f32::NAN, 55.0, 40, 300.0).is_valid());
        assert!(!Reading::new(21.5, f32::NAN, 40, 300.0).is_valid());
    }
}
