//! The 9 plant mood states and the classifier.
//!
//! Classification is a fixed priority chain: soil conditions outrank
//! temperature, temperature outranks humidity, humidity outranks light.
//! Water stress is the most urgent thing a houseplant experiences, so the
//! first matching branch wins and the rest are skipped.
//!
//! Every comparison is strict; a value sitting exactly on a boundary
//! counts as in range and falls through to the next check.

use crate::reading::Reading;
use crate::thresholds::PlantThresholds;

/// Discrete plant well-being state, one per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlantState {
    /// All vitals within range.
    Happy,
    /// Soil moisture below the low boundary.
    Thirsty,
    /// Soil moisture above the high boundary.
    Overwatered,
    /// Air temperature above the high boundary.
    Hot,
    /// Air temperature below the low boundary.
    Cold,
    /// Illuminance below the low boundary.
    Dark,
    /// Illuminance above the high boundary.
    Bright,
    /// Humidity above the high boundary.
    Humid,
    /// Humidity below the low boundary.
    DryAir,
}

impl PlantState {
    /// All states, in classification priority order (Happy last).
    pub const ALL: [Self; 9] = [
        Self::Thirsty,
        Self::Overwatered,
        Self::Hot,
        Self::Cold,
        Self::Humid,
        Self::DryAir,
        Self::Dark,
        Self::Bright,
        Self::Happy,
    ];

    /// Short human-readable label (diagnostics, log lines).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Thirsty => "thirsty",
            Self::Overwatered => "overwatered",
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Dark => "dark",
            Self::Bright => "bright",
            Self::Humid => "humid",
            Self::DryAir => "dry-air",
        }
    }
}

/// Classify one reading against the current thresholds.
///
/// Pure, total, and side-effect-free: for every `(reading, thresholds)`
/// pair exactly one state comes back, and the same pair always yields the
/// same state. Callers must filter invalid readings first; a NaN
/// temperature or humidity simply never triggers its branches here.
pub fn classify(reading: &Reading, thresholds: &PlantThresholds) -> PlantState {
    // 1. Soil moisture - most urgent
    if reading.moisture_percent < thresholds.moisture_low {
        PlantState::Thirsty
    } else if reading.moisture_percent > thresholds.moisture_high {
        PlantState::Overwatered
    }
    // 2. Temperature
    else if reading.temperature > thresholds.temp_high {
        PlantState::Hot
    } else if reading.temperature < thresholds.temp_low {
        PlantState::Cold
    }
    // 3. Humidity
    else if reading.humidity > thresholds.humidity_high {
        PlantState::Humid
    } else if reading.humidity < thresholds.humidity_low {
        PlantState::DryAir
    }
    // 4. Light - least urgent
    else if reading.illuminance < thresholds.lux_low {
        PlantState::Dark
    } else if reading.illuminance > thresholds.lux_high {
        PlantState::Bright
    } else {
        PlantState::Happy
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
