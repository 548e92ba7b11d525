//! Remotely-updatable classification boundaries.
//!
//! Thresholds start at built-in houseplant defaults and are replaced
//! field-by-field whenever the remote document supplies a key. The store
//! performs no range validation: an inverted Low/High pair simply yields a
//! branch that never (or always) triggers, and it is the companion app's
//! job to write sensible values.
//!
//! A failed or empty sync leaves the last-known values untouched; the
//! store never falls back to the defaults after startup.

use heapless::String;

/// Capacity of the species label buffer.
pub const SPECIES_CAPACITY: usize = 32;

/// Species label type (free text, may be empty).
pub type SpeciesLabel = String<SPECIES_CAPACITY>;

/// Sentinel species written by the app when the plant is not identified.
pub const SPECIES_UNKNOWN: &str = "Unknown";

// =============================================================================
// Built-in Defaults
// =============================================================================

/// Soil moisture percent below which the plant is thirsty.
pub const DEFAULT_MOISTURE_LOW: i32 = 30;

/// Soil moisture percent above which the plant is overwatered.
pub const DEFAULT_MOISTURE_HIGH: i32 = 85;

/// Air temperature (C) above which the plant is hot.
pub const DEFAULT_TEMP_HIGH: f32 = 30.0;

/// Air temperature (C) below which the plant is cold.
pub const DEFAULT_TEMP_LOW: f32 = 15.0;

/// Illuminance (lux) below which the plant is in the dark.
pub const DEFAULT_LUX_LOW: f32 = 100.0;

/// Illuminance (lux) above which the light is too bright.
pub const DEFAULT_LUX_HIGH: f32 = 2_000.0;

/// Relative humidity percent above which the air is too humid.
pub const DEFAULT_HUMIDITY_HIGH: f32 = 80.0;

/// Relative humidity percent below which the air is too dry.
pub const DEFAULT_HUMIDITY_LOW: f32 = 30.0;

// Defaults must describe non-degenerate ranges
const _: () = assert!(DEFAULT_MOISTURE_LOW < DEFAULT_MOISTURE_HIGH);
const _: () = assert!(DEFAULT_TEMP_LOW < DEFAULT_TEMP_HIGH);
const _: () = assert!(DEFAULT_LUX_LOW < DEFAULT_LUX_HIGH);
const _: () = assert!(DEFAULT_HUMIDITY_LOW < DEFAULT_HUMIDITY_HIGH);

// =============================================================================
// Threshold Snapshot
// =============================================================================

/// Current classification boundaries plus the species label.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantThresholds {
    /// Soil moisture floor (percent, strict `<` triggers Thirsty).
    pub moisture_low: i32,
    /// Soil moisture ceiling (percent, strict `>` triggers Overwatered).
    pub moisture_high: i32,
    /// Temperature ceiling (C).
    pub temp_high: f32,
    /// Temperature floor (C).
    pub temp_low: f32,
    /// Illuminance floor (lux).
    pub lux_low: f32,
    /// Illuminance ceiling (lux).
    pub lux_high: f32,
    /// Humidity ceiling (percent).
    pub humidity_high: f32,
    /// Humidity floor (percent).
    pub humidity_low: f32,
    /// Species label; empty or [`SPECIES_UNKNOWN`] when not identified.
    pub species: SpeciesLabel,
}

impl Default for PlantThresholds {
    fn default() -> Self {
        let mut species = SpeciesLabel::new();
        // Capacity is far above the sentinel length; push cannot fail.
        let _ = species.push_str(SPECIES_UNKNOWN);
        Self {
            moisture_low: DEFAULT_MOISTURE_LOW,
            moisture_high: DEFAULT_MOISTURE_HIGH,
            temp_high: DEFAULT_TEMP_HIGH,
            temp_low: DEFAULT_TEMP_LOW,
            lux_low: DEFAULT_LUX_LOW,
            lux_high: DEFAULT_LUX_HIGH,
            humidity_high: DEFAULT_HUMIDITY_HIGH,
            humidity_low: DEFAULT_HUMIDITY_LOW,
            species,
        }
    }
}

// =============================================================================
// Partial Update Document
// =============================================================================

/// Partial threshold update, mirroring the remote document.
///
/// Any subset of keys may be present; absent keys leave the stored value
/// untouched. Field names match the JSON keys written by the companion app.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThresholdUpdate {
    pub moisture_low: Option<i32>,
    pub moisture_high: Option<i32>,
    pub temp_high: Option<f32>,
    pub temp_low: Option<f32>,
    pub lux_low: Option<f32>,
    pub lux_high: Option<f32>,
    pub humidity_high: Option<f32>,
    pub humidity_low: Option<f32>,
    pub species: Option<SpeciesLabel>,
}

impl ThresholdUpdate {
    /// True when no key is present (a successful fetch of an empty node).
    pub fn is_empty(&self) -> bool { *self == Self::default() }
}

// =============================================================================
// Store
// =============================================================================

/// Holds the current thresholds for the control loop.
///
/// Owned by the loop and passed by reference into classification; there is
/// no ambient/static state. Reads hand out snapshots, so a multi-threaded
/// host can wrap the store in its mutex of choice without tearing.
#[derive(Clone, Debug, Default)]
pub struct ThresholdStore {
    thresholds: PlantThresholds,
}

impl ThresholdStore {
    /// Create a store holding the built-in defaults.
    pub fn new() -> Self { Self::default() }

    /// Read-only snapshot of the current thresholds.
    pub fn current(&self) -> &PlantThresholds { &self.thresholds }

    /// Apply a partial update, replacing only the fields present.
    pub fn apply_update(&mut self, update: &ThresholdUpdate) {
        let t = &mut self.thresholds;
        if let Some(v) = update.moisture_low {
            t.moisture_low = v;
        }
        if let Some(v) = update.moisture_high {
            t.moisture_high = v;
        }
        if let Some(v) = update.temp_high {
            t.temp_high = v;
        }
        if let Some(v) = update.temp_low {
            t.temp_low = v;
        }
        if let Some(v) = update.lux_low {
            t.lux_low = v;
        }
        if let Some(v) = update.lux_high {
            t.lux_high = v;
        }
        if let Some(v) = update.humidity_high {
            t.humidity_high = v;
        }
        if let Some(v) = update.humidity_low {
            t.humidity_low = v;
        }
        if let Some(ref v) = update.species {
            t.species = v.clone();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
