//! Platform-agnostic core for the Gaia plant companion.
//!
//! This crate contains everything the device decides and draws, with no I/O:
//!
//! - [`config`]: Canvas layout and cadence constants
//! - [`thresholds`]: Remotely-updatable classification boundaries
//! - [`reading`]: One validated sensor snapshot per tick
//! - [`state`]: The 9 plant mood states and the classifier
//! - [`render`]: Drawing primitives and op buffers
//! - [`faces`]: Constant face programs, one per state
//! - [`statusbar`]: Top-strip composition (link, species, battery)
//! - [`cycle`]: Per-refresh frame composition
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and allocation-free; op lists live in
//! `heapless::Vec` buffers sized for the largest composition. It can be
//! used unchanged on embedded targets and on the desktop simulator.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod cycle;
pub mod faces;
pub mod reading;
pub mod render;
pub mod state;
pub mod statusbar;
pub mod thresholds;

// Re-export commonly used items
pub use cycle::compose_frame;
pub use reading::Reading;
pub use render::{FrameOps, RenderOp};
pub use state::{classify, PlantState};
pub use thresholds::{PlantThresholds, ThresholdStore, ThresholdUpdate};
