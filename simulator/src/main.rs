//! Desktop simulator for the Gaia plant companion.
//!
//! Runs the real control loop against synthetic collaborators and shows
//! the 128x64 panel in an OLED-styled window (scaled 4x). Ticks run at an
//! accelerated cadence so the mood sweep is watchable.
//!
//! # Controls
//!
//! - **L**: Toggle the wireless link (sync + upload start failing)
//! - **F**: Toggle an air sensor fault (ticks get discarded)
//! - **B** / **V**: Battery up / down by 10%
//! - **S**: Advance to the next remote threshold document
//! - **Esc** / close: Quit

mod collaborators;
mod environment;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use gaia_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_PERIOD_MS};
use gaia_controller::ControlLoop;

use crate::collaborators::{
    SharedDisplay, SharedEnv, SimFrameSink, SimSensors, SimStatus, SimTelemetry, SimThresholds,
    THRESHOLD_DOCS,
};
use crate::environment::Environment;

/// Accelerated tick period (10x the device's 1 s cadence).
const SIM_TICK: Duration = Duration::from_millis(TICK_PERIOD_MS / 10);

fn main() {
    env_logger::init();

    let display: SharedDisplay = Rc::new(RefCell::new(SimulatorDisplay::new(Size::new(
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
    ))));
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(4)
        .build();
    let mut window = Window::new("Gaia Plant Companion", &output_settings);

    let env: SharedEnv = Rc::new(RefCell::new(Environment::new()));
    let doc_index = Rc::new(Cell::new(0usize));

    let mut ctl = ControlLoop::new(
        SimSensors { env: env.clone() },
        SimThresholds { env: env.clone(), doc_index: doc_index.clone() },
        SimTelemetry { env: env.clone(), uploaded: 0 },
        SimFrameSink { display: display.clone() },
        SimStatus { env: env.clone() },
    );

    display.borrow_mut().clear(BinaryColor::Off).ok();
    window.update(&display.borrow());

    let started = Instant::now();
    'running: loop {
        let tick_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => break 'running,
                        Keycode::L => {
                            let mut env = env.borrow_mut();
                            env.link_up = !env.link_up;
                            log::info!("link {}", if env.link_up { "up" } else { "down" });
                        }
                        Keycode::F => {
                            let mut env = env.borrow_mut();
                            env.sensor_fault = !env.sensor_fault;
                            log::info!(
                                "air sensor {}",
                                if env.sensor_fault { "faulted" } else { "restored" }
                            );
                        }
                        Keycode::B => {
                            let mut env = env.borrow_mut();
                            env.battery_percent = (env.battery_percent + 10).min(100);
                            log::info!("battery {}%", env.battery_percent);
                        }
                        Keycode::V => {
                            let mut env = env.borrow_mut();
                            env.battery_percent = (env.battery_percent - 10).max(0);
                            log::info!("battery {}%", env.battery_percent);
                        }
                        Keycode::S => {
                            doc_index.set(doc_index.get() + 1);
                            log::info!(
                                "next threshold document queued ({} of {})",
                                doc_index.get() % THRESHOLD_DOCS.len() + 1,
                                THRESHOLD_DOCS.len()
                            );
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        env.borrow_mut().advance();
        let now_ms = started.elapsed().as_millis() as u64;
        ctl.run_tick(now_ms);

        window.update(&display.borrow());

        let elapsed = tick_start.elapsed();
        if elapsed < SIM_TICK {
            thread::sleep(SIM_TICK - elapsed);
        }
    }
}
