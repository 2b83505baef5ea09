//! The frame pump: step the simulation, fetch, reinterpret, present, poll.

use std::time::Duration;

use crate::camera::Camera;
use crate::error::Result;
use crate::robot::{Robot, StepStatus};
use crate::viewer::DisplaySink;

/// Terminal state of the pump loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpExit {
    /// The user asked to quit.
    Quit,
    /// The simulation reached its end.
    SimulationEnded,
}

/// Enable `camera` at `interval` and stream its frames into `sink` until the
/// user quits or the simulation ends.
///
/// Each iteration performs exactly one simulation step and at most one
/// present, so frame N on screen is tick N's buffer. A tick with no frame
/// yet (camera warm-up) is skipped silently. The quit poll runs after the
/// present, never before.
pub fn run<S: DisplaySink>(
    robot: &mut Robot,
    camera: &Camera,
    sink: &mut S,
    interval: Duration,
) -> Result<PumpExit> {
    camera.enable(interval);
    let mut presented = 0u64;
    loop {
        if robot.step(interval) == StepStatus::Ended {
            log::debug!("simulation ended after {} frames", presented);
            return Ok(PumpExit::SimulationEnded);
        }
        let Some(buffer) = camera.latest_frame() else {
            continue;
        };
        let grid = buffer.into_pixel_grid()?;
        sink.present(&grid)?;
        presented += 1;
        if sink.quit_requested() {
            log::debug!("quit requested after {} frames", presented);
            return Ok(PumpExit::Quit);
        }
    }
}
