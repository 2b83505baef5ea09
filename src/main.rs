//! Diagnostic camera viewer: list the robot's devices, find the wrist
//! camera, and stream it to a window until Escape or simulation end.

use std::process;
use std::time::Duration;

use simbot::{MinifbSink, PumpExit, Robot, WorldConfig, pump};

const CAMERA_NAME: &str = "camera";
const TIME_STEP: Duration = Duration::from_millis(32);

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        println!("error: {}", err);
        process::exit(1);
    }
}

fn run() -> simbot::Result<()> {
    let mut robot = Robot::from_world(WorldConfig::default_world())?;

    let names = robot.device_names();
    println!("devices: {:?}", names);

    let camera = match robot.resolve_camera(CAMERA_NAME) {
        Ok(camera) => camera,
        Err(err) => {
            // A missing camera is a world-configuration problem, so there is
            // nothing to retry; explain the usual cause and bail.
            println!("{}", err);
            println!(
                "double-check that the camera node is nested inside the robot tree \
                 (under the gripper link, not as a top-level world node) and that \
                 the world was saved after the change."
            );
            process::exit(1);
        }
    };

    println!("camera online @ {}x{}", camera.width(), camera.height());

    let mut sink = MinifbSink::new(CAMERA_NAME);
    match pump::run(&mut robot, &camera, &mut sink, TIME_STEP)? {
        PumpExit::Quit => log::info!("viewer closed by user"),
        PumpExit::SimulationEnded => log::info!("simulation ended"),
    }
    Ok(())
}
