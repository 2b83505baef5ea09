//! Render the synthetic conveyor scene directly, without the robot loop.
//! Handy for eyeballing scene parameters before wiring them into a world.

use std::time::Duration;

use simbot::scene::Scene;
use simbot::viewer::{DisplaySink, MinifbSink};
use simbot::world::WorldConfig;

fn main() -> simbot::Result<()> {
    env_logger::init();

    let world = WorldConfig::default_world();
    let scene = Scene::new(world.scene);

    let mut sink = MinifbSink::new("scene preview");
    let mut t = Duration::ZERO;
    loop {
        let grid = scene.render(320, 240, t).into_pixel_grid()?;
        sink.present(&grid)?;
        if sink.quit_requested() {
            break;
        }
        t += Duration::from_millis(32);
        std::thread::sleep(Duration::from_millis(16));
    }
    Ok(())
}
