//! Dump the registry roster slot by slot, padding included.

use simbot::{Robot, WorldConfig};

fn main() -> simbot::Result<()> {
    let robot = Robot::from_world(WorldConfig::default_world())?;

    println!("world \"{}\": {} slots", robot.name(), robot.device_count());
    for index in 0..robot.device_count() {
        match robot.device_by_index(index) {
            Some(device) => {
                println!("#{:02}  {:<30}  kind={}", index, device.name(), device.kind())
            }
            None => println!("#{:02}  {:<30}  (empty slot)", index, "-"),
        }
    }
    Ok(())
}
