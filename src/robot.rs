//! The simulated robot: an indexed device registry plus the simulation clock.

use std::collections::HashSet;
use std::time::Duration;

use crate::camera::Camera;
use crate::device::{DeviceHandle, DeviceKind};
use crate::error::{Error, Result};
use crate::scene::Scene;
use crate::world::WorldConfig;

/// Outcome of one clock advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Running,
    /// The world's simulated-time limit has been reached.
    Ended,
}

/// The simulation runtime. Owns every device; hands out cloneable handles.
pub struct Robot {
    name: String,
    /// Registry slots in index order; `None` slots are padding.
    slots: Vec<Option<DeviceHandle>>,
    scene: Scene,
    time: Duration,
    limit: Option<Duration>,
}

impl Robot {
    /// Build the registry from a world description.
    pub fn from_world(world: WorldConfig) -> Result<Self> {
        let mut slots = Vec::with_capacity(world.devices.len());
        let mut seen: HashSet<String> = HashSet::new();
        for (index, spec) in world.devices.into_iter().enumerate() {
            let Some(spec) = spec else {
                slots.push(None);
                continue;
            };
            if !seen.insert(spec.name.clone()) {
                return Err(Error::World(format!(
                    "duplicate device name \"{}\"",
                    spec.name
                )));
            }
            let camera = match spec.kind {
                DeviceKind::Camera => {
                    let (Some(width), Some(height)) = (spec.width, spec.height) else {
                        return Err(Error::World(format!(
                            "camera \"{}\" needs width and height",
                            spec.name
                        )));
                    };
                    if width == 0 || height == 0 {
                        return Err(Error::World(format!(
                            "camera \"{}\" has degenerate geometry {}x{}",
                            spec.name, width, height
                        )));
                    }
                    Some(Camera::new(spec.name.clone(), width, height))
                }
                _ => None,
            };
            slots.push(Some(DeviceHandle::new(spec.name, index, spec.kind, camera)));
        }
        log::info!(
            "world \"{}\": {} registry slots",
            world.name,
            slots.len()
        );
        Ok(Self {
            name: world.name,
            slots,
            scene: Scene::new(world.scene),
            time: Duration::ZERO,
            limit: world.duration_ms.map(Duration::from_millis),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current simulated time.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Number of registry slots, padding included.
    pub fn device_count(&self) -> usize {
        self.slots.len()
    }

    /// Device at a registry slot; `None` for padding slots and out-of-range
    /// indices.
    pub fn device_by_index(&self, index: usize) -> Option<&DeviceHandle> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn device_by_name(&self, name: &str) -> Option<&DeviceHandle> {
        self.slots.iter().flatten().find(|d| d.name() == name)
    }

    /// Names of all present devices, in index order, skipping padding slots.
    pub fn device_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for index in 0..self.device_count() {
            if let Some(device) = self.device_by_index(index) {
                names.push(device.name().to_string());
            }
        }
        names
    }

    /// Look up a camera by name.
    ///
    /// Failure here is a world-configuration problem, not a runtime one; the
    /// error carries the full discovered name list for diagnostics.
    pub fn resolve_camera(&self, name: &str) -> Result<Camera> {
        let Some(device) = self.device_by_name(name) else {
            return Err(Error::DeviceNotFound {
                name: name.to_string(),
                discovered: self.device_names(),
            });
        };
        device.as_camera().ok_or_else(|| Error::DeviceKindMismatch {
            name: name.to_string(),
            kind: device.kind(),
        })
    }

    /// Advance simulated time by one interval and service enabled sensors.
    ///
    /// Frames rendered during this call belong to the tick it completes, so a
    /// caller reading a camera right after `step` sees that tick's buffer,
    /// never a later one.
    pub fn step(&mut self, interval: Duration) -> StepStatus {
        let prev = self.time;
        self.time += interval;
        if let Some(limit) = self.limit {
            if self.time > limit {
                log::debug!("simulated-time limit reached at {:?}", self.time);
                return StepStatus::Ended;
            }
        }
        for device in self.slots.iter().flatten() {
            if let Some(camera) = device.as_camera() {
                camera.sample(prev, self.time, &self.scene);
            }
        }
        StepStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneConfig, SceneObjectConfig};
    use crate::world::DeviceSpec;

    const STEP: Duration = Duration::from_millis(32);

    fn spec(name: &str, kind: DeviceKind) -> Option<DeviceSpec> {
        Some(DeviceSpec {
            name: name.to_string(),
            kind,
            width: None,
            height: None,
        })
    }

    fn camera_spec(name: &str) -> Option<DeviceSpec> {
        Some(DeviceSpec {
            name: name.to_string(),
            kind: DeviceKind::Camera,
            width: Some(24),
            height: Some(16),
        })
    }

    fn gappy_world() -> WorldConfig {
        WorldConfig {
            name: "bench".to_string(),
            duration_ms: None,
            devices: vec![
                spec("elbow_joint", DeviceKind::Motor),
                None,
                camera_spec("camera"),
                None,
                spec("distance sensor", DeviceKind::DistanceSensor),
            ],
            scene: SceneConfig {
                background: [10, 20, 30],
                objects: vec![SceneObjectConfig {
                    color: [200, 30, 30],
                    size: 6,
                    speed: 90.0,
                    lane: 0.5,
                }],
            },
        }
    }

    #[test]
    fn test_enumeration_skips_padding_in_index_order() {
        let robot = Robot::from_world(gappy_world()).unwrap();
        assert_eq!(robot.device_count(), 5);
        assert!(robot.device_by_index(1).is_none());
        assert!(robot.device_by_index(3).is_none());
        assert!(robot.device_by_index(99).is_none());
        assert_eq!(
            robot.device_names(),
            vec!["elbow_joint", "camera", "distance sensor"]
        );
    }

    #[test]
    fn test_lookup_by_name_ignores_slot_position() {
        let robot = Robot::from_world(gappy_world()).unwrap();
        let device = robot.device_by_name("camera").unwrap();
        assert_eq!(device.index(), 2);
        assert_eq!(device.kind(), DeviceKind::Camera);
        // Same world with the camera first resolves identically.
        let mut world = gappy_world();
        world.devices.rotate_right(2);
        let robot = Robot::from_world(world).unwrap();
        let device = robot.device_by_name("camera").unwrap();
        assert_eq!(device.index(), 4);
        assert!(robot.resolve_camera("camera").is_ok());
    }

    #[test]
    fn test_missing_camera_reports_discovered_names() {
        let mut world = gappy_world();
        world.devices[2] = None;
        let robot = Robot::from_world(world).unwrap();
        match robot.resolve_camera("camera") {
            Err(Error::DeviceNotFound { name, discovered }) => {
                assert_eq!(name, "camera");
                assert_eq!(discovered, vec!["elbow_joint", "distance sensor"]);
            }
            other => panic!("expected DeviceNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_registry_resolution_fails_with_empty_list() {
        let world = WorldConfig {
            name: "empty".to_string(),
            duration_ms: None,
            devices: Vec::new(),
            scene: SceneConfig::default(),
        };
        let robot = Robot::from_world(world).unwrap();
        match robot.resolve_camera("camera") {
            Err(Error::DeviceNotFound { discovered, .. }) => assert!(discovered.is_empty()),
            other => panic!("expected DeviceNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_non_camera_device_is_a_kind_mismatch() {
        let robot = Robot::from_world(gappy_world()).unwrap();
        match robot.resolve_camera("elbow_joint") {
            Err(Error::DeviceKindMismatch { kind, .. }) => {
                assert_eq!(kind, DeviceKind::Motor);
            }
            other => panic!("expected DeviceKindMismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_duplicate_device_names_are_rejected() {
        let mut world = gappy_world();
        world.devices[1] = spec("elbow_joint", DeviceKind::PositionSensor);
        assert!(matches!(
            Robot::from_world(world),
            Err(Error::World(_))
        ));
    }

    #[test]
    fn test_camera_without_geometry_is_rejected() {
        let mut world = gappy_world();
        world.devices[2] = Some(DeviceSpec {
            name: "camera".to_string(),
            kind: DeviceKind::Camera,
            width: Some(24),
            height: None,
        });
        assert!(matches!(Robot::from_world(world), Err(Error::World(_))));
    }

    #[test]
    fn test_step_hits_time_limit() {
        let mut world = gappy_world();
        world.duration_ms = Some(96);
        let mut robot = Robot::from_world(world).unwrap();
        assert_eq!(robot.step(STEP), StepStatus::Running);
        assert_eq!(robot.step(STEP), StepStatus::Running);
        assert_eq!(robot.step(STEP), StepStatus::Running);
        assert_eq!(robot.step(STEP), StepStatus::Ended);
    }

    #[test]
    fn test_sampled_ticks_are_lock_step_with_the_clock() {
        let mut robot = Robot::from_world(gappy_world()).unwrap();
        let camera = robot.resolve_camera("camera").unwrap();
        camera.enable(STEP);

        assert!(camera.latest_frame().is_none());
        robot.step(STEP);
        let first = camera.latest_frame().unwrap();
        robot.step(STEP);
        robot.step(STEP);
        let later = camera.latest_frame().unwrap();
        // The scene moved between samples, so the buffers differ.
        assert_ne!(first, later);
    }
}
