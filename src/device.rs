//! Device handles for the simulated robot registry

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// Kind of a simulated peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Camera,
    Motor,
    PositionSensor,
    DistanceSensor,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceKind::Camera => "camera",
            DeviceKind::Motor => "motor",
            DeviceKind::PositionSensor => "position sensor",
            DeviceKind::DistanceSensor => "distance sensor",
        };
        write!(f, "{}", s)
    }
}

/// Reference to one peripheral of the simulated robot.
///
/// The backing state is owned by the [`Robot`](crate::robot::Robot); handles
/// are cheap to clone and stay valid for the robot's lifetime.
#[derive(Debug, Clone)]
pub struct DeviceHandle {
    name: String,
    index: usize,
    kind: DeviceKind,
    camera: Option<Camera>,
}

impl DeviceHandle {
    pub(crate) fn new(name: String, index: usize, kind: DeviceKind, camera: Option<Camera>) -> Self {
        Self {
            name,
            index,
            kind,
            camera,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry slot this device occupies.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Cast this handle to its camera capability, if it has one.
    pub fn as_camera(&self) -> Option<Camera> {
        self.camera.clone()
    }
}

impl fmt::Display for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02}  {}  ({})", self.index, self.name, self.kind)
    }
}
