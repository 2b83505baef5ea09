//! Declarative world description the robot is built from.
//!
//! A world lists the device registry slot by slot, in index order. A slot is
//! either a device spec or `null`; absent slots stay as padding in the
//! registry, exactly as the runtime exposes them. JSON form:
//!
//! ```json
//! {
//!   "name": "bench",
//!   "duration_ms": 4000,
//!   "devices": [
//!     { "name": "elbow_joint", "kind": "motor" },
//!     null,
//!     { "name": "camera", "kind": "camera", "width": 320, "height": 240 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;
use crate::error::Result;
use crate::scene::{SceneConfig, SceneObjectConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub name: String,
    /// Simulated-time limit in milliseconds; `None` runs forever.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// Registry slots in index order; `None` is a padding slot.
    pub devices: Vec<Option<DeviceSpec>>,
    #[serde(default)]
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub name: String,
    pub kind: DeviceKind,
    /// Camera geometry; required for camera devices, ignored otherwise.
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl DeviceSpec {
    fn plain(name: &str, kind: DeviceKind) -> Option<Self> {
        Some(Self {
            name: name.to_string(),
            kind,
            width: None,
            height: None,
        })
    }

    fn camera(name: &str, width: u32, height: u32) -> Option<Self> {
        Some(Self {
            name: name.to_string(),
            kind: DeviceKind::Camera,
            width: Some(width),
            height: Some(height),
        })
    }
}

impl WorldConfig {
    /// Parse a world description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in world: a three-finger gripper arm over a conveyor of
    /// colored blocks, with a wrist camera.
    pub fn default_world() -> Self {
        use DeviceKind::*;

        let devices = vec![
            DeviceSpec::plain("finger_1_joint_1", Motor),
            DeviceSpec::plain("finger_1_joint_1_sensor", PositionSensor),
            DeviceSpec::plain("finger_2_joint_1", Motor),
            DeviceSpec::plain("finger_2_joint_1_sensor", PositionSensor),
            DeviceSpec::plain("finger_middle_joint_1", Motor),
            DeviceSpec::plain("finger_middle_joint_1_sensor", PositionSensor),
            // Linked joints of the gripper occupy registry slots without
            // being addressable devices.
            None,
            None,
            DeviceSpec::plain("shoulder_lift_joint", Motor),
            DeviceSpec::plain("shoulder_lift_joint_sensor", PositionSensor),
            DeviceSpec::plain("elbow_joint", Motor),
            DeviceSpec::plain("elbow_joint_sensor", PositionSensor),
            DeviceSpec::plain("wrist_1_joint", Motor),
            DeviceSpec::plain("wrist_1_joint_sensor", PositionSensor),
            DeviceSpec::plain("wrist_2_joint", Motor),
            DeviceSpec::plain("wrist_2_joint_sensor", PositionSensor),
            DeviceSpec::plain("distance sensor", DistanceSensor),
            DeviceSpec::camera("camera", 320, 240),
        ];

        Self {
            name: "colorsort".to_string(),
            duration_ms: None,
            devices,
            scene: SceneConfig {
                background: [110, 110, 118],
                objects: vec![
                    SceneObjectConfig {
                        color: [204, 36, 36],
                        size: 26,
                        speed: 55.0,
                        lane: 0.35,
                    },
                    SceneObjectConfig {
                        color: [38, 166, 65],
                        size: 30,
                        speed: 74.0,
                        lane: 0.55,
                    },
                    SceneObjectConfig {
                        color: [47, 82, 210],
                        size: 22,
                        speed: 96.0,
                        lane: 0.75,
                    },
                ],
            },
        }
    }
}
