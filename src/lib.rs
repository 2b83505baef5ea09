pub mod camera;
pub mod device;
pub mod error;
pub mod frame;
pub mod pump;
pub mod robot;
pub mod scene;
pub mod viewer;
pub mod world;

// Re-export main types for convenience
pub use crate::camera::Camera;
pub use crate::device::{DeviceHandle, DeviceKind};
pub use crate::error::{Error, Result};
pub use crate::frame::{FrameBuffer, PixelGrid};
pub use crate::pump::PumpExit;
pub use crate::robot::{Robot, StepStatus};
pub use crate::viewer::{DisplaySink, MinifbSink};
pub use crate::world::{DeviceSpec, WorldConfig};
