//! Error handling for the simulated robot runtime and viewer

use std::fmt;

use crate::device::DeviceKind;

/// Result type for simbot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the simulated robot or the viewer
#[derive(Debug, Clone)]
pub enum Error {
    /// No device with the requested name exists in the registry
    DeviceNotFound {
        name: String,
        /// Names of all present devices, in index order
        discovered: Vec<String>,
    },
    /// A device with the requested name exists but has the wrong kind
    DeviceKindMismatch { name: String, kind: DeviceKind },
    /// A frame buffer or pixel grid had unexpected geometry
    FrameGeometry(String),
    /// The display sink failed
    Display(String),
    /// Invalid world description
    World(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DeviceNotFound { name, discovered } => {
                write!(f, "\"{}\" is not a device (present: {:?})", name, discovered)
            }
            Error::DeviceKindMismatch { name, kind } => {
                write!(f, "device \"{}\" is a {}, not a camera", name, kind)
            }
            Error::FrameGeometry(msg) => write!(f, "frame geometry error: {}", msg),
            Error::Display(msg) => write!(f, "display error: {}", msg),
            Error::World(msg) => write!(f, "invalid world: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<minifb::Error> for Error {
    fn from(err: minifb::Error) -> Self {
        Error::Display(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::World(err.to_string())
    }
}
