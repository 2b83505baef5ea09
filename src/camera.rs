//! Camera device state and its shared handle.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::frame::FrameBuffer;
use crate::scene::Scene;

struct CameraState {
    width: u32,
    height: u32,
    /// Sampling period while enabled.
    period: Option<Duration>,
    /// Simulated time of the next due sample. Recomputed on (re-)enable.
    next_sample: Option<Duration>,
    latest: Option<FrameBuffer>,
}

/// Handle to a camera owned by the simulated robot.
///
/// Cloning shares the underlying device; the runtime writes a fresh frame
/// into it on each due sample during [`Robot::step`](crate::robot::Robot::step).
#[derive(Clone)]
pub struct Camera {
    name: String,
    inner: Arc<Mutex<CameraState>>,
}

impl Camera {
    pub(crate) fn new(name: String, width: u32, height: u32) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(CameraState {
                width,
                height,
                period: None,
                next_sample: None,
                latest: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CameraState> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.lock().width
    }

    pub fn height(&self) -> u32 {
        self.lock().height
    }

    /// Start sampling with the given period in simulated time.
    ///
    /// The first frame becomes available once the clock reaches one period
    /// past the tick on which the camera was enabled.
    pub fn enable(&self, period: Duration) {
        let mut st = self.lock();
        st.period = Some(period);
        st.next_sample = None;
        log::debug!("camera \"{}\" enabled, period {:?}", self.name, period);
    }

    /// Stop sampling and drop the last frame.
    pub fn disable(&self) {
        let mut st = self.lock();
        st.period = None;
        st.next_sample = None;
        st.latest = None;
        log::debug!("camera \"{}\" disabled", self.name);
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().period.is_some()
    }

    pub fn sampling_period(&self) -> Option<Duration> {
        self.lock().period
    }

    /// Latest captured frame, as an owned copy.
    ///
    /// `None` until the first sample after enabling (warm-up) or while the
    /// camera is disabled.
    pub fn latest_frame(&self) -> Option<FrameBuffer> {
        self.lock().latest.clone()
    }

    /// Advance sampling from tick `prev` to tick `now`, rendering a frame if
    /// one is due. Called by the robot once per step.
    pub(crate) fn sample(&self, prev: Duration, now: Duration, scene: &Scene) {
        let mut st = self.lock();
        let Some(period) = st.period else { return };
        let due = match st.next_sample {
            Some(due) => due,
            None => {
                // Enabled between ticks: the first sample is one period
                // after the tick the control code ran on.
                let first = prev + period;
                st.next_sample = Some(first);
                first
            }
        };
        if now >= due {
            st.latest = Some(scene.render(st.width, st.height, now));
            let mut next = due + period;
            if next <= now {
                next = now + period;
            }
            st.next_sample = Some(next);
        }
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.lock();
        f.debug_struct("Camera")
            .field("name", &self.name)
            .field("width", &st.width)
            .field("height", &st.height)
            .field("enabled", &st.period.is_some())
            .finish()
    }
}
