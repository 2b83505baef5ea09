//! Deterministic synthetic scene the simulated camera looks at.
//!
//! The scene is a flat background with colored blocks translating across it,
//! parameterized only by simulated time: rendering the same instant twice
//! yields byte-identical frames.

use std::time::Duration;

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::frame::FrameBuffer;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Background color, R,G,B.
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default)]
    pub objects: Vec<SceneObjectConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            objects: Vec::new(),
        }
    }
}

fn default_background() -> [u8; 3] {
    [110, 110, 118]
}

/// One block on the conveyor: a colored square drifting left to right,
/// wrapping around once it leaves the frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObjectConfig {
    /// Block color, R,G,B.
    pub color: [u8; 3],
    /// Edge length in pixels.
    pub size: u32,
    /// Horizontal speed in pixels per simulated second.
    pub speed: f32,
    /// Vertical position as a fraction of the free height (0.0 top, 1.0 bottom).
    pub lane: f32,
}

pub struct Scene {
    config: SceneConfig,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    /// Rasterize the scene at `time` and emit it as a BGRA frame buffer.
    pub fn render(&self, width: u32, height: u32, time: Duration) -> FrameBuffer {
        let [r, g, b] = self.config.background;
        let mut img = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));

        let t = time.as_secs_f32();
        for obj in &self.config.objects {
            let size = obj.size.max(1);
            // Travel across width + size so the block enters and leaves
            // fully off-screen before wrapping.
            let span = (width + size) as f32;
            let x = (t * obj.speed) % span - size as f32;
            let free = height.saturating_sub(size) as f32;
            let y = (free * obj.lane.clamp(0.0, 1.0)).round();
            let [or, og, ob] = obj.color;
            draw_filled_rect_mut(
                &mut img,
                Rect::at(x.floor() as i32, y as i32).of_size(size, size),
                Rgba([or, og, ob, 255]),
            );
        }

        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for px in img.pixels() {
            data.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
        FrameBuffer::from_bgra(width, height, data)
    }
}
