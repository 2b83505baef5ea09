//! Display sink: the trait seam and the minifb window behind it.

use minifb::{Key, Window, WindowOptions};

use crate::error::{Error, Result};
use crate::frame::PixelGrid;

/// Where pixel grids go to be seen.
///
/// The frame pump renders through this seam; tests substitute a recording
/// implementation.
pub trait DisplaySink {
    /// Render a grid immediately.
    fn present(&mut self, grid: &PixelGrid) -> Result<()>;

    /// Minimal-wait poll for a user quit request.
    fn quit_requested(&mut self) -> bool;
}

/// A named window sized to the first grid it is shown.
///
/// The window opens lazily on the first [`present`](DisplaySink::present)
/// and is torn down when the sink drops, whichever way the loop exits.
pub struct MinifbSink {
    title: String,
    window: Option<Window>,
    size: Option<(u32, u32)>,
}

impl MinifbSink {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window: None,
            size: None,
        }
    }

    /// Tear the window down early. Dropping the sink does the same.
    pub fn close(&mut self) {
        if self.window.take().is_some() {
            log::debug!("window \"{}\" closed", self.title);
        }
    }
}

impl DisplaySink for MinifbSink {
    fn present(&mut self, grid: &PixelGrid) -> Result<()> {
        let (w, h) = (grid.width(), grid.height());
        if let Some((ww, wh)) = self.size {
            // The camera's geometry is fixed at enable time; a differently
            // sized grid is unsupported input, not a resize request.
            if (w, h) != (ww, wh) {
                return Err(Error::FrameGeometry(format!(
                    "window \"{}\" is {}x{}, grid is {}x{}",
                    self.title, ww, wh, w, h
                )));
            }
        }
        let window = match &mut self.window {
            Some(window) => window,
            None => {
                let created =
                    Window::new(&self.title, w as usize, h as usize, WindowOptions::default())?;
                log::debug!("opened window \"{}\" at {}x{}", self.title, w, h);
                self.size = Some((w, h));
                self.window.insert(created)
            }
        };
        window.update_with_buffer(&grid.to_0rgb(), w as usize, h as usize)?;
        Ok(())
    }

    fn quit_requested(&mut self) -> bool {
        match &self.window {
            Some(window) => !window.is_open() || window.is_key_down(Key::Escape),
            None => false,
        }
    }
}
