//! Raw camera buffers and the display-ready pixel grid.
//!
//! A [`FrameBuffer`] is the flat B,G,R,A byte sequence a camera produces on
//! each sampled tick. [`FrameBuffer::into_pixel_grid`] consumes it and yields
//! a [`PixelGrid`], a height x width x 3 array with the alpha channel
//! stripped and the B,G,R channel order preserved. The transform owns its
//! input, so nothing aliases the camera's next tick.

use std::fmt;

use ndarray::{Array3, s};

use crate::error::{Error, Result};

/// One captured image as raw BGRA bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Wrap raw BGRA bytes. The length is checked at grid-conversion time,
    /// not here, so synthetic buffers for tests can be built freely.
    pub fn from_bgra(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn describe(&self) -> String {
        format!("{}x{} bgra ({} bytes)", self.width, self.height, self.data.len())
    }

    /// Reinterpret the buffer as a BGR pixel grid, dropping every pixel's
    /// alpha byte.
    ///
    /// A buffer whose length is not `width * height * 4` is rejected as
    /// unsupported input rather than reshaped on a guess.
    pub fn into_pixel_grid(self) -> Result<PixelGrid> {
        let (w, h) = (self.width as usize, self.height as usize);
        let expected = w * h * 4;
        if self.data.len() != expected {
            return Err(Error::FrameGeometry(format!(
                "buffer is {} bytes, {}x{} bgra needs {}",
                self.data.len(),
                self.width,
                self.height,
                expected
            )));
        }
        let bgra = Array3::from_shape_vec((h, w, 4), self.data)
            .map_err(|e| Error::FrameGeometry(e.to_string()))?;
        let pixels = bgra.slice(s![.., .., ..3]).to_owned();
        Ok(PixelGrid { pixels })
    }
}

impl fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("byte_len", &self.data.len())
            .finish()
    }
}

/// Alpha-stripped, display-ready pixel array (height x width x 3, BGR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array3<u8>,
}

impl PixelGrid {
    pub fn width(&self) -> u32 {
        self.pixels.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.pixels.dim().0 as u32
    }

    pub fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// The B,G,R triple at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let (x, y) = (x as usize, y as usize);
        [
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
        ]
    }

    /// Pack the grid row-major into 0RGB words for the window buffer.
    pub fn to_0rgb(&self) -> Vec<u32> {
        let (h, w, _) = self.pixels.dim();
        let mut out = Vec::with_capacity(w * h);
        for row in self.pixels.outer_iter() {
            for px in row.outer_iter() {
                let (b, g, r) = (px[0] as u32, px[1] as u32, px[2] as u32);
                out.push((r << 16) | (g << 8) | b);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned_buffer(width: u32, height: u32) -> FrameBuffer {
        // Repeating 0..=255 byte ramp, long enough to cross pixel and row
        // boundaries unevenly.
        let len = (width * height * 4) as usize;
        let data: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
        FrameBuffer::from_bgra(width, height, data)
    }

    #[test]
    fn test_strip_alpha_drops_every_fourth_byte() {
        let width = 7;
        let height = 5;
        let buffer = patterned_buffer(width, height);
        let raw = buffer.as_bytes().to_vec();
        let grid = buffer.into_pixel_grid().unwrap();

        assert_eq!(grid.width(), width);
        assert_eq!(grid.height(), height);

        let kept: Vec<u8> = raw
            .chunks_exact(4)
            .flat_map(|px| px[..3].iter().copied())
            .collect();
        let flat: Vec<u8> = grid.pixels().iter().copied().collect();
        assert_eq!(flat, kept);
    }

    #[test]
    fn test_grid_layout_is_row_major() {
        let buffer = patterned_buffer(3, 2);
        let grid = buffer.into_pixel_grid().unwrap();
        // Pixel (x=1, y=1) starts at byte (1 * 3 + 1) * 4 = 16.
        assert_eq!(grid.pixel(1, 1), [16, 17, 18]);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let buffer = FrameBuffer::from_bgra(4, 4, vec![0u8; 4 * 4 * 4 - 1]);
        let err = buffer.into_pixel_grid().unwrap_err();
        assert!(matches!(err, Error::FrameGeometry(_)));
    }

    #[test]
    fn test_oversized_buffer_is_rejected() {
        let buffer = FrameBuffer::from_bgra(4, 4, vec![0u8; 4 * 4 * 4 + 4]);
        assert!(buffer.into_pixel_grid().is_err());
    }

    #[test]
    fn test_0rgb_packing_swaps_bgr() {
        let data = vec![
            0x10, 0x20, 0x30, 0xff, // b g r a
            0x01, 0x02, 0x03, 0xff,
        ];
        let grid = FrameBuffer::from_bgra(2, 1, data).into_pixel_grid().unwrap();
        assert_eq!(grid.to_0rgb(), vec![0x0030_2010, 0x0003_0201]);
    }

    #[test]
    fn test_describe_and_debug() {
        let buffer = patterned_buffer(2, 2);
        assert_eq!(buffer.describe(), "2x2 bgra (16 bytes)");
        let dbg = format!("{:?}", buffer);
        assert!(dbg.contains("byte_len"));
    }
}
