// src/grid.rs

//! Intensity grid buffer and the renderer that fills it.
//!
//! The grid owns a flat row-major byte buffer, one intensity per sample.
//! It is populated once per render and handed to the writers read-only.

use crate::config::RenderConfig;
use crate::kernel::escape_time;
use log::debug;
use num_complex::Complex64;

/// A grayscale intensity buffer with one byte per grid sample.
#[derive(Debug)]
pub struct IntensityGrid {
    /// Row-major sample data (`y * width + x`).
    data: Box<[u8]>,
    width: u32,
    height: u32,
}

impl IntensityGrid {
    /// Create a zeroed grid.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            data: vec![0u8; size].into_boxed_slice(),
            width,
            height,
        }
    }

    /// Width in samples.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in samples.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intensity at (x, y).
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize]
    }

    fn set(&mut self, x: u32, y: u32, value: u8) {
        self.data[(y * self.width + x) as usize] = value;
    }

    /// One full row of intensities, x-ascending.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.width) as usize;
        &self.data[start..start + self.width as usize]
    }
}

/// Map an iteration count to a stored intensity: samples that never
/// escaped render black, everything else keeps the count modulo 256.
fn intensity(count: u32, max_iter: u32) -> u8 {
    if count == max_iter {
        0
    } else {
        (count % 256) as u8
    }
}

/// Render the configured grid.
///
/// Sample (x, y) maps to `c = (x - w/2) * 4/w + ((y - h/2) * 4/h)i`, so the
/// grid spans [-2, 2) on both axes. The midpoints are floating-point
/// divisions; truncating them would shift every sample by half a pixel.
/// Samples are independent; rows are filled y-ascending to match the
/// serialization order.
pub fn render(config: &RenderConfig) -> IntensityGrid {
    let w = config.width as f64;
    let h = config.height as f64;
    let mut grid = IntensityGrid::new(config.width, config.height);

    debug!(
        "rendering {}x{} grid, max_iter={}",
        config.width, config.height, config.max_iter
    );

    for y in 0..config.height {
        let im = (y as f64 - h / 2.0) * 4.0 / h;
        for x in 0..config.width {
            let re = (x as f64 - w / 2.0) * 4.0 / w;
            let count = escape_time(Complex64::new(re, im), config.max_iter);
            grid.set(x, y, intensity(count, config.max_iter));
        }
    }
    grid
}
