use std::time::Instant;

use crate::buffer::{PixelBuffer, PixelSink};
use crate::color::hue_to_rgba;
use crate::field::FieldState;
use crate::rect::Rectangle;

/// Interior perturbation per pixel of rectangle diagonal.
pub const DEFAULT_NOISE_SCALE: f64 = 0.00025;

/// Recursive quadrant-subdivision plasma renderer.
///
/// Stateless across calls: every `render` is a complete single pass, and the
/// same size and seeds always produce the same pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlasmaRenderer {
    noise_scale: f64,
}

impl Default for PlasmaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlasmaRenderer {
    pub const fn new() -> Self {
        Self::with_noise_scale(DEFAULT_NOISE_SCALE)
    }

    pub const fn with_noise_scale(noise_scale: f64) -> Self {
        Self { noise_scale }
    }

    #[inline]
    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Writes `width` x `height` opaque pixels of the field into `sink`.
    ///
    /// Every coordinate in the canvas is written exactly once. A zero width or
    /// height writes nothing.
    pub fn render<S>(&self, width: u32, height: u32, field: &FieldState, sink: &mut S)
    where
        S: PixelSink + ?Sized,
    {
        let started = Instant::now();
        self.subdivide(Rectangle::canvas(width, height, field.corners()), sink);
        log::debug!("plasma {width}x{height} rendered in {:?}", started.elapsed());
    }

    /// Renders into a freshly allocated buffer of exactly `width` x `height`.
    pub fn render_to_buffer(&self, width: u32, height: u32, field: &FieldState) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        self.render(width, height, field, &mut buffer);
        buffer
    }

    fn subdivide<S>(&self, rect: Rectangle, sink: &mut S)
    where
        S: PixelSink + ?Sized,
    {
        if rect.is_empty() {
            return;
        }

        if rect.is_leaf() {
            // Bounds start at zero and only grow, so the casts are lossless.
            sink.put_pixel(rect.left as u32, rect.top as u32, hue_to_rgba(rect.corners[0]));
            return;
        }

        for quadrant in rect.split(self.noise_scale) {
            self.subdivide(quadrant, sink);
        }
    }
}
