use crate::error::BufferError;

/// Write target for rendered pixels.
///
/// The renderer calls `put_pixel` exactly once per covered coordinate, in no
/// particular order. `x` is the column and `y` the row, top-left origin.
pub trait PixelSink {
    fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

/// Row-major RGBA8 pixel storage, top-left origin.
///
/// Pixel `(x, y)` lives at byte offset `(y * width + x) * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zeroed (transparent black) buffer.
    ///
    /// # Panics
    ///
    /// If `width * height * 4` overflows `usize`. Use [`try_new`](Self::try_new)
    /// for sizes that come from user input.
    pub fn new(width: u32, height: u32) -> Self {
        match Self::try_new(width, height) {
            Ok(buffer) => buffer,
            Err(err) => panic!("{err}"),
        }
    }

    /// Allocates a zeroed buffer, or fails if its byte length overflows `usize`.
    pub fn try_new(width: u32, height: u32) -> Result<Self, BufferError> {
        let len = byte_len(width, height).ok_or(BufferError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.offset(x, y)?;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Resizes to `width` x `height` and clears every pixel.
    ///
    /// The allocation is reused when it is already large enough. On error the
    /// buffer is left untouched.
    pub fn reset(&mut self, width: u32, height: u32) -> Result<(), BufferError> {
        let len = byte_len(width, height).ok_or(BufferError::TooLarge { width, height })?;
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize(len, 0);
        Ok(())
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

impl PixelSink for PixelBuffer {
    /// Writes are clipped: coordinates outside the buffer are dropped.
    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let Some(idx) = self.offset(x, y) else { return };
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }
}

#[inline]
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)?.checked_mul(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.as_bytes(), &[0u8; 24][..]);
        assert!(!buf.is_empty());
    }

    #[test]
    fn put_pixel_is_row_major() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.put_pixel(2, 1, [1, 2, 3, 4]);

        assert_eq!(buf.pixel(2, 1), Some([1, 2, 3, 4]));
        assert_eq!(&buf.as_bytes()[20..24], &[1, 2, 3, 4]);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.put_pixel(2, 0, [9; 4]);
        buf.put_pixel(0, 2, [9; 4]);

        assert!(buf.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(buf.pixel(2, 0), None);
    }

    // ── size limits ───────────────────────────────────────────────────────

    #[test]
    fn overflowing_size_is_rejected() {
        let err = PixelBuffer::try_new(u32::MAX, u32::MAX).unwrap_err();
        assert_eq!(err, BufferError::TooLarge { width: u32::MAX, height: u32::MAX });
        assert_eq!(
            err.to_string(),
            format!("{0}x{0} RGBA8 buffer does not fit in memory", u32::MAX)
        );
    }

    #[test]
    fn failed_reset_keeps_previous_contents() {
        let mut buf = PixelBuffer::new(2, 1);
        buf.put_pixel(1, 0, [5; 4]);

        assert!(buf.reset(u32::MAX, u32::MAX).is_err());
        assert_eq!((buf.width(), buf.height()), (2, 1));
        assert_eq!(buf.pixel(1, 0), Some([5; 4]));
    }

    #[test]
    fn byte_len_is_checked() {
        assert_eq!(byte_len(3, 2), Some(24));
        assert_eq!(byte_len(0, u32::MAX), Some(0));
        assert_eq!(byte_len(u32::MAX, u32::MAX), None);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_resizes_and_clears() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.put_pixel(0, 0, [7; 4]);
        buf.reset(4, 1).unwrap();

        assert_eq!((buf.width(), buf.height()), (4, 1));
        assert_eq!(buf.as_bytes().len(), 16);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_sized_buffer_is_empty() {
        let buf = PixelBuffer::new(0, 5);
        assert!(buf.is_empty());
        assert_eq!(buf.pixel(0, 0), None);
    }
}
