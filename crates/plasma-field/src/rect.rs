/// Arithmetic mean of two corner colors. Not rounded.
#[inline]
pub fn mid(a: f64, b: f64) -> f64 {
    a + (b - a) / 2.0
}

/// Integer midpoint, floored. Used for split rows/columns.
#[inline]
fn mid_index(a: i64, b: i64) -> i64 {
    a + (b - a).div_euclid(2)
}

/// Axis-aligned pixel region with inclusive bounds, plus the hue fractions at
/// its four corners.
///
/// Corner order is `[top-left, top-right, bottom-left, bottom-right]`.
/// A rectangle with `left > right` or `top > bottom` is empty.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub top: i64,
    pub left: i64,
    pub bottom: i64,
    pub right: i64,
    pub corners: [f64; 4],
}

impl Rectangle {
    #[inline]
    pub const fn new(top: i64, left: i64, bottom: i64, right: i64, corners: [f64; 4]) -> Self {
        Self { top, left, bottom, right, corners }
    }

    /// The whole `width` x `height` canvas. Zero in either axis yields an
    /// empty rectangle.
    #[inline]
    pub fn canvas(width: u32, height: u32, corners: [f64; 4]) -> Self {
        Self::new(0, 0, i64::from(height) - 1, i64::from(width) - 1, corners)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// A single pixel; all four corners collapse onto it.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == self.right && self.top == self.bottom
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        ((self.right - self.left + 1) * (self.bottom - self.top + 1)) as u64
    }

    /// Length of the diagonal between the outermost pixel centers.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        let dx = (self.right - self.left) as f64;
        let dy = (self.bottom - self.top) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Interior color: the mean of the corners pushed up by
    /// `diagonal * noise_scale`.
    ///
    /// Not clamped to `[0, 1]`; accumulated drift wraps around the hue circle.
    #[inline]
    pub fn center_color(&self, noise_scale: f64) -> f64 {
        let [c0, c1, c2, c3] = self.corners;
        (c0 + c1 + c2 + c3) / 4.0 + self.diagonal() * noise_scale
    }

    /// Splits into `[top-left, top-right, bottom-left, bottom-right]`
    /// quadrants.
    ///
    /// The midpoint row/column belong to the top/left quadrants, so odd
    /// extents give the extra row/column to the bottom/right ones. The four
    /// quadrants partition `self` exactly; some may be empty when `self` is
    /// one pixel wide or tall.
    pub fn split(&self, noise_scale: f64) -> [Rectangle; 4] {
        let Self { top, left, bottom, right, corners } = *self;
        let [c0, c1, c2, c3] = corners;

        let mid_col = mid_index(left, right);
        let mid_row = mid_index(top, bottom);

        let top_mid = mid(c0, c1);
        let left_mid = mid(c0, c2);
        let bottom_mid = mid(c2, c3);
        let right_mid = mid(c1, c3);
        let center = self.center_color(noise_scale);

        [
            Rectangle::new(top, left, mid_row, mid_col, [c0, top_mid, left_mid, center]),
            Rectangle::new(top, mid_col + 1, mid_row, right, [top_mid, c1, center, right_mid]),
            Rectangle::new(mid_row + 1, left, bottom, mid_col, [left_mid, center, c2, bottom_mid]),
            Rectangle::new(mid_row + 1, mid_col + 1, bottom, right, [center, right_mid, bottom_mid, c3]),
        ]
    }
}
