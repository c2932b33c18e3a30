use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The four corner seeds of one plasma field.
///
/// Each seed is a hue fraction in `[0, 1]` anchoring one corner of the
/// canvas: `c0` top-left, `c1` top-right, `c2` bottom-left, `c3` bottom-right.
///
/// Seeds are regenerated together and never partially. Resizing the canvas
/// keeps the same seeds, so a redraw after a resize shows a stretched or
/// cropped version of the same field rather than a new one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldState {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
}

impl FieldState {
    /// Creates a field from explicit corner seeds.
    ///
    /// Seeds are not validated; values outside `[0, 1]` wrap around the hue
    /// circle when rendered.
    #[inline]
    pub const fn new(c0: f64, c1: f64, c2: f64, c3: f64) -> Self {
        Self { c0, c1, c2, c3 }
    }

    /// Draws four fresh seeds from the thread-local generator.
    pub fn random() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Draws four seeds from a generator seeded with `seed`.
    ///
    /// The same `seed` always yields the same field.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Draws four independent uniform seeds in `[0, 1)` from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random(), rng.random())
    }

    /// Replaces all four seeds with fresh random values.
    pub fn reset(&mut self) {
        self.reset_with(&mut rand::rng());
    }

    /// Replaces all four seeds with values drawn from `rng`.
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::from_rng(rng);
        log::info!(
            "field reset: c0={:.4} c1={:.4} c2={:.4} c3={:.4}",
            self.c0,
            self.c1,
            self.c2,
            self.c3
        );
    }

    /// Corner seeds in `[top-left, top-right, bottom-left, bottom-right]` order.
    #[inline]
    pub const fn corners(&self) -> [f64; 4] {
        [self.c0, self.c1, self.c2, self.c3]
    }
}
