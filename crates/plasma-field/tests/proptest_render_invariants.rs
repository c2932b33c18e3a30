use plasma_field::{FieldState, PixelSink, PlasmaRenderer, Rectangle, mid};
use proptest::prelude::*;

/// Records how many times each coordinate was written.
struct HitMap {
    width: u32,
    height: u32,
    hits: Vec<u8>,
    stray: usize,
    translucent: usize,
}

impl HitMap {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            hits: vec![0; (width * height) as usize],
            stray: 0,
            translucent: 0,
        }
    }
}

impl PixelSink for HitMap {
    fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            self.stray += 1;
            return;
        }
        let cell = &mut self.hits[(y * self.width + x) as usize];
        *cell = cell.saturating_add(1);
        if rgba[3] != 255 {
            self.translucent += 1;
        }
    }
}

fn seed() -> impl Strategy<Value = f64> {
    0.0f64..1.0
}

fn field() -> impl Strategy<Value = FieldState> {
    (seed(), seed(), seed(), seed()).prop_map(|(a, b, c, d)| FieldState::new(a, b, c, d))
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn render_covers_every_pixel_once(w in 1u32..96, h in 1u32..96, field in field()) {
        let mut map = HitMap::new(w, h);
        PlasmaRenderer::new().render(w, h, &field, &mut map);

        prop_assert_eq!(map.stray, 0);
        prop_assert_eq!(map.translucent, 0);
        prop_assert!(map.hits.iter().all(|&n| n == 1));
    }

    #[test]
    fn render_is_deterministic(w in 1u32..64, h in 1u32..64, field in field()) {
        let renderer = PlasmaRenderer::new();
        let a = renderer.render_to_buffer(w, h, &field);
        let b = renderer.render_to_buffer(w, h, &field);
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn split_partitions_pixel_count(
        top in -50i64..50,
        left in -50i64..50,
        w in 0i64..200,
        h in 0i64..200,
    ) {
        let rect = Rectangle::new(top, left, top + h, left + w, [0.2, 0.4, 0.6, 0.8]);
        let total: u64 = rect.split(0.00025).iter().map(Rectangle::area).sum();
        prop_assert_eq!(total, ((w + 1) * (h + 1)) as u64);
    }

    #[test]
    fn split_quadrants_stay_inside_parent(w in 0i64..64, h in 0i64..64) {
        let rect = Rectangle::new(0, 0, h, w, [0.0; 4]);
        for q in rect.split(0.00025).iter().filter(|q| !q.is_empty()) {
            prop_assert!(q.left >= rect.left && q.right <= rect.right);
            prop_assert!(q.top >= rect.top && q.bottom <= rect.bottom);
        }
    }

    #[test]
    fn mid_is_symmetric_and_idempotent(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        prop_assert!((mid(a, b) - mid(b, a)).abs() < 1e-12);
        prop_assert_eq!(mid(a, a), a);
    }

    #[test]
    fn out_of_range_seeds_never_panic(
        w in 1u32..32,
        h in 1u32..32,
        c in -5.0f64..5.0,
    ) {
        let field = FieldState::new(c, -c, c * 2.0, 1.0 - c);
        let buf = PlasmaRenderer::new().render_to_buffer(w, h, &field);
        prop_assert!(buf.as_bytes().chunks_exact(4).all(|px| px[3] == 255));
    }
}
