/// Converts an HSL color to 8-bit RGB.
///
/// `hue` is in degrees, `saturation` and `lightness` are percentages in
/// `[0, 100]`. Hues outside `[0, 360)` wrap through the channel modulo, so
/// out-of-range seeds still produce a valid (if arbitrary) color.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let l = lightness / 100.0;
    let a = saturation * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| -> u8 {
        // Truncating remainder: keeps the sign of the dividend.
        let k = (n + hue / 30.0) % 12.0;
        let v = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        round_half_up(255.0 * v) as u8
    };

    [channel(0.0), channel(8.0), channel(4.0)]
}

/// Maps a hue fraction (`1.0` = one full turn) to an opaque, fully
/// saturated mid-lightness RGBA pixel.
///
/// The hue is truncated to whole degrees before conversion.
#[inline]
pub fn hue_to_rgba(fraction: f64) -> [u8; 4] {
    let [r, g, b] = hsl_to_rgb((fraction * 360.0).floor(), 100.0, 50.0);
    [r, g, b, 255]
}

/// Rounds halves towards positive infinity (`127.5 -> 128`, `-0.5 -> 0`).
#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── primaries ─────────────────────────────────────────────────────────

    #[test]
    fn red() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), [255, 0, 0]);
    }

    #[test]
    fn green() {
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), [0, 255, 0]);
    }

    #[test]
    fn blue() {
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), [0, 0, 255]);
    }

    #[test]
    fn yellow_between_red_and_green() {
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), [255, 255, 0]);
    }

    // ── grayscale / lightness extremes ────────────────────────────────────

    #[test]
    fn zero_saturation_is_gray_rounded_up() {
        // 255 * 0.5 = 127.5 rounds up.
        assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0), [128, 128, 128]);
    }

    #[test]
    fn lightness_bounds_are_black_and_white() {
        assert_eq!(hsl_to_rgb(200.0, 100.0, 0.0), [0, 0, 0]);
        assert_eq!(hsl_to_rgb(200.0, 100.0, 100.0), [255, 255, 255]);
    }

    // ── wrapping ──────────────────────────────────────────────────────────

    #[test]
    fn full_turn_wraps_to_red() {
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), hsl_to_rgb(0.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(480.0, 100.0, 50.0), hsl_to_rgb(120.0, 100.0, 50.0));
    }

    #[test]
    fn negative_hue_does_not_panic() {
        let _ = hsl_to_rgb(-45.0, 100.0, 50.0);
        let _ = hue_to_rgba(-3.7);
    }

    // ── hue fraction ──────────────────────────────────────────────────────

    #[test]
    fn hue_fraction_truncates_to_whole_degrees() {
        // 0.3349 * 360 = 120.56 -> 120 degrees.
        assert_eq!(hue_to_rgba(0.3349), [0, 255, 0, 255]);
        assert_eq!(hue_to_rgba(0.0), [255, 0, 0, 255]);
    }

    #[test]
    fn hue_fraction_is_opaque() {
        for i in 0..=100 {
            assert_eq!(hue_to_rgba(i as f64 / 100.0)[3], 255);
        }
    }
}
