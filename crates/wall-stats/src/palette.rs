//! Dominant-color sampling for the wall's card accents.
//!
//! Operates on raw RGBA bytes so no image decoder is needed: the caller
//! hands over decoded pixel data and gets back the most frequent quantized
//! colors, count-descending.

use serde::{Deserialize, Serialize};

/// Sample every Nth pixel (40 bytes = 10 RGBA pixels).
const SAMPLE_STRIDE_BYTES: usize = 40;

/// Channel quantization bucket width.
const BUCKET: u32 = 30;

/// Pixels with alpha below this are ignored.
const MIN_ALPHA: u8 = 125;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string, e.g. `rgb(255, 123, 114)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Default accents used when sampling yields nothing.
pub const FALLBACK_PALETTE: [Rgb; 6] = [
    Rgb::new(255, 123, 114),
    Rgb::new(210, 168, 255),
    Rgb::new(121, 192, 255),
    Rgb::new(255, 166, 87),
    Rgb::new(45, 186, 78),
    Rgb::new(110, 84, 148),
];

/// Extract the dominant colors from raw RGBA pixel data.
///
/// Samples every 10th pixel, skipping transparent, near-white, and
/// near-black pixels, then quantizes each channel to buckets of 30 and
/// counts bucket frequency. Returns up to `max` colors, most frequent
/// first; frequency ties keep first-seen order.
pub fn dominant_colors(rgba: &[u8], max: usize) -> Vec<Rgb> {
    let mut counts: Vec<(Rgb, u32)> = Vec::new();
    let mut index: std::collections::HashMap<(u8, u8, u8), usize> =
        std::collections::HashMap::new();

    let mut offset = 0;
    while offset + 4 <= rgba.len() {
        let (r, g, b, a) = (
            rgba[offset],
            rgba[offset + 1],
            rgba[offset + 2],
            rgba[offset + 3],
        );
        offset += SAMPLE_STRIDE_BYTES;

        if a < MIN_ALPHA {
            continue;
        }
        if r > 240 && g > 240 && b > 240 {
            continue;
        }
        if r < 15 && g < 15 && b < 15 {
            continue;
        }

        let color = Rgb::new(quantize(r), quantize(g), quantize(b));
        let key = (color.r, color.g, color.b);
        match index.get(&key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((color, 1));
            }
        }
    }

    counts.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    counts.truncate(max);
    counts.into_iter().map(|(color, _)| color).collect()
}

/// Like [`dominant_colors`], falling back to the default palette when
/// nothing survives the sampling filters.
pub fn dominant_colors_or_fallback(rgba: &[u8], max: usize) -> Vec<Rgb> {
    let colors = dominant_colors(rgba, max);
    if colors.is_empty() {
        FALLBACK_PALETTE.to_vec()
    } else {
        colors
    }
}

/// Round a channel to the nearest multiple of 30, clamped to 255.
fn quantize(channel: u8) -> u8 {
    (((channel as u32 + BUCKET / 2) / BUCKET) * BUCKET).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeat one RGBA pixel enough times that the stride sampler sees it
    /// `n` times.
    fn pixels(rgba: [u8; 4], n: usize) -> Vec<u8> {
        let mut out = Vec::new();
        for _ in 0..n * (SAMPLE_STRIDE_BYTES / 4) {
            out.extend_from_slice(&rgba);
        }
        out
    }

    #[test]
    fn test_quantize_buckets() {
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(14), 0);
        assert_eq!(quantize(15), 30);
        assert_eq!(quantize(100), 90);
        assert_eq!(quantize(255), 255); // 270 clamped
    }

    #[test]
    fn test_dominant_color_first() {
        let mut data = pixels([200, 50, 50, 255], 5);
        data.extend(pixels([50, 200, 50, 255], 2));
        let colors = dominant_colors(&data, 5);
        assert_eq!(colors[0], Rgb::new(210, 60, 60));
        assert_eq!(colors[1], Rgb::new(60, 210, 60));
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let data = pixels([200, 50, 50, 100], 10);
        assert!(dominant_colors(&data, 5).is_empty());
    }

    #[test]
    fn test_near_white_and_near_black_skipped() {
        let mut data = pixels([250, 250, 250, 255], 10);
        data.extend(pixels([5, 5, 5, 255], 10));
        assert!(dominant_colors(&data, 5).is_empty());
    }

    #[test]
    fn test_max_limits_result() {
        let mut data = Vec::new();
        for i in 0..8u8 {
            data.extend(pixels([i * 30, 100, 100, 255], 1));
        }
        let colors = dominant_colors(&data, 3);
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_fallback_on_empty_sampling() {
        let colors = dominant_colors_or_fallback(&[], 5);
        assert_eq!(colors, FALLBACK_PALETTE.to_vec());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Rgb::new(255, 123, 114).to_css(), "rgb(255, 123, 114)");
    }
}
