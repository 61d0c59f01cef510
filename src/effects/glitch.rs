use image::RgbImage;
use rand::Rng;

pub(crate) const STRIPS: u32 = 3;
pub(crate) const MAX_OFFSET: i32 = 15;
const MARGIN: u32 = 30;
const MIN_HEIGHT: u32 = 5;
const MAX_HEIGHT: u32 = 25;

/// One displaced band: rows `[y, y + height)` rotated right by `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GlitchStrip {
    pub(crate) y: u32,
    pub(crate) height: u32,
    pub(crate) offset: i32,
}

/// Draw `count` random strips for a canvas `height` rows tall.
pub(crate) fn random_strips(height: u32, count: u32, rng: &mut impl Rng) -> Vec<GlitchStrip> {
    (0..count)
        .map(|_| {
            let y = rng.random_range(0..=height.saturating_sub(MARGIN));
            let h = rng.random_range(MIN_HEIGHT..=MAX_HEIGHT);
            let offset = rng.random_range(-MAX_OFFSET..=MAX_OFFSET);
            GlitchStrip {
                y,
                height: h.min(height.saturating_sub(y)),
                offset,
            }
        })
        .collect()
}

/// Rotate each strip horizontally, reading from the unglitched image.
pub(crate) fn apply_strips(canvas: &mut RgbImage, strips: &[GlitchStrip]) {
    let w = canvas.width() as usize;
    if w == 0 || strips.is_empty() {
        return;
    }
    let height = canvas.height();
    let src = canvas.clone();
    let raw: &mut [u8] = canvas;
    let row_len = w * 3;
    for s in strips {
        let shift = (s.offset.rem_euclid(w as i32)) as usize * 3;
        for y in s.y..s.y.saturating_add(s.height).min(height) {
            let start = y as usize * row_len;
            let src_row = &src.as_raw()[start..start + row_len];
            let dst_row = &mut raw[start..start + row_len];
            dst_row[shift..].copy_from_slice(&src_row[..row_len - shift]);
            dst_row[..shift].copy_from_slice(&src_row[row_len - shift..]);
        }
    }
}

/// Displace random horizontal bands with wraparound.
pub(crate) fn glitch_strips(canvas: &mut RgbImage, rng: &mut impl Rng) {
    let strips = random_strips(canvas.height(), STRIPS, rng);
    tracing::trace!(?strips, "glitch strips");
    apply_strips(canvas, &strips);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glitch.rs"]
mod tests;
