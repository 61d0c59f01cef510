use image::RgbImage;

pub(crate) const OFFSET: u32 = 2;

/// Move red `offset` pixels left and blue `offset` pixels right; exposed edges go black.
pub(crate) fn chromatic_aberration(canvas: &mut RgbImage, offset: u32) {
    let w = canvas.width() as usize;
    let k = offset as usize;
    if w == 0 || k == 0 {
        return;
    }
    let mut red = vec![0u8; w];
    let mut blue = vec![0u8; w];
    for row in canvas.chunks_exact_mut(w * 3) {
        for (x, px) in row.chunks_exact(3).enumerate() {
            red[x] = px[0];
            blue[x] = px[2];
        }
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            px[0] = red.get(x + k).copied().unwrap_or(0);
            px[2] = x.checked_sub(k).map_or(0, |s| blue[s]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/aberration.rs"]
mod tests;
