use crate::foundation::error::{GoalwaveError, GoalwaveResult};

/// Separable Gaussian blur over a premultiplied RGBA8 buffer.
///
/// Weights are quantized to Q16 and sum to exactly `1 << 16`, so a constant image is a fixed point.
/// Samples past the edges are clamped to the border pixel.
pub(crate) fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> GoalwaveResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| GoalwaveError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(GoalwaveError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    let Some(region) = coverage(src, width, height, radius) else {
        return Ok(out);
    };

    horizontal_pass(src, &mut tmp, width, region, &kernel);
    vertical_pass(&tmp, &mut out, width, height, region, &kernel);
    Ok(out)
}

/// Pixels a blur can reach: the bounding box of non-transparent pixels grown by `radius`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Region {
    pub(crate) x0: i32,
    pub(crate) y0: i32,
    pub(crate) x1: i32,
    pub(crate) y1: i32,
}

pub(crate) fn coverage(src: &[u8], width: u32, height: u32, radius: u32) -> Option<Region> {
    let w = width as usize;
    let mut bbox: Option<Region> = None;
    for (i, px) in src.chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let x = (i % w) as i32;
        let y = (i / w) as i32;
        bbox = Some(match bbox {
            None => Region { x0: x, y0: y, x1: x, y1: y },
            Some(b) => Region {
                x0: b.x0.min(x),
                y0: b.y0.min(y),
                x1: b.x1.max(x),
                y1: b.y1.max(y),
            },
        });
    }
    let r = radius as i32;
    bbox.map(|b| Region {
        x0: (b.x0 - r).max(0),
        y0: (b.y0 - r).max(0),
        x1: (b.x1 + r).min(width as i32 - 1),
        y1: (b.y1 + r).min(height as i32 - 1),
    })
}

/// Sigma matching a blur of the given radius (`radius / 2`, at least 0.5).
pub(crate) fn sigma_for_radius(radius: u32) -> f32 {
    (radius as f32 / 2.0).max(0.5)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> GoalwaveResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(GoalwaveError::validation("blur sigma must be finite and > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(GoalwaveError::render("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, region: Region, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in region.y0..=region.y1 {
        let row = (y * w) as usize;
        for x in region.x0..=region.x1 {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = (row + sx as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = (row + x as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    region: Region,
    k: &[u32],
) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in region.y0..=region.y1 {
        for x in region.x0..=region.x1 {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
