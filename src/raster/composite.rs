use image::RgbImage;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{GoalwaveError, GoalwaveResult};
use crate::foundation::math::mul_div255_u8;

pub(crate) type PremulRgba8 = [u8; 4];

/// Premultiply a straight RGB color with `alpha`.
pub(crate) fn premul(c: Rgb8, alpha: u8) -> PremulRgba8 {
    let a = u16::from(alpha);
    [
        mul_div255_u8(u16::from(c[0]), a),
        mul_div255_u8(u16::from(c[1]), a),
        mul_div255_u8(u16::from(c[2]), a),
        alpha,
    ]
}

/// Source-over of a premultiplied pixel onto an opaque one.
pub(crate) fn over_opaque(dst: Rgb8, src: PremulRgba8, opacity: f32) -> Rgb8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 3];
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Composite a premultiplied RGBA8 buffer onto the canvas in place.
pub(crate) fn over_canvas_in_place(
    canvas: &mut RgbImage,
    src: &[u8],
    opacity: f32,
) -> GoalwaveResult<()> {
    let expected = (canvas.width() as usize)
        .checked_mul(canvas.height() as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| GoalwaveError::render("composite buffer size overflow"))?;
    if src.len() != expected {
        return Err(GoalwaveError::render(
            "over_canvas_in_place expects a layer matching the canvas size",
        ));
    }
    for (d, s) in canvas.chunks_exact_mut(3).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over_opaque([d[0], d[1], d[2]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
