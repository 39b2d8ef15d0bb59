use crate::foundation::core::Argb;

/// Straight-alpha RGBA8 pixel, `[r, g, b, a]`.
pub type Rgba8 = [u8; 4];

/// Source-over of a straight-alpha color onto a straight-alpha pixel.
///
/// Color channels mix by the source alpha; the destination alpha accumulates.
pub fn over(dst: Rgba8, src: Argb) -> Rgba8 {
    let src = src.to_rgba8();
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), u16::from(sa));
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
