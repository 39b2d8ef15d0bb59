pub use kurbo::{Affine, Point, Rect, Vec2};

/// Absolute time reading in milliseconds, as reported by a host clock.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Time zero.
    pub const ZERO: Self = Self(0);

    /// `self + delta_ms`, saturating at `u64::MAX`.
    pub fn add_ms(self, delta_ms: u64) -> Self {
        Self(self.0.saturating_add(delta_ms))
    }

    /// Milliseconds elapsed from `earlier` to `self` (zero if `earlier` is later).
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Packed 32-bit color, `0xAARRGGBB`, straight (not premultiplied) alpha.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);

    /// Pack four channels.
    pub fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Unpack as `[a, r, g, b]`.
    pub fn channels(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn alpha(self) -> u8 {
        self.channels()[0]
    }

    pub fn is_opaque(self) -> bool {
        self.alpha() == 0xff
    }

    pub fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// Reorder as `[r, g, b, a]` for RGBA8 pixel buffers.
    pub fn to_rgba8(self) -> [u8; 4] {
        let [a, r, g, b] = self.channels();
        [r, g, b, a]
    }

    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_channels(a, r, g, b)
    }

    /// Blend each channel independently with an 8-bit weight (`0` = `from`, `255` = `to`).
    ///
    /// Channel math is integer: `from + (to - from) * part / 255`, truncated toward zero.
    pub fn lerp_part(part: u8, from: Argb, to: Argb) -> Argb {
        let part = i32::from(part);
        let a = from.channels();
        let b = to.channels();
        let mut out = [0u8; 4];
        for i in 0..4 {
            let x = i32::from(a[i]);
            let y = i32::from(b[i]);
            out[i] = (x + (y - x) * part / 255) as u8;
        }
        Argb(u32::from_be_bytes(out))
    }

    /// Build a color from 8-bit alpha, hue, saturation and brightness.
    ///
    /// Hue covers the full circle over `0..=255` in six sectors of equal width
    /// (red, yellow, green, cyan, blue, magenta). Saturation pulls each channel
    /// toward white, brightness then scales toward black.
    pub fn from_ahsv(a: u8, h: u8, s: u8, v: u8) -> Argb {
        let h6 = u16::from(h) * 6;
        let phase = h6 >> 8;
        let up = (h6 & 0xff) as u8;
        let down = 0xff - up;

        let (r, g, b) = match phase {
            0 => (0xff, up, 0),
            1 => (down, 0xff, 0),
            2 => (0, 0xff, up),
            3 => (0, down, 0xff),
            4 => (up, 0, 0xff),
            _ => (0xff, 0, down),
        };

        let apply = |c: u8| -> u8 {
            let c = u32::from(c);
            let s = u32::from(s);
            let v = u32::from(v);
            let saturated = 0xff - (0xff - c) * s / 0xff;
            (saturated * v / 0xff) as u8
        };

        Argb::from_channels(a, apply(r), apply(g), apply(b))
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
