use crate::foundation::core::Argb;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

/// Computed in floating point, then truncated toward zero (not rounded).
impl Lerp for i32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let a = f64::from(*a);
        let b = f64::from(*b);
        (a + (b - a) * t) as i32
    }
}

/// Per-channel blend with `t` quantized (truncated) to an 8-bit weight.
impl Lerp for Argb {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let part = (t.clamp(0.0, 1.0) * 255.0) as u8;
        Argb::lerp_part(part, *a, *b)
    }
}

/// Value type carried by a tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Integer,
    ColorRgb,
    ColorHsv,
    Float,
}

/// Endpoints of a tween, typed per [`ValueType`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tween {
    Integer { from: i32, to: i32 },
    ColorRgb { from: Argb, to: Argb },
    /// Packed-channel blend of the raw `from`/`to` bits whose four result
    /// bytes are then read as `(alpha, hue, saturation, brightness)`.
    ///
    /// This is not an interpolation through HSV space: the endpoints are
    /// AHSV quadruples packed into 32 bits, blended channel-wise like
    /// [`Tween::ColorRgb`], and only the blended quadruple is converted.
    ColorHsv { from: Argb, to: Argb },
    Float { from: f32, to: f32 },
}

/// A value produced by [`Tween::blend`], ready to be stored in a slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Blended {
    Int(i32),
    Color(Argb),
    Float(f32),
}

impl Tween {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Integer { .. } => ValueType::Integer,
            Self::ColorRgb { .. } => ValueType::ColorRgb,
            Self::ColorHsv { .. } => ValueType::ColorHsv,
            Self::Float { .. } => ValueType::Float,
        }
    }

    /// Blend the endpoints with an already-eased coefficient.
    pub fn blend(&self, t: f64) -> Blended {
        match *self {
            Self::Integer { from, to } => Blended::Int(i32::lerp(&from, &to, t)),
            Self::ColorRgb { from, to } => Blended::Color(Argb::lerp(&from, &to, t)),
            Self::ColorHsv { from, to } => {
                let [a, h, s, v] = Argb::lerp(&from, &to, t).channels();
                Blended::Color(Argb::from_ahsv(a, h, s, v))
            }
            Self::Float { from, to } => Blended::Float(f32::lerp(&from, &to, t)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/blend.rs"]
mod tests;
