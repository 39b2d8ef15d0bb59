/// Remapping of normalized progress used to shape a tween.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// `t`
    #[default]
    Linear,
    /// `t²`
    #[serde(alias = "ease_in")]
    In,
    /// `-t² + 2t`
    #[serde(alias = "ease_out")]
    Out,
    /// `-2t³ + 3t²`
    #[serde(alias = "ease_in_out", alias = "ease")]
    InOut,
}

impl Ease {
    /// All easing kinds, in declaration order.
    pub const ALL: [Ease; 4] = [Ease::Linear, Ease::In, Ease::Out, Ease::InOut];

    /// Remap `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::In => t * t,
            Self::Out => -t * t + 2.0 * t,
            Self::InOut => -2.0 * t * t * t + 3.0 * t * t,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
