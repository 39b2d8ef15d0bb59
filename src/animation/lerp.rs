use crate::{
    animation::blend::{Blended, Tween},
    animation::ease::Ease,
    foundation::core::Millis,
    state::slots::{AnimState, SlotId},
};

/// A running tween bound to one slot over `[start, end]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ActiveLerp {
    pub target: SlotId,
    start: Millis,
    end: Millis,
    pub tween: Tween,
    pub ease: Ease,
}

impl ActiveLerp {
    /// Lerp covering `[start, start + span_ms]`.
    pub fn new(target: SlotId, start: Millis, span_ms: u64, tween: Tween, ease: Ease) -> Self {
        Self {
            target,
            start,
            end: start.add_ms(span_ms),
            tween,
            ease,
        }
    }

    pub fn start(&self) -> Millis {
        self.start
    }

    pub fn end(&self) -> Millis {
        self.end
    }

    /// Linear progress in `[0, 1]`; `1` as soon as `now >= end`, so a zero-length
    /// lerp never divides by zero.
    pub fn progress(&self, now: Millis) -> f64 {
        if now < self.start {
            0.0
        } else if now >= self.end {
            1.0
        } else {
            now.since(self.start) as f64 / self.end.since(self.start) as f64
        }
    }

    /// Eased and blended value at `now`.
    pub fn sample(&self, now: Millis) -> Blended {
        self.tween.blend(self.ease.apply(self.progress(now)))
    }

    pub fn is_finished(&self, now: Millis) -> bool {
        self.end <= now
    }
}

/// The set of active lerps, evaluated in insertion order.
#[derive(Clone, Debug, Default)]
pub struct LerpRegistry {
    active: Vec<ActiveLerp>,
}

impl LerpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lerp. Several lerps may target the same slot; the one inserted
    /// last is written last each frame.
    pub fn insert(&mut self, lerp: ActiveLerp) {
        tracing::debug!(
            target_slot = lerp.target.0,
            start = lerp.start.0,
            end = lerp.end.0,
            "lerp registered"
        );
        self.active.push(lerp);
    }

    /// Write every active lerp's value at `now` into `state`, then drop the
    /// ones whose `end <= now`. Returns how many were dropped.
    pub fn evaluate_all(&mut self, now: Millis, state: &mut AnimState) -> usize {
        for lerp in &self.active {
            let written = state.write_blended(lerp.target, lerp.sample(now));
            debug_assert!(written, "lerp target {:?} rejected its value", lerp.target);
        }

        let before = self.active.len();
        self.active.retain(|l| !l.is_finished(now));
        let pruned = before - self.active.len();
        if pruned > 0 {
            tracing::debug!(pruned, remaining = self.active.len(), "lerps finished");
        }
        pruned
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveLerp> {
        self.active.iter()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
