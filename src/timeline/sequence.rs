use crate::{
    animation::blend::Tween,
    animation::ease::Ease,
    foundation::core::Millis,
    foundation::error::{CueError, CueResult},
    state::slots::{AnimState, SlotId, Width},
    timeline::action::Action,
};

/// Ordered, immutable list of actions making up one run's script.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    actions: Vec<Action>,
}

impl Timeline {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Sum of every action's delay.
    pub fn total_duration_ms(&self) -> u64 {
        self.actions
            .iter()
            .fold(0u64, |acc, a| acc.saturating_add(a.duration_ms))
    }

    /// Offset (from run start) at which each action becomes due.
    pub fn schedule(&self) -> Vec<Millis> {
        let mut at = Millis::ZERO;
        self.actions
            .iter()
            .map(|a| {
                let due = at;
                at = at.add_ms(a.duration_ms);
                due
            })
            .collect()
    }

    /// Check every action against the state it will run on.
    pub fn validate_for(&self, state: &AnimState) -> CueResult<()> {
        for (i, action) in self.actions.iter().enumerate() {
            action.validate_for(state).map_err(|e| match e {
                CueError::Validation(msg) => CueError::validation(format!("action {i}: {msg}")),
                CueError::Animation(msg) => CueError::animation(format!("action {i}: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }
}

/// Fluent assembly of a [`Timeline`]; each helper sets the new action's delay.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    actions: Vec<Action>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn wait(self, duration_ms: u64) -> Self {
        self.action(Action::wait(duration_ms))
    }

    pub fn set_int(self, target: SlotId, width: Width, value: u64, then_ms: u64) -> Self {
        self.action(Action::set_int(target, width, value).then_wait(then_ms))
    }

    pub fn set_float(self, target: SlotId, value: f32, then_ms: u64) -> Self {
        self.action(Action::set_float(target, value).then_wait(then_ms))
    }

    pub fn lerp(
        self,
        target: SlotId,
        tween: Tween,
        ease: Ease,
        span_ms: u64,
        then_ms: u64,
    ) -> Self {
        self.action(Action::lerp(target, tween, ease, span_ms).then_wait(then_ms))
    }

    /// Finish and validate against `state`.
    pub fn build(self, state: &AnimState) -> CueResult<Timeline> {
        let timeline = Timeline::new(self.actions);
        timeline.validate_for(state)?;
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
