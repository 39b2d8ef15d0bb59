use crate::{
    animation::lerp::LerpRegistry,
    foundation::core::Millis,
    foundation::error::CueResult,
    state::slots::AnimState,
    timeline::sequence::Timeline,
};

/// What one [`Scheduler::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FrameReport {
    pub now: Millis,
    /// Actions fired this frame (zero, one, or a catch-up burst).
    pub fired: usize,
    pub cursor: usize,
    pub active_lerps: usize,
    pub completed: bool,
}

/// Cursor over a [`Timeline`] plus the lerps it has started.
///
/// The scheduler borrows the animation state mutably for its whole life, so
/// neither it nor any lerp it holds can outlive the slots they write.
pub struct Scheduler<'a> {
    timeline: &'a Timeline,
    state: &'a mut AnimState,
    lerps: LerpRegistry,
    start_time: Millis,
    event_time: Millis,
    cursor: usize,
}

impl<'a> Scheduler<'a> {
    /// Validate `timeline` against `state` and position the cursor at the first
    /// action, due at `start_time`.
    pub fn new(
        timeline: &'a Timeline,
        state: &'a mut AnimState,
        start_time: Millis,
    ) -> CueResult<Self> {
        timeline.validate_for(state)?;
        Ok(Self {
            timeline,
            state,
            lerps: LerpRegistry::new(),
            start_time,
            event_time: start_time,
            cursor: 0,
        })
    }

    /// Advance one frame at time `now`: fire every action that is due, then
    /// evaluate all active lerps.
    pub fn step(&mut self, now: Millis) -> FrameReport {
        let timeline = self.timeline;
        let actions = timeline.actions();
        let mut fired = 0usize;
        while self.event_time <= now && self.cursor < actions.len() {
            let action = &actions[self.cursor];
            tracing::debug!(
                index = self.cursor,
                kind = action.kind.label(),
                scheduled = self.event_time.0,
                now = now.0,
                "running event"
            );
            action.fire(self.event_time, self.state, &mut self.lerps);
            self.event_time = self.event_time.add_ms(action.duration_ms);
            self.cursor += 1;
            fired += 1;
        }

        self.lerps.evaluate_all(now, self.state);

        FrameReport {
            now,
            fired,
            cursor: self.cursor,
            active_lerps: self.lerps.len(),
            completed: self.is_complete(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.timeline.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn start_time(&self) -> Millis {
        self.start_time
    }

    /// Instant at which the action under the cursor becomes due.
    pub fn event_time(&self) -> Millis {
        self.event_time
    }

    pub fn lerps(&self) -> &LerpRegistry {
        &self.lerps
    }

    pub fn state(&self) -> &AnimState {
        &*self.state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scheduler.rs"]
mod tests;
