use crate::{
    foundation::core::Millis,
    foundation::error::CueResult,
    render::scene::Scene,
    render::surface::Surface,
    state::slots::AnimState,
    timeline::scheduler::Scheduler,
    timeline::sequence::Timeline,
};

/// Callbacks the run loop needs from its environment. All of them are called
/// synchronously on the run's thread and may block.
pub trait Host {
    /// Current monotonic time in milliseconds.
    fn now(&mut self) -> Millis;

    /// Polled once per frame before anything else; `false` cancels the run.
    fn keep_running(&mut self) -> bool {
        true
    }

    /// Push the finished frame to wherever it is displayed.
    fn present(&mut self, _surface: &dyn Surface) {}
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every action fired.
    Completed,
    /// The host asked to stop; slot writes already made are kept.
    Cancelled,
}

impl RunOutcome {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

/// Play `timeline` against `state` until every action has fired or the host
/// cancels.
///
/// Each frame: poll cancellation, read the clock, fire due actions, evaluate
/// lerps, render `scene` onto `surface`, present. Lerps still running when
/// the last action fires are dropped with the scheduler.
///
/// Errors only come from validating `timeline` against `state` up front.
#[tracing::instrument(skip_all, fields(actions = timeline.len()))]
pub fn run(
    surface: &mut dyn Surface,
    timeline: &Timeline,
    state: &mut AnimState,
    host: &mut dyn Host,
    scene: &mut dyn Scene,
) -> CueResult<RunOutcome> {
    let start_time = host.now();
    let mut scheduler = Scheduler::new(timeline, state, start_time)?;
    tracing::info!(start = start_time.0, "run started");

    let mut frames = 0u64;
    while !scheduler.is_complete() {
        if !host.keep_running() {
            tracing::info!(
                frames,
                cursor = scheduler.cursor(),
                active_lerps = scheduler.lerps().len(),
                "run cancelled"
            );
            return Ok(RunOutcome::Cancelled);
        }

        let now = host.now();
        scheduler.step(now);
        scene.render(scheduler.state(), surface);
        host.present(surface);
        frames += 1;
    }

    tracing::info!(
        frames,
        abandoned_lerps = scheduler.lerps().len(),
        "run finished"
    );
    Ok(RunOutcome::Completed)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/run.rs"]
mod tests;
