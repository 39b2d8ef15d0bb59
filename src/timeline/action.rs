use crate::{
    animation::blend::{Tween, ValueType},
    animation::ease::Ease,
    animation::lerp::{ActiveLerp, LerpRegistry},
    foundation::core::Millis,
    foundation::error::{CueError, CueResult},
    state::slots::{AnimState, SlotId, SlotKind, Width},
};

/// Literal written by a set action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SetValue {
    /// Written at `width` bytes; the slot must have the same width.
    Int { width: Width, value: u64 },
    Float(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SetImmediate {
    pub target: SlotId,
    pub value: SetValue,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartLerp {
    pub target: SlotId,
    pub tween: Tween,
    pub ease: Ease,
    /// Length of the tween itself, independent of the action's delay.
    pub span_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActionKind {
    Wait,
    Set(SetImmediate),
    Lerp(StartLerp),
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wait => "wait",
            Self::Set(_) => "set",
            Self::Lerp(_) => "lerp",
        }
    }
}

/// One timeline entry. `duration_ms` is the delay before the next action is
/// due; it says nothing about how long this action's effect lasts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Action {
    pub duration_ms: u64,
    pub kind: ActionKind,
}

impl Action {
    pub fn wait(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            kind: ActionKind::Wait,
        }
    }

    pub fn set_int(target: SlotId, width: Width, value: u64) -> Self {
        Self {
            duration_ms: 0,
            kind: ActionKind::Set(SetImmediate {
                target,
                value: SetValue::Int { width, value },
            }),
        }
    }

    pub fn set_float(target: SlotId, value: f32) -> Self {
        Self {
            duration_ms: 0,
            kind: ActionKind::Set(SetImmediate {
                target,
                value: SetValue::Float(value),
            }),
        }
    }

    pub fn lerp(target: SlotId, tween: Tween, ease: Ease, span_ms: u64) -> Self {
        Self {
            duration_ms: 0,
            kind: ActionKind::Lerp(StartLerp {
                target,
                tween,
                ease,
                span_ms,
            }),
        }
    }

    /// Set the delay before the next action.
    pub fn then_wait(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Check that the action's target exists in `state` and can hold its payload.
    pub fn validate_for(&self, state: &AnimState) -> CueResult<()> {
        match &self.kind {
            ActionKind::Wait => Ok(()),
            ActionKind::Set(set) => {
                let kind = slot_kind(state, set.target)?;
                match (set.value, kind) {
                    (SetValue::Int { width, .. }, SlotKind::Int(slot_width))
                        if width == slot_width =>
                    {
                        Ok(())
                    }
                    (SetValue::Int { width, .. }, SlotKind::Int(slot_width)) => {
                        Err(CueError::animation(format!(
                            "set writes {} bytes into {}-byte slot '{}'",
                            width.bytes(),
                            slot_width.bytes(),
                            slot_name(state, set.target)
                        )))
                    }
                    (SetValue::Float(_), SlotKind::Float) => Ok(()),
                    _ => Err(CueError::animation(format!(
                        "set value does not match the type of slot '{}'",
                        slot_name(state, set.target)
                    ))),
                }
            }
            ActionKind::Lerp(lerp) => {
                let kind = slot_kind(state, lerp.target)?;
                let fits = match (lerp.tween.value_type(), kind) {
                    (ValueType::Integer, SlotKind::Int(_)) => true,
                    (ValueType::ColorRgb | ValueType::ColorHsv, SlotKind::Int(w)) => {
                        w == Width::W4
                    }
                    (ValueType::Float, SlotKind::Float) => true,
                    _ => false,
                };
                if fits {
                    Ok(())
                } else {
                    Err(CueError::animation(format!(
                        "{:?} tween cannot target slot '{}'",
                        lerp.tween.value_type(),
                        slot_name(state, lerp.target)
                    )))
                }
            }
        }
    }

    /// Apply the action's effect. `scheduled` is the instant the action was
    /// due, which may be earlier than the frame that fires it.
    pub(crate) fn fire(&self, scheduled: Millis, state: &mut AnimState, lerps: &mut LerpRegistry) {
        match &self.kind {
            ActionKind::Wait => {}
            ActionKind::Set(set) => {
                let written = match set.value {
                    SetValue::Int { value, .. } => state.write_bits(set.target, value),
                    SetValue::Float(v) => state.write_float(set.target, v),
                };
                debug_assert!(written, "set target {:?} rejected its value", set.target);
            }
            ActionKind::Lerp(lerp) => lerps.insert(ActiveLerp::new(
                lerp.target,
                scheduled,
                lerp.span_ms,
                lerp.tween,
                lerp.ease,
            )),
        }
    }
}

fn slot_kind(state: &AnimState, id: SlotId) -> CueResult<SlotKind> {
    state
        .kind(id)
        .ok_or_else(|| CueError::validation(format!("unknown slot handle {}", id.0)))
}

fn slot_name(state: &AnimState, id: SlotId) -> &str {
    state.name(id).unwrap_or("?")
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/action.rs"]
mod tests;
