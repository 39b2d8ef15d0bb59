use crate::{
    animation::blend::Tween,
    animation::ease::Ease,
    foundation::core::Argb,
    foundation::error::{CueError, CueResult},
    settings::RunSettings,
    state::slots::{AnimState, SlotId, Width},
    timeline::action::Action,
    timeline::sequence::Timeline,
};

/// Data-driven script: slot declarations plus the action list that drives
/// them, with slots referenced by name.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptDoc {
    #[serde(default)]
    pub settings: RunSettings,
    /// Color slot painted by the background render hook, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub slots: Vec<SlotDecl>,
    pub actions: Vec<ActionDecl>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlotDecl {
    pub name: String,
    #[serde(flatten)]
    pub init: SlotInit,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlotInit {
    Int {
        width: Width,
        #[serde(default)]
        value: u64,
    },
    Float {
        #[serde(default)]
        value: f32,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActionDecl {
    /// Delay before the next action.
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(flatten)]
    pub op: OpDecl,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OpDecl {
    Wait,
    SetInt {
        slot: String,
        width: Width,
        value: u64,
    },
    SetFloat {
        slot: String,
        value: f32,
    },
    Lerp {
        slot: String,
        #[serde(default)]
        ease: Ease,
        span_ms: u64,
        tween: Tween,
    },
}

/// A script resolved into runnable pieces.
#[derive(Clone, Debug)]
pub struct Prepared {
    pub state: AnimState,
    pub timeline: Timeline,
    /// Resolved [`ScriptDoc::background`].
    pub background: Option<SlotId>,
}

impl ScriptDoc {
    pub fn from_json(s: &str) -> CueResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> CueResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Declare the slots, resolve slot names, and validate every action.
    pub fn prepare(&self) -> CueResult<Prepared> {
        self.settings.validate()?;

        let mut state = AnimState::new();
        for decl in &self.slots {
            match decl.init {
                SlotInit::Int { width, value } => state.add_int(&decl.name, width, value)?,
                SlotInit::Float { value } => state.add_float(&decl.name, value)?,
            };
        }

        let lookup = |what: &str, name: &str| -> CueResult<SlotId> {
            state
                .id(name)
                .ok_or_else(|| CueError::validation(format!("{what}: unknown slot '{name}'")))
        };

        let mut actions = Vec::with_capacity(self.actions.len());
        for (i, decl) in self.actions.iter().enumerate() {
            let what = format!("action {i}");
            let action = match &decl.op {
                OpDecl::Wait => Action::wait(0),
                OpDecl::SetInt { slot, width, value } => {
                    Action::set_int(lookup(&what, slot)?, *width, *value)
                }
                OpDecl::SetFloat { slot, value } => Action::set_float(lookup(&what, slot)?, *value),
                OpDecl::Lerp {
                    slot,
                    ease,
                    span_ms,
                    tween,
                } => Action::lerp(lookup(&what, slot)?, *tween, *ease, *span_ms),
            };
            actions.push(action.then_wait(decl.duration_ms));
        }

        let background = self
            .background
            .as_deref()
            .map(|name| lookup("background", name))
            .transpose()?;

        let timeline = Timeline::new(actions);
        timeline.validate_for(&state)?;
        tracing::debug!(
            slots = state.len(),
            actions = timeline.len(),
            total_ms = timeline.total_duration_ms(),
            "script prepared"
        );

        Ok(Prepared {
            state,
            timeline,
            background,
        })
    }

    /// Background turns from opaque red to opaque green over one second with
    /// ease-in-out, then holds for another second.
    pub fn demo() -> Self {
        let red = Argb(0xffff_0000);
        let green = Argb(0xff00_ff00);
        Self {
            settings: RunSettings::default(),
            background: Some("bg_col".to_string()),
            slots: vec![
                SlotDecl {
                    name: "bg_col".to_string(),
                    init: SlotInit::Int {
                        width: Width::W4,
                        value: 0,
                    },
                },
                SlotDecl {
                    name: "sim_enable".to_string(),
                    init: SlotInit::Int {
                        width: Width::W1,
                        value: 0,
                    },
                },
                SlotDecl {
                    name: "sim_speed".to_string(),
                    init: SlotInit::Float { value: 0.0 },
                },
            ],
            actions: vec![
                ActionDecl {
                    duration_ms: 0,
                    op: OpDecl::SetInt {
                        slot: "bg_col".to_string(),
                        width: Width::W4,
                        value: u64::from(red.0),
                    },
                },
                ActionDecl {
                    duration_ms: 1000,
                    op: OpDecl::Lerp {
                        slot: "bg_col".to_string(),
                        ease: Ease::InOut,
                        span_ms: 1000,
                        tween: Tween::ColorRgb {
                            from: red,
                            to: green,
                        },
                    },
                },
                ActionDecl {
                    duration_ms: 1000,
                    op: OpDecl::Wait,
                },
                ActionDecl {
                    duration_ms: 0,
                    op: OpDecl::Wait,
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/doc.rs"]
mod tests;
