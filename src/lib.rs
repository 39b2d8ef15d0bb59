//! cuesheet plays timed action scripts against caller-owned animation state.
//!
//! A [`Timeline`] is an ordered list of [`Action`]s, each followed by a delay.
//! Played frame by frame, an action fires once its cumulative offset has
//! passed; a lerp action starts an eased value tween ([`ActiveLerp`]) that is
//! then re-evaluated every frame until it ends.
//!
//! # Frame loop
//!
//! 1. **Poll**: the [`Host`] may cancel the run
//! 2. **Fire**: every due action runs, possibly several in one frame
//! 3. **Evaluate**: active lerps write their eased values into [`AnimState`]
//! 4. **Render + present**: a [`Scene`] draws the state, the host presents
//!
//! Targets are [`SlotId`] handles into an [`AnimState`] arena, and timelines are
//! validated against that arena before the first frame.
//!
//! See [`crate::guide`] for a longer walkthrough.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod host;
mod render;
mod script;
mod settings;
mod state;
mod timeline;

/// Standalone walkthrough of cuesheet's concepts and script format.
pub mod guide;

pub use animation::blend::{Blended, Lerp, Tween, ValueType};
pub use animation::ease::Ease;
pub use animation::lerp::{ActiveLerp, LerpRegistry};
pub use foundation::core::{Affine, Argb, Canvas, Millis, Point, Rect, Vec2};
pub use foundation::error::{CueError, CueResult};
pub use host::{SimulatedHost, WallClockHost};
pub use render::composite::{Rgba8, over};
pub use render::scene::{BackgroundFill, Scene};
pub use render::surface::{PixelSurface, Surface};
pub use script::doc::{ActionDecl, OpDecl, Prepared, ScriptDoc, SlotDecl, SlotInit};
pub use settings::RunSettings;
pub use state::slots::{AnimState, SlotId, SlotKind, SlotValue, Width};
pub use timeline::action::{Action, ActionKind, SetImmediate, SetValue, StartLerp};
pub use timeline::run::{Host, RunOutcome, run};
pub use timeline::scheduler::{FrameReport, Scheduler};
pub use timeline::sequence::{Timeline, TimelineBuilder};
