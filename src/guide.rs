//! # cuesheet guide
//!
//! A walkthrough of how a script becomes slot writes and pixels. For CLI usage,
//! start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`AnimState`](crate::AnimState): caller-owned arena of named variable slots
//! - [`SlotId`](crate::SlotId): stable handle to one slot
//! - [`Action`](crate::Action): wait, set a literal, or start a lerp; followed by a delay
//! - [`Timeline`](crate::Timeline): immutable, ordered action list
//! - [`Scheduler`](crate::Scheduler): cursor + event time + active lerps
//! - [`run`](crate::run): the blocking frame loop driven by a [`Host`](crate::Host)
//!
//! ---
//!
//! ## Timing
//!
//! An action's `duration_ms` is the gap between it and the next action, not the
//! length of its effect. The first action is due at the run's start time; action
//! `i` is due at the sum of the delays before it ([`Timeline::schedule`]).
//!
//! Each frame the scheduler fires every action whose due time is `<= now`. If the
//! host is slow, several actions fire in one frame, each with its own due time.
//! A lerp started this way is anchored at its due time, so it may already be
//! part-way through when first evaluated.
//!
//! The run completes on the frame that fires the last action. Lerps still running
//! at that point are dropped, so scripts usually end with a wait that covers the
//! longest lerp, then a zero-length wait.
//!
//! [`Timeline::schedule`]: crate::Timeline::schedule
//!
//! ---
//!
//! ## Lerps
//!
//! A lerp covers `[start, start + span_ms]`. Its progress is `0` before `start`,
//! `1` from `end` on, and linear in between; the [`Ease`](crate::Ease) remaps it,
//! then the [`Tween`](crate::Tween) blends:
//!
//! - `integer`: floating-point blend truncated toward zero
//! - `float`: plain floating-point blend
//! - `color_rgb`: four 8-bit channels blended with an 8-bit weight
//! - `color_hsv`: the `color_rgb` blend of the raw endpoint bits, whose result
//!   bytes are then read as alpha/hue/saturation/brightness and converted
//!
//! Lerps are evaluated in the order they started, so the newest one wins when
//! two share a slot. A lerp writes its final value on the first frame at or past
//! its end, then is removed.
//!
//! ---
//!
//! ## Script JSON
//!
//! ```json
//! {
//!   "background": "bg_col",
//!   "slots": [ { "name": "bg_col", "type": "int", "width": 4, "value": 0 } ],
//!   "actions": [
//!     { "op": "set_int", "slot": "bg_col", "width": 4, "value": 4294901760 },
//!     { "op": "lerp", "slot": "bg_col", "ease": "in_out", "span_ms": 1000,
//!       "duration_ms": 1000,
//!       "tween": { "type": "color_rgb", "from": 4294901760, "to": 4278255360 } },
//!     { "op": "wait", "duration_ms": 1000 },
//!     { "op": "wait" }
//!   ]
//! }
//! ```
//!
//! [`ScriptDoc::prepare`](crate::ScriptDoc::prepare) declares the slots, resolves
//! names to handles and validates every action: set widths must equal the slot
//! width, color tweens need a 4-byte slot, float values need a float slot.
//!
//! ---
//!
//! ## Minimal example
//!
//! ```
//! use cuesheet::*;
//!
//! let mut state = AnimState::new();
//! let x = state.add_int("x", Width::W4, 0).unwrap();
//! let timeline = TimelineBuilder::new()
//!     .lerp(x, Tween::Integer { from: 0, to: 100 }, Ease::Linear, 1000, 1000)
//!     .wait(0)
//!     .build(&state)
//!     .unwrap();
//!
//! let mut surface = PixelSurface::new(Canvas { width: 8, height: 8 }).unwrap();
//! let mut host = SimulatedHost::new(Millis(0), 250);
//! let outcome = run(&mut surface, &timeline, &mut state, &mut host, &mut ()).unwrap();
//!
//! assert!(outcome.is_completed());
//! assert_eq!(state.int(x), Some(100));
//! ```
