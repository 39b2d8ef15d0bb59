use super::*;
use crate::{
    animation::blend::Tween,
    animation::ease::Ease,
    foundation::core::{Argb, Canvas},
    host::SimulatedHost,
    render::scene::BackgroundFill,
    render::surface::PixelSurface,
    state::slots::Width,
    timeline::action::Action,
};

fn surface() -> PixelSurface {
    PixelSurface::new(Canvas {
        width: 4,
        height: 4,
    })
    .unwrap()
}

#[test]
fn completes_and_renders_last_frame() {
    let mut st = AnimState::new();
    let bg = st.add_color("bg_col", Argb(0)).unwrap();
    let t = Timeline::new(vec![
        Action::set_int(bg, Width::W4, 0xffff_0000),
        Action::lerp(
            bg,
            Tween::ColorRgb {
                from: Argb(0xffff_0000),
                to: Argb(0xff00_ff00),
            },
            Ease::InOut,
            1000,
        )
        .then_wait(1000),
        Action::wait(1000),
        Action::wait(0),
    ]);

    let mut s = surface();
    let mut host = SimulatedHost::new(Millis(0), 100);
    let out = run(&mut s, &t, &mut st, &mut host, &mut BackgroundFill::new(bg)).unwrap();

    assert!(out.is_completed());
    assert_eq!(st.color(bg), Some(Argb(0xff00_ff00)));
    assert_eq!(s.pixel(0, 0), Some(Argb(0xff00_ff00)));
    // Frames at 0, 100, ..., 2000.
    assert_eq!(host.frames_presented(), 21);
}

#[test]
fn cancellation_returns_cancelled_and_keeps_writes() {
    let mut st = AnimState::new();
    let x = st.add_int("x", Width::W4, 0).unwrap();
    let t = Timeline::new(vec![
        Action::set_int(x, Width::W4, 1).then_wait(100),
        Action::set_int(x, Width::W4, 2),
    ]);

    let mut s = surface();
    let mut host = SimulatedHost::new(Millis(0), 50).cancel_at(1);
    let out = run(&mut s, &t, &mut st, &mut host, &mut ()).unwrap();
    assert_eq!(out, RunOutcome::Cancelled);
    assert!(!out.is_completed());
    assert_eq!(st.int(x), Some(1));
}

#[test]
fn empty_timeline_completes_without_frames() {
    let mut st = AnimState::new();
    let mut s = surface();
    let mut host = SimulatedHost::new(Millis(0), 10);
    let out = run(&mut s, &Timeline::default(), &mut st, &mut host, &mut ()).unwrap();
    assert!(out.is_completed());
    assert_eq!(host.frames_presented(), 0);
}

#[test]
fn invalid_timeline_is_an_error_before_any_frame() {
    let mut st = AnimState::new();
    let f = st.add_float("f", 0.0).unwrap();
    let t = Timeline::new(vec![Action::set_int(f, Width::W4, 1)]);
    let mut s = surface();
    let mut host = SimulatedHost::new(Millis(0), 10);
    assert!(run(&mut s, &t, &mut st, &mut host, &mut ()).is_err());
    assert_eq!(host.frames_presented(), 0);
}
