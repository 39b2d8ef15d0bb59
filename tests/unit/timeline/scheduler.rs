use super::*;
use crate::{
    animation::blend::Tween,
    animation::ease::Ease,
    foundation::core::Argb,
    state::slots::{SlotId, Width},
    timeline::action::Action,
};

fn int_slot() -> (AnimState, SlotId) {
    let mut st = AnimState::new();
    let x = st.add_int("x", Width::W4, 0).unwrap();
    (st, x)
}

#[test]
fn fires_nothing_before_first_due_time() {
    let (mut st, x) = int_slot();
    let t = Timeline::new(vec![Action::set_int(x, Width::W4, 9)]);
    let mut s = Scheduler::new(&t, &mut st, Millis(1000)).unwrap();
    let r = s.step(Millis(999));
    assert_eq!(r.fired, 0);
    assert!(!r.completed);
    assert_eq!(s.state().int(x), Some(0));

    let r = s.step(Millis(1000));
    assert_eq!(r.fired, 1);
    assert!(r.completed);
    assert_eq!(s.state().int(x), Some(9));
}

#[test]
fn slow_frames_fire_a_catch_up_burst() {
    let (mut st, x) = int_slot();
    let t = Timeline::new(vec![
        Action::set_int(x, Width::W4, 1).then_wait(10),
        Action::set_int(x, Width::W4, 2).then_wait(10),
        Action::set_int(x, Width::W4, 3).then_wait(10),
        Action::set_int(x, Width::W4, 4).then_wait(10),
    ]);
    let mut s = Scheduler::new(&t, &mut st, Millis(0)).unwrap();

    let r = s.step(Millis(0));
    assert_eq!((r.fired, r.cursor), (1, 1));

    // 25 ms later: actions due at 10 and 20 both fire in order.
    let r = s.step(Millis(25));
    assert_eq!((r.fired, r.cursor), (2, 3));
    assert_eq!(s.state().int(x), Some(3));
    assert_eq!(s.event_time(), Millis(30));

    let r = s.step(Millis(1000));
    assert_eq!(r.fired, 1);
    assert!(r.completed);
    assert_eq!(s.state().int(x), Some(4));
}

#[test]
fn lerp_starts_at_scheduled_time_not_frame_time() {
    let (mut st, x) = int_slot();
    let t = Timeline::new(vec![
        Action::wait(100),
        Action::lerp(x, Tween::Integer { from: 0, to: 100 }, Ease::Linear, 100),
        Action::wait(0),
    ]);
    let mut s = Scheduler::new(&t, &mut st, Millis(0)).unwrap();
    s.step(Millis(0));
    // The lerp was due at 100 but its first frame is at 150: already halfway.
    let r = s.step(Millis(150));
    assert_eq!(r.fired, 2);
    assert_eq!(s.state().int(x), Some(50));
    assert_eq!(s.lerps().iter().next().unwrap().start(), Millis(100));
}

#[test]
fn set_then_lerp_overwrites_from_its_own_endpoints() {
    let (mut st, x) = int_slot();
    let t = Timeline::new(vec![
        Action::set_int(x, Width::W4, 5).then_wait(250),
        Action::lerp(x, Tween::Integer { from: 0, to: 100 }, Ease::Linear, 1000)
            .then_wait(1000),
        Action::wait(0),
    ]);
    let mut s = Scheduler::new(&t, &mut st, Millis(0)).unwrap();

    s.step(Millis(0));
    assert_eq!(s.state().int(x), Some(5));

    let mut seen = Vec::new();
    for now in [250, 500, 750, 1000, 1250] {
        s.step(Millis(now));
        seen.push(s.state().int(x).unwrap());
    }
    assert_eq!(seen, [0, 25, 50, 75, 100]);
    assert!(s.is_complete());
    assert!(s.lerps().is_empty());
}

#[test]
fn overlapping_lerps_later_insert_wins() {
    let mut st = AnimState::new();
    let bg = st.add_color("bg", Argb(0)).unwrap();
    let t = Timeline::new(vec![
        Action::lerp(
            bg,
            Tween::ColorRgb {
                from: Argb(0xff00_0000),
                to: Argb(0xffff_ffff),
            },
            Ease::Linear,
            1000,
        )
        .then_wait(100),
        Action::lerp(
            bg,
            Tween::ColorRgb {
                from: Argb(0xff00_00ff),
                to: Argb(0xff00_00ff),
            },
            Ease::Linear,
            500,
        ),
        Action::wait(0),
    ]);
    let mut s = Scheduler::new(&t, &mut st, Millis(0)).unwrap();
    s.step(Millis(0));
    assert_eq!(s.state().color(bg), Some(Argb(0xff00_0000)));

    let r = s.step(Millis(300));
    assert_eq!(r.active_lerps, 2);
    assert_eq!(s.state().color(bg), Some(Argb(0xff00_00ff)));

    // Second lerp ended at 600: it writes its terminal value one last time,
    // then the first lerp takes the slot back.
    s.step(Millis(700));
    assert_eq!(s.lerps().len(), 1);
    assert_eq!(s.state().color(bg), Some(Argb(0xff00_00ff)));
    s.step(Millis(800));
    assert_ne!(s.state().color(bg), Some(Argb(0xff00_00ff)));
}

#[test]
fn construction_rejects_invalid_timeline() {
    let (mut st, x) = int_slot();
    let t = Timeline::new(vec![Action::set_float(x, 1.0)]);
    assert!(Scheduler::new(&t, &mut st, Millis(0)).is_err());
}

#[test]
fn empty_timeline_is_complete_immediately() {
    let (mut st, _) = int_slot();
    let t = Timeline::default();
    let s = Scheduler::new(&t, &mut st, Millis(5)).unwrap();
    assert!(s.is_complete());
    assert_eq!(s.start_time(), Millis(5));
    assert_eq!(s.cursor(), 0);
}
