use super::*;
use crate::{foundation::core::Canvas, render::surface::PixelSurface};

fn surface() -> PixelSurface {
    PixelSurface::new(Canvas {
        width: 1,
        height: 1,
    })
    .unwrap()
}

#[test]
fn simulated_clock_advances_per_presented_frame() {
    let s = surface();
    let mut host = SimulatedHost::new(Millis(100), 16);
    assert_eq!(host.now(), Millis(100));
    assert_eq!(host.now(), Millis(100));
    host.present(&s);
    host.present(&s);
    assert_eq!(host.now(), Millis(132));
    assert_eq!(host.frames_presented(), 2);
    assert_eq!(host.clock(), Millis(132));
}

#[test]
fn simulated_cancellation_points() {
    let s = surface();
    let mut host = SimulatedHost::new(Millis(0), 10).with_max_frames(2);
    assert!(host.keep_running());
    host.present(&s);
    assert!(host.keep_running());
    host.present(&s);
    assert!(!host.keep_running());

    let mut host = SimulatedHost::new(Millis(0), 10).cancel_at(1);
    assert!(host.keep_running());
    host.present(&s);
    assert!(!host.keep_running());
}

#[test]
fn wall_clock_is_monotonic() {
    let s = surface();
    let mut host = WallClockHost::new().paced(1);
    let a = host.now();
    host.present(&s);
    host.present(&s);
    let b = host.now();
    assert!(b >= a);
    assert!(host.keep_running());
}
