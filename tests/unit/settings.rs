use super::*;

#[test]
fn defaults_are_valid() {
    let s = RunSettings::default();
    s.validate().unwrap();
    assert_eq!(s.frame_interval_ms, 16);
    assert!(s.clear.is_opaque());
}

#[test]
fn zero_values_are_rejected() {
    let mut s = RunSettings {
        frame_interval_ms: 0,
        ..RunSettings::default()
    };
    assert!(s.validate().is_err());
    s.frame_interval_ms = 1;
    s.max_frames = 0;
    assert!(s.validate().is_err());
    s.max_frames = 1;
    s.canvas.height = 0;
    assert!(s.validate().is_err());
}

#[test]
fn partial_json_fills_defaults() {
    let s: RunSettings = serde_json::from_str(r#"{"frame_interval_ms": 40}"#).unwrap();
    assert_eq!(s.frame_interval_ms, 40);
    assert_eq!(s.max_frames, RunSettings::default().max_frames);
    assert!(serde_json::from_str::<RunSettings>(r#"{"fps": 30}"#).is_err());
}
