use super::*;

#[test]
fn integer_blend_truncates_toward_zero() {
    let up = Tween::Integer { from: 0, to: 100 };
    assert_eq!(up.blend(0.0), Blended::Int(0));
    assert_eq!(up.blend(0.333), Blended::Int(33));
    assert_eq!(up.blend(0.999), Blended::Int(99));
    assert_eq!(up.blend(1.0), Blended::Int(100));

    let down = Tween::Integer { from: 0, to: -100 };
    assert_eq!(down.blend(0.255), Blended::Int(-25));
}

#[test]
fn integer_blend_handles_full_range() {
    let wide = Tween::Integer {
        from: i32::MIN,
        to: i32::MAX,
    };
    assert_eq!(wide.blend(0.0), Blended::Int(i32::MIN));
    assert_eq!(wide.blend(1.0), Blended::Int(i32::MAX));
}

#[test]
fn float_blend_is_exact_at_endpoints() {
    let tw = Tween::Float {
        from: 0.1,
        to: 7.3,
    };
    assert_eq!(tw.blend(0.0), Blended::Float(0.1));
    assert_eq!(tw.blend(1.0), Blended::Float(7.3));
    assert_eq!(
        Tween::Float { from: 0.0, to: 2.0 }.blend(0.25),
        Blended::Float(0.5)
    );
}

#[test]
fn rgb_blend_quantizes_coefficient() {
    let tw = Tween::ColorRgb {
        from: Argb(0xff00_0000),
        to: Argb(0xffff_ffff),
    };
    assert_eq!(tw.blend(0.0), Blended::Color(Argb(0xff00_0000)));
    assert_eq!(tw.blend(1.0), Blended::Color(Argb(0xffff_ffff)));
    // 0.5 * 255 = 127.5 -> weight 127 -> 255 * 127 / 255 = 127
    assert_eq!(tw.blend(0.5), Blended::Color(Argb(0xff7f_7f7f)));
}

#[test]
fn rgb_blend_moves_alpha_too() {
    let tw = Tween::ColorRgb {
        from: Argb(0x0000_0000),
        to: Argb(0xff00_0000),
    };
    let Blended::Color(c) = tw.blend(1.0) else {
        panic!("expected color");
    };
    assert!(c.is_opaque());
}

#[test]
fn hsv_blend_reinterprets_blended_channels() {
    // Endpoints are packed (a, h, s, v). Hue 0 -> hue 0 keeps red throughout.
    let tw = Tween::ColorHsv {
        from: Argb::from_channels(0xff, 0, 0xff, 0),
        to: Argb::from_channels(0xff, 0, 0xff, 0xff),
    };
    assert_eq!(tw.blend(0.0), Blended::Color(Argb(0xff00_0000)));
    assert_eq!(tw.blend(1.0), Blended::Color(Argb(0xffff_0000)));

    // The midpoint is the AHSV conversion of the channel-wise blend, not of any
    // interpolation through HSV space.
    let [a, h, s, v] = Argb::lerp(
        &Argb::from_channels(0xff, 0, 0xff, 0),
        &Argb::from_channels(0xff, 0, 0xff, 0xff),
        0.5,
    )
    .channels();
    assert_eq!(tw.blend(0.5), Blended::Color(Argb::from_ahsv(a, h, s, v)));
}

#[test]
fn value_type_follows_variant() {
    assert_eq!(
        Tween::Integer { from: 0, to: 1 }.value_type(),
        ValueType::Integer
    );
    assert_eq!(
        Tween::ColorHsv {
            from: Argb(0),
            to: Argb(0)
        }
        .value_type(),
        ValueType::ColorHsv
    );
}

#[test]
fn tween_json_is_tagged_by_type() {
    let tw: Tween =
        serde_json::from_str(r#"{"type":"color_rgb","from":4294901760,"to":4278255360}"#).unwrap();
    assert_eq!(
        tw,
        Tween::ColorRgb {
            from: Argb(0xffff_0000),
            to: Argb(0xff00_ff00)
        }
    );
}
