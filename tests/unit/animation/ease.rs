use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn non_decreasing_on_unit_interval() {
    for ease in Ease::ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=1000 {
            let y = ease.apply(f64::from(i) / 1000.0);
            assert!(y >= prev, "{ease:?} decreased at step {i}");
            assert!((0.0..=1.0).contains(&y));
            prev = y;
        }
    }
}

#[test]
fn in_out_is_point_symmetric() {
    for i in 0..=100 {
        let t = f64::from(i) / 100.0;
        let sum = Ease::InOut.apply(t) + Ease::InOut.apply(1.0 - t);
        assert!((sum - 1.0).abs() < 1e-12, "t={t} sum={sum}");
    }
    assert_eq!(Ease::InOut.apply(0.5), 0.5);
}

#[test]
fn formulas_match_at_quarter() {
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
    assert_eq!(Ease::In.apply(0.25), 0.0625);
    assert_eq!(Ease::Out.apply(0.25), 0.4375);
    assert_eq!(Ease::InOut.apply(0.25), 0.15625);
}

#[test]
fn out_of_range_inputs_clamp() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn serde_names_and_aliases() {
    let e: Ease = serde_json::from_str("\"in_out\"").unwrap();
    assert_eq!(e, Ease::InOut);
    let e: Ease = serde_json::from_str("\"ease_out\"").unwrap();
    assert_eq!(e, Ease::Out);
    assert_eq!(serde_json::to_string(&Ease::In).unwrap(), "\"in\"");
}
