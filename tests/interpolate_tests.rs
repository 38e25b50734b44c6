// Host-side tests for breakpoint curves and scroll progress.

use landing_core::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn fade() -> Curve {
    Curve::new(&[(0.0, 1.0), (0.2, 0.9), (0.5, 0.0)]).unwrap()
}

#[test]
fn curve_hits_every_breakpoint_exactly() {
    let curves = [
        Curve::new(&[(0.0, 0.0), (1.0, 50.0)]).unwrap(),
        fade(),
        Curve::new(&[(0.0, 0.0), (0.3, 0.5), (0.8, 2.0)]).unwrap(),
        Curve::new(&[(0.25, 7.0)]).unwrap(),
    ];
    for curve in &curves {
        for (x, y) in curve.points() {
            assert_eq!(curve.eval(*x), *y, "breakpoint ({x}, {y})");
        }
    }
}

#[test]
fn curve_interpolates_linearly_between_breakpoints() {
    let c = fade();
    assert!(close(c.eval(0.1), 0.95));
    assert!(close(c.eval(0.35), 0.45));
    let drift = Curve::new(&[(0.0, 0.0), (1.0, 50.0)]).unwrap();
    assert!(close(drift.eval(0.5), 25.0));
}

#[test]
fn curve_holds_boundary_values_outside_domain() {
    let c = fade();
    for p in [-10.0, -0.001, f32::NEG_INFINITY] {
        assert_eq!(c.eval(p), 1.0);
    }
    for p in [0.5, 0.51, 1.0, 3.0, f32::INFINITY] {
        assert_eq!(c.eval(p), 0.0);
    }
    assert_eq!(c.eval(f32::NAN), 1.0);
}

#[test]
fn curve_with_repeated_input_takes_later_value() {
    let step = Curve::new(&[(0.0, 0.0), (0.5, 1.0), (0.5, 2.0), (1.0, 3.0)]).unwrap();
    assert_eq!(step.eval(0.5), 2.0);
    assert!(close(step.eval(0.25), 0.5));
    assert!(close(step.eval(0.75), 2.5));
}

#[test]
fn curve_rejects_bad_breakpoints() {
    assert_eq!(Curve::new(&[]), Err(CurveError::Empty));
    assert_eq!(
        Curve::new(&[(0.0, 0.0), (0.5, 1.0), (0.4, 2.0)]),
        Err(CurveError::Unordered(2))
    );
    assert!(Curve::new(&[(f32::NAN, 0.0)]).is_err());
}

#[test]
fn constant_curve_is_flat() {
    let c = Curve::constant(3.5);
    for p in [-1.0, 0.0, 0.5, 2.0] {
        assert_eq!(c.eval(p), 3.5);
    }
}

#[test]
fn clamp_progress_pins_overscroll() {
    assert_eq!(clamp_progress(-0.3), 0.0);
    assert_eq!(clamp_progress(1.7), 1.0);
    assert_eq!(clamp_progress(0.42), 0.42);
    assert_eq!(clamp_progress(f32::NAN), 0.0);
}

#[test]
fn scroll_progress_spans_element_height() {
    // hero at the very top, 800px tall
    assert_eq!(scroll_progress(0.0, 0.0, 800.0), 0.0);
    assert!(close(scroll_progress(200.0, 0.0, 800.0), 0.25));
    assert_eq!(scroll_progress(800.0, 0.0, 800.0), 1.0);
    // rubber-band overscroll on either side
    assert_eq!(scroll_progress(-120.0, 0.0, 800.0), 0.0);
    assert_eq!(scroll_progress(5000.0, 0.0, 800.0), 1.0);
    // element further down the page
    assert!(close(scroll_progress(300.0, 100.0, 400.0), 0.5));
}

#[test]
fn scroll_progress_handles_collapsed_element() {
    assert_eq!(scroll_progress(10.0, 50.0, 0.0), 0.0);
    assert_eq!(scroll_progress(50.0, 50.0, 0.0), 1.0);
    assert_eq!(scroll_progress(60.0, 50.0, -5.0), 1.0);
}

#[test]
fn easings_are_anchored_and_monotonic() {
    for ease in [ease_out_cubic as fn(f32) -> f32, ease_in_out_cubic] {
        assert_eq!(ease(0.0), 0.0);
        assert!(close(ease(1.0), 1.0));
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease(i as f32 / 100.0);
            assert!(v >= prev, "easing must not go backwards at {i}");
            prev = v;
        }
    }
    assert!(close(ease_in_out_cubic(0.5), 0.5));
    assert!(ease_out_cubic(0.5) > 0.5);
}
