// Host-side tests for looping hero decorations, stat counters and the carousel.

use landing_core::constants::*;
use landing_core::*;
use std::time::Duration;

#[test]
fn looping_tween_rests_before_delay_and_peaks_mid_cycle() {
    let bob = scroll_indicator_bob();
    assert_eq!(bob.value_at(0.0), 0.0);
    assert_eq!(bob.value_at(1.9), 0.0);
    let peak = bob.delay + bob.duration / 2.0;
    assert!((bob.value_at(peak) - INDICATOR_BOB_PX).abs() < 1e-4);
    // resting between repeats
    assert_eq!(bob.value_at(bob.delay + bob.duration + 0.25), 0.0);
}

#[test]
fn looping_tween_repeats() {
    let tween = LoopingTween {
        amplitude: -20.0,
        duration: 4.0,
        delay: 1.0,
        repeat_delay: 0.0,
    };
    for cycle in 0..5 {
        let t = 1.0 + cycle as f32 * 4.0 + 1.3;
        assert!((tween.value_at(t) - tween.value_at(2.3)).abs() < 1e-3);
    }
    for i in 0..400 {
        let v = tween.value_at(i as f32 * 0.05);
        assert!((-20.0..=0.0).contains(&v));
    }
}

#[test]
fn floating_icons_fade_in_then_drift() {
    let icons = default_floating_icons();
    assert_eq!(icons.len(), 6);
    let third = icons[2];
    assert_eq!(third.delay, 1.0);

    let before = third.pose_at(0.5, false);
    assert_eq!(before.opacity, 0.0);
    assert_eq!((before.offset.x, before.offset.y), (0.0, 0.0));

    let faded = third.pose_at(third.delay + ICON_FADE_IN_SEC, false);
    assert!((faded.opacity - ICON_REST_OPACITY).abs() < 1e-6);

    let drift_start = third.delay + ICON_DRIFT_START_SEC;
    let x_half = (ICON_DRIFT_X_BASE_SEC + ICON_DRIFT_X_STEP_SEC * 2.0) / 2.0;
    let drifting = third.pose_at(drift_start + x_half, false);
    assert!((drifting.offset.x - third.drift.x).abs() < 1e-3);
}

#[test]
fn reduced_motion_icons_hold_rest_pose() {
    for icon in default_floating_icons() {
        for t in [0.0, 1.0, 7.5, 100.0] {
            let pose = icon.pose_at(t, true);
            assert_eq!((pose.offset.x, pose.offset.y), (0.0, 0.0));
            assert_eq!(pose.opacity, ICON_REST_OPACITY);
        }
    }
}

#[test]
fn count_up_eases_to_exact_target() {
    let mut count = CountUp::new(15_000);
    assert_eq!(count.value(), 0);
    count.tick(Duration::from_millis(500));
    assert_eq!(count.value(), 0, "ticks before start are ignored");

    assert!(count.start());
    assert_eq!(count.value(), 0);
    let mut prev = 0;
    for _ in 0..40 {
        count.tick(Duration::from_millis(50));
        let v = count.value();
        assert!(v >= prev);
        assert!(v <= 15_000);
        prev = v;
    }
    assert!(count.is_finished());
    assert_eq!(count.value(), 15_000);
}

#[test]
fn count_up_front_loads_progress() {
    let mut count = CountUp::new(1000);
    count.start();
    count.tick(COUNTER_DURATION / 2);
    // ease-out-cubic at 0.5 is 0.875
    assert_eq!(count.value(), 875);
}

#[test]
fn count_up_starts_once() {
    let mut count = CountUp::new(99);
    assert!(count.start());
    count.tick(Duration::from_millis(1500));
    let mid = count.value();
    assert!(!count.start());
    assert_eq!(count.value(), mid);
    count.finish();
    assert_eq!(count.value(), 99);
}

#[test]
fn thousands_separators() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(99), "99");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(15_000), "15,000");
    assert_eq!(format_thousands(2_500_000), "2,500,000");
    assert_eq!(format_thousands(123_456_789), "123,456,789");
}

#[test]
fn carousel_autoplays_only_in_view() {
    let mut c = Carousel::new(3);
    assert!(!c.tick(AUTOPLAY_INTERVAL * 2));
    assert_eq!(c.current(), 0);

    c.set_in_view(true);
    assert!(!c.tick(Duration::from_millis(4900)));
    assert!(c.tick(Duration::from_millis(100)));
    assert_eq!(c.current(), 1);
    c.tick(AUTOPLAY_INTERVAL);
    c.tick(AUTOPLAY_INTERVAL);
    assert_eq!(c.current(), 0, "wraps after the last slide");
}

#[test]
fn carousel_manual_navigation_wraps_and_pauses() {
    let mut c = Carousel::new(4);
    c.set_in_view(true);
    c.previous();
    assert_eq!(c.current(), 3);
    assert!(!c.is_auto_playing());
    c.next();
    assert_eq!(c.current(), 0);
    c.go_to(2);
    assert_eq!(c.current(), 2);
    c.go_to(9);
    assert_eq!(c.current(), 2, "out of range index is ignored");

    assert!(!c.tick(Duration::from_secs(9)));
    assert_eq!(c.current(), 2);
    assert!(!c.is_auto_playing());
    c.tick(Duration::from_secs(1));
    assert!(c.is_auto_playing());
    assert!(!c.tick(Duration::from_millis(4999)));
    assert!(c.tick(Duration::from_millis(1)));
    assert_eq!(c.current(), 3);
}

#[test]
fn carousel_interaction_restarts_resume_countdown() {
    let mut c = Carousel::new(2);
    c.set_in_view(true);
    c.next();
    c.tick(Duration::from_secs(8));
    c.next();
    c.tick(Duration::from_secs(8));
    assert!(!c.is_auto_playing());
    c.tick(Duration::from_secs(2));
    assert!(c.is_auto_playing());
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = Carousel::new(0);
    c.set_in_view(true);
    c.next();
    c.previous();
    c.go_to(0);
    assert!(!c.tick(Duration::from_secs(60)));
    assert_eq!(c.current(), 0);
    assert!(c.is_empty());
}

#[test]
fn carousel_without_autoplay_never_advances() {
    let mut c = Carousel::without_autoplay(3);
    c.set_in_view(true);
    assert!(!c.tick(Duration::from_secs(60)));
    assert_eq!(c.current(), 0);
    c.next();
    assert_eq!(c.current(), 1);
    c.tick(Duration::from_secs(60));
    assert!(!c.is_auto_playing());
    assert_eq!(c.current(), 1);
}
