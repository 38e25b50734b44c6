// Host-side tests for the spring filter and the hero channel set.

use landing_core::*;

const FRAME: f32 = 1.0 / 60.0;

fn settle(animator: &mut HeroAnimator, p: f32) -> HeroFrame {
    let mut frame = animator.sample(p, FRAME);
    for _ in 0..600 {
        frame = animator.sample(p, FRAME);
    }
    frame
}

#[test]
fn spring_converges_on_step_target() {
    let cfg = SpringConfig::new(150.0, 30.0).with_rest_delta(0.001);
    let mut state = SpringState::settled(0.0);
    for _ in 0..600 {
        state = spring::step(&cfg, state, 30.0, FRAME);
        assert!(state.position.is_finite());
    }
    assert!(state.at_rest);
    assert_eq!(state.position, 30.0);
}

#[test]
fn spring_lags_behind_a_jump() {
    let cfg = SpringConfig::new(120.0, 25.0);
    let state = spring::step(&cfg, SpringState::settled(0.0), 50.0, FRAME);
    assert!(state.position > 0.0 && state.position < 50.0);
    assert!(!state.at_rest);
}

#[test]
fn spring_ignores_zero_and_invalid_dt() {
    let cfg = SpringConfig::new(120.0, 25.0);
    let moving = SpringState {
        position: 3.0,
        velocity: 4.0,
        at_rest: false,
    };
    for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert_eq!(spring::step(&cfg, moving, 10.0, dt), moving);
    }
}

#[test]
fn spring_survives_long_stalls() {
    let cfg = SpringConfig::new(150.0, 30.0);
    let mut state = SpringState::settled(0.0);
    for dt in [2.0, 0.5, 10.0, 0.001, 5.0] {
        state = spring::step(&cfg, state, 1.0, dt);
        assert!(state.position.is_finite());
        assert!(state.position.abs() < 10.0);
    }
}

#[test]
fn default_table_matches_hero_choreography() {
    let channels = default_hero_channels();
    assert_eq!(channels.len(), ChannelId::COUNT);
    for id in ChannelId::ALL {
        assert!(channels.iter().any(|c| c.id == id), "missing {}", id.name());
    }
    let title = channels.iter().find(|c| c.id == ChannelId::TitleY).unwrap();
    assert_eq!(title.unit, Unit::Percent);
    assert_eq!(title.curve.points(), &[(0.0, 0.0), (1.0, 30.0)]);
    let blur = channels.iter().find(|c| c.id == ChannelId::ContentBlur).unwrap();
    assert!(blur.spring.is_none());
    assert_eq!(blur.unit.suffix(), "px");
}

#[test]
fn first_sample_starts_on_target() {
    let mut animator = HeroAnimator::with_defaults(false);
    let frame = animator.sample(0.4, FRAME);
    assert!((frame[ChannelId::TitleY] - 12.0).abs() < 1e-4);
    assert!((frame[ChannelId::IconsY] - 20.0).abs() < 1e-4);
    assert!(animator.is_settled());
}

#[test]
fn out_of_range_progress_matches_boundary_output() {
    let mut low = HeroAnimator::with_defaults(true);
    let mut zero = HeroAnimator::with_defaults(true);
    let a = low.sample(-0.8, FRAME);
    let b = zero.sample(0.0, FRAME);
    for id in ChannelId::ALL {
        assert_eq!(a[id], b[id], "{}", id.name());
    }

    let mut high = HeroAnimator::with_defaults(true);
    let mut one = HeroAnimator::with_defaults(true);
    let a = high.sample(4.2, FRAME);
    let b = one.sample(1.0, FRAME);
    for id in ChannelId::ALL {
        assert_eq!(a[id], b[id], "{}", id.name());
    }
    assert_eq!(a.progress, 1.0);
}

#[test]
fn channels_share_one_sample_per_pass() {
    let mut animator = HeroAnimator::with_defaults(true);
    let frame = animator.sample(0.25, FRAME);
    assert_eq!(frame.progress, 0.25);
    for spec in default_hero_channels() {
        assert_eq!(frame[spec.id], spec.curve.eval(0.25), "{}", spec.id.name());
    }
}

#[test]
fn springs_smooth_a_fast_fling() {
    let mut animator = HeroAnimator::with_defaults(false);
    animator.sample(0.0, FRAME);
    let frame = animator.sample(1.0, FRAME);
    // unsprung channels jump, sprung channels lag
    assert_eq!(frame[ChannelId::ContentRotateX], -3.0);
    assert_eq!(frame[ChannelId::OverlayOpacity], 0.0);
    assert!(frame[ChannelId::TitleY] > 0.0 && frame[ChannelId::TitleY] < 30.0);
    assert!(frame[ChannelId::TitleOpacity] > 0.0);
    assert!(!animator.is_settled());

    let settled = settle(&mut animator, 1.0);
    assert_eq!(settled[ChannelId::TitleY], 30.0);
    assert_eq!(settled[ChannelId::IconsY], 50.0);
    assert_eq!(settled[ChannelId::TitleOpacity], 0.0);
    assert!((settled[ChannelId::ContentScale] - 0.85).abs() < 1e-6);
    assert!(animator.is_settled());
}

#[test]
fn reduced_motion_skips_smoothing() {
    let mut animator = HeroAnimator::with_defaults(true);
    assert!(animator.reduced_motion());
    animator.sample(0.0, FRAME);
    let frame = animator.sample(1.0, FRAME);
    assert_eq!(frame[ChannelId::TitleY], 30.0);
    assert_eq!(frame[ChannelId::ButtonsY], 45.0);
    assert_eq!(frame[ChannelId::SubtitleOpacity], 0.0);
    assert!(animator.is_settled());
}

#[test]
fn evaluate_is_a_pure_step() {
    let spec = default_hero_channels()
        .into_iter()
        .find(|c| c.id == ChannelId::SubtitleY)
        .unwrap();
    let start = SpringState::settled(0.0);
    let (v1, s1) = spec.evaluate(1.0, start, FRAME);
    let (v2, s2) = spec.evaluate(1.0, start, FRAME);
    assert_eq!(v1, v2);
    assert_eq!(s1, s2);
    assert_eq!(v1, s1.position);
}
