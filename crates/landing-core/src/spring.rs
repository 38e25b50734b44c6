//! Mass-spring-damper smoothing for scroll-driven channels.
//!
//! The step is a pure function: it takes the previous [`SpringState`] and
//! returns the next one, so a channel can be replayed deterministically.

use crate::constants::{DEFAULT_REST_DELTA, DEFAULT_REST_SPEED, MAX_FRAME_DT, MAX_SPRING_SUBSTEP};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32, // distance to target considered settled
    pub rest_speed: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: DEFAULT_REST_DELTA,
            rest_speed: DEFAULT_REST_SPEED,
        }
    }

    pub const fn with_rest_delta(mut self, rest_delta: f32) -> Self {
        self.rest_delta = rest_delta;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringState {
    pub position: f32,
    pub velocity: f32,
    pub at_rest: bool,
}

impl SpringState {
    /// A spring sitting still on `value`.
    pub fn settled(value: f32) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            at_rest: true,
        }
    }
}

/// Sanitize a frame delta: negative or non-finite become 0, stalls are capped.
#[inline]
pub fn frame_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() && dt_sec > 0.0 {
        dt_sec.min(MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Advance `state` toward `target` by `dt_sec` seconds.
pub fn step(config: &SpringConfig, state: SpringState, target: f32, dt_sec: f32) -> SpringState {
    let dt = frame_dt(dt_sec);
    if dt == 0.0 {
        return state;
    }
    if state.at_rest && (target - state.position).abs() < config.rest_delta {
        return SpringState::settled(target);
    }
    let mass = if config.mass > 0.0 { config.mass } else { 1.0 };
    let k = config.stiffness;
    let c = config.damping;

    let substeps = (dt / MAX_SPRING_SUBSTEP).ceil().max(1.0) as u32;
    let h = dt / substeps as f32;
    let mut x = state.position;
    let mut v = state.velocity;
    for _ in 0..substeps {
        let a = (k * (target - x) - c * v) / mass;
        v += a * h;
        x += v * h;
    }

    if (target - x).abs() < config.rest_delta && v.abs() < config.rest_speed {
        return SpringState::settled(target);
    }
    SpringState {
        position: x,
        velocity: v,
        at_rest: false,
    }
}
