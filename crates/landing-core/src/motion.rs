//! Time-driven looping motion for the hero decorations.
//!
//! These loops run forever while the hero is mounted; with reduced motion they
//! report their resting pose instead.

use crate::constants::*;
use crate::interpolate::{ease_in_out_cubic, ease_out_cubic};
use glam::Vec2;

/// Keyframes `[0, amplitude, 0]`, eased per segment, repeated forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopingTween {
    pub amplitude: f32,
    pub duration: f32,
    pub delay: f32,
    pub repeat_delay: f32,
}

impl LoopingTween {
    pub fn value_at(&self, t_sec: f32) -> f32 {
        let local = t_sec - self.delay;
        if !local.is_finite() || local <= 0.0 || self.duration <= 0.0 {
            return 0.0;
        }
        let cycle = self.duration + self.repeat_delay.max(0.0);
        let phase = local % cycle;
        if phase >= self.duration {
            return 0.0;
        }
        let half = self.duration * 0.5;
        if phase < half {
            self.amplitude * ease_in_out_cubic(phase / half)
        } else {
            self.amplitude * (1.0 - ease_in_out_cubic((phase - half) / half))
        }
    }
}

pub fn scroll_indicator_bob() -> LoopingTween {
    LoopingTween {
        amplitude: INDICATOR_BOB_PX,
        duration: INDICATOR_BOB_SEC,
        delay: INDICATOR_BOB_DELAY_SEC,
        repeat_delay: INDICATOR_BOB_REST_SEC,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconPose {
    pub offset: Vec2, // px
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingIcon {
    pub index: usize,
    pub delay: f32,
    pub drift: Vec2,
}

impl FloatingIcon {
    fn drift_x(&self) -> LoopingTween {
        LoopingTween {
            amplitude: self.drift.x,
            duration: ICON_DRIFT_X_BASE_SEC + ICON_DRIFT_X_STEP_SEC * self.index as f32,
            delay: self.delay + ICON_DRIFT_START_SEC,
            repeat_delay: 0.0,
        }
    }

    fn drift_y(&self) -> LoopingTween {
        LoopingTween {
            amplitude: self.drift.y,
            duration: ICON_DRIFT_Y_BASE_SEC + ICON_DRIFT_Y_STEP_SEC * self.index as f32,
            delay: self.delay + ICON_DRIFT_START_SEC,
            repeat_delay: 0.0,
        }
    }

    pub fn pose_at(&self, t_sec: f32, reduced_motion: bool) -> IconPose {
        if reduced_motion {
            return IconPose {
                offset: Vec2::ZERO,
                opacity: ICON_REST_OPACITY,
            };
        }
        let fade = ((t_sec - self.delay) / ICON_FADE_IN_SEC).clamp(0.0, 1.0);
        IconPose {
            offset: Vec2::new(self.drift_x().value_at(t_sec), self.drift_y().value_at(t_sec)),
            opacity: ICON_REST_OPACITY * ease_out_cubic(fade),
        }
    }
}

pub fn default_floating_icons() -> Vec<FloatingIcon> {
    // (delay, drift x, drift y)
    const ICONS: [(f32, f32, f32); 6] = [
        (0.0, -20.0, -30.0),
        (0.5, 30.0, -20.0),
        (1.0, -40.0, 20.0),
        (1.5, 40.0, 30.0),
        (2.0, -30.0, 40.0),
        (2.5, 20.0, -40.0),
    ];
    ICONS
        .iter()
        .enumerate()
        .map(|(index, (delay, x, y))| FloatingIcon {
            index,
            delay: *delay,
            drift: Vec2::new(*x, *y),
        })
        .collect()
}
