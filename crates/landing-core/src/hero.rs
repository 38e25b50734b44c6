//! Scroll-driven hero choreography.
//!
//! A single progress sample `p` feeds every channel in one pass; springs lag
//! the raw curve values so fast flings do not snap.

use crate::interpolate::{clamp_progress, Curve};
use crate::spring::{self, SpringConfig, SpringState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelId {
    IconsY,
    TitleY,
    SubtitleY,
    ButtonsY,
    ContentScale,
    TitleOpacity,
    SubtitleOpacity,
    ButtonsOpacity,
    ContentBlur,
    ContentRotateX,
    OverlayOpacity,
    IndicatorOpacity,
}

impl ChannelId {
    pub const COUNT: usize = 12;

    pub const ALL: [ChannelId; Self::COUNT] = [
        ChannelId::IconsY,
        ChannelId::TitleY,
        ChannelId::SubtitleY,
        ChannelId::ButtonsY,
        ChannelId::ContentScale,
        ChannelId::TitleOpacity,
        ChannelId::SubtitleOpacity,
        ChannelId::ButtonsOpacity,
        ChannelId::ContentBlur,
        ChannelId::ContentRotateX,
        ChannelId::OverlayOpacity,
        ChannelId::IndicatorOpacity,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ChannelId::IconsY => "iconsY",
            ChannelId::TitleY => "titleY",
            ChannelId::SubtitleY => "subtitleY",
            ChannelId::ButtonsY => "buttonsY",
            ChannelId::ContentScale => "scale",
            ChannelId::TitleOpacity => "titleOpacity",
            ChannelId::SubtitleOpacity => "subtitleOpacity",
            ChannelId::ButtonsOpacity => "buttonsOpacity",
            ChannelId::ContentBlur => "contentBlur",
            ChannelId::ContentRotateX => "contentRotateX",
            ChannelId::OverlayOpacity => "overlayOpacity",
            ChannelId::IndicatorOpacity => "indicatorOpacity",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Px,
    Degrees,
    Scalar,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Px => "px",
            Unit::Degrees => "deg",
            Unit::Scalar => "",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelSpec {
    pub id: ChannelId,
    pub curve: Curve,
    pub unit: Unit,
    pub spring: Option<SpringConfig>,
}

impl ChannelSpec {
    /// Raw and smoothed value for one sample:
    /// `f(p, spring_state) -> (value, new_spring_state)`.
    pub fn evaluate(&self, p: f32, state: SpringState, dt_sec: f32) -> (f32, SpringState) {
        let raw = self.curve.eval(clamp_progress(p));
        match &self.spring {
            Some(cfg) => {
                let next = spring::step(cfg, state, raw, dt_sec);
                (next.position, next)
            }
            None => (raw, SpringState::settled(raw)),
        }
    }
}

fn channel(
    id: ChannelId,
    points: &[(f32, f32)],
    unit: Unit,
    spring: Option<SpringConfig>,
) -> ChannelSpec {
    ChannelSpec {
        id,
        curve: Curve::new(points).unwrap_or_else(|e| {
            log::error!("[hero] bad curve for {}: {}", id.name(), e);
            Curve::constant(0.0)
        }),
        unit,
        spring,
    }
}

/// The channel table used by the landing page hero.
pub fn default_hero_channels() -> Vec<ChannelSpec> {
    use ChannelId::*;
    let drift = |stiffness, damping| Some(SpringConfig::new(stiffness, damping).with_rest_delta(0.001));
    let fade = |stiffness, damping| Some(SpringConfig::new(stiffness, damping));
    vec![
        channel(IconsY, &[(0.0, 0.0), (1.0, 50.0)], Unit::Percent, drift(120.0, 25.0)),
        channel(TitleY, &[(0.0, 0.0), (1.0, 30.0)], Unit::Percent, drift(150.0, 30.0)),
        channel(SubtitleY, &[(0.0, 0.0), (1.0, 40.0)], Unit::Percent, drift(140.0, 28.0)),
        channel(ButtonsY, &[(0.0, 0.0), (1.0, 45.0)], Unit::Percent, drift(130.0, 26.0)),
        channel(ContentScale, &[(0.0, 1.0), (0.6, 0.85)], Unit::Scalar, fade(120.0, 25.0)),
        channel(
            TitleOpacity,
            &[(0.0, 1.0), (0.2, 0.9), (0.5, 0.0)],
            Unit::Scalar,
            fade(110.0, 28.0),
        ),
        channel(
            SubtitleOpacity,
            &[(0.0, 1.0), (0.3, 0.8), (0.6, 0.0)],
            Unit::Scalar,
            fade(105.0, 26.0),
        ),
        channel(
            ButtonsOpacity,
            &[(0.0, 1.0), (0.4, 0.7), (0.7, 0.0)],
            Unit::Scalar,
            fade(100.0, 24.0),
        ),
        channel(ContentBlur, &[(0.0, 0.0), (0.3, 0.5), (0.8, 2.0)], Unit::Px, None),
        channel(ContentRotateX, &[(0.0, 0.0), (0.5, -3.0)], Unit::Degrees, None),
        channel(OverlayOpacity, &[(0.0, 1.0), (0.5, 0.0)], Unit::Scalar, None),
        channel(
            IndicatorOpacity,
            &[(0.0, 1.0), (0.3, 0.7), (0.6, 0.0)],
            Unit::Scalar,
            None,
        ),
    ]
}

/// All channel values derived from one progress sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub progress: f32,
    values: [f32; ChannelId::COUNT],
}

impl HeroFrame {
    #[inline]
    pub fn get(&self, id: ChannelId) -> f32 {
        self.values[id.index()]
    }
}

impl std::ops::Index<ChannelId> for HeroFrame {
    type Output = f32;
    fn index(&self, id: ChannelId) -> &f32 {
        &self.values[id.index()]
    }
}

pub struct HeroAnimator {
    specs: Vec<ChannelSpec>,
    states: Vec<Option<SpringState>>,
    reduced_motion: bool,
}

impl HeroAnimator {
    pub fn new(specs: Vec<ChannelSpec>, reduced_motion: bool) -> Self {
        let states = vec![None; specs.len()];
        Self {
            specs,
            states,
            reduced_motion,
        }
    }

    pub fn with_defaults(reduced_motion: bool) -> Self {
        Self::new(default_hero_channels(), reduced_motion)
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn spec(&self, id: ChannelId) -> Option<&ChannelSpec> {
        self.specs.iter().find(|s| s.id == id)
    }

    /// True once every spring has settled on its latest target.
    pub fn is_settled(&self) -> bool {
        self.states
            .iter()
            .all(|s| s.map(|s| s.at_rest).unwrap_or(true))
    }

    /// Evaluate every channel against the same clamped `p`.
    pub fn sample(&mut self, p: f32, dt_sec: f32) -> HeroFrame {
        let p = clamp_progress(p);
        let mut values = [0.0_f32; ChannelId::COUNT];
        for (spec, slot) in self.specs.iter().zip(self.states.iter_mut()) {
            let raw = spec.curve.eval(p);
            let value = if self.reduced_motion || spec.spring.is_none() {
                *slot = None;
                raw
            } else {
                // first sample starts settled so nothing animates on mount
                let prev = slot.unwrap_or_else(|| SpringState::settled(raw));
                let (v, next) = spec.evaluate(p, prev, dt_sec);
                *slot = Some(next);
                v
            };
            values[spec.id.index()] = value;
        }
        HeroFrame {
            progress: p,
            values,
        }
    }
}
