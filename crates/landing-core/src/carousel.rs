use crate::constants::{AUTOPLAY_INTERVAL, AUTOPLAY_RESUME_AFTER};
use std::time::Duration;

/// Testimonial carousel with autoplay that pauses on manual navigation.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    auto_playing: bool,
    autoplay_allowed: bool,
    in_view: bool,
    since_advance: Duration,
    since_interaction: Duration,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            auto_playing: true,
            autoplay_allowed: true,
            in_view: false,
            since_advance: Duration::ZERO,
            since_interaction: Duration::ZERO,
        }
    }

    /// Manual navigation only; used under reduced motion.
    pub fn without_autoplay(len: usize) -> Self {
        Self {
            auto_playing: false,
            autoplay_allowed: false,
            ..Self::new(len)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        if in_view && !self.in_view {
            self.since_advance = Duration::ZERO;
        }
        self.in_view = in_view;
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
        self.pause();
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
        self.pause();
    }

    pub fn go_to(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.current = index;
        self.pause();
    }

    fn pause(&mut self) {
        self.auto_playing = false;
        self.since_interaction = Duration::ZERO;
        log::debug!("[carousel] manual navigation to {}", self.current);
    }

    /// Advance timers; returns true when the visible slide changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.len == 0 || !self.autoplay_allowed {
            return false;
        }
        if !self.auto_playing {
            self.since_interaction += dt;
            if self.since_interaction >= AUTOPLAY_RESUME_AFTER {
                self.auto_playing = true;
                self.since_advance = Duration::ZERO;
                log::debug!("[carousel] autoplay resumed");
            }
            return false;
        }
        if !self.in_view {
            return false;
        }
        self.since_advance += dt;
        let mut changed = false;
        while self.since_advance >= AUTOPLAY_INTERVAL {
            self.since_advance -= AUTOPLAY_INTERVAL;
            self.current = (self.current + 1) % self.len;
            changed = true;
        }
        changed
    }
}
