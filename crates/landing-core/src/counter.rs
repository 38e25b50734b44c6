use crate::constants::COUNTER_DURATION;
use crate::interpolate::ease_out_cubic;
use std::time::Duration;

/// Stat counter that eases from 0 to `target` once its section is visible.
#[derive(Clone, Debug)]
pub struct CountUp {
    pub target: u64,
    pub duration: Duration,
    elapsed: Option<Duration>,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration: COUNTER_DURATION,
            elapsed: None,
        }
    }

    pub fn started(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Starts the count once; later calls are ignored.
    pub fn start(&mut self) -> bool {
        if self.elapsed.is_some() {
            return false;
        }
        self.elapsed = Some(Duration::ZERO);
        true
    }

    /// Jump straight to the final value.
    pub fn finish(&mut self) {
        self.elapsed = Some(self.duration);
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(e) = self.elapsed.as_mut() {
            *e = (*e + dt).min(self.duration);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed.map(|e| e >= self.duration).unwrap_or(false)
    }

    pub fn value(&self) -> u64 {
        let Some(elapsed) = self.elapsed else {
            return 0;
        };
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = ease_out_cubic(progress as f32) as f64;
        ((self.target as f64 * eased).floor() as u64).min(self.target)
    }
}

/// `2500000` -> `"2,500,000"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
