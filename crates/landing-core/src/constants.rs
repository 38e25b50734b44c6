use std::time::Duration;

// Shared timing and tuning constants used by the web frontend.

// Contact form
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5); // banner stays up after a send
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1000); // default handler latency
pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

// Testimonials
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);
pub const AUTOPLAY_RESUME_AFTER: Duration = Duration::from_secs(10); // after manual navigation

// Stats
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

// Spring integration
pub const MAX_SPRING_SUBSTEP: f32 = 1.0 / 240.0; // seconds per integration step
pub const MAX_FRAME_DT: f32 = 0.25; // clamp for tab switches and stalls
pub const DEFAULT_REST_DELTA: f32 = 0.01;
pub const DEFAULT_REST_SPEED: f32 = 0.01;

// Floating icons
pub const ICON_REST_OPACITY: f32 = 0.6;
pub const ICON_FADE_IN_SEC: f32 = 1.2;
pub const ICON_DRIFT_START_SEC: f32 = 1.5; // after the icon's own delay
pub const ICON_DRIFT_X_BASE_SEC: f32 = 4.0;
pub const ICON_DRIFT_X_STEP_SEC: f32 = 0.5; // per icon index
pub const ICON_DRIFT_Y_BASE_SEC: f32 = 3.0;
pub const ICON_DRIFT_Y_STEP_SEC: f32 = 0.3;

// Scroll indicator bob
pub const INDICATOR_BOB_PX: f32 = 8.0;
pub const INDICATOR_BOB_SEC: f32 = 2.5;
pub const INDICATOR_BOB_DELAY_SEC: f32 = 2.0;
pub const INDICATOR_BOB_REST_SEC: f32 = 0.5;
