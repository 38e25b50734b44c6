// DOM contract between the static markup and the wasm front-end.
// Every id the front-end looks up lives here.

// Hero
pub const HERO_ID: &str = "hero";
pub const HERO_OVERLAY_ID: &str = "hero-overlay";
pub const HERO_ICONS_ID: &str = "hero-icons"; // container; children carry FLOATING_ICON_CLASS
pub const HERO_CONTENT_ID: &str = "hero-content";
pub const HERO_TITLE_ID: &str = "hero-title";
pub const HERO_SUBTITLE_ID: &str = "hero-subtitle";
pub const HERO_BUTTONS_ID: &str = "hero-buttons";
pub const SCROLL_INDICATOR_ID: &str = "scroll-indicator";
pub const SCROLL_INDICATOR_BOB_ID: &str = "scroll-indicator-bob";
pub const FLOATING_ICON_CLASS: &str = "floating-icon";

// Stats
pub const STATS_ID: &str = "stats";
pub const STAT_VALUE_CLASS: &str = "stat-value"; // data-target / data-suffix

// Testimonials
pub const TESTIMONIALS_ID: &str = "testimonials";
pub const SLIDE_CLASS: &str = "testimonial-slide";
pub const SLIDE_DOT_CLASS: &str = "testimonial-dot"; // data-index
pub const CAROUSEL_PREV_ID: &str = "testimonial-prev";
pub const CAROUSEL_NEXT_ID: &str = "testimonial-next";
pub const AUTOPLAY_STATUS_ID: &str = "testimonial-autoplay";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_SUCCESS_ID: &str = "contact-success";
pub const NAME_INPUT_ID: &str = "name";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_INPUT_ID: &str = "message";
pub const ERROR_ID_SUFFIX: &str = "-error"; // e.g. "name-error"

// Shared classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const INVALID_CLASS: &str = "invalid";

pub const SUBMIT_LABEL: &str = "Send message";
pub const SUBMIT_BUSY_LABEL: &str = "Sending…";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
