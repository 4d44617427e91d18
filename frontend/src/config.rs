pub const COMPANY_NAME: &str = "Codentra Innovations";

// Loading splash
pub const SPLASH_VISIBLE_MS: u32 = 2_500;
pub const SPLASH_FADE_MS: u32 = 500;

// Chatbot reply delays
pub const FREE_TEXT_REPLY_DELAY_MS: u32 = 1_000;
pub const QUICK_OPTION_REPLY_DELAY_MS: u32 = 500;

// Stats counter
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const STATS_THRESHOLD: f64 = 0.5;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Header and parallax
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const PARALLAX_SPEED: f64 = 0.5;

// Floating elements
pub const FLOATING_STAGGER_SECS: f64 = 1.5;
pub const FLOATING_TOUCH_RESET_MS: u32 = 300;

/// Delays used by the chat driver when scheduling bot replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatTiming {
    pub free_text_reply_ms: u32,
    pub quick_option_reply_ms: u32,
}

impl Default for ChatTiming {
    fn default() -> Self {
        Self {
            free_text_reply_ms: FREE_TEXT_REPLY_DELAY_MS,
            quick_option_reply_ms: QUICK_OPTION_REPLY_DELAY_MS,
        }
    }
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
