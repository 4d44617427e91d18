//! Style state for the page chrome: header, parallax, floating elements,
//! card affordances and device class. Pure functions so the event wiring in
//! `components` stays thin.

use crate::config::{FLOATING_STAGGER_SECS, HEADER_SCROLL_THRESHOLD, PARALLAX_SPEED};

const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_AGENTS.iter().any(|agent| ua.contains(agent))
}

/// Reads the navigator once; false when there is no window.
pub fn detect_mobile_device() -> bool {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| is_mobile_user_agent(&ua))
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Top,
    Scrolled,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Top
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            HeaderStyle::Top => "background: rgba(255, 255, 255, 0.95); box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);",
            HeaderStyle::Scrolled => "background: rgba(255, 255, 255, 0.98); box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);",
        }
    }
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("transform: translateY({}px);", 0.0 - scroll_y * PARALLAX_SPEED)
}

pub fn floating_delay(index: usize) -> String {
    format!("animation-delay: {}s;", index as f64 * FLOATING_STAGGER_SECS)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatPose {
    Rest,
    Raised,
}

impl FloatPose {
    pub fn css(self) -> &'static str {
        match self {
            FloatPose::Rest => "transform: scale(1) rotate(0deg); transition: transform 0.3s ease;",
            FloatPose::Raised => "transform: scale(1.1) rotate(10deg); transition: transform 0.3s ease;",
        }
    }
}

/// Transform applied to content cards on hover (service cards) and touch
/// (mobile devices).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPose {
    Rest,
    Lifted,
    Pressed,
}

impl CardPose {
    pub fn css(self) -> &'static str {
        match self {
            CardPose::Rest => "",
            CardPose::Lifted => "transform: translateY(-8px) scale(1.02);",
            CardPose::Pressed => "transform: scale(0.98);",
        }
    }
}
