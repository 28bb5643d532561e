use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}

/// Attribute on `<html>` carrying optional JSON overrides for [`MotionConfig`].
pub const MOTION_ATTRIBUTE: &str = "data-motion";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HorizontalScrollConfig {
    /// At or below this viewport width (px) the section renders as a plain vertical stack.
    pub breakpoint: f64,
    /// Fraction of the viewport height scrolled before the track starts moving.
    pub pre_roll: f64,
    /// Max |rotateY| in degrees for a panel at the viewport edge.
    pub max_rotation: f64,
    pub tilt: f64,
    pub perspective: f64,
    pub section: String,
    pub outer: String,
    pub sticky: String,
    pub track: String,
    pub panel: String,
    pub media_frame: String,
}

impl Default for HorizontalScrollConfig {
    fn default() -> Self {
        Self {
            breakpoint: 1200.0,
            pre_roll: 1.1,
            max_rotation: 8.0,
            tilt: 2.0,
            perspective: 1000.0,
            section: "deep-features".to_string(),
            outer: ".hs__outer".to_string(),
            sticky: ".hs__sticky".to_string(),
            track: ".hs__track".to_string(),
            panel: ".hs__panel".to_string(),
            media_frame: ".media-frame".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub interval_ms: u32,
    pub resume_after_ms: u32,
    pub visibility_threshold: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            resume_after_ms: 6000,
            visibility_threshold: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub debounce_ms: u32,
    pub resync_delay_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            resync_delay_ms: 200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub horizontal: HorizontalScrollConfig,
    pub reveal_threshold: f64,
    pub stagger_step_ms: u32,
    pub icon_delay_spread_s: f64,
    /// Wait after a FAQ summary click before checking whether it opened.
    pub faq_reveal_delay_ms: u32,
    pub demo: DemoConfig,
    pub layout: LayoutConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            horizontal: HorizontalScrollConfig::default(),
            reveal_threshold: 0.12,
            stagger_step_ms: 100,
            icon_delay_spread_s: 2.0,
            faq_reveal_delay_ms: 50,
            demo: DemoConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl MotionConfig {
    /// Parses a partial override; anything left out keeps its default.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load(document: &Document) -> Self {
        let raw = document
            .document_element()
            .and_then(|root| root.get_attribute(MOTION_ATTRIBUTE));

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed {} attribute: {}", MOTION_ATTRIBUTE, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
