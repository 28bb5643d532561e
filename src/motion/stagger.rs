use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{Document, HtmlElement};

use super::MountError;
use crate::config::MotionConfig;

pub const CARD_SELECTOR: &str = ".card";
pub const ICON_SELECTOR: &str = ".icon-wrap:not(.social-icon-wrapper)";
pub const ENTRANCE_CLASS: &str = "card-entrance";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerSummary {
    pub cards: u32,
    pub icons: u32,
}

/// `--stagger-delay` for the card at `index`.
pub fn stagger_delay(index: u32, step_ms: u32) -> String {
    format!("{}ms", index.saturating_mul(step_ms))
}

/// `--icon-delay` from a uniform sample in `[0, 1)`.
pub fn icon_delay(unit: f64, spread_s: f64) -> String {
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    format!("{:.3}s", unit * spread_s)
}

/// Staggers card entrances and desynchronises the floating icons. One-shot.
pub fn apply(document: &Document, config: &MotionConfig, reduced_motion: bool) -> Result<StaggerSummary, MountError> {
    if reduced_motion {
        return Err(MountError::ReducedMotion);
    }

    let cards = html_elements(document, CARD_SELECTOR)?;
    let icons = html_elements(document, ICON_SELECTOR)?;
    if cards.is_empty() && icons.is_empty() {
        return Err(MountError::NothingToEnhance(format!("{}, {}", CARD_SELECTOR, ICON_SELECTOR)));
    }

    for (index, card) in (0u32..).zip(cards.iter()) {
        let _ = card
            .style()
            .set_property("--stagger-delay", &stagger_delay(index, config.stagger_step_ms));
        let _ = card.class_list().add_1(ENTRANCE_CLASS);
    }

    for icon in &icons {
        let _ = icon
            .style()
            .set_property("--icon-delay", &icon_delay(Math::random(), config.icon_delay_spread_s));
    }

    Ok(StaggerSummary {
        cards: cards.len() as u32,
        icons: icons.len() as u32,
    })
}

fn html_elements(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, MountError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}
