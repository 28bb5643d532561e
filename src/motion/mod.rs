//! Client-side enhancements layered over the rendered landing page.

pub mod demo;
pub mod error;
pub mod faq;
pub mod feature;
pub mod geometry;
pub mod horizontal;
pub mod layout;
mod listener;
pub mod reveal;
pub mod stage;
pub mod stagger;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_fixture;

use std::rc::Rc;

use log::{info, warn};
use web_sys::{Document, Window};
use yew::Callback;

pub use error::MountError;
pub use feature::Feature;

use crate::config::MotionConfig;
use demo::DemoCycler;
use faq::FaqReveal;
use horizontal::HorizontalScrollHandle;
use layout::{LayoutMode, LayoutSwitch};
use reveal::RevealOnScroll;
use stagger::StaggerSummary;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Every enhancement installed on the page. Dropping it tears them all down.
#[derive(Default)]
pub struct Enhancements {
    _horizontal: Rc<Feature<HorizontalScrollHandle>>,
    _reveal: Feature<RevealOnScroll>,
    _stagger: Feature<StaggerSummary>,
    _demo: Feature<DemoCycler>,
    _layout: Feature<LayoutSwitch>,
    _faq: Feature<FaqReveal>,
}

fn page() -> Result<(Window, Document), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    Ok((window, document))
}

pub fn install(config: &MotionConfig, on_layout: Callback<LayoutMode>) -> Enhancements {
    let (window, document) = match page() {
        Ok(page) => page,
        Err(e) => {
            warn!("Skipping page enhancements: {}", e);
            return Enhancements::default();
        }
    };

    let reduced = prefers_reduced_motion(&window);
    if reduced {
        info!("Reduced motion requested, animations stay off");
    }

    let reveal = Feature::from_result(
        "reveal",
        RevealOnScroll::install(&document, reveal::REVEAL_SELECTOR, config.reveal_threshold, reduced),
    );
    let stagger = Feature::from_result("stagger", stagger::apply(&document, config, reduced));
    let horizontal = Rc::new(Feature::from_result(
        "horizontal scroll",
        HorizontalScrollHandle::install(&window, &document, &config.horizontal, reduced),
    ));
    let demo = Feature::from_result("demo", DemoCycler::install(&document, &config.demo, reduced));
    let layout = Feature::from_result(
        "layout switch",
        LayoutSwitch::install(
            &window,
            horizontal.clone(),
            config.horizontal.breakpoint,
            &config.layout,
            on_layout,
        ),
    );

    let faq = Feature::from_result(
        "faq reveal",
        FaqReveal::install(&document, config.faq_reveal_delay_ms, reduced),
    );

    let active = [
        reveal.is_active(),
        stagger.is_active(),
        horizontal.is_active(),
        demo.is_active(),
        layout.is_active(),
        faq.is_active(),
    ];
    info!(
        "Enhancements ready ({}/{} active): reveal={:?} stagger={:?} horizontal={:?} demo={:?} layout={:?} faq={:?}",
        active.iter().filter(|on| **on).count(),
        active.len(),
        reveal.active().map(RevealOnScroll::watched),
        stagger.active().map(|s| (s.cards, s.icons)),
        horizontal.active().map(HorizontalScrollHandle::is_pinned),
        demo.active().map(DemoCycler::current),
        layout.active().and_then(LayoutSwitch::mode),
        faq.active().map(FaqReveal::items)
    );

    Enhancements {
        _horizontal: horizontal,
        _reveal: reveal,
        _stagger: stagger,
        _demo: demo,
        _layout: layout,
        _faq: faq,
    }
}
