use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::geometry::{PanelBox, PanelTransform, TrackTransform, Viewport, WrapperHeight};
use super::MountError;
use crate::config::HorizontalScrollConfig;

/// Everything the horizontal controller reads from, and writes to, the page.
pub trait Stage {
    fn viewport(&self) -> Viewport;
    /// Full scrollable width of the track, overflow included.
    fn track_content_width(&self) -> f64;
    /// Top of the outer wrapper relative to the viewport.
    fn section_top(&self) -> f64;
    /// Panels that carry a media frame, in document order.
    fn panels(&self) -> Vec<PanelBox>;
    fn set_wrapper_height(&self, height: WrapperHeight);
    fn set_track_transform(&self, transform: TrackTransform);
    /// `None` clears the media frame's transform. Indexes follow the last `panels()` call.
    fn set_panel_transform(&self, index: usize, transform: Option<PanelTransform>);
}

pub struct DomStage {
    window: Window,
    outer: HtmlElement,
    track: HtmlElement,
    panel_selector: String,
    media_selector: String,
    frames: RefCell<Vec<HtmlElement>>,
}

impl DomStage {
    pub fn locate(window: Window, document: &Document, config: &HorizontalScrollConfig) -> Result<Self, MountError> {
        let section = document
            .get_element_by_id(&config.section)
            .ok_or_else(|| MountError::MissingAnchor(format!("#{}", config.section)))?;

        let outer = anchor(&section, &config.outer)?;
        // Only required to exist; its pinning is pure CSS.
        anchor(&section, &config.sticky)?;
        let track = anchor(&section, &config.track)?;

        Ok(Self {
            window,
            outer,
            track,
            panel_selector: config.panel.clone(),
            media_selector: config.media_frame.clone(),
            frames: RefCell::new(Vec::new()),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

fn anchor(section: &Element, selector: &str) -> Result<HtmlElement, MountError> {
    section
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| MountError::MissingAnchor(selector.to_string()))
}

pub fn viewport_of(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

impl Stage for DomStage {
    fn viewport(&self) -> Viewport {
        viewport_of(&self.window)
    }

    fn track_content_width(&self) -> f64 {
        self.track.scroll_width() as f64
    }

    fn section_top(&self) -> f64 {
        self.outer.get_bounding_client_rect().top()
    }

    fn panels(&self) -> Vec<PanelBox> {
        let mut frames = self.frames.borrow_mut();
        frames.clear();

        let Ok(nodes) = self.track.query_selector_all(&self.panel_selector) else {
            return Vec::new();
        };

        let mut boxes = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(panel) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let frame = panel
                .query_selector(&self.media_selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(frame) = frame {
                let rect = panel.get_bounding_client_rect();
                boxes.push(PanelBox {
                    left: rect.left(),
                    width: rect.width(),
                });
                frames.push(frame);
            }
        }
        boxes
    }

    fn set_wrapper_height(&self, height: WrapperHeight) {
        let _ = self.outer.style().set_property("height", &height.to_string());
    }

    fn set_track_transform(&self, transform: TrackTransform) {
        let _ = self.track.style().set_property("transform", &transform.to_string());
    }

    fn set_panel_transform(&self, index: usize, transform: Option<PanelTransform>) {
        let frames = self.frames.borrow();
        let Some(frame) = frames.get(index) else {
            return;
        };
        let style = frame.style();
        match transform {
            Some(t) => {
                let _ = style.set_property("transform", &t.to_string());
            }
            None => {
                let _ = style.remove_property("transform");
            }
        }
    }
}
