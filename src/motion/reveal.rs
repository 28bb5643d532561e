use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::MountError;

pub const REVEAL_SELECTOR: &str = ".reveal-up, .reveal-fade";
pub const VISIBLE_CLASS: &str = "is-visible";

/// Adds [`VISIBLE_CLASS`] to each matching element the first time it scrolls into view.
pub struct RevealOnScroll {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    watched: u32,
}

impl RevealOnScroll {
    pub fn install(document: &Document, selector: &str, threshold: f64, reduced_motion: bool) -> Result<Self, MountError> {
        if reduced_motion {
            return Err(MountError::ReducedMotion);
        }
        let targets = document.query_selector_all(selector)?;
        if targets.length() == 0 {
            return Err(MountError::NothingToEnhance(selector.to_string()));
        }

        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for i in 0..targets.length() {
            if let Some(el) = targets.get(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
            watched: targets.length(),
        })
    }

    pub fn watched(&self) -> u32 {
        self.watched
    }
}

impl Drop for RevealOnScroll {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
