use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::listener::Listener;
use super::MountError;

pub const ITEM_SELECTOR: &str = ".faq-item";
pub const CONTENT_SELECTOR: &str = ".faq-content";
pub const REVEALING_CLASS: &str = "faq-revealing";

struct Item {
    details: Element,
    content: Option<Element>,
    pending: RefCell<Option<Timeout>>,
    this: Weak<Item>,
}

impl Item {
    fn toggled(&self, delay_ms: u32) {
        let this = self.this.clone();
        let check = Timeout::new(delay_ms, move || {
            if let Some(item) = this.upgrade() {
                item.reveal_if_open();
            }
        });
        *self.pending.borrow_mut() = Some(check);
    }

    fn reveal_if_open(&self) {
        if !self.details.has_attribute("open") {
            return;
        }
        if let Some(content) = &self.content {
            let _ = content.class_list().add_1(REVEALING_CLASS);
        }
    }
}

/// Animates an FAQ answer in shortly after its `<details>` opens.
pub struct FaqReveal {
    items: Vec<Rc<Item>>,
    _clicks: Vec<Listener>,
}

impl FaqReveal {
    pub fn install(document: &Document, delay_ms: u32, reduced_motion: bool) -> Result<Self, MountError> {
        if reduced_motion {
            return Err(MountError::ReducedMotion);
        }
        let nodes = document.query_selector_all(ITEM_SELECTOR)?;

        let mut items = Vec::new();
        let mut clicks = Vec::new();
        for i in 0..nodes.length() {
            let Some(details) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(summary) = details.query_selector("summary")? else {
                continue;
            };
            let content = details.query_selector(CONTENT_SELECTOR)?;

            let item = Rc::new_cyclic(|this| Item {
                details,
                content,
                pending: RefCell::new(None),
                this: this.clone(),
            });
            let this = Rc::downgrade(&item);
            clicks.push(Listener::new(summary.as_ref(), "click", move || {
                if let Some(item) = this.upgrade() {
                    item.toggled(delay_ms);
                }
            })?);
            items.push(item);
        }

        if items.is_empty() {
            return Err(MountError::NothingToEnhance(ITEM_SELECTOR.to_string()));
        }
        Ok(Self { items, _clicks: clicks })
    }

    pub fn items(&self) -> usize {
        self.items.len()
    }
}

impl Drop for FaqReveal {
    fn drop(&mut self) {
        for item in &self.items {
            item.pending.borrow_mut().take();
        }
    }
}
