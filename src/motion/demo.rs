use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::listener::Listener;
use super::MountError;
use crate::config::DemoConfig;

pub const SECTION_SELECTOR: &str = ".demo-section";
pub const STEP_SELECTOR: &str = ".demo-step";
pub const ACTIVE_CLASS: &str = "active";

/// Which demo step is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoSteps {
    current: usize,
    len: usize,
}

impl DemoSteps {
    pub fn new(len: usize, initial: usize) -> Self {
        let current = if initial < len { initial } else { 0 };
        Self { current, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves to the next step, wrapping after the last one.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }
}

struct Cycle {
    steps: Vec<Element>,
    state: RefCell<DemoSteps>,
    config: DemoConfig,
    visible: Cell<bool>,
    /// Set between a click and the resume timeout.
    paused: Cell<bool>,
    interval: RefCell<Option<Interval>>,
    resume: RefCell<Option<Timeout>>,
    this: Weak<Cycle>,
}

impl Cycle {
    fn render(&self) {
        let current = self.state.borrow().current();
        for (i, step) in self.steps.iter().enumerate() {
            let _ = step.class_list().toggle_with_force(ACTIVE_CLASS, i == current);
        }
    }

    fn start(&self) {
        let this = self.this.clone();
        let interval = Interval::new(self.config.interval_ms, move || {
            if let Some(cycle) = this.upgrade() {
                cycle.state.borrow_mut().advance();
                cycle.render();
            }
        });
        // Replacing the old handle cancels it.
        *self.interval.borrow_mut() = Some(interval);
    }

    fn stop(&self) {
        self.interval.borrow_mut().take();
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
        if visible && !self.paused.get() {
            self.start();
        } else {
            self.stop();
        }
    }

    fn pick(&self, index: usize) {
        self.stop();
        self.paused.set(true);
        if self.state.borrow_mut().select(index) {
            self.render();
        }

        let this = self.this.clone();
        let resume = Timeout::new(self.config.resume_after_ms, move || {
            if let Some(cycle) = this.upgrade() {
                cycle.paused.set(false);
                if cycle.visible.get() {
                    cycle.start();
                }
            }
        });
        *self.resume.borrow_mut() = Some(resume);
    }
}

/// Auto-advancing walkthrough in the demo section.
pub struct DemoCycler {
    cycle: Rc<Cycle>,
    observer: IntersectionObserver,
    _observer_callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    _clicks: Vec<Listener>,
}

impl DemoCycler {
    pub fn install(document: &Document, config: &DemoConfig, reduced_motion: bool) -> Result<Self, MountError> {
        if reduced_motion {
            return Err(MountError::ReducedMotion);
        }
        let section = document
            .query_selector(SECTION_SELECTOR)?
            .ok_or_else(|| MountError::MissingAnchor(SECTION_SELECTOR.to_string()))?;

        let nodes = section.query_selector_all(STEP_SELECTOR)?;
        let steps: Vec<Element> = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        if steps.is_empty() {
            return Err(MountError::NothingToEnhance(STEP_SELECTOR.to_string()));
        }

        let initial = steps
            .iter()
            .position(|step| step.class_list().contains(ACTIVE_CLASS))
            .unwrap_or(0);
        let state = DemoSteps::new(steps.len(), initial);

        let cycle = Rc::new_cyclic(|this| Cycle {
            steps,
            state: RefCell::new(state),
            config: config.clone(),
            visible: Cell::new(false),
            paused: Cell::new(false),
            interval: RefCell::new(None),
            resume: RefCell::new(None),
            this: this.clone(),
        });
        cycle.render();

        let mut clicks = Vec::with_capacity(cycle.steps.len());
        for (index, step) in cycle.steps.iter().enumerate() {
            let this = Rc::downgrade(&cycle);
            clicks.push(Listener::new(step.as_ref(), "click", move || {
                if let Some(cycle) = this.upgrade() {
                    debug!("Demo step {} picked", index);
                    cycle.pick(index);
                }
            })?);
        }

        let observer_callback = {
            let this = Rc::downgrade(&cycle);
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let Some(cycle) = this.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        cycle.set_visible(entry.is_intersecting());
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.visibility_threshold));
        let observer = IntersectionObserver::new_with_options(observer_callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&section);

        Ok(Self {
            cycle,
            observer,
            _observer_callback: observer_callback,
            _clicks: clicks,
        })
    }

    pub fn current(&self) -> usize {
        self.cycle.state.borrow().current()
    }
}

impl Drop for DemoCycler {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.cycle.stop();
        self.cycle.resume.borrow_mut().take();
    }
}
