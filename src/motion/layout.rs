use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::Window;
use yew::Callback;

use super::horizontal::{HorizontalScrollHandle, Mode};
use super::listener::Listener;
use super::stage::viewport_of;
use super::{Feature, MountError};
use crate::config::LayoutConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        match Mode::for_width(width, breakpoint) {
            Mode::Pinned => LayoutMode::Desktop,
            Mode::Stacked => LayoutMode::Mobile,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            LayoutMode::Desktop => "layout-desktop",
            LayoutMode::Mobile => "layout-mobile",
        }
    }
}

/// What the switch nudges once the page settles into desktop mode.
pub trait Resync {
    fn resync(&self);
}

impl Resync for Feature<HorizontalScrollHandle> {
    fn resync(&self) {
        self.recalculate();
        self.on_scroll();
    }
}

struct Switch {
    window: Window,
    target: Rc<dyn Resync>,
    breakpoint: f64,
    config: LayoutConfig,
    on_change: Callback<LayoutMode>,
    current: Cell<Option<LayoutMode>>,
    debounce: RefCell<Option<Timeout>>,
    resync: RefCell<Option<Timeout>>,
    this: Weak<Switch>,
}

impl Switch {
    fn resized(&self) {
        let this = self.this.clone();
        let pending = Timeout::new(self.config.debounce_ms, move || {
            if let Some(switch) = this.upgrade() {
                switch.evaluate();
            }
        });
        // Dropping the previous timeout cancels it.
        *self.debounce.borrow_mut() = Some(pending);
    }

    fn evaluate(&self) {
        let mode = LayoutMode::for_width(viewport_of(&self.window).width, self.breakpoint);
        if self.current.replace(Some(mode)) != Some(mode) {
            info!("Layout switched to {:?}", mode);
            self.on_change.emit(mode);
        }

        match mode {
            LayoutMode::Desktop => {
                let target = self.target.clone();
                let resync = Timeout::new(self.config.resync_delay_ms, move || target.resync());
                *self.resync.borrow_mut() = Some(resync);
            }
            LayoutMode::Mobile => {
                self.resync.borrow_mut().take();
            }
        }
    }
}

/// Reports desktop/mobile transitions and resynchronises `target` (the
/// horizontal track) after the page settles into desktop mode.
pub struct LayoutSwitch {
    switch: Rc<Switch>,
    _listener: Listener,
}

impl LayoutSwitch {
    pub fn install(
        window: &Window,
        target: Rc<dyn Resync>,
        breakpoint: f64,
        config: &LayoutConfig,
        on_change: Callback<LayoutMode>,
    ) -> Result<Self, MountError> {
        let switch = Rc::new_cyclic(|this| Switch {
            window: window.clone(),
            target,
            breakpoint,
            config: config.clone(),
            on_change,
            current: Cell::new(None),
            debounce: RefCell::new(None),
            resync: RefCell::new(None),
            this: this.clone(),
        });

        let listener = {
            let this = Rc::downgrade(&switch);
            Listener::passive(window.as_ref(), "resize", move || {
                if let Some(switch) = this.upgrade() {
                    switch.resized();
                }
            })?
        };

        // Reported even under reduced motion; the resync is a no-op when the track is inert.
        switch.evaluate();

        Ok(Self {
            switch,
            _listener: listener,
        })
    }

    pub fn mode(&self) -> Option<LayoutMode> {
        self.switch.current.get()
    }
}

impl Drop for LayoutSwitch {
    fn drop(&mut self) {
        self.switch.debounce.borrow_mut().take();
        self.switch.resync.borrow_mut().take();
    }
}
