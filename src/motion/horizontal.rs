//! Pinned horizontal panel track driven by vertical scroll.
//!
//! While `#deep-features` scrolls through the viewport, the sticky inner
//! element stays put and the track slides left in proportion to how far the
//! outer wrapper has been scrolled. Each panel's media frame tilts by its
//! distance from the viewport center.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use super::geometry::{
    panel_rotation, scroll_progress, track_offset, PanelTransform, TrackGeometry, TrackTransform, WrapperHeight,
};
use super::listener::Listener;
use super::stage::{DomStage, Stage};
use super::{Feature, MountError};
use crate::config::HorizontalScrollConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Track is driven by scroll.
    Pinned,
    /// Narrow viewport; the section is a plain vertical stack.
    Stacked,
}

impl Mode {
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Mode::Stacked
        } else {
            Mode::Pinned
        }
    }
}

pub struct HorizontalScroll<S: Stage> {
    stage: S,
    config: HorizontalScrollConfig,
    geometry: TrackGeometry,
    mode: Mode,
    ticking: bool,
}

impl<S: Stage> HorizontalScroll<S> {
    pub fn new(stage: S, config: HorizontalScrollConfig) -> Self {
        let mode = Mode::for_width(stage.viewport().width, config.breakpoint);
        let mut controller = Self {
            stage,
            config,
            geometry: TrackGeometry::default(),
            mode,
            ticking: false,
        };

        match mode {
            Mode::Stacked => controller.stage.set_wrapper_height(WrapperHeight::Auto),
            Mode::Pinned => controller.recalculate(),
        }
        controller
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_pinned(&self) -> bool {
        self.mode == Mode::Pinned
    }

    /// Re-measures the track and resizes the outer wrapper to match.
    pub fn recalculate(&mut self) {
        if self.mode == Mode::Stacked {
            return;
        }
        let viewport = self.stage.viewport();
        self.geometry = TrackGeometry::measure(self.stage.track_content_width(), viewport.width);
        self.stage
            .set_wrapper_height(WrapperHeight::Px(self.geometry.wrapper_height(viewport.height)));
    }

    /// Returns `true` when the caller has to schedule a frame for [`Self::on_frame`].
    ///
    /// At most one frame is in flight; scroll events arriving before it runs
    /// are folded into it.
    pub fn on_scroll(&mut self) -> bool {
        if self.mode == Mode::Stacked || self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn on_frame(&mut self) {
        self.ticking = false;
        if self.mode == Mode::Stacked {
            return;
        }

        let viewport = self.stage.viewport();
        let progress = scroll_progress(
            self.stage.section_top(),
            viewport.height,
            self.geometry.scroll_length,
            self.config.pre_roll,
        );
        self.stage
            .set_track_transform(TrackTransform::Translate(track_offset(self.geometry.track_scroll, progress)));

        for (index, panel) in self.stage.panels().into_iter().enumerate() {
            let transform = PanelTransform {
                rotation_y: panel_rotation(panel, viewport.width, self.config.max_rotation),
                tilt_x: self.config.tilt,
                perspective: self.config.perspective,
            };
            self.stage.set_panel_transform(index, Some(transform));
        }
    }

    pub fn on_resize(&mut self) {
        self.mode = Mode::for_width(self.stage.viewport().width, self.config.breakpoint);
        match self.mode {
            Mode::Stacked => self.unpin(),
            Mode::Pinned => self.recalculate(),
        }
    }

    fn unpin(&mut self) {
        self.geometry = TrackGeometry::default();
        self.stage.set_track_transform(TrackTransform::Identity);
        self.stage.set_wrapper_height(WrapperHeight::Auto);
        let panels = self.stage.panels().len();
        for index in 0..panels {
            self.stage.set_panel_transform(index, None);
        }
    }
}

struct Shared {
    controller: RefCell<HorizontalScroll<DomStage>>,
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
    pending_frame: Cell<Option<i32>>,
}

impl Shared {
    fn scroll(&self) {
        if !self.controller.borrow_mut().on_scroll() {
            return;
        }
        let window = self.controller.borrow().stage().window().clone();
        let requested = self
            .frame
            .borrow()
            .as_ref()
            .map(|frame| window.request_animation_frame(frame.as_ref().unchecked_ref()));

        match requested {
            Some(Ok(id)) => self.pending_frame.set(Some(id)),
            // No frame scheduling available; project right away so `ticking` is released.
            _ => self.controller.borrow_mut().on_frame(),
        }
    }
}

/// Live controller wired to window scroll/resize. Dropping it detaches everything.
pub struct HorizontalScrollHandle {
    shared: Rc<Shared>,
    window: Window,
    _listeners: Vec<Listener>,
}

impl HorizontalScrollHandle {
    pub fn install(
        window: &Window,
        document: &Document,
        config: &HorizontalScrollConfig,
        reduced_motion: bool,
    ) -> Result<Self, MountError> {
        if reduced_motion {
            return Err(MountError::ReducedMotion);
        }
        let stage = DomStage::locate(window.clone(), document, config)?;
        let controller = HorizontalScroll::new(stage, config.clone());

        let shared = Rc::new(Shared {
            controller: RefCell::new(controller),
            frame: RefCell::new(None),
            pending_frame: Cell::new(None),
        });

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        *shared.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.pending_frame.set(None);
                shared.controller.borrow_mut().on_frame();
            }
        }) as Box<dyn FnMut()>));

        let on_scroll = {
            let shared = shared.clone();
            Listener::passive(window.as_ref(), "scroll", move || shared.scroll())?
        };
        let on_resize = {
            let shared = shared.clone();
            Listener::passive(window.as_ref(), "resize", move || {
                shared.controller.borrow_mut().on_resize();
            })?
        };

        shared.scroll();

        let geometry = shared.controller.borrow().geometry();
        info!(
            "Horizontal scroll installed (track {}px, {:?})",
            geometry.track_scroll,
            shared.controller.borrow().mode()
        );

        Ok(Self {
            shared,
            window: window.clone(),
            _listeners: vec![on_scroll, on_resize],
        })
    }

    pub fn recalculate(&self) {
        self.shared.controller.borrow_mut().recalculate();
    }

    pub fn on_scroll(&self) {
        self.shared.scroll();
    }

    pub fn is_pinned(&self) -> bool {
        self.shared.controller.borrow().is_pinned()
    }
}

impl Drop for HorizontalScrollHandle {
    fn drop(&mut self) {
        if let Some(id) = self.shared.pending_frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Feature<HorizontalScrollHandle> {
    pub fn recalculate(&self) {
        self.with(HorizontalScrollHandle::recalculate);
    }

    pub fn on_scroll(&self) {
        self.with(HorizontalScrollHandle::on_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::geometry::{PanelBox, Viewport};

    #[derive(Default)]
    struct FakeStage {
        viewport: Cell<Viewport>,
        content_width: Cell<f64>,
        section_top: Cell<f64>,
        panels: RefCell<Vec<PanelBox>>,
        wrapper_height: Cell<Option<WrapperHeight>>,
        track_transform: Cell<Option<TrackTransform>>,
        panel_transforms: RefCell<Vec<Option<PanelTransform>>>,
    }

    impl FakeStage {
        fn new(width: f64, height: f64, content_width: f64) -> Self {
            let stage = Self::default();
            stage.viewport.set(Viewport::new(width, height));
            stage.content_width.set(content_width);
            stage
        }

        fn with_panels(self, panels: Vec<PanelBox>) -> Self {
            *self.panel_transforms.borrow_mut() = vec![None; panels.len()];
            *self.panels.borrow_mut() = panels;
            self
        }
    }

    impl Stage for FakeStage {
        fn viewport(&self) -> Viewport {
            self.viewport.get()
        }

        fn track_content_width(&self) -> f64 {
            self.content_width.get()
        }

        fn section_top(&self) -> f64 {
            self.section_top.get()
        }

        fn panels(&self) -> Vec<PanelBox> {
            self.panels.borrow().clone()
        }

        fn set_wrapper_height(&self, height: WrapperHeight) {
            self.wrapper_height.set(Some(height));
        }

        fn set_track_transform(&self, transform: TrackTransform) {
            self.track_transform.set(Some(transform));
        }

        fn set_panel_transform(&self, index: usize, transform: Option<PanelTransform>) {
            if let Some(slot) = self.panel_transforms.borrow_mut().get_mut(index) {
                *slot = transform;
            }
        }
    }

    fn controller(stage: FakeStage) -> HorizontalScroll<FakeStage> {
        HorizontalScroll::new(stage, HorizontalScrollConfig::default())
    }

    fn translate_x(stage: &FakeStage) -> f64 {
        match stage.track_transform.get() {
            Some(TrackTransform::Translate(x)) => x,
            other => panic!("expected a translate, got {:?}", other),
        }
    }

    #[test]
    fn desktop_walkthrough() {
        let mut hs = controller(FakeStage::new(1600.0, 900.0, 4600.0));

        assert!(hs.is_pinned());
        assert_eq!(hs.geometry().track_scroll, 3000.0);
        assert_eq!(hs.stage().wrapper_height.get(), Some(WrapperHeight::Px(3900.0)));

        hs.stage().section_top.set(-1500.0);
        assert!(hs.on_scroll());
        hs.on_frame();

        assert!((translate_x(hs.stage()) + 1410.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_bursts_share_one_frame() {
        let mut hs = controller(FakeStage::new(1600.0, 900.0, 4600.0));

        assert!(hs.on_scroll());
        for _ in 0..5 {
            assert!(!hs.on_scroll());
        }

        // Only the position at frame time counts.
        hs.stage().section_top.set(-3000.0 - 90.0 - 500.0);
        hs.on_frame();
        assert!((translate_x(hs.stage()) + 3000.0).abs() < 1e-9);

        assert!(hs.on_scroll());
    }

    #[test]
    fn content_that_fits_leaves_track_in_place() {
        let mut hs = controller(FakeStage::new(1600.0, 900.0, 1200.0));
        assert_eq!(hs.geometry().scroll_length, 0.0);
        assert_eq!(hs.stage().wrapper_height.get(), Some(WrapperHeight::Px(900.0)));

        for top in [800.0, 0.0, -2000.0] {
            hs.stage().section_top.set(top);
            assert!(hs.on_scroll());
            hs.on_frame();
            assert_eq!(translate_x(hs.stage()), 0.0);
        }
    }

    #[test]
    fn panels_tilt_by_distance_from_center() {
        let stage = FakeStage::new(1600.0, 900.0, 4600.0).with_panels(vec![
            PanelBox { left: 600.0, width: 400.0 },
            PanelBox { left: 1500.0, width: 200.0 },
            PanelBox { left: 5000.0, width: 800.0 },
            PanelBox { left: -4000.0, width: 800.0 },
        ]);
        let mut hs = controller(stage);
        hs.on_scroll();
        hs.on_frame();

        let rotations: Vec<f64> = hs
            .stage()
            .panel_transforms
            .borrow()
            .iter()
            .map(|t| t.expect("every panel gets a transform").rotation_y)
            .collect();
        assert_eq!(rotations, vec![0.0, 8.0, 8.0, -8.0]);

        let first = hs.stage().panel_transforms.borrow()[0].unwrap();
        assert_eq!(first.to_string(), "perspective(1000px) rotateY(0.00deg) rotateX(2deg)");
    }

    #[test]
    fn no_panels_is_fine() {
        let mut hs = controller(FakeStage::new(1600.0, 900.0, 4600.0));
        hs.on_scroll();
        hs.on_frame();
        assert!(hs.stage().panel_transforms.borrow().is_empty());
    }

    #[test]
    fn narrow_start_stays_stacked() {
        let mut hs = controller(FakeStage::new(800.0, 900.0, 4600.0));

        assert_eq!(hs.mode(), Mode::Stacked);
        assert_eq!(hs.stage().wrapper_height.get(), Some(WrapperHeight::Auto));
        assert!(!hs.on_scroll());

        hs.recalculate();
        assert_eq!(hs.stage().wrapper_height.get(), Some(WrapperHeight::Auto));
        assert_eq!(hs.stage().track_transform.get(), None);
    }

    #[test]
    fn shrinking_below_breakpoint_resets_styles() {
        let stage = FakeStage::new(1600.0, 900.0, 4600.0).with_panels(vec![PanelBox { left: 0.0, width: 400.0 }]);
        let mut hs = controller(stage);
        hs.stage().section_top.set(-1500.0);
        hs.on_scroll();
        hs.on_frame();
        assert!(hs.stage().panel_transforms.borrow()[0].is_some());

        hs.stage().viewport.set(Viewport::new(1000.0, 900.0));
        hs.on_resize();

        assert_eq!(hs.mode(), Mode::Stacked);
        assert_eq!(hs.stage().wrapper_height.get(), Some(WrapperHeight::Auto));
        assert_eq!(hs.stage().track_transform.get(), Some(TrackTransform::Identity));
        assert_eq!(hs.stage().track_transform.get().unwrap().to_string(), "none");
        assert!(hs.stage().panel_transforms.borrow()[0].is_none());
        assert!(!hs.on_scroll());
    }

    #[test]
    fn breakpoint_width_itself_is_stacked() {
        let mut hs = controller(FakeStage::new(1600.0, 900.0, 4600.0));
        hs.stage().viewport.set(Viewport::new(1200.0, 900.0));
        hs.on_resize();
        assert_eq!(hs.mode(), Mode::Stacked);

        hs.stage().viewport.set(Viewport::new(1201.0, 900.0));
        hs.on_resize();
        assert_eq!(hs.mode(), Mode::Pinned);
    }

    #[test]
    fn growing_back_recalculates_for_new_width() {
        let mut hs = controller(FakeStage::new(900.0, 800.0, 4600.0));
        assert_eq!(hs.mode(), Mode::Stacked);

        hs.stage().viewport.set(Viewport::new(1400.0, 800.0));
        hs.on_resize();

        assert!(hs.is_pinned());
        assert_eq!(hs.geometry().track_scroll, 3200.0);
        assert_eq!(hs.stage().wrapper_height.get(), Some(WrapperHeight::Px(4000.0)));
    }

    #[test]
    fn frame_after_unpin_writes_nothing() {
        let mut hs = controller(FakeStage::new(1600.0, 900.0, 4600.0));
        assert!(hs.on_scroll());

        hs.stage().viewport.set(Viewport::new(1000.0, 900.0));
        hs.on_resize();
        hs.on_frame();

        assert_eq!(hs.stage().track_transform.get(), Some(TrackTransform::Identity));
    }

    #[test]
    fn recalculate_tracks_content_changes() {
        let mut hs = controller(FakeStage::new(1600.0, 900.0, 4600.0));
        hs.stage().content_width.set(2600.0);
        hs.recalculate();
        assert_eq!(hs.geometry().track_scroll, 1000.0);
        assert_eq!(hs.stage().wrapper_height.get(), Some(WrapperHeight::Px(1900.0)));
    }
}
