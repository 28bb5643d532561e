//! Scroll-to-transform maths for the pinned horizontal track.
//!
//! Everything here is pure: the controller reads raw measurements from its
//! stage, runs them through these functions and writes the resulting style
//! values back. The `Display` impls produce the exact CSS text that lands in
//! the DOM.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Horizontal extent of the track that has to be scrolled through.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    /// Pixels the track translates at full progress.
    pub track_scroll: f64,
    /// Vertical scroll distance mapped onto `track_scroll`.
    pub scroll_length: f64,
}

impl TrackGeometry {
    pub fn measure(content_width: f64, viewport_width: f64) -> Self {
        let track_scroll = (content_width - viewport_width).max(0.0);
        Self {
            track_scroll,
            scroll_length: track_scroll,
        }
    }

    /// Height of the outer wrapper so that scrolling it spans the whole track.
    pub fn wrapper_height(&self, viewport_height: f64) -> f64 {
        viewport_height + self.scroll_length
    }
}

/// Normalised traversal in `[0, 1]`.
///
/// `section_top` is the wrapper's top relative to the viewport. The track
/// only starts moving after `viewport_height * pre_roll` of the section has
/// scrolled by. A zero `scroll_length` (content fits the viewport) yields 0.
pub fn scroll_progress(section_top: f64, viewport_height: f64, scroll_length: f64, pre_roll: f64) -> f64 {
    if scroll_length <= 0.0 {
        return 0.0;
    }
    let offset = viewport_height * pre_roll;
    let raw = (viewport_height - section_top - offset) / scroll_length;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

pub fn track_offset(track_scroll: f64, progress: f64) -> f64 {
    let x = -track_scroll * progress;
    // avoid writing "-0px"
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelBox {
    pub left: f64,
    pub width: f64,
}

impl PanelBox {
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// `rotateY` in degrees for a panel, proportional to its distance from the
/// viewport center and clamped to `±max_rotation`.
pub fn panel_rotation(panel: PanelBox, viewport_width: f64, max_rotation: f64) -> f64 {
    if viewport_width <= 0.0 {
        return 0.0;
    }
    let half = viewport_width / 2.0;
    let distance = (panel.center_x() - half) / half;
    if distance.is_nan() {
        return 0.0;
    }
    distance.clamp(-1.0, 1.0) * max_rotation
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WrapperHeight {
    Px(f64),
    Auto,
}

impl fmt::Display for WrapperHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapperHeight::Px(px) => write!(f, "{}px", px),
            WrapperHeight::Auto => f.write_str("auto"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackTransform {
    Translate(f64),
    Identity,
}

impl fmt::Display for TrackTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackTransform::Translate(x) => write!(f, "translate3d({}px,0,0)", x),
            TrackTransform::Identity => f.write_str("none"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelTransform {
    pub rotation_y: f64,
    pub tilt_x: f64,
    pub perspective: f64,
}

impl fmt::Display for PanelTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective({}px) rotateY({:.2}deg) rotateX({}deg)",
            self.perspective, self.rotation_y, self.tilt_x
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRE_ROLL: f64 = 1.1;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn track_scroll_is_overflow_or_zero() {
        for (content, viewport) in [(4600.0, 1600.0), (1600.0, 1600.0), (900.0, 1600.0), (0.0, 0.0)] {
            let geometry = TrackGeometry::measure(content, viewport);
            assert_eq!(geometry.track_scroll, f64::max(0.0, content - viewport));
            assert_eq!(geometry.scroll_length, geometry.track_scroll);
        }
    }

    #[test]
    fn wrapper_spans_viewport_plus_track() {
        let geometry = TrackGeometry::measure(4600.0, 1600.0);
        assert_eq!(geometry.track_scroll, 3000.0);
        assert_eq!(geometry.wrapper_height(900.0), 3900.0);
    }

    #[test]
    fn progress_mid_traversal() {
        let progress = scroll_progress(-1500.0, 900.0, 3000.0, PRE_ROLL);
        assert!(close(progress, 0.47), "progress was {}", progress);
        assert!(close(track_offset(3000.0, progress), -1410.0));
    }

    #[test]
    fn progress_is_zero_before_active_zone() {
        let vh = 900.0;
        for top in [vh * 0.1, 0.0, -50.0, 400.0, 5000.0] {
            assert_eq!(scroll_progress(top, vh, 3000.0, PRE_ROLL), 0.0, "top {}", top);
        }
    }

    #[test]
    fn progress_is_one_past_the_end() {
        let vh = 900.0;
        let len = 3000.0;
        for top in [-len - vh * 0.1, -len - vh, -100_000.0] {
            assert!(close(scroll_progress(top, vh, len, PRE_ROLL), 1.0), "top {}", top);
        }
    }

    #[test]
    fn progress_stays_in_unit_range() {
        let mut top = 10_000.0;
        while top > -10_000.0 {
            let p = scroll_progress(top, 720.0, 1234.0, PRE_ROLL);
            assert!((0.0..=1.0).contains(&p));
            top -= 37.5;
        }
    }

    #[test]
    fn zero_scroll_length_never_produces_nan() {
        for top in [-1e6, -500.0, 0.0, 500.0] {
            let p = scroll_progress(top, 900.0, 0.0, PRE_ROLL);
            assert_eq!(p, 0.0);
            assert_eq!(track_offset(0.0, p), 0.0);
        }
        assert_eq!(TrackTransform::Translate(track_offset(0.0, 0.0)).to_string(), "translate3d(0px,0,0)");
    }

    #[test]
    fn centered_panel_has_no_rotation() {
        let panel = PanelBox { left: 600.0, width: 400.0 };
        assert_eq!(panel_rotation(panel, 1600.0, 8.0), 0.0);
    }

    #[test]
    fn rotation_scales_with_distance_and_clamps() {
        let vw = 1600.0;
        let right_edge = PanelBox { left: 1500.0, width: 200.0 };
        assert!(close(panel_rotation(right_edge, vw, 8.0), 8.0));

        let half_left = PanelBox { left: 300.0, width: 200.0 };
        assert!(close(panel_rotation(half_left, vw, 8.0), -4.0));

        for left in [-20_000.0, -800.0, 0.0, 2400.0, 20_000.0] {
            let r = panel_rotation(PanelBox { left, width: 500.0 }, vw, 8.0);
            assert!((-8.0..=8.0).contains(&r), "left {} gave {}", left, r);
        }
    }

    #[test]
    fn rotation_with_empty_viewport_is_zero() {
        let panel = PanelBox { left: 10.0, width: 10.0 };
        assert_eq!(panel_rotation(panel, 0.0, 8.0), 0.0);
    }

    #[test]
    fn css_text() {
        assert_eq!(WrapperHeight::Px(3900.0).to_string(), "3900px");
        assert_eq!(WrapperHeight::Auto.to_string(), "auto");
        assert_eq!(TrackTransform::Translate(-1410.0).to_string(), "translate3d(-1410px,0,0)");
        assert_eq!(TrackTransform::Identity.to_string(), "none");

        let transform = PanelTransform { rotation_y: 4.0, tilt_x: 2.0, perspective: 1000.0 };
        assert_eq!(transform.to_string(), "perspective(1000px) rotateY(4.00deg) rotateX(2deg)");

        let transform = PanelTransform { rotation_y: -7.456, tilt_x: 2.0, perspective: 1000.0 };
        assert_eq!(transform.to_string(), "perspective(1000px) rotateY(-7.46deg) rotateX(2deg)");
    }
}
