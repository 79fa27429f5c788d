//! Page slide animation controller.
//!
//! Started by a `NavChange` from the navigation controller, the animator
//! yields one `SlideFrame` per drawn frame until the slide completes. The
//! incoming page enters from the right on forward navigation and from the
//! left on backward navigation; the outgoing page exits toward the
//! opposite side.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use izell_core::{Direction, NavChange, Page, TransitionConfig};

use super::easing::Easing;
use super::timing::{is_complete, progress};

/// Active slide state.
#[derive(Debug, Clone)]
struct ActiveSlide {
    start: Instant,
    change: NavChange,
    duration: Duration,
}

/// Snapshot of a slide for one frame. `progress` is the eased fraction of
/// the body width the incoming page already occupies, in [0, 1).
#[derive(Debug, Clone, Copy)]
pub struct SlideFrame {
    pub from: Page,
    pub to: Page,
    pub direction: Direction,
    pub progress: f64,
}

/// Slide animation controller.
///
/// Call `start()` when navigation happens, then `frame()` once per draw to
/// get the current slide geometry. `frame()` returns `None` once the slide
/// has finished (or when none is running), at which point the caller draws
/// the current page plainly.
#[derive(Debug, Clone)]
pub struct PageSlide {
    active: Option<ActiveSlide>,
    config: TransitionConfig,
}

impl PageSlide {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            active: None,
            config,
        }
    }

    /// Begin animating a navigation. Disabled transitions, zero duration
    /// and self-navigation complete instantly: direction is still recorded
    /// upstream, there is simply nothing to move.
    pub fn start(&mut self, change: NavChange) {
        if !self.config.enabled || self.config.duration_ms == 0 || change.from == change.to {
            self.active = None;
            return;
        }
        self.active = Some(ActiveSlide {
            start: Instant::now(),
            change,
            duration: Duration::from_millis(self.config.duration_ms),
        });
    }

    /// Whether a slide is currently running. Drives the fast tick rate.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Drop any running slide, landing on the final position.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Advance the animation and return the geometry for this frame.
    pub fn frame(&mut self) -> Option<SlideFrame> {
        let slide = self.active.clone()?;
        if is_complete(slide.start, slide.duration) {
            self.active = None;
            return None;
        }
        let t = progress(slide.start, slide.duration);
        Some(SlideFrame {
            from: slide.change.from,
            to: slide.change.to,
            direction: slide.change.direction,
            progress: self.config.easing.apply(t),
        })
    }
}

/// Split the body area between the outgoing and incoming pages.
///
/// A terminal cannot translate an already-rendered buffer, so the slide is
/// expressed as a moving split: the incoming page's strip grows from its
/// entry edge until it covers the whole area. Returns `(outgoing, incoming)`;
/// the outgoing rect is `None` once the incoming page covers everything.
pub fn slide_areas(area: Rect, direction: Direction, progress: f64) -> (Option<Rect>, Rect) {
    let width = area.width as f64;
    let incoming_w = (width * progress.clamp(0.0, 1.0)).round() as u16;
    let incoming_w = incoming_w.min(area.width);
    let outgoing_w = area.width - incoming_w;

    if incoming_w == 0 {
        // Nothing of the incoming page visible yet; give it a zero-width
        // strip at its entry edge so callers can treat it uniformly.
        let x = match direction {
            Direction::Forward => area.right(),
            Direction::Backward => area.left(),
        };
        return (Some(area), Rect::new(x, area.y, 0, area.height));
    }

    match direction {
        // Incoming enters from the right, outgoing exits left.
        Direction::Forward => {
            let incoming = Rect::new(
                area.x + outgoing_w,
                area.y,
                incoming_w,
                area.height,
            );
            let outgoing = (outgoing_w > 0)
                .then(|| Rect::new(area.x, area.y, outgoing_w, area.height));
            (outgoing, incoming)
        }
        // Incoming enters from the left, outgoing exits right.
        Direction::Backward => {
            let incoming = Rect::new(area.x, area.y, incoming_w, area.height);
            let outgoing = (outgoing_w > 0)
                .then(|| Rect::new(area.x + incoming_w, area.y, outgoing_w, area.height));
            (outgoing, incoming)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use izell_core::EasingKind;

    fn change(from: Page, to: Page, direction: Direction) -> NavChange {
        NavChange {
            from,
            to,
            direction,
        }
    }

    #[test]
    fn disabled_transition_never_activates() {
        let config = TransitionConfig {
            enabled: false,
            ..Default::default()
        };
        let mut slide = PageSlide::new(config);
        slide.start(change(Page::Home, Page::About, Direction::Forward));
        assert!(!slide.is_active());
        assert!(slide.frame().is_none());
    }

    #[test]
    fn zero_duration_completes_instantly() {
        let config = TransitionConfig {
            duration_ms: 0,
            ..Default::default()
        };
        let mut slide = PageSlide::new(config);
        slide.start(change(Page::Home, Page::Contact, Direction::Forward));
        assert!(!slide.is_active());
    }

    #[test]
    fn self_navigation_has_no_motion() {
        let mut slide = PageSlide::new(TransitionConfig::default());
        slide.start(change(Page::About, Page::About, Direction::Backward));
        assert!(!slide.is_active());
    }

    #[test]
    fn slide_activates_and_reports_pages() {
        let config = TransitionConfig {
            duration_ms: 10_000,
            easing: EasingKind::Linear,
            ..Default::default()
        };
        let mut slide = PageSlide::new(config);
        slide.start(change(Page::Home, Page::Projects, Direction::Forward));
        assert!(slide.is_active());
        let frame = slide.frame().expect("slide just started");
        assert_eq!(frame.from, Page::Home);
        assert_eq!(frame.to, Page::Projects);
        assert_eq!(frame.direction, Direction::Forward);
        assert!(frame.progress < 1.0);
    }

    #[test]
    fn cancel_stops_the_slide() {
        let config = TransitionConfig {
            duration_ms: 10_000,
            ..Default::default()
        };
        let mut slide = PageSlide::new(config);
        slide.start(change(Page::Home, Page::About, Direction::Forward));
        slide.cancel();
        assert!(!slide.is_active());
        assert!(slide.frame().is_none());
    }

    #[test]
    fn forward_slide_grows_from_the_right() {
        let area = Rect::new(0, 0, 100, 40);
        let (outgoing, incoming) = slide_areas(area, Direction::Forward, 0.25);
        assert_eq!(incoming.width, 25);
        assert_eq!(incoming.x, 75);
        let outgoing = outgoing.unwrap();
        assert_eq!(outgoing.x, 0);
        assert_eq!(outgoing.width, 75);
    }

    #[test]
    fn backward_slide_grows_from_the_left() {
        let area = Rect::new(10, 2, 100, 40);
        let (outgoing, incoming) = slide_areas(area, Direction::Backward, 0.5);
        assert_eq!(incoming.x, 10);
        assert_eq!(incoming.width, 50);
        let outgoing = outgoing.unwrap();
        assert_eq!(outgoing.x, 60);
        assert_eq!(outgoing.width, 50);
    }

    #[test]
    fn full_progress_covers_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        for direction in [Direction::Forward, Direction::Backward] {
            let (outgoing, incoming) = slide_areas(area, direction, 1.0);
            assert!(outgoing.is_none());
            assert_eq!(incoming, area);
        }
    }

    #[test]
    fn zero_progress_keeps_outgoing_whole() {
        let area = Rect::new(0, 0, 80, 24);
        let (outgoing, incoming) = slide_areas(area, Direction::Forward, 0.0);
        assert_eq!(outgoing, Some(area));
        assert_eq!(incoming.width, 0);
    }
}
