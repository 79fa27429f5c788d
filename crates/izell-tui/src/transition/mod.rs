//! Page slide transitions.
//!
//! When the navigation controller switches pages, the incoming page slides
//! in from the side matching the transition direction while the outgoing
//! page yields the rest of the body area. `easing` and `timing` are pure
//! helpers; `slide` combines them into the animator driven by the main loop.

pub mod easing;
pub mod slide;
pub mod timing;

pub use easing::Easing;
pub use slide::{slide_areas, PageSlide, SlideFrame};
