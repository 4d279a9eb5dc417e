//! Scroll Reveal Utilities
//!
//! Viewport-driven helpers for server-rendered pages.
//! - `VisibilityObserver`: IntersectionObserver wrapper firing when elements cross a threshold
//! - `CounterAnimation`: frame-stepped interpolation for statistic counters
//! - reveal styling: fade-and-lift elements in once they are seen

mod counter;
mod observer;
mod reveal;

pub use counter::{animate_counter, CounterAnimation, CounterTarget, Frame, DEFAULT_DURATION_MS, FRAME_INTERVAL_MS};
pub use observer::{Trigger, VisibilityObserver};
pub use reveal::{mark_once, prepare_reveal, reveal, COUNTED_CLASS, REVEALED_CLASS, REVEALED_CSS};
