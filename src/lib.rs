//! A segmented page-progress indicator for GTK 4.
//!
//! [`SegmentState`] holds the indicator's model and derives the per-segment
//! fill list; [`widgets::PageIndicator`] paints it.

#[macro_use]
extern crate cascade;

pub mod segment_state;
pub mod widgets;

pub use segment_state::{fill_ratio, render, SegmentFill, SegmentFillList, SegmentState};
