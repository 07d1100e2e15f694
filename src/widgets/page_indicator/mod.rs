mod imp;
mod segment;

use gtk::{
	glib::{self, Object},
	subclass::prelude::*,
};

use crate::segment_state::SegmentFillList;

pub use imp::{DEFAULT_ANIMATION_DURATION, DEFAULT_SEGMENT_HEIGHT, DEFAULT_SPACING};
pub use segment::SegmentWidget;

glib::wrapper! {
	/// A row of thin bars, one per page. Pages before `active-index` are full,
	/// the active page is filled to `active-progress` and the rest are empty.
	pub struct PageIndicator(ObjectSubclass<imp::PageIndicator>)
		@extends gtk::Widget,
		@implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl PageIndicator {
	pub fn new(n_segments: u32) -> Self {
		Object::builder().property("n-segments", n_segments).build()
	}

	/// The fill list the segments are currently painted from.
	pub fn fills(&self) -> SegmentFillList {
		self.imp().fills()
	}

	pub fn clear_progress(&self) {
		self.set_active_progress(0.0);
	}
}

impl Default for PageIndicator {
	fn default() -> Self {
		Self::new(5)
	}
}
