use std::cell::{Cell, RefCell};

use gtk::{
	gdk,
	glib::{self, Properties},
	prelude::*,
	subclass::prelude::*,
};

use crate::segment_state::{SegmentFillList, SegmentState};
use crate::widgets::page_indicator::segment::SegmentWidget;

pub const DEFAULT_SPACING: u32 = 10;
pub const DEFAULT_SEGMENT_HEIGHT: u32 = 2;
pub const DEFAULT_ANIMATION_DURATION: u32 = 100;

#[derive(Properties, Debug)]
#[properties(wrapper_type = super::PageIndicator)]
pub struct PageIndicator {
	#[property(name = "n-segments", get = Self::n_segments, set = Self::set_n_segments, type = u32)]
	#[property(name = "active-index", get = Self::active_index, set = Self::set_active_index, type = u32)]
	#[property(name = "active-progress", get = Self::active_progress, set = Self::set_active_progress, type = f64)]
	#[property(name = "active-color", get = Self::active_color, set = Self::set_active_color, type = gdk::RGBA)]
	#[property(name = "inactive-color", get = Self::inactive_color, set = Self::set_inactive_color, type = gdk::RGBA)]
	state: RefCell<SegmentState>,

	#[property(get, set = Self::set_spacing)]
	spacing: Cell<u32>,

	#[property(get, set = Self::set_segment_height)]
	segment_height: Cell<u32>,

	/// Milliseconds
	#[property(get, set = Self::set_animation_duration)]
	animation_duration: Cell<u32>,

	children: RefCell<Vec<SegmentWidget>>,
}

impl Default for PageIndicator {
	fn default() -> Self {
		Self {
			state: RefCell::new(SegmentState::default()),
			spacing: Cell::new(DEFAULT_SPACING),
			segment_height: Cell::new(DEFAULT_SEGMENT_HEIGHT),
			animation_duration: Cell::new(DEFAULT_ANIMATION_DURATION),
			children: RefCell::new(Vec::new()),
		}
	}
}

impl PageIndicator {
	fn n_segments(&self) -> u32 {
		self.state.borrow().segment_count() as u32
	}

	fn active_index(&self) -> u32 {
		self.state.borrow().active_index() as u32
	}

	fn active_progress(&self) -> f64 {
		self.state.borrow().active_progress()
	}

	fn active_color(&self) -> gdk::RGBA {
		self.state.borrow().active_color()
	}

	fn inactive_color(&self) -> gdk::RGBA {
		self.state.borrow().inactive_color()
	}

	pub(super) fn fills(&self) -> SegmentFillList {
		self.state.borrow().fills().to_vec()
	}

	fn set_n_segments(&self, new_n_segments: u32) {
		let index_changed = {
			let mut state = self.state.borrow_mut();
			let old_index = state.active_index();
			state.set_segment_count(new_n_segments as usize);
			old_index != state.active_index()
		};

		if index_changed {
			self.obj().notify_active_index();
		}

		self.update_accessible();
		self.update_children(false);
	}

	fn set_active_index(&self, new_index: u32) {
		self.state.borrow_mut().set_active_index(new_index as usize);

		self.update_accessible();
		self.update_children(true);
	}

	fn set_active_progress(&self, new_progress: f64) {
		self.state.borrow_mut().set_active_progress(new_progress);

		self.update_accessible();
		self.update_children(true);
	}

	fn set_active_color(&self, color: gdk::RGBA) {
		self.state.borrow_mut().set_active_color(color);
		self.update_children(false);
	}

	fn set_inactive_color(&self, color: gdk::RGBA) {
		self.state.borrow_mut().set_inactive_color(color);
		self.update_children(false);
	}

	fn set_spacing(&self, spacing: u32) {
		self.spacing.set(spacing);
		if let Some(layout) = self.obj().layout_manager().and_downcast::<gtk::BoxLayout>() {
			layout.set_spacing(spacing);
		}
	}

	fn set_segment_height(&self, height: u32) {
		self.segment_height.set(height);
		for segment in self.children.borrow().iter() {
			segment.set_height_request(height as i32);
		}
	}

	fn set_animation_duration(&self, duration: u32) {
		self.animation_duration.set(duration);
		for segment in self.children.borrow().iter() {
			segment.set_animation_duration(duration);
		}
	}

	/// The whole indicator reads as one value: completed pages plus the
	/// progress of the current one.
	fn update_accessible(&self) {
		let (n_segments, now) = {
			let state = self.state.borrow();
			let now = state.active_index() as f64 + state.active_progress();
			(state.segment_count() as f64, now)
		};

		self.obj().update_property(&[
			gtk::accessible::Property::ValueMin(0_f64),
			gtk::accessible::Property::ValueMax(n_segments),
			gtk::accessible::Property::ValueNow(now),
		]);
	}

	fn update_children(&self, animated: bool) {
		let state = self.state.borrow();
		let fills = state.fills();
		let mut children = self.children.borrow_mut();

		if children.len() != fills.len() {
			// Remove all previous segments
			for segment in children.drain(..) {
				segment.unparent();
			}
			// Add the new number of segments
			for fill in fills {
				let segment = cascade! {
					SegmentWidget::new();
					..set_animation_duration(self.animation_duration.get());
					..set_height_request(self.segment_height.get() as i32);
					..apply(fill, false);
					..set_parent(&*self.obj());
				};
				children.push(segment);
			}
		} else {
			for (segment, fill) in children.iter().zip(fills) {
				segment.apply(fill, animated);
			}
		}
	}
}

#[glib::object_subclass]
impl ObjectSubclass for PageIndicator {
	const NAME: &'static str = "PageIndicator";
	type Type = super::PageIndicator;
	type ParentType = gtk::Widget;

	fn class_init(klass: &mut Self::Class) {
		klass.set_layout_manager_type::<gtk::BoxLayout>();
		klass.set_css_name("pageindicator");
		klass.set_accessible_role(gtk::AccessibleRole::ProgressBar);
	}
}

#[glib::derived_properties]
impl ObjectImpl for PageIndicator {
	fn constructed(&self) {
		self.parent_constructed();

		self.set_spacing(self.spacing.get());
		self.update_accessible();
		self.update_children(false);
	}

	fn dispose(&self) {
		// Remove all children
		for segment in self.children.borrow_mut().drain(..) {
			segment.unparent();
		}
	}
}

impl WidgetImpl for PageIndicator {}
