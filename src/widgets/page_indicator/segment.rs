use gtk::{
	gdk, glib,
	glib::{Object, Properties},
	graphene,
	prelude::*,
	subclass::prelude::*,
};
use std::cell::{Cell, RefCell};

use crate::segment_state::{default_active_color, default_inactive_color, SegmentFill};

glib::wrapper! {
	pub struct SegmentWidget(ObjectSubclass<imp::SegmentWidget>)
		@extends gtk::Widget,
		@implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl SegmentWidget {
	pub fn new() -> Self {
		Object::new()
	}

	/// Applies a fill entry, animating the width change if asked to.
	pub fn apply(&self, fill: &SegmentFill, animated: bool) {
		self.imp().set_colors(&fill.fill_color, &fill.track_color);
		self.set_fill(fill.ratio, animated);
	}

	pub fn set_fill(&self, ratio: f64, animated: bool) {
		self.imp().set_fill(ratio, animated);
	}
}

impl Default for SegmentWidget {
	fn default() -> Self {
		Self::new()
	}
}

/// Linear interpolation between two fill ratios, `t` in `[0, 1]`.
pub(crate) fn interpolate(from: f64, to: f64, t: f64) -> f64 {
	from + (to - from) * t.clamp(0.0, 1.0)
}

/// Position of an animation that started at `start` and lasts `duration_us`.
pub(crate) fn animation_position(start: i64, now: i64, duration_us: i64) -> f64 {
	if duration_us <= 0 {
		return 1.0;
	}
	((now - start) as f64 / duration_us as f64).clamp(0.0, 1.0)
}

mod imp {
	use super::*;

	#[derive(Properties, Default)]
	#[properties(wrapper_type = super::SegmentWidget)]
	pub struct SegmentWidget {
		#[property(get)]
		fill: Cell<f64>,

		/// Milliseconds
		#[property(get, set)]
		animation_duration: Cell<u32>,

		/// Lags behind `fill` while animating
		shown: Cell<f64>,
		colors: RefCell<Option<(gdk::RGBA, gdk::RGBA)>>,

		anim_from: Cell<f64>,
		anim_start: Cell<Option<i64>>,
		tick_id: RefCell<Option<gtk::TickCallbackId>>,
	}

	impl SegmentWidget {
		pub(super) fn set_colors(&self, fill: &gdk::RGBA, track: &gdk::RGBA) {
			let mut colors = self.colors.borrow_mut();
			if let Some((old_fill, old_track)) = colors.as_ref() {
				if old_fill == fill && old_track == track {
					return;
				}
			}
			*colors = Some((fill.clone(), track.clone()));
			drop(colors);
			self.obj().queue_draw();
		}

		pub(super) fn set_fill(&self, ratio: f64, animated: bool) {
			let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
			if ratio == self.fill.get() && self.tick_id.borrow().is_none() {
				return;
			}
			self.fill.set(ratio);
			self.obj().notify_fill();

			if animated && self.animation_duration.get() > 0 && self.obj().is_mapped() {
				self.start_animation();
			} else {
				self.stop_animation();
				self.shown.set(ratio);
				self.obj().queue_draw();
			}
		}

		fn start_animation(&self) {
			self.stop_animation();
			self.anim_from.set(self.shown.get());
			self.anim_start.set(None);

			let id = self.obj().add_tick_callback(|segment, clock| {
				let imp = segment.imp();
				let now = clock.frame_time();
				let start = match imp.anim_start.get() {
					Some(start) => start,
					None => {
						imp.anim_start.set(Some(now));
						now
					}
				};
				let duration_us = imp.animation_duration.get() as i64 * 1000;
				let t = animation_position(start, now, duration_us);

				imp.shown.set(interpolate(imp.anim_from.get(), imp.fill.get(), t));
				segment.queue_draw();

				if t >= 1.0 {
					// GTK drops the callback itself once we break
					imp.tick_id.take();
					glib::ControlFlow::Break
				} else {
					glib::ControlFlow::Continue
				}
			});
			self.tick_id.replace(Some(id));
		}

		fn stop_animation(&self) {
			if let Some(id) = self.tick_id.take() {
				id.remove();
			}
		}
	}

	#[glib::object_subclass]
	impl ObjectSubclass for SegmentWidget {
		const NAME: &'static str = "PageIndicatorSegment";
		type Type = super::SegmentWidget;
		type ParentType = gtk::Widget;

		fn class_init(klass: &mut Self::Class) {
			klass.set_css_name("segment");
		}
	}

	#[glib::derived_properties]
	impl ObjectImpl for SegmentWidget {
		fn constructed(&self) {
			self.parent_constructed();
			self.obj().set_hexpand(true);
			self.obj().set_valign(gtk::Align::Center);
			self.animation_duration.set(100);
		}

		fn dispose(&self) {
			self.stop_animation();
		}
	}

	impl WidgetImpl for SegmentWidget {
		fn snapshot(&self, snapshot: &gtk::Snapshot) {
			let widget = self.obj();
			let width = widget.width() as f32;
			let height = widget.height() as f32;
			if width <= 0.0 || height <= 0.0 {
				return;
			}

			let (fill, track) = self
				.colors
				.borrow()
				.clone()
				.unwrap_or_else(|| (default_active_color(), default_inactive_color()));

			snapshot.append_color(&track, &graphene::Rect::new(0.0, 0.0, width, height));

			let fill_width = width * self.shown.get() as f32;
			if fill_width > 0.0 {
				snapshot.append_color(&fill, &graphene::Rect::new(0.0, 0.0, fill_width, height));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_interpolate() {
		assert_eq!(interpolate(0.0, 1.0, 0.0), 0.0);
		assert_eq!(interpolate(0.0, 1.0, 0.5), 0.5);
		assert_eq!(interpolate(1.0, 0.0, 0.25), 0.75);
		assert_eq!(interpolate(0.2, 0.6, 3.0), 0.6);
	}

	#[test]
	fn test_animation_position() {
		assert_eq!(animation_position(1_000, 1_000, 100_000), 0.0);
		assert_eq!(animation_position(1_000, 51_000, 100_000), 0.5);
		assert_eq!(animation_position(1_000, 500_000, 100_000), 1.0);
		assert_eq!(animation_position(1_000, 1_000, 0), 1.0);
	}
}
