use gtk::{
	glib::{self, clone},
	prelude::*,
};

use pageprogress::widgets::PageIndicator;

use crate::config::user::IndicatorSettings;
use crate::utils::{current_segment_label, progress_label, segments_label};

/// The demo screen: the indicator on top, then one row per setting.
#[derive(Clone, Debug)]
pub struct DemoWindow {
	pub window: gtk::ApplicationWindow,
	indicator: PageIndicator,
	segments_spin: gtk::SpinButton,
	current_spin: gtk::SpinButton,
	progress_scale: gtk::Scale,
	clear_button: gtk::Button,
	segments_label: gtk::Label,
	current_label: gtk::Label,
	progress_label: gtk::Label,
}

impl DemoWindow {
	pub fn new(app: &gtk::Application, settings: &IndicatorSettings) -> Self {
		let window = cascade! {
			gtk::ApplicationWindow::new(app);
			..set_title(Some("Page Progress"));
			..add_css_class("demo");
			..set_default_size(360, 280);
		};

		let indicator = cascade! {
			PageIndicator::new(settings.segments);
			..set_active_color(settings.active_color.clone());
			..set_inactive_color(settings.inactive_color.clone());
			..set_spacing(settings.spacing);
			..set_segment_height(settings.segment_height);
			..set_animation_duration(settings.animation_duration);
			..set_hexpand(true);
		};

		let segments_spin = cascade! {
			gtk::SpinButton::with_range(1.0, settings.max_segments as f64, 1.0);
			..set_value(indicator.n_segments() as f64);
		};
		let current_spin = cascade! {
			gtk::SpinButton::with_range(0.0, (indicator.n_segments() - 1) as f64, 1.0);
			..set_value(indicator.active_index() as f64);
		};
		let progress_scale = cascade! {
			gtk::Scale::with_range(gtk::Orientation::Horizontal, 0.0, 1.0, 0.01);
			..set_value(indicator.active_progress());
			..set_hexpand(true);
		};

		let clear_button = gtk::Button::with_label("Clear");

		let segments_label = Self::build_label(&segments_label(indicator.n_segments()));
		let current_label = Self::build_label(&current_segment_label(indicator.active_index()));
		let progress_label = Self::build_label(&progress_label(indicator.active_progress()));

		let container = cascade! {
			gtk::Box::new(gtk::Orientation::Vertical, 0);
			..append(&indicator);
			..append(&Self::build_row(&segments_spin, &segments_label));
			..append(&Self::build_row(&current_spin, &current_label));
			..append(&progress_scale);
			..append(&Self::build_row(&clear_button, &progress_label));
		};
		window.set_child(Some(&container));

		let demo = Self {
			window,
			indicator,
			segments_spin,
			current_spin,
			progress_scale,
			clear_button,
			segments_label,
			current_label,
			progress_label,
		};
		demo.connect_controls();
		demo
	}

	pub fn present(&self) {
		self.window.present();
	}

	fn connect_controls(&self) {
		self.segments_spin.connect_value_changed(clone!(
			#[weak(rename_to = indicator)]
			self.indicator,
			move |spin| indicator.set_n_segments(spin.value_as_int().max(1) as u32)
		));
		self.current_spin.connect_value_changed(clone!(
			#[weak(rename_to = indicator)]
			self.indicator,
			move |spin| indicator.set_active_index(spin.value_as_int().max(0) as u32)
		));
		self.progress_scale.connect_value_changed(clone!(
			#[weak(rename_to = indicator)]
			self.indicator,
			move |scale| indicator.set_active_progress(scale.value())
		));
		self.clear_button.connect_clicked(clone!(
			#[weak(rename_to = indicator)]
			self.indicator,
			move |_| indicator.clear_progress()
		));

		// The labels and the current segment range follow the indicator, so
		// clamping done by the widget is always what the user sees.
		self.indicator.connect_n_segments_notify(clone!(
			#[weak(rename_to = label)]
			self.segments_label,
			#[weak(rename_to = current_spin)]
			self.current_spin,
			move |indicator| {
				let n_segments = indicator.n_segments();
				log::debug!("Indicator now has {} segments", n_segments);
				label.set_text(&segments_label(n_segments));
				current_spin.set_range(0.0, (n_segments - 1) as f64);
			}
		));
		self.indicator.connect_active_index_notify(clone!(
			#[weak(rename_to = label)]
			self.current_label,
			#[weak(rename_to = current_spin)]
			self.current_spin,
			move |indicator| {
				let index = indicator.active_index();
				label.set_text(&current_segment_label(index));
				current_spin.set_value(index as f64);
			}
		));
		self.indicator.connect_active_progress_notify(clone!(
			#[weak(rename_to = label)]
			self.progress_label,
			#[weak(rename_to = scale)]
			self.progress_scale,
			move |indicator| {
				let progress = indicator.active_progress();
				label.set_text(&progress_label(progress));
				scale.set_value(progress);
			}
		));
	}

	fn build_row(control: &impl IsA<gtk::Widget>, label: &gtk::Label) -> gtk::Box {
		cascade! {
			gtk::Box::new(gtk::Orientation::Horizontal, 0);
			..add_css_class("control-row");
			..append(control);
			..append(label);
		}
	}

	fn build_label(text: &str) -> gtk::Label {
		cascade! {
			gtk::Label::new(Some(text));
			..set_halign(gtk::Align::Start);
			..set_valign(gtk::Align::Center);
		}
	}
}
