use crate::config::{user::IndicatorSettings, APPLICATION_NAME};
use crate::demo_window::DemoWindow;
use gtk::{gio::ApplicationFlags, prelude::*, Application};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Shrinkwrap)]
pub struct PageProgressApplication {
	#[shrinkwrap(main_field)]
	app: gtk::Application,
	window: Rc<RefCell<Option<DemoWindow>>>,
	settings: Rc<IndicatorSettings>,
}

impl PageProgressApplication {
	pub fn new(settings: IndicatorSettings) -> Self {
		let app = Application::new(Some(APPLICATION_NAME), ApplicationFlags::FLAGS_NONE);

		PageProgressApplication {
			app,
			window: Rc::new(RefCell::new(None)),
			settings: Rc::new(settings),
		}
	}

	pub fn start(&self) -> i32 {
		let demo_app = self.clone();
		self.app.connect_activate(move |_| demo_app.activate());

		// Arguments were already handled by clap
		let empty_args: Vec<String> = vec![];
		self.app.run_with_args(&empty_args).into()
	}

	/// Builds the window on first activation and presents it again afterwards.
	fn activate(&self) {
		let mut window = self.window.borrow_mut();
		let window = window.get_or_insert_with(|| {
			log::info!(
				"Creating demo window with {} segments",
				self.settings.segments
			);
			DemoWindow::new(&self.app, &self.settings)
		});
		window.present();
	}
}
