mod application;
mod demo_window;
mod utils;

#[path = "../args.rs"]
mod args;
#[path = "../config.rs"]
mod config;

#[macro_use]
extern crate shrinkwraprs;

#[macro_use]
extern crate cascade;

use anyhow::Context;
use application::PageProgressApplication;
use args::ArgsDemo;
use clap::Parser;
use gtk::{gdk::Display, CssProvider};
use std::path::Path;
use utils::{get_system_css_path, user_style_path};

const DEFAULT_STYLE: &str = include_str!("../../data/style.css");

fn add_provider(display: &Display, provider: &CssProvider) {
	gtk::style_context_add_provider_for_display(
		display,
		provider,
		gtk::STYLE_PROVIDER_PRIORITY_APPLICATION as u32,
	);
}

fn load_stylesheet(display: &Display, path: &Path) {
	let provider = CssProvider::new();
	let shown = path.display().to_string();
	provider.connect_parsing_error(move |_provider, _section, error| {
		log::warn!("Could not parse stylesheet {}: {}", shown, error);
	});
	provider.load_from_path(path);
	add_provider(display, &provider);
	log::info!("Loaded stylesheet {}", path.display());
}

fn load_styles(style: Option<std::path::PathBuf>) -> anyhow::Result<()> {
	let display = Display::default().context("Failed getting the default display")?;

	// Built-in layout, always present
	let provider = CssProvider::new();
	provider.connect_parsing_error(|_provider, _section, error| {
		log::error!("Could not load default CSS stylesheet: {}", error);
	});
	provider.load_from_data(DEFAULT_STYLE);
	add_provider(&display, &provider);

	match get_system_css_path() {
		Some(path) => load_stylesheet(&display, &path),
		None => log::debug!("No system stylesheet found"),
	}

	if let Some(path) = user_style_path(style) {
		load_stylesheet(&display, &path);
	}
	Ok(())
}

fn run() -> anyhow::Result<i32> {
	let args = ArgsDemo::parse();

	let mut user_config = config::user::read_user_config(args.config.as_deref())
		.context("Failed to load config file")?;
	args.apply_to(&mut user_config);
	let settings = user_config
		.resolve()
		.context("Invalid indicator settings")?;

	gtk::init().context("Failed to initialize GTK")?;
	load_styles(user_config.demo.style.clone())?;

	Ok(PageProgressApplication::new(settings).start())
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	match run() {
		Ok(code) => std::process::exit(code),
		Err(error) => {
			log::error!("{:#}", error);
			std::process::exit(1);
		}
	}
}
