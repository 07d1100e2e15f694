use gtk::glib::{system_config_dirs, user_config_dir};
use std::path::{Path, PathBuf};

use crate::config::CONFIG_DIR_NAME;

pub fn get_system_css_path() -> Option<PathBuf> {
	let mut paths: Vec<PathBuf> = Vec::new();
	for path in system_config_dirs() {
		paths.push(path.join(CONFIG_DIR_NAME).join("style.css"));
	}

	paths.push(Path::new("/usr/local/etc/xdg/pageprogress/style.css").to_path_buf());

	paths.into_iter().find(|path| path.exists())
}

pub fn user_style_path(custom_path: Option<PathBuf>) -> Option<PathBuf> {
	if let Some(custom_path) = custom_path {
		if custom_path.exists() {
			return Some(custom_path);
		}
		log::warn!("Stylesheet {} does not exist", custom_path.display());
	}

	let path = user_config_dir().join(CONFIG_DIR_NAME).join("style.css");
	if path.exists() {
		return Some(path);
	}
	None
}

pub fn segments_label(n_segments: u32) -> String {
	format!("Segments: {}", n_segments)
}

pub fn current_segment_label(index: u32) -> String {
	format!("Current Segment: {}", index)
}

pub fn progress_label(progress: f64) -> String {
	format!("Progress: {:.2}", progress)
}
