use clap::Parser;
use std::path::PathBuf;

use crate::config::user::UserConfig;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help(false))]
pub struct ArgsDemo {
	/// Use a custom config file instead of looking for one.
	#[arg(long, value_name = "Config File Path")]
	pub config: Option<PathBuf>,

	/// Use a custom Stylesheet file instead of looking for one
	#[arg(long, short, value_name = "CSS File Path")]
	pub style: Option<PathBuf>,

	/// Number of segments to start with
	#[arg(long, value_name = "1-100", value_parser = clap::value_parser!(u32).range(1..=100))]
	pub segments: Option<u32>,

	/// Color of the filled part of a segment (any CSS color)
	#[arg(long, value_name = "CSS color")]
	pub active_color: Option<String>,

	/// Color of the unfilled part of a segment (any CSS color)
	#[arg(long, value_name = "CSS color")]
	pub inactive_color: Option<String>,

	/// Duration of the fill animation in milliseconds (0 disables it)
	#[arg(long, value_name = "0-5000", value_parser = clap::value_parser!(u32).range(0..=5000))]
	pub animation_duration: Option<u32>,
}

impl ArgsDemo {
	/// Command line values win over the ones from the config file.
	pub fn apply_to(&self, config: &mut UserConfig) {
		let indicator = &mut config.indicator;
		if let Some(segments) = self.segments {
			indicator.segments = Some(segments);
		}
		if let Some(color) = &self.active_color {
			indicator.active_color = Some(color.clone());
		}
		if let Some(color) = &self.inactive_color {
			indicator.inactive_color = Some(color.clone());
		}
		if let Some(duration) = self.animation_duration {
			indicator.animation_duration = Some(duration);
		}
		if let Some(style) = &self.style {
			config.demo.style = Some(style.clone());
		}
	}
}
