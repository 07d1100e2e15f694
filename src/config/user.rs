use gtk::gdk::RGBA;
use gtk::glib::{system_config_dirs, user_config_dir};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use pageprogress::widgets::page_indicator::{
	DEFAULT_ANIMATION_DURATION, DEFAULT_SEGMENT_HEIGHT, DEFAULT_SPACING,
};

use super::CONFIG_DIR_NAME;

pub const SEGMENTS_DEFAULT: u32 = 5;
pub const MAX_SEGMENTS_DEFAULT: u32 = 10;
pub const ACTIVE_COLOR_DEFAULT: &str = "blue";
pub const INACTIVE_COLOR_DEFAULT: &str = "gray";

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Could not read config file '{path}': {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("Could not parse config file: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("'{0}' is not a valid color")]
	InvalidColor(String),
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IndicatorConfig {
	pub segments: Option<u32>,
	pub active_color: Option<String>,
	pub inactive_color: Option<String>,
	pub spacing: Option<u32>,
	pub segment_height: Option<u32>,
	pub animation_duration: Option<u32>,
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
	pub style: Option<PathBuf>,
	pub max_segments: Option<u32>,
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
	#[serde(default)]
	pub indicator: IndicatorConfig,
	#[serde(default)]
	pub demo: DemoConfig,
}

/// Concrete values the demo window is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSettings {
	pub segments: u32,
	pub max_segments: u32,
	pub active_color: RGBA,
	pub inactive_color: RGBA,
	pub spacing: u32,
	pub segment_height: u32,
	pub animation_duration: u32,
}

pub fn parse_color(value: &str) -> Result<RGBA, ConfigError> {
	RGBA::parse(value.trim()).map_err(|_| ConfigError::InvalidColor(value.to_owned()))
}

impl UserConfig {
	pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(contents)?)
	}

	pub fn resolve(&self) -> Result<IndicatorSettings, ConfigError> {
		let indicator = &self.indicator;
		let max_segments = self.demo.max_segments.unwrap_or(MAX_SEGMENTS_DEFAULT).max(1);
		let segments = indicator
			.segments
			.unwrap_or(SEGMENTS_DEFAULT)
			.clamp(1, max_segments);

		Ok(IndicatorSettings {
			segments,
			max_segments,
			active_color: parse_color(
				indicator.active_color.as_deref().unwrap_or(ACTIVE_COLOR_DEFAULT),
			)?,
			inactive_color: parse_color(
				indicator.inactive_color.as_deref().unwrap_or(INACTIVE_COLOR_DEFAULT),
			)?,
			spacing: indicator.spacing.unwrap_or(DEFAULT_SPACING),
			segment_height: indicator.segment_height.unwrap_or(DEFAULT_SEGMENT_HEIGHT).max(1),
			animation_duration: indicator
				.animation_duration
				.unwrap_or(DEFAULT_ANIMATION_DURATION),
		})
	}
}

fn find_user_config() -> Option<PathBuf> {
	let path = user_config_dir().join(CONFIG_DIR_NAME).join("config.toml");
	if path.exists() {
		return Some(path);
	}

	for path in system_config_dirs() {
		let path = path.join(CONFIG_DIR_NAME).join("config.toml");
		if path.exists() {
			return Some(path);
		}
	}

	None
}

pub fn read_user_config(path: Option<&Path>) -> Result<UserConfig, ConfigError> {
	let path = match path.map(Path::to_owned).or_else(find_user_config) {
		Some(path) => path,
		None => {
			log::debug!("No config file found, using defaults");
			return Ok(Default::default());
		}
	};

	log::info!("Loading config from {}", path.display());
	let config_file =
		std::fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })?;
	UserConfig::from_toml(&config_file)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_config_uses_defaults() {
		let settings = UserConfig::from_toml("").unwrap().resolve().unwrap();
		assert_eq!(settings.segments, SEGMENTS_DEFAULT);
		assert_eq!(settings.max_segments, MAX_SEGMENTS_DEFAULT);
		assert_eq!(settings.spacing, DEFAULT_SPACING);
		assert_eq!(settings.segment_height, DEFAULT_SEGMENT_HEIGHT);
		assert_eq!(settings.animation_duration, DEFAULT_ANIMATION_DURATION);
		assert_eq!(settings.active_color, RGBA::new(0.0, 0.0, 1.0, 1.0));
	}

	#[test]
	fn test_full_config() {
		let config = UserConfig::from_toml(
			r##"
			[indicator]
			segments = 3
			active_color = "#ff0000"
			inactive_color = "rgba(0, 0, 0, 0.5)"
			spacing = 4
			segment_height = 6
			animation_duration = 250

			[demo]
			style = "/tmp/style.css"
			max_segments = 8
			"##,
		)
		.unwrap();
		assert_eq!(config.demo.style, Some(PathBuf::from("/tmp/style.css")));

		let settings = config.resolve().unwrap();
		assert_eq!(settings.segments, 3);
		assert_eq!(settings.max_segments, 8);
		assert_eq!(settings.active_color, RGBA::new(1.0, 0.0, 0.0, 1.0));
		assert_eq!(settings.inactive_color, RGBA::new(0.0, 0.0, 0.0, 0.5));
		assert_eq!(settings.spacing, 4);
		assert_eq!(settings.segment_height, 6);
		assert_eq!(settings.animation_duration, 250);
	}

	#[test]
	fn test_unknown_key_is_rejected() {
		let result = UserConfig::from_toml("[indicator]\nsegmnets = 3\n");
		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}

	#[test]
	fn test_bad_color_is_rejected() {
		let config = UserConfig::from_toml("[indicator]\nactive_color = \"not-a-color\"\n").unwrap();
		match config.resolve() {
			Err(ConfigError::InvalidColor(color)) => assert_eq!(color, "not-a-color"),
			other => panic!("expected an invalid color error, got {:?}", other),
		}
	}

	#[test]
	fn test_segments_are_kept_in_range() {
		let config = UserConfig::from_toml("[indicator]\nsegments = 40\n").unwrap();
		assert_eq!(config.resolve().unwrap().segments, MAX_SEGMENTS_DEFAULT);

		let config = UserConfig::from_toml("[indicator]\nsegments = 0\n").unwrap();
		assert_eq!(config.resolve().unwrap().segments, 1);
	}

	#[test]
	fn test_missing_explicit_path_is_an_error() {
		let result = read_user_config(Some(Path::new("/nonexistent/pageprogress/config.toml")));
		assert!(matches!(result, Err(ConfigError::Io { .. })));
	}
}
