//! The model behind the page indicator.
//!
//! A [`SegmentState`] owns the segment count, the active segment, the
//! progress inside the active segment and the two colors. Every setter clamps
//! its input and hands back the recomputed [`SegmentFillList`], so a caller
//! never has to ask for a refresh.

use gtk::gdk::RGBA;

/// Smallest number of segments an indicator can show.
pub const MIN_SEGMENTS: usize = 1;

/// How one segment should be painted.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentFill {
	/// Fraction of the segment width drawn in `fill_color`, in `[0, 1]`.
	pub ratio: f64,
	pub fill_color: RGBA,
	pub track_color: RGBA,
}

pub type SegmentFillList = Vec<SegmentFill>;

pub fn default_active_color() -> RGBA {
	RGBA::new(1.0, 1.0, 1.0, 1.0)
}

pub fn default_inactive_color() -> RGBA {
	RGBA::new(0.0, 0.0, 0.0, 0.6)
}

/// Fill ratio of segment `index` when `active_index` is the current page.
pub fn fill_ratio(index: usize, active_index: usize, active_progress: f64) -> f64 {
	match index.cmp(&active_index) {
		std::cmp::Ordering::Less => 1.0,
		std::cmp::Ordering::Equal => active_progress,
		std::cmp::Ordering::Greater => 0.0,
	}
}

/// Computes the fill list of `state` from scratch.
pub fn render(state: &SegmentState) -> SegmentFillList {
	(0..state.segment_count)
		.map(|index| SegmentFill {
			ratio: fill_ratio(index, state.active_index, state.active_progress),
			fill_color: state.active_color.clone(),
			track_color: state.inactive_color.clone(),
		})
		.collect()
}

fn clamp_progress(progress: f64) -> f64 {
	if progress.is_nan() {
		return 0.0;
	}
	progress.clamp(0.0, 1.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentState {
	segment_count: usize,
	active_index: usize,
	active_progress: f64,
	active_color: RGBA,
	inactive_color: RGBA,
	fills: SegmentFillList,
}

impl Default for SegmentState {
	fn default() -> Self {
		Self::new(MIN_SEGMENTS)
	}
}

impl SegmentState {
	pub fn new(segment_count: usize) -> Self {
		let mut state = Self {
			segment_count: segment_count.max(MIN_SEGMENTS),
			active_index: 0,
			active_progress: 0.0,
			active_color: default_active_color(),
			inactive_color: default_inactive_color(),
			fills: Vec::new(),
		};
		state.fills = render(&state);
		state
	}

	pub fn with_colors(mut self, active_color: RGBA, inactive_color: RGBA) -> Self {
		self.active_color = active_color;
		self.inactive_color = inactive_color;
		self.fills = render(&self);
		self
	}

	pub fn segment_count(&self) -> usize {
		self.segment_count
	}

	pub fn active_index(&self) -> usize {
		self.active_index
	}

	pub fn active_progress(&self) -> f64 {
		self.active_progress
	}

	pub fn active_color(&self) -> RGBA {
		self.active_color.clone()
	}

	pub fn inactive_color(&self) -> RGBA {
		self.inactive_color.clone()
	}

	pub fn fills(&self) -> &[SegmentFill] {
		&self.fills
	}

	/// Resizes the indicator. The active index is pulled back onto the last
	/// segment when it no longer fits.
	pub fn set_segment_count(&mut self, segment_count: usize) -> &[SegmentFill] {
		self.segment_count = segment_count.max(MIN_SEGMENTS);
		self.active_index = self.active_index.min(self.segment_count - 1);
		self.fills = render(self);
		&self.fills
	}

	pub fn set_active_index(&mut self, active_index: usize) -> &[SegmentFill] {
		self.active_index = active_index.min(self.segment_count - 1);
		let (index, progress) = (self.active_index, self.active_progress);
		for (i, fill) in self.fills.iter_mut().enumerate() {
			fill.ratio = fill_ratio(i, index, progress);
		}
		&self.fills
	}

	/// Only the active segment changes.
	pub fn set_active_progress(&mut self, progress: f64) -> &[SegmentFill] {
		self.active_progress = clamp_progress(progress);
		if let Some(fill) = self.fills.get_mut(self.active_index) {
			fill.ratio = self.active_progress;
		}
		&self.fills
	}

	pub fn clear_progress(&mut self) -> &[SegmentFill] {
		self.set_active_progress(0.0)
	}

	pub fn set_active_color(&mut self, color: RGBA) -> &[SegmentFill] {
		for fill in self.fills.iter_mut() {
			fill.fill_color = color.clone();
		}
		self.active_color = color;
		&self.fills
	}

	pub fn set_inactive_color(&mut self, color: RGBA) -> &[SegmentFill] {
		for fill in self.fills.iter_mut() {
			fill.track_color = color.clone();
		}
		self.inactive_color = color;
		&self.fills
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ratios(fills: &[SegmentFill]) -> Vec<f64> {
		fills.iter().map(|fill| fill.ratio).collect()
	}

	#[test]
	fn test_segment_count_sets_length() {
		let mut state = SegmentState::default();
		for n in 1..=12 {
			assert_eq!(state.set_segment_count(n).len(), n);
			assert_eq!(state.segment_count(), n);
		}
	}

	#[test]
	fn test_zero_segments_keeps_one() {
		let mut state = SegmentState::new(4);
		assert_eq!(state.set_segment_count(0).len(), 1);
		assert_eq!(state.active_index(), 0);
		assert_eq!(SegmentState::new(0).segment_count(), 1);
	}

	#[test]
	fn test_progress_clamping() {
		let mut state = SegmentState::new(3);
		assert_eq!(state.set_active_progress(1.5)[0].ratio, 1.0);
		assert_eq!(state.active_progress(), 1.0);

		assert_eq!(state.set_active_progress(-0.3)[0].ratio, 0.0);
		assert_eq!(state.active_progress(), 0.0);

		assert_eq!(state.set_active_progress(f64::NAN)[0].ratio, 0.0);
		assert_eq!(state.set_active_progress(0.25)[0].ratio, 0.25);
	}

	#[test]
	fn test_index_clamping() {
		let mut state = SegmentState::new(4);
		state.set_active_index(9);
		assert_eq!(state.active_index(), 3);
		state.set_active_index(usize::MAX);
		assert_eq!(state.active_index(), 3);
		state.set_active_index(0);
		assert_eq!(state.active_index(), 0);
	}

	#[test]
	fn test_fill_list_scenario() {
		let mut state = SegmentState::new(5);
		state.set_active_index(2);
		let fills = state.set_active_progress(0.4);
		assert_eq!(ratios(fills), vec![1.0, 1.0, 0.4, 0.0, 0.0]);
	}

	#[test]
	fn test_shrinking_pulls_index_back() {
		let mut state = SegmentState::new(5);
		state.set_active_index(4);
		state.set_active_progress(0.7);

		let fills = state.set_segment_count(2);
		assert_eq!(ratios(fills), vec![1.0, 0.7]);
		assert_eq!(state.active_index(), 1);
	}

	#[test]
	fn test_growing_keeps_index() {
		let mut state = SegmentState::new(3);
		state.set_active_index(1);
		state.set_active_progress(0.5);

		let fills = state.set_segment_count(6);
		assert_eq!(ratios(fills), vec![1.0, 0.5, 0.0, 0.0, 0.0, 0.0]);
	}

	#[test]
	fn test_progress_only_touches_active_segment() {
		let mut state = SegmentState::new(4);
		state.set_active_index(1);
		let before = state.fills().to_vec();
		state.set_active_progress(0.9);

		for (i, (old, new)) in before.iter().zip(state.fills()).enumerate() {
			if i == 1 {
				assert_eq!(new.ratio, 0.9);
			} else {
				assert_eq!(old, new);
			}
		}
	}

	#[test]
	fn test_moving_index_carries_progress() {
		let mut state = SegmentState::new(4);
		state.set_active_progress(0.3);
		let fills = state.set_active_index(3);
		assert_eq!(ratios(fills), vec![1.0, 1.0, 1.0, 0.3]);
	}

	#[test]
	fn test_colors_survive_resize() {
		let active = RGBA::new(0.0, 0.0, 1.0, 1.0);
		let inactive = RGBA::new(0.5, 0.5, 0.5, 1.0);
		let mut state = SegmentState::new(2).with_colors(active.clone(), inactive.clone());

		for fill in state.set_segment_count(7) {
			assert_eq!(fill.fill_color, active);
			assert_eq!(fill.track_color, inactive);
		}
	}

	#[test]
	fn test_recolor_keeps_ratios() {
		let mut state = SegmentState::new(3);
		state.set_active_index(1);
		state.set_active_progress(0.6);
		let before = ratios(state.fills());

		let red = RGBA::new(1.0, 0.0, 0.0, 1.0);
		let fills = state.set_active_color(red.clone());
		assert_eq!(ratios(fills), before);
		assert!(fills.iter().all(|fill| fill.fill_color == red));

		let fills = state.set_inactive_color(red.clone());
		assert!(fills.iter().all(|fill| fill.track_color == red));
	}

	#[test]
	fn test_clear_progress() {
		let mut state = SegmentState::new(3);
		state.set_active_index(2);
		state.set_active_progress(0.8);
		assert_eq!(ratios(state.clear_progress()), vec![1.0, 1.0, 0.0]);
	}

	#[test]
	fn test_cached_fills_match_render() {
		let mut state = SegmentState::new(5);
		state.set_active_index(3);
		state.set_active_progress(0.45);
		state.set_segment_count(8);
		state.set_active_index(6);
		state.set_inactive_color(RGBA::new(0.2, 0.2, 0.2, 1.0));
		state.set_segment_count(4);
		state.set_active_progress(2.0);

		assert_eq!(state.fills(), render(&state).as_slice());
	}

	#[test]
	fn test_defaults() {
		let state = SegmentState::default();
		assert_eq!(state.segment_count(), 1);
		assert_eq!(state.active_index(), 0);
		assert_eq!(state.active_progress(), 0.0);
		assert_eq!(state.active_color(), default_active_color());
		assert_eq!(state.inactive_color(), default_inactive_color());
	}
}
