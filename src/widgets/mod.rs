pub mod page_indicator;

pub use page_indicator::PageIndicator;
