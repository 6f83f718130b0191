pub mod metrics;
pub mod timeline;

pub use metrics::RunMetrics;
pub use timeline::{RUN_TERMINATOR, Timeline, TimelineEntry, merge_intervals};
