pub mod realtime;

pub use realtime::{CostBreakdown, ReadingMap, TelemetrySnapshot};
