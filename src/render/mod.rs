pub mod format;
pub mod labels;
pub mod sections;
pub mod view;

pub use format::{
    format_currency, format_temperature, CURRENCY_PLACEHOLDER, TEMPERATURE_PLACEHOLDER,
};
pub use labels::{label_for, LabelTable};
pub use sections::{
    build_sections, build_sections_with, Entry, Section, SectionGroup, SectionKind,
};
pub use view::DashboardView;

/// Shown in place of a section with no data
pub const NO_DATA_MESSAGE: &str = "データがありません";
