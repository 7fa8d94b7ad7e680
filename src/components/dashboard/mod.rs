mod dashboard;
mod section_card;
mod status_banner;

pub use dashboard::Dashboard;
