pub mod dashboard;
pub mod layout;

pub use dashboard::Dashboard;
pub use layout::Layout;
