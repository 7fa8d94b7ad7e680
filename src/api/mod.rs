pub mod client;
pub mod realtime;

pub use client::{decode_body, ApiClient, ApiError};
pub use realtime::REALTIME_PATH;
