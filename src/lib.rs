use leptos::*;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod poller;
pub mod render;
pub mod state;

pub use api::{ApiClient, ApiError};
pub use config::DashboardConfig;
pub use models::TelemetrySnapshot;
pub use poller::{Poller, Scheduler};
pub use state::{PollState, RetentionPolicy, StateStore};

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Heat Recovery Monitor");

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
