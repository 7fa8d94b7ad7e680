use leptos::*;

use crate::components::{Dashboard, Layout};
use crate::config::DashboardConfig;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_env();
    log::info!(
        "Polling {} every {} ms (retention: {})",
        config.api_url,
        config.poll_interval_ms,
        config.retention.as_str()
    );

    view! {
        <Layout>
            <Dashboard config=config />
        </Layout>
    }
}
