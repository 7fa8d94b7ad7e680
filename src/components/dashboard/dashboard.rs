use leptos::*;

use crate::api::ApiError;
use crate::config::DashboardConfig;
use crate::models::TelemetrySnapshot;
use crate::render::{DashboardView, Section, SectionGroup};
use crate::state::StateStore;

use super::section_card::SectionCard;
use super::status_banner::StatusBanner;

/// Dashboard page: polls the realtime endpoint and renders every section
#[component]
pub fn Dashboard(config: DashboardConfig) -> impl IntoView {
    let store = create_rw_signal(StateStore::new(config.retention));

    // Recomputed on every completed poll
    let dashboard_view = create_memo(move |_| store.with(DashboardView::from_store));

    // Start polling; dropping the poller on cleanup stops further store updates
    #[cfg(target_arch = "wasm32")]
    {
        use crate::api::ApiClient;
        use crate::poller::{BrowserScheduler, Poller};

        let client = ApiClient::new(config.api_url.clone());
        let mut poller = Poller::new(BrowserScheduler);
        poller.start(
            config.poll_interval_ms,
            move || {
                let client = client.clone();
                async move { client.get_realtime().await }
            },
            move |result| apply_poll_result(store, result),
        );

        on_cleanup(move || drop(poller));
    }

    view! {
        <div class="dashboard">
            {move || match dashboard_view.get() {
                DashboardView::Pending => view! {
                    <div class="card">
                        <div class="loading">"読み込み中..."</div>
                    </div>
                }
                .into_view(),
                DashboardView::Ready { sections, error, consecutive_failures, updated_at } => {
                    view! {
                        <StatusBanner
                            error=error
                            consecutive_failures=consecutive_failures
                            updated_at=updated_at
                        />
                        <div class="dashboard-grid">
                            {SectionGroup::ALL
                                .into_iter()
                                .map(|group| view! { <SectionColumn group=group sections=sections.clone() /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Forward one poll outcome to the store
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn apply_poll_result(store: RwSignal<StateStore>, result: Result<TelemetrySnapshot, ApiError>) {
    match result {
        Ok(snapshot) => store.update(|s| s.apply_success(snapshot)),
        Err(e) => store.update(|s| s.apply_failure(e.to_string())),
    }
}

/// The sections belonging to one page area
#[component]
fn SectionColumn(group: SectionGroup, sections: Vec<Section>) -> impl IntoView {
    view! {
        <div class=format!("section-group {}", group.class())>
            {sections
                .into_iter()
                .filter(|section| section.kind.group() == group)
                .map(|section| view! { <SectionCard section=section /> })
                .collect_view()}
        </div>
    }
}
