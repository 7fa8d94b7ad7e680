use chrono::{DateTime, Local};
use leptos::*;

/// Last update time, plus the latest poll error when there is one
#[component]
pub fn StatusBanner(
    error: Option<String>,
    consecutive_failures: u32,
    updated_at: Option<DateTime<Local>>,
) -> impl IntoView {
    let updated = updated_at
        .map(|t| format!("最終更新 {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "最終更新 --:--:--".to_string());

    view! {
        <div class="status-banner">
            <span class="last-update">{updated}</span>
            {error.map(|message| {
                let suffix = if consecutive_failures > 1 {
                    format!(" ({}回連続)", consecutive_failures)
                } else {
                    String::new()
                };
                view! {
                    <div class="error-message" role="alert">
                        {format!("データの取得に失敗しました: {}{}", message, suffix)}
                    </div>
                }
            })}
        </div>
    }
}
