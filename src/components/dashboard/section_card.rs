use leptos::*;

use crate::render::{Entry, Section, NO_DATA_MESSAGE};

#[component]
pub fn SectionCard(section: Section) -> impl IntoView {
    let title = section.kind.title();

    if section.is_empty() {
        return view! {
            <div class="card card-empty">
                <h3>{title}</h3>
                <p class="placeholder-text">{NO_DATA_MESSAGE}</p>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="card">
            <h3>{title}</h3>
            <div class="entry-grid">
                {section
                    .entries
                    .into_iter()
                    .map(|entry| view! { <EntryItem entry=entry /> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn EntryItem(entry: Entry) -> impl IntoView {
    view! {
        <div class="entry-item">
            <span class="entry-label">{entry.label.clone()}</span>
            <span class="entry-value">{entry.display_value()}</span>
        </div>
    }
}
