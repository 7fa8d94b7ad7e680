use chrono::{DateTime, Local};

use crate::state::{PollState, StateStore};

use super::sections::{build_sections_with, empty_sections, Section};
use super::LabelTable;

/// Render-ready output for one poll state
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    /// Before the first poll settles
    Pending,
    Ready {
        sections: Vec<Section>,
        error: Option<String>,
        consecutive_failures: u32,
        updated_at: Option<DateTime<Local>>,
    },
}

impl DashboardView {
    pub fn from_state(state: &PollState) -> Self {
        Self::from_state_with(state, &LabelTable::default())
    }

    pub fn from_state_with(state: &PollState, labels: &LabelTable) -> Self {
        if state.is_idle() {
            return DashboardView::Pending;
        }

        let sections = match state.snapshot() {
            Some(snapshot) => build_sections_with(&snapshot.data, labels),
            None => empty_sections(),
        };

        DashboardView::Ready {
            sections,
            error: state.error().map(str::to_string),
            consecutive_failures: 0,
            updated_at: state.snapshot().map(|s| s.received_at),
        }
    }

    /// View for the store's current state, including its failure count
    pub fn from_store(store: &StateStore) -> Self {
        match Self::from_state(store.current()) {
            DashboardView::Ready {
                sections,
                error,
                updated_at,
                ..
            } => DashboardView::Ready {
                sections,
                error,
                consecutive_failures: store.consecutive_failures(),
                updated_at,
            },
            pending => pending,
        }
    }

    pub fn sections(&self) -> &[Section] {
        match self {
            DashboardView::Pending => &[],
            DashboardView::Ready { sections, .. } => sections.as_slice(),
        }
    }
}
