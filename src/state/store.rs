use chrono::{DateTime, Local};

use crate::models::TelemetrySnapshot;

/// What happens to the last good snapshot when a poll fails
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RetentionPolicy {
    /// Keep showing the last good snapshot alongside the error
    #[default]
    KeepLastGood,
    /// Drop the data and show the "no data" fallback everywhere
    Clear,
}

impl RetentionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetentionPolicy::KeepLastGood => "keep",
            RetentionPolicy::Clear => "clear",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" | "keep_last_good" => Some(RetentionPolicy::KeepLastGood),
            "clear" => Some(RetentionPolicy::Clear),
            _ => None,
        }
    }
}

/// A successfully fetched payload and when it arrived
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub data: TelemetrySnapshot,
    pub received_at: DateTime<Local>,
}

/// State of the polling session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PollState {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// Last poll succeeded
    Ok(Snapshot),
    /// Last poll failed. `last_good` is only populated under
    /// [`RetentionPolicy::KeepLastGood`].
    Failed {
        message: String,
        last_good: Option<Snapshot>,
    },
}

impl PollState {
    /// Snapshot to render, if any
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            PollState::Idle => None,
            PollState::Ok(snapshot) => Some(snapshot),
            PollState::Failed { last_good, .. } => last_good.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PollState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PollState::Idle)
    }
}

/// Holds the outcome of the latest completed poll.
///
/// `apply_success` and `apply_failure` are the only mutation paths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateStore {
    state: PollState,
    retention: RetentionPolicy,
    consecutive_failures: u32,
}

impl StateStore {
    pub fn new(retention: RetentionPolicy) -> Self {
        Self {
            state: PollState::Idle,
            retention,
            consecutive_failures: 0,
        }
    }

    /// Record a successful poll
    pub fn apply_success(&mut self, data: TelemetrySnapshot) {
        if self.consecutive_failures > 0 {
            log::info!(
                "Realtime data recovered after {} failed poll(s)",
                self.consecutive_failures
            );
        }
        self.consecutive_failures = 0;
        self.state = PollState::Ok(Snapshot {
            data,
            received_at: Local::now(),
        });
    }

    /// Record a failed poll
    pub fn apply_failure(&mut self, reason: impl Into<String>) {
        let message = reason.into();
        log::error!("リアルタイムデータの取得に失敗しました: {}", message);

        let previous = std::mem::take(&mut self.state);
        let last_good = match self.retention {
            RetentionPolicy::KeepLastGood => match previous {
                PollState::Ok(snapshot) => Some(snapshot),
                PollState::Failed { last_good, .. } => last_good,
                PollState::Idle => None,
            },
            RetentionPolicy::Clear => None,
        };

        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.state = PollState::Failed { message, last_good };
    }

    /// Current poll state
    pub fn current(&self) -> &PollState {
        &self.state
    }

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}
