use crate::poller::DEFAULT_POLL_INTERVAL_MS;
use crate::state::RetentionPolicy;

/// Telemetry service used when `window.ENV.API_URL` is not set
pub const DEFAULT_API_URL: &str = "https://sdsensor-hainetsukaishu-demo1-backe.onrender.com";

/// Deploy-time settings for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub poll_interval_ms: u32,
    pub retention: RetentionPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            retention: RetentionPolicy::default(),
        }
    }
}

impl DashboardConfig {
    /// Load settings from `window.ENV`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(read_window_env)
    }

    /// Build settings from a key lookup. Invalid values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("API_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                log::warn!("Empty API_URL, using {}", DEFAULT_API_URL);
            } else {
                config.api_url = url.to_string();
            }
        }

        if let Some(raw) = lookup("POLL_INTERVAL_MS") {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => config.poll_interval_ms = ms,
                _ => log::warn!(
                    "Invalid POLL_INTERVAL_MS '{}', using {} ms",
                    raw,
                    DEFAULT_POLL_INTERVAL_MS
                ),
            }
        }

        if let Some(raw) = lookup("RETENTION") {
            match RetentionPolicy::from_str(&raw) {
                Some(policy) => config.retention = policy,
                None => log::warn!(
                    "Unknown RETENTION '{}', using '{}'",
                    raw,
                    config.retention.as_str()
                ),
            }
        }

        config
    }
}

/// Read a string or number from `window.ENV`
fn read_window_env(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        value
            .as_string()
            .or_else(|| value.as_f64().map(|n| n.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}
