/// Shown for a missing cost or unit price
pub const CURRENCY_PLACEHOLDER: &str = "0.00";

/// Shown for a missing temperature
pub const TEMPERATURE_PLACEHOLDER: &str = "N/A";

/// Format a cost or price, falling back to [`CURRENCY_PLACEHOLDER`]
pub fn format_currency(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(format_number)
        .unwrap_or_else(|| CURRENCY_PLACEHOLDER.to_string())
}

/// Format a temperature in °C, falling back to [`TEMPERATURE_PLACEHOLDER`]
pub fn format_temperature(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(format_number)
        .unwrap_or_else(|| TEMPERATURE_PLACEHOLDER.to_string())
}

/// Shortest decimal form: `120.0` renders as `120`, `12.5` as `12.5`
fn format_number(value: f64) -> String {
    if value == 0.0 {
        // -0.0
        return "0".to_string();
    }
    value.to_string()
}
