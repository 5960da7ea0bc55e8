//! Pure normalizers turning raw Garmin Connect responses into the flat
//! summary records in [`crate::models`].
//!
//! Every function here takes a `serde_json::Value` of arbitrary shape and
//! never panics on missing or malformed fields.

use serde_json::Value;

mod intensity;
mod pace;
mod sleep;
mod training;

pub use intensity::weekly_intensity;
pub use pace::{
    format_duration, format_pace, is_running, lap_summaries, pace_seconds_per_km, run_summary,
};
pub use sleep::sleep_summary;
pub use training::{status_label, training_readiness, training_status};

pub(crate) fn opt_i64(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

pub(crate) fn opt_f64(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

pub(crate) fn opt_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}
