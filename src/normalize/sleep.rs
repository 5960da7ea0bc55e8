use serde_json::Value;

use super::{opt_f64, opt_i64, opt_str, pace::format_duration};
use crate::models::SleepSummary;

/// Flatten a raw sleep response into a [`SleepSummary`].
///
/// The record is always complete: missing duration fields become 0,
/// missing scalar/status fields stay null. Any input shape is accepted.
pub fn sleep_summary(raw: &Value) -> SleepSummary {
    let daily = raw.get("dailySleepDTO").unwrap_or(&Value::Null);

    SleepSummary {
        total_seconds: opt_i64(daily, "sleepTimeSeconds").unwrap_or(0),
        total_formatted: format_duration(opt_i64(daily, "sleepTimeSeconds")),
        deep_seconds: opt_i64(daily, "deepSleepSeconds").unwrap_or(0),
        light_seconds: opt_i64(daily, "lightSleepSeconds").unwrap_or(0),
        rem_seconds: opt_i64(daily, "remSleepSeconds").unwrap_or(0),
        awake_seconds: opt_i64(daily, "awakeSleepSeconds").unwrap_or(0),
        resting_heart_rate: opt_i64(raw, "restingHeartRate"),
        avg_overnight_hrv: opt_f64(raw, "avgOvernightHrv"),
        hrv_status: opt_str(raw, "hrvStatus"),
        sleep_score: daily
            .get("sleepScores")
            .and_then(|s| s.get("overall"))
            .and_then(|o| o.get("value"))
            .and_then(Value::as_i64),
    }
}
