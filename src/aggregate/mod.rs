//! Multi-day aggregation over independently fetched days.
//!
//! The fetch loop tries each calendar day on its own and collects the days
//! that succeed; a failed day is logged and omitted, never fatal.

use chrono::{Duration, Local};
use serde_json::Value;

use crate::api::GarminClient;
use crate::models::{DailySleep, SleepWeekSummary};
use crate::normalize::{opt_i64, sleep_summary};

/// Fetch and aggregate sleep for the last `days` calendar days ending today.
pub async fn sleep_week(client: &GarminClient, days: u32) -> SleepWeekSummary {
    let today = Local::now().date_naive();
    let mut collected = Vec::new();

    for offset in (0..i64::from(days)).rev() {
        let date = (today - Duration::days(offset))
            .format("%Y-%m-%d")
            .to_string();

        let raw = match client.get_sleep_data(&date).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("Skipping {date}: {e}");
                continue;
            }
        };

        // Body battery rides along from the day's user summary; losing it
        // does not lose the day.
        let (high, low) = match client.get_user_summary(&date).await {
            Ok(summary) => body_battery(&summary),
            Err(e) => {
                tracing::debug!("No user summary for {date}: {e}");
                (None, None)
            }
        };

        collected.push(DailySleep {
            date,
            body_battery_high: high,
            body_battery_low: low,
            sleep: sleep_summary(&raw),
        });
    }

    summarize(collected)
}

fn body_battery(summary: &Value) -> (Option<i64>, Option<i64>) {
    (
        opt_i64(summary, "bodyBatteryHighestValue"),
        opt_i64(summary, "bodyBatteryLowestValue"),
    )
}

/// Compute per-field means over the collected days.
///
/// Each mean covers only the days that supplied a value for that field and
/// is null when no day did.
pub fn summarize(days: Vec<DailySleep>) -> SleepWeekSummary {
    let avg_sleep_score = mean(days.iter().filter_map(|d| d.sleep.sleep_score).map(|v| v as f64));
    let avg_overnight_hrv = mean(days.iter().filter_map(|d| d.sleep.avg_overnight_hrv));
    let avg_body_battery_high =
        mean(days.iter().filter_map(|d| d.body_battery_high).map(|v| v as f64));
    let avg_resting_heart_rate =
        mean(days.iter().filter_map(|d| d.sleep.resting_heart_rate).map(|v| v as f64));

    SleepWeekSummary {
        days_with_data: days.len(),
        days,
        avg_sleep_score,
        avg_overnight_hrv,
        avg_body_battery_high,
        avg_resting_heart_rate,
    }
}

/// Arithmetic mean rounded to one decimal; `None` for an empty sequence.
pub fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }

    if count == 0 {
        None
    } else {
        Some((sum / count as f64 * 10.0).round() / 10.0)
    }
}
