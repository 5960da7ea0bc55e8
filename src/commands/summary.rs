use anyhow::Result;
use chrono::{Datelike, Duration};
use clap::Args;
use serde_json::{json, Value};

use super::{days_ago, format_date, today};
use crate::api::authenticated_client;
use crate::config::Config;
use crate::normalize::{sleep_summary, training_readiness, training_status, weekly_intensity};

#[derive(Args)]
pub struct SummaryCommand {}

impl SummaryCommand {
    /// Comprehensive daily summary.
    ///
    /// The daily user summary and last night's sleep are required; the
    /// training blocks degrade to null individually when their fetch fails.
    pub async fn execute(self, config: &Config) -> Result<Value> {
        let client = authenticated_client(config).await?;

        let date = format_date(today());
        let yesterday = days_ago(1);

        let user_summary = client.get_user_summary(&date).await?;
        let sleep_data = client.get_sleep_data(&yesterday).await?;

        let status_raw = client.get_training_status(&date).await.ok();
        let readiness_raw = client.get_training_readiness(&date).await.ok();
        let intensity_raw = client.get_intensity_minutes().await.ok();

        let vo2_max = status_raw
            .as_ref()
            .and_then(|s| s.pointer("/mostRecentVO2Max/generic/vo2MaxValue"))
            .and_then(Value::as_f64);

        let week_start = today() - Duration::days(i64::from(today().weekday().num_days_from_monday()));
        let week_end = week_start + Duration::days(6);

        Ok(json!({
            "date": date,
            "steps": user_summary.get("totalSteps").and_then(Value::as_i64).unwrap_or(0),
            "distance_km": round1(
                user_summary.get("totalDistanceMeters").and_then(Value::as_f64).unwrap_or(0.0)
                    / 1000.0
            ),
            "calories": user_summary.get("totalKilocalories").and_then(Value::as_f64).unwrap_or(0.0),
            "heart_rate": {
                "resting": user_summary.get("restingHeartRate").and_then(Value::as_i64).unwrap_or(0),
                "max": user_summary.get("maxHeartRate").and_then(Value::as_i64).unwrap_or(0),
            },
            "body_battery": {
                "highest": user_summary.get("bodyBatteryHighestValue").and_then(Value::as_i64).unwrap_or(0),
                "lowest": user_summary.get("bodyBatteryLowestValue").and_then(Value::as_i64).unwrap_or(0),
            },
            "sleep": sleep_summary(&sleep_data),
            "vo2_max": vo2_max,
            "training_status": status_raw.as_ref().map(training_status),
            "training_readiness": readiness_raw.as_ref().and_then(training_readiness),
            "intensity_minutes": intensity_raw.as_ref().and_then(|raw| {
                weekly_intensity(raw, &format_date(week_start), &format_date(week_end))
            }),
        }))
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
