use serde_json::Value;

use super::{opt_f64, opt_str};
use crate::models::{LapSummary, RunSummary};

/// Format a second count as `"{h}h {m}m"`; a missing count is `"N/A"`.
pub fn format_duration(seconds: Option<i64>) -> String {
    match seconds {
        None => "N/A".to_string(),
        Some(s) => format!("{}h {}m", s / 3600, (s % 3600) / 60),
    }
}

/// Pace in seconds per kilometer; 0 when there is no distance to divide by.
pub fn pace_seconds_per_km(duration_seconds: f64, distance_meters: f64) -> f64 {
    if distance_meters > 0.0 {
        duration_seconds / distance_meters * 1000.0
    } else {
        0.0
    }
}

/// Format a pace in seconds as `m:ss`; missing or non-positive pace is `"N/A"`.
pub fn format_pace(pace_seconds: Option<f64>) -> String {
    match pace_seconds {
        Some(p) if p > 0.0 => {
            let total = p as i64;
            format!("{}:{:02}", total / 60, total % 60)
        }
        _ => "N/A".to_string(),
    }
}

/// Whether an activity record is a run (treadmill and trail variants count).
pub fn is_running(activity: &Value) -> bool {
    activity
        .pointer("/activityType/typeKey")
        .and_then(Value::as_str)
        .is_some_and(|key| key.contains("running"))
}

/// Normalize the `lapDTOs` list of a splits response.
pub fn lap_summaries(splits: &Value) -> Vec<LapSummary> {
    splits
        .get("lapDTOs")
        .and_then(Value::as_array)
        .map(|laps| {
            laps.iter()
                .enumerate()
                .map(|(i, lap)| lap_summary(i + 1, lap))
                .collect()
        })
        .unwrap_or_default()
}

fn lap_summary(index: usize, lap: &Value) -> LapSummary {
    let distance = opt_f64(lap, "distance").unwrap_or(0.0);
    let duration = opt_f64(lap, "duration").unwrap_or(0.0);
    let pace = pace_seconds_per_km(duration, distance);

    LapSummary {
        lap: index,
        distance_meters: distance,
        duration_seconds: duration,
        duration_formatted: format_duration(Some(duration as i64)),
        pace_seconds_per_km: pace,
        pace_formatted: format_pace(Some(pace)),
        avg_heart_rate: opt_f64(lap, "averageHR"),
        max_heart_rate: opt_f64(lap, "maxHR"),
        avg_power: opt_f64(lap, "avgPower"),
        avg_cadence: opt_f64(lap, "averageRunCadence"),
        elevation_gain: opt_f64(lap, "elevationGain"),
    }
}

/// Flatten one activity record into a [`RunSummary`].
pub fn run_summary(activity: &Value) -> RunSummary {
    let distance = opt_f64(activity, "distance").unwrap_or(0.0);
    let duration = opt_f64(activity, "duration").unwrap_or(0.0);
    let pace = pace_seconds_per_km(duration, distance);

    RunSummary {
        activity_id: activity.get("activityId").and_then(Value::as_u64),
        name: opt_str(activity, "activityName"),
        activity_type: activity
            .pointer("/activityType/typeKey")
            .and_then(Value::as_str)
            .map(str::to_string),
        start_time: opt_str(activity, "startTimeLocal"),
        distance_km: (distance > 0.0).then(|| (distance / 1000.0 * 100.0).round() / 100.0),
        duration_seconds: duration,
        duration_formatted: format_duration(Some(duration as i64)),
        pace_seconds_per_km: pace,
        pace_formatted: format_pace(Some(pace)),
        avg_heart_rate: opt_f64(activity, "averageHR"),
        max_heart_rate: opt_f64(activity, "maxHR"),
        aerobic_training_effect: opt_f64(activity, "aerobicTrainingEffect"),
        vo2_max: opt_f64(activity, "vO2MaxValue"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(None), "N/A");
        assert_eq!(format_duration(Some(0)), "0h 0m");
        assert_eq!(format_duration(Some(27000)), "7h 30m");
        assert_eq!(format_duration(Some(3599)), "0h 59m");
        assert_eq!(format_duration(Some(3600)), "1h 0m");
        assert_eq!(format_duration(Some(86399)), "23h 59m");
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(None), "N/A");
        assert_eq!(format_pace(Some(0.0)), "N/A");
        assert_eq!(format_pace(Some(-10.0)), "N/A");
        assert_eq!(format_pace(Some(305.0)), "5:05");
        assert_eq!(format_pace(Some(359.9)), "5:59");
        assert_eq!(format_pace(Some(60.0)), "1:00");
    }

    #[test]
    fn test_pace_zero_distance_is_zero() {
        assert_eq!(pace_seconds_per_km(1800.0, 0.0), 0.0);
        assert_eq!(pace_seconds_per_km(1800.0, 6000.0), 300.0);
    }

    #[test]
    fn test_is_running() {
        assert!(is_running(&json!({"activityType": {"typeKey": "running"}})));
        assert!(is_running(&json!({"activityType": {"typeKey": "trail_running"}})));
        assert!(is_running(
            &json!({"activityType": {"typeKey": "treadmill_running"}})
        ));
        assert!(!is_running(&json!({"activityType": {"typeKey": "cycling"}})));
        assert!(!is_running(&json!({})));
        assert!(!is_running(&json!(null)));
    }

    #[test]
    fn test_lap_summaries() {
        let splits = json!({"lapDTOs": [
            {"distance": 1000.0, "duration": 300.0, "averageHR": 152.0, "maxHR": 161.0,
             "avgPower": 280.0, "averageRunCadence": 172.0, "elevationGain": 4.0},
            {"distance": 0.0, "duration": 45.0}
        ]});

        let laps = lap_summaries(&splits);

        assert_eq!(laps.len(), 2);
        assert_eq!(laps[0].lap, 1);
        assert_eq!(laps[0].pace_seconds_per_km, 300.0);
        assert_eq!(laps[0].pace_formatted, "5:00");
        assert_eq!(laps[0].avg_heart_rate, Some(152.0));
        // zero-distance lap gets pace 0 and formats as N/A instead of dividing
        assert_eq!(laps[1].pace_seconds_per_km, 0.0);
        assert_eq!(laps[1].pace_formatted, "N/A");
        assert_eq!(laps[1].avg_power, None);
    }

    #[test]
    fn test_lap_summaries_missing_block() {
        assert!(lap_summaries(&json!({})).is_empty());
        assert!(lap_summaries(&json!(null)).is_empty());
    }

    #[test]
    fn test_run_summary() {
        let activity = json!({
            "activityId": 123456u64,
            "activityName": "Morning Run",
            "activityType": {"typeKey": "running"},
            "startTimeLocal": "2026-01-17 07:02:11",
            "distance": 10000.0,
            "duration": 3000.0,
            "averageHR": 149.0,
            "maxHR": 172.0,
            "aerobicTrainingEffect": 3.1,
            "vO2MaxValue": 52.0
        });

        let run = run_summary(&activity);

        assert_eq!(run.activity_id, Some(123456));
        assert_eq!(run.distance_km, Some(10.0));
        assert_eq!(run.pace_seconds_per_km, 300.0);
        assert_eq!(run.pace_formatted, "5:00");
        assert_eq!(run.duration_formatted, "0h 50m");
        assert_eq!(run.vo2_max, Some(52.0));
    }

    #[test]
    fn test_run_summary_empty_record() {
        let run = run_summary(&json!({}));

        assert_eq!(run.activity_id, None);
        assert_eq!(run.distance_km, None);
        assert_eq!(run.pace_formatted, "N/A");
        assert_eq!(run.duration_formatted, "0h 0m");
    }
}
