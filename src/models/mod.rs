use serde::{Deserialize, Serialize};

/// Flat summary of one night of sleep.
///
/// Upstream may omit any field, so durations default to zero and the
/// scalar/status fields stay null rather than failing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    pub total_seconds: i64,
    pub total_formatted: String,
    pub deep_seconds: i64,
    pub light_seconds: i64,
    pub rem_seconds: i64,
    pub awake_seconds: i64,
    pub resting_heart_rate: Option<i64>,
    pub avg_overnight_hrv: Option<f64>,
    pub hrv_status: Option<String>,
    pub sleep_score: Option<i64>,
}

/// Acute/chronic training load block, present only when the upstream
/// response carries a non-empty load DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoad {
    pub acute: Option<f64>,
    pub chronic: Option<f64>,
    pub target_min: Option<f64>,
    pub target_max: Option<f64>,
    pub ratio: Option<f64>,
    pub ratio_status: Option<String>,
}

/// Flattened training status for the first (usually only) device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStatusSummary {
    pub feedback: Option<String>,
    pub label: Option<String>,
    pub since_date: Option<String>,
    pub sport: Option<String>,
    pub training_load: Option<TrainingLoad>,
}

/// Same-day training readiness score and its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReadinessSummary {
    pub score: Option<i64>,
    pub level: Option<String>,
    pub timestamp: Option<String>,
    pub sleep_score: Option<i64>,
    pub recovery_time: Option<i64>,
    pub acute_load: Option<f64>,
    pub feedback: Option<String>,
}

/// Intensity minutes for the most recent week; vigorous minutes count
/// double toward the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyIntensitySummary {
    pub week_start: Option<String>,
    pub week_end: Option<String>,
    pub goal: Option<i64>,
    pub moderate_minutes: Option<i64>,
    pub vigorous_minutes: Option<i64>,
    pub total_minutes: Option<i64>,
}

/// One lap of a recorded activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapSummary {
    pub lap: usize,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub duration_formatted: String,
    pub pace_seconds_per_km: f64,
    pub pace_formatted: String,
    pub avg_heart_rate: Option<f64>,
    pub max_heart_rate: Option<f64>,
    pub avg_power: Option<f64>,
    pub avg_cadence: Option<f64>,
    pub elevation_gain: Option<f64>,
}

/// Flat summary of one running activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub activity_id: Option<u64>,
    pub name: Option<String>,
    pub activity_type: Option<String>,
    pub start_time: Option<String>,
    pub distance_km: Option<f64>,
    pub duration_seconds: f64,
    pub duration_formatted: String,
    pub pace_seconds_per_km: f64,
    pub pace_formatted: String,
    pub avg_heart_rate: Option<f64>,
    pub max_heart_rate: Option<f64>,
    pub aerobic_training_effect: Option<f64>,
    pub vo2_max: Option<f64>,
}

/// A resolved run with its laps and recent runs for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDetail {
    pub activity: RunSummary,
    pub laps: Vec<LapSummary>,
    pub recent_runs: Vec<RunSummary>,
}

/// One day inside a multi-day sleep aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySleep {
    pub date: String,
    pub body_battery_high: Option<i64>,
    pub body_battery_low: Option<i64>,
    #[serde(flatten)]
    pub sleep: SleepSummary,
}

/// Multi-day sleep aggregate with per-field means over the days that
/// actually supplied a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepWeekSummary {
    pub days: Vec<DailySleep>,
    pub days_with_data: usize,
    pub avg_sleep_score: Option<f64>,
    pub avg_overnight_hrv: Option<f64>,
    pub avg_body_battery_high: Option<f64>,
    pub avg_resting_heart_rate: Option<f64>,
}
