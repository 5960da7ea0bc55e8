use serde_json::Value;

use super::{opt_i64, opt_str};
use crate::models::WeeklyIntensitySummary;

/// Flatten a weekly intensity-minutes response, which lists weeks oldest
/// first; the last entry is the current week.
///
/// The total counts vigorous minutes double and is only reported when both
/// components are present. Week boundaries fall back to the caller-supplied
/// dates when the record omits its own.
pub fn weekly_intensity(
    raw: &Value,
    fallback_start: &str,
    fallback_end: &str,
) -> Option<WeeklyIntensitySummary> {
    let week = raw.as_array()?.last()?;

    let moderate = opt_i64(week, "moderateIntensityMinutes");
    let vigorous = opt_i64(week, "vigorousIntensityMinutes");
    let total = match (moderate, vigorous) {
        (Some(m), Some(v)) => Some(m + 2 * v),
        _ => None,
    };

    Some(WeeklyIntensitySummary {
        week_start: opt_str(week, "weekStartDate").or_else(|| Some(fallback_start.to_string())),
        week_end: opt_str(week, "weekEndDate").or_else(|| Some(fallback_end.to_string())),
        goal: opt_i64(week, "weeklyGoal"),
        moderate_minutes: moderate,
        vigorous_minutes: vigorous,
        total_minutes: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uses_last_week() {
        let raw = json!([
            {"weekStartDate": "2026-01-05", "weekEndDate": "2026-01-11",
             "weeklyGoal": 150, "moderateIntensityMinutes": 80, "vigorousIntensityMinutes": 10},
            {"weekStartDate": "2026-01-12", "weekEndDate": "2026-01-18",
             "weeklyGoal": 150, "moderateIntensityMinutes": 100, "vigorousIntensityMinutes": 50}
        ]);

        let week = weekly_intensity(&raw, "1970-01-01", "1970-01-07").unwrap();

        assert_eq!(week.week_start, Some("2026-01-12".to_string()));
        assert_eq!(week.moderate_minutes, Some(100));
        assert_eq!(week.vigorous_minutes, Some(50));
        assert_eq!(week.total_minutes, Some(200));
    }

    #[test]
    fn test_missing_component_leaves_total_null() {
        let raw = json!([{"vigorousIntensityMinutes": 50}]);
        let week = weekly_intensity(&raw, "2026-01-12", "2026-01-18").unwrap();

        assert_eq!(week.moderate_minutes, None);
        assert_eq!(week.total_minutes, None);
    }

    #[test]
    fn test_week_bounds_fall_back_to_caller_dates() {
        let raw = json!([{"moderateIntensityMinutes": 30, "vigorousIntensityMinutes": 0}]);
        let week = weekly_intensity(&raw, "2026-01-12", "2026-01-18").unwrap();

        assert_eq!(week.week_start, Some("2026-01-12".to_string()));
        assert_eq!(week.week_end, Some("2026-01-18".to_string()));
        assert_eq!(week.total_minutes, Some(30));
    }

    #[test]
    fn test_empty_or_non_list_is_null() {
        assert_eq!(weekly_intensity(&json!([]), "a", "b"), None);
        assert_eq!(weekly_intensity(&json!({}), "a", "b"), None);
        assert_eq!(weekly_intensity(&json!(null), "a", "b"), None);
    }
}
