use serde_json::Value;

use super::{opt_f64, opt_i64, opt_str};
use crate::models::{TrainingLoad, TrainingReadinessSummary, TrainingStatusSummary};

/// Flatten a training-status response into a [`TrainingStatusSummary`].
///
/// The response keys its payload by device identifier; the first entry is
/// used. Single-device accounts are the structural assumption here — a
/// multi-device account only ever surfaces one entry.
pub fn training_status(raw: &Value) -> TrainingStatusSummary {
    let device = raw
        .pointer("/mostRecentTrainingStatus/latestTrainingStatusData")
        .and_then(Value::as_object)
        .and_then(|devices| devices.values().next())
        .unwrap_or(&Value::Null);

    let feedback = opt_str(device, "trainingStatusFeedbackPhrase");
    let label = feedback.as_deref().and_then(status_label);

    let training_load = device
        .get("acuteTrainingLoadDTO")
        .filter(|dto| dto.as_object().is_some_and(|m| !m.is_empty()))
        .map(|dto| TrainingLoad {
            acute: opt_f64(dto, "dailyTrainingLoadAcute"),
            chronic: opt_f64(dto, "dailyTrainingLoadChronic"),
            target_min: opt_f64(dto, "minTrainingLoadChronic"),
            target_max: opt_f64(dto, "maxTrainingLoadChronic"),
            ratio: opt_f64(dto, "dailyAcuteChronicWorkloadRatio"),
            ratio_status: opt_str(dto, "acwrStatus"),
        });

    TrainingStatusSummary {
        feedback,
        label,
        since_date: opt_str(device, "sinceDate"),
        sport: opt_str(device, "sport"),
        training_load,
    }
}

/// Human label for a feedback phrase: the portion before the first `_`,
/// with `-` and spaces normalized, title-cased word by word.
///
/// `"PRODUCTIVE_2"` becomes `"Productive"`; an empty phrase has no label.
pub fn status_label(phrase: &str) -> Option<String> {
    let head = phrase.split('_').next().unwrap_or("");
    let head = head.replace(['-', ' '], "_");

    let label = head
        .split('_')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Flatten a training-readiness response.
///
/// Accepts either a single object or a non-empty list (first element wins);
/// any other shape has no readiness to report.
pub fn training_readiness(raw: &Value) -> Option<TrainingReadinessSummary> {
    let entry = match raw {
        Value::Object(_) => raw,
        Value::Array(items) => items.first()?,
        _ => return None,
    };

    Some(TrainingReadinessSummary {
        score: opt_i64(entry, "score"),
        level: opt_str(entry, "level"),
        timestamp: opt_str(entry, "timestamp"),
        sleep_score: opt_i64(entry, "sleepScore"),
        recovery_time: opt_i64(entry, "recoveryTime"),
        acute_load: opt_f64(entry, "acuteLoad"),
        feedback: opt_str(entry, "feedbackShort"),
    })
}
