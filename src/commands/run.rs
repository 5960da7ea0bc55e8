use anyhow::{anyhow, Result};
use clap::Args;
use serde_json::Value;

use super::days_ago;
use crate::api::{authenticated_client, GarminClient};
use crate::config::Config;
use crate::models::{RunDetail, RunSummary};
use crate::normalize::{is_running, lap_summaries, run_summary};

/// Backward scan window when no activity id is given.
const RUN_LOOKBACK_DAYS: i64 = 30;
/// Backward scan window for the comparison runs.
const COMPARISON_LOOKBACK_DAYS: i64 = 60;
/// How many prior runs to surface for comparison.
const COMPARISON_RUNS: usize = 5;
/// Page size when resolving an explicit activity id.
const RECENT_PAGE_SIZE: usize = 50;

#[derive(Args)]
pub struct RunCommand {
    /// Activity id; the most recent run is resolved when omitted
    pub activity_id: Option<u64>,
}

impl RunCommand {
    pub async fn execute(self, config: &Config) -> Result<Value> {
        let client = authenticated_client(config).await?;

        let detail = resolve_run(&client, self.activity_id).await?;

        Ok(serde_json::to_value(detail)?)
    }
}

/// Resolve one run, its laps, and up to five prior runs for comparison.
pub async fn resolve_run(client: &GarminClient, activity_id: Option<u64>) -> Result<RunDetail> {
    let activity = match activity_id {
        None => find_most_recent_run(client).await?,
        Some(id) => find_by_id(client, id).await?,
    };

    let resolved_id = activity.get("activityId").and_then(Value::as_u64);

    let laps = match resolved_id {
        Some(id) => {
            let splits = client.get_activity_splits(id).await?;
            lap_summaries(&splits)
        }
        None => Vec::new(),
    };

    let recent_runs = collect_recent_runs(client, resolved_id).await;

    Ok(RunDetail {
        activity: run_summary(&activity),
        laps,
        recent_runs,
    })
}

/// Scan backward day by day for the first running activity. The window is
/// a hard cutoff; within one day the first entry of the day's list wins.
async fn find_most_recent_run(client: &GarminClient) -> Result<Value> {
    for offset in 0..RUN_LOOKBACK_DAYS {
        let date = days_ago(offset);
        let day = match client.get_activities_by_date(&date, &date).await {
            Ok(day) => day,
            Err(e) => {
                tracing::debug!("Skipping {date}: {e}");
                continue;
            }
        };

        if let Some(run) = day
            .as_array()
            .and_then(|acts| acts.iter().find(|a| is_running(a)))
        {
            return Ok(run.clone());
        }
    }

    Err(anyhow!(
        "No running activity found in the last {RUN_LOOKBACK_DAYS} days"
    ))
}

/// Look an explicit id up in one page of recent activities.
async fn find_by_id(client: &GarminClient, activity_id: u64) -> Result<Value> {
    let page = client.get_activities(0, RECENT_PAGE_SIZE).await?;

    page.as_array()
        .and_then(|acts| {
            acts.iter()
                .find(|a| a.get("activityId").and_then(Value::as_u64) == Some(activity_id))
        })
        .cloned()
        .ok_or_else(|| anyhow!("Activity {activity_id} not found"))
}

/// Collect up to five prior runs, excluding the resolved one, scanning
/// backward over a wider window. Failed days are skipped.
async fn collect_recent_runs(client: &GarminClient, exclude: Option<u64>) -> Vec<RunSummary> {
    let mut runs = Vec::new();

    for offset in 0..COMPARISON_LOOKBACK_DAYS {
        if runs.len() >= COMPARISON_RUNS {
            break;
        }

        let date = days_ago(offset);
        let day = match client.get_activities_by_date(&date, &date).await {
            Ok(day) => day,
            Err(e) => {
                tracing::debug!("Skipping {date}: {e}");
                continue;
            }
        };

        let Some(acts) = day.as_array() else { continue };
        for act in acts {
            if runs.len() >= COMPARISON_RUNS {
                break;
            }
            let id = act.get("activityId").and_then(Value::as_u64);
            if is_running(act) && (id.is_none() || id != exclude) {
                runs.push(run_summary(act));
            }
        }
    }

    runs
}
