use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use super::days_ago;
use crate::api::authenticated_client;
use crate::config::Config;

const MAX_ACTIVITIES: usize = 50;

#[derive(Args)]
pub struct ActivitiesCommand {
    /// Number of days to look back
    #[arg(default_value = "7")]
    pub days: u32,
}

impl ActivitiesCommand {
    pub async fn execute(self, config: &Config) -> Result<Value> {
        let client = authenticated_client(config).await?;

        let mut activities = Vec::new();
        for offset in 0..i64::from(self.days) {
            let date = days_ago(offset);
            let day = client.get_activities_by_date(&date, &date).await?;
            if let Some(items) = day.as_array() {
                activities.extend(items.iter().cloned());
            }
        }
        activities.truncate(MAX_ACTIVITIES);

        Ok(json!({"activities": activities}))
    }
}
