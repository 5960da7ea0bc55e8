use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use super::{format_date, today};
use crate::api::authenticated_client;
use crate::config::Config;
use crate::normalize::sleep_summary;

#[derive(Args)]
pub struct SleepCommand {
    /// Night to fetch (YYYY-MM-DD), defaults to today
    pub date: Option<String>,
}

impl SleepCommand {
    pub async fn execute(self, config: &Config) -> Result<Value> {
        let client = authenticated_client(config).await?;

        let date = self.date.unwrap_or_else(|| format_date(today()));
        let raw = client.get_sleep_data(&date).await?;

        let mut data = serde_json::to_value(sleep_summary(&raw))?;
        if let Some(map) = data.as_object_mut() {
            map.insert("date".to_string(), json!(date));
        }

        Ok(data)
    }
}
