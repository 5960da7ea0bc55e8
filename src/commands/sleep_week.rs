use anyhow::Result;
use clap::Args;
use serde_json::Value;

use crate::aggregate;
use crate::api::authenticated_client;
use crate::config::Config;

#[derive(Args)]
pub struct SleepWeekCommand {
    /// Window size in days, ending today
    #[arg(default_value = "7")]
    pub days: u32,
}

impl SleepWeekCommand {
    pub async fn execute(self, config: &Config) -> Result<Value> {
        let client = authenticated_client(config).await?;

        let summary = aggregate::sleep_week(&client, self.days).await;

        Ok(serde_json::to_value(summary)?)
    }
}
