use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use super::days_ago;
use crate::api::authenticated_client;
use crate::config::Config;

#[derive(Args)]
pub struct StepsCommand {
    /// Number of days to fetch
    #[arg(default_value = "1")]
    pub days: u32,
}

impl StepsCommand {
    pub async fn execute(self, config: &Config) -> Result<Value> {
        let client = authenticated_client(config).await?;

        let mut days = Vec::new();
        for offset in 0..i64::from(self.days) {
            let date = days_ago(offset);
            let steps = client.get_steps_data(&date).await?;
            days.push(json!({"date": date, "steps": steps}));
        }

        Ok(json!(days))
    }
}
