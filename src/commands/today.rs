use anyhow::Result;
use clap::Args;
use serde_json::Value;

use super::{format_date, today};
use crate::api::authenticated_client;
use crate::config::Config;

#[derive(Args)]
pub struct TodayCommand {}

impl TodayCommand {
    pub async fn execute(self, config: &Config) -> Result<Value> {
        let client = authenticated_client(config).await?;

        client.get_user_summary(&format_date(today())).await
    }
}
