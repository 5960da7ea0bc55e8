use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use crate::api::authenticated_client;
use crate::config::Config;

#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub async fn execute(self, config: &Config) -> Result<Value> {
        authenticated_client(config).await?;

        Ok(json!({"logged_in": true}))
    }
}
