use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use crate::api::GarminClient;
use crate::config::{Config, Credentials};

#[derive(Args)]
pub struct LoginCommand {
    /// Garmin Connect account email
    pub email: String,

    /// Garmin Connect account password
    pub password: String,
}

impl LoginCommand {
    pub async fn execute(self, config: &Config) -> Result<Value> {
        let mut client = GarminClient::new(config)?;

        // Credentials are only persisted once upstream has accepted them
        client.login(&self.email, &self.password).await?;
        Credentials::new(&self.email, &self.password).save()?;

        Ok(json!({"message": format!("Logged in as {}", self.email)}))
    }
}
