use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::config::{Config, Credentials};

mod error;

pub use error::ApiError;

/// Login request payload
#[derive(Debug, Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

/// Login response from the Garmin Connect API
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Thin client for the Garmin Connect API.
///
/// Every fetcher returns the raw response as `serde_json::Value`; shaping
/// the nested payloads into flat summaries is the normalizers' job.
pub struct GarminClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GarminClient {
    /// Create a new, unauthenticated client
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api.base_url.clone(),
            token: None,
        })
    }

    /// Login with the given credentials, keeping the session token in memory.
    ///
    /// On rejection the upstream response body is surfaced verbatim.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let url = format!("{}/auth/login", self.base_url);

        tracing::debug!("Logging in as {}", email);

        let request = LoginRequest {
            username: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send login request")?;

        let status = response.status();

        if status.is_success() {
            let login: LoginResponse = response
                .json()
                .await
                .context("Failed to parse login response")?;
            self.token = Some(login.access_token);

            tracing::debug!("Successfully logged in as {}", email);
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Login failed")
                    .to_string()
            } else {
                message
            };
            Err(anyhow!(message))
        }
    }

    /// Make an authenticated GET request and parse the body as JSON
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        let token = self
            .token
            .as_deref()
            .ok_or_else(|| anyhow!("Not logged in"))?;

        tracing::debug!("GET {}", path);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .context("Failed to send GET request")?;

        let status = response.status();

        if status.is_success() {
            let body: Value = response
                .json()
                .await
                .context("Failed to parse response body")?;
            Ok(body)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, message).into())
        }
    }

    /// Daily user summary (steps, calories, heart rate, body battery)
    pub async fn get_user_summary(&self, date: &str) -> Result<Value> {
        self.get_json(&format!(
            "/usersummary-service/usersummary/daily?calendarDate={date}"
        ))
        .await
    }

    /// Sleep data for one night
    pub async fn get_sleep_data(&self, date: &str) -> Result<Value> {
        self.get_json(&format!(
            "/wellness-service/wellness/dailySleepData?date={date}"
        ))
        .await
    }

    /// Step counts for one day
    pub async fn get_steps_data(&self, date: &str) -> Result<Value> {
        self.get_json(&format!(
            "/wellness-service/wellness/dailySummaryChart?date={date}"
        ))
        .await
    }

    /// Activities recorded between two dates (inclusive)
    pub async fn get_activities_by_date(&self, start: &str, end: &str) -> Result<Value> {
        self.get_json(&format!(
            "/activitylist-service/activities/search/activities?startDate={start}&endDate={end}"
        ))
        .await
    }

    /// One page of the most recent activities
    pub async fn get_activities(&self, start: usize, limit: usize) -> Result<Value> {
        self.get_json(&format!(
            "/activitylist-service/activities/search/activities?start={start}&limit={limit}"
        ))
        .await
    }

    /// Lap/split breakdown for one activity
    pub async fn get_activity_splits(&self, activity_id: u64) -> Result<Value> {
        self.get_json(&format!("/activity-service/activity/{activity_id}/splits"))
            .await
    }

    /// Training status (acute/chronic load, feedback phrase), keyed by device
    pub async fn get_training_status(&self, date: &str) -> Result<Value> {
        self.get_json(&format!(
            "/metrics-service/metrics/trainingstatus/aggregated/{date}"
        ))
        .await
    }

    /// Training readiness score for one day
    pub async fn get_training_readiness(&self, date: &str) -> Result<Value> {
        self.get_json(&format!("/metrics-service/metrics/trainingreadiness/{date}"))
            .await
    }

    /// Weekly intensity minutes, oldest week first
    pub async fn get_intensity_minutes(&self) -> Result<Value> {
        self.get_json("/wellness-service/wellness/weeklyIntensityMinutes")
            .await
    }
}

/// Build a logged-in client from the stored credentials.
///
/// With no stored record this fails with guidance pointing at the login
/// command; an upstream rejection surfaces the upstream message untouched.
pub async fn authenticated_client(config: &Config) -> Result<GarminClient> {
    let creds = Credentials::load()?.ok_or_else(no_credentials_error)?;

    let mut client = GarminClient::new(config)?;
    client.login(&creds.email, &creds.password).await?;

    Ok(client)
}

fn no_credentials_error() -> anyhow::Error {
    let path = Credentials::file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "~/.config/garmin/credentials.json".to_string());
    anyhow!("No credentials stored at {path}. Run 'garmin login <email> <password>' first.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config::default();
        let client = GarminClient::new(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_requires_login() {
        let config = Config::default();
        let client = GarminClient::new(&config).unwrap();

        let result = client.get_user_summary("2026-01-17").await;

        assert_eq!(result.unwrap_err().to_string(), "Not logged in");
    }
}
