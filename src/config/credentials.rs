use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;

/// Stored Garmin Connect login identity.
///
/// Persisted as JSON, readable by the owning user only. There is no
/// encryption at rest beyond the file permissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Get credentials file path (~/.config/garmin/credentials.json)
    pub fn file_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("credentials.json"))
    }

    /// Load stored credentials, or `None` if none have been saved yet.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::file_path()?)
    }

    /// Save credentials, overwriting any existing record.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::file_path()?)
    }

    fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path).context("Failed to read credentials file")?;
        let creds: Self =
            serde_json::from_str(&contents).context("Failed to parse credentials file")?;

        Ok(Some(creds))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents =
            serde_json::to_string(self).context("Failed to serialize credentials")?;
        fs::write(path, contents).context("Failed to write credentials file")?;

        restrict_to_owner(path)?;

        Ok(())
    }
}

/// Restrict the credentials file to owner read/write (mode 0600).
#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms).context("Failed to restrict credentials file permissions")
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let creds = Credentials::new("athlete@example.com", "hunter2");
        creds.save_to(&path).unwrap();

        let loaded = Credentials::load_from(&path).unwrap();
        assert_eq!(loaded, Some(creds));
    }

    #[test]
    fn test_load_absent_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        assert_eq!(Credentials::load_from(&path).unwrap(), None);
    }

    #[test]
    fn test_save_overwrites_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        Credentials::new("old@example.com", "old").save_to(&path).unwrap();
        let newer = Credentials::new("new@example.com", "new");
        newer.save_to(&path).unwrap();

        assert_eq!(Credentials::load_from(&path).unwrap(), Some(newer));
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        Credentials::new("athlete@example.com", "hunter2").save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
