use super::Identity;
use crate::error::FileError;
use crate::helpers::write_file_atomic;
use crate::types::AccountId;
use std::io::ErrorKind;
use std::path::Path;
use serde::{Serialize, Deserialize};

const FILENAME: &str = "authManager.json";

/// The session as it is stored on disk. Every field may be absent.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default)]
    pub account_token: Option<String>,
    #[serde(default)]
    pub ts_token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
}

impl From<&Identity> for PersistedSession {
    fn from(identity: &Identity) -> Self {
        Self {
            account_id: identity.account_id,
            account_token: Some(identity.account_token.clone()),
            ts_token: identity.ts_token.clone(),
            username: identity.username.clone(),
            expires: identity.expires_at.clone(),
        }
    }
}

impl PersistedSession {
    /// The identity this record holds. `None` if there is no token.
    pub fn into_identity(self) -> Option<Identity> {
        let account_token = self.account_token.filter(|token| !token.is_empty())?;

        Some(Identity {
            account_token,
            account_id: self.account_id,
            ts_token: self.ts_token,
            username: self.username,
            expires_at: self.expires,
        })
    }
}

pub async fn load_session(
    path: &Path,
) -> Result<PersistedSession, FileError> {
    let filepath = path.join(FILENAME);
    let data = async_fs::read_to_string(filepath).await?;
    let session: PersistedSession = serde_json::from_str(&data)?;

    Ok(session)
}

pub async fn save_session(
    path: &Path,
    session: &PersistedSession,
) -> Result<(), FileError> {
    let filepath = path.join(FILENAME);
    let data = serde_json::to_vec(session)?;

    async_fs::create_dir_all(path).await?;
    write_file_atomic(filepath, &data).await?;

    Ok(())
}

/// Removes the record. A missing record is not an error.
pub async fn remove_session(
    path: &Path,
) -> Result<(), FileError> {
    match async_fs::remove_file(path.join(FILENAME)).await {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error.into()),
    }
}
