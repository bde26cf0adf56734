use crate::error::{Error, Result};
use crate::schema::{self, Shape};
use crate::types::HttpClient;
use std::path::{Path, PathBuf};
use bytes::Bytes;
use directories::ProjectDirs;
use reqwest::header;
use reqwest_middleware::ClientBuilder;
use serde_json::Value;

pub const USER_AGENT_STRING: &str = concat!("theshow-companion/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    pub static ref DEFAULT_CLIENT: HttpClient = get_default_client(USER_AGENT_STRING);
}

/// Builds the default client. No retry middleware is installed; every operation makes exactly
/// one request.
pub fn get_default_client(user_agent_string: &'static str) -> HttpClient {
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    // Should not panic since the headers are static.
    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|error| panic!("Default HTTP client could not be built: {error}"));

    ClientBuilder::new(client).build()
}

/// The shared default client when `user_agent_string` is the default, otherwise a new client.
pub fn get_client(user_agent_string: &'static str) -> HttpClient {
    if user_agent_string == USER_AGENT_STRING {
        DEFAULT_CLIENT.clone()
    } else {
        get_default_client(user_agent_string)
    }
}

/// Reads the body of a response. Non-success statuses are an [`Error::Http`] and the body is
/// left unread.
pub async fn check_response(
    response: reqwest::Response,
    context: impl FnOnce() -> String,
) -> Result<Bytes> {
    let status = response.status();

    if !status.is_success() {
        let context = context();

        log::error!("{context} ({status})");
        return Err(Error::Http {
            context,
            status,
        });
    }

    response.bytes().await.map_err(|error| Error::Transport {
        context: context(),
        source: error.into(),
    })
}

/// Decodes a body as JSON.
pub fn read_json(
    body: &[u8],
    operation: &'static str,
) -> Result<Value> {
    serde_json::from_slice(body).map_err(|source| {
        log::error!("Unknown error in {operation}: {source}");
        Error::Unknown {
            operation,
            source,
        }
    })
}

/// Validates a value and converts it. The full report is logged on failure.
pub fn validate<T>(
    value: &Value,
    operation: &'static str,
) -> Result<T>
where
    T: Shape,
{
    schema::parse::<T>(value).map_err(|report| {
        log::error!("Validation failed for {operation}:\n{report}");
        Error::Validation {
            operation,
            report,
        }
    })
}

/// Checks the status, decodes and validates a response.
pub async fn parses_response<T>(
    response: reqwest::Response,
    operation: &'static str,
    context: impl FnOnce() -> String,
) -> Result<T>
where
    T: Shape,
{
    let body = check_response(response, context).await?;
    let value = read_json(&body, operation)?;

    validate(&value, operation)
}

/// Writes a file by writing to a temporary file beside it and renaming it into place.
pub async fn write_file_atomic(
    filepath: PathBuf,
    bytes: &[u8],
) -> std::io::Result<()> {
    let mut temp_filepath = filepath.clone().into_os_string();

    temp_filepath.push(".tmp");

    let temp_filepath = PathBuf::from(temp_filepath);

    if let Err(error) = async_fs::write(&temp_filepath, bytes).await {
        let _ = async_fs::remove_file(&temp_filepath).await;
        return Err(error);
    }

    async_fs::rename(&temp_filepath, &filepath).await
}

/// The platform data directory, e.g. `~/.local/share/theshow-companion` on Linux. Falls back to
/// a relative directory when the home directory cannot be determined.
pub fn default_data_directory() -> PathBuf {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| Path::new("data").to_path_buf())
}

/// Joins a base URL and a path, ignoring a trailing slash on the base.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{path}", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_urls() {
        assert_eq!(join_url("https://mlb25.theshow.com/apis/", "listings.json"), "https://mlb25.theshow.com/apis/listings.json");
        assert_eq!(join_url("https://mlb25.theshow.com/apis", "listings.json"), "https://mlb25.theshow.com/apis/listings.json");
    }

    #[test]
    fn unknown_error_for_non_json_body() {
        let error = read_json(b"<html>502</html>", "get_stubs").unwrap_err();

        assert_eq!(error.to_string(), "Unknown error in get_stubs");
    }

    #[tokio::test]
    async fn writes_file_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let filepath = dir.path().join("record.json");

        write_file_atomic(filepath.clone(), b"{}").await.unwrap();
        write_file_atomic(filepath.clone(), b"{\"a\":1}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&filepath).unwrap(), "{\"a\":1}");
        assert!(!dir.path().join("record.json.tmp").exists());
    }
}
