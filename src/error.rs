//! Error types.

use crate::schema::ValidationReport;
use reqwest::StatusCode;

/// Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error that can occur while making requests or managing the session.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A parameter is invalid.
    #[error("Invalid parameter: {}", .0)]
    Parameter(#[from] ParameterError),
    /// The request could not be sent or the response could not be read.
    #[error("{context}")]
    Transport {
        /// Describes the request that failed.
        context: String,
        /// The underlying transport error.
        #[source]
        source: reqwest_middleware::Error,
    },
    /// The server responded with a non-success status. The body is not inspected.
    #[error("{context} ({status})")]
    Http {
        /// Describes the request that failed.
        context: String,
        /// The status code of the response.
        status: StatusCode,
    },
    /// The response body was not valid JSON.
    #[error("Unknown error in {operation}")]
    Unknown {
        /// The name of the operation.
        operation: &'static str,
        /// The decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The response did not match the expected shape. The report is available for inspection
    /// but is not part of the message.
    #[error("Validation failed for {operation}")]
    Validation {
        /// The name of the operation.
        operation: &'static str,
        /// Every field path that did not conform.
        report: ValidationReport,
    },
    /// The server responded with `success: false`. Contains the message from the server.
    #[error("{}", .0)]
    Api(String),
    /// The authentication response did not contain an account token.
    #[error("Authentication response did not contain an account token")]
    MissingAccountToken,
    /// An account-scoped request was made without credentials.
    #[error("Not logged in")]
    NotLoggedIn,
    /// An error occurred while reading or writing the persisted session.
    #[error("{}", .0)]
    File(#[from] FileError),
}

impl Error {
    /// Whether this error is from the server reporting `success: false`.
    pub fn is_api_failure(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The validation report, if this is a validation error.
    pub fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Validation { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// An error with a parameter supplied by the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Page numbers start at 1.
    #[error("Page number must be at least 1")]
    PageOutOfRange,
    /// The name filter was empty after trimming.
    #[error("Name cannot be empty")]
    EmptyName,
    /// The redirect URL could not be parsed.
    #[error("Invalid redirect URL: {}", .0)]
    UrlParse(#[from] url::ParseError),
    /// The redirect URL did not contain an exchange code.
    #[error("Redirect URL is missing the code parameter")]
    MissingExchangeCode,
}

/// An error when reading or writing files.
#[derive(thiserror::Error, Debug)]
pub enum FileError {
    /// A filesystem error.
    #[error("Filesystem error: {}", .0)]
    FileSystem(#[from] std::io::Error),
    /// The contents of the file could not be parsed.
    #[error("Error parsing file contents: {}", .0)]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{IssueKind, ValidationIssue};

    #[test]
    fn validation_message_hides_diagnostics() {
        let error = Error::Validation {
            operation: "get_collection_groups",
            report: ValidationReport::from(vec![ValidationIssue {
                path: "collection_groups[0].id".into(),
                kind: IssueKind::Missing,
                expected: "string".into(),
                actual: None,
            }]),
        };
        let message = error.to_string();

        assert_eq!(message, "Validation failed for get_collection_groups");
        assert!(!message.contains("collection_groups[0]"));
        assert_eq!(error.validation_report().map(|report| report.len()), Some(1));
    }

    #[test]
    fn api_failure_message_is_server_message() {
        let error = Error::Api("Not enough stubs".into());

        assert!(error.is_api_failure());
        assert_eq!(error.to_string(), "Not enough stubs");
    }
}
