use crate::schema::{Schema, Shape};
use serde::{Serialize, Deserialize};

/// The response from exchanging an authorization code.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct AuthResponse {
    pub account_token: String,
    /// When the token expires.
    pub expiration: String,
    pub account_id: u64,
    pub username: String,
    /// The secondary token.
    pub ts_token: String,
    pub age_group: i64,
}

impl Shape for AuthResponse {
    fn schema() -> Schema {
        Schema::object([
            ("account_token", Schema::string()),
            ("expiration", Schema::string()),
            ("account_id", Schema::non_negative_integer()),
            ("username", Schema::string()),
            ("ts_token", Schema::string()),
            ("age_group", Schema::integer()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{parse, IssueKind};
    use serde_json::Value;

    #[test]
    fn parses_auth_response() {
        let value: Value = serde_json::from_str(include_str!("fixtures/auth.json")).unwrap();
        let response = parse::<AuthResponse>(&value).unwrap();

        assert_eq!(response.account_id, 42);
        assert_eq!(response.username, "Slugger42");
    }

    #[test]
    fn requires_ts_token() {
        let mut value: Value = serde_json::from_str(include_str!("fixtures/auth.json")).unwrap();

        value.as_object_mut().unwrap().remove("ts_token");

        let report = parse::<AuthResponse>(&value).unwrap_err();

        assert_eq!(report.find("ts_token").map(|issue| issue.kind), Some(IssueKind::Missing));
    }
}
