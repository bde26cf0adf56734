use crate::error::{Error, ParameterError, Result};
use crate::helpers::{check_response, read_json, validate};
use crate::response::AuthResponse;
use crate::types::HttpClient;
use serde_json::Value;
use url::Url;

const CONTEXT: &str = "Authentication failed";

/// Exchanges an authorization code from the identity provider for an account token.
pub async fn exchange_code(
    client: &HttpClient,
    auth_endpoint: &str,
    redirect_uri: &str,
    code: &str,
) -> Result<AuthResponse> {
    let mut url = auth_endpoint.parse::<Url>()
        .map_err(ParameterError::from)?;

    // The code is single-use but still kept out of the logs.
    log::debug!("GET {url}");

    url.query_pairs_mut()
        .append_pair("code", code)
        .append_pair("redirect_uri", redirect_uri);

    let response = client.get(url)
        .send()
        .await
        .map_err(|source| Error::Transport {
            context: CONTEXT.into(),
            source,
        })?;
    let body = check_response(response, || CONTEXT.into()).await?;
    let value = read_json(&body, "authenticate")?;

    match value.get("account_token") {
        Some(Value::String(token)) if !token.is_empty() => {},
        _ => return Err(Error::MissingAccountToken),
    }

    validate(&value, "authenticate")
}

/// Gets the authorization code from the redirect URL the identity provider sends back, e.g.
/// `com.mlb.xbl.app://redirect?code=...`.
pub fn code_from_redirect(
    redirect_url: &str,
) -> std::result::Result<String, ParameterError> {
    let url = redirect_url.parse::<Url>()?;

    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, code)| code.into_owned())
        .filter(|code| !code.is_empty())
        .ok_or(ParameterError::MissingExchangeCode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_code_from_redirect() {
        let code = code_from_redirect("com.mlb.xbl.app://redirect?code=M.C507_BAY.2.U.abc&state=1").unwrap();

        assert_eq!(code, "M.C507_BAY.2.U.abc");
    }

    #[test]
    fn redirect_without_code_is_rejected() {
        assert_eq!(
            code_from_redirect("com.mlb.xbl.app://redirect?error=access_denied"),
            Err(ParameterError::MissingExchangeCode),
        );
        assert!(matches!(code_from_redirect("not a url"), Err(ParameterError::UrlParse(_))));
    }
}
