//! Authorization URL construction and token response handling

use serde_json::Value;
use trendbeacon_core::config::TikTokConfig;

/// Query string value for the PKCE method
pub const CODE_CHALLENGE_METHOD: &str = "S256";

/// Build the URL the browser is sent to for login
///
/// `redirect_uri`, `client_key`, `state` and `code_challenge` are
/// percent-encoded. The scope list keeps its literal commas.
#[must_use]
pub fn authorize_url(config: &TikTokConfig, state: &str, code_challenge: &str) -> String {
    format!(
        "{base}?client_key={client_key}&scope={scope}&response_type=code\
         &redirect_uri={redirect_uri}&state={state}\
         &code_challenge={code_challenge}&code_challenge_method={CODE_CHALLENGE_METHOD}",
        base = config.authorize_url,
        client_key = urlencoding::encode(&config.client_key),
        scope = config.scope_param(),
        redirect_uri = urlencoding::encode(&config.redirect_uri),
        state = urlencoding::encode(state),
        code_challenge = urlencoding::encode(code_challenge),
    )
}

/// The token object within a token endpoint response
///
/// TikTok returns it either at the top level or wrapped in `data`; anything
/// without an `access_token` is a failure.
#[must_use]
pub fn extract_token(response: &Value) -> Option<&Value> {
    if response.get("access_token").is_some() {
        return Some(response);
    }
    response
        .get("data")
        .filter(|data| data.get("access_token").is_some())
}

/// Human-readable reason for a failed token exchange
#[must_use]
pub fn token_error_message(response: &Value) -> String {
    response
        .get("error_description")
        .or_else(|| response.get("message"))
        .map_or_else(
            || response.to_string(),
            |value| value.as_str().map_or_else(|| value.to_string(), str::to_string),
        )
}
