//! TikTok login: redirect out, and the callback that finishes it

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use maud::{DOCTYPE, Markup, html};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use trendbeacon_tiktok::{authorize_url, extract_token, token_error_message};

/// Where the browser goes once the account is connected
pub const DASHBOARD_PATH: &str = "/trendbeacon.html";

/// Delay before the success page moves on, in milliseconds
const REDIRECT_DELAY_MS: u32 = 2000;

/// Query string TikTok sends back to the redirect URI
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    /// Authorization code
    pub code: Option<String>,
    /// State issued at login
    pub state: Option<String>,
    /// Error code when the user declined or the request was bad
    pub error: Option<String>,
    /// Human-readable error
    pub error_description: Option<String>,
}

/// Start a login: record a verifier and send the browser to TikTok
pub async fn login(State(state): State<Arc<AppState>>) -> Response {
    if !state.config.tiktok.has_credentials() {
        warn!("Login requested but TikTok credentials are not configured");
        return page(
            StatusCode::SERVICE_UNAVAILABLE,
            message_page("Error", "TikTok client credentials are not configured."),
        );
    }

    let start = state.begin_login();
    let location = authorize_url(&state.config.tiktok, &start.state, &start.code_challenge);

    info!("Redirecting to TikTok login");
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Finish a login: trade the code for a token and save it
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    if let Some(error) = non_empty(query.error) {
        let description = query
            .error_description
            .unwrap_or_else(|| "Unknown error".to_string());
        warn!(%error, %description, "TikTok reported a login error");
        return page(StatusCode::OK, login_error_page(&error, &description));
    }

    let (Some(code), Some(login_state)) = (non_empty(query.code), non_empty(query.state)) else {
        return page(
            StatusCode::BAD_REQUEST,
            message_page("Error", "Missing code or state from TikTok."),
        );
    };

    let Some(verifier) = state.take_verifier(&login_state) else {
        warn!("Callback with unknown or expired state");
        return page(
            StatusCode::BAD_REQUEST,
            message_page("Error", "Session expired. Please try logging in again."),
        );
    };

    let response = match state.tiktok.exchange_code(&code, &verifier).await {
        Ok(response) => response,
        Err(e) => {
            error!("Token exchange request failed: {}", e);
            return page(
                StatusCode::BAD_GATEWAY,
                message_page("Error", &format!("Token exchange failed: {e}")),
            );
        }
    };

    let Some(token) = extract_token(&response) else {
        let message = token_error_message(&response);
        warn!("Token exchange failed: {}", message);
        return page(StatusCode::OK, exchange_failed_page(&message, &response));
    };

    if let Err(e) = state.tiktok.tokens().save(token).await {
        error!("Failed to save token: {}", e);
        return page(
            StatusCode::INTERNAL_SERVER_ERROR,
            message_page("Error", "The token could not be saved."),
        );
    }

    info!("Account connected");
    page(StatusCode::OK, connected_page())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn page(status: StatusCode, markup: Markup) -> Response {
    (status, Html(markup.into_string())).into_response()
}

fn shell(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "TrendBeacon - " (title) }
            }
            body style="background:#010101;color:#fff;font-family:sans-serif;display:flex;\
                        justify-content:center;align-items:center;height:100vh;flex-direction:column;" {
                (body)
            }
        }
    }
}

fn message_page(heading: &str, message: &str) -> Markup {
    shell(
        heading,
        html! {
            h1 { (heading) }
            p { (message) }
        },
    )
}

fn login_error_page(error: &str, description: &str) -> Markup {
    shell(
        "Login Error",
        html! {
            h1 { "Login Error" }
            p { (error) ": " (description) }
        },
    )
}

fn exchange_failed_page(message: &str, response: &serde_json::Value) -> Markup {
    let pretty = serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
    shell(
        "Error",
        html! {
            h1 { "Error" }
            p { (message) }
            pre { (pretty) }
        },
    )
}

fn connected_page() -> Markup {
    let redirect = format!(
        "setTimeout(() => window.location.href = '{DASHBOARD_PATH}', {REDIRECT_DELAY_MS});"
    );
    shell(
        "Connected",
        html! {
            h1 style="color:#4ade80;" { "✓ Connected!" }
            p { "TrendBeacon is now linked to your TikTok account." }
            p style="color:#888;" { "Redirecting to dashboard..." }
            script { (maud::PreEscaped(redirect)) }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connected_page_redirects_to_dashboard() {
        let html = connected_page().into_string();

        assert!(html.contains("Connected!"));
        assert!(html.contains("window.location.href = '/trendbeacon.html', 2000"));
    }

    #[test]
    fn test_login_error_page_escapes_query_values() {
        let html = login_error_page("access_denied", "<b>nope</b>").into_string();

        assert!(html.contains("<h1>Login Error</h1>"));
        assert!(html.contains("access_denied: &lt;b&gt;nope&lt;/b&gt;"));
    }

    #[test]
    fn test_exchange_failed_page_shows_response() {
        let response = json!({"error": "invalid_grant"});
        let html = exchange_failed_page("Code expired", &response).into_string();

        assert!(html.contains("<p>Code expired</p>"));
        assert!(html.contains("&quot;error&quot;: &quot;invalid_grant&quot;"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
