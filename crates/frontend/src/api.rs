use serde::de::DeserializeOwned;
use serde::Deserialize;
use shotboard_shared::models::{CurrentUser, DayStats, RelayStats, Stats, TokenResponse};

use crate::config::AppConfig;
use crate::session::Session;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{}", describe_status(.status, .context, .detail))]
    Status {
        status: u16,
        context: &'static str,
        detail: Option<String>,
    },
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the page should send the user back to the login form.
    pub fn needs_login(&self) -> bool {
        matches!(
            self,
            ApiError::NotAuthenticated | ApiError::Status { status: 401, .. }
        )
    }
}

fn describe_status(status: &u16, context: &str, detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!("{context}: {d}"),
        None => format!("{context} (HTTP {status})"),
    }
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

pub fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.is_empty())
}

/// Query value for the stats endpoint, e.g. `7` -> `"7days"`.
pub fn period_param(days: u32) -> String {
    format!("{}days", days)
}

pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/api/v1/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Token from the session, or `NotAuthenticated`.
pub fn require_token(session: &Session) -> Result<String, ApiError> {
    session.token().ok_or(ApiError::NotAuthenticated)
}

/// Forget a token the server refused. Returns true when the session was
/// cleared and the caller should head back to the login form.
pub fn drop_rejected_token(session: &Session, err: &ApiError) -> bool {
    if err.needs_login() {
        session.clear();
        true
    } else {
        false
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        ApiClient {
            base_url: config.api_base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(
        resp: reqwest::Response,
        context: &'static str,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), context, "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                context,
                detail: parse_error_detail(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, String)],
        context: &'static str,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;
        Self::decode(resp, context).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let resp = self
            .http
            .post(self.url("token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        if resp.status().as_u16() == 401 || resp.status().as_u16() == 400 {
            tracing::info!(username, "Login rejected");
            return Err(ApiError::InvalidCredentials);
        }
        let token: TokenResponse = Self::decode(resp, "Login failed").await?;
        tracing::info!(username, "Logged in");
        Ok(token)
    }

    pub async fn current_user(&self, token: &str) -> Result<CurrentUser, ApiError> {
        self.get(token, "users/me/", &[], "Failed to fetch user info").await
    }

    pub async fn recent_scores(&self, token: &str, days: u32) -> Result<Vec<DayStats>, ApiError> {
        self.get(
            token,
            "shots/recent-scores",
            &[("days", days.to_string())],
            "Failed to fetch recent scores",
        )
        .await
    }

    pub async fn stats(&self, token: &str, days: u32) -> Result<Stats, ApiError> {
        self.get(
            token,
            "shots/stats",
            &[("period", period_param(days))],
            "Failed to fetch stats",
        )
        .await
    }

    pub async fn shots_by_day(&self, token: &str, date: &str) -> Result<DayStats, ApiError> {
        self.get(
            token,
            "shots/by-day",
            &[("date_", date.to_string())],
            "Failed to fetch shots for day",
        )
        .await
    }

    pub async fn shots_by_set(
        &self,
        token: &str,
        date: &str,
        set_id: u32,
    ) -> Result<Vec<RelayStats>, ApiError> {
        self.get(
            token,
            "shots/by-set",
            &[("date_", date.to_string()), ("set_id", set_id.to_string())],
            "Failed to fetch shots for set",
        )
        .await
    }
}
