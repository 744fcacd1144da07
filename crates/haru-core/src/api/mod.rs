//! Diary API client.
//!
//! Thin HTTP wrapper over the remote diary service: one method per
//! endpoint, JSON bodies in and out, session carried by a server-set
//! cookie. Native builds keep the cookie in reqwest's jar; wasm builds
//! send `credentials: include` so the browser attaches it.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{
    Diary, DiaryDraft, DiaryId, DiaryPatch, ListQuery, ProfileUpdate, SignupRequest, User,
};

/// HTTP client for the diary service.
#[derive(Debug, Clone)]
pub struct DiaryApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl DiaryApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;

        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/signup` - create an account.
    pub async fn sign_up(&self, signup: &SignupRequest) -> Result<User> {
        validate_credentials(&signup.email, &signup.password)?;
        tracing::debug!(email = %signup.email, "signing up");
        expect_json(self.request(Method::POST, "/auth/signup").json(signup))
            .await
    }

    /// `POST /auth/login` - start a session.
    ///
    /// The server expects an OAuth2-style form body, so the email travels
    /// in the `username` field.
    pub async fn log_in(&self, email: &str, password: &str) -> Result<()> {
        validate_credentials(email, password)?;
        tracing::debug!(email = %email, "logging in");
        expect_ok(
            self.request(Method::POST, "/auth/login")
                .form(&[("username", email), ("password", password)]),
        )
        .await
    }

    /// `POST /auth/logout` - end the session.
    pub async fn log_out(&self) -> Result<()> {
        tracing::debug!("logging out");
        expect_ok(self.request(Method::POST, "/auth/logout"))
            .await
    }

    /// `GET /auth/me` - fetch the signed-in user.
    ///
    /// Returns [`Error::Unauthorized`] when no valid session cookie is
    /// present.
    pub async fn current_user(&self) -> Result<User> {
        expect_json(self.request(Method::GET, "/auth/me")).await
    }

    /// `PATCH /auth/me` - update profile fields.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        tracing::debug!("updating profile");
        expect_json(self.request(Method::PATCH, "/auth/me").json(update))
            .await
    }

    /// `DELETE /auth/me` - delete the account.
    pub async fn delete_account(&self) -> Result<()> {
        tracing::debug!("deleting account");
        expect_ok(self.request(Method::DELETE, "/auth/me"))
            .await
    }

    /// `GET /diaries` - list a page of the user's diary entries.
    pub async fn list_diaries(&self, query: &ListQuery) -> Result<Vec<Diary>> {
        tracing::debug!(skip = query.skip, limit = query.limit, "listing diaries");
        expect_json(
            self.request(Method::GET, "/diaries")
                .query(&query.as_pairs()),
        )
        .await
    }

    /// `POST /diaries` - create a new diary entry.
    pub async fn create_diary(&self, draft: &DiaryDraft) -> Result<Diary> {
        tracing::debug!("creating diary");
        expect_json(self.request(Method::POST, "/diaries").json(draft))
            .await
    }

    /// `GET /diaries/:id` - fetch one diary entry.
    pub async fn get_diary(&self, id: DiaryId) -> Result<Diary> {
        expect_json(self.request(Method::GET, &format!("/diaries/{id}")))
            .await
    }

    /// `PATCH /diaries/:id` - update fields of one diary entry.
    pub async fn update_diary(&self, id: DiaryId, patch: &DiaryPatch) -> Result<Diary> {
        tracing::debug!(%id, "updating diary");
        expect_json(
            self.request(Method::PATCH, &format!("/diaries/{id}"))
                .json(patch),
        )
        .await
    }

    /// `DELETE /diaries/:id` - delete one diary entry.
    pub async fn delete_diary(&self, id: DiaryId) -> Result<()> {
        tracing::debug!(%id, "deleting diary");
        expect_ok(self.request(Method::DELETE, &format!("/diaries/{id}")))
            .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{path}", self.base_url));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }
}

async fn expect_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = check(request).await?;
    Ok(response.json::<T>().await?)
}

async fn expect_ok(request: RequestBuilder) -> Result<()> {
    check(request).await.map(|_| ())
}

async fn check(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(map_api_error(status, &body))
}

fn map_api_error(status: StatusCode, body: &str) -> Error {
    let detail = parse_detail(body);
    match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized,
        StatusCode::NOT_FOUND => {
            Error::NotFound(detail.unwrap_or_else(|| "resource".to_string()))
        }
        _ => Error::Api {
            status: status.as_u16(),
            message: detail.unwrap_or_else(|| fallback_message(status, body)),
        },
    }
}

/// Error payload shape used by the diary service: either a plain string
/// `detail` or a validation array of objects carrying `msg`.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    detail: Option<serde_json::Value>,
    message: Option<String>,
}

fn parse_detail(body: &str) -> Option<String> {
    let payload = serde_json::from_str::<ApiErrorResponse>(body).ok()?;
    if let Some(message) = payload.message {
        return Some(message.trim().to_string());
    }
    match payload.detail? {
        serde_json::Value::String(detail) => Some(detail.trim().to_string()),
        serde_json::Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(serde_json::Value::as_str)
            .map(|msg| msg.trim().to_string()),
        _ => None,
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let trimmed: String = body.trim().chars().take(180).collect();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        trimmed
    }
}

fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidConfiguration("API base URL must not be empty"));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::InvalidConfiguration(
            "API base URL must include http:// or https://",
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(Error::InvalidInput("Email is required"));
    }
    if password.trim().is_empty() {
        return Err(Error::InvalidInput("Password is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slash() {
        let normalized = normalize_base_url("http://127.0.0.1:8000/").unwrap();
        assert_eq!(normalized, "http://127.0.0.1:8000");
    }

    #[test]
    fn normalize_base_url_requires_http_scheme() {
        assert!(normalize_base_url("127.0.0.1:8000").is_err());
        assert!(normalize_base_url("   ").is_err());
    }

    #[test]
    fn string_detail_is_surfaced() {
        let error = map_api_error(
            StatusCode::CONFLICT,
            r#"{"detail": "Email already registered"}"#,
        );
        match error {
            Error::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Email already registered");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validation_array_detail_uses_first_message() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address"}]}"#;
        assert_eq!(
            parse_detail(body),
            Some("value is not a valid email address".to_string())
        );
    }

    #[test]
    fn unauthorized_maps_to_dedicated_variant() {
        let error = map_api_error(StatusCode::UNAUTHORIZED, r#"{"detail": "Not authenticated"}"#);
        assert!(error.is_unauthorized());
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        let error = map_api_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        match error {
            Error::Api { message, .. } => assert_eq!(message, "HTTP 500"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_credentials_are_rejected_before_sending() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("diarist@example.com", "  ").is_err());
        assert!(validate_credentials("diarist@example.com", "secret").is_ok());
    }
}
