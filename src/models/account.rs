use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::{movie::non_empty, server_error_text, UNKNOWN_TITLE};

/// Body of `POST /api/create-account` and `POST /api/login`
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/update-password`
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct PasswordChange {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn new(
        username: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("username", &self.username)
            .field("old_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// Outcome of an account call the server actually answered
///
/// `ok` mirrors a 2xx status. On failure `error` holds the server's `error`
/// field verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult {
    pub ok: bool,
    pub status: u16,
    pub payload: Value,
    pub error: Option<String>,
}

impl ApiResult {
    pub fn from_response(status: u16, payload: Value) -> Self {
        let ok = (200..300).contains(&status);
        let error = (!ok).then(|| server_error_text(&payload, status));
        Self {
            ok,
            status,
            payload,
            error,
        }
    }

    /// The server's own `message`, if it sent one
    pub fn message(&self) -> Option<&str> {
        self.payload.get("message").and_then(Value::as_str)
    }

    /// Movies recommended in earlier sessions, sent back on login
    ///
    /// Entries that fail to decode are skipped one by one; the rest are kept.
    pub fn previous_recommendations(&self) -> Vec<PreviousRecommendation> {
        let Some(entries) = self
            .payload
            .get("previous_recommendations")
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                serde_json::from_value::<PreviousRecommendation>(entry.clone())
                    .map_err(|e| {
                        tracing::warn!(
                            index,
                            error = %e,
                            entry = %entry,
                            "Skipping undecodable previous recommendation"
                        );
                    })
                    .ok()
            })
            .collect()
    }
}

/// A recommendation stored server-side for a user
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PreviousRecommendation {
    pub movie_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub watch_providers: Option<Vec<String>>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub recommended_at: Option<String>,
}

impl PreviousRecommendation {
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNKNOWN_TITLE)
    }

    pub fn providers(&self) -> &[String] {
        self.watch_providers.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_body_shape() {
        let body = serde_json::to_value(Credentials::new("ana", "s3cret")).unwrap();
        assert_eq!(body, json!({ "username": "ana", "password": "s3cret" }));
    }

    #[test]
    fn test_password_change_body_shape() {
        let body = serde_json::to_value(PasswordChange::new("ana", "old", "new")).unwrap();
        assert_eq!(
            body,
            json!({ "username": "ana", "old_password": "old", "new_password": "new" })
        );
    }

    #[test]
    fn test_debug_hides_passwords() {
        let debug = format!("{:?}", Credentials::new("ana", "s3cret"));
        assert!(debug.contains("ana"));
        assert!(!debug.contains("s3cret"));

        let debug = format!("{:?}", PasswordChange::new("ana", "old-pw", "new-pw"));
        assert!(!debug.contains("old-pw"));
        assert!(!debug.contains("new-pw"));
    }

    #[test]
    fn test_api_result_success() {
        let result = ApiResult::from_response(201, json!({ "message": "Account created successfully." }));
        assert!(result.ok);
        assert_eq!(result.error, None);
        assert_eq!(result.message(), Some("Account created successfully."));
    }

    #[test]
    fn test_api_result_failure_keeps_server_text() {
        let result = ApiResult::from_response(409, json!({ "error": "Username already exists." }));
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some("Username already exists."));
    }

    #[test]
    fn test_api_result_failure_without_error_field() {
        let result = ApiResult::from_response(500, json!({}));
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some("Request failed with status 500"));
    }

    #[test]
    fn test_previous_recommendations_on_login() {
        let result = ApiResult::from_response(
            200,
            json!({
                "message": "Login successful.",
                "previous_recommendations": [{
                    "movie_id": 27205,
                    "title": "Inception",
                    "overview": "A thief who steals corporate secrets",
                    "release_date": "2010-07-16",
                    "poster_path": "/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg",
                    "watch_providers": ["Netflix"],
                    "trailer_url": null,
                    "recommended_at": "2024-11-02T18:21:09.512340"
                }]
            }),
        );

        let previous = result.previous_recommendations();
        assert_eq!(previous.len(), 1);
        assert_eq!(previous[0].movie_id, 27205);
        assert_eq!(previous[0].providers(), ["Netflix"]);
        assert_eq!(previous[0].trailer_url, None);
    }

    #[test]
    fn test_bad_previous_recommendation_is_skipped_alone() {
        let result = ApiResult::from_response(
            200,
            json!({
                "previous_recommendations": [
                    { "movie_id": 1, "title": "Inception" },
                    { "movie_id": "not-a-number", "title": "Broken" },
                    { "movie_id": 3, "title": "Heat", "watch_providers": null }
                ]
            }),
        );

        let previous = result.previous_recommendations();
        assert_eq!(previous.len(), 2);
        assert_eq!(previous[0].title(), "Inception");
        assert_eq!(previous[1].title(), "Heat");
        assert!(previous[1].providers().is_empty());
    }

    #[test]
    fn test_previous_recommendation_null_title_falls_back() {
        let result = ApiResult::from_response(
            200,
            json!({
                "previous_recommendations": [
                    { "movie_id": 1, "title": "Inception" },
                    { "movie_id": 2, "title": null }
                ]
            }),
        );

        let previous = result.previous_recommendations();
        assert_eq!(previous.len(), 2);
        assert_eq!(previous[0].title(), "Inception");
        assert_eq!(previous[1].title(), "Unknown Title");
    }

    #[test]
    fn test_previous_recommendations_absent() {
        let result = ApiResult::from_response(200, json!({ "message": "Login successful." }));
        assert!(result.previous_recommendations().is_empty());
    }
}
