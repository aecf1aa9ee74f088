use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;

pub mod account;
pub mod movie;

pub use account::{ApiResult, Credentials, PasswordChange, PreviousRecommendation};
pub use movie::{CatalogMovie, RecommendationQuery, RecommendedMovie};

pub(crate) const UNKNOWN_TITLE: &str = "Unknown Title";

/// A scalar the backend is loose about
///
/// Years arrive as `2010` or `"2010"`, ratings as `8.8` or `"N/A"`.
/// Whatever shape shows up is kept and rendered as-is.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(v) => write!(f, "{}", v),
        }
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

/// `GET /api/recommend-movies`
#[derive(Debug, Default, Deserialize)]
pub struct RecommendedMovies {
    #[serde(default)]
    pub recommended_movies: Option<Vec<RecommendedMovie>>,
}

/// `GET /api/top-rated-movies`
#[derive(Debug, Default, Deserialize)]
pub struct TopRatedMovies {
    #[serde(default)]
    pub top_rated_movies: Option<Vec<CatalogMovie>>,
}

/// `GET /api/now-playing`
#[derive(Debug, Default, Deserialize)]
pub struct NowPlayingMovies {
    #[serde(default)]
    pub now_playing_movies: Option<Vec<CatalogMovie>>,
}

/// `GET /api/search-movies`
#[derive(Debug, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub search_results: Option<Vec<CatalogMovie>>,
}

/// `GET /api/health`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Error text for a non-2xx body: the server's `error` field, or the status
pub(crate) fn server_error_text(payload: &Value, status: u16) -> String {
    payload
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_accepts_numbers_and_text() {
        let year: FieldValue = serde_json::from_value(json!(2010)).unwrap();
        let rating: FieldValue = serde_json::from_value(json!(8.8)).unwrap();
        let missing: FieldValue = serde_json::from_value(json!("N/A")).unwrap();

        assert_eq!(year, FieldValue::Int(2010));
        assert_eq!(rating, FieldValue::Float(8.8));
        assert_eq!(missing, FieldValue::Text("N/A".to_string()));

        assert_eq!(year.to_string(), "2010");
        assert_eq!(rating.to_string(), "8.8");
        assert_eq!(missing.to_string(), "N/A");
    }

    #[test]
    fn test_missing_list_defaults_to_none() {
        let body: SearchResults = serde_json::from_value(json!({})).unwrap();
        assert!(body.search_results.is_none());

        let body: TopRatedMovies =
            serde_json::from_value(json!({ "top_rated_movies": null })).unwrap();
        assert!(body.top_rated_movies.is_none());
    }

    #[test]
    fn test_recommended_envelope_ignores_extra_fields() {
        let body: RecommendedMovies = serde_json::from_value(json!({
            "status": "success",
            "recommended_movies": [{ "title": "Heat", "year": 1995, "rating": 8.3, "genre": "Crime" }]
        }))
        .unwrap();
        assert_eq!(body.recommended_movies.unwrap().len(), 1);
    }

    #[test]
    fn test_server_error_text() {
        assert_eq!(
            server_error_text(&json!({ "error": "Invalid credentials" }), 401),
            "Invalid credentials"
        );
        assert_eq!(
            server_error_text(&json!({ "message": "nope" }), 503),
            "Request failed with status 503"
        );
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_value(json!({ "status": "healthy" })).unwrap();
        assert!(health.is_healthy());
    }
}
