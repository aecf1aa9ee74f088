use serde::Deserialize;

use super::{FieldValue, UNKNOWN_TITLE};

/// Image host the backend's TMDB-style `poster_path` values are relative to
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Filters for `GET /api/recommend-movies`
///
/// All three are free text and may be empty; the backend decides what an
/// empty filter means. They are always sent, in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationQuery {
    pub genre: String,
    pub rating: String,
    pub recency: String,
}

impl RecommendationQuery {
    pub fn new(
        genre: impl Into<String>,
        rating: impl Into<String>,
        recency: impl Into<String>,
    ) -> Self {
        Self {
            genre: genre.into(),
            rating: rating.into(),
            recency: recency.into(),
        }
    }

    /// Percent-encoded query string, without the leading `?`
    ///
    /// Every byte outside `A-Z a-z 0-9 - . _ ~` is escaped, including
    /// `!'()*` which browsers' `encodeURIComponent` leaves alone. The
    /// decoded values are the same either way.
    pub fn to_query_string(&self) -> String {
        format!(
            "genre={}&rating={}&recency={}",
            urlencoding::encode(&self.genre),
            urlencoding::encode(&self.rating),
            urlencoding::encode(&self.recency)
        )
    }
}

/// A movie from the recommendation endpoint
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RecommendedMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<FieldValue>,
    #[serde(default)]
    pub rating: Option<FieldValue>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub watch_providers: Option<Vec<String>>,
}

impl RecommendedMovie {
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNKNOWN_TITLE)
    }

    pub fn year(&self) -> String {
        self.year
            .as_ref()
            .map(FieldValue::to_string)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn rating(&self) -> String {
        self.rating
            .as_ref()
            .map(FieldValue::to_string)
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn genre(&self) -> &str {
        non_empty(&self.genre).unwrap_or("Unknown")
    }

    /// Embed URL of the trailer, if the backend found one
    pub fn trailer_url(&self) -> Option<&str> {
        non_empty(&self.trailer)
    }

    pub fn poster_url(&self) -> Option<&str> {
        non_empty(&self.poster)
    }

    /// Streaming providers; empty when the field is absent or null
    pub fn providers(&self) -> &[String] {
        self.watch_providers.as_deref().unwrap_or_default()
    }
}

/// A movie from the top-rated, now-playing, or search endpoints
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogMovie {
    #[serde(default)]
    pub title: Option<String>,
    /// `YYYY-MM-DD`, or whatever placeholder the backend chose
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<FieldValue>,
    #[serde(default)]
    pub poster: Option<String>,
    /// Raw TMDB path; search results are passed through unshaped
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl CatalogMovie {
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNKNOWN_TITLE)
    }

    /// Everything before the first `-` of the release date
    pub fn year(&self) -> &str {
        non_empty(&self.release_date)
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
            .unwrap_or("Unknown")
    }

    pub fn rating(&self) -> String {
        self.vote_average
            .as_ref()
            .map(FieldValue::to_string)
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn poster_url(&self) -> Option<String> {
        if let Some(poster) = non_empty(&self.poster) {
            return Some(poster.to_string());
        }
        non_empty(&self.poster_path).map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
