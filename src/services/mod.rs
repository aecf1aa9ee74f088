/// Client façade over the movie backend
///
/// Every user action maps to exactly one call on [`MovieApi`]. Calls are
/// single-shot: no retries, no caching, no cancellation. The HTTP
/// implementation lives in [`http`]; the trait is the seam the ui layer and
/// its tests plug into.
use crate::{
    error::{ClientError, ClientResult},
    models::{
        ApiResult, CatalogMovie, Credentials, HealthStatus, PasswordChange, RecommendationQuery,
        RecommendedMovie,
    },
};

pub mod http;
pub mod request_id;

pub use http::HttpMovieApi;

/// Shown when a search is attempted with nothing to search for
pub const EMPTY_SEARCH_MESSAGE: &str = "Please enter a movie title to search.";

/// Operations the backend offers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieApi: Send + Sync {
    /// `GET /api/recommend-movies`
    ///
    /// An empty list is a valid answer, not an error.
    async fn recommend_movies(
        &self,
        query: &RecommendationQuery,
    ) -> ClientResult<Vec<RecommendedMovie>>;

    /// `GET /api/top-rated-movies`
    async fn fetch_top_rated(&self) -> ClientResult<Vec<CatalogMovie>>;

    /// `GET /api/now-playing`
    async fn fetch_now_playing(&self) -> ClientResult<Vec<CatalogMovie>>;

    /// `GET /api/search-movies`
    ///
    /// A blank query fails with [`ClientError::InvalidInput`] before any
    /// request is made.
    async fn search_movies(&self, query: &str) -> ClientResult<Vec<CatalogMovie>>;

    /// `POST /api/create-account`
    ///
    /// A non-2xx answer is `Ok` with `ok == false`; only transport failures
    /// are `Err`.
    async fn create_account(&self, credentials: &Credentials) -> ClientResult<ApiResult>;

    /// `POST /api/login`
    async fn login(&self, credentials: &Credentials) -> ClientResult<ApiResult>;

    /// `POST /api/update-password`
    async fn update_password(&self, change: &PasswordChange) -> ClientResult<ApiResult>;

    /// `GET /api/health`
    async fn health(&self) -> ClientResult<HealthStatus>;
}

/// Trims a search query, rejecting it if nothing is left
pub fn validate_search_query(query: &str) -> ClientResult<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidInput(EMPTY_SEARCH_MESSAGE.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  Inception \n").unwrap(), "Inception");
    }

    #[test]
    fn test_validate_search_query_rejects_blank() {
        for blank in ["", "   ", "\t\n"] {
            let err = validate_search_query(blank).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(err.user_message(), EMPTY_SEARCH_MESSAGE);
        }
    }
}
