/// HTTP implementation of the movie backend client
///
/// Endpoints:
/// 1. Catalog: `GET /api/recommend-movies`, `/api/top-rated-movies`,
///    `/api/now-playing`, `/api/search-movies` → JSON object wrapping a list
/// 2. Accounts: `POST /api/create-account`, `/api/login`,
///    `/api/update-password` with a JSON body → `{}` or `{ "error": ... }`
use crate::{
    config::Config,
    error::{ClientError, ClientResult},
    models::{
        server_error_text, ApiResult, CatalogMovie, Credentials, HealthStatus, NowPlayingMovies,
        PasswordChange, RecommendationQuery, RecommendedMovie, RecommendedMovies, SearchResults,
        TopRatedMovies,
    },
    services::{
        request_id::{make_span_with_request_id, RequestId, WithRequestId},
        validate_search_query, MovieApi,
    },
};
use reqwest::Client as HttpClient;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::Instrument;

const RECOMMEND_PATH: &str = "/api/recommend-movies";
const TOP_RATED_PATH: &str = "/api/top-rated-movies";
const NOW_PLAYING_PATH: &str = "/api/now-playing";
const SEARCH_PATH: &str = "/api/search-movies";
const CREATE_ACCOUNT_PATH: &str = "/api/create-account";
const LOGIN_PATH: &str = "/api/login";
const UPDATE_PASSWORD_PATH: &str = "/api/update-password";
const HEALTH_PATH: &str = "/api/health";

#[derive(Clone)]
pub struct HttpMovieApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpMovieApi {
    /// Creates a client for the backend at `base_url` (scheme, host, port)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    /// Creates a client reusing an existing connection pool
    pub fn with_client(http_client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    /// Creates a client from configuration, checking the base URL parses
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        reqwest::Url::parse(&config.api_base_url).map_err(|e| {
            ClientError::InvalidConfig(format!(
                "API base URL {:?} is not a valid URL: {}",
                config.api_base_url, e
            ))
        })?;
        Ok(Self::new(config.api_base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Full URL for a recommendation request
    pub fn recommend_url(&self, query: &RecommendationQuery) -> String {
        format!("{}?{}", self.endpoint(RECOMMEND_PATH), query.to_query_string())
    }

    /// Full URL for a title search
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?query={}",
            self.endpoint(SEARCH_PATH),
            urlencoding::encode(query)
        )
    }

    /// GETs `url` and decodes a 2xx JSON body into `T`
    async fn get_json<T: DeserializeOwned>(&self, path: &str, url: &str) -> ClientResult<T> {
        let request_id = RequestId::new();
        let span = make_span_with_request_id("GET", path, &request_id);

        async move {
            let response = self
                .http_client
                .get(url)
                .with_request_id(&request_id)
                .send()
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Request to movie backend failed");
                    e
                })?;

            let status = response.status();
            let body = response.text().await?;
            let payload = parse_body(&body)?;

            if !status.is_success() {
                let message = server_error_text(&payload, status.as_u16());
                tracing::warn!(status = status.as_u16(), error = %message, "Movie backend returned an error");
                return Err(ClientError::Server {
                    status: status.as_u16(),
                    message,
                });
            }

            serde_json::from_value(payload).map_err(|e| {
                tracing::error!(error = %e, "Unexpected response shape from movie backend");
                ClientError::MalformedResponse(format!("Unexpected response shape: {}", e))
            })
        }
        .instrument(span)
        .await
    }

    /// POSTs `body` as JSON to `path`; any answered status becomes an [`ApiResult`]
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<ApiResult> {
        let request_id = RequestId::new();
        let span = make_span_with_request_id("POST", path, &request_id);

        async move {
            let response = self
                .http_client
                .post(self.endpoint(path))
                .with_request_id(&request_id)
                .json(body)
                .send()
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Request to movie backend failed");
                    e
                })?;

            let status = response.status().as_u16();
            let text = response.text().await?;
            let result = ApiResult::from_response(status, parse_body(&text)?);

            match &result.error {
                None => tracing::info!(status, "Account request succeeded"),
                Some(error) => tracing::warn!(status, error = %error, "Account request rejected"),
            }

            Ok(result)
        }
        .instrument(span)
        .await
    }
}

/// Parses a response body, logging what arrived when it isn't JSON
fn parse_body(body: &str) -> ClientResult<Value> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, response = %body, "Failed to parse movie backend response");
        ClientError::MalformedResponse(format!("Response is not valid JSON: {}", e))
    })
}

#[async_trait::async_trait]
impl MovieApi for HttpMovieApi {
    async fn recommend_movies(
        &self,
        query: &RecommendationQuery,
    ) -> ClientResult<Vec<RecommendedMovie>> {
        let body: RecommendedMovies = self
            .get_json(RECOMMEND_PATH, &self.recommend_url(query))
            .await?;
        let movies = body.recommended_movies.unwrap_or_default();

        tracing::info!(
            genre = %query.genre,
            rating = %query.rating,
            recency = %query.recency,
            results = movies.len(),
            "Recommendations fetched"
        );

        Ok(movies)
    }

    async fn fetch_top_rated(&self) -> ClientResult<Vec<CatalogMovie>> {
        let body: TopRatedMovies = self
            .get_json(TOP_RATED_PATH, &self.endpoint(TOP_RATED_PATH))
            .await?;
        let movies = body.top_rated_movies.unwrap_or_default();
        tracing::info!(results = movies.len(), "Top-rated movies fetched");
        Ok(movies)
    }

    async fn fetch_now_playing(&self) -> ClientResult<Vec<CatalogMovie>> {
        let body: NowPlayingMovies = self
            .get_json(NOW_PLAYING_PATH, &self.endpoint(NOW_PLAYING_PATH))
            .await?;
        let movies = body.now_playing_movies.unwrap_or_default();
        tracing::info!(results = movies.len(), "Now-playing movies fetched");
        Ok(movies)
    }

    async fn search_movies(&self, query: &str) -> ClientResult<Vec<CatalogMovie>> {
        let query = validate_search_query(query)?;

        let body: SearchResults = self.get_json(SEARCH_PATH, &self.search_url(query)).await?;
        let movies = body.search_results.unwrap_or_default();

        tracing::info!(query = %query, results = movies.len(), "Title search completed");

        Ok(movies)
    }

    async fn create_account(&self, credentials: &Credentials) -> ClientResult<ApiResult> {
        tracing::debug!(username = %credentials.username, "Creating account");
        self.post_json(CREATE_ACCOUNT_PATH, credentials).await
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<ApiResult> {
        tracing::debug!(username = %credentials.username, "Logging in");
        self.post_json(LOGIN_PATH, credentials).await
    }

    async fn update_password(&self, change: &PasswordChange) -> ClientResult<ApiResult> {
        tracing::debug!(username = %change.username, "Updating password");
        self.post_json(UPDATE_PASSWORD_PATH, change).await
    }

    async fn health(&self) -> ClientResult<HealthStatus> {
        self.get_json(HEALTH_PATH, &self.endpoint(HEALTH_PATH)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_api() -> HttpMovieApi {
        HttpMovieApi::new("http://test.local:5000/")
    }

    fn decode_query(url: &str) -> HashMap<String, String> {
        reqwest::Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let api = create_test_api();
        assert_eq!(api.base_url(), "http://test.local:5000");
        assert_eq!(
            api.endpoint(TOP_RATED_PATH),
            "http://test.local:5000/api/top-rated-movies"
        );
    }

    #[test]
    fn test_recommend_url_round_trips() {
        let api = create_test_api();
        let cases = [
            RecommendationQuery::default(),
            RecommendationQuery::new("Action", "7", "2010-2020"),
            RecommendationQuery::new("Sci-Fi", "", ""),
            RecommendationQuery::new("Rom & Com", "8.5+", "last 5 years"),
            RecommendationQuery::new("a=b?c#d", "100%", "/?&"),
            RecommendationQuery::new("Comédie", "★★★", "日本"),
        ];

        for query in cases {
            let url = api.recommend_url(&query);
            assert!(url.starts_with("http://test.local:5000/api/recommend-movies?"));

            let pairs = decode_query(&url);
            assert_eq!(pairs.len(), 3, "unexpected pairs in {}", url);
            assert_eq!(pairs["genre"], query.genre);
            assert_eq!(pairs["rating"], query.rating);
            assert_eq!(pairs["recency"], query.recency);
        }
    }

    #[test]
    fn test_search_url_encodes_query() {
        let api = create_test_api();
        assert_eq!(
            api.search_url("Inception"),
            "http://test.local:5000/api/search-movies?query=Inception"
        );

        let url = api.search_url("Crouching Tiger, Hidden Dragon & more");
        assert!(!url.contains(' '));
        assert_eq!(
            decode_query(&url)["query"],
            "Crouching Tiger, Hidden Dragon & more"
        );
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let config = Config {
            api_base_url: "not a url".to_string(),
            ..Config::default()
        };
        let err = HttpMovieApi::from_config(&config).err().unwrap();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let api = HttpMovieApi::from_config(&Config::default()).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_parse_body_rejects_html() {
        let err = parse_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_blank_search_fails_without_request() {
        // Nothing listens on this port; a request would surface as a transport error.
        let api = HttpMovieApi::new("http://127.0.0.1:9");
        let err = api.search_movies("   ").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }
}
