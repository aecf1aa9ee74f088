use reqwest::RequestBuilder;
use uuid::Uuid;

/// HTTP header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation ID stamped on every outgoing request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Creates a new random request ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the UUID as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attaches a [`RequestId`] as the `x-request-id` header
pub trait WithRequestId {
    fn with_request_id(self, request_id: &RequestId) -> Self;
}

impl WithRequestId for RequestBuilder {
    fn with_request_id(self, request_id: &RequestId) -> Self {
        self.header(REQUEST_ID_HEADER, request_id.as_str())
    }
}

/// Span covering one call to the backend
pub fn make_span_with_request_id(method: &str, endpoint: &str, request_id: &RequestId) -> tracing::Span {
    tracing::info_span!(
        "api_request",
        method = %method,
        endpoint = %endpoint,
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = RequestId::new();
        assert_eq!(id.to_string(), id.as_str());
        assert!(Uuid::parse_str(&id.as_str()).is_ok());
    }

    #[test]
    fn test_header_is_attached() {
        let id = RequestId::new();
        let request = reqwest::Client::new()
            .get("http://localhost/api/health")
            .with_request_id(&id)
            .build()
            .unwrap();

        let header = request.headers().get(REQUEST_ID_HEADER).unwrap();
        assert_eq!(header.to_str().unwrap(), id.as_str());
    }
}
