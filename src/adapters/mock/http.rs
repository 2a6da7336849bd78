//! Mock HTTP client for testing.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Request body (POST only).
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the body as JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

/// Configured outcome for a request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    /// Shorthand for a JSON response with the given status.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }

    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, ""))
    }
}

/// Mock HTTP client.
///
/// Responses are keyed by method and URL prefix. Each key holds a queue:
/// responses are consumed in order and the last one repeats.
///
/// # Example
///
/// ```ignore
/// use listick::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.push_response("GET", "https://store/doc", MockResponse::status(404));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<(String, String), VecDeque<MockResponse>>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for requests whose URL starts with `url_prefix`.
    pub fn push_response(&self, method: &str, url_prefix: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), url_prefix.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Response for requests matching no configured prefix.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    /// Longest matching prefix wins.
    fn next_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let mut responses = self.responses.lock().unwrap();
        let key = responses
            .keys()
            .filter(|(m, prefix)| m == method && url.starts_with(prefix.as_str()))
            .max_by_key(|(_, prefix)| prefix.len())
            .cloned();

        if let Some(queue) = key.and_then(|k| responses.get_mut(&k)) {
            if queue.len() > 1 {
                return queue.pop_front();
            }
            return queue.front().cloned();
        }
        drop(responses);

        self.default_response.lock().unwrap().clone()
    }

    fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.next_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_consumed_in_order_then_repeats() {
        let client = MockHttpClient::new();
        client.push_response("GET", "https://x/a", MockResponse::status(200));
        client.push_response("GET", "https://x/a", MockResponse::status(404));

        let h = Headers::new();
        assert_eq!(client.get("https://x/a", &h).await.unwrap().status, 200);
        assert_eq!(client.get("https://x/a", &h).await.unwrap().status, 404);
        assert_eq!(client.get("https://x/a?b", &h).await.unwrap().status, 404);
    }

    #[tokio::test]
    async fn test_longest_prefix_and_method_match() {
        let client = MockHttpClient::new();
        client.push_response("GET", "https://x/", MockResponse::status(200));
        client.push_response("GET", "https://x/special", MockResponse::status(418));
        client.push_response("POST", "https://x/special", MockResponse::status(201));

        let h = Headers::new();
        assert_eq!(client.get("https://x/other", &h).await.unwrap().status, 200);
        assert_eq!(client.get("https://x/special/1", &h).await.unwrap().status, 418);
        assert_eq!(
            client.post("https://x/special", "{}", &h).await.unwrap().status,
            201
        );
    }

    #[tokio::test]
    async fn test_unconfigured_and_error_responses() {
        let client = MockHttpClient::new();
        let h = Headers::new();
        assert!(client.get("https://nowhere", &h).await.is_err());

        client.set_default_response(MockResponse::Error(HttpError::Timeout("1s".into())));
        assert_eq!(
            client.get("https://nowhere", &h).await.unwrap_err(),
            HttpError::Timeout("1s".into())
        );
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::status(200));
        client
            .post("https://x/commit", r#"{"a":1}"#, &Headers::new())
            .await
            .unwrap();
        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].json().unwrap()["a"], 1);
        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
