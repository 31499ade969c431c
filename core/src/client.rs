//! Stateless HTTP request builder and response parser for the job post API.
//!
//! # Design
//! `JobPostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `JobPostApi` pairs the client with a `Transport` to offer the five
//! operations as single async calls.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::JobPost;

const JSON: &str = "application/json";

/// Bytes escaped when an id becomes a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Synchronous, stateless client for the job post API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct JobPostClient {
    base_url: String,
}

impl JobPostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_job_posts(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/job-posts".to_string(), None)
    }

    pub fn build_get_job_post(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, item_path(id), None)
    }

    pub fn build_create_job_post(&self, input: &JobPost) -> Result<HttpRequest, ApiError> {
        let body = to_body(input)?;
        Ok(self.request(HttpMethod::Post, "/job-posts".to_string(), Some(body)))
    }

    pub fn build_update_job_post(&self, id: &str, input: &JobPost) -> Result<HttpRequest, ApiError> {
        let body = to_body(input)?;
        Ok(self.request(HttpMethod::Put, item_path(id), Some(body)))
    }

    pub fn build_delete_job_post(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, item_path(id), None)
    }

    pub fn parse_list_job_posts(&self, response: HttpResponse) -> Result<Vec<JobPost>, ApiError> {
        check_status(&response)?;
        from_body(&response)
    }

    pub fn parse_get_job_post(&self, response: HttpResponse) -> Result<JobPost, ApiError> {
        check_status(&response)?;
        from_body(&response)
    }

    pub fn parse_create_job_post(&self, response: HttpResponse) -> Result<JobPost, ApiError> {
        check_status(&response)?;
        from_body(&response)
    }

    pub fn parse_update_job_post(&self, response: HttpResponse) -> Result<JobPost, ApiError> {
        check_status(&response)?;
        from_body(&response)
    }

    /// The delete body is informational only and is not decoded.
    pub fn parse_delete_job_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("accept".to_string(), JSON.to_string())];
        if body.is_some() {
            headers.push(("content-type".to_string(), JSON.to_string()));
        }
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }
}

/// Ids are opaque, so reserved characters must not leak into the URL.
fn item_path(id: &str) -> String {
    format!("/job-posts/{}", utf8_percent_encode(id, SEGMENT))
}

fn to_body(input: &JobPost) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
///
/// The message comes from the body's `error` field when the body is a JSON
/// object carrying one, otherwise from the status code.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP error! status: {}", response.status));
    if response.status == 404 {
        return Err(ApiError::NotFound { message });
    }
    Err(ApiError::HttpError {
        status: response.status,
        message,
    })
}

/// The five job post operations as async round trips over a `Transport`.
///
/// One attempt per call. Failures are returned to the caller, which is
/// solely responsible for surfacing them.
pub struct JobPostApi<T> {
    client: JobPostClient,
    transport: T,
}

impl<T: Transport> JobPostApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: JobPostClient::new(base_url),
            transport,
        }
    }

    pub fn client(&self) -> &JobPostClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_all(&self) -> Result<Vec<JobPost>, ApiError> {
        let response = self.send(self.client.build_list_job_posts()).await?;
        self.client.parse_list_job_posts(response)
    }

    pub async fn get_one(&self, id: &str) -> Result<JobPost, ApiError> {
        let response = self.send(self.client.build_get_job_post(id)).await?;
        self.client.parse_get_job_post(response)
    }

    pub async fn create(&self, data: &JobPost) -> Result<JobPost, ApiError> {
        let response = self.send(self.client.build_create_job_post(data)?).await?;
        self.client.parse_create_job_post(response)
    }

    pub async fn update(&self, id: &str, data: &JobPost) -> Result<JobPost, ApiError> {
        let response = self.send(self.client.build_update_job_post(id, data)?).await?;
        self.client.parse_update_job_post(response)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_job_post(id)).await?;
        self.client.parse_delete_job_post(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        match self.transport.execute(request).await {
            Ok(response) => {
                debug!(method, path = %path, status = response.status, "api request completed");
                Ok(response)
            }
            Err(e) => {
                warn!(method, path = %path, error = %e, "api request failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Company, Language, Requirement};

    fn client() -> JobPostClient {
        JobPostClient::new("http://localhost:5000/api")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn sample() -> JobPost {
        JobPost {
            id: "abc".to_string(),
            title: "Rust Engineer".to_string(),
            deadline: "2024-12-31T23:59:59".to_string(),
            description: "Build things".to_string(),
            company: Company {
                name: "Acme".to_string(),
                benefits: vec!["Remote".to_string()],
                ..Company::default()
            },
            requirements: vec![Requirement { name: "BSc".to_string() }],
            languages: vec![Language::new("Rust", "Advanced")],
            ..JobPost::default()
        }
    }

    #[test]
    fn build_list_job_posts_produces_correct_request() {
        let req = client().build_list_job_posts();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/api/job-posts");
        assert!(req.body.is_none());
        assert_eq!(req.headers, vec![("accept".to_string(), "application/json".to_string())]);
    }

    #[test]
    fn build_get_job_post_produces_correct_request() {
        let req = client().build_get_job_post("abc");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/api/job-posts/abc");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_job_post_produces_correct_request() {
        let req = client().build_create_job_post(&sample()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/api/job-posts");
        assert!(req
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Rust Engineer");
        assert_eq!(body["company"]["benefits"][0], "Remote");
        assert_eq!(body["languages"][0]["level"], "Advanced");
    }

    #[test]
    fn build_update_job_post_produces_correct_request() {
        let req = client().build_update_job_post("abc", &sample()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:5000/api/job-posts/abc");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_delete_job_post_produces_correct_request() {
        let req = client().build_delete_job_post("abc");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:5000/api/job-posts/abc");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_job_posts_success() {
        let body = serde_json::to_string(&vec![sample()]).unwrap();
        let posts = client().parse_list_job_posts(response(200, &body)).unwrap();
        assert_eq!(posts, vec![sample()]);
    }

    #[test]
    fn parse_get_job_post_not_found_uses_error_field() {
        let err = client()
            .parse_get_job_post(response(404, r#"{"error":"Job post not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.to_string(), "Job post not found");
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        let body = serde_json::to_string(&sample()).unwrap();
        assert!(client().parse_create_job_post(response(201, &body)).is_ok());
        assert!(client().parse_create_job_post(response(200, &body)).is_ok());
    }

    #[test]
    fn error_without_json_body_gets_generic_message() {
        let err = client()
            .parse_create_job_post(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn error_json_without_error_field_gets_generic_message() {
        let err = client()
            .parse_update_job_post(response(400, r#"{"detail":"nope"}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 400");
    }

    #[test]
    fn parse_delete_ignores_body() {
        assert!(client()
            .parse_delete_job_post(response(200, r#"{"message":"Job post deleted successfully"}"#))
            .is_ok());
        assert!(client().parse_delete_job_post(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_not_found() {
        let err = client().parse_delete_job_post(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn ids_are_escaped_as_one_path_segment() {
        let client = client();
        assert_eq!(
            client.build_get_job_post("q?x=1").path,
            "http://localhost:5000/api/job-posts/q%3Fx=1"
        );
        assert_eq!(
            client.build_update_job_post("a/b c#d", &sample()).unwrap().path,
            "http://localhost:5000/api/job-posts/a%2Fb%20c%23d"
        );
        assert_eq!(
            client.build_delete_job_post("50%").path,
            "http://localhost:5000/api/job-posts/50%25"
        );
        // uuids pass through untouched
        let id = "0192f0c1-5b7e-7cc3-9d0a-3e1f2a4b5c6d";
        assert_eq!(
            client.build_get_job_post(id).path,
            format!("http://localhost:5000/api/job-posts/{id}")
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = JobPostClient::new("http://localhost:5000/api/");
        let req = client.build_list_job_posts();
        assert_eq!(req.path, "http://localhost:5000/api/job-posts");
    }

    #[test]
    fn parse_list_job_posts_bad_json() {
        let err = client().parse_list_job_posts(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    struct Canned(HttpResponse);

    #[async_trait::async_trait]
    impl Transport for Canned {
        async fn execute(
            &self,
            _request: HttpRequest,
        ) -> Result<HttpResponse, crate::error::TransportError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn get_one_maps_404_to_not_found() {
        let api = JobPostApi::new(
            "http://localhost:5000/api",
            Canned(response(404, r#"{"error":"Job post not found"}"#)),
        );
        let err = api.get_one("missing").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.to_string(), "Job post not found");
    }

    #[tokio::test]
    async fn get_one_decodes_the_post() {
        let body = serde_json::to_string(&sample()).unwrap();
        let api = JobPostApi::new("http://localhost:5000/api", Canned(response(200, &body)));
        assert_eq!(api.get_one("abc").await.unwrap(), sample());
    }
}
