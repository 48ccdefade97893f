//! Common test utilities and harness for todo-web integration tests.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_web::{router, SessionStore};

/// Cookie name used by the harness.
pub const COOKIE: &str = "todo_session";

/// Test harness owning one router and its session store.
pub struct TestApp {
    /// Router under test
    pub router: Router,
    /// Store shared by every client of this app
    pub store: SessionStore,
}

impl TestApp {
    /// Creates an app with a fresh store and a long idle timeout.
    pub fn new() -> Self {
        let store = SessionStore::new(Duration::from_secs(3600));
        Self {
            router: router(store.clone(), COOKIE),
            store,
        }
    }

    /// A browser-like client with its own cookie jar.
    pub fn client(&self) -> TestClient {
        TestClient {
            router: self.router.clone(),
            cookie: None,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// A client that remembers the session cookie between requests.
#[derive(Clone)]
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

/// What a request produced.
#[derive(Debug)]
pub struct TestResponse {
    /// Response status
    pub status: StatusCode,
    /// `Location` header, for redirects
    pub location: Option<String>,
    /// `Set-Cookie` header, if a session was issued
    pub set_cookie: Option<String>,
    /// Response body as text
    pub body: String,
}

impl TestClient {
    /// The `name=value` pair currently held, if any.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Replace the held cookie with an arbitrary `name=value` pair.
    pub fn set_cookie(&mut self, pair: impl Into<String>) {
        self.cookie = Some(pair.into());
    }

    /// Forget the session cookie, as a fresh browser would.
    pub fn clear_cookie(&mut self) {
        self.cookie = None;
    }

    /// Sends a GET request.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self
            .builder("GET", path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Sends a form-encoded POST request.
    pub async fn post(&mut self, path: &str, form: &[(&str, &str)]) -> TestResponse {
        let request = self
            .builder("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(form)))
            .unwrap();
        self.send(request).await
    }

    /// Follows a redirect response with a GET.
    pub async fn follow(&mut self, response: &TestResponse) -> TestResponse {
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
        let location = response.location.clone().expect("redirect has a location");
        self.get(&location).await
    }

    fn builder(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let (parts, body) = response.into_parts();
        let status = parts.status;
        let location = header_text(&parts.headers, header::LOCATION);
        let set_cookie = header_text(&parts.headers, header::SET_COOKIE);

        if let Some(set_cookie) = &set_cookie {
            let pair = set_cookie.split(';').next().unwrap().trim().to_string();
            self.cookie = Some(pair);
        }

        let bytes = body.collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            location,
            set_cookie,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

fn header_text(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|value| value.to_str().unwrap().to_string())
}

/// Encodes pairs as `application/x-www-form-urlencoded`.
pub fn encode_form(form: &[(&str, &str)]) -> String {
    form.iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(text: &str) -> String {
    let mut out = String::new();
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Creates a list and asserts the redirect.
pub async fn create_list(client: &mut TestClient, name: &str) {
    let response = client.post("/lists", &[("list_name", name)]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
    assert_eq!(response.location.as_deref(), Some("/lists"));
}

/// Adds a todo to the list at `index` and asserts the redirect.
pub async fn add_todo(client: &mut TestClient, index: usize, name: &str) {
    let response = client
        .post(&format!("/lists/{index}/todos"), &[("todo", name)])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
}

/// Counts non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
