//! Tower session middleware.
//!
//! `SessionLayer` and `SessionService` wrap any inner service with session
//! resolution. The session ID travels in a cookie; handlers receive the
//! resolved [`Session`] through request extensions.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use http::{HeaderMap, HeaderValue, Request};
use tower::{Layer, Service};

use super::store::{Session, SessionId, SessionStore};

/// Tower `Layer` that attaches a [`Session`] to every request.
#[derive(Clone)]
pub struct SessionLayer {
    store: SessionStore,
    cookie_name: Arc<str>,
}

impl SessionLayer {
    /// Create a new session layer backed by `store`, using `cookie_name` for transport.
    pub fn new(store: SessionStore, cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
        }
    }
}

impl<S> Layer<S> for SessionLayer {
    type Service = SessionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionService {
            inner,
            store: self.store.clone(),
            cookie_name: self.cookie_name.clone(),
        }
    }
}

/// Tower `Service` that resolves the session cookie before forwarding requests.
///
/// Inserts a [`Session`] into request extensions. When the request carried
/// no usable session ID, a new session is started and its cookie is set on
/// the response.
#[derive(Clone)]
pub struct SessionService<S> {
    inner: S,
    store: SessionStore,
    cookie_name: Arc<str>,
}

impl<S> Service<Request<Body>> for SessionService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let store = self.store.clone();
        let cookie_name = self.cookie_name.clone();

        Box::pin(async move {
            let requested = session_id_from_headers(req.headers(), &cookie_name);
            let (session, created) = store.load_or_create(requested).await;
            let id = session.id();
            req.extensions_mut().insert::<Session>(session);

            let mut resp = inner
                .call(req)
                .await
                .unwrap_or_else(|infallible| match infallible {})
                .into_response();

            if created {
                match HeaderValue::from_str(&session_cookie(&cookie_name, id)) {
                    Ok(value) => {
                        resp.headers_mut().append(http::header::SET_COOKIE, value);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Could not encode session cookie");
                    }
                }
            }

            Ok(resp)
        })
    }
}

/// Extract the session ID from the `Cookie` headers, if present and well-formed.
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| value.trim_matches('"').parse().ok())
}

/// Build the `Set-Cookie` value for a session.
fn session_cookie(cookie_name: &str, id: SessionId) -> String {
    format!("{cookie_name}={id}; Path=/; HttpOnly; SameSite=Lax")
}
