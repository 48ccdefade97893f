//! HTTP server and router.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers::{self, lists, todos};
use crate::session::{SessionLayer, SessionStore};
use crate::Result;

/// Build the application router.
///
/// Every route runs behind the session layer, so handlers can rely on a
/// [`Session`](crate::Session) extension being present.
pub fn router(store: SessionStore, cookie_name: &str) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/lists", get(lists::overview).post(lists::create))
        .route("/lists/new", get(lists::new_form))
        .route("/lists/{index}", get(lists::show).post(lists::update))
        .route("/lists/{index}/edit", get(lists::edit_form))
        .route("/lists/{index}/delete", post(lists::delete))
        .route("/lists/{index}/todos", post(todos::add))
        .route("/lists/{index}/todos/{todo_index}", post(todos::toggle))
        .route(
            "/lists/{index}/todos/{todo_index}/delete",
            post(todos::delete),
        )
        .route("/lists/{index}/complete_all", post(todos::complete_all))
        .fallback(handlers::not_found)
        .layer(SessionLayer::new(store, cookie_name))
        .layer(TraceLayer::new_for_http())
}

/// Todo-list HTTP server
#[derive(Debug)]
pub struct Server {
    config: Config,
    store: SessionStore,
}

impl Server {
    /// Create a new server instance from validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let store = SessionStore::new(config.session.idle_timeout());
        Ok(Self { config, store })
    }

    /// The configuration the server was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The server's session store
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The application router bound to this server's session store
    pub fn router(&self) -> Router {
        router(self.store.clone(), &self.config.session.cookie_name)
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let host = self.config.server.host.as_str();
        let port = self.config.server.port;
        let listener = tokio::net::TcpListener::bind((host, port)).await?;
        tracing::info!(
            address = %listener.local_addr()?,
            idle_timeout_secs = self.store.idle_timeout().as_secs(),
            "Listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
