use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use log::{info, warn};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::auth::TokenAuth;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::middleware::{log_request, require_token};
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::{FileOperations, WorkspaceRoot};

pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    /// Prepares the workspace and binds the listener. Does not serve yet.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let root =
            WorkspaceRoot::open(config.workspace_path()).map_err(|source| ServerError::Workspace {
                path: config.workspace_dir.clone(),
                source,
            })?;
        info!(
            "Workspace directory: {} (resolved: {})",
            config.workspace_dir,
            root.path().display()
        );

        let auth = TokenAuth::new(config.token());
        if !auth.requires_auth() {
            warn!("No secret token configured; tool endpoints are unauthenticated");
        }

        let state = AppState {
            ops: FileOperations::new(Arc::new(root)),
            session_id: config.session_id.clone(),
            workspace_dir: config.workspace_dir.clone(),
        };
        let app = build_router(state, auth, config.enable_cors);

        let addr = config.socket_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        info!("Server bound to {}", addr);
        info!("Filesystem sandbox server started for session: {}", config.session_id);

        Ok(Self { listener, app })
    }

    /// Serves requests until Ctrl-C. Each request runs as its own task.
    pub async fn start(self) -> Result<(), ServerError> {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("Server stopped");
        Ok(())
    }
}

/// Builds the HTTP application around an already-opened workspace.
pub fn build_router(state: AppState, auth: TokenAuth, enable_cors: bool) -> Router {
    let tools = Router::new()
        .route("/tools/read_file", post(routes::read_file))
        .route("/tools/write_file", post(routes::write_file))
        .route("/tools/create_directory", post(routes::create_directory))
        .route("/tools/list_directory", post(routes::list_directory))
        .route("/tools/move_file", post(routes::move_file))
        .route("/tools/get_file_info", post(routes::get_file_info))
        .route("/tools/call", post(routes::call_tool))
        .route("/tools/list", get(routes::list_tools).post(routes::list_tools))
        .route_layer(from_fn_with_state(auth, require_token));

    let app = Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/health", get(routes::health))
        .merge(tools)
        .layer(from_fn(log_request))
        .with_state(state);

    if enable_cors {
        app.layer(CorsLayer::very_permissive())
    } else {
        app
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
