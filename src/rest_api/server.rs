//! Axum HTTP server for the table endpoints

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::model::Skater;
use crate::observability::Logger;

use super::config::ServerConfig;
use super::errors::RestError;
use super::handler::TableHandler;
use super::parser::parse_query_options;
use super::request::DeleteRequest;
use super::response::{DeleteResponse, ListResponse, SingleResponse};

/// HTTP server state
pub struct RestServer<H: TableHandler> {
    handler: Arc<H>,
    config: ServerConfig,
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

impl<H: TableHandler + 'static> RestServer<H> {
    pub fn new(handler: H, config: ServerConfig) -> Self {
        Self {
            handler: Arc::new(handler),
            config,
        }
    }

    /// Build the Axum router.
    ///
    /// CORS is permissive: the consumer is a local table UI served from
    /// another origin.
    pub fn router(self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let state = Arc::new(self);

        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/api/v1/skaters",
                get(list_handler::<H>).delete(delete_handler::<H>),
            )
            .route("/api/v1/skaters/:id", get(get_handler::<H>))
            .with_state(state)
            .layer(cors)
    }

    /// Start the HTTP server
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        Logger::info(
            "server_started",
            &[
                ("addr", &addr.to_string()),
                ("latency_ms", &self.config.latency_ms.to_string()),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }

    /// Simulated network latency before each response. Cosmetic only.
    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

/// Health check handler
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List records handler
async fn list_handler<H: TableHandler + 'static>(
    State(server): State<ServerState<H>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Skater>>, RestError> {
    server.simulate_latency().await;

    let options = parse_query_options(&params)?;
    let response = server.handler.list(options)?;

    Logger::info(
        "query_served",
        &[
            ("matched", &response.count.to_string()),
            ("returned", &response.data.len().to_string()),
        ],
    );

    Ok(Json(response))
}

/// Get single record handler
async fn get_handler<H: TableHandler + 'static>(
    State(server): State<ServerState<H>>,
    Path(id): Path<String>,
) -> Result<Json<SingleResponse<Skater>>, RestError> {
    server.simulate_latency().await;

    let response = server.handler.get(&id)?;
    Ok(Json(response))
}

/// Bulk delete handler
async fn delete_handler<H: TableHandler + 'static>(
    State(server): State<ServerState<H>>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, RestError> {
    server.simulate_latency().await;

    let response = server.handler.delete(&request.ids)?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest_api::handler::RosterHandler;
    use crate::store::{DemoDeleter, Roster};

    #[test]
    fn test_router_builds() {
        let handler = RosterHandler::new(Roster::generate(10, Some(2)), DemoDeleter::new());
        let server = RestServer::new(handler, ServerConfig::default());
        let _router = server.router();
    }
}
