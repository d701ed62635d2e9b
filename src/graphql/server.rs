//! HTTP transport: mounts the schema on an axum router.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{EmailqlConfig, GraphqlSettings, ServerSettings};
use crate::error::{EmailqlError, Result};

use super::EmailqlSchema;

#[derive(Clone)]
pub struct AppState {
    pub schema: EmailqlSchema,
    pub endpoint: Arc<str>,
}

/// Router with `POST <path>` for execution and, when enabled, `GET <path>`
/// for the GraphiQL page.
pub fn router(schema: EmailqlSchema, settings: &GraphqlSettings) -> Router {
    let state = AppState {
        schema,
        endpoint: Arc::from(settings.path.as_str()),
    };

    let mut route = post(graphql_handler);
    if settings.graphiql {
        route = route.get(graphiql);
    }

    Router::new()
        .route(&settings.path, route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured host and port. Host names are resolved.
pub async fn bind(settings: &ServerSettings) -> Result<TcpListener> {
    TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .map_err(|e| {
            EmailqlError::Server(format!(
                "Failed to bind {}:{}: {}",
                settings.host, settings.port, e
            ))
        })
}

pub async fn run_server(schema: EmailqlSchema, config: &EmailqlConfig) -> Result<()> {
    let app = router(schema, &config.graphql);

    let listener = bind(&config.server).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Listening on {}", local_addr);
    if config.graphql.graphiql {
        tracing::info!("GraphiQL: http://{}{}", local_addr, config.graphql.path);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let response = state.schema.execute(req.into_inner()).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "request finished with errors");
    }
    response.into()
}

/// GraphiQL page, browsers only.
async fn graphiql(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let accepts_html = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        Html(GraphiQLSource::build().endpoint(&state.endpoint).finish()).into_response()
    } else {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}
