// file: src/mcp/http.rs
// description: minimal HTTP JSON-RPC transport wrapping the tool dispatcher
// reference: https://docs.rs/axum

use crate::mcp::dispatcher::{self, ToolDispatcher};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "blog-mcp-server";

const METHOD_NOT_FOUND: i64 = -32601;
const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    #[serde(rename = "jsonrpc")]
    _jsonrpc: Option<String>,
    method: String,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    params: Option<Value>,
}

fn rpc_result(id: Option<Value>, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn rpc_error(id: Option<Value>, code: i64, message: &str) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}

#[derive(Clone)]
struct AppState {
    dispatcher: Arc<ToolDispatcher>,
}

pub fn router(dispatcher: Arc<ToolDispatcher>) -> Router {
    Router::new()
        .route("/", get(info_handler))
        .route("/message", post(message_handler))
        .with_state(AppState { dispatcher })
}

async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": { "message": "/message" }
    }))
}

async fn message_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match rpc_reply_for_body(&state.dispatcher, &body).await {
        Some(reply) => Json(reply).into_response(),
        // Notifications produce no response body.
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Parse a raw request body and route it. The body is taken as bytes so a
/// malformed payload still gets a `-32603` JSON-RPC envelope back rather
/// than a framework-level rejection.
pub async fn rpc_reply_for_body(dispatcher: &ToolDispatcher, body: &[u8]) -> Option<Value> {
    let request: JsonRpcRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => return Some(rpc_error(None, INTERNAL_ERROR, &e.to_string())),
    };

    handle_rpc(dispatcher, request).await
}

/// Core JSON-RPC method routing, shared with tests. Returns `None` for
/// notification methods.
pub async fn handle_rpc(dispatcher: &ToolDispatcher, request: JsonRpcRequest) -> Option<Value> {
    let JsonRpcRequest {
        method, id, params, ..
    } = request;

    match method.as_str() {
        "initialize" => Some(rpc_result(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") }
            }),
        )),

        "notifications/initialized" => None,

        "tools/list" => {
            let tools = serde_json::to_value(dispatcher::descriptors()).unwrap_or(Value::Null);
            Some(rpc_result(id, json!({ "tools": tools })))
        }

        "tools/call" => {
            let params = params.unwrap_or(Value::Null);
            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return Some(rpc_error(id, INTERNAL_ERROR, "missing tool name"));
            };

            let arguments: Map<String, Value> = params
                .get("arguments")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();

            let text = dispatcher.dispatch(name, &arguments).await;
            Some(rpc_result(
                id,
                json!({ "content": [{ "type": "text", "text": text }] }),
            ))
        }

        other => Some(rpc_error(
            id,
            METHOD_NOT_FOUND,
            &format!("Unknown method: {}", other),
        )),
    }
}

/// Serve the JSON-RPC transport until interrupted.
pub async fn serve(dispatcher: Arc<ToolDispatcher>, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("MCP HTTP transport listening on http://{}", addr);
    info!("JSON-RPC endpoint: http://{}/message", addr);

    axum::serve(listener, router(dispatcher).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP transport stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
