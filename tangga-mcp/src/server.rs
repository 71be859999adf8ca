//! Request dispatch
//!
//! Tool failures are returned as tool results with `isError: true`;
//! only malformed protocol traffic produces JSON-RPC errors.

use serde_json::{json, Value as JsonValue};
use tracing::{debug, warn};
use crate::plugin::{ToolContext, ToolRegistry};
use crate::protocol::{McpError, McpRequest, McpResponse, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "tangga";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Server {
    registry: ToolRegistry,
    ctx: ToolContext,
}

impl Server {
    pub fn new(registry: ToolRegistry, ctx: ToolContext) -> Self {
        Server { registry, ctx }
    }

    /// Handle one input line; `None` means nothing should be written back
    pub fn handle_line(&mut self, line: &str) -> Option<McpResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                return Some(McpResponse::from_result(
                    None,
                    Err(McpError::new(PARSE_ERROR, format!("Parse error: {}", e))),
                ));
            }
        };

        debug!(method = %request.method, "processing");
        let result = self.handle_request(&request);

        // Notifications (no id) get no response
        if request.id.is_none() {
            debug!(method = %request.method, "notification processed");
            return None;
        }

        Some(McpResponse::from_result(request.id, result))
    }

    fn handle_request(&mut self, request: &McpRequest) -> Result<JsonValue, McpError> {
        match request.method.as_str() {
            // Lifecycle
            "initialize" => Ok(handle_initialize(&request.params)),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => Ok(json!({ "tools": self.registry.descriptors() })),
            "tools/call" => self.handle_tool_call(&request.params),

            _ => Err(McpError::new(METHOD_NOT_FOUND, format!("Method not found: {}", request.method))),
        }
    }

    fn handle_tool_call(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params
            .as_ref()
            .ok_or_else(|| McpError::new(INVALID_PARAMS, "Missing params"))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::new(INVALID_PARAMS, "Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));

        match self.registry.call(name, &args, &mut self.ctx) {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!(tool = name, code = %e.code, message = %e.message, "tool call failed");
                let mut text = format!("Error: {}", e.message);
                if let Some(s) = &e.suggestion {
                    text.push_str(&format!(" ({})", s));
                }
                Ok(json!({
                    "content": [{ "type": "text", "text": text }],
                    "error": e,
                    "isError": true
                }))
            }
        }
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> JsonValue {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    tracing::info!(client = client_info, protocol = client_protocol, "client connected");

    json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Metric unit ladder lab: length and mass conversion with a scored quiz"
        },
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "instructions": "Use list_units and ladder to explore the km..mm and kg..mg ladders, convert and compare for conversions, and quiz_start / quiz_answer / quiz_next for practice."
    })
}
