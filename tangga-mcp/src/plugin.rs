//! Tool plugins and their registry

use std::collections::BTreeMap;
use std::sync::Arc;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use crate::config::ServerConfig;
use crate::error::ToolError;
use crate::sessions::SessionStore;
use tangga_quiz::QuizEngine;

/// Metadata about a tool argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    /// JSON schema type: "string", "number", "integer"
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: false }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: true }
    }
}

/// Metadata for a tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgMeta],
}

impl ToolMeta {
    /// MCP tool descriptor with a JSON schema built from the arguments
    pub fn descriptor(&self) -> JsonValue {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for arg in self.args {
            properties.insert(
                arg.name.to_string(),
                json!({ "type": arg.typ, "description": arg.description }),
            );
            if !arg.optional {
                required.push(arg.name);
            }
        }

        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": {
                "type": "object",
                "properties": properties,
                "required": required
            }
        })
    }
}

/// Everything a tool may read or change while handling a call
pub struct ToolContext {
    pub config: ServerConfig,
    pub engine: QuizEngine,
    pub sessions: SessionStore,
}

impl ToolContext {
    pub fn new(config: ServerConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => QuizEngine::seeded(seed),
            None => QuizEngine::from_entropy(),
        };
        let sessions = SessionStore::with_capacity(config.max_sessions);
        Self {
            config,
            engine,
            sessions,
        }
    }
}

/// A callable tool
pub trait Tool: Send + Sync {
    fn meta(&self) -> ToolMeta;
    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError>;
}

/// Name -> tool lookup
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: BTreeMap::new() }
    }

    pub fn with_tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        let name = tool.meta().name.to_lowercase();
        self.tools.insert(name, Arc::new(tool));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(&name.to_lowercase()).map(|t| t.as_ref())
    }

    pub fn call(&self, name: &str, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        match self.get(name) {
            Some(tool) => tool.call(args, ctx),
            None => {
                let known: Vec<&str> = self.tools.keys().map(|k| k.as_str()).collect();
                Err(ToolError::unknown_tool(name).with_suggestion(format!("Available: {}", known.join(", "))))
            }
        }
    }

    /// Descriptors for `tools/list`, sorted by name
    pub fn descriptors(&self) -> Vec<JsonValue> {
        self.tools.values().map(|t| t.meta().descriptor()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
