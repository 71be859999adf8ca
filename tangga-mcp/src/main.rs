//! Tangga MCP Server
//!
//! Line-delimited JSON-RPC over stdio.
//!
//! Tools:
//! - list_units, factor_of: inspect the unit ladders
//! - convert: convert a value between units of one domain
//! - compare: express a value as a count of a familiar object
//! - ladder: staircase layout for drawing a ladder
//! - quiz_start, quiz_problem, quiz_answer, quiz_next, quiz_end: scored quiz sessions

mod config;
mod error;
mod logging;
mod plugin;
mod protocol;
mod render;
mod server;
mod sessions;
mod tools;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::plugin::ToolContext;
use crate::server::{Server, PROTOCOL_VERSION, SERVER_VERSION};

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init() {
        eprintln!("logging disabled: {}", e);
    }

    let config = ServerConfig::from_env();
    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, ?config, "tangga MCP server started");

    let registry = tools::standard_registry();
    info!(tools = registry.len(), "tools registered");
    let mut server = Server::new(registry, ToolContext::new(config));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("server ready, waiting for requests");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("client disconnected (EOF)");
                break;
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        };

        let Some(response) = server.handle_line(&line) else {
            continue;
        };

        let mut payload = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                continue;
            }
        };
        payload.push('\n');

        if let Err(e) = stdout.write_all(payload.as_bytes()).await {
            error!(error = %e, "error writing response");
            break;
        }
        if let Err(e) = stdout.flush().await {
            error!(error = %e, "error flushing stdout");
            break;
        }
    }

    info!("server shutting down");
}
