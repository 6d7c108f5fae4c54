//! MCP server implementation for Bailout
//!
//! Exposes plan creation, status and bail submission as Model Context
//! Protocol tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use bailout_core::Coordinator;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{CreatePlan, McpResult, PlanAccess};

/// MCP server for Bailout
#[derive(Clone)]
pub struct BailoutMcpServer {
    coordinator: Arc<Coordinator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BailoutMcpServer {
    /// Create a new Bailout MCP server
    pub fn new(coordinator: Coordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(Arc::clone(&self.coordinator))
    }

    #[tool(
        name = "create_plan",
        description = "Create a plan that participants can secretly bail on. Optional description and num_participants (2 to 5, default 2). Returns one private link per participant; each link contains that participant's secret and must only be shared with them."
    )]
    async fn create_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        self.handlers().create_plan(params).await
    }

    #[tool(
        name = "get_status",
        description = "Show a plan as one participant sees it, identified by plan_id and that participant's secret. Other participants' votes stay hidden until this participant has bailed, or until the plan is cancelled."
    )]
    async fn get_status(&self, params: Parameters<PlanAccess>) -> McpResult {
        self.handlers().get_status(params).await
    }

    #[tool(
        name = "submit_bail",
        description = "Vote to bail on a plan as the participant holding the given secret. The plan is cancelled only when every participant has voted. Votes cannot be withdrawn; submitting again changes nothing."
    )]
    async fn submit_bail(&self, params: Parameters<PlanAccess>) -> McpResult {
        self.handlers().submit_bail(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BailoutMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bailout".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Bailout lets a small group secretly call off a shared plan.

## Core Concepts
- **Plan**: something 2 to 5 people agreed to do
- **Participant**: one member of a plan, identified only by a secret token
- **Bail**: a participant's vote to cancel; it cannot be withdrawn

## Rules
- A plan is cancelled only when every participant has bailed
- A participant who has not bailed cannot see anyone else's vote
- Plans older than seven days are no longer reachable

## Workflow
1. `create_plan` and hand each participant their own link
2. Participants check `get_status` and call `submit_bail` if they want out
3. Once the last participant bails, everyone sees the plan as cancelled"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: BailoutMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Bailout MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
