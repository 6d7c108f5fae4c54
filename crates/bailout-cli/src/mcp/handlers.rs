//! MCP tool handlers implementation

use std::sync::Arc;

use bailout_core::{
    display::{BailSummary, CreateResult},
    params as core, Coordinator,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any core
/// parameter type without adding MCP derives to the core crate.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type CreatePlan = McpParams<core::CreatePlan>;
pub type PlanAccess = McpParams<core::PlanAccess>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    coordinator: Arc<Coordinator>,
}

impl McpHandlers {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }

    pub async fn create_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("create_plan: {:?}", params);

        let created = self
            .coordinator
            .create_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("create_plan", &e))?;

        let result = CreateResult::new(&created, self.coordinator.base_url());
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn get_status(&self, Parameters(params): Parameters<PlanAccess>) -> McpResult {
        debug!("get_status: {:?}", params);

        let view = self
            .coordinator
            .get_status(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("get_status", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            view.to_string(),
        )]))
    }

    pub async fn submit_bail(&self, Parameters(params): Parameters<PlanAccess>) -> McpResult {
        debug!("submit_bail: {:?}", params);

        let result = self
            .coordinator
            .submit_bail(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("submit_bail", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            BailSummary(&result).to_string(),
        )]))
    }
}
