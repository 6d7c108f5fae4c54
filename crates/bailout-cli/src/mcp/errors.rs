//! Error handling utilities for MCP server

use bailout_core::BailoutError;
use log::debug;
use rmcp::ErrorData;

/// Converts a coordinator error to an MCP error without revealing which part
/// of a plan/secret pair was wrong, or any storage detail.
pub fn to_mcp_error(operation: &str, error: &BailoutError) -> ErrorData {
    debug!("{operation} failed: {error:?}");

    match error {
        e if e.is_not_found() => ErrorData::resource_not_found(e.public_message(), None),
        BailoutError::InvalidInput { .. } => ErrorData::invalid_params(error.public_message(), None),
        _ => ErrorData::internal_error(error.public_message(), None),
    }
}
