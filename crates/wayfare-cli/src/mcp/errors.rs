//! Error handling utilities for MCP server

use rmcp::ErrorData;
use wayfare_core::BookingError;

/// Map a booking error to an MCP error.
///
/// Errors the caller can fix by changing the request become invalid params;
/// everything else is internal.
pub fn to_mcp_error(message: &str, error: &BookingError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        BookingError::InvalidInput { .. }
        | BookingError::SlotLocked { .. }
        | BookingError::StepLocked { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
