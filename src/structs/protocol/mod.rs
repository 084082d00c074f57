pub mod json_rpc_request;
pub mod json_rpc_response;
pub mod json_rpc_error;
pub mod tool_definition;
pub mod tool_content;
pub mod call_tool_result;
pub mod server_info;
pub mod initialize_result;
