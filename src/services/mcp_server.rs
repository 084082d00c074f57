use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use uuid::Uuid;
use crate::config::constants::{DEFAULT_PACKAGE_NAME, DEFAULT_PROJECT_NAME};
use crate::errors::{UpgradeHelperError, UpgradeHelperResult};
use crate::services::upgrade_scraper::UpgradeScraper;
use crate::structs::file_diff_request::FileDiffRequest;
use crate::structs::protocol::call_tool_result::CallToolResult;
use crate::structs::protocol::initialize_result::InitializeResult;
use crate::structs::protocol::json_rpc_error::{JsonRpcError, INTERNAL_ERROR, METHOD_NOT_FOUND, PARSE_ERROR};
use crate::structs::protocol::json_rpc_request::JsonRpcRequest;
use crate::structs::protocol::json_rpc_response::JsonRpcResponse;
use crate::structs::protocol::server_info::ServerInfo;
use crate::structs::protocol::tool_definition::ToolDefinition;
use crate::structs::upgrade_request::UpgradeRequest;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "react-native-upgrade-helper";

pub const GET_UPGRADE_INFO: &str = "get_upgrade_info";
pub const GET_FILE_DIFF: &str = "get_file_diff";

/// Line-oriented JSON-RPC dispatcher on stdin/stdout. Stdout carries
/// protocol frames exclusively; diagnostics go to stderr via the logger.
/// Every caught error becomes a uniform "Error: "-prefixed text envelope.
pub struct McpServer {
    scraper: UpgradeScraper,
}

impl McpServer {
    pub fn new(scraper: UpgradeScraper) -> Self {
        Self { scraper }
    }

    pub async fn run(&self) -> UpgradeHelperResult<()> {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();
        let mut stdout = tokio::io::stdout();

        log::info!("🚀 React Native Upgrade Helper MCP server running on stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(&line).await {
                let frame = serde_json::to_string(&response)?;
                stdout.write_all(frame.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        log::info!("👋 Input closed, shutting down");
        Ok(())
    }

    /// Handle one frame. Notifications yield no response.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    JsonRpcError::new(PARSE_ERROR, &format!("Parse error: {}", e)),
                ));
            }
        };

        if request.is_notification() {
            log::debug!("📨 Notification: {}", request.method);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize_result()),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                serde_json::json!({ "tools": Self::tool_definitions() }),
            ),
            "tools/call" => {
                let result = self.dispatch_tool_call(request.params.as_ref()).await;
                match serde_json::to_value(&result) {
                    Ok(value) => JsonRpcResponse::success(id, value),
                    Err(e) => JsonRpcResponse::failure(id, JsonRpcError::new(INTERNAL_ERROR, &e.to_string())),
                }
            }
            other => JsonRpcResponse::failure(
                id,
                JsonRpcError::new(METHOD_NOT_FOUND, &format!("Method not found: {}", other)),
            ),
        };

        Some(response)
    }

    fn initialize_result(&self) -> Value {
        serde_json::to_value(InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: serde_json::json!({ "tools": {} }),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
        .unwrap_or(Value::Null)
    }

    /// Validate inputs, run the tool, wrap the outcome. Validation failures
    /// never reach the scraper, so no browser session is opened for them.
    async fn dispatch_tool_call(&self, params: Option<&Value>) -> CallToolResult {
        let call_id = Uuid::new_v4();

        let Some(params) = params else {
            return CallToolResult::error("Error: Missing tool call parameters".to_string());
        };

        let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
        let no_arguments = serde_json::json!({});
        let arguments = params.get("arguments").unwrap_or(&no_arguments);

        log::info!("🛠️ [{}] Tool call: {}", call_id, name);

        let outcome = match name {
            GET_UPGRADE_INFO => self.run_upgrade_info(arguments).await,
            GET_FILE_DIFF => self.run_file_diff(arguments).await,
            other => Err(UpgradeHelperError::validation_error(
                "name",
                &format!("unknown tool '{}'", other),
            )),
        };

        match outcome {
            Ok(payload) => {
                log::info!("✅ [{}] Tool call completed", call_id);
                CallToolResult::success(payload)
            }
            Err(e) => {
                log::error!("❌ [{}] {}", call_id, e.technical_details());
                CallToolResult::error(format!("Error: {}", e))
            }
        }
    }

    async fn run_upgrade_info(&self, arguments: &Value) -> UpgradeHelperResult<String> {
        let request = Self::parse_upgrade_request(arguments)?;
        let result = self.scraper.get_upgrade_info(&request).await?;
        Ok(serde_json::to_string_pretty(&result)?)
    }

    async fn run_file_diff(&self, arguments: &Value) -> UpgradeHelperResult<String> {
        let request = FileDiffRequest {
            upgrade: Self::parse_upgrade_request(arguments)?,
            file_name: Self::require_string(arguments, "fileName")?,
        };
        let result = self.scraper.get_file_diff(&request).await?;
        Ok(serde_json::to_string_pretty(&result)?)
    }

    fn parse_upgrade_request(arguments: &Value) -> UpgradeHelperResult<UpgradeRequest> {
        Ok(UpgradeRequest {
            from_version: Self::require_string(arguments, "fromVersion")?,
            to_version: Self::require_string(arguments, "toVersion")?,
            package_name: Self::optional_string(arguments, "packageName")
                .unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string()),
            project_name: Self::optional_string(arguments, "projectName")
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        })
    }

    fn require_string(arguments: &Value, field: &str) -> UpgradeHelperResult<String> {
        match arguments.get(field) {
            Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.clone()),
            Some(Value::String(_)) => Err(UpgradeHelperError::validation_error(field, "must not be empty")),
            Some(_) => Err(UpgradeHelperError::validation_error(field, "must be a string")),
            None => Err(UpgradeHelperError::validation_error(field, "is required")),
        }
    }

    fn optional_string(arguments: &Value, field: &str) -> Option<String> {
        arguments
            .get(field)
            .and_then(Value::as_str)
            .map(|s| s.to_string())
            .filter(|s| !s.trim().is_empty())
    }

    fn tool_definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: GET_UPGRADE_INFO.to_string(),
                title: "Get React Native Upgrade Information".to_string(),
                description: "Extract React Native upgrade information between two versions".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "fromVersion": {
                            "type": "string",
                            "description": "Source React Native version (e.g., \"0.70.14\")"
                        },
                        "toVersion": {
                            "type": "string",
                            "description": "Target React Native version (e.g., \"0.74.0\")"
                        },
                        "packageName": {
                            "type": "string",
                            "description": "Package name for the project",
                            "default": DEFAULT_PACKAGE_NAME
                        },
                        "projectName": {
                            "type": "string",
                            "description": "Project name",
                            "default": DEFAULT_PROJECT_NAME
                        }
                    },
                    "required": ["fromVersion", "toVersion"]
                }),
            },
            ToolDefinition {
                name: GET_FILE_DIFF.to_string(),
                title: "Get Specific File Diff".to_string(),
                description: "Get specific file differences for React Native upgrade".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "fromVersion": {
                            "type": "string",
                            "description": "Source React Native version"
                        },
                        "toVersion": {
                            "type": "string",
                            "description": "Target React Native version"
                        },
                        "fileName": {
                            "type": "string",
                            "description": "Specific file to get diff for (e.g., \"package.json\", \"android/build.gradle\")"
                        },
                        "packageName": {
                            "type": "string",
                            "description": "Package name",
                            "default": DEFAULT_PACKAGE_NAME
                        },
                        "projectName": {
                            "type": "string",
                            "description": "Project name",
                            "default": DEFAULT_PROJECT_NAME
                        }
                    },
                    "required": ["fromVersion", "toVersion", "fileName"]
                }),
            },
        ]
    }
}
