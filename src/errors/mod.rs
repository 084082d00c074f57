use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UpgradeHelperError {
    // Input errors
    ValidationError {
        field: String,
        reason: String,
    },

    // Configuration errors
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Browser session errors
    BrowserError {
        stage: String,
        reason: String,
    },
    NavigationError {
        url: String,
        reason: String,
    },
    WaitTimeout {
        selector: String,
        timeout_secs: u64,
    },

    // Extraction errors
    ExtractionError {
        stage: String,
        reason: String,
    },

    // Protocol errors
    ProtocolError {
        reason: String,
    },

    // Network errors
    NetworkError {
        operation: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl UpgradeHelperError {
    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn browser_error(stage: &str, reason: &str) -> Self {
        Self::BrowserError {
            stage: stage.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn navigation_error(url: &str, reason: &str) -> Self {
        Self::NavigationError {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn wait_timeout(selector: &str, timeout_secs: u64) -> Self {
        Self::WaitTimeout {
            selector: selector.to_string(),
            timeout_secs,
        }
    }

    pub fn extraction_error(stage: &str, reason: &str) -> Self {
        Self::ExtractionError {
            stage: stage.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn protocol_error(reason: &str) -> Self {
        Self::ProtocolError {
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::NetworkError { .. } => true,
            Self::NavigationError { .. } => true,
            Self::WaitTimeout { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::BrowserError { .. } => false,
            Self::ExtractionError { .. } => false,
            Self::ProtocolError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationError { field, reason } => {
                format!("Invalid input for '{}': {}", field, reason)
            }
            Self::ConfigurationError { message, suggestion } => {
                let mut msg = format!("Configuration error: {}", message);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::BrowserError { stage, reason } => {
                format!("Browser error during {}: {}\n💡 Check that Chrome or Chromium is installed and launchable", stage, reason)
            }
            Self::NavigationError { url, reason } => {
                format!("Failed to load '{}': {}\n💡 Check your internet connection and try again", url, reason)
            }
            Self::WaitTimeout { selector, timeout_secs } => {
                format!("Timed out after {}s waiting for '{}'\n💡 The upgrade-helper page layout may have changed", timeout_secs, selector)
            }
            Self::ExtractionError { stage, reason } => {
                format!("Extraction failed during {}: {}", stage, reason)
            }
            Self::ProtocolError { reason } => {
                format!("Protocol error: {}", reason)
            }
            Self::NetworkError { operation, reason } => {
                format!("Network error during {}: {}\n💡 Check your internet connection and try again", operation, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for UpgradeHelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for UpgradeHelperError {}

/// Result type alias for upgrade-helper operations
pub type UpgradeHelperResult<T> = Result<T, UpgradeHelperError>;

/// Convert from standard library errors
impl From<std::io::Error> for UpgradeHelperError {
    fn from(error: std::io::Error) -> Self {
        UpgradeHelperError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for UpgradeHelperError {
    fn from(error: serde_json::Error) -> Self {
        UpgradeHelperError::ProtocolError {
            reason: format!("JSON error at line {}: {}", error.line(), error),
        }
    }
}

impl From<toml::de::Error> for UpgradeHelperError {
    fn from(error: toml::de::Error) -> Self {
        UpgradeHelperError::ConfigurationError {
            message: error.message().to_string(),
            suggestion: None,
        }
    }
}

impl From<reqwest::Error> for UpgradeHelperError {
    fn from(error: reqwest::Error) -> Self {
        UpgradeHelperError::NetworkError {
            operation: "HTTP request".to_string(),
            reason: error.to_string(),
        }
    }
}

/// The browser automation crate surfaces everything as `anyhow::Error`.
impl From<anyhow::Error> for UpgradeHelperError {
    fn from(error: anyhow::Error) -> Self {
        UpgradeHelperError::BrowserError {
            stage: "browser session".to_string(),
            reason: error.to_string(),
        }
    }
}
