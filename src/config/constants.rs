use std::time::Duration;
use crate::enums::form_field::FormField;
use crate::enums::selector_strategy::SelectorStrategy;

pub const UPGRADE_HELPER_URL: &str = "https://react-native-community.github.io/upgrade-helper/";

pub const DEFAULT_PACKAGE_NAME: &str = "com.example.app";
pub const DEFAULT_PROJECT_NAME: &str = "ExampleApp";

pub const DEFAULT_FORM_WAIT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RENDER_GRACE_MS: u64 = 2000;
pub const DEFAULT_DIFF_WAIT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_IDLE_BROWSER_TIMEOUT_SECS: u64 = 60;

/// Full-page mode truncates each file's diff content to this many characters.
/// Single-file mode never truncates.
pub const MAX_DIFF_CONTENT_CHARS: usize = 2000;

/// Name given to a nameless item whose class string still marks it as a file
/// block. Items that earn neither a real name nor this marker are dropped.
pub const FILE_DETECTED_SENTINEL: &str = "File detected";
pub const UNKNOWN_FILE_SENTINEL: &str = "Unknown file";

pub const DEFAULT_SUMMARY: &str = "No summary available";

pub const FORM_INPUT_SELECTOR: &str = "input";

/// The page signals a completed render of the diff list with any of these.
pub const DIFF_READY_SELECTOR: &str = r#"[data-testid="file-diff"], .diff-container, .file-diff"#;

pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;
pub const SUBMIT_BUTTON_TEXTS: &[&str] = &["Show me how to upgrade", "Generate", "Update"];

/// Label classification rules for the version form, evaluated in order per
/// input element; the first rule whose needle appears in the label text wins.
/// Later rules only apply when earlier ones fail to match, so the precedence
/// from/current -> to/upgrade -> app name -> package must not be reordered.
pub const FORM_FIELD_RULES: &[(&[&str], FormField)] = &[
    (&["current", "from"], FormField::FromVersion),
    (&["upgrade", "to"], FormField::ToVersion),
    (&["app name"], FormField::ProjectName),
    (&["package"], FormField::PackageName),
];

/// File-item container cascade; the first selector yielding at least one
/// match wins for the whole page.
pub const FILE_ITEM_SELECTORS: &[&str] = &[
    r#"[data-testid="file-diff"]"#,
    ".file-diff",
    ".diff-container",
    ".file-change",
    r#"[class*="file"]"#,
    r#"[class*="diff"]"#,
];

/// Broad attribute-wildcard fallback when the whole cascade comes up empty.
pub const FILE_ITEM_FALLBACK_SELECTOR: &str = r#"[class*="file"], [class*="diff"]"#;

pub const FILE_NAME_SELECTORS: &[&str] = &[
    r#"[data-testid="file-name"]"#,
    ".file-name",
    ".filename",
    "strong",
    "h3, h4, h5",
];

pub const FILE_NAME_ATTRIBUTE: &str = "data-file";

pub const CHANGE_TYPE_SELECTORS: &[&str] = &[
    r#"[data-testid="change-type"]"#,
    ".change-type",
    ".badge",
];

pub const DIFF_CONTENT_SELECTORS: &[&str] = &[
    ".diff-content",
    ".file-diff-content",
    "pre",
    "code",
];

pub const SUMMARY_STRATEGIES: &[SelectorStrategy] = &[
    SelectorStrategy::Css(r#"[data-testid="upgrade-summary"]"#),
    SelectorStrategy::Css(".upgrade-summary"),
    SelectorStrategy::Css(".summary"),
    SelectorStrategy::TextContains { selector: "p", needle: "upgrade" },
    SelectorStrategy::TextContains { selector: "div", needle: "changes" },
];

pub const BREAKING_CHANGE_STRATEGIES: &[SelectorStrategy] = &[
    SelectorStrategy::Css(r#"[data-testid="breaking-change"]"#),
    SelectorStrategy::Css(".breaking-change"),
    SelectorStrategy::TextContains { selector: "*", needle: "breaking" },
    SelectorStrategy::Css(".warning"),
    SelectorStrategy::Css(".alert"),
];

pub fn wait_timeout_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn grace_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
