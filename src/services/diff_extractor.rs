use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use crate::config::constants::{
    BREAKING_CHANGE_STRATEGIES, CHANGE_TYPE_SELECTORS, DEFAULT_SUMMARY, DIFF_CONTENT_SELECTORS,
    FILE_DETECTED_SENTINEL, FILE_ITEM_FALLBACK_SELECTOR, FILE_ITEM_SELECTORS, FILE_NAME_ATTRIBUTE,
    FILE_NAME_SELECTORS, MAX_DIFF_CONTENT_CHARS, SUMMARY_STRATEGIES, UNKNOWN_FILE_SENTINEL,
};
use crate::enums::change_type::ChangeType;
use crate::enums::selector_strategy::SelectorStrategy;
use crate::structs::file_change::FileChange;
use crate::structs::file_diff_request::FileDiffRequest;
use crate::structs::file_diff_result::FileDiffResult;
use crate::structs::upgrade_request::UpgradeRequest;
use crate::structs::upgrade_result::UpgradeResult;

static FILE_ITEM_MATCHERS: Lazy<Vec<Selector>> = Lazy::new(|| parse_all(FILE_ITEM_SELECTORS));
static FILE_ITEM_FALLBACK_MATCHER: Lazy<Option<Selector>> =
    Lazy::new(|| Selector::parse(FILE_ITEM_FALLBACK_SELECTOR).ok());
static FILE_NAME_MATCHERS: Lazy<Vec<Selector>> = Lazy::new(|| parse_all(FILE_NAME_SELECTORS));
static CHANGE_TYPE_MATCHERS: Lazy<Vec<Selector>> = Lazy::new(|| parse_all(CHANGE_TYPE_SELECTORS));
static DIFF_CONTENT_MATCHERS: Lazy<Vec<Selector>> = Lazy::new(|| parse_all(DIFF_CONTENT_SELECTORS));

fn parse_all(selectors: &[&str]) -> Vec<Selector> {
    selectors.iter().filter_map(|s| Selector::parse(s).ok()).collect()
}

fn truncate_chars(content: &str, limit: usize) -> String {
    content.chars().take(limit).collect()
}

/// Heuristic extraction over a rendered-HTML snapshot of the upgrade-helper
/// page. Nothing here touches the browser; both modes are pure functions of
/// the snapshot, which is what keeps them testable against fixtures.
pub struct DiffExtractor;

impl DiffExtractor {

    /// Full-page mode: every file-change block on the page, plus summary and
    /// breaking-change notices, plus counts derived from the kept records.
    pub fn extract_full(html: &str, request: &UpgradeRequest, url: &str) -> UpgradeResult {
        let document = Html::parse_document(html);
        let mut file_changes: Vec<FileChange> = Vec::new();

        for item in Self::select_file_items(&document) {
            let file_name = match Self::resolve_file_name(&item) {
                Some(name) => name,
                // Nameless block: mark it as a file when its class string
                // says so, as unidentifiable otherwise.
                None if Self::class_string(&item).contains("file") => {
                    FILE_DETECTED_SENTINEL.to_string()
                }
                None => UNKNOWN_FILE_SENTINEL.to_string(),
            };

            // Records resolving to the unknown-file sentinel are dropped;
            // "File detected" records are kept.
            if file_name == UNKNOWN_FILE_SENTINEL {
                continue;
            }

            let change_type = Self::resolve_change_type(&item);
            let content = Self::resolve_content(&item);
            let has_changes = !content.is_empty();

            file_changes.push(FileChange {
                file_name,
                change_type,
                has_changes,
                content: truncate_chars(&content, MAX_DIFF_CONTENT_CHARS),
            });
        }

        let summary = Self::first_text(&document, SUMMARY_STRATEGIES)
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());
        let breaking_changes = Self::collect_texts(&document, BREAKING_CHANGE_STRATEGIES);

        let total_files = file_changes.len();
        let modified_files = UpgradeResult::count_of(&file_changes, &ChangeType::Modified);
        let added_files = UpgradeResult::count_of(&file_changes, &ChangeType::Added);
        let deleted_files = UpgradeResult::count_of(&file_changes, &ChangeType::Deleted);

        UpgradeResult {
            from_version: request.from_version.clone(),
            to_version: request.to_version.clone(),
            package_name: request.package_name.clone(),
            project_name: request.project_name.clone(),
            url: url.to_string(),
            summary,
            breaking_changes,
            file_changes,
            total_files,
            modified_files,
            added_files,
            deleted_files,
        }
    }

    /// Single-file mode: first block in document order whose resolved name
    /// equals the requested name or ends-with it in either direction.
    /// Nameless blocks never match; a miss is a normal result. Content is
    /// not truncated here.
    pub fn extract_single(html: &str, request: &FileDiffRequest) -> FileDiffResult {
        let document = Html::parse_document(html);

        for item in Self::select_file_items(&document) {
            let Some(name) = Self::resolve_file_name(&item) else {
                continue;
            };

            if Self::names_match(&name, &request.file_name) {
                let change_type = Self::resolve_change_type(&item);
                let diff = Self::resolve_content(&item);
                return FileDiffResult::found(request, name, change_type, diff);
            }
        }

        FileDiffResult::not_found(request)
    }

    fn names_match(candidate: &str, requested: &str) -> bool {
        candidate == requested || candidate.ends_with(requested) || requested.ends_with(candidate)
    }

    /// First cascade selector with at least one match wins for the whole
    /// page; the broad attribute-wildcard fallback runs when all miss.
    fn select_file_items(document: &Html) -> Vec<ElementRef<'_>> {
        for selector in FILE_ITEM_MATCHERS.iter() {
            let items: Vec<ElementRef> = document.select(selector).collect();
            if !items.is_empty() {
                return items;
            }
        }

        match FILE_ITEM_FALLBACK_MATCHER.as_ref() {
            Some(selector) => document.select(selector).collect(),
            None => Vec::new(),
        }
    }

    fn find_first<'a>(item: &ElementRef<'a>, matchers: &[Selector]) -> Option<ElementRef<'a>> {
        for selector in matchers {
            if let Some(found) = item.select(selector).next() {
                return Some(found);
            }
        }
        None
    }

    fn class_string<'a>(item: &ElementRef<'a>) -> &'a str {
        item.value().attr("class").unwrap_or("")
    }

    /// Name of the first sub-element the cascade finds; an empty text falls
    /// through to the data attribute, not to later sub-selectors.
    fn resolve_file_name(item: &ElementRef) -> Option<String> {
        let from_element = Self::find_first(item, &FILE_NAME_MATCHERS)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty());
        if from_element.is_some() {
            return from_element;
        }

        item.value()
            .attr(FILE_NAME_ATTRIBUTE)
            .map(|attr| attr.to_string())
            .filter(|attr| !attr.is_empty())
    }

    fn resolve_change_type(item: &ElementRef) -> ChangeType {
        let badge = Self::find_first(item, &CHANGE_TYPE_MATCHERS)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty());

        let mut change_type = match badge {
            Some(label) => ChangeType::from_label(&label),
            None => ChangeType::Modified,
        };

        let class = Self::class_string(item);
        let text: String = item.text().collect();
        // Added wins when both signals are present; deleted only applies
        // when the added check already failed.
        if class.contains("added") || text.contains('+') {
            change_type = ChangeType::Added;
        } else if class.contains("deleted") || text.contains('-') {
            change_type = ChangeType::Deleted;
        }

        change_type
    }

    /// Diff text of the first content sub-element, falling back to the item
    /// itself; empty text falls back to the inner markup.
    fn resolve_content(item: &ElementRef) -> String {
        let (text, markup) = match Self::find_first(item, &DIFF_CONTENT_MATCHERS) {
            Some(el) => (el.text().collect::<String>(), el.inner_html()),
            None => (item.text().collect::<String>(), item.inner_html()),
        };

        if text.is_empty() {
            markup
        } else {
            text
        }
    }

    /// First non-empty text across a strategy cascade.
    fn first_text(document: &Html, strategies: &[SelectorStrategy]) -> Option<String> {
        for strategy in strategies {
            match strategy {
                SelectorStrategy::Css(css) => {
                    let Ok(selector) = Selector::parse(css) else {
                        continue;
                    };
                    if let Some(el) = document.select(&selector).next() {
                        let text = el.text().collect::<String>().trim().to_string();
                        if !text.is_empty() {
                            return Some(text);
                        }
                    }
                }
                SelectorStrategy::TextContains { selector, needle } => {
                    let Ok(parsed) = Selector::parse(selector) else {
                        continue;
                    };
                    for el in document.select(&parsed) {
                        if Self::own_text(&el).contains(needle) {
                            let text = el.text().collect::<String>().trim().to_string();
                            if !text.is_empty() {
                                return Some(text);
                            }
                        }
                    }
                }
            }
        }
        None
    }

    /// Union of texts across a strategy cascade, deduplicated by exact
    /// string, first-seen order preserved.
    fn collect_texts(document: &Html, strategies: &[SelectorStrategy]) -> Vec<String> {
        let mut collected: Vec<String> = Vec::new();

        for strategy in strategies {
            match strategy {
                SelectorStrategy::Css(css) => {
                    let Ok(selector) = Selector::parse(css) else {
                        continue;
                    };
                    for el in document.select(&selector) {
                        Self::push_unique(&mut collected, &el);
                    }
                }
                SelectorStrategy::TextContains { selector, needle } => {
                    let Ok(parsed) = Selector::parse(selector) else {
                        continue;
                    };
                    for el in document.select(&parsed) {
                        if Self::own_text(&el).contains(needle) {
                            Self::push_unique(&mut collected, &el);
                        }
                    }
                }
            }
        }

        collected
    }

    fn push_unique(collected: &mut Vec<String>, el: &ElementRef) {
        let text = el.text().collect::<String>().trim().to_string();
        if !text.is_empty() && !collected.contains(&text) {
            collected.push(text);
        }
    }

    /// Text of the element's direct text-node children only. Matching
    /// subtree text instead would make every ancestor of a match a match
    /// as well, all the way up to the document element.
    fn own_text(el: &ElementRef) -> String {
        el.children()
            .filter_map(|node| node.value().as_text().map(|t| t.to_string()))
            .collect()
    }
}
