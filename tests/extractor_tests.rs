use rn_upgrade_helper::config::constants::{
    DEFAULT_SUMMARY, FILE_DETECTED_SENTINEL, MAX_DIFF_CONTENT_CHARS, UNKNOWN_FILE_SENTINEL,
    UPGRADE_HELPER_URL,
};
use rn_upgrade_helper::enums::change_type::ChangeType;
use rn_upgrade_helper::services::diff_extractor::DiffExtractor;
use crate::fixtures;

#[test]
fn full_page_extracts_every_named_file() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let result = DiffExtractor::extract_full(&fixtures::full_page_html(), &request, UPGRADE_HELPER_URL);

    assert_eq!(result.total_files, 4);
    assert_eq!(result.total_files, result.file_changes.len());

    let names: Vec<&str> = result.file_changes.iter().map(|c| c.file_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["package.json", "android/app/build.gradle", "ios/Podfile", "app.json"]
    );
}

#[test]
fn full_page_echoes_request_fields_and_url() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let result = DiffExtractor::extract_full(&fixtures::full_page_html(), &request, UPGRADE_HELPER_URL);

    assert_eq!(result.from_version, "0.70.14");
    assert_eq!(result.to_version, "0.74.0");
    assert_eq!(result.package_name, "com.example.app");
    assert_eq!(result.project_name, "ExampleApp");
    assert_eq!(result.url, UPGRADE_HELPER_URL);
}

#[test]
fn change_type_buckets_exclude_unrecognized_labels() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let result = DiffExtractor::extract_full(&fixtures::full_page_html(), &request, UPGRADE_HELPER_URL);

    assert_eq!(result.added_files, 1);
    assert_eq!(result.deleted_files, 1);
    assert_eq!(result.modified_files, 1);
    // The "renamed" record counts toward the total only.
    assert!(result.modified_files + result.added_files + result.deleted_files < result.total_files);

    let renamed = result
        .file_changes
        .iter()
        .find(|c| c.file_name == "app.json")
        .expect("renamed record is kept");
    assert_eq!(renamed.change_type, ChangeType::Other("renamed".to_string()));
}

#[test]
fn added_class_takes_precedence_over_minus_in_text() {
    let html = r#"<html><body>
      <div data-testid="file-diff" class="file-diff added">
        <strong class="file-name">metro.config.js</strong>
        <pre class="diff-content">- old resolver entry</pre>
      </div>
    </body></html>"#;

    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let result = DiffExtractor::extract_full(html, &request, UPGRADE_HELPER_URL);

    assert_eq!(result.file_changes[0].change_type, ChangeType::Added);
}

#[test]
fn nameless_blocks_are_kept_only_when_class_marks_a_file() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let result = DiffExtractor::extract_full(&fixtures::unnamed_blocks_html(), &request, UPGRADE_HELPER_URL);

    assert_eq!(result.total_files, 1);
    assert_eq!(result.file_changes[0].file_name, FILE_DETECTED_SENTINEL);

    for change in &result.file_changes {
        assert_ne!(change.file_name, UNKNOWN_FILE_SENTINEL);
    }
}

#[test]
fn full_page_content_is_truncated() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let result = DiffExtractor::extract_full(
        &fixtures::oversized_content_html(MAX_DIFF_CONTENT_CHARS + 500),
        &request,
        UPGRADE_HELPER_URL,
    );

    let change = &result.file_changes[0];
    assert_eq!(change.content.chars().count(), MAX_DIFF_CONTENT_CHARS);
    assert!(change.has_changes);
}

#[test]
fn summary_defaults_when_no_strategy_matches() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let result = DiffExtractor::extract_full(&fixtures::bare_html(), &request, UPGRADE_HELPER_URL);

    assert_eq!(result.summary, DEFAULT_SUMMARY);
    assert!(result.breaking_changes.is_empty());
}

#[test]
fn breaking_changes_are_deduplicated_in_first_seen_order() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let result = DiffExtractor::extract_full(&fixtures::full_page_html(), &request, UPGRADE_HELPER_URL);

    assert_eq!(
        result.breaking_changes,
        vec![
            "Minimum iOS version raised",
            "Some breaking APIs were removed",
            "Hermes is now the default engine",
        ]
    );

    let mut deduped = result.breaking_changes.clone();
    deduped.dedup();
    assert_eq!(deduped, result.breaking_changes);
}

#[test]
fn single_file_matches_exact_name() {
    let request = fixtures::file_diff_request("0.70.0", "0.71.0", "package.json");
    let result = DiffExtractor::extract_single(&fixtures::multi_file_html(), &request);

    assert!(result.found);
    assert_eq!(result.file_name, "package.json");
    assert_eq!(result.diff.as_deref(), Some("bumped react dependencies"));
}

#[test]
fn single_file_matches_by_suffix_in_document_order() {
    let request = fixtures::file_diff_request("0.70.0", "0.71.0", "build.gradle");
    let result = DiffExtractor::extract_single(&fixtures::multi_file_html(), &request);

    assert!(result.found);
    // The requested name is a suffix of the first matching block's name.
    assert_eq!(result.file_name, "android/app/build.gradle");
}

#[test]
fn single_file_miss_is_a_result_not_an_error() {
    let request = fixtures::file_diff_request("0.70.0", "0.71.0", "android/build.gradle");
    let result = DiffExtractor::extract_single(&fixtures::multi_file_html(), &request);

    assert!(!result.found);
    assert_eq!(result.file_name, "android/build.gradle");
    assert!(result.change_type.is_none());
    assert!(result.diff.is_none());

    let message = result.message.expect("miss carries a message");
    assert!(!message.is_empty());
    assert!(message.contains("get_upgrade_info"));
}

#[test]
fn single_file_diff_is_not_truncated() {
    let oversized = MAX_DIFF_CONTENT_CHARS + 500;
    let request = fixtures::file_diff_request("0.70.0", "0.71.0", "huge.txt");
    let result = DiffExtractor::extract_single(&fixtures::oversized_content_html(oversized), &request);

    assert!(result.found);
    assert_eq!(result.diff.expect("diff present").chars().count(), oversized);
}

#[test]
fn single_file_never_matches_nameless_blocks() {
    // Both blocks in this fixture are nameless; even the one kept by
    // full-page mode must not satisfy a lookup.
    let request = fixtures::file_diff_request("0.70.0", "0.71.0", "package.json");
    let result = DiffExtractor::extract_single(&fixtures::unnamed_blocks_html(), &request);

    assert!(!result.found);
}
