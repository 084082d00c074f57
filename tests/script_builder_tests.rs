use rn_upgrade_helper::helpers::script_builder;
use crate::fixtures;

#[test]
fn form_fill_script_embeds_request_values_as_json_literals() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let script = script_builder::build_form_fill_script(&request);

    assert!(script.contains(r#"input.value = "0.70.14";"#));
    assert!(script.contains(r#"input.value = "0.74.0";"#));
    assert!(script.contains(r#"input.value = "com.example.app";"#));
    assert!(script.contains(r#"input.value = "ExampleApp";"#));
    assert!(script.contains("dispatchEvent(new Event('input', { bubbles: true }))"));
    assert!(script.contains("dispatchEvent(new Event('change', { bubbles: true }))"));
}

#[test]
fn form_fill_script_preserves_rule_precedence() {
    let request = fixtures::upgrade_request("0.70.14", "0.74.0");
    let script = script_builder::build_form_fill_script(&request);

    let current = script.find(r#"label.includes("current")"#).expect("current rule");
    let upgrade = script.find(r#"label.includes("upgrade")"#).expect("upgrade rule");
    let app_name = script.find(r#"label.includes("app name")"#).expect("app name rule");
    let package = script.find(r#"label.includes("package")"#).expect("package rule");

    assert!(current < upgrade);
    assert!(upgrade < app_name);
    assert!(app_name < package);
}

#[test]
fn form_fill_script_escapes_hostile_values() {
    let mut request = fixtures::upgrade_request("0.70.14", "0.74.0");
    request.project_name = "My \"App\"\n</script>".to_string();

    let script = script_builder::build_form_fill_script(&request);

    // The raw quote sequence must not appear unescaped.
    assert!(!script.contains("input.value = \"My \"App\""));
    assert!(script.contains(r#"My \"App\""#));
}

#[test]
fn submit_script_probes_type_then_visible_text() {
    let script = script_builder::build_submit_click_script();

    assert!(script.contains(r#"button[type="submit"]"#));
    assert!(script.contains("Show me how to upgrade"));
    assert!(script.contains("Generate"));
    assert!(script.contains("Update"));
    assert!(script.contains("return false;"));
}
