use crate::config::constants::{FORM_FIELD_RULES, SUBMIT_BUTTON_SELECTOR, SUBMIT_BUTTON_TEXTS};
use crate::structs::upgrade_request::UpgradeRequest;

/// Assembles the JavaScript evaluated inside the page. The page is a React
/// app, so values are injected through the DOM with synthetic bubbling
/// input/change events rather than keystroke simulation.

fn js_string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Classify every input on the page by nearby label text and fill it. The
/// branch chain is generated from `FORM_FIELD_RULES`, preserving the rule
/// order; an input matching no rule is left untouched, and several inputs
/// matching one rule all get written (last one wins on the page).
pub fn build_form_fill_script(request: &UpgradeRequest) -> String {
    let mut script = String::new();
    script.push_str("(() => {\n");
    script.push_str("  const inputs = document.querySelectorAll('input');\n");
    script.push_str("  let filled = 0;\n");
    script.push_str("  inputs.forEach((input) => {\n");
    script.push_str("    const label = (input.previousElementSibling && input.previousElementSibling.textContent)\n");
    script.push_str("      || (input.parentElement && input.parentElement.textContent)\n");
    script.push_str("      || '';\n");

    for (index, (needles, field)) in FORM_FIELD_RULES.iter().enumerate() {
        let condition = needles
            .iter()
            .map(|needle| format!("label.includes({})", js_string_literal(needle)))
            .collect::<Vec<_>>()
            .join(" || ");

        if index == 0 {
            script.push_str(&format!("    if ({}) {{\n", condition));
        } else {
            script.push_str(&format!("    }} else if ({}) {{\n", condition));
        }
        script.push_str(&format!(
            "      input.value = {};\n",
            js_string_literal(field.value_from(request))
        ));
        script.push_str("      input.dispatchEvent(new Event('input', { bubbles: true }));\n");
        script.push_str("      input.dispatchEvent(new Event('change', { bubbles: true }));\n");
        script.push_str("      filled += 1;\n");
    }
    script.push_str("    }\n");

    script.push_str("  });\n");
    script.push_str("  return filled;\n");
    script.push_str("})()");
    script
}

/// Find a submit-like button and click it. Returns whether anything was
/// clicked; a page without one is not an error.
pub fn build_submit_click_script() -> String {
    let labels = serde_json::json!(SUBMIT_BUTTON_TEXTS).to_string();

    let mut script = String::new();
    script.push_str("(() => {\n");
    script.push_str(&format!(
        "  let button = document.querySelector('{}');\n",
        SUBMIT_BUTTON_SELECTOR
    ));
    script.push_str("  if (!button) {\n");
    script.push_str(&format!("    const labels = {};\n", labels));
    script.push_str("    button = Array.from(document.querySelectorAll('button'))\n");
    script.push_str("      .find((b) => labels.some((t) => (b.textContent || '').includes(t))) || null;\n");
    script.push_str("  }\n");
    script.push_str("  if (!button) {\n");
    script.push_str("    return false;\n");
    script.push_str("  }\n");
    script.push_str("  button.click();\n");
    script.push_str("  return true;\n");
    script.push_str("})()");
    script
}
