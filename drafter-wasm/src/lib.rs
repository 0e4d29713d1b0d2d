use prompt_drafter::{
    count_values, draft_prompt, extract_placeholders, extract_placeholders_combined,
    format_dynamic, parse_value_list, Bindings, Drafter, PromptParts, SelectOptions,
    SelectionMode,
};
use wasm_bindgen::prelude::*;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| format!("{}", e))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, String> {
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("{}", e))
}

/// Parse wildcard text into a JS array of values
#[wasm_bindgen(js_name = parseValueList)]
pub fn parse_value_list_js(text: &str) -> Result<JsValue, String> {
    to_js(&parse_value_list(text))
}

/// Number of values in wildcard text, for sizing the fixed index widget
#[wasm_bindgen(js_name = countValues)]
pub fn count_values_js(text: &str) -> u32 {
    count_values(text) as u32
}

/// Placeholder names in a prompt, for labelling wildcard inputs
#[wasm_bindgen(js_name = extractPlaceholders)]
pub fn extract_placeholders_js(text: &str) -> Result<JsValue, String> {
    to_js(&extract_placeholders(text))
}

/// Sorted placeholder names across a positive and a negative prompt
#[wasm_bindgen(js_name = extractPlaceholdersCombined)]
pub fn extract_placeholders_combined_js(positive: &str, negative: &str) -> Result<JsValue, String> {
    to_js(&extract_placeholders_combined(positive, negative))
}

/// Format a JS array of strings as `{a|b|c}`
#[wasm_bindgen(js_name = formatDynamic)]
pub fn format_dynamic_js(values: JsValue) -> Result<String, String> {
    let values: Vec<String> = from_js(values)?;
    Ok(format_dynamic(&values))
}

/// Preview a prompt with its prefix, suffix and a `{ name: value }` object
#[wasm_bindgen(js_name = fillPrompt)]
pub fn fill_prompt(text: &str, prefix: &str, suffix: &str, bindings: JsValue) -> Result<String, String> {
    let bindings: Bindings = if bindings.is_undefined() || bindings.is_null() {
        Bindings::new()
    } else {
        from_js(bindings)?
    };
    let parts = PromptParts::new(text).with_prefix(prefix).with_suffix(suffix);
    Ok(draft_prompt(&parts, &bindings))
}

/// Preview one pick from wildcard text
///
/// Sequential mode has no memory across calls here; every preview starts fresh.
#[wasm_bindgen(js_name = previewPick)]
pub fn preview_pick(text: &str, mode: &str, fixed_index: i32, seed: Option<u64>) -> Result<String, String> {
    let mode: SelectionMode = mode.parse().map_err(|e| format!("{}", e))?;
    let mut drafter = match seed {
        Some(s) => Drafter::from_seed(s),
        None => Drafter::from_entropy(),
    };
    let options = SelectOptions::new().with_fixed_index(i64::from(fixed_index));
    Ok(drafter.pick(text, mode, &options))
}
