use mdx2vast_vale::{Options, resolve, to_render_tree, to_vale_html};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

/// Reads `{ framework?, enableMath? }`; `undefined` and `null` mean defaults.
fn parse_options(config: JsValue) -> Result<Options, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(Options::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

/// Converts MDX source to Vale-ready HTML.
///
/// # Arguments
///
/// * `source` - The MDX source code
/// * `config` - Optional `{ framework, enableMath }` object
#[wasm_bindgen(js_name = toValeAst)]
pub fn to_vale_ast(source: &str, config: JsValue) -> Result<String, JsError> {
    let options = parse_options(config)?;
    to_vale_html(source, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Converts MDX source to the render tree as plain JS objects.
///
/// Each node has a `type` of `element`, `text`, `comment` or `raw`.
#[wasm_bindgen(js_name = renderTree)]
pub fn render_tree(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(config)?;
    let tree = to_render_tree(source, &options).map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&tree)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Returns the id of the framework profile that would govern `source`.
#[wasm_bindgen(js_name = detectFramework)]
pub fn detect_framework(source: &str, framework: Option<String>) -> Option<String> {
    resolve(source, framework.as_deref()).map(|profile| profile.id.to_string())
}
