use crate::constants::BANNER;
use wasm_bindgen::JsValue;
use web_sys::console;

/// The console easter egg.
pub fn print() {
    for (text, css) in BANNER {
        console::log_2(&JsValue::from_str(text), &JsValue::from_str(css));
    }
}
