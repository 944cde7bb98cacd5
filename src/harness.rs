//! Values exported to JavaScript so the page's test harness can inspect them.

use crate::dom;
use goblin_core::Config;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set(obj: &Object, key: &str, value: impl Into<JsValue>) {
    _ = Reflect::set(obj, &JsValue::from_str(key), &value.into());
}

fn group(fields: &[(&str, JsValue)]) -> Object {
    let obj = Object::new();
    for (key, value) in fields {
        set(&obj, key, value.clone());
    }
    obj
}

/// The live configuration as `{ goblin, cave, dodge, counter }`.
#[wasm_bindgen(js_name = goblinConfig)]
pub fn goblin_config() -> JsValue {
    let cfg = Config::default();
    let root = Object::new();
    set(
        &root,
        "goblin",
        group(&[
            ("size", JsValue::from(cfg.goblin.size)),
            ("speed", JsValue::from(cfg.goblin.speed)),
            ("color", JsValue::from(cfg.goblin.color)),
            ("eyeColor", JsValue::from(cfg.goblin.eye_color)),
            ("pupilColor", JsValue::from(cfg.goblin.pupil_color)),
        ]),
    );
    set(
        &root,
        "cave",
        group(&[
            ("maxDarkness", JsValue::from(cfg.cave.max_darkness)),
            ("startDepth", JsValue::from(cfg.cave.start_depth)),
        ]),
    );
    set(
        &root,
        "dodge",
        group(&[
            ("maxDodges", JsValue::from(cfg.dodge.max_dodges)),
            ("dodgeDistance", JsValue::from(cfg.dodge.dodge_distance)),
            ("triggerDistance", JsValue::from(cfg.dodge.trigger_distance)),
        ]),
    );
    set(
        &root,
        "counter",
        group(&[
            ("baseCount", JsValue::from(cfg.counter.base_count as f64)),
            ("dailyVariance", JsValue::from(cfg.counter.daily_variance)),
        ]),
    );
    root.into()
}

#[wasm_bindgen(js_name = seededRandom)]
pub fn seeded_random(seed: f64) -> f64 {
    goblin_core::seeded_random(seed)
}

#[wasm_bindgen(js_name = prefersReducedMotion)]
pub fn prefers_reduced_motion() -> bool {
    dom::prefers_reduced_motion()
}

/// Stop every running animation loop. The page never calls this; tests do.
#[wasm_bindgen(js_name = stopAnimations)]
pub fn stop_animations() {
    crate::cancel_animations();
}
