//! Cave mode overlay: darkens as the visitor scrolls deeper.

use crate::dom;
use goblin_core::{darkness, gradient_css, scroll_fraction, CaveConfig};
use web_sys as web;

/// Current darkness for this window's scroll position.
pub fn current_darkness(window: &web::Window, cave: &CaveConfig) -> f32 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let (_, viewport_h) = dom::viewport_size(window);
    let document_h = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.scroll_height() as f64)
        .unwrap_or(viewport_h);
    darkness(scroll_fraction(scroll_y, document_h, viewport_h), cave)
}

pub fn apply(overlay: &web::HtmlElement, darkness: f32) {
    let style = overlay.style();
    _ = style.set_property("opacity", &darkness.to_string());
    _ = style.set_property("background", &gradient_css(darkness));
}

pub fn update(overlay: &web::HtmlElement, cave: &CaveConfig) {
    if let Some(window) = web::window() {
        apply(overlay, current_darkness(&window, cave));
    }
}

pub fn mount(overlay: web::HtmlElement, cave: CaveConfig) {
    update(&overlay, &cave);
    let Some(window) = web::window() else {
        return;
    };
    for event in ["scroll", "resize"] {
        let overlay = overlay.clone();
        dom::listen(&window, event, move |_: web::Event| update(&overlay, &cave));
    }
}
