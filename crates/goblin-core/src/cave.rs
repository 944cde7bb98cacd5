//! Cave mode: the deeper you scroll, the darker it gets.

use crate::config::CaveConfig;

/// How far down the page the viewport is, in `[0, 1]`.
///
/// Pages shorter than the viewport have no scroll range; the denominator is
/// clamped to 1 px so they read as "at the top" instead of NaN.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    let range = (document_height - viewport_height).max(1.0);
    let fraction = scroll_y / range;
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Overlay darkness for a scroll fraction.
///
/// Zero up to `start_depth`, then a linear ramp reaching `max_darkness` at the
/// bottom of the page. Never leaves `[0, max_darkness]`.
pub fn darkness(fraction: f32, cave: &CaveConfig) -> f32 {
    if !fraction.is_finite() {
        return 0.0;
    }
    let span = (1.0 - cave.start_depth).max(f32::EPSILON);
    let adjusted = ((fraction - cave.start_depth) / span).max(0.0);
    (adjusted * cave.max_darkness).clamp(0.0, cave.max_darkness)
}

/// Background for the overlay: clear at the top center, fading to `darkness` at the edges.
pub fn gradient_css(darkness: f32) -> String {
    format!(
        "radial-gradient(ellipse at center top, transparent 0%, rgba(0, 0, 0, {}) 50%, rgba(0, 0, 0, {}) 100%)",
        darkness * 0.5,
        darkness
    )
}
