use crate::dom;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// The touch position when exactly one finger is down; pinches and other
/// multi-touch gestures are ignored.
pub fn single_touch_point(ev: &web::TouchEvent) -> Option<Vec2> {
    let touches = ev.touches();
    if touches.length() != 1 {
        return None;
    }
    let t = touches.get(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

pub fn wire_mouse_move(target: &web::EventTarget, mut on_move: impl FnMut(Vec2) + 'static) {
    dom::listen(target, "mousemove", move |ev: web::MouseEvent| {
        on_move(client_point(&ev));
    });
}

pub fn wire_touch_move(target: &web::EventTarget, mut on_move: impl FnMut(Vec2) + 'static) {
    dom::listen(target, "touchmove", move |ev: web::TouchEvent| {
        if let Some(p) = single_touch_point(&ev) {
            on_move(p);
        }
    });
}
