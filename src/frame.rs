use goblin_core::{CancelToken, FrameStep};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Call `frame` once per display frame until it returns `Done` or `token` is cancelled.
pub fn start_loop(token: CancelToken, mut frame: impl FnMut() -> FrameStep + 'static) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // stop by not scheduling the next frame; the closure is never called again
        if token.is_cancelled() {
            return;
        }
        if frame() == FrameStep::Continue {
            request(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request(&tick);
}
