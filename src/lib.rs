#![cfg(target_arch = "wasm32")]
use goblin_core::{plan, CancelToken, Config, NodePresence};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod banner;
mod constants;
mod counter;
mod dom;
mod events;
mod follower;
mod frame;
mod harness;
mod links;
mod meter;
mod overlay;

use constants::{CANVAS_ID, CAVE_OVERLAY_ID, VISITOR_COUNT_ID};

thread_local! {
    static ANIMATIONS: RefCell<Vec<CancelToken>> = const { RefCell::new(Vec::new()) };
}

fn track_animation() -> CancelToken {
    let token = CancelToken::new();
    ANIMATIONS.with(|a| a.borrow_mut().push(token.clone()));
    token
}

pub(crate) fn cancel_animations() {
    ANIMATIONS.with(|a| {
        for token in a.borrow_mut().drain(..) {
            token.cancel();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::on_ready(&document, || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = Config::default();

    let config_ok = match config.validate() {
        Ok(()) => true,
        Err(e) => {
            log::error!("[init] config rejected, animated widgets off: {e}");
            false
        }
    };

    let canvas = dom::element_by_id::<web::HtmlCanvasElement>(&document, CANVAS_ID);
    let overlay = dom::element_by_id::<web::HtmlElement>(&document, CAVE_OVERLAY_ID);
    let count_el = dom::element_by_id::<web::HtmlElement>(&document, VISITOR_COUNT_ID);
    let dodgy = links::find(&document);
    let cards = meter::find_cards(&document);
    let present = NodePresence {
        canvas: canvas.is_ok(),
        overlay: overlay.is_ok(),
        counter: count_el.is_ok(),
        links: !dodgy.is_empty(),
        cards: !cards.is_empty(),
    };

    // Motion widgets only for visitors who haven't asked for less of it
    let reduced_motion = dom::prefers_reduced_motion();
    let widgets = plan(reduced_motion, config_ok, present);
    log::debug!("[init] reduced_motion={reduced_motion} plan={widgets:?}");

    match canvas {
        Ok(canvas) if widgets.follower => {
            if let Err(e) = follower::mount(canvas, config.goblin, track_animation()) {
                log::debug!("[init] goblin skipped: {e}");
            }
        }
        Ok(_) => {}
        Err(e) => log::debug!("[init] goblin skipped: {e}"),
    }
    if widgets.links {
        links::mount(&document, dodgy, config.dodge);
    }

    match overlay {
        Ok(overlay) if widgets.cave => overlay::mount(overlay, config.cave),
        Ok(_) => {}
        Err(e) => log::debug!("[init] cave mode skipped: {e}"),
    }

    match count_el {
        Ok(el) if widgets.counter => counter::mount(el, config.counter, track_animation()),
        Ok(_) => {}
        Err(e) => log::debug!("[init] visitor counter skipped: {e}"),
    }

    if widgets.meters {
        let meters = meter::annotate_all(&cards);
        log::debug!("[init] annotated {} chaos meters", meters);
    }

    banner::print();
    Ok(())
}
