//! The goblin that follows the cursor around, drawn on a full-viewport canvas.

use crate::dom;
use crate::events;
use crate::frame;
use anyhow::anyhow;
use goblin_core::{pupil_offset, CancelToken, FrameStep, GoblinConfig, PointerState};
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const TAU: f64 = PI * 2.0;

// Face layout, in px relative to the body center
const EYE_X: f64 = 6.0;
const EYE_Y: f64 = -3.0;
const EYE_RADIUS: f64 = 6.0;
const PUPIL_RADIUS: f64 = 3.0;
const GRIN_Y: f64 = 4.0;
const GRIN_RADIUS: f64 = 8.0;
const GRIN_INSET: f64 = 0.2;

pub fn mount(
    canvas: web::HtmlCanvasElement,
    config: GoblinConfig,
    token: CancelToken,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;

    let (w, h) = dom::viewport_size(&window);
    let state = Rc::new(RefCell::new(PointerState::centered(w as f32, h as f32)));

    dom::sync_canvas_to_viewport(&canvas);
    let canvas_resize = canvas.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        dom::sync_canvas_to_viewport(&canvas_resize);
    });

    let s = state.clone();
    events::wire_mouse_move(&document, move |p| s.borrow_mut().set_target(p));
    let s = state.clone();
    events::wire_touch_move(&document, move |p| s.borrow_mut().set_target(p));

    frame::start_loop(token, move || {
        let mut st = state.borrow_mut();
        st.step(config.speed);
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        if let Err(e) = draw(&ctx, &st, &config) {
            log::warn!("[goblin] draw failed: {:?}", e);
        }
        FrameStep::Continue
    });
    log::debug!("[goblin] following the cursor");
    Ok(())
}

fn fill_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn draw(
    ctx: &web::CanvasRenderingContext2d,
    st: &PointerState,
    cfg: &GoblinConfig,
) -> Result<(), JsValue> {
    ctx.save();
    let drawn = ctx
        .translate(st.current.x as f64, st.current.y as f64)
        .and_then(|_| draw_goblin(ctx, st.heading, cfg));
    ctx.restore();
    drawn
}

fn draw_goblin(
    ctx: &web::CanvasRenderingContext2d,
    heading: f32,
    cfg: &GoblinConfig,
) -> Result<(), JsValue> {
    let size = cfg.size as f64;

    // body
    ctx.set_fill_style_str(cfg.color);
    fill_circle(ctx, 0.0, 0.0, size / 2.0)?;

    // pointy ears
    for side in [-1.0, 1.0] {
        ctx.begin_path();
        ctx.move_to(side * size / 3.0, -size / 4.0);
        ctx.line_to(side * (size / 2.0 + 8.0), -size / 2.0 - 10.0);
        ctx.line_to(side * size / 6.0, -size / 3.0);
        ctx.fill();
    }

    ctx.set_fill_style_str(cfg.eye_color);
    fill_circle(ctx, -EYE_X, EYE_Y, EYE_RADIUS)?;
    fill_circle(ctx, EYE_X, EYE_Y, EYE_RADIUS)?;

    // pupils look where the goblin is heading
    let gaze = pupil_offset(heading);
    let (gx, gy) = (gaze.x as f64, gaze.y as f64);
    ctx.set_fill_style_str(cfg.pupil_color);
    fill_circle(ctx, -EYE_X + gx, EYE_Y + gy, PUPIL_RADIUS)?;
    fill_circle(ctx, EYE_X + gx, EYE_Y + gy, PUPIL_RADIUS)?;

    ctx.begin_path();
    ctx.set_stroke_style_str(cfg.pupil_color);
    ctx.set_line_width(2.0);
    ctx.arc(0.0, GRIN_Y, GRIN_RADIUS, GRIN_INSET, PI - GRIN_INSET)?;
    ctx.stroke();
    Ok(())
}
