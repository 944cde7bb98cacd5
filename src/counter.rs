//! Visitor counter: same total all day, counted up from zero on every load.

use crate::frame;
use goblin_core::{
    days_since_epoch, format_grouped, visitor_total, CancelToken, CountUp, CounterConfig,
    FrameStep,
};
use instant::Instant;
use web_sys as web;

pub fn todays_total(config: &CounterConfig) -> u64 {
    visitor_total(days_since_epoch(js_sys::Date::now()), config)
}

pub fn mount(element: web::HtmlElement, config: CounterConfig, token: CancelToken) {
    let total = todays_total(&config);
    let count_up = CountUp::new(total, config.duration);
    let started = Instant::now();

    let mut render = move || {
        let (value, step) = count_up.value_at(started.elapsed());
        element.set_text_content(Some(&format_grouped(value)));
        step
    };

    // first frame now, not on the next rAF
    if render() == FrameStep::Continue {
        frame::start_loop(token, render);
    }
    log::debug!("[counter] counting up to {}", total);
}
