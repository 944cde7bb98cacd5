use crate::constants::*;
use crate::dom;
use goblin_core::MeterReading;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find_cards(document: &web::Document) -> Vec<web::Element> {
    dom::query_all(document, PORTFOLIO_ITEM_SELECTOR)
}

/// Annotate each card's chaos meter. Returns how many were written.
pub fn annotate_all(cards: &[web::Element]) -> usize {
    cards.iter().filter(|card| annotate(card)).count()
}

fn annotate(card: &web::Element) -> bool {
    let Some(meter) = card
        .query_selector(CHAOS_METER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return false;
    };
    let reading = MeterReading::from_attributes(
        card.get_attribute(CHAOS_ATTR).as_deref(),
        card.get_attribute(ORDER_ATTR).as_deref(),
    );
    _ = meter
        .style()
        .set_property(ORDER_PERCENT_PROP, &reading.order_percent());
    _ = meter.set_attribute(METER_LABEL_ATTR, &reading.label());
    true
}
