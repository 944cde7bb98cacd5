//! Links that dodge the cursor, a few times, before giving up.

use crate::constants::{CAUGHT_CLASS, DODGY_LINK_SELECTOR};
use crate::dom;
use crate::events;
use goblin_core::constants::CAUGHT_FLASH_MS;
use goblin_core::{format_translate, parse_translate, DodgeConfig, DodgeSet, LinkId, LinkProbe};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct DodgyLinks {
    links: Vec<web::HtmlElement>,
    dodges: DodgeSet,
    rng: StdRng,
}

impl DodgyLinks {
    fn probe(id: usize, link: &web::HtmlElement) -> LinkProbe {
        let rect = link.get_bounding_client_rect();
        let center = glam::Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        );
        let transform = link.style().get_property_value("transform").unwrap_or_default();
        LinkProbe {
            id: LinkId(id),
            center,
            offset: parse_translate(&transform).unwrap_or(glam::Vec2::ZERO),
        }
    }

    fn on_pointer_move(&mut self, pointer: glam::Vec2) {
        let probes = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| Self::probe(i, link));
        let moves = self.dodges.sweep(pointer, probes, &mut self.rng);
        for (LinkId(i), offset) in moves {
            if let Some(link) = self.links.get(i) {
                _ = link.style().set_property("transform", &format_translate(offset));
            }
        }
    }
}

fn flash_caught(link: web::HtmlElement) {
    _ = link.class_list().add_1(CAUGHT_CLASS);
    spawn_local(async move {
        dom::sleep_ms(CAUGHT_FLASH_MS).await;
        _ = link.class_list().remove_1(CAUGHT_CLASS);
    });
}

pub fn find(document: &web::Document) -> Vec<web::HtmlElement> {
    dom::query_all(document, DODGY_LINK_SELECTOR)
}

/// Wire every link in `links`; returns how many.
pub fn mount(
    document: &web::Document,
    links: Vec<web::HtmlElement>,
    config: DodgeConfig,
) -> usize {
    for link in &links {
        let target = link.clone();
        dom::listen(link, "click", move |_: web::MouseEvent| flash_caught(target.clone()));
    }

    let count = links.len();
    let state = Rc::new(RefCell::new(DodgyLinks {
        links,
        dodges: DodgeSet::new(config),
        rng: StdRng::from_entropy(),
    }));
    events::wire_mouse_move(document, move |p| state.borrow_mut().on_pointer_move(p));
    log::debug!("[dodge] {} links on the run", count);
    count
}
