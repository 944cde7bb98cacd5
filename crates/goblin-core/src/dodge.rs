//! Bookkeeping for links that run away from the pointer.
//!
//! Each link gets a [`DodgeRecord`] the first time the pointer comes close.
//! A link dodges at most `max_dodges` times per page load, after which it is
//! caught and stays put. The link's current offset lives on the element
//! itself (its `transform`), so callers pass it in and write the result back.

use crate::config::DodgeConfig;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Stable identity of a link: its index in document order at mount time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DodgeRecord {
    pub count: u32,
}

/// One link as seen during a pointer move.
#[derive(Clone, Copy, Debug)]
pub struct LinkProbe {
    pub id: LinkId,
    /// Rendered center, already including the current offset.
    pub center: Vec2,
    pub offset: Vec2,
}

pub type Moves = SmallVec<[(LinkId, Vec2); 4]>;

pub struct DodgeSet {
    config: DodgeConfig,
    records: FnvHashMap<LinkId, DodgeRecord>,
}

impl DodgeSet {
    pub fn new(config: DodgeConfig) -> Self {
        Self {
            config,
            records: FnvHashMap::default(),
        }
    }

    pub fn record(&self, id: LinkId) -> Option<&DodgeRecord> {
        self.records.get(&id)
    }

    pub fn dodge_count(&self, id: LinkId) -> u32 {
        self.records.get(&id).map(|r| r.count).unwrap_or(0)
    }

    /// A caught link ignores the pointer until the page reloads.
    pub fn is_caught(&self, id: LinkId) -> bool {
        self.dodge_count(id) >= self.config.max_dodges
    }

    /// Decide whether one link dodges. Returns its new offset if it did.
    pub fn consider<R: Rng>(
        &mut self,
        probe: LinkProbe,
        pointer: Vec2,
        rng: &mut R,
    ) -> Option<Vec2> {
        let cfg = self.config;
        if pointer.distance(probe.center) >= cfg.trigger_distance {
            return None;
        }
        let record = self.records.entry(probe.id).or_default();
        if record.count >= cfg.max_dodges {
            return None;
        }

        let angle = escape_angle(probe.center, pointer, rng.gen::<f32>(), cfg.jitter_span);
        let moved = probe.offset + Vec2::from_angle(angle) * cfg.dodge_distance;
        record.count += 1;
        if record.count == cfg.max_dodges {
            log::debug!("[dodge] link {} caught", probe.id.0);
        }
        Some(clamp_offset(moved, &cfg))
    }

    /// Run every link against a pointer position; returns the links that moved.
    pub fn sweep<R, I>(&mut self, pointer: Vec2, probes: I, rng: &mut R) -> Moves
    where
        R: Rng,
        I: IntoIterator<Item = LinkProbe>,
    {
        probes
            .into_iter()
            .filter_map(|probe| {
                self.consider(probe, pointer, rng)
                    .map(|offset| (probe.id, offset))
            })
            .collect()
    }
}

/// Direction pointing from the pointer through the link center, rotated by
/// `(unit - 0.5) * jitter_span` so links don't flee in perfectly straight lines.
#[inline]
pub fn escape_angle(center: Vec2, pointer: Vec2, unit: f32, jitter_span: f32) -> f32 {
    let away = center - pointer;
    away.y.atan2(away.x) + (unit - 0.5) * jitter_span
}

/// Keep an offset inside the `±bound_x` × `±bound_y` rectangle.
#[inline]
pub fn clamp_offset(offset: Vec2, cfg: &DodgeConfig) -> Vec2 {
    let bound = Vec2::new(cfg.bound_x, cfg.bound_y);
    offset.clamp(-bound, bound)
}

pub fn format_translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Read back an offset written by [`format_translate`].
///
/// Anything else (empty, other transforms, garbage) reads as no offset.
pub fn parse_translate(transform: &str) -> Option<Vec2> {
    let start = transform.find("translate(")? + "translate(".len();
    let rest = &transform[start..];
    let inner = &rest[..rest.find(')')?];
    let (x, y) = inner.split_once(',')?;
    let px = |s: &str| -> Option<f32> {
        s.trim().strip_suffix("px")?.parse::<f32>().ok().filter(|v| v.is_finite())
    };
    Some(Vec2::new(px(x)?, px(y)?))
}
