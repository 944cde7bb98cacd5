//! Chaos/order meter on portfolio cards.

use crate::constants::METER_DEFAULT_PERCENT;

/// Leading-integer parse of a data attribute (`"70%"` -> 70).
///
/// Missing, empty or non-numeric values fall back to 50. An explicit `0` stays 0.
pub fn parse_percent(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else {
        return METER_DEFAULT_PERCENT;
    };
    let s = raw.trim_start();
    let (sign, body) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    body[..end]
        .parse::<i32>()
        .map(|v| sign * v)
        .unwrap_or(METER_DEFAULT_PERCENT)
}

/// The two values read off one card. They are shown as given; nothing checks
/// that they add up to 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeterReading {
    pub chaos: i32,
    pub order: i32,
}

impl MeterReading {
    pub fn from_attributes(chaos: Option<&str>, order: Option<&str>) -> Self {
        Self {
            chaos: parse_percent(chaos),
            order: parse_percent(order),
        }
    }

    /// Value for the `--order-percent` custom property.
    pub fn order_percent(&self) -> String {
        format!("{}%", self.order)
    }

    pub fn label(&self) -> String {
        format!("Order: {}% | Chaos: {}%", self.order, self.chaos)
    }
}
