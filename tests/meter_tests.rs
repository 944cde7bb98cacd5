// Host-side tests for chaos/order meter annotations.

use goblin_core::{parse_percent, MeterReading};

#[test]
fn parses_plain_and_prefixed_integers() {
    assert_eq!(parse_percent(Some("70")), 70);
    assert_eq!(parse_percent(Some("70%")), 70);
    assert_eq!(parse_percent(Some("  42")), 42);
    assert_eq!(parse_percent(Some("-5")), -5);
    assert_eq!(parse_percent(Some("+8")), 8);
    assert_eq!(parse_percent(Some("12.9")), 12);
}

#[test]
fn missing_or_garbage_defaults_to_fifty() {
    assert_eq!(parse_percent(None), 50);
    assert_eq!(parse_percent(Some("")), 50);
    assert_eq!(parse_percent(Some("lots")), 50);
    assert_eq!(parse_percent(Some("-")), 50);
    assert_eq!(parse_percent(Some("99999999999999")), 50);
}

#[test]
fn explicit_zero_is_kept() {
    assert_eq!(parse_percent(Some("0")), 0);
}

#[test]
fn reading_produces_property_and_label() {
    let r = MeterReading::from_attributes(Some("30"), Some("70"));
    assert_eq!(r, MeterReading { chaos: 30, order: 70 });
    assert_eq!(r.order_percent(), "70%");
    assert_eq!(r.label(), "Order: 70% | Chaos: 30%");
}

#[test]
fn values_are_not_normalized() {
    let r = MeterReading::from_attributes(Some("80"), Some("80"));
    assert_eq!(r.label(), "Order: 80% | Chaos: 80%");
    let r = MeterReading::from_attributes(None, Some("nope"));
    assert_eq!(r.label(), "Order: 50% | Chaos: 50%");
}

#[test]
fn annotation_is_idempotent() {
    let a = MeterReading::from_attributes(Some("10"), Some("90"));
    let b = MeterReading::from_attributes(Some("10"), Some("90"));
    assert_eq!(a, b);
    assert_eq!(a.label(), b.label());
}
