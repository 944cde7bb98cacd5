/// Page contract: the ids and classes the widgets look for.
///
/// Any of these may be missing; the widget that needs it is skipped.
pub const CANVAS_ID: &str = "goblin-canvas";
pub const CAVE_OVERLAY_ID: &str = "cave-overlay";
pub const VISITOR_COUNT_ID: &str = "visitor-count";

pub const DODGY_LINK_SELECTOR: &str = ".dodgy-link";
pub const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";
pub const CHAOS_METER_SELECTOR: &str = ".chaos-meter";

pub const CHAOS_ATTR: &str = "data-chaos";
pub const ORDER_ATTR: &str = "data-order";
pub const METER_LABEL_ATTR: &str = "data-label";
pub const ORDER_PERCENT_PROP: &str = "--order-percent";

pub const CAUGHT_CLASS: &str = "caught";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Console banner: (text, css) pairs printed with `%c`
pub const BANNER: [(&str, &str); 3] = [
    (
        "%c🦝 GoblinCorps",
        "font-size: 24px; color: #2ecc71; font-weight: bold;",
    ),
    (
        "%cWe make what we like, because we like making it",
        "font-size: 14px; color: #f1c40f; font-style: italic;",
    ),
    (
        "%c\nPsst... you found the console. Here's a secret: try scrolling all the way down.",
        "font-size: 12px; color: #9b59b6;",
    ),
];
