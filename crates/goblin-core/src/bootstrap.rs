//! Which widgets get built, decided before anything touches the page.

/// Which of the page's widget nodes were found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodePresence {
    pub canvas: bool,
    pub overlay: bool,
    pub counter: bool,
    pub links: bool,
    pub cards: bool,
}

impl NodePresence {
    pub fn all() -> Self {
        Self {
            canvas: true,
            overlay: true,
            counter: true,
            links: true,
            cards: true,
        }
    }
}

/// Widgets to construct. Anything `false` is never instantiated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetPlan {
    pub follower: bool,
    pub links: bool,
    pub cave: bool,
    pub counter: bool,
    pub meters: bool,
}

/// Each widget depends only on its own node. Reduced motion or a rejected
/// config leaves out the follower and the links; the rest always run when
/// their node is there.
pub fn plan(reduced_motion: bool, config_ok: bool, present: NodePresence) -> WidgetPlan {
    let motion = config_ok && !reduced_motion;
    WidgetPlan {
        follower: motion && present.canvas,
        links: motion && present.links,
        cave: present.overlay,
        counter: present.counter,
        meters: present.cards,
    }
}
