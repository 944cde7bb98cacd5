//! Platform-free logic behind the GoblinCorps homepage widgets.
//!
//! Nothing in here touches the DOM; the web crate reads positions and sizes
//! off the page, calls into these functions, and writes the results back.

pub mod bootstrap;
pub mod cave;
pub mod config;
pub mod constants;
pub mod counter;
pub mod dodge;
pub mod follower;
pub mod meter;
pub mod random;
pub mod schedule;

pub use bootstrap::*;
pub use cave::*;
pub use config::*;
pub use counter::*;
pub use dodge::*;
pub use follower::*;
pub use meter::*;
pub use random::*;
pub use schedule::*;
