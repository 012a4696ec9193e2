mod indicator;
mod sync;
mod target;

pub use indicator::{IndicatorRect, align_to};
pub use sync::{NavBarLayout, NavSynchronizer};
pub use target::{Location, NavItem, ParsedTarget, active_index, parse_target};
