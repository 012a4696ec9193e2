mod core;
mod dispatch;
mod event_loop;
mod frame_ops;
mod input_ops;
mod state;
pub(crate) mod terminal_session;

#[cfg(test)]
mod tests;

pub use core::{App, default_nav_items};
pub use state::{AppState, CarouselState, Route, StatusState};
