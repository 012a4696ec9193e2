mod chrome;
mod layout;
mod navbar;
pub(crate) mod sections;

pub use chrome::draw_chrome;
pub use layout::{ContentLayout, SECTION_GAP, SectionSpan, UiLayout, split_layout};
pub use navbar::{NAV_PADDING, draw_navbar};
pub use sections::{SectionId, SectionRender, SectionsView, build_about_page, build_home_sections};
