use crate::command::ActionId;
use crate::content::{ExperienceCategory, ProjectFilter};
use crate::theme::ThemeState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/about" => Some(Self::About),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

/// Wrapping position of one image strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
}

impl CarouselState {
    pub fn index(self) -> usize {
        self.index
    }

    /// Advances one step, wrapping. Strips with fewer than two images do
    /// not move.
    pub fn next(&mut self, len: usize) -> bool {
        if len < 2 {
            return false;
        }
        self.index = (self.index + 1) % len;
        true
    }

    pub fn prev(&mut self, len: usize) -> bool {
        if len < 2 {
            return false;
        }
        self.index = (self.index + len - 1) % len;
        true
    }
}

#[derive(Debug)]
pub struct AppState {
    pub route: Route,
    pub scroll_y: u16,
    /// Scroll ceiling of whatever page was last laid out.
    pub max_scroll: u16,
    pub theme: ThemeState,
    pub experience_tab: ExperienceCategory,
    pub project_filter: ProjectFilter,
    pub carousels: Vec<CarouselState>,
    pub debug_status_visible: bool,
    pub status: StatusState,
    /// Fragment jump requested before the page had a layout; applied right
    /// after the next frame.
    pub pending_fragment: Option<String>,
}

impl AppState {
    pub fn new(theme: ThemeState, experience_count: usize) -> Self {
        Self {
            route: Route::Home,
            scroll_y: 0,
            max_scroll: 0,
            theme,
            experience_tab: ExperienceCategory::Organizational,
            project_filter: ProjectFilter::default(),
            carousels: vec![CarouselState::default(); experience_count],
            debug_status_visible: false,
            status: StatusState::default(),
            pending_fragment: None,
        }
    }
}
