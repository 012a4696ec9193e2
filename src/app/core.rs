use crate::config::Config;
use crate::content::Profile;
use crate::location::LocationStore;
use crate::nav::{NavBarLayout, NavItem, NavSynchronizer};
use crate::reveal::{RegionId, RegionSpan, RevealObserver};
use crate::theme::{Theme, ThemeState};
use crate::ui::{ContentLayout, SectionId};

use super::state::AppState;

/// Nav entries of the home page, mirroring the section order.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("About", "/about"),
        NavItem::new("Education", "/#education"),
        NavItem::new("Experience", "/#experience"),
        NavItem::new("Projects", "/#projects"),
        NavItem::new("Certifications", "/#certifications"),
        NavItem::new("Contact", "/#footer"),
    ]
}

pub struct App {
    pub state: AppState,
    pub config: Config,
    pub profile: Profile,
    pub nav: NavSynchronizer,
    pub location: LocationStore,
    pub reveal: RevealObserver,
    pub(crate) regions: Vec<(SectionId, RegionId)>,
    pub(crate) nav_layout: NavBarLayout,
    pub(crate) content_layout: Option<ContentLayout>,
}

impl App {
    pub fn new(profile: Profile, config: Config, cli_theme: Option<Theme>) -> Self {
        let theme = ThemeState::from_config(&config.theme, cli_theme);
        let state = AppState::new(theme, profile.experience.len());

        let mut reveal = RevealObserver::new((&config.reveal).into());
        // Spans are placeholders until the first layout; the observer only
        // evaluates after real geometry arrives.
        let regions = SectionId::ALL
            .iter()
            .map(|&id| (id, reveal.observe(RegionSpan::default())))
            .collect();

        let mut nav = NavSynchronizer::new(default_nav_items());
        let location = LocationStore::default();
        nav.sync_location(&location.current());

        Self {
            state,
            config,
            profile,
            nav,
            location,
            reveal,
            regions,
            nav_layout: NavBarLayout::default(),
            content_layout: None,
        }
    }

    pub(crate) fn region_of(&self, id: SectionId) -> Option<RegionId> {
        self.regions
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, region)| *region)
    }

    pub(crate) fn section_visible(&self, id: SectionId) -> bool {
        self.region_of(id)
            .is_some_and(|region| self.reveal.visible(region))
    }
}
