use ratatui::layout::{Position, Rect};
use ratatui::widgets::Padding;

use super::indicator::{IndicatorRect, align_to};
use super::target::{Location, NavItem, ParsedTarget, active_index, parse_target};

/// Item geometry captured while the nav bar is drawn. The synchronizer
/// consumes it after the frame, so measurements always reflect the layout
/// that is actually on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBarLayout {
    pub container: Rect,
    pub padding: Padding,
    pub items: Vec<Rect>,
    pub theme_toggle: Option<Rect>,
}

impl NavBarLayout {
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        let position = Position::new(x, y);
        self.items.iter().position(|rect| rect.contains(position))
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.container.contains(Position::new(x, y))
    }

    pub fn toggle_hit(&self, x: u16, y: u16) -> bool {
        self.theme_toggle
            .is_some_and(|rect| rect.contains(Position::new(x, y)))
    }
}

/// Keeps the nav highlight in step with the current location, the hovered
/// item, and the most recent on-screen layout.
#[derive(Debug, Clone)]
pub struct NavSynchronizer {
    items: Vec<NavItem>,
    parsed: Vec<ParsedTarget>,
    active: Option<usize>,
    hover: Option<usize>,
    indicator: IndicatorRect,
}

impl NavSynchronizer {
    pub fn new(items: Vec<NavItem>) -> Self {
        let parsed = items.iter().map(|item| parse_target(&item.target)).collect();
        Self {
            items,
            parsed,
            active: None,
            hover: None,
            indicator: IndicatorRect::default(),
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&NavItem> {
        self.items.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover
    }

    pub fn indicator(&self) -> IndicatorRect {
        self.indicator
    }

    /// Recomputes the active item for `location`. Returns true when the
    /// active index changed.
    pub fn sync_location(&mut self, location: &Location) -> bool {
        let next = active_index(&self.parsed, location);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    /// Updates the hovered item. Out-of-range indices clear the hover.
    pub fn set_hover(&mut self, index: Option<usize>) -> bool {
        let next = index.filter(|&i| i < self.items.len());
        if next == self.hover {
            return false;
        }
        self.hover = next;
        true
    }

    /// Pointer left the bar entirely: geometry reverts to the active item.
    pub fn clear_hover(&mut self) -> bool {
        self.set_hover(None)
    }

    /// Index the indicator should align to: hover wins over active, and an
    /// unmatched location falls back to the first item.
    pub fn target_index(&self) -> usize {
        self.hover.or(self.active).unwrap_or(0)
    }

    /// Measures the indicator against the captured layout. A missing or
    /// zero-area target preserves the previous rectangle. Returns true when
    /// the rectangle changed and another paint is needed.
    pub fn apply_layout(&mut self, layout: &NavBarLayout) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let Some(&child) = layout.items.get(self.target_index()) else {
            return false;
        };
        let Some(next) = align_to(layout.container, layout.padding, child) else {
            return false;
        };
        if next == self.indicator {
            return false;
        }
        self.indicator = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::widgets::Padding;

    use crate::nav::target::{Location, NavItem};

    use super::{NavBarLayout, NavSynchronizer};

    fn default_items() -> Vec<NavItem> {
        vec![
            NavItem::new("Home", "/"),
            NavItem::new("Education", "/#education"),
            NavItem::new("Projects", "/#projects"),
        ]
    }

    fn three_item_layout() -> NavBarLayout {
        NavBarLayout {
            container: Rect::new(0, 0, 40, 3),
            padding: Padding::new(1, 1, 1, 1),
            items: vec![
                Rect::new(1, 1, 6, 1),
                Rect::new(8, 1, 11, 1),
                Rect::new(20, 1, 10, 1),
            ],
            theme_toggle: None,
        }
    }

    #[test]
    fn indicator_is_not_ready_until_first_measurement() {
        let mut sync = NavSynchronizer::new(default_items());
        assert!(!sync.indicator().ready);

        sync.sync_location(&Location::at_path("/"));
        assert!(!sync.indicator().ready);

        assert!(sync.apply_layout(&three_item_layout()));
        assert!(sync.indicator().ready);
    }

    #[test]
    fn hover_takes_precedence_over_active() {
        let mut sync = NavSynchronizer::new(default_items());
        sync.sync_location(&Location::new("/", "#projects"));
        assert_eq!(sync.active_index(), Some(2));

        sync.set_hover(Some(1));
        assert_eq!(sync.target_index(), 1);

        sync.apply_layout(&three_item_layout());
        assert_eq!(sync.indicator().offset_x, 7);
        assert_eq!(sync.indicator().width, 11);
    }

    #[test]
    fn resize_after_hover_ends_measures_the_active_item() {
        let mut sync = NavSynchronizer::new(default_items());
        sync.sync_location(&Location::new("/", "#projects"));
        sync.set_hover(Some(0));
        sync.apply_layout(&three_item_layout());

        sync.clear_hover();
        assert_eq!(sync.target_index(), 2);

        sync.apply_layout(&three_item_layout());
        assert_eq!(sync.indicator().offset_x, 19);
        assert_eq!(sync.indicator().width, 10);
    }

    #[test]
    fn unmatched_location_falls_back_to_first_item() {
        let mut sync = NavSynchronizer::new(default_items());
        sync.sync_location(&Location::at_path("/missing"));
        assert_eq!(sync.active_index(), None);
        assert_eq!(sync.target_index(), 0);
    }

    #[test]
    fn stale_geometry_survives_an_unmeasurable_layout() {
        let mut sync = NavSynchronizer::new(default_items());
        sync.sync_location(&Location::at_path("/"));
        sync.apply_layout(&three_item_layout());
        let measured = sync.indicator();

        assert!(!sync.apply_layout(&NavBarLayout::default()));
        assert_eq!(sync.indicator(), measured);
    }

    #[test]
    fn out_of_range_hover_is_ignored() {
        let mut sync = NavSynchronizer::new(default_items());
        assert!(!sync.set_hover(Some(9)));
        assert_eq!(sync.hover_index(), None);
    }

    #[test]
    fn unchanged_layout_does_not_request_another_paint() {
        let mut sync = NavSynchronizer::new(default_items());
        sync.sync_location(&Location::at_path("/"));
        assert!(sync.apply_layout(&three_item_layout()));
        assert!(!sync.apply_layout(&three_item_layout()));
    }
}
