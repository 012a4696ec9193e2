use crate::config::RevealConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

/// Extent of a region along the scroll axis, in content rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionSpan {
    pub offset: u16,
    pub height: u16,
}

impl RegionSpan {
    pub fn new(offset: u16, height: u16) -> Self {
        Self { offset, height }
    }

    fn end(&self) -> u16 {
        self.offset.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Share of the region that must be visible to trigger.
    pub threshold: f32,
    /// Percentage of the viewport height trimmed off its bottom edge, so
    /// regions trigger slightly before fully entering the viewport.
    pub bottom_margin_pct: u16,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            bottom_margin_pct: 10,
        }
    }
}

impl From<&RevealConfig> for RevealOptions {
    fn from(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin_pct: config.bottom_margin_pct,
        }
    }
}

#[derive(Debug, Clone)]
struct RegionSlot {
    span: RegionSpan,
    revealed: bool,
    observing: bool,
}

/// One-shot visibility tracking for scrollable regions.
///
/// Each region flips to visible the first time enough of it intersects the
/// (margin-trimmed) viewport, then stops being observed. The visible flag
/// is monotonic: it never reverts, regardless of later scrolling.
#[derive(Debug, Default)]
pub struct RevealObserver {
    options: RevealOptions,
    regions: Vec<RegionSlot>,
}

impl RevealObserver {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            regions: Vec::new(),
        }
    }

    /// Registers a region and starts observing it.
    pub fn observe(&mut self, span: RegionSpan) -> RegionId {
        self.regions.push(RegionSlot {
            span,
            revealed: false,
            observing: true,
        });
        RegionId(self.regions.len() - 1)
    }

    /// Updates a region's geometry after a relayout. Revealed or cancelled
    /// regions ignore the update.
    pub fn set_span(&mut self, id: RegionId, span: RegionSpan) {
        if let Some(slot) = self.regions.get_mut(id.0)
            && slot.observing
        {
            slot.span = span;
        }
    }

    pub fn visible(&self, id: RegionId) -> bool {
        self.regions.get(id.0).is_some_and(|slot| slot.revealed)
    }

    pub fn is_observing(&self, id: RegionId) -> bool {
        self.regions.get(id.0).is_some_and(|slot| slot.observing)
    }

    /// Stops observing without revealing. Idempotent; cancelling an already
    /// revealed or unknown region changes nothing.
    pub fn cancel(&mut self, id: RegionId) {
        if let Some(slot) = self.regions.get_mut(id.0) {
            slot.observing = false;
        }
    }

    /// Evaluates every observed region against the viewport and returns the
    /// ids that just revealed. Revealed regions stop being observed.
    pub fn update_viewport(&mut self, scroll: u16, viewport_height: u16) -> Vec<RegionId> {
        if viewport_height == 0 {
            return Vec::new();
        }

        let margin_rows =
            (u32::from(viewport_height) * u32::from(self.options.bottom_margin_pct) / 100) as u16;
        let viewport_top = scroll;
        let viewport_bottom = scroll
            .saturating_add(viewport_height)
            .saturating_sub(margin_rows);

        let mut fired = Vec::new();
        for (index, slot) in self.regions.iter_mut().enumerate() {
            if !slot.observing || slot.span.height == 0 {
                continue;
            }

            let top = slot.span.offset.max(viewport_top);
            let bottom = slot.span.end().min(viewport_bottom);
            let visible_rows = bottom.saturating_sub(top);
            let ratio = f32::from(visible_rows) / f32::from(slot.span.height);
            if ratio >= self.options.threshold {
                slot.revealed = true;
                slot.observing = false;
                fired.push(RegionId(index));
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::{RegionSpan, RevealObserver, RevealOptions};

    fn observer() -> RevealObserver {
        RevealObserver::new(RevealOptions::default())
    }

    #[test]
    fn region_reveals_once_threshold_is_met() {
        let mut reveal = observer();
        let region = reveal.observe(RegionSpan::new(30, 10));

        // 1 of 10 rows visible: below the 15% threshold.
        assert!(reveal.update_viewport(13, 20).is_empty());
        assert!(!reveal.visible(region));

        // 4 of 10 rows visible after scrolling down.
        let fired = reveal.update_viewport(16, 20);
        assert_eq!(fired, vec![region]);
        assert!(reveal.visible(region));
    }

    #[test]
    fn reveal_is_monotonic_and_one_shot() {
        let mut reveal = observer();
        let region = reveal.observe(RegionSpan::new(0, 10));

        assert_eq!(reveal.update_viewport(0, 20).len(), 1);
        assert!(!reveal.is_observing(region));

        // Scrolled far past the region: the flag must not revert, and the
        // region must not fire again on re-entry.
        assert!(reveal.update_viewport(500, 20).is_empty());
        assert!(reveal.visible(region));
        assert!(reveal.update_viewport(0, 20).is_empty());
        assert!(reveal.visible(region));
    }

    #[test]
    fn bottom_margin_trims_the_trigger_edge() {
        let mut reveal = observer();
        // Region occupying the last rows of a 20-row viewport. The 10%
        // margin trims rows 18..20, leaving 2 of 10 rows visible (20%).
        let region = reveal.observe(RegionSpan::new(16, 10));
        assert_eq!(reveal.update_viewport(0, 20), vec![region]);

        let mut strict = RevealObserver::new(RevealOptions {
            threshold: 0.25,
            bottom_margin_pct: 10,
        });
        let late = strict.observe(RegionSpan::new(16, 10));
        assert!(strict.update_viewport(0, 20).is_empty());
        assert!(!strict.visible(late));
    }

    #[test]
    fn cancel_is_idempotent_and_never_reveals() {
        let mut reveal = observer();
        let region = reveal.observe(RegionSpan::new(0, 10));

        reveal.cancel(region);
        reveal.cancel(region);
        assert!(!reveal.is_observing(region));
        assert!(!reveal.visible(region));

        assert!(reveal.update_viewport(0, 20).is_empty());
        assert!(!reveal.visible(region));
    }

    #[test]
    fn regions_do_not_interfere() {
        let mut reveal = observer();
        let near = reveal.observe(RegionSpan::new(0, 10));
        let far = reveal.observe(RegionSpan::new(100, 10));

        assert_eq!(reveal.update_viewport(0, 20), vec![near]);
        assert!(reveal.visible(near));
        assert!(!reveal.visible(far));

        assert_eq!(reveal.update_viewport(95, 20), vec![far]);
        assert!(reveal.visible(near));
        assert!(reveal.visible(far));
    }

    #[test]
    fn span_updates_apply_only_while_observing() {
        let mut reveal = observer();
        let region = reveal.observe(RegionSpan::new(200, 10));

        reveal.set_span(region, RegionSpan::new(0, 10));
        assert_eq!(reveal.update_viewport(0, 20), vec![region]);

        // Relayout after reveal: geometry is no longer tracked.
        reveal.set_span(region, RegionSpan::new(300, 10));
        assert!(reveal.visible(region));
    }

    #[test]
    fn zero_height_viewport_or_region_never_fires() {
        let mut reveal = observer();
        let empty = reveal.observe(RegionSpan::new(0, 0));
        assert!(reveal.update_viewport(0, 0).is_empty());
        assert!(reveal.update_viewport(0, 20).is_empty());
        assert!(!reveal.visible(empty));
    }
}
