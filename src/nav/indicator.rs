use ratatui::layout::Rect;
use ratatui::widgets::Padding;

/// Highlight rectangle in coordinates relative to the container's padding
/// box. `ready` stays false until the first successful measurement so the
/// indicator is never painted at a default position before layout is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorRect {
    pub offset_x: u16,
    pub width: u16,
    pub inset_left: u16,
    pub inset_top: u16,
    pub height: u16,
    pub ready: bool,
}

impl IndicatorRect {
    /// Converts the relative rectangle back to screen coordinates, clipped
    /// to the container.
    pub fn screen_rect(&self, container: Rect) -> Rect {
        let rect = Rect::new(
            container.x.saturating_add(self.inset_left).saturating_add(self.offset_x),
            container.y.saturating_add(self.inset_top),
            self.width,
            self.height,
        );
        rect.intersection(container)
    }
}

/// Computes the highlight rectangle aligning to `child` inside `container`.
///
/// Returns `None` when either rectangle has no area yet (mount race, not
/// laid out); callers keep the previous rectangle in that case.
pub fn align_to(container: Rect, padding: Padding, child: Rect) -> Option<IndicatorRect> {
    if container.width == 0 || container.height == 0 || child.width == 0 || child.height == 0 {
        return None;
    }

    let offset_x = child
        .x
        .saturating_sub(container.x)
        .saturating_sub(padding.left);
    let height = container
        .height
        .saturating_sub(padding.top)
        .saturating_sub(padding.bottom);

    Some(IndicatorRect {
        offset_x,
        width: child.width,
        inset_left: padding.left,
        inset_top: padding.top,
        height,
        ready: true,
    })
}
