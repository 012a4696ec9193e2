use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Padding};
use unicode_width::UnicodeWidthStr;

use crate::nav::{NavBarLayout, NavSynchronizer};
use crate::theme::Theme;

/// Border row plus one leading column on each side of the capsule.
pub const NAV_PADDING: Padding = Padding::new(2, 2, 1, 1);

const ITEM_GAP: u16 = 1;

/// Draws the capsule bar and returns the geometry that was actually put on
/// screen, for the synchronizer to measure after the frame.
pub fn draw_navbar(
    frame: &mut Frame<'_>,
    area: Rect,
    sync: &NavSynchronizer,
    theme: Theme,
    background: Color,
) -> NavBarLayout {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.muted()))
        .style(Style::default().bg(background));
    frame.render_widget(block, area);

    let labels: Vec<&str> = sync.items().iter().map(|item| item.label.as_str()).collect();
    let toggle_label = format!("[{}]", theme.as_str());
    let toggle_width = toggle_label.width() as u16;
    let items = measure_items(area, &labels, toggle_width);
    let theme_toggle = toggle_rect(area, toggle_width);

    let buffer = frame.buffer_mut();
    for (index, (rect, label)) in items.iter().zip(&labels).enumerate() {
        let style = if sync.hover_index() == Some(index) {
            Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD)
        } else if sync.active_index() == Some(index) {
            Style::default()
                .fg(theme.foreground())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted())
        };
        let span = Span::styled(format!(" {label} "), style);
        buffer.set_span(rect.x, rect.y, &span, rect.width);
    }

    // The highlight is painted from the previous measurement, so it trails
    // layout changes by exactly one frame.
    let indicator = sync.indicator();
    if indicator.ready {
        let rect = indicator.screen_rect(area);
        buffer.set_style(
            rect,
            Style::default()
                .fg(Color::White)
                .bg(theme.accent())
                .add_modifier(Modifier::BOLD),
        );
    }

    if let Some(rect) = theme_toggle {
        let span = Span::styled(toggle_label, Style::default().fg(theme.accent()));
        buffer.set_span(rect.x, rect.y, &span, rect.width);
    }

    NavBarLayout {
        container: area,
        padding: NAV_PADDING,
        items,
        theme_toggle,
    }
}

/// Lays the item labels out left to right inside the capsule. Items that
/// would collide with the theme toggle are not placed.
pub(crate) fn measure_items(area: Rect, labels: &[&str], toggle_width: u16) -> Vec<Rect> {
    let inner_height = area
        .height
        .saturating_sub(NAV_PADDING.top)
        .saturating_sub(NAV_PADDING.bottom);
    if inner_height == 0 || area.width == 0 {
        return Vec::new();
    }

    let y = area.y.saturating_add(NAV_PADDING.top);
    let limit = area
        .x
        .saturating_add(area.width)
        .saturating_sub(NAV_PADDING.right)
        .saturating_sub(toggle_width)
        .saturating_sub(ITEM_GAP);

    let mut rects = Vec::with_capacity(labels.len());
    let mut cursor = area.x.saturating_add(NAV_PADDING.left);
    for label in labels {
        let width = label.width() as u16 + 2;
        if cursor.saturating_add(width) > limit {
            break;
        }
        rects.push(Rect::new(cursor, y, width, inner_height));
        cursor = cursor.saturating_add(width).saturating_add(ITEM_GAP);
    }
    rects
}

fn toggle_rect(area: Rect, toggle_width: u16) -> Option<Rect> {
    let inner_height = area
        .height
        .saturating_sub(NAV_PADDING.top)
        .saturating_sub(NAV_PADDING.bottom);
    if inner_height == 0 {
        return None;
    }
    let end = area
        .x
        .saturating_add(area.width)
        .saturating_sub(NAV_PADDING.right);
    let x = end.checked_sub(toggle_width)?;
    if x <= area.x.saturating_add(NAV_PADDING.left) {
        return None;
    }
    Some(Rect::new(
        x,
        area.y.saturating_add(NAV_PADDING.top),
        toggle_width,
        inner_height,
    ))
}
