use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, Route};
use crate::nav::Location;
use crate::theme::Theme;

pub fn draw_chrome(
    frame: &mut Frame<'_>,
    status_area: Rect,
    app: &AppState,
    location: &Location,
    theme: Theme,
) {
    let route = match app.route {
        Route::Home => "home",
        Route::About => "about",
    };
    let fragment = if location.fragment.is_empty() {
        "-"
    } else {
        location.fragment.as_str()
    };

    let status_text = format!(
        "{route} {fragment} | theme {} | tab {} | filter {} | q quit",
        theme.as_str(),
        app.experience_tab.label(),
        app.project_filter.label(),
    );
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(theme.muted()))
        .wrap(Wrap { trim: true });

    if app.debug_status_visible && status_area.height >= 2 {
        let top = Rect::new(status_area.x, status_area.y, status_area.width, 1);
        frame.render_widget(status, top);

        let action_id = app
            .status
            .last_action_id
            .map(|id| id.as_str())
            .unwrap_or("-");
        let message = if app.status.message.is_empty() {
            "-"
        } else {
            app.status.message.as_str()
        };
        let debug_text = format!("cmd={action_id} | msg={message} | scroll={}", app.scroll_y);
        let bottom = Rect::new(
            status_area.x,
            status_area.y + 1,
            status_area.width,
            status_area.height.saturating_sub(1).max(1),
        );
        let debug = Paragraph::new(debug_text)
            .style(Style::default().fg(theme.muted()))
            .wrap(Wrap { trim: true });
        frame.render_widget(debug, bottom);
        return;
    }

    frame.render_widget(status, status_area);
}
