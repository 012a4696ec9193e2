use std::time::Instant;

use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};

use crate::error::AppResult;
use crate::event::AppEvent;
use crate::ui::{ContentLayout, SECTION_GAP, SectionsView, split_layout};
use crate::ui::{build_about_page, build_home_sections, draw_chrome, draw_navbar};

use super::core::App;
use super::state::Route;
use super::terminal_session::TerminalSurface;

impl App {
    /// Draws one frame and captures the geometry it produced. State is only
    /// written back after the draw, never during it.
    pub(crate) fn render_frame(
        &mut self,
        session: &mut impl TerminalSurface,
        now: Instant,
    ) -> AppResult<()> {
        let mut nav_layout = None;
        let mut content_layout = None;
        let mut max_scroll = 0u16;

        session.draw(|frame| {
            let area = frame.area();
            let layout = split_layout(area, self.state.debug_status_visible);
            let theme = self.state.theme.theme();
            let background = self.state.theme.background(now);

            frame.render_widget(Block::default().style(Style::default().bg(background)), area);
            nav_layout = Some(draw_navbar(
                frame,
                layout.navbar,
                &self.nav,
                theme,
                background,
            ));

            match self.state.route {
                Route::Home => {
                    let carousel_index: Vec<usize> =
                        self.state.carousels.iter().map(|c| c.index()).collect();
                    let view = SectionsView {
                        profile: &self.profile,
                        theme,
                        experience_tab: self.state.experience_tab,
                        project_filter: self.state.project_filter,
                        carousel_index: &carousel_index,
                    };
                    let sections = build_home_sections(&view, layout.content.width, |id| {
                        self.section_visible(id)
                    });
                    let built = ContentLayout::from_sections(&sections, layout.content.height);
                    max_scroll = built.max_scroll();
                    let scroll = self.state.scroll_y.min(max_scroll);

                    let mut lines: Vec<Line<'_>> = Vec::new();
                    let section_count = sections.len();
                    for (index, section) in sections.into_iter().enumerate() {
                        lines.extend(section.lines);
                        if index + 1 < section_count {
                            for _ in 0..SECTION_GAP {
                                lines.push(Line::default());
                            }
                        }
                    }
                    frame.render_widget(
                        Paragraph::new(Text::from(lines)).scroll((scroll, 0)),
                        layout.content,
                    );
                    content_layout = Some(built);
                }
                Route::About => {
                    let lines = build_about_page(&self.profile, theme, layout.content.width);
                    max_scroll = (lines.len() as u16).saturating_sub(layout.content.height);
                    let scroll = self.state.scroll_y.min(max_scroll);
                    frame.render_widget(
                        Paragraph::new(Text::from(lines)).scroll((scroll, 0)),
                        layout.content,
                    );
                }
            }

            draw_chrome(
                frame,
                layout.status,
                &self.state,
                &self.location.current(),
                theme,
            );
        })?;

        if let Some(nav_layout) = nav_layout {
            self.nav_layout = nav_layout;
        }
        self.content_layout = content_layout;
        self.state.max_scroll = max_scroll;
        self.state.scroll_y = self.state.scroll_y.min(max_scroll);
        Ok(())
    }

    /// Post-frame synchronization: the indicator measures against the
    /// layout that was just drawn, parked fragment jumps land, and the
    /// reveal observer sees the current viewport. Returns whether another
    /// paint is needed plus the events to publish.
    pub(crate) fn after_frame_sync(&mut self) -> (bool, Vec<AppEvent>) {
        let mut needs_redraw = self.nav.apply_layout(&self.nav_layout);
        let mut events = Vec::new();

        let Some(layout) = self.content_layout.clone() else {
            return (needs_redraw, events);
        };

        for &(section, region) in &self.regions {
            if let Some(span) = layout.span_of(section) {
                self.reveal.set_span(region, span);
            }
        }

        if let Some(pending) = self.state.pending_fragment.take() {
            self.jump_to_fragment(&pending);
            needs_redraw = true;
        }

        let fired = self
            .reveal
            .update_viewport(self.state.scroll_y, layout.viewport_height);
        for region in fired {
            needs_redraw = true;
            if let Some(&(section, _)) = self.regions.iter().find(|(_, r)| *r == region) {
                events.push(AppEvent::SectionRevealed { section });
            }
        }

        (needs_redraw, events)
    }
}
