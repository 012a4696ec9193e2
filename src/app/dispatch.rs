use std::time::Instant;

use crate::command::{ActionId, Command, CommandOutcome};
use crate::event::AppEvent;
use crate::nav::{Location, parse_target};
use crate::ui::SectionId;

use super::core::App;
use super::state::Route;

pub(crate) struct CommandDispatch {
    pub(crate) outcome: CommandOutcome,
    pub(crate) emitted_events: Vec<AppEvent>,
}

impl CommandDispatch {
    fn plain(outcome: CommandOutcome) -> Self {
        Self {
            outcome,
            emitted_events: Vec::new(),
        }
    }
}

impl App {
    pub(crate) fn dispatch_command(&mut self, command: Command, now: Instant) -> CommandDispatch {
        let action = command.action_id();
        self.state.status.last_action_id = Some(action);

        match command {
            Command::Navigate { target } => self.navigate_to(&target),
            Command::NavigateIndex { index } => match self.nav.item(index) {
                Some(item) => {
                    let target = item.target.clone();
                    self.navigate_to(&target)
                }
                None => {
                    self.state.status.message = format!("no nav item at index {index}");
                    CommandDispatch::plain(CommandOutcome::Noop)
                }
            },
            Command::Scroll { dy } => self.scroll_by(dy),
            Command::Top => self.scroll_to(0, "top"),
            Command::Bottom => self.scroll_to(self.state.max_scroll, "bottom"),
            Command::NextSection => self.step_section(1),
            Command::PrevSection => self.step_section(-1),
            Command::ToggleTheme => self.toggle_theme(now),
            Command::CycleExperienceTab => {
                self.state.experience_tab = self.state.experience_tab.next();
                self.state.status.message =
                    format!("experience tab -> {}", self.state.experience_tab.label());
                CommandDispatch::plain(CommandOutcome::Applied)
            }
            Command::CycleProjectFilter => {
                self.state.project_filter = self.state.project_filter.next();
                self.state.status.message =
                    format!("project filter -> {}", self.state.project_filter.label());
                CommandDispatch::plain(CommandOutcome::Applied)
            }
            Command::CarouselNext => self.step_carousels(true),
            Command::CarouselPrev => self.step_carousels(false),
            Command::DebugStatusToggle => {
                self.state.debug_status_visible = !self.state.debug_status_visible;
                self.state.status.message = if self.state.debug_status_visible {
                    "debug status on".to_string()
                } else {
                    "debug status off".to_string()
                };
                CommandDispatch::plain(CommandOutcome::Applied)
            }
            Command::Cancel => {
                let cleared_hover = self.nav.clear_hover();
                self.state.status.message.clear();
                CommandDispatch::plain(if cleared_hover {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Noop
                })
            }
            Command::Quit => CommandDispatch::plain(CommandOutcome::QuitRequested),
        }
    }

    pub(crate) fn handle_app_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::LocationChanged { to, .. } => {
                self.nav.sync_location(to);
            }
            AppEvent::ThemeChanged { to, .. } => {
                self.state.status.last_action_id = Some(ActionId::ToggleTheme);
                self.state.status.message = format!("theme -> {}", to.as_str());
            }
            AppEvent::SectionRevealed { section } => {
                self.state.status.last_action_id = Some(ActionId::Reveal);
                self.state.status.message = format!("revealed {}", section.title());
            }
        }
    }

    fn navigate_to(&mut self, target: &str) -> CommandDispatch {
        let parsed = parse_target(target);
        let Some(route) = Route::from_path(&parsed.path) else {
            self.state.status.message = format!("no route for {}", parsed.path);
            return CommandDispatch::plain(CommandOutcome::Noop);
        };

        let from = self.location.current();
        let to = Location::new(parsed.path, parsed.fragment);
        let changed = self.location.navigate(to.clone());

        let route_changed = self.state.route != route;
        self.state.route = route;
        if route_changed {
            self.state.scroll_y = 0;
        }
        if route == Route::Home {
            self.jump_to_fragment(&to.fragment);
        }
        self.state.status.message = format!("-> {target}");

        let mut emitted_events = Vec::new();
        if changed {
            emitted_events.push(AppEvent::LocationChanged { from, to });
        }
        CommandDispatch {
            outcome: if changed || route_changed {
                CommandOutcome::Applied
            } else {
                CommandOutcome::Noop
            },
            emitted_events,
        }
    }

    /// Scrolls the home page so the fragment's section starts at the top of
    /// the viewport. Without a layout yet, the jump is parked and applied
    /// right after the next frame.
    pub(crate) fn jump_to_fragment(&mut self, fragment: &str) {
        let Some(layout) = &self.content_layout else {
            self.state.pending_fragment = Some(fragment.to_string());
            return;
        };
        let Some(section) = SectionId::from_fragment(fragment) else {
            return;
        };
        let Some(span) = layout.span_of(section) else {
            return;
        };
        self.state.scroll_y = span.offset.min(layout.max_scroll());
    }

    fn scroll_by(&mut self, dy: i32) -> CommandDispatch {
        let current = i32::from(self.state.scroll_y);
        let next = (current + dy).clamp(0, i32::from(self.state.max_scroll)) as u16;
        if next == self.state.scroll_y {
            return CommandDispatch::plain(CommandOutcome::Noop);
        }
        self.state.scroll_y = next;
        self.state.status.message = format!("scroll {next}/{}", self.state.max_scroll);
        CommandDispatch::plain(CommandOutcome::Applied)
    }

    fn scroll_to(&mut self, row: u16, label: &str) -> CommandDispatch {
        let next = row.min(self.state.max_scroll);
        if next == self.state.scroll_y {
            return CommandDispatch::plain(CommandOutcome::Noop);
        }
        self.state.scroll_y = next;
        self.state.status.message = label.to_string();
        CommandDispatch::plain(CommandOutcome::Applied)
    }

    /// Moves to the neighbouring home section via a fragment navigation, so
    /// the location store and nav bar stay in step with the scroll.
    fn step_section(&mut self, direction: i32) -> CommandDispatch {
        let Some(layout) = &self.content_layout else {
            return self.navigate_to("/");
        };
        let current = layout
            .section_at(self.state.scroll_y)
            .and_then(|id| SectionId::ALL.iter().position(|&s| s == id))
            .unwrap_or(0);
        let count = SectionId::ALL.len() as i32;
        let next = (current as i32 + direction).rem_euclid(count) as usize;
        let fragment = SectionId::ALL[next].fragment();
        let target = if fragment.is_empty() {
            "/".to_string()
        } else {
            format!("/{fragment}")
        };
        self.navigate_to(&target)
    }

    fn toggle_theme(&mut self, now: Instant) -> CommandDispatch {
        let from = self.state.theme.theme();
        self.state.theme.toggle(now);
        let to = self.state.theme.target();
        CommandDispatch {
            outcome: CommandOutcome::Applied,
            emitted_events: vec![AppEvent::ThemeChanged { from, to }],
        }
    }

    fn step_carousels(&mut self, forward: bool) -> CommandDispatch {
        let tab = self.state.experience_tab;
        let mut moved = false;
        for (index, entry) in self.profile.experience.iter().enumerate() {
            if entry.category != tab {
                continue;
            }
            let Some(carousel) = self.state.carousels.get_mut(index) else {
                continue;
            };
            moved |= if forward {
                carousel.next(entry.images.len())
            } else {
                carousel.prev(entry.images.len())
            };
        }
        if moved {
            self.state.status.message = "carousel stepped".to_string();
            CommandDispatch::plain(CommandOutcome::Applied)
        } else {
            self.state.status.message = "no carousel on this tab".to_string();
            CommandDispatch::plain(CommandOutcome::Noop)
        }
    }

    /// Auto-advance driven by the carousel tick; every strip with at least
    /// two images moves, regardless of the active tab.
    pub(crate) fn advance_carousels(&mut self) -> bool {
        let mut moved = false;
        for (index, entry) in self.profile.experience.iter().enumerate() {
            if let Some(carousel) = self.state.carousels.get_mut(index) {
                moved |= carousel.next(entry.images.len());
            }
        }
        moved
    }
}
