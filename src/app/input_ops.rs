use crossterm::event::{
    Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::command::{ActionId, Command};
use crate::input::{KeymapPreset, map_key_to_command};

use super::core::App;

#[derive(Debug, Default)]
pub(crate) struct InputEventOutcome {
    pub(crate) command: Option<Command>,
    pub(crate) redraw: bool,
}

impl App {
    pub(crate) fn handle_input_event(&mut self, event: Event) -> InputEventOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                let preset = KeymapPreset::parse(&self.config.keymap.preset);
                InputEventOutcome {
                    command: map_key_to_command(key, preset),
                    redraw: false,
                }
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => InputEventOutcome {
                command: None,
                redraw: true,
            },
            _ => InputEventOutcome::default(),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> InputEventOutcome {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.track_hover(mouse.column, mouse.row)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.nav_layout.toggle_hit(mouse.column, mouse.row) {
                    return InputEventOutcome {
                        command: Some(Command::ToggleTheme),
                        redraw: false,
                    };
                }
                if let Some(index) = self.nav_layout.hit_test(mouse.column, mouse.row) {
                    return InputEventOutcome {
                        command: Some(Command::NavigateIndex { index }),
                        redraw: false,
                    };
                }
                InputEventOutcome::default()
            }
            MouseEventKind::ScrollDown => InputEventOutcome {
                command: Some(Command::Scroll {
                    dy: i32::from(self.config.ui.scroll_step_rows),
                }),
                redraw: false,
            },
            MouseEventKind::ScrollUp => InputEventOutcome {
                command: Some(Command::Scroll {
                    dy: -i32::from(self.config.ui.scroll_step_rows),
                }),
                redraw: false,
            },
            _ => InputEventOutcome::default(),
        }
    }

    /// Pointer-hover semantics over the nav bar: entering an item hovers
    /// it, leaving the bar entirely clears the hover. Moving inside the bar
    /// between items keeps the current hover.
    fn track_hover(&mut self, column: u16, row: u16) -> InputEventOutcome {
        let changed = if let Some(index) = self.nav_layout.hit_test(column, row) {
            self.nav.set_hover(Some(index))
        } else if !self.nav_layout.contains(column, row) {
            self.nav.clear_hover()
        } else {
            false
        };

        if changed {
            self.state.status.last_action_id = Some(ActionId::Hover);
        }
        InputEventOutcome {
            command: None,
            redraw: changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyModifiers, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;
    use ratatui::widgets::Padding;

    use crate::app::App;
    use crate::command::Command;
    use crate::config::Config;
    use crate::content::load_profile;
    use crate::nav::NavBarLayout;

    fn app_with_layout() -> App {
        let profile = load_profile(None).expect("embedded profile should parse");
        let mut app = App::new(profile, Config::default(), None);
        app.nav_layout = NavBarLayout {
            container: Rect::new(0, 0, 60, 3),
            padding: Padding::new(2, 2, 1, 1),
            items: vec![Rect::new(2, 1, 6, 1), Rect::new(9, 1, 7, 1)],
            theme_toggle: Some(Rect::new(50, 1, 7, 1)),
        };
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn moving_over_an_item_hovers_it() {
        let mut app = app_with_layout();
        let outcome = app.handle_input_event(mouse(MouseEventKind::Moved, 3, 1));
        assert!(outcome.redraw);
        assert_eq!(app.nav.hover_index(), Some(0));
    }

    #[test]
    fn leaving_the_bar_clears_the_hover() {
        let mut app = app_with_layout();
        app.handle_input_event(mouse(MouseEventKind::Moved, 10, 1));
        assert_eq!(app.nav.hover_index(), Some(1));

        // Between items but still inside the bar: hover is kept.
        let inside = app.handle_input_event(mouse(MouseEventKind::Moved, 8, 1));
        assert!(!inside.redraw);
        assert_eq!(app.nav.hover_index(), Some(1));

        let outside = app.handle_input_event(mouse(MouseEventKind::Moved, 10, 10));
        assert!(outside.redraw);
        assert_eq!(app.nav.hover_index(), None);
    }

    #[test]
    fn clicks_resolve_items_and_the_theme_toggle() {
        let mut app = app_with_layout();
        let item = app.handle_input_event(mouse(
            MouseEventKind::Down(crossterm::event::MouseButton::Left),
            9,
            1,
        ));
        assert_eq!(item.command, Some(Command::NavigateIndex { index: 1 }));

        let toggle = app.handle_input_event(mouse(
            MouseEventKind::Down(crossterm::event::MouseButton::Left),
            52,
            1,
        ));
        assert_eq!(toggle.command, Some(Command::ToggleTheme));
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let mut app = app_with_layout();
        let outcome = app.handle_input_event(Event::FocusGained);
        assert!(outcome.command.is_none());
        assert!(!outcome.redraw);
    }
}
