use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, preset: KeymapPreset) -> Option<Command> {
    match preset {
        KeymapPreset::Default => map_key_default(key),
        KeymapPreset::Emacs => map_key_emacs(key),
    }
}

fn map_key_default(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    if let KeyCode::Char(digit @ '1'..='9') = key.code {
        let index = digit as usize - '1' as usize;
        return Some(Command::NavigateIndex { index });
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Command::Scroll { dy: 1 }),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::Scroll { dy: -1 }),
        KeyCode::PageDown => Some(Command::Scroll { dy: 10 }),
        KeyCode::PageUp => Some(Command::Scroll { dy: -10 }),
        KeyCode::Char('g') | KeyCode::Home => Some(Command::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Command::Bottom),
        KeyCode::Tab => Some(Command::NextSection),
        KeyCode::BackTab => Some(Command::PrevSection),
        KeyCode::Char('t') => Some(Command::ToggleTheme),
        KeyCode::Char('e') => Some(Command::CycleExperienceTab),
        KeyCode::Char('f') => Some(Command::CycleProjectFilter),
        KeyCode::Char(']') => Some(Command::CarouselNext),
        KeyCode::Char('[') => Some(Command::CarouselPrev),
        KeyCode::Char('a') => Some(Command::Navigate {
            target: "/about".to_string(),
        }),
        KeyCode::Char('D') => Some(Command::DebugStatusToggle),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn map_key_emacs(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('<') => Some(Command::Top),
            KeyCode::Char('>') => Some(Command::Bottom),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Command::Scroll { dy: 1 }),
            KeyCode::Char('p') => Some(Command::Scroll { dy: -1 }),
            KeyCode::Char('v') => Some(Command::Scroll { dy: 10 }),
            KeyCode::Char('g') => Some(Command::Cancel),
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    map_key_default(key)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::command::Command;

    use super::{KeymapPreset, map_key_to_command};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_preset_maps_core_bindings() {
        assert_eq!(
            map_key_to_command(key(KeyCode::Char('j')), KeymapPreset::Default),
            Some(Command::Scroll { dy: 1 })
        );
        assert_eq!(
            map_key_to_command(key(KeyCode::Char('t')), KeymapPreset::Default),
            Some(Command::ToggleTheme)
        );
        assert_eq!(
            map_key_to_command(key(KeyCode::Char('3')), KeymapPreset::Default),
            Some(Command::NavigateIndex { index: 2 })
        );
        assert_eq!(
            map_key_to_command(key(KeyCode::Char('x')), KeymapPreset::Default),
            None
        );
    }

    #[test]
    fn emacs_preset_overrides_and_falls_back() {
        assert_eq!(
            map_key_to_command(
                KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
                KeymapPreset::Emacs
            ),
            Some(Command::Scroll { dy: 1 })
        );
        assert_eq!(
            map_key_to_command(key(KeyCode::Char('q')), KeymapPreset::Emacs),
            Some(Command::Quit)
        );
    }

    #[test]
    fn unknown_preset_string_falls_back_to_default() {
        assert_eq!(KeymapPreset::parse("nope"), KeymapPreset::Default);
        assert_eq!(KeymapPreset::parse("emacs"), KeymapPreset::Emacs);
    }
}
