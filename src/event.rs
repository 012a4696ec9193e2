use crossterm::event::Event;

use crate::command::Command;
use crate::nav::Location;
use crate::theme::Theme;
use crate::ui::SectionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    LocationChanged { from: Location, to: Location },
    ThemeChanged { from: Theme, to: Theme },
    SectionRevealed { section: SectionId },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    CarouselTick,
    RedrawTick,
}
