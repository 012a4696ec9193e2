#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate { target: String },
    NavigateIndex { index: usize },
    Scroll { dy: i32 },
    Top,
    Bottom,
    NextSection,
    PrevSection,
    ToggleTheme,
    CycleExperienceTab,
    CycleProjectFilter,
    CarouselNext,
    CarouselPrev,
    DebugStatusToggle,
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    Navigate,
    Scroll,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    ToggleTheme,
    CycleExperienceTab,
    CycleProjectFilter,
    CarouselNext,
    CarouselPrev,
    DebugStatusToggle,
    Cancel,
    Quit,
    Input,
    Hover,
    Reveal,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::Scroll => "scroll",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::NextSection => "next-section",
            Self::PrevSection => "prev-section",
            Self::ToggleTheme => "toggle-theme",
            Self::CycleExperienceTab => "cycle-experience-tab",
            Self::CycleProjectFilter => "cycle-project-filter",
            Self::CarouselNext => "carousel-next",
            Self::CarouselPrev => "carousel-prev",
            Self::DebugStatusToggle => "debug-status-toggle",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Input => "input",
            Self::Hover => "hover",
            Self::Reveal => "reveal",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::Navigate { .. } | Self::NavigateIndex { .. } => ActionId::Navigate,
            Self::Scroll { .. } => ActionId::Scroll,
            Self::Top => ActionId::Top,
            Self::Bottom => ActionId::Bottom,
            Self::NextSection => ActionId::NextSection,
            Self::PrevSection => ActionId::PrevSection,
            Self::ToggleTheme => ActionId::ToggleTheme,
            Self::CycleExperienceTab => ActionId::CycleExperienceTab,
            Self::CycleProjectFilter => ActionId::CycleProjectFilter,
            Self::CarouselNext => ActionId::CarouselNext,
            Self::CarouselPrev => ActionId::CarouselPrev,
            Self::DebugStatusToggle => ActionId::DebugStatusToggle,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}

#[cfg(test)]
mod tests {
    use super::{ActionId, Command};

    #[test]
    fn command_action_id_maps_navigation_variants() {
        assert_eq!(
            Command::Navigate {
                target: "/#projects".to_string(),
            }
            .action_id(),
            ActionId::Navigate
        );
        assert_eq!(
            Command::NavigateIndex { index: 2 }.action_id(),
            ActionId::Navigate
        );
        assert_eq!(Command::Quit.action_id(), ActionId::Quit);
    }
}
