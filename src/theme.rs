use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::config::ThemeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn background(self) -> Rgb {
        match self {
            Self::Light => LIGHT_BG,
            Self::Dark => DARK_BG,
        }
    }

    pub fn foreground(self) -> Color {
        match self {
            Self::Light => LIGHT_FG.color(),
            Self::Dark => DARK_FG.color(),
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Self::Light => Color::Rgb(37, 99, 235),
            Self::Dark => Color::Rgb(96, 165, 250),
        }
    }

    pub fn muted(self) -> Color {
        match self {
            Self::Light => Color::Rgb(100, 116, 139),
            Self::Dark => Color::Rgb(148, 163, 184),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const LIGHT_BG: Rgb = Rgb(255, 255, 255);
const DARK_BG: Rgb = Rgb(11, 18, 32);
const LIGHT_FG: Rgb = Rgb(15, 23, 42);
const DARK_FG: Rgb = Rgb(248, 250, 252);
/// Midpoint the background sweeps through between themes.
const STAGE_GRAY: Rgb = Rgb(107, 114, 128);

impl Rgb {
    pub fn color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

pub fn mix(start: Rgb, end: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let blend = |a: u8, b: u8| -> u8 {
        let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb(
        blend(start.0, end.0),
        blend(start.1, end.1),
        blend(start.2, end.2),
    )
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from_bg: Rgb,
    target: Theme,
    started_at: Instant,
}

/// Theme toggle with a two-stage background sweep: current color to gray,
/// then gray to the target theme's background. The logical theme commits at
/// the stage boundary, matching when the rest of the palette flips.
#[derive(Debug, Clone)]
pub struct ThemeState {
    theme: Theme,
    transition: Option<Transition>,
    phase: Duration,
    reduced_motion: bool,
}

impl ThemeState {
    pub fn new(theme: Theme, phase: Duration, reduced_motion: bool) -> Self {
        Self {
            theme,
            transition: None,
            phase,
            reduced_motion,
        }
    }

    pub fn from_config(config: &ThemeConfig, cli_theme: Option<Theme>) -> Self {
        let theme = cli_theme.unwrap_or_else(|| Theme::parse(&config.default));
        Self::new(
            theme,
            Duration::from_millis(config.transition_phase_ms),
            config.reduced_motion,
        )
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Theme the state is heading toward: the transition target while a
    /// sweep runs, the committed theme otherwise.
    pub fn target(&self) -> Theme {
        match self.transition {
            Some(transition) => transition.target,
            None => self.theme,
        }
    }

    /// Flips the theme. Mid-transition toggles retarget from the currently
    /// blended background instead of snapping.
    pub fn toggle(&mut self, now: Instant) {
        let target = match self.transition {
            Some(transition) => transition.target.flipped(),
            None => self.theme.flipped(),
        };

        if self.reduced_motion {
            self.theme = target;
            self.transition = None;
            return;
        }

        self.transition = Some(Transition {
            from_bg: self.background_rgb(now),
            target,
            started_at: now,
        });
    }

    /// Advances the transition clock. Returns true while a repaint is still
    /// needed; commits the logical theme at the stage boundary and clears
    /// the transition once the sweep completes.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        let elapsed = now.saturating_duration_since(transition.started_at);
        if elapsed >= self.phase && self.theme != transition.target {
            self.theme = transition.target;
        }
        if elapsed >= self.phase * 2 {
            self.theme = transition.target;
            self.transition = None;
        }
        true
    }

    fn background_rgb(&self, now: Instant) -> Rgb {
        let Some(transition) = self.transition else {
            return self.theme.background();
        };

        let elapsed = now.saturating_duration_since(transition.started_at);
        let phase_secs = self.phase.as_secs_f32().max(f32::EPSILON);
        let t = elapsed.as_secs_f32() / phase_secs;
        if t < 1.0 {
            mix(transition.from_bg, STAGE_GRAY, t)
        } else {
            mix(STAGE_GRAY, transition.target.background(), t - 1.0)
        }
    }

    pub fn background(&self, now: Instant) -> Color {
        self.background_rgb(now).color()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{DARK_BG, LIGHT_BG, Rgb, STAGE_GRAY, Theme, ThemeState, mix};

    fn state(reduced_motion: bool) -> ThemeState {
        ThemeState::new(Theme::Light, Duration::from_millis(400), reduced_motion)
    }

    #[test]
    fn mix_interpolates_and_clamps() {
        assert_eq!(mix(Rgb(0, 0, 0), Rgb(255, 255, 255), 0.0), Rgb(0, 0, 0));
        assert_eq!(
            mix(Rgb(0, 0, 0), Rgb(255, 255, 255), 1.0),
            Rgb(255, 255, 255)
        );
        assert_eq!(mix(Rgb(0, 0, 0), Rgb(200, 100, 50), 0.5), Rgb(100, 50, 25));
        assert_eq!(mix(Rgb(0, 0, 0), Rgb(10, 10, 10), 7.0), Rgb(10, 10, 10));
    }

    #[test]
    fn reduced_motion_snaps_immediately() {
        let mut theme = state(true);
        let now = Instant::now();
        theme.toggle(now);
        assert_eq!(theme.theme(), Theme::Dark);
        assert!(!theme.is_transitioning());
        assert!(!theme.advance(now));
    }

    #[test]
    fn toggle_sweeps_through_gray_and_commits_midway() {
        let mut theme = state(false);
        let start = Instant::now();
        theme.toggle(start);

        assert_eq!(theme.theme(), Theme::Light);
        assert_eq!(theme.background(start), LIGHT_BG.color());

        let mid = start + Duration::from_millis(400);
        assert!(theme.advance(mid));
        assert_eq!(theme.theme(), Theme::Dark);
        assert_eq!(theme.background(mid), STAGE_GRAY.color());

        let done = start + Duration::from_millis(800);
        assert!(theme.advance(done));
        assert!(!theme.is_transitioning());
        assert_eq!(theme.background(done), DARK_BG.color());
        assert!(!theme.advance(done));
    }

    #[test]
    fn retoggle_mid_transition_retargets_from_current_blend() {
        let mut theme = state(false);
        let start = Instant::now();
        theme.toggle(start);

        let quarter = start + Duration::from_millis(100);
        theme.advance(quarter);
        let blend_at_retoggle = theme.background(quarter);
        theme.toggle(quarter);

        // The second toggle flips the target back to light and the sweep
        // restarts from the partially mixed background.
        assert_eq!(theme.background(quarter), blend_at_retoggle);
        let done = quarter + Duration::from_millis(800);
        assert!(theme.advance(done));
        assert_eq!(theme.theme(), Theme::Light);
        assert!(!theme.is_transitioning());
    }
}
