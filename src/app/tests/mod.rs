use std::io;

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Size;

use crate::app::App;
use crate::config::Config;
use crate::content::load_profile;

use super::terminal_session::TerminalSurface;


pub(crate) fn test_app() -> App {
    let profile = load_profile(None).expect("embedded profile should parse");
    App::new(profile, Config::default(), None)
}

pub(crate) struct TestSurface {
    terminal: Terminal<TestBackend>,
}

impl TestSurface {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend should build");
        Self { terminal }
    }
}

impl TerminalSurface for TestSurface {
    fn size(&self) -> io::Result<Size> {
        self.terminal.size().map_err(|e| match e {})
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear().map_err(|e| match e {})
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ()).map_err(|e| match e {})
    }
}
