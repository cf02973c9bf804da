//! Application shell: routing, event loop and terminal lifecycle

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, buffer::Buffer, layout::Rect};

use super::error::Result;
use super::events::{detail_action, list_action, poll_key};
use super::theme::Theme;
use super::views::{DetailView, ListView, Outcome, ViewContext};
use crate::api::MovieId;
use crate::timer::Clock;

/// How long the loop waits for a key before syncing views again
const TICK: Duration = Duration::from_millis(50);

/// The two pages of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `detail/<id>`
    Detail(MovieId),
}

/// Owns the mounted view for the current route
///
/// Only one view is mounted at a time. Navigating unmounts the previous
/// view, which cancels its pending debounce and drops its query handles.
pub struct App<C> {
    ctx: ViewContext<C>,
    route: Route,
    list: Option<ListView<C>>,
    detail: Option<DetailView>,
    theme: Theme,
    should_quit: bool,
}

impl<C: Clock + Clone> App<C> {
    #[must_use]
    pub fn new(ctx: ViewContext<C>, start: Route) -> Self {
        let mut app = Self {
            ctx,
            route: start,
            list: None,
            detail: None,
            theme: Theme::default(),
            should_quit: false,
        };
        app.navigate(start);
        app
    }

    /// Switch pages, unmounting whatever was showing
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(?route, "navigate");
        self.route = route;
        match route {
            Route::List => {
                self.detail = None;
                self.list = Some(ListView::mount(&self.ctx));
            }
            Route::Detail(id) => {
                self.list = None;
                self.detail = Some(DetailView::mount(id, &self.ctx));
            }
        }
    }

    /// Let the mounted view pick up timers and finished requests
    pub fn sync(&mut self) -> bool {
        match (&mut self.list, &mut self.detail) {
            (Some(list), _) => list.sync(),
            (_, Some(detail)) => detail.sync(),
            _ => false,
        }
    }

    /// Block until the mounted view's data resolves or `timeout` elapses
    pub fn settle(&mut self, timeout: Duration) -> bool {
        match (&mut self.list, &mut self.detail) {
            (Some(list), _) => list.settle(timeout),
            (_, Some(detail)) => detail.settle(timeout),
            _ => true,
        }
    }

    /// Route a key press to the mounted view and act on its outcome
    pub fn handle_key(&mut self, key: &KeyEvent) {
        let outcome = match (&mut self.list, &mut self.detail) {
            (Some(list), _) => list_action(key).map_or(Outcome::Stay, |a| list.handle(a)),
            (_, Some(detail)) => detail_action(key).map_or(Outcome::Stay, |a| detail.handle(a)),
            _ => Outcome::Stay,
        };
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Stay => {}
            Outcome::Open(id) => self.navigate(Route::Detail(id)),
            Outcome::Home => self.navigate(Route::List),
            Outcome::Quit => self.should_quit = true,
        }
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be driven.
    pub fn run(mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.run_loop(&mut terminal);

        // Restore the terminal even when the loop failed
        if let Err(e) = cleanup_terminal() {
            tracing::error!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if let Some(key) = poll_key(TICK)? {
                self.handle_key(&key);
            }
            self.sync();
        }
        Ok(())
    }
}

impl<C: Clock> App<C> {
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        self.render_to(area, frame.buffer_mut());
    }

    pub fn render_to(&self, area: Rect, buf: &mut Buffer) {
        if let Some(list) = &self.list {
            list.render(area, buf, &self.theme);
        } else if let Some(detail) = &self.detail {
            detail.render(area, buf, &self.theme);
        }
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub const fn list(&self) -> Option<&ListView<C>> {
        self.list.as_ref()
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
