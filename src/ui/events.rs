//! Event handling for the TUI
//!
//! Maps key events to the actions of the active view.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Actions understood by the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// Append a character to the search input
    Insert(char),
    /// Delete the last character of the search input
    Backspace,
    /// Clear the search input
    ClearInput,
    NextPage,
    PrevPage,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Open the selected movie
    Open,
    Quit,
}

/// Actions understood by the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    /// Return to the list ("Back To Home Page")
    Back,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Open the movie's homepage in the system browser
    OpenHomepage,
    Quit,
}

/// Wait up to `timeout` for a key press
///
/// Returns `Ok(None)` on timeout or for non-key events (resize, mouse,
/// key release), which only need a redraw.
///
/// # Errors
///
/// Returns an I/O error if the terminal cannot be polled or read.
pub fn poll_key(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a key to a list action
///
/// The search input always has focus, so plain characters are typed into
/// it; navigation uses arrows, paging keys and control chords.
#[must_use]
pub fn list_action(key: &KeyEvent) -> Option<ListAction> {
    if is_quit(key) {
        return Some(ListAction::Quit);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(ListAction::Quit),
        KeyCode::Enter => Some(ListAction::Open),
        KeyCode::Backspace => Some(ListAction::Backspace),
        KeyCode::PageDown => Some(ListAction::NextPage),
        KeyCode::PageUp => Some(ListAction::PrevPage),
        KeyCode::Left => Some(ListAction::CursorLeft),
        KeyCode::Right => Some(ListAction::CursorRight),
        KeyCode::Up => Some(ListAction::CursorUp),
        KeyCode::Down => Some(ListAction::CursorDown),
        KeyCode::Char('n') if ctrl => Some(ListAction::NextPage),
        KeyCode::Char('p') if ctrl => Some(ListAction::PrevPage),
        KeyCode::Char('u') if ctrl => Some(ListAction::ClearInput),
        KeyCode::Char(c) if !ctrl => Some(ListAction::Insert(c)),
        _ => None,
    }
}

/// Map a key to a detail action
#[must_use]
pub fn detail_action(key: &KeyEvent) -> Option<DetailAction> {
    if is_quit(key) {
        return Some(DetailAction::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b' | 'h') => {
            Some(DetailAction::Back)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(DetailAction::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(DetailAction::ScrollDown),
        KeyCode::PageUp => Some(DetailAction::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(DetailAction::PageDown),
        KeyCode::Char('o') => Some(DetailAction::OpenHomepage),
        KeyCode::Char('q') => Some(DetailAction::Quit),
        _ => None,
    }
}
