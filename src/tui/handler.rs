//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! active view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveView, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.poll_worker();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => {
            app.next_view();
            return Ok(());
        }
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Scribe => handle_scribe_key(app, key),
        ActiveView::Treasury | ActiveView::Archives => handle_browse_key(app, key),
    }
}

/// Keys on the Scribe tab go to the entry box
fn handle_scribe_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.interpreting {
        return Ok(());
    }

    match key.code {
        KeyCode::Enter => app.submit_entry(),
        KeyCode::Char(c) => {
            // Typing after a failure starts a fresh attempt
            app.entry_error = None;
            app.entry_input.insert(c);
        }
        KeyCode::Backspace => app.entry_input.backspace(),
        KeyCode::Delete => app.entry_input.delete(),
        KeyCode::Left => app.entry_input.move_left(),
        KeyCode::Right => app.entry_input.move_right(),
        KeyCode::Home => app.entry_input.move_start(),
        KeyCode::End => app.entry_input.move_end(),
        _ => {}
    }

    Ok(())
}

/// Keys on the read-only tabs
fn handle_browse_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('1') => app.switch_view(ActiveView::Scribe),
        KeyCode::Char('2') => app.switch_view(ActiveView::Treasury),
        KeyCode::Char('3') => app.switch_view(ActiveView::Archives),
        KeyCode::Char('j') | KeyCode::Down if app.active_view == ActiveView::Archives => {
            app.move_down()
        }
        KeyCode::Char('k') | KeyCode::Up if app.active_view == ActiveView::Archives => {
            app.move_up()
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::{Ledger, MemorySlot};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_goes_to_entry_box() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let mut app = App::new(&ledger, &settings, None);

        for c in "q1".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }

        assert!(!app.should_quit);
        assert_eq!(app.active_view, ActiveView::Scribe);
        assert_eq!(app.entry_input.value(), "q1");
    }

    #[test]
    fn test_tab_and_number_keys_switch_views() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let mut app = App::new(&ledger, &settings, None);

        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_view, ActiveView::Treasury);

        handle_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Archives);

        handle_event(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Scribe);
    }

    #[test]
    fn test_quit_keys() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();

        let mut app = App::new(&ledger, &settings, None);
        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);

        let mut app = App::new(&ledger, &settings, None);
        app.switch_view(ActiveView::Archives);
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);

        let mut app = App::new(&ledger, &settings, None);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_clears_previous_error() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let mut app = App::new(&ledger, &settings, None);

        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.entry_error.is_some());

        handle_event(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert!(app.entry_error.is_none());
        assert_eq!(app.entry_input.value(), "xy");
    }
}
