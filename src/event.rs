//! Event Handling
//!
//! Keyboard and event handling for cloudpile.

use crate::app::{App, Mode};
use crate::filter::{Facet, FilterMsg};
use crate::route::Route;
use anyhow::Result;
use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use std::time::Duration;

/// Lines moved by PageUp/PageDown in popups
const POPUP_PAGE: usize = 10;

/// Handle events, returns true if app should quit
pub fn handle_events(app: &mut App) -> Result<bool> {
    if poll(Duration::from_millis(100))? {
        if let Event::Key(key) = read()? {
            return Ok(handle_key_event(app, key.code, key.modifiers));
        }
    }
    Ok(false)
}

/// Apply one key press, returns true if app should quit
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    // Global quit shortcut
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, code, modifiers),
        Mode::Command => handle_command_mode(app, code, modifiers),
        Mode::Help => handle_help_mode(app, code),
        Mode::FacetSelect => handle_facet_select_mode(app, code, modifiers),
        Mode::Detail => handle_detail_mode(app, code),
    }
}

fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    // Column filter input owns the keyboard until Enter or Esc
    if app.column_filter_active {
        match code {
            KeyCode::Esc => app.clear_column_filter(),
            KeyCode::Enter => app.column_filter_active = false,
            KeyCode::Backspace => app.pop_column_filter(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.push_column_filter(c);
            },
            _ => {},
        }
        return false;
    }

    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(':') => app.enter_command_mode(),
        KeyCode::Char('?') => app.enter_help_mode(),

        // Menu
        KeyCode::Char(c @ '1'..='3') => {
            let idx = (c as usize) - ('1' as usize);
            app.navigate(Route::MENU[idx].clone());
        },
        KeyCode::Tab => app.next_menu_route(),

        _ if app.route == Route::List => handle_list_keys(app, code, modifiers),
        _ => {},
    }

    false
}

fn handle_list_keys(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Check for double-g (go to top)
    if code == KeyCode::Char('g') {
        if let Some((KeyCode::Char('g'), time)) = app.last_key_press {
            if time.elapsed() < Duration::from_millis(1000) {
                app.grid.go_to_top();
                app.last_key_press = None;
                return;
            }
        }
        app.last_key_press = Some((code, std::time::Instant::now()));
        return;
    }
    app.last_key_press = None;

    match code {
        // Row navigation
        KeyCode::Char('j') | KeyCode::Down => app.grid.next(),
        KeyCode::Char('k') | KeyCode::Up => app.grid.previous(),
        KeyCode::Home => app.grid.go_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.grid.go_to_bottom(),

        // Pagination
        KeyCode::Char(']') | KeyCode::PageDown => app.grid.next_page(),
        KeyCode::Char('[') | KeyCode::PageUp => app.grid.prev_page(),
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => app.grid.next_page(),
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => app.grid.prev_page(),

        // Column focus
        KeyCode::Char('l') | KeyCode::Right => app.grid.focus_next_column(),
        KeyCode::Char('h') | KeyCode::Left => app.grid.focus_previous_column(),

        // Column filter
        KeyCode::Char('/') => app.start_column_filter(),

        // Sorting with F1-F9, s sorts by the focused column
        KeyCode::F(n @ 1..=9) => {
            app.sort_by_column((n - 1) as usize);
        },
        KeyCode::Char('s') => {
            let column = app.grid.focused_column();
            app.sort_by_column(column);
        },
        // Clear sort with F12
        KeyCode::F(12) => app.clear_sort(),

        // Facet selectors
        KeyCode::Char('t') => app.open_selector(Facet::Type),
        KeyCode::Char('r') => app.open_selector(Facet::Region),
        KeyCode::Char('a') => app.open_selector(Facet::Account),
        KeyCode::Char('c') => app.dispatch_filter(FilterMsg::ClearAll),

        // Refresh
        KeyCode::Char('R') => app.refetch(),

        KeyCode::Enter => app.enter_detail_mode(),

        _ => {},
    }
}

fn handle_command_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc => {
            app.exit_mode();
        },
        KeyCode::Enter => {
            let should_quit = app.execute_command();
            if app.mode == Mode::Command {
                app.exit_mode();
            }
            return should_quit;
        },
        KeyCode::Backspace => {
            app.command_text.pop();
            app.update_command_suggestions();
        },
        KeyCode::Tab | KeyCode::Right => {
            app.apply_suggestion();
        },
        KeyCode::Down => {
            app.next_suggestion();
        },
        KeyCode::Up => {
            app.prev_suggestion();
        },
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_text.push(c);
            app.update_command_suggestions();
        },
        _ => {},
    }
    false
}

fn handle_help_mode(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.exit_mode();
        },
        _ => {},
    }
    false
}

fn handle_facet_select_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc => app.cancel_selector(),
        KeyCode::Enter => app.confirm_selector(),
        _ => {
            let Some(selector) = app.selector.as_mut() else {
                app.exit_mode();
                return false;
            };
            match code {
                KeyCode::Down => selector.next(),
                KeyCode::Up => selector.previous(),
                KeyCode::Home => selector.selected = 0,
                KeyCode::End => selector.go_to_bottom(),
                KeyCode::PageDown => selector.page_down(POPUP_PAGE),
                KeyCode::PageUp => selector.page_up(POPUP_PAGE),
                KeyCode::Backspace => {
                    selector.search_text.pop();
                    selector.apply_search();
                },
                KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    selector.search_text.push(c);
                    selector.apply_search();
                },
                _ => {},
            }
        },
    }
    false
}

fn handle_detail_mode(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace | KeyCode::Enter => {
            app.exit_mode();
        },
        KeyCode::Char('j') | KeyCode::Down => app.scroll_detail_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_detail_up(1),
        KeyCode::PageDown => app.scroll_detail_down(POPUP_PAGE),
        KeyCode::PageUp => app.scroll_detail_up(POPUP_PAGE),
        KeyCode::Char('g') | KeyCode::Home => {
            app.detail_scroll = 0;
        },
        _ => {},
    }
    false
}
