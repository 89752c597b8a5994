use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_regions_input(app: &mut App, key: KeyCode) {
    let len = app.visible_regions().len();

    match key {
        KeyCode::Left | KeyCode::Char('h') => app.screen = AppScreen::Dashboard,
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_region_index = wrap_decrement(app.selected_region_index, len);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.selected_region_index = wrap_increment(app.selected_region_index, len);
        }
        KeyCode::Home => app.selected_region_index = 0,
        KeyCode::End => app.selected_region_index = len.saturating_sub(1),
        KeyCode::Char('/') => app.searching = true,
        KeyCode::Char('c') => app.clear_search(),
        _ => {}
    }
}

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.searching = false,
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) => app.push_search_char(ch),
        _ => {}
    }
}
