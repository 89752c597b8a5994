use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Char('l') => app.screen = AppScreen::Regions,
        KeyCode::Char('/') => {
            app.screen = AppScreen::Regions;
            app.searching = true;
        }
        _ => {}
    }
}
