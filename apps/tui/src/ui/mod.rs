// UI module for the dashboard
// Maps the load state onto one of the screens

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen, LoadState};
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area();

    match &app.load_state {
        LoadState::Loading => {
            screens::status::render_loading(f, area, &mut app.throbber_state);
        }
        LoadState::Failed(error) => {
            screens::status::render_failed(error, app.endpoint(), f, area);
        }
        LoadState::Ready(view) => match app.screen {
            AppScreen::Dashboard => screens::dashboard::render_dashboard(app, view, f),
            AppScreen::Regions => screens::regions::render_regions(app, view, f),
        },
    }

    if app.show_help {
        screens::help::render_help_popup(f, area);
    }
}
