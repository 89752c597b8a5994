use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod dashboard;
mod help;
mod regions;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    // Typing into the search box takes every key until it is closed.
    if app.searching {
        regions::handle_search_input(app, key);
        return;
    }

    if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
        app.running = false;
        return;
    }

    // Screens only exist once the data has arrived.
    if app.load_state.view_model().is_none() {
        return;
    }

    match key {
        KeyCode::Tab | KeyCode::BackTab => {
            app.screen = app.screen.toggle();
            return;
        }
        KeyCode::Char('1') => {
            app.screen = AppScreen::Dashboard;
            return;
        }
        KeyCode::Char('2') => {
            app.screen = AppScreen::Regions;
            return;
        }
        _ => {}
    }

    match app.screen {
        AppScreen::Dashboard => dashboard::handle_dashboard_input(app, key),
        AppScreen::Regions => regions::handle_regions_input(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{EmptyDataError, RawStatsResponse, RegionStat, StatsSummary};

    fn ready_app() -> App {
        let mut app = App::new("http://127.0.0.1:1/");
        app.settle(Ok(RawStatsResponse::new(
            StatsSummary::new(600, 0, 0),
            vec![
                RegionStat::new("Kerala", 300, 0, 0),
                RegionStat::new("Goa", 100, 0, 0),
                RegionStat::new("Delhi", 200, 0, 0),
            ],
        )));
        app
    }

    #[test]
    fn q_quits() {
        let mut app = ready_app();
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn tab_switches_screens() {
        let mut app = ready_app();
        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, AppScreen::Regions);
        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, AppScreen::Dashboard);
    }

    #[test]
    fn screen_keys_are_ignored_until_data_arrives() {
        let mut app = App::new("http://127.0.0.1:1/");
        for key in [KeyCode::Tab, KeyCode::Char('2'), KeyCode::Char('/'), KeyCode::Down] {
            dispatch_input(&mut app, key);
        }
        assert_eq!(app.screen, AppScreen::Dashboard);
        assert!(!app.searching);
        assert_eq!(app.selected_region_index, 0);

        app.settle(Err(EmptyDataError::MissingData.into()));
        dispatch_input(&mut app, KeyCode::BackTab);
        dispatch_input(&mut app, KeyCode::Right);
        assert_eq!(app.screen, AppScreen::Dashboard);

        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = ready_app();
        dispatch_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);

        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);

        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn search_mode_captures_typing() {
        let mut app = ready_app();
        dispatch_input(&mut app, KeyCode::Char('2'));
        dispatch_input(&mut app, KeyCode::Char('/'));
        assert!(app.searching);

        for ch in "goq".chars() {
            dispatch_input(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.search_input, "goq");
        assert!(app.running);

        dispatch_input(&mut app, KeyCode::Backspace);
        dispatch_input(&mut app, KeyCode::Enter);
        assert!(!app.searching);
        assert_eq!(app.search_input, "go");
        assert_eq!(app.visible_regions().len(), 1);
    }

    #[test]
    fn arrows_move_the_region_selection() {
        let mut app = ready_app();
        dispatch_input(&mut app, KeyCode::Char('2'));

        dispatch_input(&mut app, KeyCode::Down);
        assert_eq!(app.selected_region_index, 1);
        dispatch_input(&mut app, KeyCode::Up);
        dispatch_input(&mut app, KeyCode::Up);
        assert_eq!(app.selected_region_index, 2);
    }
}
