use crate::api::{DashboardError, FetchError, RawStatsResponse, RegionStat, StatsClient};
use crate::app::search::filter_regions;
use crate::domain::{build_view_model, ViewModel};
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::oneshot::{self, error::TryRecvError};

type FetchResult = Result<RawStatsResponse, DashboardError>;

const THROBBER_TICK: Duration = Duration::from_millis(100);

/// The three mutually exclusive render states of the dashboard.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(DashboardError),
    Ready(Box<ViewModel>),
}

impl LoadState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn view_model(&self) -> Option<&ViewModel> {
        match self {
            Self::Ready(view) => Some(view.as_ref()),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&DashboardError> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failed(_) => "error",
            Self::Ready(_) => "ready",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Dashboard,
    Regions,
}

impl AppScreen {
    pub const TITLES: [&'static str; 2] = ["Dashboard", "Regions"];

    pub const fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Regions => 1,
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Self::Dashboard => Self::Regions,
            Self::Regions => Self::Dashboard,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub load_state: LoadState,
    pub show_help: bool,
    pub searching: bool,
    pub search_input: String,
    pub selected_region_index: usize,
    pub throbber_state: ThrobberState,
    pub last_frame: Instant,
    client: StatsClient,
    fetch_started: bool,
    fetch_rx: Option<oneshot::Receiver<FetchResult>>,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            running: true,
            screen: AppScreen::Dashboard,
            load_state: LoadState::Loading,
            show_help: false,
            searching: false,
            search_input: String::new(),
            selected_region_index: 0,
            throbber_state: ThrobberState::default(),
            last_frame: Instant::now(),
            client: StatsClient::new(endpoint),
            fetch_started: false,
            fetch_rx: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Spawn the single stats fetch for this activation.
    ///
    /// Returns `false` and does nothing if a fetch was already started.
    pub fn start_fetch(&mut self) -> bool {
        if self.fetch_started {
            tracing::debug!("fetch already started, ignoring");
            return false;
        }
        self.fetch_started = true;
        self.load_state = LoadState::Loading;

        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = client.fetch_stats().await;
            if tx.send(result).is_err() {
                tracing::debug!("dashboard closed before the fetch settled");
            }
        });
        self.fetch_rx = Some(rx);

        true
    }

    /// Non-blocking check for the fetch result; called once per frame.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = self.fetch_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.fetch_rx = None;
                self.settle(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.fetch_rx = None;
                self.settle(Err(abandoned_fetch()));
            }
        }
    }

    /// Wait for the outstanding fetch, if any, and settle it.
    pub async fn wait_for_fetch(&mut self) {
        let Some(rx) = self.fetch_rx.take() else {
            return;
        };

        let result = rx.await.unwrap_or_else(|_| Err(abandoned_fetch()));
        self.settle(result);
    }

    /// Move out of `Loading` exactly once.
    pub fn settle(&mut self, result: FetchResult) {
        if !self.load_state.is_loading() {
            tracing::warn!(
                state = self.load_state.label(),
                "ignoring fetch result for a settled dashboard"
            );
            return;
        }

        self.load_state = match result {
            Ok(raw) => {
                let view = build_view_model(&raw);
                tracing::debug!(
                    regions = view.ranked_regions.len(),
                    top = view.top_regions.len(),
                    "dashboard ready"
                );
                LoadState::Ready(Box::new(view))
            }
            Err(error) => {
                tracing::warn!(error = %error, "dashboard failed to load");
                LoadState::Failed(error)
            }
        };
        self.selected_region_index = 0;
    }

    pub fn update(&mut self) {
        self.poll_fetch();

        let now = Instant::now();
        if now.duration_since(self.last_frame) >= THROBBER_TICK {
            self.throbber_state.calc_next();
            self.last_frame = now;
        }
    }

    /// Regions for the list screen after applying the search query.
    pub fn visible_regions(&self) -> Vec<&RegionStat> {
        self.load_state
            .view_model()
            .map_or_else(Vec::new, |view| {
                filter_regions(&view.ranked_regions, &self.search_input)
            })
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_input.push(ch);
        self.selected_region_index = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.selected_region_index = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.searching = false;
        self.selected_region_index = 0;
    }
}

fn abandoned_fetch() -> DashboardError {
    FetchError::Transport("fetch task ended without a result".to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::{serve_once, SAMPLE_BODY};
    use crate::api::{EmptyDataError, StatsSummary};

    #[tokio::test]
    async fn successful_fetch_becomes_ready() -> Result<(), Box<dyn std::error::Error>> {
        let url = serve_once("200 OK", SAMPLE_BODY.to_string()).await?;
        let mut app = App::new(url);

        assert!(app.start_fetch());
        assert!(app.load_state.is_loading());
        app.wait_for_fetch().await;

        let Some(view) = app.load_state.view_model() else {
            return Err(format!("expected ready, got {}", app.load_state.label()).into());
        };
        assert_eq!(view.top_regions[0].loc, "B");
        assert_eq!(view.summary, StatsSummary {
            confirmed_cases_indian: Some(250),
            confirmed_cases_foreign: Some(0),
            confirmed_but_location_unidentified: Some(0),
            ..StatsSummary::new(250, 6, 190)
        });
        Ok(())
    }

    #[tokio::test]
    async fn failed_fetch_becomes_error() -> Result<(), Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let mut app = App::new(format!("http://{addr}/"));
        app.start_fetch();
        app.wait_for_fetch().await;

        let Some(error) = app.load_state.error() else {
            return Err(format!("expected error, got {}", app.load_state.label()).into());
        };
        assert!(!error.user_message().is_empty());
        assert!(app.load_state.view_model().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn null_data_becomes_no_data_state() -> Result<(), Box<dyn std::error::Error>> {
        let url = serve_once("200 OK", r#"{"data":null}"#.to_string()).await?;
        let mut app = App::new(url);

        app.start_fetch();
        app.wait_for_fetch().await;

        assert!(matches!(
            app.load_state,
            LoadState::Failed(DashboardError::EmptyData(EmptyDataError::MissingData))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn polling_settles_without_blocking() -> Result<(), Box<dyn std::error::Error>> {
        let url = serve_once("200 OK", SAMPLE_BODY.to_string()).await?;
        let mut app = App::new(url);
        app.start_fetch();

        for _ in 0..200 {
            app.update();
            if !app.load_state.is_loading() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert_eq!(app.load_state.label(), "ready");
        Ok(())
    }

    #[tokio::test]
    async fn second_fetch_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let url = serve_once("200 OK", SAMPLE_BODY.to_string()).await?;
        let mut app = App::new(url);

        assert!(app.start_fetch());
        assert!(!app.start_fetch());
        app.wait_for_fetch().await;
        assert!(!app.start_fetch());
        assert_eq!(app.load_state.label(), "ready");
        Ok(())
    }

    #[test]
    fn settled_state_is_not_overwritten() {
        let mut app = App::new("http://127.0.0.1:1/");
        app.settle(Err(EmptyDataError::MissingData.into()));
        app.settle(Ok(RawStatsResponse::new(StatsSummary::new(1, 0, 1), Vec::new())));

        assert_eq!(app.load_state.label(), "error");
    }

    #[test]
    fn search_filters_ranked_regions() {
        let mut app = App::new("http://127.0.0.1:1/");
        app.settle(Ok(RawStatsResponse::new(
            StatsSummary::new(300, 0, 0),
            vec![
                RegionStat::new("Goa", 100, 0, 0),
                RegionStat::new("Gujarat", 200, 0, 0),
            ],
        )));

        let names: Vec<&str> = app.visible_regions().iter().map(|r| r.loc.as_str()).collect();
        assert_eq!(names, ["Gujarat", "Goa"]);

        app.selected_region_index = 1;
        for ch in "goa".chars() {
            app.push_search_char(ch);
        }
        assert_eq!(app.selected_region_index, 0);
        let names: Vec<&str> = app.visible_regions().iter().map(|r| r.loc.as_str()).collect();
        assert_eq!(names, ["Goa"]);

        app.clear_search();
        assert_eq!(app.visible_regions().len(), 2);
    }
}
