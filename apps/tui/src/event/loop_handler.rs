use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::api::StatsSummary;
use crate::app::{handle_input, App, LoadState};
use crate::domain::{is_high_mortality, ViewModel};
use crate::format::format_indian;
use crate::ui;

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.start_fetch();
    app.wait_for_fetch().await;

    match &app.load_state {
        LoadState::Ready(view) => {
            if json {
                render_headless_json(view)?;
            } else {
                render_headless_stats(view);
            }
            Ok(())
        }
        LoadState::Failed(error) => Err(eyre!(error.user_message())),
        LoadState::Loading => Err(eyre!("Fetch did not settle")),
    }
}

fn render_headless_stats(view: &ViewModel) {
    println!("\nCovid-19 in India");
    println!("=================");
    if let Some(refreshed) = view.last_refreshed {
        println!("Last refreshed: {}", refreshed.format("%d %b %Y %H:%M UTC"));
    }
    println!("Total confirmed: {}", format_indian(view.summary.total));
    println!("Total deaths: {}", format_indian(view.summary.deaths));
    println!("Total recovered: {}", format_indian(view.summary.discharged));

    println!("\nTop {} states by confirmed cases:", view.top_regions.len());
    for (rank, region) in view.top_regions.iter().enumerate() {
        let marker = if is_high_mortality(region) { "!" } else { " " };
        println!(
            "{marker}{:>2}. {} | {} confirmed | {} deaths | {} recovered",
            rank + 1,
            region.loc,
            format_indian(region.total_confirmed),
            format_indian(region.deaths),
            format_indian(region.discharged),
        );
    }
}

fn render_headless_json(view: &ViewModel) -> Result<()> {
    let report = HeadlessReport::from(view);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct HeadlessReport<'a> {
    summary: &'a StatsSummary,
    top_regions: Vec<HeadlessRegion<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_refreshed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_origin_update: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct HeadlessRegion<'a> {
    rank: usize,
    loc: &'a str,
    total_confirmed: u64,
    deaths: u64,
    discharged: u64,
    active: u64,
}

impl<'a> From<&'a ViewModel> for HeadlessReport<'a> {
    fn from(view: &'a ViewModel) -> Self {
        let top_regions = view
            .top_regions
            .iter()
            .enumerate()
            .map(|(index, region)| HeadlessRegion {
                rank: index + 1,
                loc: &region.loc,
                total_confirmed: region.total_confirmed,
                deaths: region.deaths,
                discharged: region.discharged,
                active: region.active(),
            })
            .collect();

        Self {
            summary: &view.summary,
            top_regions,
            last_refreshed: view.last_refreshed.map(|ts| ts.to_rfc3339()),
            last_origin_update: view.last_origin_update.map(|ts| ts.to_rfc3339()),
        }
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    app.start_fetch();

    loop {
        // Settle the fetch if it finished and advance the throbber
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Non-fatal; the next frame redraws anyway
                    let _ = terminal.draw(|f| ui::ui(app, f));
                }
                Ok(_) | Err(_) => {}
            }
        }

        // Let the fetch task make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
