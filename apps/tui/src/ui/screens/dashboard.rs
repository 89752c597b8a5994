use crate::app::App;
use crate::domain::{is_high_mortality, ViewModel};
use crate::format::format_indian;
use crate::ui::widgets::cards::{render_summary_card, SummaryCard};
use crate::ui::widgets::charts::render_state_bar_chart;
use crate::ui::widgets::header::{render_header, render_shortcuts, HEADER_HEIGHT};
use crate::ui::widgets::map::render_map_panel;
use crate::ui::widgets::palette::{ACCENT, ACCENT_SOFT, CONFIRMED, DEATHS, FRAME, MUTED, RECOVERED};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 4] = [
    ("Tab", "regions"),
    ("/", "search"),
    ("F1", "help"),
    ("q", "quit"),
];

pub fn render_dashboard(app: &App, view: &ViewModel, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Charts and lists
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(app, view, f, layout[0]);
    render_cards(view, f, layout[1]);
    render_body(view, f, layout[2]);
    render_shortcuts(f, layout[3], &SHORTCUTS);
}

fn render_cards(view: &ViewModel, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        SummaryCard {
            value: view.summary.total,
            label: "Total Confirmed Cases",
            color: CONFIRMED,
            trend: view.series(|region| region.total_confirmed),
        },
        SummaryCard {
            value: view.summary.deaths,
            label: "Total Deaths",
            color: DEATHS,
            trend: view.series(|region| region.deaths),
        },
        SummaryCard {
            value: view.summary.discharged,
            label: "Total Recovered",
            color: RECOVERED,
            trend: view.series(|region| region.discharged),
        },
    ];

    for (card, area) in cards.iter().zip(columns.iter()) {
        render_summary_card(card, f, *area);
    }
}

fn render_body(view: &ViewModel, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[1]);

    render_state_bar_chart(view, f, top[0]);
    render_state_updates(view, f, top[1]);
    render_map_panel(view, f, bottom[0]);
    render_prevention(f, bottom[1]);
}

fn render_state_updates(view: &ViewModel, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(TextLine::from(vec![
            Span::raw(" State Updates "),
            Span::styled("(Total Cases) ", Style::default().fg(MUTED)),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(FRAME));

    let lines: Vec<TextLine<'_>> = view
        .updates()
        .iter()
        .map(|region| {
            let dot = if is_high_mortality(region) { DEATHS } else { CONFIRMED };
            TextLine::from(vec![
                Span::styled("● ", Style::default().fg(dot)),
                Span::styled(
                    format!("{} cases", format_indian(region.total_confirmed)),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" in {}", region.loc), Style::default().fg(MUTED)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_prevention(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(ACCENT));

    let heading = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(ACCENT_SOFT);

    let text = Text::from(vec![
        TextLine::from(Span::styled("Prevention", heading)),
        TextLine::from(Span::styled("Learn about COVID-19", body)),
        TextLine::from(Span::styled("prevention measures", body)),
        TextLine::from(""),
        TextLine::from(Span::styled("• Wash hands often", body)),
        TextLine::from(Span::styled("• Mask up in crowds", body)),
        TextLine::from(Span::styled("• Keep your distance", body)),
        TextLine::from(Span::styled("→", heading)),
    ]);

    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
