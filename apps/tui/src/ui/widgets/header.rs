use crate::app::{App, AppScreen};
use crate::domain::ViewModel;
use crate::ui::widgets::palette::{ACCENT, ACCENT_SOFT, MUTED};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use ratatui::Frame;

pub const HEADER_HEIGHT: u16 = 4;

pub fn render_header(app: &App, view: &ViewModel, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let title = Paragraph::new(Text::from(vec![
        TextLine::from(Span::styled(
            "Covid-19 in India",
            Style::default()
                .fg(ACCENT_SOFT)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            "State-level Tracker Dashboard",
            Style::default().fg(MUTED),
        )),
    ]));
    f.render_widget(title, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(columns[1]);

    let tabs = Tabs::new(AppScreen::TITLES.iter().map(|title| TextLine::from(*title)))
        .select(app.screen.index())
        .style(Style::default().fg(MUTED))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, rows[0]);

    let refreshed = view.last_refreshed.map_or_else(
        || "Last refreshed: unknown".to_string(),
        |ts| format!("Last refreshed: {}", ts.format("%d %b %Y %H:%M UTC")),
    );
    f.render_widget(
        Paragraph::new(Span::styled(refreshed, Style::default().fg(MUTED)))
            .alignment(Alignment::Right),
        rows[1],
    );
}

pub fn render_shortcuts(f: &mut Frame<'_>, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(ACCENT_SOFT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {action}"), Style::default().fg(MUTED)));
    }

    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}
