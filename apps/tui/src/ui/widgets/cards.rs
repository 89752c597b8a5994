use crate::format::format_indian;
use crate::ui::widgets::charts::render_trend_line;
use crate::ui::widgets::palette::{FRAME, MUTED};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// One of the headline figures at the top of the dashboard.
pub struct SummaryCard<'a> {
    pub value: u64,
    pub label: &'a str,
    pub color: Color,
    pub trend: Vec<u64>,
}

pub fn render_summary_card(card: &SummaryCard<'_>, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(FRAME));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(11)])
        .split(rows[0]);

    f.render_widget(
        Paragraph::new(Span::styled(
            format_indian(card.value),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        top[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled("All India", Style::default().fg(card.color)))
            .alignment(Alignment::Right),
        top[1],
    );
    f.render_widget(
        Paragraph::new(Span::styled(card.label, Style::default().fg(MUTED))),
        rows[1],
    );

    render_trend_line(&card.trend, card.color, f, rows[2]);
}
