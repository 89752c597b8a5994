use crate::api::DashboardError;
use crate::ui::widgets::palette::{ACCENT_SOFT, CONFIRMED, DEATHS, FRAME, MUTED};
use crate::ui::widgets::popup::centered_line;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

fn frame_block() -> Block<'static> {
    Block::default()
        .title(Span::styled(
            " Covid-19 in India ",
            Style::default()
                .fg(ACCENT_SOFT)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(FRAME))
}

pub fn render_loading(f: &mut Frame<'_>, area: Rect, state: &mut ThrobberState) {
    let block = frame_block();
    let inner = block.inner(area);
    f.render_widget(block, area);

    let throbber = Throbber::default()
        .label("Loading...")
        .style(Style::default().fg(MUTED))
        .throbber_style(
            Style::default()
                .fg(CONFIRMED)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    f.render_stateful_widget(throbber, centered_line(14, inner), state);
}

pub fn render_failed(error: &DashboardError, endpoint: &str, f: &mut Frame<'_>, area: Rect) {
    let block = frame_block();
    let inner = block.inner(area);
    f.render_widget(block, area);

    let message_style = if error.is_no_data() {
        Style::default().fg(MUTED)
    } else {
        Style::default().fg(DEATHS)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(inner);

    let text = Text::from(vec![
        TextLine::from(Span::styled(error.user_message(), message_style)),
        TextLine::from(Span::styled(
            format!("Source: {endpoint}"),
            Style::default().fg(MUTED),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled("Press q to quit", Style::default().fg(MUTED))),
    ]);

    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );
}
