use crate::ui::widgets::palette::{ACCENT_SOFT, MUTED};
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

const KEYS: [(&str, &str); 8] = [
    ("Tab / 1 / 2", "Switch between dashboard and regions"),
    ("↑ ↓ / j k", "Move the region selection"),
    ("Home / End", "Jump to first / last region"),
    ("/", "Search states"),
    ("c", "Clear the search"),
    ("F1 / ?", "Toggle this help"),
    ("Esc", "Close help or search"),
    ("q", "Quit"),
];

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(ClearWidget, popup);

    let mut lines = vec![TextLine::from("")];
    lines.extend(KEYS.iter().map(|(key, action)| {
        TextLine::from(vec![
            Span::styled(
                format!("  {key:<14}"),
                Style::default()
                    .fg(ACCENT_SOFT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(MUTED)),
        ])
    }));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_SOFT));

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
