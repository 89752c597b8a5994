use crate::domain::ViewModel;
use crate::format::format_indian;
use crate::ui::widgets::palette::{DEATHS, FRAME, MUTED};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

// Longitude / latitude window around the subcontinent.
const LON_BOUNDS: [f64; 2] = [60.0, 100.0];
const LAT_BOUNDS: [f64; 2] = [5.0, 38.0];

pub fn render_map_panel(view: &ViewModel, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(TextLine::from(vec![
            Span::raw(" India Map "),
            Span::styled("(Total Cases) ", Style::default().fg(MUTED)),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(FRAME));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(8), Constraint::Length(14)])
        .split(columns[0]);

    let names: Vec<TextLine<'_>> = view
        .map_rows()
        .iter()
        .map(|region| TextLine::from(Span::styled(region.loc.as_str(), Style::default().fg(MUTED))))
        .collect();
    let counts: Vec<TextLine<'_>> = view
        .map_rows()
        .iter()
        .map(|region| {
            TextLine::from(Span::styled(
                format_indian(region.total_confirmed),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(Text::from(names)), rows[0]);
    f.render_widget(
        Paragraph::new(Text::from(counts)).alignment(Alignment::Right),
        rows[1],
    );

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(LON_BOUNDS)
        .y_bounds(LAT_BOUNDS)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::Gray,
                resolution: MapResolution::High,
            });
            ctx.print(
                78.0,
                22.0,
                Span::styled(
                    "● India",
                    Style::default().fg(DEATHS).add_modifier(Modifier::BOLD),
                ),
            );
        });
    f.render_widget(canvas, columns[1]);
}
