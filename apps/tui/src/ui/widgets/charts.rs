use crate::domain::ViewModel;
use crate::ui::widgets::palette::{CONFIRMED, DEATHS, FRAME, MUTED, RECOVERED};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
    Paragraph,
};
use ratatui::Frame;

/// Borderless line over the ranked regions, as drawn inside a summary card.
#[allow(clippy::cast_precision_loss)]
pub fn render_trend_line(values: &[u64], color: Color, f: &mut Frame<'_>, area: Rect) {
    if values.is_empty() {
        return;
    }

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(index, value)| (index as f64, *value as f64))
        .collect();
    let max_x = (values.len().saturating_sub(1)).max(1) as f64;
    let max_y = values.iter().copied().max().unwrap_or(0).max(1) as f64;

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .x_axis(Axis::default().bounds([0.0, max_x]))
        .y_axis(Axis::default().bounds([0.0, max_y]));

    f.render_widget(chart, area);
}

/// Grouped confirmed / deaths / recovered bars for the top regions.
pub fn render_state_bar_chart(view: &ViewModel, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Covid-19 Statistics by State ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(FRAME));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    let legend = TextLine::from(vec![
        Span::styled(
            "Top 10 states by total confirmed cases   ",
            Style::default().fg(MUTED),
        ),
        Span::styled("■ confirmed ", Style::default().fg(CONFIRMED)),
        Span::styled("■ deaths ", Style::default().fg(DEATHS)),
        Span::styled("■ recovered", Style::default().fg(RECOVERED)),
    ]);
    f.render_widget(Paragraph::new(legend), rows[0]);

    let series = view.bar_series();
    if series.is_empty() {
        f.render_widget(
            Paragraph::new("No states reported")
                .alignment(Alignment::Center)
                .style(Style::default().fg(MUTED)),
            rows[1],
        );
        return;
    }

    let max_value = series
        .iter()
        .map(|datum| datum.confirmed.max(datum.deaths).max(datum.recovered))
        .max()
        .unwrap_or(0)
        .max(1);

    let groups = u16::try_from(series.len()).unwrap_or(u16::MAX);
    let bar_width = (rows[1].width.saturating_sub(groups) / groups.saturating_mul(3).max(1)).clamp(1, 4);

    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(1)
        .max(max_value);

    for datum in &series {
        let bars = [
            value_bar(datum.confirmed, CONFIRMED),
            value_bar(datum.deaths, DEATHS),
            value_bar(datum.recovered, RECOVERED),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(TextLine::from(short_label(&datum.name)))
                .bars(&bars),
        );
    }

    f.render_widget(chart, rows[1]);
}

fn value_bar(value: u64, color: Color) -> Bar<'static> {
    Bar::default()
        .value(value)
        .text_value(String::new())
        .style(Style::default().fg(color))
}

/// Axis label for a region: initials for multi-word names, otherwise the
/// first three letters.
pub fn short_label(name: &str) -> String {
    let words: Vec<&str> = name
        .split_whitespace()
        .filter(|word| !word.eq_ignore_ascii_case("and"))
        .collect();

    if words.len() > 1 {
        return words
            .iter()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
    }

    name.chars().take(3).collect()
}
