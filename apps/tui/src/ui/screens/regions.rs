use crate::app::App;
use crate::domain::{is_high_mortality, ViewModel};
use crate::format::format_indian;
use crate::ui::widgets::header::{render_header, render_shortcuts, HEADER_HEIGHT};
use crate::ui::widgets::palette::{ACCENT, CONFIRMED, DEATHS, FRAME, MUTED, RECOVERED};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

const BROWSE_SHORTCUTS: [(&str, &str); 5] = [
    ("↑/↓", "select"),
    ("/", "search"),
    ("c", "clear"),
    ("Tab", "dashboard"),
    ("q", "quit"),
];
const SEARCH_SHORTCUTS: [(&str, &str); 3] = [("Enter", "done"), ("Esc", "clear"), ("⌫", "delete")];

pub fn render_regions(app: &App, view: &ViewModel, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(3), // Search box
            Constraint::Min(5),    // Region table
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(app, view, f, layout[0]);
    render_search_box(app, f, layout[1]);
    render_region_table(app, view, f, layout[2]);

    if app.searching {
        render_shortcuts(f, layout[3], &SEARCH_SHORTCUTS);
    } else {
        render_shortcuts(f, layout[3], &BROWSE_SHORTCUTS);
    }
}

fn render_search_box(app: &App, f: &mut Frame<'_>, area: Rect) {
    let border = if app.searching { Color::Yellow } else { FRAME };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let line = if app.search_input.is_empty() && !app.searching {
        TextLine::from(Span::styled("Search states...", Style::default().fg(MUTED)))
    } else {
        let cursor = if app.searching { "_" } else { "" };
        TextLine::from(vec![
            Span::styled("Search: ", Style::default().fg(MUTED)),
            Span::styled(
                format!("{}{cursor}", app.search_input),
                Style::default().fg(Color::White),
            ),
        ])
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_region_table(app: &App, view: &ViewModel, f: &mut Frame<'_>, area: Rect) {
    let regions = app.visible_regions();

    let block = Block::default()
        .title(format!(
            " States & UTs ({} of {}) ",
            regions.len(),
            view.ranked_regions.len()
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(FRAME));

    if regions.is_empty() {
        let paragraph = Paragraph::new("No states match the search")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(MUTED));
        f.render_widget(paragraph, area);
        return;
    }

    // Borders plus the header row
    let max_visible_rows = usize::from(area.height.saturating_sub(3));
    let selected = app.selected_region_index.min(regions.len() - 1);
    let offset = scroll_offset(regions.len(), max_visible_rows, selected);

    let rows: Vec<Row<'_>> = regions
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, region)| {
            let rank = view
                .ranked_regions
                .iter()
                .position(|candidate| std::ptr::eq(candidate, *region))
                .map_or_else(String::new, |position| (position + 1).to_string());
            let death_color = if is_high_mortality(region) { DEATHS } else { Color::White };

            let row = Row::new(vec![
                Cell::from(rank),
                Cell::from(region.loc.as_str()),
                Cell::from(Span::styled(
                    format_indian(region.total_confirmed),
                    Style::default().fg(CONFIRMED),
                )),
                Cell::from(format_indian(region.active())),
                Cell::from(Span::styled(
                    format_indian(region.discharged),
                    Style::default().fg(RECOVERED),
                )),
                Cell::from(Span::styled(
                    format_indian(region.deaths),
                    Style::default().fg(death_color),
                )),
            ]);

            if index == selected {
                row.style(Style::default().bg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let header = Row::new(vec![
        "#", "State / UT", "Confirmed", "Active", "Recovered", "Deaths",
    ])
    .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
