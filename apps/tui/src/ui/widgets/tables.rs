/// First row to draw so that `selected_index` stays inside a window of
/// `max_visible_rows`.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || max_visible_rows == 0 {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index + 1 - max_visible_rows;
    }

    0
}
