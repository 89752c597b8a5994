use ratatui::style::Color;

pub const CONFIRMED: Color = Color::Rgb(6, 182, 212);
pub const DEATHS: Color = Color::Rgb(239, 68, 68);
pub const RECOVERED: Color = Color::Rgb(34, 197, 94);
pub const ACCENT: Color = Color::Rgb(67, 56, 202);
pub const ACCENT_SOFT: Color = Color::Rgb(199, 210, 254);
pub const MUTED: Color = Color::Gray;
pub const FRAME: Color = Color::DarkGray;
