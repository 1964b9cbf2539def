use ratatui::style::{Color, Modifier, Style};

pub(crate) const HEADER_BG: Color = Color::Rgb(24, 26, 33);
pub(crate) const HEADER_FG: Color = Color::Rgb(214, 219, 230);
pub(crate) const ACCENT: Color = Color::Rgb(4, 196, 217);
pub(crate) const GREEN: Color = Color::Rgb(134, 188, 111);
pub(crate) const RED: Color = Color::Rgb(224, 108, 117);
pub(crate) const YELLOW: Color = Color::Rgb(217, 176, 54);
pub(crate) const SURFACE: Color = Color::Rgb(40, 44, 52);
pub(crate) const TEXT: Color = Color::Rgb(214, 219, 230);
pub(crate) const TEXT_DIM: Color = Color::Rgb(120, 128, 142);
pub(crate) const OVERLAY: Color = Color::Rgb(62, 68, 81);
pub(crate) const COMMAND_BG: Color = Color::Rgb(19, 21, 26);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn focused_field_style() -> Style {
    Style::default().fg(HEADER_BG).bg(YELLOW)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}
