use crate::catalog::Category;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const ARROW_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const HOLIDAY_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const SCHOOL_EVENT_STYLE: Style = Style::new()
    .fg(Color::LightCyan)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const EXAM_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const RECESS_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const TODAY_MODIFIER: Modifier = Modifier::UNDERLINED;

pub(crate) const DIM_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) fn category_style(category: Category) -> Style {
    match category {
        Category::Holiday => HOLIDAY_STYLE,
        Category::SchoolEvent => SCHOOL_EVENT_STYLE,
        Category::Exam => EXAM_STYLE,
        Category::Recess => RECESS_STYLE,
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}

pub(crate) mod detail {
    use super::*;

    pub(crate) const BUTTON_STYLE: Style = BASE_STYLE
        .add_modifier(Modifier::BOLD)
        .add_modifier(Modifier::REVERSED);
}
