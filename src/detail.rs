use crate::calendar::MonthExt;
use crate::catalog::CalendarEvent;
use crate::theme::{category_style, detail::BUTTON_STYLE, BASE_STYLE, DIM_STYLE, TITLE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, HorizontalAlignment, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Minimum number of columns between the popup's borders
const MIN_INNER_WIDTH: u16 = 24;

/// Popup showing a single selected event
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct EventDetail<'a> {
    event: &'a CalendarEvent,
    year: i32,
}

impl<'a> EventDetail<'a> {
    pub(crate) fn new(event: &'a CalendarEvent, year: i32) -> Self {
        EventDetail { event, year }
    }

    /*
     * ┌──────── Natal ─────────┐
     * │                        │
     * │        Feriado         │
     * │ 25 de DEZEMBRO de 2026 │
     * │                        │
     * │        [FECHAR]        │
     * └────────────────────────┘
     */

    fn to_text(self) -> Text<'a> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            Line::styled(self.event.category.label(), category_style(self.event.category)),
            Line::styled(
                format!(
                    "{} de {} de {}",
                    self.event.day,
                    self.event.month.pt_name(),
                    self.year
                ),
                DIM_STYLE,
            ),
            Line::styled("", BASE_STYLE),
            Line::from(Span::styled("[FECHAR]", BUTTON_STYLE)),
        ])
        .centered()
    }
}

impl Widget for EventDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.to_text();
        let title = format!(" {} ", self.event.title);
        let inner_width = u16::try_from(text.width().max(title.chars().count()))
            .unwrap_or(u16::MAX)
            .max(MIN_INNER_WIDTH);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let width = inner_width.saturating_add(2).min(area.width);
        let [popup_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [popup_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(popup_area);
        Clear.render(popup_area, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(Span::styled(title, TITLE_STYLE))
                    .title_alignment(HorizontalAlignment::Center),
            )
            .style(BASE_STYLE)
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use time::Month;

    static NATAL: CalendarEvent = CalendarEvent::new(25, Month::December, "Natal", Category::Holiday);

    #[test]
    fn test_text() {
        let text = EventDetail::new(&NATAL, 2026).to_text();
        let lines = text.lines.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            lines,
            ["", "Feriado", "25 de DEZEMBRO de 2026", "", "[FECHAR]"]
        );
    }

    #[test]
    fn test_render_centered() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buffer = Buffer::empty(area);
        EventDetail::new(&NATAL, 2026).render(area, &mut buffer);
        let rows = (0..20)
            .map(|y| (0..60).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>();
        let top = rows.iter().position(|r| r.contains(" Natal ")).unwrap();
        let border = rows[top].trim();
        assert!(border.starts_with('┌'));
        assert!(border.ends_with('┐'));
        assert_eq!(border.chars().count(), 26);
        assert_eq!(rows[top + 3].trim(), "│ 25 de DEZEMBRO de 2026 │");
        assert!(rows[top + 5].contains("[FECHAR]"));
        assert!(rows[top + 6].trim().starts_with('└'));
        assert_eq!(rows[0].trim(), "");
    }
}
