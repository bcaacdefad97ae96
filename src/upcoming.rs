use crate::calendar::MonthExt;
use crate::catalog::CalendarEvent;
use crate::theme::{category_style, BASE_STYLE, DIM_STYLE, TITLE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{HorizontalAlignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};

/// Sidebar listing the next few events of the year
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Upcoming<'a> {
    events: Vec<&'a CalendarEvent>,
}

impl<'a> Upcoming<'a> {
    pub(crate) fn new(events: Vec<&'a CalendarEvent>) -> Self {
        Upcoming { events }
    }

    fn to_text(&self) -> Text<'a> {
        if self.events.is_empty() {
            return Text::from(Line::styled("Nenhum evento", DIM_STYLE));
        }
        let mut lines = Vec::with_capacity(self.events.len() * 3);
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(vec![
                Span::styled("■ ", category_style(event.category)),
                Span::styled(event.title, BASE_STYLE),
            ]));
            lines.push(Line::styled(
                format!(
                    "  {} de {}",
                    event.day,
                    event.month.pt_name().to_lowercase()
                ),
                DIM_STYLE,
            ));
        }
        Text::from(lines)
    }
}

impl Widget for Upcoming<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.to_text())
            .block(
                Block::bordered()
                    .title(Span::styled(" PRÓXIMOS EVENTOS ", TITLE_STYLE))
                    .title_alignment(HorizontalAlignment::Center),
            )
            .style(BASE_STYLE)
            .render(area, buf);
    }
}
