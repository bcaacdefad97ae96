use super::grid::DayCell;
use super::month::{MonthExt, DAYS_IN_WEEK};
use crate::catalog::Category;
use crate::theme::{
    category_style, ARROW_STYLE, BASE_STYLE, TITLE_STYLE, TODAY_MODIFIER, WEEKDAY_STYLE,
};
use crate::view::CalendarView;
use ratatui::{layout::Flex, prelude::*, widgets::*};
use std::marker::PhantomData;

static HEADER: &str = " Dom    Seg    Ter    Qua    Qui    Sex    Sáb ";

/// Width of the calendar in columns
pub(crate) const MAIN_WIDTH: u16 = 47;

/// Line on which the month and year are written
const TITLE_LINE: u16 = 0;

/// Line on which the weekday names are written, followed by a rule
const WEEKDAY_LINE: u16 = 2;

/// Number of lines taken up by the title, the weekday header, and its rule
const HEADER_LINES: u16 = 4;

/// Number of lines taken up by each week of the calendar
const WEEK_LINES: u16 = 2;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

/// Column, relative to the left edge of a day, of the marker shown on days
/// with events
const MARKER_OFFSET: u16 = 4;

const ACS_HLINE: char = '─';
const EVENT_MARKER: &str = "•";
const LEGEND_SWATCH: &str = "■";

/// The month grid of a `CalendarView`, followed by a legend of event
/// categories
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid<'a> {
    _data: PhantomData<CalendarView<'a>>,
}

impl MonthGrid<'_> {
    pub(crate) fn new() -> Self {
        MonthGrid { _data: PhantomData }
    }
}

impl<'a> StatefulWidget for MonthGrid<'a> {
    type State = CalendarView<'a>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [area] = Layout::horizontal([MAIN_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let mut canvas = BufferCanvas::new(area, buf);
        let visible = state.visible();
        canvas.draw_title(visible.month().pt_name(), visible.year());
        canvas.draw_header();
        let today = visible
            .contains(state.today())
            .then_some(state.today().day());
        let days_in_week = u16::from(DAYS_IN_WEEK);
        let mut weeks = 0;
        for (i, cell) in std::iter::zip(0u16.., state.grid()) {
            let (week_no, column) = (i / days_in_week, i % days_in_week);
            weeks = week_no + 1;
            if let DayCell::Day { day, .. } = cell {
                let style = cell
                    .events()
                    .first()
                    .map_or(BASE_STYLE, |e| category_style(e.category));
                let style = if today == Some(day) {
                    style.add_modifier(TODAY_MODIFIER)
                } else {
                    style
                };
                canvas.draw_day(week_no, column, show_day(day, day == state.cursor()), style);
                if cell.has_events() {
                    canvas.draw_marker(week_no, column, style);
                }
            }
        }
        canvas.draw_legend(HEADER_LINES + weeks * WEEK_LINES);
    }
}

fn show_day(day: u8, is_cursor: bool) -> String {
    if is_cursor {
        format!("[{day:2}]")
    } else {
        format!(" {day:2} ")
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, month: &str, year: i32) {
        let line = Line::from(vec![
            Span::styled("◀", ARROW_STYLE),
            Span::styled(format!("  {month} {year}  "), TITLE_STYLE),
            Span::styled("▶", ARROW_STYLE),
        ])
        .centered();
        if TITLE_LINE < self.area.height {
            line.render(
                Rect {
                    y: self.area.y + TITLE_LINE,
                    height: 1,
                    ..self.area
                },
                self.buf,
            );
        }
    }

    fn draw_header(&mut self) {
        self.mvprint(WEEKDAY_LINE, 0, HEADER, Some(WEEKDAY_STYLE));
        self.hline(WEEKDAY_LINE + 1, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, column: u16, s: String, style: Style) {
        self.mvprint(
            week_no * WEEK_LINES + HEADER_LINES,
            DAY_WIDTH * column,
            s,
            Some(style),
        );
    }

    fn draw_marker(&mut self, week_no: u16, column: u16, style: Style) {
        self.mvprint(
            week_no * WEEK_LINES + HEADER_LINES,
            DAY_WIDTH * column + MARKER_OFFSET,
            EVENT_MARKER,
            Some(style),
        );
    }

    fn draw_legend(&mut self, y: u16) {
        let mut x = 1;
        for category in Category::ALL {
            let entry = format!("{LEGEND_SWATCH} {}", category.label());
            let width = u16::try_from(entry.chars().count()).unwrap_or(u16::MAX);
            self.mvprint(y, x, entry, Some(category_style(category)));
            x = x.saturating_add(width).saturating_add(3);
        }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
