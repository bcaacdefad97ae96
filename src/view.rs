use crate::calendar::{
    build_month_grid, select_event, upcoming_events, DayCell, Direction, OutOfTimeError,
    YearMonth, DAYS_IN_WEEK,
};
use crate::catalog::CalendarEvent;
use time::Date;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Selection<'a> {
    #[default]
    None,
    Event(&'a CalendarEvent),
}

/// Navigation and selection state of the month calendar
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarView<'a> {
    catalog: &'a [CalendarEvent],
    today: Date,
    visible: YearMonth,
    // Invariant: always a day of `visible`
    cursor: u8,
    selection: Selection<'a>,
}

impl<'a> CalendarView<'a> {
    pub(crate) fn new(catalog: &'a [CalendarEvent], today: Date) -> Self {
        CalendarView {
            catalog,
            today,
            visible: YearMonth::containing(today),
            cursor: today.day(),
            selection: Selection::None,
        }
    }

    /// Start on the month containing `date`, with the cursor on that date
    pub(crate) fn start_date(mut self, date: Date) -> Self {
        self.visible = YearMonth::containing(date);
        self.cursor = date.day();
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn visible(&self) -> YearMonth {
        self.visible
    }

    pub(crate) fn cursor(&self) -> u8 {
        self.cursor
    }

    pub(crate) fn selected_event(&self) -> Option<&'a CalendarEvent> {
        match self.selection {
            Selection::None => None,
            Selection::Event(event) => Some(event),
        }
    }

    pub(crate) fn grid(&self) -> Vec<DayCell<'a>> {
        build_month_grid(self.visible, self.catalog)
    }

    pub(crate) fn upcoming(&self, limit: usize) -> Vec<&'a CalendarEvent> {
        upcoming_events(self.catalog, self.visible.month(), limit)
    }

    pub(crate) fn next_month(&mut self) -> Result<(), OutOfTimeError> {
        self.advance(Direction::Forward)
    }

    pub(crate) fn previous_month(&mut self) -> Result<(), OutOfTimeError> {
        self.advance(Direction::Backward)
    }

    // Deliberately leaves `selection` alone
    fn advance(&mut self, direction: Direction) -> Result<(), OutOfTimeError> {
        let month = self.visible.advance(direction)?;
        self.show_month(month);
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.visible = YearMonth::containing(self.today);
        self.cursor = self.today.day();
        log::debug!("Jumped to today ({})", self.today);
    }

    pub(crate) fn jump_to(&mut self, month: YearMonth) {
        self.show_month(month);
    }

    fn show_month(&mut self, month: YearMonth) {
        self.visible = month;
        self.cursor = self.cursor.min(month.days_in_month());
        log::debug!("Showing {} {}", month.month(), month.year());
    }

    pub(crate) fn cursor_left(&mut self) -> bool {
        self.move_cursor(-1)
    }

    pub(crate) fn cursor_right(&mut self) -> bool {
        self.move_cursor(1)
    }

    pub(crate) fn cursor_up(&mut self) -> bool {
        self.move_cursor(-WEEK)
    }

    pub(crate) fn cursor_down(&mut self) -> bool {
        self.move_cursor(WEEK)
    }

    // Returns `false` if the cursor would leave the visible month
    fn move_cursor(&mut self, delta: i16) -> bool {
        let target = i16::from(self.cursor) + delta;
        match u8::try_from(target) {
            Ok(day) if (1..=self.visible.days_in_month()).contains(&day) => {
                self.cursor = day;
                true
            }
            _ => false,
        }
    }

    /// Select the representative event of the day under the cursor.  Returns
    /// `false`, leaving the selection unchanged, if that day has no events.
    pub(crate) fn activate(&mut self) -> bool {
        let grid = self.grid();
        let Some(cell) = grid.iter().find(|c| c.day() == Some(self.cursor)) else {
            return false;
        };
        if let Some(event) = select_event(cell) {
            log::debug!("Selected {event:?}");
            self.selection = Selection::Event(event);
            true
        } else {
            false
        }
    }

    /// Clear the selection.  Returns `false` if nothing was selected.
    pub(crate) fn dismiss(&mut self) -> bool {
        let was_selected = std::mem::take(&mut self.selection) != Selection::None;
        if was_selected {
            log::debug!("Dismissed event detail");
        }
        was_selected
    }
}

const WEEK: i16 = DAYS_IN_WEEK as i16;
