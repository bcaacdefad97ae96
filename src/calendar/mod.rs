mod grid;
mod month;
mod widget;
pub(crate) use self::grid::{build_month_grid, select_event, upcoming_events, DayCell};
pub(crate) use self::month::{
    Direction, MonthExt, OutOfTimeError, YearMonth, DAYS_IN_WEEK,
};
pub(crate) use self::widget::MonthGrid;
