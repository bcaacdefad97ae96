use thiserror::Error;
use time::{util::is_leap_year, Date, Month};

pub(crate) const DAYS_IN_WEEK: u8 = 7;

pub(crate) trait MonthExt {
    /// Upper-case Portuguese name of the month, as shown in the calendar
    /// title and the event detail popup
    fn pt_name(&self) -> &'static str;
}

impl MonthExt for Month {
    fn pt_name(&self) -> &'static str {
        match self {
            Month::January => "JANEIRO",
            Month::February => "FEVEREIRO",
            Month::March => "MARÇO",
            Month::April => "ABRIL",
            Month::May => "MAIO",
            Month::June => "JUNHO",
            Month::July => "JULHO",
            Month::August => "AGOSTO",
            Month::September => "SETEMBRO",
            Month::October => "OUTUBRO",
            Month::November => "NOVEMBRO",
            Month::December => "DEZEMBRO",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Number of days in the given month of the proleptic Gregorian calendar
pub(crate) fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

pub(crate) fn advance_month(month: Month, direction: Direction) -> Month {
    match direction {
        Direction::Forward => month.next(),
        Direction::Backward => month.previous(),
    }
}

/// A month of a specific year, stored as the date of its first day
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct YearMonth(Date);

impl YearMonth {
    pub(crate) fn new(year: i32, month: Month) -> Result<YearMonth, OutOfTimeError> {
        Date::from_calendar_date(year, month, 1)
            .map(YearMonth)
            .map_err(|_| OutOfTimeError)
    }

    pub(crate) fn containing(date: Date) -> YearMonth {
        YearMonth(
            date.replace_day(1)
                .expect("every month should have a first day"),
        )
    }

    pub(crate) fn year(&self) -> i32 {
        self.0.year()
    }

    pub(crate) fn month(&self) -> Month {
        self.0.month()
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub(crate) fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// Weekday of the first of the month, counted from Sunday = 0; this is
    /// the number of blank cells before day 1 in a Sunday-first grid
    pub(crate) fn first_weekday_offset(&self) -> u8 {
        self.0.weekday().number_days_from_sunday()
    }

    /// Moves one month in the given direction, carrying the year over when
    /// wrapping between December and January
    pub(crate) fn advance(&self, direction: Direction) -> Result<YearMonth, OutOfTimeError> {
        let month = advance_month(self.month(), direction);
        let year = match (direction, month) {
            (Direction::Forward, Month::January) => self.year() + 1,
            (Direction::Backward, Month::December) => self.year() - 1,
            _ => self.year(),
        };
        YearMonth::new(year, month)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
