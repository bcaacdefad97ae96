use super::month::YearMonth;
use crate::catalog::CalendarEvent;
use time::Month;

/// One slot of a Sunday-first month grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum DayCell<'a> {
    /// Padding before the first day of the month
    Blank,
    Day {
        day: u8,
        /// Events falling on this day, in catalog order
        events: Vec<&'a CalendarEvent>,
    },
}

impl<'a> DayCell<'a> {
    pub(crate) fn day(&self) -> Option<u8> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { day, .. } => Some(*day),
        }
    }

    pub(crate) fn events(&self) -> &[&'a CalendarEvent] {
        match self {
            DayCell::Blank => &[],
            DayCell::Day { events, .. } => events,
        }
    }

    pub(crate) fn has_events(&self) -> bool {
        !self.events().is_empty()
    }
}

/// Lays out `year_month` as leading blanks followed by every day of the month
/// in order, each paired with its events from `catalog`
pub(crate) fn build_month_grid<'a>(
    year_month: YearMonth,
    catalog: &'a [CalendarEvent],
) -> Vec<DayCell<'a>> {
    let offset = usize::from(year_month.first_weekday_offset());
    let days = year_month.days_in_month();
    let mut cells = Vec::with_capacity(offset + usize::from(days));
    cells.resize(offset, DayCell::Blank);
    cells.extend((1..=days).map(|day| DayCell::Day {
        day,
        events: catalog
            .iter()
            .filter(|e| e.month == year_month.month() && e.day == day)
            .collect(),
    }));
    cells
}

/// The event shown for a day when the day is activated: the first one in
/// catalog order
pub(crate) fn select_event<'a>(cell: &DayCell<'a>) -> Option<&'a CalendarEvent> {
    cell.events().first().copied()
}

/// Events from `from_month` through December in chronological order, at most
/// `limit` of them.  Events earlier in the year are not wrapped around.
pub(crate) fn upcoming_events(
    catalog: &[CalendarEvent],
    from_month: Month,
    limit: usize,
) -> Vec<&CalendarEvent> {
    let mut events = catalog
        .iter()
        .filter(|e| u8::from(e.month) >= u8::from(from_month))
        .collect::<Vec<_>>();
    // Stable, so same-day events stay in catalog order
    events.sort_by_key(|e| e.sort_key());
    events.truncate(limit);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, SCHOOL_YEAR};
    use time::Month::*;

    static NEW_YEAR: &[CalendarEvent] =
        &[CalendarEvent::new(1, January, "Ano Novo", Category::Holiday)];

    static SAME_DAY: &[CalendarEvent] = &[
        CalendarEvent::new(12, October, "N. Sra. Aparecida", Category::Holiday),
        CalendarEvent::new(3, October, "Prova de Geografia", Category::Exam),
        CalendarEvent::new(12, October, "Dia das Crianças", Category::SchoolEvent),
    ];

    fn ym(year: i32, month: Month) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_grid_shape() {
        for year in [2023, 2024, 2025] {
            for month in [
                January, February, March, April, May, June, July, August, September, October,
                November, December,
            ] {
                let year_month = ym(year, month);
                let offset = usize::from(year_month.first_weekday_offset());
                let grid = build_month_grid(year_month, SCHOOL_YEAR);
                assert_eq!(grid.len(), offset + usize::from(year_month.days_in_month()));
                assert!(grid[..offset].iter().all(|c| *c == DayCell::Blank));
                let days = grid[offset..]
                    .iter()
                    .map(DayCell::day)
                    .collect::<Option<Vec<_>>>()
                    .unwrap();
                assert_eq!(days, (1..=year_month.days_in_month()).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_grid_events_on_day() {
        // January 2025 starts on a Wednesday
        let grid = build_month_grid(ym(2025, January), NEW_YEAR);
        assert_eq!(grid[2], DayCell::Blank);
        assert_eq!(grid[3].day(), Some(1));
        assert_eq!(grid[3].events(), [&NEW_YEAR[0]]);
        assert_eq!(grid[4].day(), Some(2));
        assert!(!grid[4].has_events());
    }

    #[test]
    fn test_grid_ignores_other_months() {
        let grid = build_month_grid(ym(2025, February), NEW_YEAR);
        assert!(grid.iter().all(|c| !c.has_events()));
    }

    #[test]
    fn test_grid_idempotent() {
        let october = ym(2025, October);
        assert_eq!(
            build_month_grid(october, SCHOOL_YEAR),
            build_month_grid(october, SCHOOL_YEAR)
        );
    }

    #[test]
    fn test_select_event_tie_break() {
        let grid = build_month_grid(ym(2025, October), SAME_DAY);
        let cell = grid.iter().find(|c| c.day() == Some(12)).unwrap();
        assert_eq!(cell.events().len(), 2);
        for _ in 0..3 {
            assert_eq!(select_event(cell), Some(&SAME_DAY[0]));
        }
    }

    #[test]
    fn test_select_event_empty() {
        let grid = build_month_grid(ym(2025, October), SAME_DAY);
        assert_eq!(select_event(&grid[0]), None);
        let cell = grid.iter().find(|c| c.day() == Some(13)).unwrap();
        assert_eq!(select_event(cell), None);
    }

    #[test]
    fn test_upcoming_sorted_and_limited() {
        let upcoming = upcoming_events(SCHOOL_YEAR, October, 5)
            .into_iter()
            .map(|e| (e.day, e.month, e.title))
            .collect::<Vec<_>>();
        assert_eq!(
            upcoming,
            [
                (12, October, "N. Sra. Aparecida"),
                (12, October, "Dia das Crianças"),
                (2, November, "Finados"),
                (15, November, "Proclamação da República"),
                (20, November, "Consciência Negra"),
            ]
        );
    }

    #[test]
    fn test_upcoming_sorts_within_month() {
        let upcoming = upcoming_events(SAME_DAY, January, 10)
            .into_iter()
            .map(|e| e.title)
            .collect::<Vec<_>>();
        assert_eq!(
            upcoming,
            ["Prova de Geografia", "N. Sra. Aparecida", "Dia das Crianças"]
        );
    }

    #[test]
    fn test_upcoming_does_not_wrap() {
        assert!(upcoming_events(SAME_DAY, December, 5).is_empty());
        assert!(upcoming_events(NEW_YEAR, February, 5).is_empty());
        let december = upcoming_events(SCHOOL_YEAR, December, 5);
        assert_eq!(
            december.iter().map(|e| e.title).collect::<Vec<_>>(),
            ["Início Férias", "Natal"]
        );
    }

    #[test]
    fn test_upcoming_zero_limit() {
        assert!(upcoming_events(SCHOOL_YEAR, January, 0).is_empty());
    }
}
