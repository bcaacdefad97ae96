use time::Month::{self, *};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Category {
    Holiday,
    SchoolEvent,
    Exam,
    Recess,
}

impl Category {
    pub(crate) const ALL: [Category; 4] = [
        Category::Holiday,
        Category::SchoolEvent,
        Category::Exam,
        Category::Recess,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Category::Holiday => "Feriado",
            Category::SchoolEvent => "Evento",
            Category::Exam => "Prova",
            Category::Recess => "Recesso",
        }
    }
}

/// A dated entry of the school calendar.  Events recur every year on the same
/// month and day.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct CalendarEvent {
    pub(crate) day: u8,
    pub(crate) month: Month,
    pub(crate) title: &'static str,
    pub(crate) category: Category,
}

impl CalendarEvent {
    pub(crate) const fn new(
        day: u8,
        month: Month,
        title: &'static str,
        category: Category,
    ) -> CalendarEvent {
        CalendarEvent {
            day,
            month,
            title,
            category,
        }
    }

    /// Key by which events are listed chronologically
    pub(crate) fn sort_key(&self) -> (u8, u8) {
        (u8::from(self.month), self.day)
    }
}

/// National holidays followed by school events, in the order the school
/// publishes them.  The order matters: when two events fall on the same day,
/// the one listed first represents that day.
pub(crate) static SCHOOL_YEAR: &[CalendarEvent] = &[
    CalendarEvent::new(1, January, "Ano Novo", Category::Holiday),
    CalendarEvent::new(20, January, "São Sebastião", Category::Holiday),
    CalendarEvent::new(25, February, "Carnaval", Category::Holiday),
    CalendarEvent::new(26, February, "Carnaval", Category::Holiday),
    CalendarEvent::new(29, March, "Paixão de Cristo", Category::Holiday),
    CalendarEvent::new(21, April, "Tiradentes", Category::Holiday),
    CalendarEvent::new(1, May, "Dia do Trabalho", Category::Holiday),
    CalendarEvent::new(19, June, "Corpus Christi", Category::Holiday),
    CalendarEvent::new(7, September, "Independência", Category::Holiday),
    CalendarEvent::new(12, October, "N. Sra. Aparecida", Category::Holiday),
    CalendarEvent::new(2, November, "Finados", Category::Holiday),
    CalendarEvent::new(15, November, "Proclamação da República", Category::Holiday),
    CalendarEvent::new(20, November, "Consciência Negra", Category::Holiday),
    CalendarEvent::new(25, December, "Natal", Category::Holiday),
    CalendarEvent::new(3, February, "Início das Aulas", Category::SchoolEvent),
    CalendarEvent::new(15, March, "Feira de Ciências", Category::SchoolEvent),
    CalendarEvent::new(10, June, "Festa Junina", Category::SchoolEvent),
    CalendarEvent::new(1, July, "Início Recesso", Category::Recess),
    CalendarEvent::new(31, July, "Fim Recesso", Category::Recess),
    CalendarEvent::new(20, September, "Olimpíada de Matemática", Category::SchoolEvent),
    CalendarEvent::new(12, October, "Dia das Crianças", Category::SchoolEvent),
    CalendarEvent::new(25, November, "Formatura", Category::SchoolEvent),
    CalendarEvent::new(20, December, "Início Férias", Category::Recess),
];
