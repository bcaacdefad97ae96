use crate::calendar::MonthGrid;
use crate::detail::EventDetail;
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::theme::BASE_STYLE;
use crate::upcoming::Upcoming;
use crate::view::CalendarView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, read};
use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};
use std::io::{self, Write};

/// Columns given to the upcoming-events sidebar
const SIDEBAR_WIDTH: u16 = 30;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<'a> {
    view: CalendarView<'a>,
    upcoming_limit: usize,
    state: AppState,
}

impl<'a> App<'a> {
    pub(crate) fn new(view: CalendarView<'a>, upcoming_limit: usize) -> App<'a> {
        App {
            view,
            upcoming_limit,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        if self.view.selected_event().is_some() {
            // Any key closes the event detail
            return self.view.dismiss();
        }
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.view.cursor_left(),
                KeyCode::Char('l') | KeyCode::Right => self.view.cursor_right(),
                KeyCode::Char('k') | KeyCode::Up => self.view.cursor_up(),
                KeyCode::Char('j') | KeyCode::Down => self.view.cursor_down(),
                KeyCode::Char('n') | KeyCode::PageDown => self.view.next_month().is_ok(),
                KeyCode::Char('p') | KeyCode::PageUp => self.view.previous_month().is_ok(),
                KeyCode::Enter | KeyCode::Char(' ') => self.view.activate(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.view.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c @ '0'..='9') => match c.to_digit(10).map(u8::try_from) {
                            Some(Ok(d)) => state.handle_input(JumpToInput::Digit(d)),
                            _ => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(month) => {
                            self.state = AppState::Calendar;
                            self.view.jump_to(month);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [calendar_area, sidebar_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDEBAR_WIDTH)])
                .areas(area);
        MonthGrid::new().render(calendar_area, buf, &mut self.view);
        Upcoming::new(self.view.upcoming(self.upcoming_limit)).render(sidebar_area, buf);
        if let Some(event) = self.view.selected_event() {
            EventDetail::new(event, self.view.visible().year()).render(area, buf);
        } else if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::YearMonth;
    use crate::catalog::SCHOOL_YEAR;
    use time::{macros::date, Month};

    fn app() -> App<'static> {
        App::new(CalendarView::new(SCHOOL_YEAR, date!(2026 - 10 - 18)), 5)
    }

    fn rows(app: &mut App<'_>) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        (0..24)
            .map(|y| (0..80).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_layout() {
        let mut app = app();
        let rows = rows(&mut app);
        assert!(rows[0].contains("◀  OUTUBRO 2026  ▶"));
        assert!(rows[0].contains("PRÓXIMOS EVENTOS"));
        assert!(rows[0].ends_with('┐'));
        assert!(rows[1].ends_with("│■ N. Sra. Aparecida         │"));
        assert!(rows[2].ends_with("│  12 de outubro             │"));
        assert!(rows[10].contains("[18]"));
    }

    #[test]
    fn test_month_navigation() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::PageDown));
        assert!(app.handle_key(KeyCode::Char('n')));
        assert!(app.handle_key(KeyCode::Char('n')));
        assert_eq!(
            app.view.visible(),
            YearMonth::new(2027, Month::January).unwrap()
        );
        let rows = rows(&mut app);
        assert!(rows[0].contains("◀  JANEIRO 2027  ▶"));
        assert!(rows[1].contains("■ Ano Novo"));
        assert!(app.handle_key(KeyCode::PageUp));
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(
            app.view.visible(),
            YearMonth::new(2026, Month::October).unwrap()
        );
    }

    #[test]
    fn test_event_detail() {
        let mut app = app();
        // The 18th has no event
        assert!(!app.handle_key(KeyCode::Enter));
        for _ in 0..6 {
            assert!(app.handle_key(KeyCode::Left));
        }
        assert_eq!(app.view.cursor(), 12);
        assert!(app.handle_key(KeyCode::Enter));
        let detail = rows(&mut app);
        assert!(detail.iter().any(|r| r.contains(" N. Sra. Aparecida ")));
        assert!(detail.iter().any(|r| r.contains("12 de OUTUBRO de 2026")));
        assert!(detail.iter().any(|r| r.contains("[FECHAR]")));
        // Any key dismisses, and is not taken as a command
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(!app.quitting());
        assert_eq!(app.view.selected_event(), None);
        let closed = rows(&mut app);
        assert!(!closed.iter().any(|r| r.contains("[FECHAR]")));
    }

    #[test]
    fn test_help() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert!(rows(&mut app).iter().any(|r| r.contains(" Commands ")));
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_go_to_month() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('g')));
        for c in "202406".chars() {
            assert!(app.handle_key(KeyCode::Char(c)));
        }
        assert!(rows(&mut app).iter().any(|r| r.contains(" 2024-06")));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(
            app.view.visible(),
            YearMonth::new(2024, Month::June).unwrap()
        );
        assert_eq!(app.view.cursor(), 18);
    }

    #[test]
    fn test_go_to_month_cancel() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('g')));
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
        assert!(!app.quitting());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::F(1)));
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
    }
}
