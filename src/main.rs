mod app;
mod calendar;
mod catalog;
mod detail;
mod help;
mod jumpto;
mod theme;
mod upcoming;
mod view;
use crate::app::App;
use crate::catalog::SCHOOL_YEAR;
use crate::view::CalendarView;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime,
};

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Number of events listed in the sidebar unless `--upcoming` says otherwise
const DEFAULT_UPCOMING: usize = 5;

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        upcoming: usize,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut upcoming = DEFAULT_UPCOMING;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('n') | Arg::Long("upcoming") => upcoming = parser.value()?.parse()?,
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            upcoming,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                upcoming,
                log_file,
            } => {
                // Only log when asked to, as the calendar occupies the whole
                // terminal
                let _logger = log_file.map(init_logging).transpose()?;
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                log::info!("Starting {} on {today}", env!("CARGO_PKG_NAME"));
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut view = CalendarView::new(SCHOOL_YEAR, today);
                    if let Some(date) = date {
                        view = view.start_date(date);
                    }
                    App::new(view, upcoming).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: schoolcal [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Terminal school calendar with holidays, school events and an upcoming-events list");
                println!();
                println!("Options:");
                println!("  -n, --upcoming <N>    Number of upcoming events to list [default: {DEFAULT_UPCOMING}]");
                println!("      --log-file <PATH> Write log messages to PATH");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(log_file: PathBuf) -> anyhow::Result<LoggerHandle> {
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .context("invalid log specification")?
        .log_to_file(FileSpec::try_from(&log_file).context("invalid log file path")?)
        .start()
        .with_context(|| format!("failed to start logging to {}", log_file.display()))
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
