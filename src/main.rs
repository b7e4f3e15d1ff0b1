use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use deskfolio::desktop::Desktop;
use deskfolio::drivers::InputDriver;
use deskfolio::drivers::console::ConsoleDriver;
use deskfolio::event_loop::{ControlFlow, EventLoop};
use deskfolio::theme::{Theme, ThemeStore};
use deskfolio::tracing_sub;
use deskfolio::ui::UiFrame;
use deskfolio::viewport::ViewportMode;

#[derive(Debug, Parser)]
#[command(name = "deskfolio", about = "A portfolio desk in your terminal")]
struct Cli {
    /// Color theme; defaults to the persisted preference, then dark.
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Force the single-window mobile layout regardless of terminal size.
    #[arg(long, conflicts_with = "desktop")]
    mobile: bool,

    /// Force the floating-window desktop layout regardless of terminal size.
    #[arg(long, conflicts_with = "mobile")]
    desktop: bool,

    /// Append debug logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn forced_mode(&self) -> Option<ViewportMode> {
        if self.mobile {
            Some(ViewportMode::Mobile)
        } else if self.desktop {
            Some(ViewportMode::Desktop)
        } else {
            None
        }
    }
}

/// Pixel width as reported by the terminal, when it reports one at all.
fn pixel_width() -> Option<u16> {
    terminal::window_size()
        .ok()
        .and_then(|size| (size.width > 0).then_some(size.width))
}

fn resolve_theme(cli: &Cli, store: Option<&ThemeStore>) -> Theme {
    if let Some(theme) = cli.theme {
        return theme;
    }
    match store.map(ThemeStore::load) {
        Some(Ok(Some(theme))) => theme,
        Some(Err(err)) => {
            tracing::warn!(%err, "ignoring unreadable theme preference");
            Theme::default()
        }
        _ => Theme::default(),
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref())?;

    let store = ThemeStore::default_path().map(ThemeStore::new);
    let theme = resolve_theme(&cli, store.as_ref());
    let mut desktop = Desktop::new(theme, store, cli.forced_mode());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut driver = ConsoleDriver::new();
    driver.set_mouse_capture(true)?;

    let (columns, rows) = terminal::size()?;
    desktop.resize(columns, rows, pixel_width());

    let result = run(&mut terminal, driver, &mut desktop);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        event::DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    driver: ConsoleDriver,
    desktop: &mut Desktop,
) -> io::Result<()> {
    let mut event_loop = EventLoop::new(driver, Duration::from_millis(50));
    event_loop.run(|_, event| match event {
        None => {
            terminal.draw(|frame| {
                let mut ui = UiFrame::new(frame);
                desktop.render(&mut ui);
            })?;
            Ok(ControlFlow::Continue)
        }
        Some(Event::Resize(columns, rows)) => {
            desktop.resize(columns, rows, pixel_width());
            Ok(ControlFlow::Continue)
        }
        Some(event) => Ok(desktop.handle_event(&event)),
    })
}
