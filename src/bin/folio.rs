//! folio - Render the animated portfolio in the terminal.
//!
//! Runs fullscreen on the alternate screen buffer. `q` or `Esc` quits,
//! `Tab`/arrow keys move the project-card highlight.

use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};

use folio_tui::content::Portfolio;
use folio_tui::effects::{TypewriterOptions, start_typewriter};
use folio_tui::render::{ansi, render_page};
use folio_tui::theme::{Theme, get_preset, preset_names};
use folio_tui::view::{PropValue, sections};

/// Delay between input polls; also caps the repaint rate.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Parser)]
#[command(name = "folio", version, about = "Animated terminal portfolio")]
struct Cli {
    /// Theme preset name (see --list-themes)
    #[arg(long, default_value = "midnight")]
    theme: String,

    /// Portfolio content JSON file (defaults to the built-in sample)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Typing speed in milliseconds per character
    #[arg(long, default_value_t = 100)]
    speed_ms: u64,

    /// Render this many frames, then exit (demo/CI mode)
    #[arg(long)]
    frames: Option<u64>,

    /// List available theme presets and exit
    #[arg(long)]
    list_themes: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_themes {
        for name in preset_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let theme = get_preset(&cli.theme)
        .with_context(|| format!("unknown theme {:?} (try --list-themes)", cli.theme))?;

    let portfolio = match &cli.content {
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("cannot load portfolio from {}", path.display()))?,
        None => Portfolio::sample(),
    };

    let options = TypewriterOptions::from_speed(Duration::from_millis(cli.speed_ms.max(1)));
    let handle = Arc::new(start_typewriter(portfolio.roles.clone(), options)?);

    let role_line = PropValue::Getter(Rc::new({
        let handle = Arc::clone(&handle);
        move || handle.current_text()
    }));

    let result = run(&portfolio, &theme, &role_line, cli.frames);
    handle.stop();
    result
}

/// Enter the terminal, run the frame loop, and always restore on the way out.
fn run(
    portfolio: &Portfolio,
    theme: &Theme,
    role_line: &PropValue<String>,
    frames: Option<u64>,
) -> Result<()> {
    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = frame_loop(&mut out, portfolio, theme, role_line, frames);

    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn frame_loop(
    out: &mut io::Stdout,
    portfolio: &Portfolio,
    theme: &Theme,
    role_line: &PropValue<String>,
    frames: Option<u64>,
) -> Result<()> {
    let cards = portfolio.projects.len();
    let mut hovered: Option<usize> = None;
    let mut rendered: u64 = 0;

    loop {
        let (width, _) = terminal::size()?;
        let lines = sections::page(portfolio, theme, role_line, hovered);

        let mut buf = Vec::new();
        ansi::sync_begin(&mut buf)?;
        ansi::cursor_home(&mut buf)?;
        render_page(&mut buf, &lines, width as usize, theme.background)?;
        ansi::clear_below(&mut buf)?;
        ansi::sync_end(&mut buf)?;
        out.write_all(&buf)?;
        out.flush()?;

        rendered += 1;
        if let Some(max) = frames {
            if rendered >= max {
                return Ok(());
            }
        }

        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Tab | KeyCode::Down | KeyCode::Right if cards > 0 => {
                        hovered = Some(hovered.map_or(0, |i| (i + 1) % cards));
                    }
                    KeyCode::BackTab | KeyCode::Up | KeyCode::Left if cards > 0 => {
                        hovered = Some(hovered.map_or(cards - 1, |i| (i + cards - 1) % cards));
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }
}
