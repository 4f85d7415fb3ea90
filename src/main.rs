use anyhow::Context;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEventKind, read,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::time::{Duration, Instant};

use richbar::app::App;
use richbar::cli;
use richbar::config::EditorOptions;
use richbar::menu::MenuRegistry;
use richbar::ui::Theme;
use richbar::ui::renderer::TuiRenderer;

/// Application entry point: parse arguments, load options, build the toolbar,
/// then either print it (`--list-keys`, `--dump`) or run the terminal UI
/// until the user quits.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if cli_args.list_keys {
        for tag in MenuRegistry::with_builtins().tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let mut options = match cli_args.config_path() {
        Some(path) => EditorOptions::from_file(&path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => EditorOptions::default(),
    };
    if let Some(locale) = &cli_args.locale {
        options.locale = Some(locale.clone());
    }
    if let Some(theme) = &cli_args.theme {
        options.theme = Some(theme.clone());
    }

    let theme = Theme::by_name(options.theme.as_deref().unwrap_or("dark"));
    let mut app = App::new(options);

    if cli_args.dump {
        for line in app.dump() {
            println!("{}", line);
        }
        return Ok(());
    }

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut app, theme);

    // Leave alternate screen and disable raw mode even if the loop failed
    crossterm::execute!(stdout, DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(app: &mut App, theme: Theme) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new(theme).context("creating terminal renderer")?;

    // Frame rate limiting constants
    const TARGET_FPS: u64 = 60;
    const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);
    const IDLE_POLL: Duration = Duration::from_millis(250);

    let mut last_frame_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        if needs_redraw && last_frame_time.elapsed() >= FRAME_DURATION {
            renderer.draw(app)?;
            last_frame_time = Instant::now();
            needs_redraw = false;
        }

        // Wait for the next frame slot when a redraw is pending, else idle
        let timeout = if needs_redraw {
            FRAME_DURATION.saturating_sub(last_frame_time.elapsed())
        } else {
            IDLE_POLL
        };
        if !crossterm::event::poll(timeout)? {
            continue;
        }

        match read()? {
            Event::Key(key_event) => {
                if is_quit(&key_event) {
                    break;
                }
                match key_event.code {
                    KeyCode::Char(c) => app.insert_char(c),
                    KeyCode::Enter => app.insert_char('\n'),
                    _ => continue,
                }
                needs_redraw = true;
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved => {
                    needs_redraw |= app.hover(mouse.column, mouse.row);
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    needs_redraw |= app.click(mouse.column, mouse.row);
                }
                _ => {}
            },
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }
    }
    Ok(())
}

fn is_quit(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Esc
        || (key_event.code == KeyCode::Char('q')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
}
