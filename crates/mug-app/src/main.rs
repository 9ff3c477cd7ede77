mod app;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use mug_config::{MugConfig, CONFIG_ENV};
use mug_core::{event::Event, gesture::GestureMap, logging};
use mug_ui::{
    face::render_face,
    layout::shell_layout,
    shell::{render_shell, ShellView},
};

use app::App;

const HUD_HEIGHT: u16 = 7;

#[derive(Parser, Debug)]
#[command(name = "mug", about = "A cartoon face you can pinch and cheer up")]
struct Cli {
    /// Config file; falls back to the platform config dir, then defaults.
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config errors surface before the terminal switches to raw mode.
    let (config, source) = MugConfig::load(cli.config.as_deref())?;

    let activity = logging::init();
    match &source {
        Some(path) => tracing::info!(path = %path.display(), "config loaded"),
        None => tracing::info!("using default config"),
    }
    tracing::info!("MUG starting up");

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, App::new(config, activity));
    restore_terminal(terminal)?;
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let tick_interval = Duration::from_millis(250);
    let poll_timeout = Duration::from_millis(16);
    let mut last_tick = Instant::now();

    loop {
        // ── Render ──
        if app.take_redraw() {
            terminal.draw(|f| {
                let rects = shell_layout(f.area(), HUD_HEIGHT);
                let title = app.title();
                let view = ShellView {
                    title: &title,
                    status_line: &app.state.status_line,
                    keys: GestureMap::legend(),
                    params: app.param_lines(),
                    activity: app.activity_lines(),
                };
                let face = app.view();
                render_shell(f, rects, view, |f, hero| render_face(f.buffer_mut(), hero, face));
            })?;
        }

        // ── Poll → Publish ──
        if event::poll(poll_timeout)? {
            let gesture = match event::read()? {
                CEvent::Key(key) => app.gestures.from_key(&key),
                CEvent::Mouse(mouse) => app.gestures.from_mouse(&mouse),
                CEvent::Resize(cols, rows) => {
                    app.bus.publish(Event::Resize { cols, rows });
                    None
                }
                _ => None,
            };
            if let Some(gesture) = gesture {
                tracing::debug!(?gesture, "gesture");
                app.bus.publish(Event::Gesture(gesture));
            }
        }

        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            app.bus.publish(Event::Tick);
        }

        // ── Drain → Apply ──
        if app.process_events() {
            tracing::info!("MUG shutting down");
            return Ok(());
        }
    }
}
