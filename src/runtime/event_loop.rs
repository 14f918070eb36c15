use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::player::{PlayerCmd, PlayerController};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pending_gg: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self { pending_gg: false }
    }
}

/// Main terminal event loop: draws the UI and maps key events to app
/// mutations or player commands. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &PlayerController,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = EventLoopState::new();

    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player, &mut state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Current elapsed time as sampled by the position ticker. User seeks are
/// computed from this snapshot; the ticker itself never seeks.
fn sampled_elapsed(app: &App) -> Duration {
    app.playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|info| info.elapsed))
        .unwrap_or(Duration::ZERO)
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &PlayerController,
    state: &mut EventLoopState,
) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            player.shutdown();
            return true;
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.select_last();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.select_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.select_prev();
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            // Selection hand-off: the chosen path against the full list.
            if let Some(path) = app.selected_path() {
                let _ = player.send(PlayerCmd::Play(path.to_path_buf()));
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            state.pending_gg = false;
            let _ = player.send(PlayerCmd::TogglePause);
        }
        KeyCode::Char('l') => {
            state.pending_gg = false;
            let _ = player.send(PlayerCmd::Next);
        }
        KeyCode::Char('h') => {
            state.pending_gg = false;
            let _ = player.send(PlayerCmd::Prev);
        }
        KeyCode::Char('L') => {
            state.pending_gg = false;
            let scrub = Duration::from_secs(settings.controls.scrub_seconds);
            let target = sampled_elapsed(app) + scrub;
            let _ = player.send(PlayerCmd::SeekTo(target));
        }
        KeyCode::Char('H') => {
            state.pending_gg = false;
            let scrub = Duration::from_secs(settings.controls.scrub_seconds);
            let target = sampled_elapsed(app).saturating_sub(scrub);
            let _ = player.send(PlayerCmd::SeekTo(target));
        }
        KeyCode::Char('r') => {
            state.pending_gg = false;
            let _ = player.send(PlayerCmd::ToggleRepeat);
        }
        KeyCode::Char('s') => {
            state.pending_gg = false;
            let _ = player.send(PlayerCmd::Stop);
        }
        KeyCode::Char('z') => {
            state.pending_gg = false;
            app.select_playing();
        }
        KeyCode::Char('K') => {
            state.pending_gg = false;
            app.toggle_metadata_window();
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}
