//! Gapwing entry point
//!
//! Owns the terminal, the fixed-delay tick loop, and the glue between
//! simulation events and persistence.

use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};

use gapwing::highscores::HighScoreStore;
use gapwing::renderer::TermRenderer;
use gapwing::settings::Tuning;
use gapwing::sim::{GameEvent, GameState, TickInput, tick};

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("gapwing starting");

    let store = HighScoreStore::new();
    let tuning_path = store.path().with_file_name("tuning.json");
    let tuning = Tuning::load_or_default(&tuning_path);
    if !tuning_path.exists() {
        tuning.save(&tuning_path);
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::with_tuning(seed, tuning);
    state.score.best = store.load();
    log::info!("seed {}, best so far {}", seed, state.score.best);

    let mut renderer = TermRenderer::new()?;
    let result = run(&mut state, &store, &mut renderer);
    renderer.restore()?;
    result
}

fn run(state: &mut GameState, store: &HighScoreStore, renderer: &mut TermRenderer) -> io::Result<()> {
    let tick_duration = Duration::from_millis(state.tuning.tick_ms);

    loop {
        let frame_start = Instant::now();

        // Drain pending input without blocking; one-shot flags last one tick.
        let mut input = TickInput::default();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        input.flap = true;
                        input.start = true;
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if matches!(mouse.kind, MouseEventKind::Down(_)) {
                        input.flap = true;
                        input.start = true;
                    }
                }
                Event::Resize(cols, rows) => renderer.resize(cols, rows),
                _ => {}
            }
        }

        for game_event in tick(state, &input) {
            match game_event {
                GameEvent::SessionStarted => {
                    log::info!("session started (backdrop {:?})", state.backdrop);
                }
                GameEvent::NewBest(best) => store.save(best),
                GameEvent::Collided => {
                    log::info!(
                        "session over: score {}, best {}",
                        state.score.current,
                        state.score.best
                    );
                    store.save(state.score.best);
                }
                GameEvent::Flapped | GameEvent::Scored(_) | GameEvent::ReadyToRestart => {}
            }
        }

        renderer.draw(state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < tick_duration {
            std::thread::sleep(tick_duration - elapsed);
        }
    }
}
