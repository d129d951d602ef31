//! The game's screen state machine.
//!
//! Start → Playing → (EnterName →) GameOver → Playing again, with quit
//! terminal from every screen. All transitions are driven by [`AppInput`]
//! values and a monotonic millisecond clock, so the whole machine runs
//! headlessly under test; the binary only feeds it key events and draws
//! what it sees.

use crate::config::GameConfig;
use crate::game::{self, Session};
use crate::input::AppInput;
use crate::scores::{self, HighScores, ScoreStore};
use log::{error, info};
use rand::Rng;
use std::io;

/// Which screen is in control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    /// The crash scored a table spot; collecting a player name.
    EnterName,
    GameOver,
}

pub struct App {
    pub config: GameConfig,
    pub screen: Screen,
    pub session: Session,
    pub scores: HighScores,
    /// Name-entry buffer, live only on the EnterName screen.
    pub name_input: String,
    /// Set once quit is requested; the driver exits its loop on this.
    pub terminated: bool,
    store: ScoreStore,
}

impl App {
    /// Build the app, loading the persisted score table. A malformed score
    /// file is a startup error.
    pub fn new(config: GameConfig, store: ScoreStore) -> io::Result<Self> {
        let scores = store.load()?;
        let session = Session::new(&config, 0);
        Ok(Self {
            config,
            screen: Screen::Start,
            session,
            scores,
            name_input: String::new(),
            terminated: false,
            store,
        })
    }

    /// Feed one input. `now_ms` seeds the spawn timer when a session
    /// starts.
    pub fn handle_input(&mut self, input: AppInput, now_ms: u64) {
        match self.screen {
            Screen::Start | Screen::GameOver => match input {
                AppInput::Quit | AppInput::Char('q') | AppInput::Char('Q') => self.quit(),
                AppInput::Flap | AppInput::Confirm => self.start_session(now_ms),
                _ => {}
            },
            Screen::Playing => match input {
                AppInput::Quit | AppInput::Char('q') | AppInput::Char('Q') => self.quit(),
                AppInput::Flap => game::flap(&mut self.session, &self.config),
                _ => {}
            },
            Screen::EnterName => match input {
                AppInput::Quit => self.quit(),
                AppInput::Char(c) => {
                    if scores::is_name_char(c) && self.name_input.len() < scores::MAX_NAME_LEN {
                        self.name_input.push(c);
                    }
                }
                AppInput::Backspace => {
                    self.name_input.pop();
                }
                AppInput::Confirm => self.commit_name(),
                _ => {}
            },
        }
    }

    /// Advance the simulation by one tick. Only the Playing screen ticks;
    /// menu screens just wait for input.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, rng: &mut R) {
        if self.screen != Screen::Playing {
            return;
        }

        game::advance(&mut self.session, &self.config, now_ms, rng);

        if let Some(cause) = self.session.crash {
            info!(
                "Session over ({:?}) at score {}",
                cause, self.session.score
            );
            if self.scores.qualifies(self.session.score) {
                self.name_input.clear();
                self.screen = Screen::EnterName;
            } else {
                self.screen = Screen::GameOver;
            }
        }
    }

    fn start_session(&mut self, now_ms: u64) {
        self.session = Session::new(&self.config, now_ms);
        self.screen = Screen::Playing;
        info!("Session started");
    }

    fn commit_name(&mut self) {
        if self.name_input.is_empty() {
            return;
        }
        let name = std::mem::take(&mut self.name_input);
        self.scores.insert(name, self.session.score);
        if let Err(e) = self.store.save(&self.scores) {
            // Keep playing; the table is still correct in memory.
            error!("Failed to save high scores: {}", e);
        }
        self.screen = Screen::GameOver;
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.terminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::fs;

    fn temp_store(name: &str) -> ScoreStore {
        let path =
            std::env::temp_dir().join(format!("skyward_app_{}_{}.txt", name, std::process::id()));
        fs::remove_file(&path).ok();
        ScoreStore::at(path)
    }

    fn new_app(name: &str) -> App {
        App::new(GameConfig::default(), temp_store(name)).expect("app should build")
    }

    /// Tick with a constant clock (no pipes ever spawn) until the bird
    /// grounds out and the screen changes.
    fn run_until_crash(app: &mut App) {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..500 {
            if app.screen != Screen::Playing {
                return;
            }
            app.tick(0, &mut rng);
        }
        panic!("session did not end");
    }

    #[test]
    fn test_starts_on_start_screen() {
        let app = new_app("start");
        assert_eq!(app.screen, Screen::Start);
        assert!(!app.terminated);
        assert!(app.scores.is_empty());
    }

    #[test]
    fn test_flap_starts_session() {
        let mut app = new_app("flap_starts");
        app.handle_input(AppInput::Flap, 123);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.last_spawn_ms, 123);
        assert_eq!(app.session.score, 0);
    }

    #[test]
    fn test_quit_from_every_screen() {
        for (name, screen) in [
            ("q_start", Screen::Start),
            ("q_play", Screen::Playing),
            ("q_name", Screen::EnterName),
            ("q_over", Screen::GameOver),
        ] {
            let mut app = new_app(name);
            app.screen = screen;
            app.handle_input(AppInput::Quit, 0);
            assert!(app.terminated, "quit should terminate from {:?}", screen);
        }
    }

    #[test]
    fn test_q_key_quits_menu_screens_only() {
        let mut app = new_app("q_menu");
        app.screen = Screen::EnterName;
        app.handle_input(AppInput::Char('q'), 0);
        assert!(!app.terminated);
        assert_eq!(app.name_input, "q");

        let mut app = new_app("q_menu2");
        app.handle_input(AppInput::Char('q'), 0);
        assert!(app.terminated);
    }

    #[test]
    fn test_tick_is_inert_outside_playing() {
        let mut app = new_app("inert");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let before = app.session.clone();
        app.tick(10_000, &mut rng);
        assert_eq!(app.session, before);
        assert_eq!(app.screen, Screen::Start);
    }

    #[test]
    fn test_crash_with_empty_table_prompts_for_name() {
        let mut app = new_app("prompt");
        app.handle_input(AppInput::Flap, 0);
        run_until_crash(&mut app);
        // Even a zero score qualifies while the table has room.
        assert_eq!(app.screen, Screen::EnterName);
        assert_eq!(app.name_input, "");
    }

    #[test]
    fn test_crash_with_unbeaten_table_skips_name_entry() {
        let mut app = new_app("skip_name");
        for i in 0..5 {
            app.scores.insert(format!("p{}", i), 100 + i);
        }
        app.handle_input(AppInput::Flap, 0);
        run_until_crash(&mut app);
        assert_eq!(app.screen, Screen::GameOver);
    }

    #[test]
    fn test_name_entry_commit_saves_table() {
        let mut app = new_app("commit");
        app.handle_input(AppInput::Flap, 0);
        run_until_crash(&mut app);
        assert_eq!(app.screen, Screen::EnterName);

        for c in ['a', 'c', 'e'] {
            app.handle_input(AppInput::Char(c), 0);
        }
        app.handle_input(AppInput::Confirm, 0);

        assert_eq!(app.screen, Screen::GameOver);
        assert_eq!(app.scores.entries()[0].name, "ace");

        // The table reached disk.
        let reloaded = app.store.load().expect("store should reload");
        assert_eq!(reloaded, app.scores);
        fs::remove_file(app.store.path()).ok();
    }

    #[test]
    fn test_name_entry_editing_rules() {
        let mut app = new_app("editing");
        app.screen = Screen::EnterName;

        app.handle_input(AppInput::Char('a'), 0);
        app.handle_input(AppInput::Char(','), 0); // rejected charset
        app.handle_input(AppInput::Char('b'), 0);
        app.handle_input(AppInput::Backspace, 0);
        assert_eq!(app.name_input, "a");

        for _ in 0..30 {
            app.handle_input(AppInput::Char('x'), 0);
        }
        assert_eq!(app.name_input.len(), scores::MAX_NAME_LEN);
    }

    #[test]
    fn test_empty_name_cannot_commit() {
        let mut app = new_app("empty_name");
        app.screen = Screen::EnterName;
        app.handle_input(AppInput::Confirm, 0);
        assert_eq!(app.screen, Screen::EnterName);
    }

    #[test]
    fn test_restart_reinitializes_session() {
        let mut app = new_app("restart");
        app.handle_input(AppInput::Flap, 0);
        run_until_crash(&mut app);
        app.screen = Screen::GameOver;

        app.handle_input(AppInput::Confirm, 5_000);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.score, 0);
        assert!(app.session.pipes.is_empty());
        assert!(app.session.crash.is_none());
        assert_eq!(app.session.last_spawn_ms, 5_000);
    }

    #[test]
    fn test_scores_survive_restart() {
        let mut app = new_app("persist");
        app.scores.insert("keeper".to_string(), 9);
        app.handle_input(AppInput::Flap, 0);
        assert_eq!(app.scores.entries()[0].name, "keeper");
    }
}
