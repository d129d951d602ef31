//! Integration test: full game flow through the public API.
//!
//! Drives the app state machine the way the binary does (inputs plus a
//! simulated millisecond clock) through start, play, crash, name entry,
//! persistence, restart, and quit. No terminal involved.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyward::app::{App, Screen};
use skyward::config::GameConfig;
use skyward::input::AppInput;
use skyward::scores::ScoreStore;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("skyward_it_{}_{}.txt", name, std::process::id()));
    fs::remove_file(&path).ok();
    path
}

fn new_app(path: &PathBuf) -> App {
    App::new(GameConfig::default(), ScoreStore::at(path.clone())).expect("app should build")
}

/// Tick with a frozen clock (no pipes spawn) until the session ends.
fn fall_to_ground(app: &mut App, rng: &mut ChaCha8Rng) {
    for _ in 0..500 {
        if app.screen != Screen::Playing {
            return;
        }
        app.tick(0, rng);
    }
    panic!("session did not end");
}

fn type_name(app: &mut App, name: &str) {
    for c in name.chars() {
        app.handle_input(AppInput::Char(c), 0);
    }
    app.handle_input(AppInput::Confirm, 0);
}

// =============================================================================
// Start → Playing → crash → EnterName → GameOver → restart → quit
// =============================================================================

#[test]
fn test_full_game_cycle_persists_score() {
    let path = temp_path("cycle");
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut app = new_app(&path);

    assert_eq!(app.screen, Screen::Start);
    app.handle_input(AppInput::Flap, 0);
    assert_eq!(app.screen, Screen::Playing);

    fall_to_ground(&mut app, &mut rng);
    // Empty table: any score qualifies, even zero.
    assert_eq!(app.screen, Screen::EnterName);

    type_name(&mut app, "ace");
    assert_eq!(app.screen, Screen::GameOver);

    // The entry reached disk in name,score form.
    let on_disk = ScoreStore::at(path.clone()).load().expect("reload");
    assert_eq!(on_disk.entries().len(), 1);
    assert_eq!(on_disk.entries()[0].name, "ace");
    assert_eq!(on_disk.entries()[0].score, app.session.score);

    // Restart resets the session; the table persists.
    app.handle_input(AppInput::Flap, 9_000);
    assert_eq!(app.screen, Screen::Playing);
    assert_eq!(app.session.score, 0);
    assert!(app.session.pipes.is_empty());
    assert_eq!(app.scores.entries().len(), 1);

    app.handle_input(AppInput::Quit, 9_001);
    assert!(app.terminated);

    fs::remove_file(&path).ok();
}

#[test]
fn test_unbeaten_table_skips_name_entry_and_file_is_untouched() {
    let path = temp_path("unbeaten");
    let contents = "a,140\nb,130\nc,120\nd,110\ne,100\n";
    fs::write(&path, contents).expect("seed file");

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut app = new_app(&path);
    assert_eq!(app.scores.entries().len(), 5);

    app.handle_input(AppInput::Flap, 0);
    fall_to_ground(&mut app, &mut rng);

    // Score 0 against a floor of 100: straight to the results screen.
    assert_eq!(app.screen, Screen::GameOver);
    assert_eq!(fs::read_to_string(&path).expect("file"), contents);

    fs::remove_file(&path).ok();
}

#[test]
fn test_quit_mid_session_saves_nothing() {
    let path = temp_path("quit_mid");
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut app = new_app(&path);

    app.handle_input(AppInput::Flap, 0);
    app.tick(0, &mut rng);
    app.handle_input(AppInput::Quit, 33);

    assert!(app.terminated);
    assert!(!path.exists());
}

// =============================================================================
// A piloted session: score real pipes, then crash and persist
// =============================================================================

#[test]
fn test_piloted_session_scores_and_persists() {
    let path = temp_path("piloted");
    let cfg = GameConfig::default();
    let tick_ms = cfg.tick_ms;
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut app = App::new(cfg, ScoreStore::at(path.clone())).expect("app should build");

    app.handle_input(AppInput::Flap, 0);

    // Flap every tick: the bird climbs clear of the pipe band while the
    // world keeps scrolling, so recycled pipes rack up score.
    let mut now = 0;
    for tick in 1..=400u64 {
        now = tick * tick_ms;
        app.handle_input(AppInput::Flap, now);
        app.tick(now, &mut rng);
        assert_eq!(app.screen, Screen::Playing);
    }
    assert!(app.session.score >= 1, "no pipe recycled in 400 ticks");
    let flown = app.session.score;

    // Stop flapping and fall back to earth.
    for tick in 401..2_000u64 {
        if app.screen != Screen::Playing {
            break;
        }
        now = tick * tick_ms;
        app.tick(now, &mut rng);
    }
    assert_ne!(app.screen, Screen::Playing, "bird never came down");
    assert!(app.session.is_over());
    assert!(app.session.score >= flown);

    assert_eq!(app.screen, Screen::EnterName);
    type_name(&mut app, "pilot");

    let on_disk = ScoreStore::at(path.clone()).load().expect("reload");
    assert_eq!(on_disk.entries()[0].name, "pilot");
    assert_eq!(on_disk.entries()[0].score, app.session.score);

    fs::remove_file(&path).ok();
}
