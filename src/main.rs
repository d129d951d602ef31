use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyward::app::App;
use skyward::config::GameConfig;
use skyward::input::map_key;
use skyward::scores::ScoreStore;
use skyward::ui;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Stdout belongs to the game, so diagnostics go to a file.
    simple_logging::log_to_file("skyward.log", log::LevelFilter::Info)?;
    info!("Starting skyward");

    let store = ScoreStore::new()?;
    let mut app = App::new(GameConfig::default(), store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(app.config.tick_ms);
    let clock = Instant::now();
    let mut last_tick = Instant::now();
    let mut rng = rand::thread_rng();

    while !app.terminated {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Sleep the rest of the frame budget on the input poll; menu
        // screens just keep waiting here between keys.
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let now_ms = clock.elapsed().as_millis() as u64;
                app.handle_input(map_key(key), now_ms);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            let now_ms = clock.elapsed().as_millis() as u64;
            app.tick(now_ms, &mut rng);
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    info!("Exiting skyward");
    Ok(())
}
