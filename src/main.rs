use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use imp::constants::{MAX_TICK_BACKLOG, TICK_DURATION};
use imp::input::{self, GameOverAction, MenuAction};
use imp::scores::ScoreStore;
use imp::ui::{render_game_over_scene, render_menu_scene, render_play_scene, SpriteSet};
use imp::{step, Run};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

enum Screen {
    Menu,
    Playing,
    GameOver { score: u32, new_best: bool },
}

/// How one trip through the playing loop ended.
enum RoundOutcome {
    Finished(u32),
    Quit,
}

fn main() -> io::Result<()> {
    // Storage and sprite failures surface here, before the terminal is
    // touched. Neither has a recovery path.
    let store = ScoreStore::new()?;
    let best = store.load_best()?;
    let sprites = SpriteSet::load()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &store, &sprites, best);

    // Always restore the terminal, even when the loop errored.
    let _ = disable_raw_mode();
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);

    result
}

/// Screen flow: Menu -> Playing -> GameOver -> Menu, until an exit input
/// or a force quit. The best score is refreshed at the end of any run
/// that beats it, before the game over screen appears.
fn run(
    terminal: &mut Term,
    store: &ScoreStore,
    sprites: &SpriteSet,
    mut best: u32,
) -> io::Result<()> {
    let mut screen = Screen::Menu;

    loop {
        match screen {
            Screen::Menu => match run_menu(terminal, best)? {
                MenuAction::Start => screen = Screen::Playing,
                MenuAction::Exit => return Ok(()),
            },
            Screen::Playing => match run_round(terminal, sprites)? {
                RoundOutcome::Finished(score) => {
                    let updated = store.update_best(score, best)?;
                    let new_best = updated > best;
                    best = updated;
                    screen = Screen::GameOver { score, new_best };
                }
                RoundOutcome::Quit => return Ok(()),
            },
            Screen::GameOver { score, new_best } => {
                match run_game_over(terminal, score, best, new_best)? {
                    GameOverAction::Replay => screen = Screen::Menu,
                    GameOverAction::Exit => return Ok(()),
                }
            }
        }
    }
}

/// Draw the menu once, then block on the event queue until the player
/// starts or exits. Redraws only on terminal resize.
fn run_menu(terminal: &mut Term, best: u32) -> io::Result<MenuAction> {
    draw_menu(terminal, best)?;

    loop {
        match event::read()? {
            Event::Key(key) if input::is_press(&key) => {
                if input::is_force_quit(&key) {
                    return Ok(MenuAction::Exit);
                }
                if let Some(action) = input::menu_action(&key) {
                    return Ok(action);
                }
            }
            Event::Resize(_, _) => draw_menu(terminal, best)?,
            _ => {}
        }
    }
}

fn draw_menu(terminal: &mut Term, best: u32) -> io::Result<()> {
    terminal.draw(|f| {
        let area = f.size();
        render_menu_scene(f, area, best);
    })?;
    Ok(())
}

/// Drive one run at a fixed 60Hz simulation rate.
///
/// Wall time is folded into an accumulator and converted into whole
/// ticks, so simulation speed is independent of render pacing. Input is
/// polled with whatever time remains until the next due tick; a flap
/// keypress is queued and consumed by the next tick.
fn run_round(terminal: &mut Term, sprites: &SpriteSet) -> io::Result<RoundOutcome> {
    let mut rng = rand::thread_rng();
    let mut run = Run::new(&mut rng);

    let mut last_instant = Instant::now();
    let mut accumulator = Duration::ZERO;
    let mut flap_queued = false;

    loop {
        terminal.draw(|f| {
            let area = f.size();
            render_play_scene(f, area, &run, sprites);
        })?;

        if run.over {
            return Ok(RoundOutcome::Finished(run.score));
        }

        let timeout = TICK_DURATION.saturating_sub(accumulator + last_instant.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if input::is_press(&key) => {
                    if input::is_force_quit(&key) {
                        return Ok(RoundOutcome::Quit);
                    }
                    if input::is_flap(&key) {
                        flap_queued = true;
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        accumulator += now.duration_since(last_instant);
        last_instant = now;
        // Cap accumulated debt so a stalled terminal does not fast-forward
        // the run on resume.
        if accumulator > MAX_TICK_BACKLOG {
            accumulator = MAX_TICK_BACKLOG;
        }

        while accumulator >= TICK_DURATION && !run.over {
            step(&mut run, flap_queued, &mut rng);
            flap_queued = false;
            accumulator -= TICK_DURATION;
        }
    }
}

/// Draw the game over screen once, then block until replay or exit.
fn run_game_over(
    terminal: &mut Term,
    score: u32,
    best: u32,
    new_best: bool,
) -> io::Result<GameOverAction> {
    draw_game_over(terminal, score, best, new_best)?;

    loop {
        match event::read()? {
            Event::Key(key) if input::is_press(&key) => {
                if input::is_force_quit(&key) {
                    return Ok(GameOverAction::Exit);
                }
                if let Some(action) = input::game_over_action(&key) {
                    return Ok(action);
                }
            }
            Event::Resize(_, _) => draw_game_over(terminal, score, best, new_best)?,
            _ => {}
        }
    }
}

fn draw_game_over(terminal: &mut Term, score: u32, best: u32, new_best: bool) -> io::Result<()> {
    terminal.draw(|f| {
        let area = f.size();
        render_game_over_scene(f, area, score, best, new_best);
    })?;
    Ok(())
}
