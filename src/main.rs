use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::cli::{self, Command, RunOptions};
use flappy::constants::FRAMES_PER_SECOND;
use flappy::game::{FrameReport, InputOutcome};
use flappy::input::map_event;
use flappy::timing::FramePacer;
use flappy::{ui, GameConfig, Session};
use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;

fn main() -> io::Result<()> {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Ok(Command::Version) => {
            println!(
                "flappy {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            );
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_path {
        init_logging(path)?;
    }

    let mut rng = make_rng(&options);
    let session = Session::new(GameConfig::default(), &mut rng)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, session, &mut rng);

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Route `log` output to a file. The terminal belongs to the game.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    info!(
        "flappy {} ({}) starting",
        build_info::BUILD_DATE,
        build_info::BUILD_COMMIT
    );
    Ok(())
}

fn make_rng(options: &RunOptions) -> StdRng {
    match options.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// The frame loop: drain input, step the world, draw, wait for the next tick.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut session: Session,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut pacer = FramePacer::new(FRAMES_PER_SECOND);

    loop {
        while event::poll(Duration::ZERO)? {
            let Some(input) = map_event(event::read()?) else {
                continue;
            };
            if session.handle_input(input, rng) == InputOutcome::Quit {
                info!("quit requested, best score {}", session.best_score);
                return Ok(());
            }
        }

        let report = session.update(rng);
        if report != FrameReport::default() {
            trace!("frame {}: {:?}", session.frame, report);
        }

        terminal.draw(|frame| ui::draw_ui(frame, &session))?;
        pacer.wait();
    }
}
