//! Session orchestration: one bird, a sequence of pipes, and the best score.
//!
//! `Session::update` is the pure simulation step. Drawing lives in
//! `crate::render`, which only reads a session.

use super::bird::Bird;
use super::input::GameInput;
use super::pipe::Pipe;
use crate::config::{ConfigError, GameConfig};
use log::{debug, info};
use rand::Rng;

/// Which phase of a run the session is in. Derived from the bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bird idles before the first jump; the world does not scroll.
    Waiting,
    /// Pipes scroll, collisions are live, score accrues.
    Playing,
    /// Run is over; pipes are frozen until restart.
    Dead,
}

/// How the bird died.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Pipe,
    Floor,
}

/// What an input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The bird flapped (and left the waiting state if it was idle).
    Jumped,
    /// The dead run was discarded and a fresh one started.
    Restarted,
    /// The player asked to leave; the caller should stop the loop.
    Quit,
    Ignored,
}

/// Everything that happened during one `update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Pipes scored this frame.
    pub scored: u32,
    /// Set on the frame the bird died.
    pub died: Option<DeathCause>,
    /// Set when this frame raised the best score.
    pub new_best: bool,
    pub pipes_spawned: usize,
    pub pipes_removed: usize,
    /// The dead bird has dropped below the world.
    pub fell_off: bool,
}

/// Main game state, owned by the frame loop.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub bird: Bird,
    /// Ordered left to right.
    pub pipes: Vec<Pipe>,
    /// Cleared when the bird dies; pipes stay put until restart.
    pub pipes_moving: bool,
    /// Best score across restarts, for the lifetime of the process.
    pub best_score: u32,
    /// Completed `update` calls since the last reset.
    pub frame: u64,
}

impl Session {
    /// Build a fresh session. Fails if the config cannot describe a playable world.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let bird = Bird::new(&config);
        let pipes = initial_pipes(&config, rng);
        Ok(Self {
            config,
            bird,
            pipes,
            pipes_moving: true,
            best_score: 0,
            frame: 0,
        })
    }

    /// Current phase of the run.
    pub fn mode(&self) -> Mode {
        if !self.bird.alive {
            Mode::Dead
        } else if self.bird.waiting {
            Mode::Waiting
        } else {
            Mode::Playing
        }
    }

    /// Current run's score.
    pub fn score(&self) -> u32 {
        self.bird.points
    }

    /// Apply one player input.
    pub fn handle_input<R: Rng>(&mut self, input: GameInput, rng: &mut R) -> InputOutcome {
        match input {
            GameInput::Quit => InputOutcome::Quit,
            GameInput::Jump if self.bird.alive => {
                if self.bird.waiting {
                    info!("run started");
                }
                self.bird.jump();
                InputOutcome::Jumped
            }
            GameInput::Jump => {
                self.reset(rng);
                InputOutcome::Restarted
            }
            GameInput::Other => InputOutcome::Ignored,
        }
    }

    /// Discard the bird and pipes and start over. The best score survives.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.bird = Bird::new(&self.config);
        self.pipes = initial_pipes(&self.config, rng);
        self.pipes_moving = true;
        self.frame = 0;
        info!("session reset, best score {}", self.best_score);
    }

    /// Advance the world by one frame.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> FrameReport {
        let mut report = FrameReport::default();

        if !self.bird.waiting {
            self.update_pipes(rng, &mut report);
        }

        let before = self.pipes.len();
        self.pipes.retain(|p| !p.is_offscreen());
        report.pipes_removed = before - self.pipes.len();
        if report.pipes_removed > 0 {
            debug!("removed {} off-screen pipe(s)", report.pipes_removed);
        }

        let was_alive = self.bird.alive;
        report.fell_off = self.bird.advance();
        if was_alive && !self.bird.alive {
            self.on_death(DeathCause::Floor, &mut report);
        }

        self.frame += 1;
        report
    }

    /// Scroll, collide, score and replace pipes, left to right.
    fn update_pipes<R: Rng>(&mut self, rng: &mut R, report: &mut FrameReport) {
        // Pipes appended during the pass are visited too
        let mut i = 0;
        while i < self.pipes.len() {
            if self.pipes_moving {
                self.pipes[i].advance();
            }

            let pipe = &self.pipes[i];
            if pipe.collides_with(&self.bird) {
                if self.bird.alive {
                    self.bird.die();
                    self.on_death(DeathCause::Pipe, report);
                }
                self.pipes_moving = false;
            } else if pipe.midpoint() < self.bird.x && self.bird.alive && !pipe.scored {
                self.pipes[i].scored = true;
                self.bird.points += 1;
                report.scored += 1;
                if self.bird.points > self.best_score {
                    self.best_score = self.bird.points;
                    report.new_best = true;
                }
                debug!("scored pipe, points {}", self.bird.points);
            } else if pipe.scored && !pipe.replaced {
                self.pipes[i].replaced = true;
                self.spawn_after_last(rng);
                report.pipes_spawned += 1;
            }

            i += 1;
        }
    }

    /// Append a pipe one spacing to the right of the current last pipe.
    fn spawn_after_last<R: Rng>(&mut self, rng: &mut R) {
        let x = match self.pipes.last() {
            Some(last) => last.x + self.config.pipe_spacing,
            None => self.config.width,
        };
        let pipe = Pipe::spawn(x, &self.config, rng);
        debug!("spawned pipe at x={:.1} gap_top={:.1}", pipe.x, pipe.gap_top);
        self.pipes.push(pipe);
    }

    fn on_death(&mut self, cause: DeathCause, report: &mut FrameReport) {
        self.pipes_moving = false;
        if self.bird.points > self.best_score {
            self.best_score = self.bird.points;
            report.new_best = true;
        }
        report.died = Some(cause);
        info!(
            "bird died ({:?}) with {} point(s), best {}",
            cause, self.bird.points, self.best_score
        );
    }
}

/// The opening batch: evenly spaced pipes starting at the right edge.
fn initial_pipes<R: Rng>(config: &GameConfig, rng: &mut R) -> Vec<Pipe> {
    (0..config.initial_pipes)
        .map(|i| {
            let x = config.width + i as f64 * config.pipe_spacing;
            Pipe::spawn(x, config, rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn new_session(rng: &mut ChaCha8Rng) -> Session {
        Session::new(GameConfig::default(), rng).unwrap()
    }

    /// Keep the bird inside the gap of whatever pipe is nearest to it.
    fn steer_into_gap(session: &mut Session) {
        let bird_x = session.bird.x;
        if let Some(pipe) = session.pipes.iter().find(|p| p.right() >= bird_x - 1.0) {
            session.bird.y = pipe.gap_top + (pipe.gap - session.bird.height) / 2.0;
            session.bird.velocity = 0.0;
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let mut rng = create_test_rng();
        let session = new_session(&mut rng);
        assert_eq!(session.mode(), Mode::Waiting);
        assert_eq!(session.pipes.len(), 5);
        assert!(session.pipes_moving);
        assert_eq!(session.best_score, 0);
        assert_eq!(session.score(), 0);
        for (i, pipe) in session.pipes.iter().enumerate() {
            assert!((pipe.x - (900.0 + 300.0 * i as f64)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut rng = create_test_rng();
        let config = GameConfig {
            height: -600.0,
            ..Default::default()
        };
        assert!(Session::new(config, &mut rng).is_err());
    }

    #[test]
    fn test_waiting_does_not_scroll() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        let xs: Vec<f64> = session.pipes.iter().map(|p| p.x).collect();
        for _ in 0..120 {
            session.update(&mut rng);
        }
        assert_eq!(session.mode(), Mode::Waiting);
        let after: Vec<f64> = session.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, after);
    }

    #[test]
    fn test_jump_starts_playing() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        let outcome = session.handle_input(GameInput::Jump, &mut rng);
        assert_eq!(outcome, InputOutcome::Jumped);
        assert_eq!(session.mode(), Mode::Playing);
        session.update(&mut rng);
        assert!((session.pipes[0].x - 897.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quit_and_other_inputs() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        assert_eq!(
            session.handle_input(GameInput::Quit, &mut rng),
            InputOutcome::Quit
        );
        assert_eq!(
            session.handle_input(GameInput::Other, &mut rng),
            InputOutcome::Ignored
        );
        assert_eq!(session.mode(), Mode::Waiting);
    }

    #[test]
    fn test_pipe_collision_kills_and_freezes() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        session.handle_input(GameInput::Jump, &mut rng);
        session.pipes[0].x = session.bird.x + 3.0;
        session.pipes[0].gap_top = 450.0;
        session.bird.y = 100.0;
        session.bird.velocity = 0.0;

        let report = session.update(&mut rng);
        assert_eq!(report.died, Some(DeathCause::Pipe));
        assert_eq!(session.mode(), Mode::Dead);
        assert!(!session.pipes_moving);

        let xs: Vec<f64> = session.pipes.iter().map(|p| p.x).collect();
        for _ in 0..10 {
            let report = session.update(&mut rng);
            assert_eq!(report.died, None);
        }
        let after: Vec<f64> = session.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, after);
    }

    #[test]
    fn test_scores_exactly_once_per_pipe() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        session.handle_input(GameInput::Jump, &mut rng);
        // Midpoint at bird.x + 1.5; one scroll moves it behind the bird
        session.pipes[0].x = session.bird.x - 40.0 + 1.5;

        let mut total = 0;
        let mut first_frame = None;
        for frame in 0..200 {
            steer_into_gap(&mut session);
            let report = session.update(&mut rng);
            assert!(report.scored <= 1);
            if report.scored == 1 && first_frame.is_none() {
                first_frame = Some(frame);
            }
            total += report.scored;
            if session.pipes.iter().all(|p| p.x > session.bird.x + 100.0) {
                break;
            }
        }
        assert_eq!(first_frame, Some(0));
        assert_eq!(total, 1);
        assert_eq!(session.score(), 1);
        assert_eq!(session.best_score, 1);
    }

    #[test]
    fn test_scored_pipe_spawns_one_successor_at_spacing() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        session.handle_input(GameInput::Jump, &mut rng);
        session.pipes[0].x = session.bird.x - 40.0 + 1.5;

        steer_into_gap(&mut session);
        let first = session.update(&mut rng);
        assert_eq!(first.scored, 1);
        assert_eq!(first.pipes_spawned, 0);

        let last_x = session.pipes.last().unwrap().x;
        let count = session.pipes.len();
        steer_into_gap(&mut session);
        let second = session.update(&mut rng);
        assert_eq!(second.pipes_spawned, 1);
        assert_eq!(session.pipes.len(), count + 1);
        // Placed one spacing past the old last pipe, then both scrolled once
        let n = session.pipes.len();
        assert_eq!(session.pipes[n - 2].x, last_x - 3.0);
        assert_eq!(session.pipes[n - 1].x, session.pipes[n - 2].x + 300.0);

        for _ in 0..30 {
            steer_into_gap(&mut session);
            let report = session.update(&mut rng);
            assert_eq!(report.pipes_spawned, 0);
        }
    }

    #[test]
    fn test_offscreen_pipes_removed_in_order() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        session.handle_input(GameInput::Jump, &mut rng);
        session.pipes[0].x = -78.0;
        session.pipes[0].scored = true;
        session.pipes[0].replaced = true;
        session.pipes[1].x = -50.0;
        session.pipes[1].scored = true;
        session.pipes[1].replaced = true;

        let report = session.update(&mut rng);
        assert_eq!(report.pipes_removed, 1);
        assert!((session.pipes[0].x - (-53.0)).abs() < f64::EPSILON);
        assert!(session.pipes.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_floor_death_freezes_pipes_and_records_best() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        session.handle_input(GameInput::Jump, &mut rng);
        session.bird.points = 4;
        session.bird.y = session.config.floor_y() - 0.5;
        session.bird.velocity = 2.0;

        let report = session.update(&mut rng);
        assert_eq!(report.died, Some(DeathCause::Floor));
        assert!(report.new_best);
        assert_eq!(session.best_score, 4);
        assert!(!session.pipes_moving);
    }

    #[test]
    fn test_restart_keeps_best_score() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        session.handle_input(GameInput::Jump, &mut rng);
        session.bird.points = 3;
        session.bird.y = session.config.floor_y();
        session.bird.velocity = 1.0;
        session.update(&mut rng);
        assert_eq!(session.mode(), Mode::Dead);

        let outcome = session.handle_input(GameInput::Jump, &mut rng);
        assert_eq!(outcome, InputOutcome::Restarted);
        assert_eq!(session.mode(), Mode::Waiting);
        assert_eq!(session.score(), 0);
        assert_eq!(session.best_score, 3);
        assert!(session.pipes_moving);
        assert_eq!(session.pipes.len(), 5);
        assert_eq!(session.frame, 0);
    }

    #[test]
    fn test_lower_score_does_not_lower_best() {
        let mut rng = create_test_rng();
        let mut session = new_session(&mut rng);
        session.best_score = 10;
        session.handle_input(GameInput::Jump, &mut rng);
        session.bird.points = 2;
        session.bird.y = session.config.floor_y();
        session.bird.velocity = 1.0;
        let report = session.update(&mut rng);
        assert!(!report.new_best);
        assert_eq!(session.best_score, 10);
    }
}
