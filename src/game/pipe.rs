//! Pipe obstacles: a top and bottom column with a gap between them.

use super::bird::Bird;
use crate::config::GameConfig;
use rand::Rng;

/// A single pipe obstacle (top + bottom pair with a gap).
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge (scrolls left every frame while pipes are moving).
    pub x: f64,
    /// Top edge of the gap; the top column spans `0..gap_top`.
    pub gap_top: f64,
    pub gap: f64,
    pub width: f64,
    pub speed: f64,
    /// Whether the bird has passed this pipe. A scored pipe never scores again.
    pub scored: bool,
    /// Whether this pipe has already produced the pipe that follows it.
    pub replaced: bool,
}

impl Pipe {
    /// Create a pipe with an explicit gap position.
    pub fn new(x: f64, gap_top: f64, config: &GameConfig) -> Self {
        Self {
            x,
            gap_top,
            gap: config.pipe_gap,
            width: config.pipe_width,
            speed: config.pipe_speed,
            scored: false,
            replaced: false,
        }
    }

    /// Create a pipe whose gap is placed uniformly at random within the margins.
    pub fn spawn<R: Rng>(x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let min = config.gap_top_min();
        let max = config.gap_top_max();
        let gap_top = if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        };
        Self::new(x, gap_top, config)
    }

    /// Scroll one frame to the left.
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    /// True once the right edge has left the screen.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Axis-aligned overlap test against either column.
    pub fn collides_with(&self, bird: &Bird) -> bool {
        let overlaps_horizontally = bird.right() > self.x && bird.x < self.right();
        overlaps_horizontally && (bird.y < self.gap_top || bird.bottom() > self.gap_bottom())
    }

    /// Horizontal center, used for scoring.
    pub fn midpoint(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge of the gap, where the bottom column starts.
    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap
    }
}
