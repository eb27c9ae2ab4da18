//! World configuration.
//!
//! Every tunable of the simulation lives here so a `Session` can be built
//! with a narrower world in tests. The player never edits it.

use crate::constants::*;
use thiserror::Error;

/// Geometry and physics constants for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,

    pub gravity: f64,
    /// Velocity set by a jump (negative = upward).
    pub jump_velocity: f64,
    /// Multiplier applied to `jump_velocity` for the bounce off the floor.
    pub floor_bounce_factor: f64,
    pub bird_start_x: f64,
    pub bird_start_y: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub idle_bob_depth: f64,

    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub pipe_spacing: f64,
    pub pipe_speed: f64,
    pub pipe_gap_margin: f64,
    pub initial_pipes: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            floor_bounce_factor: FLOOR_BOUNCE_FACTOR,
            bird_start_x: BIRD_START_X,
            bird_start_y: BIRD_START_Y,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            idle_bob_depth: IDLE_BOB_DEPTH,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_spacing: PIPE_SPACING,
            pipe_speed: PIPE_SPEED,
            pipe_gap_margin: PIPE_GAP_MARGIN,
            initial_pipes: INITIAL_PIPE_COUNT,
        }
    }
}

/// Reasons a `GameConfig` cannot drive a session.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("jump velocity must point upward (negative), got {0}")]
    JumpNotUpward(f64),

    #[error("pipe gap {gap} plus margins {margin} does not fit in height {height}")]
    GapDoesNotFit { gap: f64, margin: f64, height: f64 },

    #[error("bird start ({x}, {y}) lies outside the {width}x{height} world")]
    BirdOutsideWorld {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("at least one initial pipe is required")]
    NoInitialPipes,
}

impl GameConfig {
    /// Check that the geometry is usable.
    ///
    /// Catches negative sizes, a gap that cannot fit between its margins,
    /// and a start position the floor clamp would immediately fire on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("gravity", self.gravity),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spacing", self.pipe_spacing),
            ("pipe_speed", self.pipe_speed),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.jump_velocity.is_nan() || self.jump_velocity >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_velocity));
        }

        if self.pipe_gap_margin < 0.0 || self.gap_top_max() < self.gap_top_min() {
            return Err(ConfigError::GapDoesNotFit {
                gap: self.pipe_gap,
                margin: self.pipe_gap_margin,
                height: self.height,
            });
        }

        let x_ok = (0.0..=self.width - self.bird_width).contains(&self.bird_start_x);
        let y_ok = (0.0..=self.height - self.bird_height).contains(&self.bird_start_y);
        if !x_ok || !y_ok {
            return Err(ConfigError::BirdOutsideWorld {
                x: self.bird_start_x,
                y: self.bird_start_y,
                width: self.width,
                height: self.height,
            });
        }

        if self.initial_pipes == 0 {
            return Err(ConfigError::NoInitialPipes);
        }

        Ok(())
    }

    /// Smallest allowed `gap_top` (gap nearest the ceiling).
    pub fn gap_top_min(&self) -> f64 {
        self.pipe_gap_margin
    }

    /// Largest allowed `gap_top` (gap nearest the floor).
    pub fn gap_top_max(&self) -> f64 {
        self.height - self.pipe_gap - self.pipe_gap_margin
    }

    /// Floor position for the bird's top edge.
    pub fn floor_y(&self) -> f64 {
        self.height - self.bird_height
    }

    /// Velocity given to the bird when it hits the floor.
    pub fn floor_bounce_velocity(&self) -> f64 {
        self.jump_velocity * self.floor_bounce_factor
    }
}
