//! The player-controlled bird.

use crate::config::GameConfig;

/// The bird: position, vertical velocity, and run state.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Left edge.
    pub x: f64,
    /// Top edge. Row 0 = ceiling, positive = downward.
    pub y: f64,
    /// Vertical velocity per frame (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    /// False once the bird hit a pipe or the floor.
    pub alive: bool,
    /// True until the first jump. The bird bobs in place while waiting.
    pub waiting: bool,
    /// Pipes passed this run.
    pub points: u32,

    // Cached physics parameters
    pub gravity: f64,
    pub jump_velocity: f64,
    pub bounce_velocity: f64,
    /// Below this y the idle bird bobs back up.
    pub bob_threshold: f64,
    /// Largest y the living bird may reach.
    pub floor_y: f64,
    pub world_height: f64,
}

impl Bird {
    /// Create a waiting bird at the configured start position.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_start_x,
            y: config.bird_start_y,
            velocity: 0.0,
            width: config.bird_width,
            height: config.bird_height,
            alive: true,
            waiting: true,
            points: 0,

            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
            bounce_velocity: config.floor_bounce_velocity(),
            bob_threshold: config.bird_start_y + config.idle_bob_depth,
            floor_y: config.floor_y(),
            world_height: config.height,
        }
    }

    /// Integrate one frame of physics.
    ///
    /// Returns true once the bird has fallen entirely below the world.
    pub fn advance(&mut self) -> bool {
        if self.waiting && self.y > self.bob_threshold {
            self.velocity = self.jump_velocity;
        }

        self.y += self.velocity;
        self.velocity += self.gravity;

        if self.alive {
            if self.y > self.floor_y {
                self.y = self.floor_y;
                self.velocity = self.bounce_velocity;
                self.die();
            } else if self.y < 0.0 {
                self.y = 0.0;
            }
        }

        self.y > self.world_height
    }

    /// Flap upward. Only meaningful while alive.
    pub fn jump(&mut self) {
        self.waiting = false;
        self.velocity = self.jump_velocity;
    }

    /// Mark the bird dead. Calling it again changes nothing.
    pub fn die(&mut self) {
        self.alive = false;
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}
