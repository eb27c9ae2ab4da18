// World dimensions (simulation units, scaled onto the terminal when drawn)
pub const WORLD_WIDTH: f64 = 900.0;
pub const WORLD_HEIGHT: f64 = 600.0;

// Frame timing
pub const FRAMES_PER_SECOND: u32 = 60;

// Bird physics, all per frame
pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -9.0;
pub const FLOOR_BOUNCE_FACTOR: f64 = 1.4;
pub const BIRD_START_X: f64 = WORLD_WIDTH / 3.0 - 50.0;
pub const BIRD_START_Y: f64 = WORLD_HEIGHT / 2.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 40.0;
/// How far below its start the idle bird sinks before it bobs back up.
pub const IDLE_BOB_DEPTH: f64 = 60.0;

// Pipes
pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_GAP: f64 = 170.0;
pub const PIPE_SPACING: f64 = 300.0;
pub const PIPE_SPEED: f64 = 3.0;
/// Minimum distance between a gap and the ceiling or floor.
pub const PIPE_GAP_MARGIN: f64 = 20.0;
pub const INITIAL_PIPE_COUNT: usize = 5;

// Proof code
pub const PROOF_CODE_LEN: usize = 6;
