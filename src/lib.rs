//! Flappy - terminal side-scroller library
//!
//! Exposes the simulation, frame composition and terminal scene so the
//! binary stays a thin loop and everything else can be tested headless.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod render;
pub mod timing;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use game::{GameInput, Mode, Session};
