//! Flappy: guide a bird through scrolling pipe gaps.
//!
//! The bird falls under gravity each frame and flaps upward on input.
//! Passing a pipe's midpoint scores a point; touching a pipe or the floor
//! ends the run. Best score survives restarts for the life of the process.

pub mod bird;
pub mod input;
pub mod pipe;
pub mod proof;
pub mod session;

pub use bird::*;
pub use input::*;
pub use pipe::*;
pub use proof::*;
pub use session::*;
