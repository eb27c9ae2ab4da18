//! UI-agnostic input actions.

/// Input actions the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap while alive; restart once dead.
    Jump,
    /// Leave the game.
    Quit,
    /// Any other key.
    Other,
}
