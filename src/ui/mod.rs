pub mod canvas;
pub mod flappy_scene;
pub mod game_common;

use crate::game::Session;
use ratatui::Frame;

/// Draw one frame of the game into the whole terminal.
pub fn draw_ui(frame: &mut Frame, session: &Session) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, session);
}
