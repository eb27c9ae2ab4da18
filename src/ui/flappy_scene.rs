//! Terminal scene for a running session.

use super::canvas::Canvas;
use super::game_common::{create_game_layout, render_status_bar};
use crate::game::{Mode, Session};
use crate::render::compose;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest area the scene draws into; anything smaller gets a notice.
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 8;

const CONTROLS: [(&str, &str); 2] = [("[Space/Up/Enter]", "Flap"), ("[Esc/Q]", "Quit")];

/// Render the whole game scene into `area`.
pub fn render_flappy(frame: &mut Frame, area: Rect, session: &Session) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let notice = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(notice, area);
        return;
    }

    let border = match session.mode() {
        Mode::Dead => Color::Red,
        _ => Color::Cyan,
    };
    let layout = create_game_layout(frame, area, " Flappy Bird ", border, 4);

    render_play_area(frame, layout.content, session);
    render_status(frame, layout.status_bar, session);
}

/// Rasterize the session's display list into the play field.
fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut canvas = Canvas::new(
        area.width,
        area.height,
        session.config.width,
        session.config.height,
    );
    canvas.draw_all(&compose(session));
    frame.render_widget(Paragraph::new(canvas.into_lines()), area);
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    let (text, color) = match session.mode() {
        Mode::Waiting => ("Press Space to start!".to_string(), Color::Yellow),
        Mode::Playing => (
            format!("Score: {}   Best: {}", session.score(), session.best_score),
            Color::Green,
        ),
        Mode::Dead => (
            format!("Crashed with {} - Space to restart", session.score()),
            Color::Red,
        ),
    };
    render_status_bar(frame, area, &text, color, &CONTROLS);
}
