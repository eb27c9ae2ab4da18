//! Frame composition.
//!
//! `compose` turns a session into a display list of rectangles and text in
//! world coordinates. It never mutates the session, so a frame can be
//! inspected without a terminal. `ui::canvas` rasterizes the list.

use crate::game::{proof_code, Mode, Session};

/// Palette of the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Sky,
    Text,
    Bird,
    DeadBird,
    Pipe,
}

/// Text weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Banners and final results.
    Large,
    /// Score line, prompts.
    Small,
}

/// One drawing primitive, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: TextSize,
        paint: Paint,
    },
}

/// Build the display list for the current frame, back to front.
pub fn compose(session: &Session) -> Vec<DrawCommand> {
    let config = &session.config;
    let mut commands = Vec::with_capacity(session.pipes.len() * 2 + 6);

    commands.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        width: config.width,
        height: config.height,
        paint: Paint::Sky,
    });

    for pipe in &session.pipes {
        commands.push(DrawCommand::Rect {
            x: pipe.x,
            y: 0.0,
            width: pipe.width,
            height: pipe.gap_top,
            paint: Paint::Pipe,
        });
        commands.push(DrawCommand::Rect {
            x: pipe.x,
            y: pipe.gap_bottom(),
            width: pipe.width,
            height: config.height - pipe.gap_bottom(),
            paint: Paint::Pipe,
        });
    }

    let bird = &session.bird;
    commands.push(DrawCommand::Rect {
        x: bird.x,
        y: bird.y,
        width: bird.width,
        height: bird.height,
        paint: if bird.alive {
            Paint::Bird
        } else {
            Paint::DeadBird
        },
    });

    let banner_x = config.width / 3.0;
    let mut text = |x: f64, y: f64, content: String, size: TextSize| {
        commands.push(DrawCommand::Text {
            x,
            y,
            text: content,
            size,
            paint: Paint::Text,
        });
    };

    match session.mode() {
        Mode::Dead => {
            text(
                banner_x,
                200.0,
                format!("This run: {}", session.score()),
                TextSize::Large,
            );
            text(
                banner_x,
                250.0,
                format!("Best: {}", session.best_score),
                TextSize::Large,
            );
            text(
                banner_x,
                300.0,
                "Press space to restart".to_string(),
                TextSize::Small,
            );
            text(
                config.width / 4.0,
                config.height - 100.0,
                format!(
                    "code that proves your best score: {}",
                    proof_code(session.best_score)
                ),
                TextSize::Small,
            );
        }
        mode => {
            if mode == Mode::Waiting {
                text(banner_x, 200.0, "Flappy Bird".to_string(), TextSize::Large);
            }
            text(
                10.0,
                10.0,
                format!("Score: {}", session.score()),
                TextSize::Small,
            );
            text(
                config.width - 120.0,
                10.0,
                format!("Best: {}", session.best_score),
                TextSize::Small,
            );
        }
    }

    commands
}
