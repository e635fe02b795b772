//! Presentation boundary
//!
//! A [`Frame`] is a read-only, screen-space picture of a session taken after
//! the tick completes. Screen space has its origin at the top-left and Y
//! pointing down. Renderers draw frames and never touch the simulation.

use serde::Serialize;

use crate::consts::PLATFORM_HEIGHT;
use crate::sim::Session;
use crate::world_to_screen_y;

/// Axis-aligned rectangle in screen pixels (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Does any part of the rect fall inside a `width` x `height` screen?
    pub fn visible_in(&self, width: f32, height: f32) -> bool {
        self.x < width && self.x + self.w > 0.0 && self.y < height && self.y + self.h > 0.0
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub platforms: Vec<Rect>,
    pub body: Rect,
    pub score: u64,
    pub game_over: bool,
}

impl Frame {
    /// Project the session into screen space
    pub fn capture(session: &Session) -> Self {
        let camera_y = session.camera_y;
        let screen_h = session.tuning.screen_height;

        let platforms = session
            .platforms()
            .iter()
            .map(|p| Rect {
                x: p.x,
                y: world_to_screen_y(p.y, camera_y, screen_h),
                w: p.width,
                h: PLATFORM_HEIGHT,
            })
            .collect();

        let body = &session.body;
        let body = Rect {
            x: body.pos.x,
            y: world_to_screen_y(body.top(), camera_y, screen_h),
            w: body.width(),
            h: body.height(),
        };

        Self {
            tick: session.time_ticks,
            platforms,
            body,
            score: session.score,
            game_over: session.is_over(),
        }
    }

    /// Platforms at least partly on screen
    pub fn visible_platforms(&self, width: f32, height: f32) -> impl Iterator<Item = &Rect> {
        self.platforms
            .iter()
            .filter(move |r| r.visible_in(width, height))
    }
}

/// Draws frames (rectangles and the score)
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}
