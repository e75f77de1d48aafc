use glam::Vec2;

use crate::components::Side;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The rectangular play field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Top-left position that centers a square of `size` in the field
    pub fn center_for(&self, size: f32) -> Vec2 {
        Vec2::new(self.width / 2.0 - size / 2.0, self.height / 2.0 - size / 2.0)
    }

    /// X of the paddle's outer edge: 0 for the player, flush right for the computer
    pub fn paddle_x(&self, side: Side, paddle_width: f32) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Computer => self.width - paddle_width,
        }
    }

    /// Clamp a paddle's top offset so the whole paddle stays inside the field
    pub fn clamp_paddle_top(&self, top: f32, paddle_height: f32) -> f32 {
        top.clamp(0.0, (self.height - paddle_height).max(0.0))
    }

    /// Clamp a ball's top so the whole ball stays inside the field
    pub fn clamp_ball_y(&self, y: f32, ball_size: f32) -> f32 {
        y.clamp(0.0, self.max_ball_y(ball_size))
    }

    pub fn max_ball_y(&self, ball_size: f32) -> f32 {
        (self.height - ball_size).max(0.0)
    }

    pub fn max_ball_x(&self, ball_size: f32) -> f32 {
        (self.width - ball_size).max(0.0)
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self::new(
            crate::params::Params::FIELD_WIDTH,
            crate::params::Params::FIELD_HEIGHT,
        )
    }
}
