use glam::Vec2;
use serde::Serialize;

/// Rectangle with a top-left position, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// A rect of `size` centered in `viewport`
    pub fn centered(viewport: Vec2, size: Vec2) -> Self {
        Self::new(viewport / 2.0 - size / 2.0, size)
    }
}
