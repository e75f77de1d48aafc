use glam::Vec2;

use crate::map::Aabb;

/// Which paddle an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // Left, follows the pointer
    Computer, // Right, driven by the AI
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub top: f32,    // Top offset (clamped to field)
    pub height: f32, // Grows while the paddle power-up is active
}

impl Paddle {
    pub fn new(side: Side, top: f32, height: f32) -> Self {
        Self { side, top, height }
    }

    pub fn center(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Ball component, `pos` is the top-left corner of its bounding box
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(self.size))
    }

    /// Reset ball to `pos` with a random horizontal direction at `speed`
    /// and a vertical component drawn from `[-vy_range, vy_range)`
    pub fn reset(&mut self, pos: Vec2, speed: f32, vy_range: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        self.pos = pos;
        let vx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let vy = rng.0.gen::<f32>() * vy_range * 2.0 - vy_range;
        self.vel = Vec2::new(vx, vy);
    }
}

/// RGBA color, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const PLAYER: Color = Color::rgb(0x00, 0x72, 0xff);
    pub const COMPUTER: Color = Color::rgb(0xdd, 0x24, 0x76);
    pub const BALL: Color = Color::rgb(0xff, 0xff, 0x00);
    pub const POWER_UP: Color = Color::rgb(0xff, 0x00, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    /// Color from hue in degrees, saturation and lightness in `[0, 1]`
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        Self([r + m, g + m, b + m, 1.0])
    }
}

/// Visual particle; moves by its own velocity each tick
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    pub opacity: f32,
}

/// Remaining lifetime in ticks
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    pub ticks_left: u32,
    pub total: u32,
}

impl Lifetime {
    pub fn new(ticks: u32) -> Self {
        Self {
            ticks_left: ticks,
            total: ticks.max(1),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.ticks_left == 0
    }

    /// Fraction of life left, used as opacity
    pub fn fraction(&self) -> f32 {
        self.ticks_left as f32 / self.total as f32
    }
}

/// The collectible power-up; at most one exists
#[derive(Debug, Clone, Copy)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: f32,
}

impl PowerUp {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(self.size))
    }
}

/// Effect applied when the ball collects a power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    BigBall,
    BigPaddle,
    SpeedBoost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::BigBall,
        PowerUpKind::BigPaddle,
        PowerUpKind::SpeedBoost,
    ];
}
