//! Read-only projection of the simulation for rendering
//!
//! Building a [`Frame`] never touches the world mutably, so rendering the
//! same state twice draws the same picture.

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Color, Paddle, Particle, PowerUp, Side};
use crate::fsm::PongState;
use crate::map::PlayField;
use crate::resources::{Feedback, Score};

/// Axis-aligned rectangle in field pixels, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub side: Side,
    pub rect: Rect,
    pub color: Color,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub state: PongState,
    pub field: PlayField,
    pub shake_offset: f32,
    pub ball: Option<Rect>,
    pub paddles: Vec<PaddleView>,
    pub particles: Vec<ParticleView>,
    pub power_up: Option<Rect>,
    pub score: Score,
}

impl Frame {
    pub fn capture(
        world: &World,
        state: PongState,
        field: &PlayField,
        paddle_width: f32,
        feedback: &Feedback,
        score: &Score,
    ) -> Self {
        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| Rect::new(ball.pos, Vec2::splat(ball.size)));

        let mut paddles: Vec<PaddleView> = world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| PaddleView {
                side: paddle.side,
                rect: Rect::new(
                    Vec2::new(field.paddle_x(paddle.side, paddle_width), paddle.top),
                    Vec2::new(paddle_width, paddle.height),
                ),
                color: match paddle.side {
                    Side::Player => Color::PLAYER,
                    Side::Computer => Color::COMPUTER,
                },
                highlighted: feedback.is_flashing(paddle.side),
            })
            .collect();
        // Stable order regardless of spawn order
        paddles.sort_by_key(|p| p.side == Side::Computer);

        let particles = world
            .query::<&Particle>()
            .iter()
            .map(|(_e, particle)| {
                let mut color = particle.color;
                color.0[3] *= particle.opacity;
                ParticleView {
                    pos: particle.pos,
                    size: particle.size,
                    color,
                }
            })
            .collect();

        let power_up = world
            .query::<&PowerUp>()
            .iter()
            .next()
            .map(|(_e, power_up)| Rect::new(power_up.pos, Vec2::splat(power_up.size)));

        Self {
            state,
            field: *field,
            shake_offset: feedback.shake_offset(),
            ball,
            paddles,
            particles,
            power_up,
            score: *score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, create_power_up};

    #[test]
    fn test_capture_projects_world() {
        let mut world = World::new();
        let field = PlayField::new(800.0, 460.0);
        create_paddle(&mut world, Side::Computer, 100.0, 100.0);
        create_paddle(&mut world, Side::Player, 50.0, 150.0);
        create_ball(&mut world, Vec2::new(390.0, 220.0), Vec2::new(6.0, 6.0), 20.0);
        create_power_up(&mut world, Vec2::new(200.0, 200.0), 25.0);

        let mut feedback = Feedback::new();
        feedback.flash(Side::Computer, 0.1);

        let frame = Frame::capture(
            &world,
            PongState::Running,
            &field,
            15.0,
            &feedback,
            &Score::new(),
        );

        assert_eq!(
            frame.ball,
            Some(Rect::new(Vec2::new(390.0, 220.0), Vec2::splat(20.0)))
        );
        assert_eq!(frame.paddles.len(), 2);
        assert_eq!(frame.paddles[0].side, Side::Player);
        assert_eq!(frame.paddles[0].rect.pos, Vec2::new(0.0, 50.0));
        assert_eq!(frame.paddles[0].rect.size, Vec2::new(15.0, 150.0));
        assert!(!frame.paddles[0].highlighted);
        assert_eq!(frame.paddles[1].rect.pos, Vec2::new(785.0, 100.0));
        assert!(frame.paddles[1].highlighted);
        assert!(frame.power_up.is_some());
    }

    #[test]
    fn test_capture_is_idempotent() {
        let mut world = World::new();
        let field = PlayField::default();
        create_ball(&mut world, Vec2::new(10.0, 10.0), Vec2::ONE, 20.0);
        let feedback = Feedback::new();
        let score = Score::new();

        let a = Frame::capture(&world, PongState::Idle, &field, 15.0, &feedback, &score);
        let b = Frame::capture(&world, PongState::Idle, &field, 15.0, &feedback, &score);
        assert_eq!(a, b);
    }

    #[test]
    fn test_particle_alpha_follows_opacity() {
        let mut world = World::new();
        world.spawn((Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 8.0,
            color: Color::BALL,
            opacity: 0.5,
        },));

        let frame = Frame::capture(
            &world,
            PongState::Running,
            &PlayField::default(),
            15.0,
            &Feedback::new(),
            &Score::new(),
        );
        assert_eq!(frame.particles[0].color.0[3], 0.5);
    }
}
