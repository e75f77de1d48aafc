use crate::params::Params;
use crate::systems::particles::spawn_burst;
use crate::{Ball, Color, Config, Events, Feedback, GameRng, Paddle, PlayField, Side};
use glam::Vec2;
use hecs::World;

/// Bounce the ball off the top and bottom edges
///
/// The vertical velocity only flips while the ball is still heading into the
/// edge, so a ball that overlaps the boundary for more than one tick does not
/// flip back.
pub fn check_wall_collisions(
    world: &mut World,
    field: &PlayField,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut impact = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let max_y = field.max_ball_y(ball.size);

        if ball.pos.y <= 0.0 && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            impact = Some(Vec2::new(ball.pos.x, 0.0));
        } else if ball.pos.y >= max_y && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            impact = Some(Vec2::new(ball.pos.x, max_y));
        }

        // Clamp position to prevent stuck
        ball.pos.y = field.clamp_ball_y(ball.pos.y, ball.size);
    }

    if let Some(at) = impact {
        events.ball_hit_wall = true;
        spawn_burst(world, rng, at, Params::WALL_PARTICLES, None, config.particle_life);
    }
}

/// Check ball collisions with both paddles
pub fn check_paddle_collisions(
    world: &mut World,
    field: &PlayField,
    config: &Config,
    events: &mut Events,
    feedback: &mut Feedback,
    rng: &mut GameRng,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();

    let mut hit = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            let overlaps_y =
                ball.pos.y + ball.size >= paddle.top && ball.pos.y <= paddle.top + paddle.height;

            // Within paddle thickness and heading toward the paddle
            let (reaches_x, approaching) = match paddle.side {
                Side::Player => (ball.pos.x <= config.paddle_width, ball.vel.x < 0.0),
                Side::Computer => (
                    ball.pos.x >= field.width - config.paddle_width - ball.size,
                    ball.vel.x > 0.0,
                ),
            };

            if !(overlaps_y && reaches_x && approaching) {
                continue;
            }

            // Relative position from -1 (top edge) to 1 (bottom edge)
            let half_height = paddle.height / 2.0;
            let hit_relative_y = ((ball.center().y - paddle.center()) / half_height).clamp(-1.0, 1.0);

            let new_vx = config.cap_rally_vx(-ball.vel.x * config.ball_speed_increase);
            ball.vel = Vec2::new(new_vx, hit_relative_y * config.ball_deflection);

            let impact_y = ball.pos.y + ball.size / 2.0;
            let impact = match paddle.side {
                Side::Player => Vec2::new(ball.pos.x + ball.size, impact_y),
                Side::Computer => Vec2::new(ball.pos.x, impact_y),
            };

            // Push ball out of paddle
            ball.pos.x = match paddle.side {
                Side::Player => config.paddle_width,
                Side::Computer => field.width - config.paddle_width - ball.size,
            };

            hit = Some((paddle.side, impact));
            break;
        }
    }

    if let Some((side, impact)) = hit {
        events.ball_hit_paddle = Some(side);

        let (color, shake) = match side {
            Side::Player => (Color::PLAYER, Params::SHAKE_OFFSET),
            Side::Computer => (Color::COMPUTER, -Params::SHAKE_OFFSET),
        };
        feedback.flash(side, Params::PADDLE_FLASH_SECS);
        feedback.shake(shake, Params::SHAKE_SECS);

        spawn_burst(
            world,
            rng,
            impact,
            Params::PADDLE_PARTICLES,
            Some(color),
            config.particle_life,
        );
    }
}
