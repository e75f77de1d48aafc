use crate::params::Params;
use crate::{Ball, Config, Paddle, PlayField, Side};
use hecs::World;

/// Fold `y` back into `[0, max]` as if it bounced off both ends any number
/// of times
pub fn fold_into_range(y: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * max;
    let m = y.rem_euclid(period);
    if m > max {
        period - m
    } else {
        m
    }
}

/// Predict the ball's center y when it reaches the computer paddle's plane
///
/// The straight-line extrapolation is reflected off the top and bottom edges
/// as many times as needed. A ball moving away from the computer predicts its
/// current center.
pub fn predict_ball_y(ball: &Ball, field: &PlayField, paddle_width: f32) -> f32 {
    let half = ball.size / 2.0;
    if ball.vel.x <= 0.0 {
        return ball.pos.y + half;
    }

    let plane_x = field.width - paddle_width - ball.size;
    let steps = ((plane_x - ball.pos.x) / ball.vel.x).max(0.0);
    let raw_y = ball.pos.y + ball.vel.y * steps;

    fold_into_range(raw_y, field.max_ball_y(ball.size)) + half
}

/// Move the computer paddle toward the predicted intercept
///
/// Speed is a tenth of the remaining distance, kept within
/// `[ai_min_speed, ai_max_speed]`. Inside the dead-zone the paddle holds.
pub fn update_ai(world: &mut World, field: &PlayField, config: &Config) {
    let ball = world
        .query_mut::<&Ball>()
        .into_iter()
        .next()
        .map(|(_e, ball)| *ball);

    let Some(ball) = ball else {
        return;
    };

    let target = predict_ball_y(&ball, field, config.paddle_width);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Computer {
            continue;
        }
        step_toward(paddle, target, config);
        paddle.top = field.clamp_paddle_top(paddle.top, paddle.height);
    }
}

fn step_toward(paddle: &mut Paddle, target: f32, config: &Config) {
    let center = paddle.center();
    let distance = (center - target).abs();
    let speed = (distance / Params::AI_SPEED_DIVISOR)
        .min(config.ai_max_speed)
        .max(config.ai_min_speed);

    if center < target - config.ai_dead_zone {
        paddle.top += speed;
    } else if center > target + config.ai_dead_zone {
        paddle.top -= speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn computer_top(world: &World) -> f32 {
        let mut query = world.query::<&Paddle>();
        let (_e, paddle) = query
            .iter()
            .find(|(_e, p)| p.side == Side::Computer)
            .unwrap();
        paddle.top
    }

    #[test]
    fn test_fold_into_range() {
        assert_eq!(fold_into_range(50.0, 100.0), 50.0);
        assert_eq!(fold_into_range(-30.0, 100.0), 30.0);
        assert_eq!(fold_into_range(130.0, 100.0), 70.0);
        assert_eq!(fold_into_range(250.0, 100.0), 50.0, "Two bounces");
        assert_eq!(fold_into_range(-230.0, 100.0), 30.0);
        assert_eq!(fold_into_range(42.0, 0.0), 0.0, "Degenerate range");
    }

    #[test]
    fn test_predict_straight_line() {
        let field = PlayField::new(800.0, 600.0);
        let ball = Ball::new(Vec2::new(365.0, 100.0), Vec2::new(10.0, 2.0), 20.0);
        // Plane at 765, 40 steps away
        assert_eq!(predict_ball_y(&ball, &field, 15.0), 100.0 + 80.0 + 10.0);
    }

    #[test]
    fn test_predict_with_many_bounces() {
        let field = PlayField::new(800.0, 120.0);
        // 100 steps to the plane, 600 px of vertical travel in a 100 px lane
        let ball = Ball::new(Vec2::new(-235.0, 50.0), Vec2::new(10.0, 6.0), 20.0);
        let predicted = predict_ball_y(&ball, &field, 15.0);
        // 650 folds to 50 after three full lanes and one reflection
        assert!((predicted - 60.0).abs() < 1e-3, "got {predicted}");
    }

    #[test]
    fn test_predict_ball_moving_away() {
        let field = PlayField::new(800.0, 600.0);
        let ball = Ball::new(Vec2::new(400.0, 200.0), Vec2::new(-5.0, 3.0), 20.0);
        assert_eq!(predict_ball_y(&ball, &field, 15.0), 210.0);
    }

    #[test]
    fn test_ai_moves_toward_target_with_capped_speed() {
        let mut world = World::new();
        let field = PlayField::new(800.0, 600.0);
        let config = Config::new();
        create_paddle(&mut world, Side::Computer, 0.0, 100.0);
        create_ball(&mut world, Vec2::new(400.0, 490.0), Vec2::new(-5.0, 0.0), 20.0);

        update_ai(&mut world, &field, &config);

        // Distance 450 / 10 = 45, capped at 5
        assert_eq!(computer_top(&world), 5.0);
    }

    #[test]
    fn test_ai_minimum_speed() {
        let mut world = World::new();
        let field = PlayField::new(800.0, 600.0);
        let config = Config::new();
        create_paddle(&mut world, Side::Computer, 200.0, 100.0);
        // Ball center 15 px below paddle center
        create_ball(&mut world, Vec2::new(400.0, 255.0), Vec2::new(-5.0, 0.0), 20.0);

        update_ai(&mut world, &field, &config);

        assert_eq!(computer_top(&world), 202.0, "Floor of 2 px per update");
    }

    #[test]
    fn test_ai_dead_zone() {
        let mut world = World::new();
        let field = PlayField::new(800.0, 600.0);
        let config = Config::new();
        create_paddle(&mut world, Side::Computer, 200.0, 100.0);
        create_ball(&mut world, Vec2::new(400.0, 248.0), Vec2::new(-5.0, 0.0), 20.0);

        update_ai(&mut world, &field, &config);

        assert_eq!(computer_top(&world), 200.0);
    }

    #[test]
    fn test_ai_stays_in_field() {
        let mut world = World::new();
        let field = PlayField::new(800.0, 600.0);
        let config = Config::new();
        create_paddle(&mut world, Side::Computer, 498.0, 100.0);
        create_ball(&mut world, Vec2::new(400.0, 580.0), Vec2::new(-5.0, 0.0), 20.0);

        update_ai(&mut world, &field, &config);

        assert_eq!(computer_top(&world), 500.0);
    }

    #[test]
    fn test_ai_ignores_player_paddle() {
        let mut world = World::new();
        let field = PlayField::new(800.0, 600.0);
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 0.0, 100.0);
        create_ball(&mut world, Vec2::new(400.0, 490.0), Vec2::new(5.0, 0.0), 20.0);

        update_ai(&mut world, &field, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.top, 0.0);
        }
    }
}
