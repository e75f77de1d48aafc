use crate::{Ball, Paddle, PlayField, Side};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Center the player paddle on the pointer, kept inside the field
pub fn move_player_paddle(world: &mut World, field: &PlayField, pointer_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            let top = pointer_y - paddle.height / 2.0;
            paddle.top = field.clamp_paddle_top(top, paddle.height);
        }
    }
}

/// Pull every paddle and the ball back inside the field, e.g. after the
/// field was resized or a paddle grew
pub fn clamp_to_field(world: &mut World, field: &PlayField) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.top = field.clamp_paddle_top(paddle.top, paddle.height);
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.x = ball.pos.x.clamp(0.0, field.max_ball_x(ball.size));
        ball.pos.y = field.clamp_ball_y(ball.pos.y, ball.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_move_ball_adds_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(390.0, 290.0), Vec2::new(6.0, 6.0), 20.0);
        move_ball(&mut world);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(396.0, 296.0));
        }
    }

    #[test]
    fn test_player_paddle_follows_pointer() {
        let mut world = World::new();
        let field = PlayField::new(800.0, 460.0);
        create_paddle(&mut world, Side::Player, 180.0, 100.0);
        create_paddle(&mut world, Side::Computer, 180.0, 100.0);

        move_player_paddle(&mut world, &field, 100.0);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => assert_eq!(paddle.top, 50.0),
                Side::Computer => assert_eq!(paddle.top, 180.0, "Computer paddle untouched"),
            }
        }
    }

    #[test]
    fn test_player_paddle_clamped() {
        let mut world = World::new();
        let field = PlayField::new(800.0, 460.0);
        create_paddle(&mut world, Side::Player, 180.0, 100.0);

        move_player_paddle(&mut world, &field, -400.0);
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.top, 0.0);
        }

        move_player_paddle(&mut world, &field, 9000.0);
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.top, 360.0);
        }
    }

    #[test]
    fn test_clamp_to_field_after_shrink() {
        let mut world = World::new();
        create_paddle(&mut world, Side::Computer, 350.0, 100.0);
        create_ball(&mut world, Vec2::new(700.0, 400.0), Vec2::ZERO, 20.0);

        let field = PlayField::new(400.0, 300.0);
        clamp_to_field(&mut world, &field);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.top, 200.0);
        }
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(380.0, 280.0));
        }
    }
}
