use crate::params::Params;
use crate::systems::particles::spawn_burst;
use crate::{Ball, Config, Difficulty, Events, GameRng, PlayField, Score, Side};
use hecs::World;

/// Check if ball left the field (scoring)
///
/// A point raises the base speed and serves the ball again from the
/// center at that speed.
pub fn check_scoring(
    world: &mut World,
    field: &PlayField,
    config: &Config,
    score: &mut Score,
    difficulty: &mut Difficulty,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut serve = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Computer
        } else if ball.pos.x > field.max_ball_x(ball.size) {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        events.scored = Some(scorer);

        let speed = difficulty.raise(config.ball_speed_step, config.ball_speed_max);
        let center = field.center_for(ball.size);
        ball.reset(center, speed, config.ball_reset_vy_range, rng);

        log::debug!(
            "{:?} scored ({}-{}), base speed {:.1}",
            scorer,
            score.player,
            score.computer,
            speed
        );
        serve = Some(center);
    }

    if let Some(at) = serve {
        spawn_burst(world, rng, at, Params::SCORE_PARTICLES, None, config.particle_life);
    }
}
