use crate::{Ball, Config, Difficulty};
use hecs::World;

/// Count the tick and, every `ramp_interval_ticks`, speed the ball up by
/// `ramp_factor` while the base speed is still below its ceiling
pub fn apply_time_ramp(world: &mut World, difficulty: &mut Difficulty, config: &Config) {
    difficulty.ticks += 1;

    if config.ramp_interval_ticks == 0
        || difficulty.ticks % config.ramp_interval_ticks != 0
        || difficulty.base_speed >= config.ball_speed_max
    {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel *= config.ramp_factor;
        ball.vel.x = config.cap_rally_vx(ball.vel.x);
    }
    log::debug!("Time ramp at tick {}", difficulty.ticks);
}
