use crate::params::Params;
use crate::systems::movement::clamp_to_field;
use crate::systems::particles::spawn_burst;
use crate::{
    Ball, Config, Events, GameRng, Paddle, PlayField, PowerUp, PowerUpKind, PowerUpTimers, Side,
    Time,
};
use glam::Vec2;
use hecs::{Entity, World};

/// Advance the spawn interval; each firing rolls for a new power-up
pub fn power_up_timer(
    world: &mut World,
    time: &Time,
    field: &PlayField,
    config: &Config,
    timers: &mut PowerUpTimers,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let fired = timers.spawn.update(time.dt);
    for _ in 0..fired {
        if rng.chance(config.power_up_chance) {
            try_spawn_power_up(world, field, config, events, rng);
        }
    }
}

/// Spawn a power-up at a random position away from the edges, unless one
/// is already waiting on the field
pub fn try_spawn_power_up(
    world: &mut World,
    field: &PlayField,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Entity> {
    if world.query_mut::<&PowerUp>().into_iter().next().is_some() {
        return None;
    }

    let margin = Params::POWER_UP_MARGIN;
    let pos = Vec2::new(
        rng.gen_range(margin, field.width - margin),
        rng.gen_range(margin, field.height - margin),
    );

    events.power_up_spawned = true;
    log::debug!("Power-up spawned at ({:.0}, {:.0})", pos.x, pos.y);

    Some(world.spawn((PowerUp {
        pos,
        size: config.power_up_size,
    },)))
}

/// Collect the power-up when the ball overlaps it
pub fn check_power_up_collision(
    world: &mut World,
    field: &PlayField,
    config: &Config,
    timers: &mut PowerUpTimers,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let ball_bounds = world
        .query_mut::<&Ball>()
        .into_iter()
        .next()
        .map(|(_e, ball)| ball.bounds());

    let Some(ball_bounds) = ball_bounds else {
        return;
    };

    let collected = world
        .query_mut::<&PowerUp>()
        .into_iter()
        .find(|(_e, power_up)| power_up.bounds().intersects(&ball_bounds))
        .map(|(entity, power_up)| (entity, power_up.pos));

    let Some((entity, at)) = collected else {
        return;
    };

    let kind = rng.pick_power_up();
    apply_power_up(world, config, kind);
    clamp_to_field(world, field);

    // A fresh pickup pushes the reversal deadline out again
    timers.effect.start(config.power_up_duration);
    events.power_up_collected = Some(kind);
    log::debug!("Power-up collected: {:?}", kind);

    let _ = world.despawn(entity);
    spawn_burst(world, rng, at, Params::POWER_UP_PARTICLES, None, config.particle_life);
}

/// Apply a power-up effect to the ball or the player paddle
pub fn apply_power_up(world: &mut World, config: &Config, kind: PowerUpKind) {
    match kind {
        PowerUpKind::BigBall => {
            for (_e, ball) in world.query_mut::<&mut Ball>() {
                ball.size = config.ball_size_boosted;
            }
        }
        PowerUpKind::BigPaddle => {
            for (_e, paddle) in world.query_mut::<&mut Paddle>() {
                if paddle.side == Side::Player {
                    paddle.height = config.paddle_height_boosted;
                }
            }
        }
        PowerUpKind::SpeedBoost => {
            for (_e, ball) in world.query_mut::<&mut Ball>() {
                ball.vel *= Params::POWER_UP_SPEED_BOOST;
                ball.vel.x = config.cap_rally_vx(ball.vel.x);
            }
        }
    }
}

/// Revert size effects once the effect countdown runs out
///
/// Velocity is left alone; a speed boost lasts for the rest of the rally.
pub fn expire_effects(
    world: &mut World,
    time: &Time,
    field: &PlayField,
    config: &Config,
    timers: &mut PowerUpTimers,
) {
    if !timers.effect.update(time.dt) {
        return;
    }

    for (_e, ball) in world.query_mut::<&mut Ball>() {
        ball.size = config.ball_size;
    }
    for (_e, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.height = config.paddle_height;
        }
    }
    clamp_to_field(world, field);
    log::debug!("Power-up effects expired");
}
