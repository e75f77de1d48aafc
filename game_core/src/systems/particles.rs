use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Color, Lifetime, Particle};
use crate::params::Params;
use crate::{Config, GameRng};

/// Spawn `count` particles at `at`, flying in random directions.
/// Without a color each particle gets a random hue.
pub fn spawn_burst(
    world: &mut World,
    rng: &mut GameRng,
    at: Vec2,
    count: usize,
    color: Option<Color>,
    life: u32,
) {
    let half = Params::PARTICLE_SPEED / 2.0;
    for _ in 0..count {
        let color = color.unwrap_or_else(|| Color::hsl(rng.gen_range(0.0, 360.0), 0.8, 0.6));
        let vel = Vec2::new(rng.gen_range(-half, half), rng.gen_range(-half, half));
        world.spawn((
            Particle {
                pos: at,
                vel,
                size: Params::PARTICLE_SIZE,
                color,
                opacity: 1.0,
            },
            Lifetime::new(life),
        ));
    }
}

/// Occasionally drop a stationary, fading particle behind the ball
pub fn spawn_trail(world: &mut World, rng: &mut GameRng, config: &Config) {
    if !config.trails || !rng.chance(Params::TRAIL_CHANCE) {
        return;
    }

    let Some(pos) = world.query_mut::<&Ball>().into_iter().next().map(|(_, b)| b.pos) else {
        return;
    };

    let mut color = Color::hsl(rng.gen_range(0.0, 360.0), 1.0, 0.7);
    color.0[3] = Params::TRAIL_OPACITY;
    world.spawn((
        Particle {
            pos,
            vel: Vec2::ZERO,
            size: Params::TRAIL_SIZE,
            color,
            opacity: 1.0,
        },
        Lifetime::new(config.particle_life),
    ));
}

/// Move particles, fade them with their remaining life and despawn the
/// ones that just ran out
pub fn update_particles(world: &mut World) {
    let mut to_remove = Vec::new();

    for (entity, (particle, lifetime)) in world.query_mut::<(&mut Particle, &mut Lifetime)>() {
        particle.pos += particle.vel;
        lifetime.ticks_left = lifetime.ticks_left.saturating_sub(1);
        particle.opacity = lifetime.fraction();

        if lifetime.is_expired() {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

/// Remove every particle, used when a game restarts
pub fn clear_particles(world: &mut World) {
    let entities: Vec<_> = world
        .query_mut::<&Particle>()
        .into_iter()
        .map(|(e, _)| e)
        .collect();
    for entity in entities {
        let _ = world.despawn(entity);
    }
}
