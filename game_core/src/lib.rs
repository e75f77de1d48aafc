pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;
pub mod view;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use view::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// Ball, paddle and particle motion advance a fixed amount per call.
/// `time.dt` only drives the wall-clock timers and is clamped first.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &PlayField,
    config: &Config,
    score: &mut Score,
    difficulty: &mut Difficulty,
    events: &mut Events,
    feedback: &mut Feedback,
    timers: &mut PowerUpTimers,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    time.dt = time.dt.clamp(0.0, Params::MAX_DT);

    // Clear events at start of tick
    events.clear();

    // 1. Wall-clock timers: highlight, shake, effect reversal, spawns
    feedback.update(time.dt);
    expire_effects(world, time, field, config, timers);
    power_up_timer(world, time, field, config, timers, events, rng);

    // 2. Time-based speed ramp
    apply_time_ramp(world, difficulty, config);

    // 3. Move ball
    move_ball(world);
    spawn_trail(world, rng, config);

    // 4. Collisions (walls, paddles, power-up)
    check_wall_collisions(world, field, config, events, rng);
    check_paddle_collisions(world, field, config, events, feedback, rng);
    check_power_up_collision(world, field, config, timers, events, rng);

    // 5. Scoring (ball left the field)
    check_scoring(world, field, config, score, difficulty, events, rng);

    // 6. Computer paddle
    if config.ai_cadence == AiCadence::Tick {
        update_ai(world, field, config);
    }

    // 7. Particles
    update_particles(world);

    // Update time
    time.now += time.dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, top: f32, height: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, top, height),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}

/// Helper to create a power-up entity
pub fn create_power_up(world: &mut World, pos: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((PowerUp { pos, size },))
}
