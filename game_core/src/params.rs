/// Game tuning parameters for Super Pong
///
/// Units are pixels with the origin at the top-left corner of the play
/// field. Velocities are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 460.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_HEIGHT_BOOSTED: f32 = 150.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SIZE_BOOSTED: f32 = 30.0;
    pub const BALL_SPEED_INITIAL: f32 = 6.0;
    pub const BALL_SPEED_MAX: f32 = 15.0; // Base speed ceiling
    pub const BALL_SPEED_STEP: f32 = 0.5; // Base speed gain per point
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const BALL_DEFLECTION: f32 = 7.0; // vy at the very edge of a paddle
    pub const BALL_RESET_VY_RANGE: f32 = 3.0; // vy drawn from [-3, 3) on reset

    // Time-based ramp
    pub const RAMP_INTERVAL_TICKS: u64 = 500;
    pub const RAMP_FACTOR: f32 = 1.05;

    // Particles
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_SPEED: f32 = 8.0; // Each component drawn from [-4, 4)
    pub const PARTICLE_SIZE: f32 = 8.0;
    pub const WALL_PARTICLES: usize = 5;
    pub const PADDLE_PARTICLES: usize = 10;
    pub const SCORE_PARTICLES: usize = 20;
    pub const POWER_UP_PARTICLES: usize = 30;
    pub const TRAIL_CHANCE: f64 = 0.3;
    pub const TRAIL_SIZE: f32 = 5.0;
    pub const TRAIL_OPACITY: f32 = 0.7;

    // Feedback
    pub const PADDLE_FLASH_SECS: f32 = 0.1;
    pub const SHAKE_SECS: f32 = 0.05;
    pub const SHAKE_OFFSET: f32 = 3.0;

    // Power-ups
    pub const POWER_UP_SIZE: f32 = 25.0;
    pub const POWER_UP_MARGIN: f32 = 50.0;
    pub const POWER_UP_INTERVAL_SECS: f32 = 10.0;
    pub const POWER_UP_CHANCE: f64 = 0.3;
    pub const POWER_UP_DURATION_SECS: f32 = 8.0;
    pub const POWER_UP_SPEED_BOOST: f32 = 1.5;

    // Computer paddle
    pub const AI_MAX_SPEED: f32 = 5.0; // Difficulty factor, higher = harder
    pub const AI_MIN_SPEED: f32 = 2.0;
    pub const AI_SPEED_DIVISOR: f32 = 10.0;
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Physics
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large timer jumps
}
