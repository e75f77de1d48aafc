use crate::params::Params;

/// When the computer paddle re-evaluates its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiCadence {
    /// Once per simulation tick
    #[default]
    Tick,
    /// Only when the player moves the pointer over the field
    PointerMove,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_height_boosted: f32,
    pub ball_size: f32,
    pub ball_size_boosted: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_step: f32,
    pub ball_speed_increase: f32,
    pub ball_deflection: f32,
    pub ball_reset_vy_range: f32,
    pub ramp_interval_ticks: u64,
    pub ramp_factor: f32,
    pub particle_life: u32,
    pub power_up_size: f32,
    pub power_up_interval: f32,
    pub power_up_chance: f64,
    pub power_up_duration: f32,
    pub ai_max_speed: f32,
    pub ai_min_speed: f32,
    pub ai_dead_zone: f32,
    pub ai_cadence: AiCadence,
    /// Hard cap on |vx| within a rally. `None` keeps per-hit acceleration
    /// unbounded until the next reset.
    pub rally_speed_cap: Option<f32>,
    pub trails: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_height_boosted: Params::PADDLE_HEIGHT_BOOSTED,
            ball_size: Params::BALL_SIZE,
            ball_size_boosted: Params::BALL_SIZE_BOOSTED,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_step: Params::BALL_SPEED_STEP,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_deflection: Params::BALL_DEFLECTION,
            ball_reset_vy_range: Params::BALL_RESET_VY_RANGE,
            ramp_interval_ticks: Params::RAMP_INTERVAL_TICKS,
            ramp_factor: Params::RAMP_FACTOR,
            particle_life: Params::PARTICLE_LIFE,
            power_up_size: Params::POWER_UP_SIZE,
            power_up_interval: Params::POWER_UP_INTERVAL_SECS,
            power_up_chance: Params::POWER_UP_CHANCE,
            power_up_duration: Params::POWER_UP_DURATION_SECS,
            ai_max_speed: Params::AI_MAX_SPEED,
            ai_min_speed: Params::AI_MIN_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_cadence: AiCadence::default(),
            rally_speed_cap: None,
            trails: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config without cosmetic randomness, for deterministic tests
    pub fn without_trails() -> Self {
        Self {
            trails: false,
            ..Self::default()
        }
    }

    /// Clamp a horizontal velocity to `rally_speed_cap`, if set
    pub fn cap_rally_vx(&self, vx: f32) -> f32 {
        match self.rally_speed_cap {
            Some(cap) => vx.clamp(-cap, cap),
            None => vx,
        }
    }
}
