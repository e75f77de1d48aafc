use crate::components::{PowerUpKind, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Wall-clock seconds covered by this tick
    pub now: f32, // Total elapsed seconds while running
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        use rand::Rng;
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        use rand::Rng;
        self.0.gen_bool(probability.clamp(0.0, 1.0))
    }

    pub fn pick_power_up(&mut self) -> PowerUpKind {
        use rand::Rng;
        PowerUpKind::ALL[self.0.gen_range(0..PowerUpKind::ALL.len())]
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub scored: Option<Side>, // Side that won the point
    pub power_up_spawned: bool,
    pub power_up_collected: Option<PowerUpKind>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Base speed and the tick counter that drives the time ramp
#[derive(Debug, Clone, Copy)]
pub struct Difficulty {
    pub base_speed: f32,
    pub ticks: u64,
}

impl Difficulty {
    pub fn new(base_speed: f32) -> Self {
        Self {
            base_speed,
            ticks: 0,
        }
    }

    /// Raise the base speed by `step`, never past `max`
    pub fn raise(&mut self, step: f32, max: f32) -> f32 {
        self.base_speed = (self.base_speed + step).min(max);
        self.base_speed
    }
}

/// One-shot countdown in seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct Countdown {
    pub timer: f32, // Time remaining (0 = not armed)
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, secs: f32) {
        self.timer = secs;
    }

    pub fn cancel(&mut self) {
        self.timer = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Advance by `dt`; true exactly once, on the tick the countdown runs out
    pub fn update(&mut self, dt: f32) -> bool {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
            return self.timer <= 0.0;
        }
        false
    }
}

/// Periodic timer in seconds
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    pub period: f32,
    pub elapsed: f32,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Advance by `dt`; returns how many times the interval fired
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.period <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

/// Short-lived visual feedback: paddle highlight and screen shake
#[derive(Debug, Clone, Copy, Default)]
pub struct Feedback {
    pub player_flash: Countdown,
    pub computer_flash: Countdown,
    pub shake: Countdown,
    pub shake_offset: f32,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash(&mut self, side: Side, secs: f32) {
        match side {
            Side::Player => self.player_flash.start(secs),
            Side::Computer => self.computer_flash.start(secs),
        }
    }

    pub fn is_flashing(&self, side: Side) -> bool {
        match side {
            Side::Player => self.player_flash.is_active(),
            Side::Computer => self.computer_flash.is_active(),
        }
    }

    pub fn shake(&mut self, offset: f32, secs: f32) {
        self.shake_offset = offset;
        self.shake.start(secs);
    }

    /// Current horizontal shake offset, 0 when settled
    pub fn shake_offset(&self) -> f32 {
        if self.shake.is_active() {
            self.shake_offset
        } else {
            0.0
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.player_flash.update(dt);
        self.computer_flash.update(dt);
        if self.shake.update(dt) {
            self.shake_offset = 0.0;
        }
    }
}

/// Power-up spawn interval and the pending effect reversal
#[derive(Debug, Clone, Copy)]
pub struct PowerUpTimers {
    pub spawn: Interval,
    pub effect: Countdown,
}

impl PowerUpTimers {
    pub fn new(interval: f32) -> Self {
        Self {
            spawn: Interval::new(interval),
            effect: Countdown::new(),
        }
    }

    pub fn reset(&mut self) {
        self.spawn.reset();
        self.effect.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Computer);
        score.increment(Side::Computer);
        score.increment(Side::Player);
        assert_eq!(score.computer, 2);
        assert_eq!(score.player, 1);
        score.reset();
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ball_hit_paddle = Some(Side::Player);
        events.scored = Some(Side::Computer);
        events.power_up_spawned = true;
        events.power_up_collected = Some(PowerUpKind::BigBall);

        events.clear();

        assert!(!events.ball_hit_wall);
        assert!(events.ball_hit_paddle.is_none());
        assert!(events.scored.is_none());
        assert!(!events.power_up_spawned);
        assert!(events.power_up_collected.is_none());
    }

    #[test]
    fn test_difficulty_raise_caps() {
        let mut difficulty = Difficulty::new(14.0);
        assert_eq!(difficulty.raise(0.5, 15.0), 14.5);
        assert_eq!(difficulty.raise(0.5, 15.0), 15.0);
        assert_eq!(difficulty.raise(0.5, 15.0), 15.0);
    }

    #[test]
    fn test_countdown_fires_once() {
        let mut countdown = Countdown::new();
        assert!(!countdown.update(1.0), "Unarmed countdown never fires");
        countdown.start(0.1);
        assert!(!countdown.update(0.05));
        assert!(countdown.update(0.06));
        assert!(!countdown.update(0.06));
        assert!(!countdown.is_active());
    }

    #[test]
    fn test_interval_fires_per_period() {
        let mut interval = Interval::new(10.0);
        assert_eq!(interval.update(9.9), 0);
        assert_eq!(interval.update(0.2), 1);
        assert_eq!(interval.update(25.0), 2);
    }

    #[test]
    fn test_feedback_shake_reverts() {
        let mut feedback = Feedback::new();
        feedback.shake(3.0, 0.05);
        assert_eq!(feedback.shake_offset(), 3.0);
        feedback.update(0.1);
        assert_eq!(feedback.shake_offset(), 0.0);
    }

    #[test]
    fn test_gen_range_degenerate() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.gen_range(5.0, 5.0), 5.0);
        assert_eq!(rng.gen_range(5.0, 2.0), 5.0);
    }
}
