use glam::Vec2;
use hecs::World;

use crate::fsm::{PongAction, PongFsm, PongState, TransitionResult};
use crate::systems::{clamp_to_field, clear_particles, move_player_paddle, update_ai};
use crate::view::Frame;
use crate::{
    create_ball, create_paddle, step, AiCadence, Ball, Config, Difficulty, Events, Feedback,
    GameRng, Paddle, PlayField, PowerUp, PowerUpTimers, Score, Side, Time,
};

/// A single-player Pong game against the computer
///
/// Owns the world and every resource the systems need. The host calls
/// [`PongGame::tick`] once per display frame and draws [`PongGame::frame`].
pub struct PongGame {
    pub world: World,
    pub time: Time,
    pub field: PlayField,
    pub config: Config,
    pub score: Score,
    pub difficulty: Difficulty,
    pub events: Events,
    pub feedback: Feedback,
    pub timers: PowerUpTimers,
    pub rng: GameRng,
    fsm: PongFsm,
}

impl PongGame {
    pub fn new(config: Config, seed: u64) -> Self {
        let field = PlayField::default();
        let mut world = World::new();

        let top = field.clamp_paddle_top((field.height - config.paddle_height) / 2.0, config.paddle_height);
        create_paddle(&mut world, Side::Player, top, config.paddle_height);
        create_paddle(&mut world, Side::Computer, top, config.paddle_height);

        let initial = config.ball_speed_initial;
        create_ball(
            &mut world,
            field.center_for(config.ball_size),
            Vec2::new(initial, initial),
            config.ball_size,
        );

        Self {
            world,
            time: Time::new(0.0, 0.0),
            field,
            difficulty: Difficulty::new(initial),
            timers: PowerUpTimers::new(config.power_up_interval),
            config,
            score: Score::new(),
            events: Events::new(),
            feedback: Feedback::new(),
            rng: GameRng::new(seed),
            fsm: PongFsm::new(),
        }
    }

    pub fn state(&self) -> PongState {
        self.fsm.state()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    pub fn state_string(&self) -> &'static str {
        self.fsm.state_string()
    }

    /// Leave the idle screen and start playing
    ///
    /// Scores, positions, speed and timers start fresh. Starting a game that
    /// is already running is rejected and changes nothing.
    pub fn start(&mut self) -> TransitionResult {
        let result = self.fsm.transition(PongAction::Start);
        if result.success {
            self.reset();
            log::info!("Pong started");
        }
        result
    }

    fn reset(&mut self) {
        let config = &self.config;
        let field = self.field;

        self.score.reset();
        self.difficulty = Difficulty::new(config.ball_speed_initial);
        self.timers.reset();
        self.feedback = Feedback::new();
        self.events.clear();
        self.time = Time::new(0.0, 0.0);

        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.height = config.paddle_height;
            paddle.top = field.clamp_paddle_top((field.height - paddle.height) / 2.0, paddle.height);
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.size = config.ball_size;
            ball.pos = field.center_for(ball.size);
            ball.vel = Vec2::splat(config.ball_speed_initial);
        }

        let power_ups: Vec<_> = self
            .world
            .query_mut::<&PowerUp>()
            .into_iter()
            .map(|(e, _)| e)
            .collect();
        for entity in power_ups {
            let _ = self.world.despawn(entity);
        }
        clear_particles(&mut self.world);
    }

    /// Advance one display frame; `dt` is the wall-clock time since the
    /// last frame in seconds. Does nothing until the game is started.
    pub fn tick(&mut self, dt: f32) -> &Events {
        if !self.is_running() {
            return &self.events;
        }

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.difficulty,
            &mut self.events,
            &mut self.feedback,
            &mut self.timers,
            &mut self.rng,
        );
        &self.events
    }

    /// Pointer moved to `y` (field coordinates) over the play field
    pub fn pointer_move(&mut self, y: f32) {
        if !self.is_running() {
            return;
        }
        move_player_paddle(&mut self.world, &self.field, y);
        if self.config.ai_cadence == AiCadence::PointerMove {
            update_ai(&mut self.world, &self.field, &self.config);
        }
    }

    /// The host element changed size
    ///
    /// The idle screen keeps the ball and paddles centered in the new field;
    /// during play they are only pulled back inside it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = PlayField::new(width, height);
        if self.is_running() {
            clamp_to_field(&mut self.world, &self.field);
            return;
        }
        let field = self.field;
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.top = field.clamp_paddle_top((field.height - paddle.height) / 2.0, paddle.height);
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = field.center_for(ball.size);
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(
            &self.world,
            self.fsm.state(),
            &self.field,
            self.config.paddle_width,
            &self.feedback,
            &self.score,
        )
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn base_speed(&self) -> f32 {
        self.difficulty.base_speed
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
    }

    pub fn power_up_count(&self) -> usize {
        self.world.query::<&PowerUp>().iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle(game: &PongGame, side: Side) -> Paddle {
        let mut query = game.world.query::<&Paddle>();
        let (_e, paddle) = query.iter().find(|(_e, p)| p.side == side).unwrap();
        *paddle
    }

    #[test]
    fn test_new_game_is_idle_and_centered() {
        let game = PongGame::new(Config::without_trails(), 1);
        assert_eq!(game.state(), PongState::Idle);
        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(390.0, 220.0));
        assert_eq!(ball.vel, Vec2::new(6.0, 6.0));
        assert_eq!(paddle(&game, Side::Player).top, 180.0);
        assert_eq!(paddle(&game, Side::Computer).top, 180.0);
    }

    #[test]
    fn test_idle_resize_recenters() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        game.resize(1000.0, 600.0);
        assert_eq!(game.ball().unwrap().pos, Vec2::new(490.0, 290.0));
        assert_eq!(paddle(&game, Side::Player).top, 250.0);
        assert_eq!(paddle(&game, Side::Computer).top, 250.0);
        assert_eq!(game.frame().field, PlayField::new(1000.0, 600.0));
    }

    #[test]
    fn test_running_resize_only_clamps() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        game.start();
        game.pointer_move(60.0);
        game.resize(1000.0, 600.0);
        assert_eq!(paddle(&game, Side::Player).top, 10.0);
        assert_eq!(game.ball().unwrap().pos, Vec2::new(390.0, 220.0));
        assert_eq!(game.state_string(), "running");
    }

    #[test]
    fn test_tick_is_noop_while_idle() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        game.tick(1.0 / 60.0);
        assert_eq!(game.ball().unwrap().pos, Vec2::new(390.0, 220.0));
    }

    #[test]
    fn test_start_then_tick_moves_ball() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        assert!(game.start().success);
        game.tick(1.0 / 60.0);
        assert_eq!(game.ball().unwrap().pos, Vec2::new(396.0, 226.0));
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        game.start();
        for _ in 0..10 {
            game.tick(1.0 / 60.0);
        }
        let before = game.ball().unwrap().pos;
        assert!(!game.start().success);
        assert_eq!(game.ball().unwrap().pos, before, "No reset on rejected start");
    }

    #[test]
    fn test_pointer_move_centers_player_paddle() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        game.pointer_move(300.0);
        assert_eq!(paddle(&game, Side::Player).top, 180.0, "Ignored while idle");

        game.start();
        game.pointer_move(300.0);
        assert_eq!(paddle(&game, Side::Player).top, 250.0);
        game.pointer_move(10_000.0);
        assert_eq!(paddle(&game, Side::Player).top, 360.0);
    }

    #[test]
    fn test_pointer_cadence_only_moves_ai_on_pointer() {
        let config = Config {
            ai_cadence: AiCadence::PointerMove,
            ..Config::without_trails()
        };
        let mut game = PongGame::new(config, 1);
        game.start();
        game.tick(1.0 / 60.0);
        assert_eq!(paddle(&game, Side::Computer).top, 180.0);

        game.pointer_move(100.0);
        assert_ne!(paddle(&game, Side::Computer).top, 180.0);
    }

    #[test]
    fn test_tick_cadence_moves_ai_without_input() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        game.start();
        for _ in 0..30 {
            game.tick(1.0 / 60.0);
        }
        assert_ne!(paddle(&game, Side::Computer).top, 180.0);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        game.resize(300.0, 150.0);
        assert_eq!(paddle(&game, Side::Player).top, 50.0);
        let ball = game.ball().unwrap();
        assert!(ball.pos.x <= 280.0 && ball.pos.y <= 130.0);
    }

    #[test]
    fn test_frame_reports_state_and_score() {
        let mut game = PongGame::new(Config::without_trails(), 1);
        game.start();
        let frame = game.frame();
        assert_eq!(frame.state, PongState::Running);
        assert_eq!(frame.score, Score::default());
        assert_eq!(frame.paddles.len(), 2);
        assert!(frame.ball.is_some());
    }
}
