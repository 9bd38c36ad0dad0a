//! Owns the simulation state and drives it one frame at a time.

use std::fmt::Debug;

use hecs::World;

use crate::ai::Difficulty;
use crate::{
    actions, create_ball, create_paddle, step, Ball, Canvas, Config, Events, GameRng,
    InputIntent, MatchState, MoveKey, Paddle, Side,
};

/// Read-only view of one frame, handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub canvas: Canvas,
    pub left: Paddle,
    pub right: Paddle,
    pub left_x: f32,
    pub right_x: f32,
    pub paddle_width: f32,
    pub ball: Ball,
    pub ball_radius: f32,
    pub state: MatchState,
    pub events: Events,
    pub difficulty: Difficulty,
    pub winner: Option<Side>,
    pub tick: u64,
}

/// Something that can draw a [`Snapshot`]
///
/// `draw` may fail; the engine then logs the error and calls
/// `draw_fallback`, which must not fail. The simulation keeps running either
/// way.
pub trait Renderer {
    type Error: Debug;

    fn draw(&mut self, frame: &Snapshot) -> Result<(), Self::Error>;

    fn draw_fallback(&mut self, frame: &Snapshot);
}

/// Single-owner game session: world, match state and the latest input
pub struct Engine {
    world: World,
    canvas: Canvas,
    config: Config,
    state: MatchState,
    events: Events,
    rng: GameRng,
    difficulty: Difficulty,
    input: InputIntent,
    running: bool,
    tick: u64,
}

impl Engine {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), Canvas::default(), seed)
    }

    pub fn with_config(config: Config, canvas: Canvas, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let mut state = MatchState::new();

        let height = config.paddle_height;
        let center = config.paddle_center_y(height, canvas.height);
        create_paddle(&mut world, Side::Left, center, height);
        create_paddle(&mut world, Side::Right, center, height);
        create_ball(&mut world, glam::Vec2::ZERO, glam::Vec2::ZERO);

        actions::reset_match(&mut world, &mut state, &canvas, &config, &mut rng);

        Self {
            world,
            canvas,
            config,
            state,
            events: Events::new(),
            rng,
            difficulty: Difficulty::default(),
            input: InputIntent::new(),
            running: false,
            tick: 0,
        }
    }

    /// Begin accepting ticks. Calling it again while running does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        tracing::info!(difficulty = ?self.difficulty, "Engine started");
    }

    /// Stop accepting ticks. Safe to call when never started or twice.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        tracing::info!(ticks = self.tick, "Engine stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn press(&mut self, key: MoveKey) {
        self.input.press(key);
    }

    pub fn release(&mut self, key: MoveKey) {
        self.input.release(key);
    }

    pub fn on_move(&mut self, delta: i8) {
        self.input.on_move(delta);
    }

    pub fn on_pause(&mut self, pressed: bool) {
        self.input.on_pause(pressed);
    }

    pub fn on_restart(&mut self, pressed: bool) {
        self.input.on_restart(pressed);
    }

    pub fn on_touch_move(&mut self, y: f32) {
        self.input.on_touch_move(y);
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Swap the opponent's profile; takes effect on the next tick
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            tracing::debug!(from = ?self.difficulty, to = ?difficulty, "Difficulty changed");
        }
        self.difficulty = difficulty;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn match_state(&self) -> MatchState {
        self.state
    }

    /// The side that won, once the match is over
    pub fn winner(&self) -> Option<Side> {
        if self.state.over {
            self.state.has_winner(self.config.win_score)
        } else {
            None
        }
    }

    /// Fit the court to a new drawing area
    ///
    /// Ball and paddles keep their relative positions; paddle height follows
    /// the canvas height but never drops below the configured minimum.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        let old = self.canvas;
        let new = Canvas::fit(width, height, device_pixel_ratio);
        let scale_x = new.width / old.width;
        let scale_y = new.height / old.height;
        let paddle_height = self.config.scaled_paddle_height(new.height);

        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            let center = paddle.center_y() * scale_y;
            paddle.height = paddle_height;
            paddle.y = self
                .config
                .clamp_paddle_y(center - paddle_height / 2.0, paddle_height, new.height);
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos.x *= scale_x;
            ball.pos.y *= scale_y;
        }

        self.canvas = new;
        tracing::debug!(width = new.width, height = new.height, "Canvas resized");
    }

    /// Advance one frame
    ///
    /// Returns `true` if the simulation moved. While stopped the pending
    /// input is left untouched.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let input = self.input.drain();
        self.tick += 1;

        step(
            &mut self.world,
            &input,
            &mut self.state,
            &self.canvas,
            &self.config,
            self.difficulty,
            &mut self.events,
            &mut self.rng,
        )
    }

    /// Tick, then draw the result
    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        self.tick();
        self.render(renderer)
    }

    /// Draw the current state, falling back to the simple path on error
    ///
    /// The fallback has already been drawn when an `Err` comes back; the
    /// error is returned so the host can report it.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        let frame = self.snapshot();
        match renderer.draw(&frame) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(error = ?e, tick = frame.tick, "Render failed, using fallback");
                renderer.draw_fallback(&frame);
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut left = Paddle::new(Side::Left, 0.0, self.config.paddle_height);
        let mut right = Paddle::new(Side::Right, 0.0, self.config.paddle_height);
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left = *paddle,
                Side::Right => right = *paddle,
            }
        }
        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO));

        Snapshot {
            canvas: self.canvas,
            left,
            right,
            left_x: self.config.paddle_x(Side::Left, self.canvas.width),
            right_x: self.config.paddle_x(Side::Right, self.canvas.width),
            paddle_width: self.config.paddle_width,
            ball,
            ball_radius: self.config.ball_radius,
            state: self.state,
            events: self.events,
            difficulty: self.difficulty,
            winner: self.winner(),
            tick: self.tick,
        }
    }

    /// Replace the ball's position and velocity
    pub fn set_ball(&mut self, ball: Ball) {
        for (_e, b) in self.world.query_mut::<&mut Ball>() {
            *b = ball;
        }
    }

    /// Move a paddle directly, clamped to the canvas
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = self
                    .config
                    .clamp_paddle_y(y, paddle.height, self.canvas.height);
            }
        }
    }
}
