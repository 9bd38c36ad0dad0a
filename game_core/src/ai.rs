//! Computer opponent for the right paddle.
//!
//! The controller is a pure function of the current ball, paddle and canvas
//! plus a difficulty profile. Randomness comes in through the caller's RNG so
//! a seeded [`crate::GameRng`] reproduces the same moves.

use rand::Rng;

use crate::{Ball, Canvas, Config, Paddle, Side};

/// Opponent difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Impossible,
}

/// Named tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    pub label: &'static str,
    pub description: &'static str,
    pub speed_multiplier: f32,
}

impl AiProfile {
    /// Half-width of the uniform error added to the predicted intercept
    ///
    /// Zero once the multiplier reaches 1.
    pub fn prediction_error_magnitude(&self, config: &Config) -> f32 {
        (1.0 - self.speed_multiplier).max(0.0) * config.ai_prediction_error
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    pub fn profile(self) -> AiProfile {
        match self {
            Difficulty::Easy => AiProfile {
                label: "Easy",
                description: "Slow and often misjudges the ball",
                speed_multiplier: 0.6,
            },
            Difficulty::Normal => AiProfile {
                label: "Normal",
                description: "A fair opponent",
                speed_multiplier: 0.85,
            },
            Difficulty::Hard => AiProfile {
                label: "Hard",
                description: "Reads every shot",
                speed_multiplier: 1.0,
            },
            Difficulty::Impossible => AiProfile {
                label: "Impossible",
                description: "Faster than the ball deserves",
                speed_multiplier: 1.5,
            },
        }
    }

    /// Look up a difficulty by its name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.profile().label.eq_ignore_ascii_case(name.trim()))
    }
}

/// Vertical movement for the right paddle this tick
///
/// Returns a signed pixel delta that already keeps the paddle inside the
/// canvas.
pub fn ai_move<R: Rng>(
    ball: &Ball,
    paddle: &Paddle,
    canvas: &Canvas,
    difficulty: Difficulty,
    config: &Config,
    rng: &mut R,
) -> f32 {
    let profile = difficulty.profile();
    let speed = config.ai_speed * profile.speed_multiplier;

    if ball.vel.x < 0.0 {
        return retreat(paddle, canvas, speed);
    }

    let paddle_x = config.paddle_x(Side::Right, canvas.width);
    let time_to_reach = (paddle_x - ball.pos.x) / ball.vel.x;
    if !time_to_reach.is_finite() || time_to_reach <= 0.0 {
        return react(ball, paddle, canvas, speed);
    }

    let predicted = predict_intercept_y(ball, time_to_reach, canvas.height, config.ball_radius);

    let error_magnitude = profile.prediction_error_magnitude(config);
    let error = if error_magnitude > 0.0 {
        rng.gen_range(-error_magnitude..=error_magnitude)
    } else {
        0.0
    };

    let target = predicted + error - paddle.height / 2.0;
    let delta = (target - paddle.y).clamp(-speed, speed);
    keep_in_bounds(paddle, delta, canvas)
}

/// Predicted ball center Y after `time` frames, with at most one wall bounce
///
/// Steep shots that would bounce twice are left uncorrected after the first
/// reflection.
pub fn predict_intercept_y(ball: &Ball, time: f32, canvas_height: f32, radius: f32) -> f32 {
    let top = radius;
    let bottom = canvas_height - radius;
    let vy = ball.vel.y;
    let predicted = ball.pos.y + vy * time;

    if predicted < top && vy < 0.0 {
        let wall_time = (top - ball.pos.y) / vy;
        let remaining = (time - wall_time).max(0.0);
        top - vy * remaining
    } else if predicted > bottom && vy > 0.0 {
        let wall_time = (bottom - ball.pos.y) / vy;
        let remaining = (time - wall_time).max(0.0);
        bottom - vy * remaining
    } else {
        predicted
    }
}

/// Drift back to the vertical center at half speed
fn retreat(paddle: &Paddle, canvas: &Canvas, speed: f32) -> f32 {
    let center = (canvas.height - paddle.height) / 2.0;
    let diff = center - paddle.y;
    if diff.abs() <= speed {
        return 0.0;
    }
    keep_in_bounds(paddle, diff.signum() * speed * 0.5, canvas)
}

/// Chase the ball's current height
fn react(ball: &Ball, paddle: &Paddle, canvas: &Canvas, speed: f32) -> f32 {
    let target = ball.pos.y - paddle.height / 2.0;
    let diff = target - paddle.y;
    if diff.abs() <= speed {
        return 0.0;
    }
    keep_in_bounds(paddle, diff.signum() * speed, canvas)
}

fn keep_in_bounds(paddle: &Paddle, delta: f32, canvas: &Canvas) -> f32 {
    let max_y = (canvas.height - paddle.height).max(0.0);
    (paddle.y + delta).clamp(0.0, max_y) - paddle.y
}
