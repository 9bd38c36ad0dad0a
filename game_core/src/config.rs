use crate::{Params, Side};

/// Game configuration
///
/// Built once at startup from [`Params`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_min_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub paddle_collision_epsilon: f32,
    pub ball_radius: f32,
    pub ball_speed_start: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub min_ball_speed_y: f32,
    pub max_reflection_angle: f32,
    pub serve_angle_max: f32,
    pub ai_speed: f32,
    pub ai_prediction_error: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_min_height: Params::PADDLE_MIN_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_collision_epsilon: Params::PADDLE_COLLISION_EPSILON,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_start: Params::BALL_SPEED_START,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            min_ball_speed_y: Params::MIN_BALL_SPEED_Y,
            max_reflection_angle: Params::MAX_REFLECTION_ANGLE,
            serve_angle_max: Params::SERVE_ANGLE_MAX,
            ai_speed: Params::AI_SPEED,
            ai_prediction_error: Params::AI_PREDICTION_ERROR,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side, canvas_width: f32) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => canvas_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge Y that vertically centers a paddle
    pub fn paddle_center_y(&self, paddle_height: f32, canvas_height: f32) -> f32 {
        ((canvas_height - paddle_height) / 2.0).max(0.0)
    }

    /// Clamp paddle Y (top edge) to canvas bounds
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32, canvas_height: f32) -> f32 {
        y.clamp(0.0, (canvas_height - paddle_height).max(0.0))
    }

    /// Paddle height scaled to the canvas, never below the configured minimum
    pub fn scaled_paddle_height(&self, canvas_height: f32) -> f32 {
        (self.paddle_height * canvas_height / Params::CANVAS_HEIGHT).max(self.paddle_min_height)
    }
}
