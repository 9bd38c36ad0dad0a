use std::f32::consts::PI;

/// Game tuning parameters for Pong
///
/// All distances are in canvas pixels and all speeds in pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;
    pub const CANVAS_MIN_WIDTH: f32 = 320.0;
    pub const CANVAS_MIN_HEIGHT: f32 = 200.0;
    pub const CANVAS_ASPECT_RATIO: f32 = 1.6; // width / height

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MIN_HEIGHT: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between canvas edge and paddle
    pub const PADDLE_COLLISION_EPSILON: f32 = 1.0;

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED_START: f32 = 5.0;
    pub const BALL_SPEED_MAX: f32 = 12.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const MIN_BALL_SPEED_Y: f32 = 0.5;
    pub const MAX_REFLECTION_ANGLE: f32 = 0.35 * PI;
    pub const SERVE_ANGLE_MAX: f32 = PI / 8.0;

    // AI
    pub const AI_SPEED: f32 = 5.0;
    pub const AI_PREDICTION_ERROR: f32 = 120.0;

    // Score
    pub const WIN_SCORE: u8 = 11; // First to 11 wins

    // Court drawing
    pub const NET_SEGMENT_HEIGHT: f32 = 15.0;
    pub const COLOR_BACKGROUND: &'static str = "#000000";
    pub const COLOR_FOREGROUND: &'static str = "#ffffff";
    pub const COLOR_NET: &'static str = "rgba(255, 255, 255, 0.5)";
    pub const COLOR_OVERLAY: &'static str = "rgba(0, 0, 0, 0.6)";
    pub const HUD_FONT: &'static str = "48px monospace";
    pub const OVERLAY_FONT: &'static str = "24px monospace";
}
