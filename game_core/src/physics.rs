//! Pure ball and paddle kinematics.
//!
//! Everything here is a function of its arguments. The systems in
//! [`crate::systems`] read state out of the world, call into this module and
//! write the results back.
//!
//! Coordinates follow the canvas: X grows to the right, Y grows downwards, so
//! a negative vertical velocity moves the ball up.

use glam::Vec2;

use crate::{Ball, Canvas, Config, Paddle, Side};

/// Result of a top/bottom wall bounce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub new_y: f32,
    pub new_vy: f32,
}

/// Result of a ball/paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// 0.0 = top edge of the paddle, 1.0 = bottom edge
    pub hit_position: f32,
    /// Ball X just outside the paddle face
    pub corrected_x: f32,
    pub side: Side,
}

/// Everything one tick of ball simulation produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallStep {
    pub ball: Ball,
    pub wall_hit: bool,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
}

/// Euler-integrate one frame of ball travel
pub fn advance_ball(ball: Ball) -> Ball {
    Ball {
        pos: ball.pos + ball.vel,
        vel: ball.vel,
    }
}

/// Detect a bounce off the top or bottom wall
///
/// Only fires while the ball is still moving into the wall, and puts the
/// ball flush against it so the next tick cannot re-trigger.
pub fn wall_collision(ball: &Ball, canvas_height: f32, config: &Config) -> Option<WallHit> {
    let r = config.ball_radius;

    if ball.pos.y - r <= 0.0 && ball.vel.y < 0.0 {
        Some(WallHit {
            new_y: r,
            new_vy: -ball.vel.y,
        })
    } else if ball.pos.y + r >= canvas_height && ball.vel.y > 0.0 {
        Some(WallHit {
            new_y: canvas_height - r,
            new_vy: -ball.vel.y,
        })
    } else {
        None
    }
}

/// Detect the ball striking a paddle
pub fn paddle_collision(
    ball: &Ball,
    paddle: &Paddle,
    canvas_width: f32,
    config: &Config,
) -> Option<PaddleHit> {
    let r = config.ball_radius;
    let left = config.paddle_x(paddle.side, canvas_width);
    let right = left + config.paddle_width;

    let moving_toward = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if !moving_toward {
        return None;
    }

    let overlaps_band = ball.pos.x - r <= right && ball.pos.x + r >= left;
    let within_span = ball.pos.y >= paddle.y && ball.pos.y <= paddle.y + paddle.height;
    if !overlaps_band || !within_span {
        return None;
    }

    let hit_position = if paddle.height > 0.0 {
        ((ball.pos.y - paddle.y) / paddle.height).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let corrected_x = match paddle.side {
        Side::Left => right + r + config.paddle_collision_epsilon,
        Side::Right => left - r - config.paddle_collision_epsilon,
    };

    Some(PaddleHit {
        hit_position,
        corrected_x,
        side: paddle.side,
    })
}

/// Launch angle for a hit position; 0.5 leaves horizontally
pub fn reflection_angle(hit_position: f32, max_angle: f32) -> f32 {
    let offset = (hit_position.clamp(0.0, 1.0) - 0.5) * 2.0;
    offset * max_angle
}

/// New ball velocity after leaving a paddle
///
/// Speed grows by the configured factor up to the cap. A vertical component
/// below the minimum is raised to it and the horizontal component shrinks
/// to keep the speed unchanged.
pub fn reflect(hit_position: f32, side: Side, vel: Vec2, config: &Config) -> Vec2 {
    let angle = reflection_angle(hit_position, config.max_reflection_angle);
    let speed = (vel.length() * config.ball_speed_increase).min(config.ball_speed_max);
    let dir = side.away_sign();

    let mut vx = angle.cos() * speed * dir;
    let mut vy = angle.sin() * speed;

    if vy.abs() < config.min_ball_speed_y {
        let sign = if vy != 0.0 {
            vy.signum()
        } else if vel.y != 0.0 {
            vel.y.signum()
        } else {
            1.0
        };
        vy = config.min_ball_speed_y * sign;
        vx = (speed * speed - vy * vy).max(0.0).sqrt() * dir;
    }

    Vec2::new(vx, vy)
}

/// Which side scores, if the ball has fully left the court
pub fn scoring_side(ball: &Ball, canvas_width: f32, config: &Config) -> Option<Side> {
    let r = config.ball_radius;
    if ball.pos.x < -r {
        Some(Side::Right)
    } else if ball.pos.x > canvas_width + r {
        Some(Side::Left)
    } else {
        None
    }
}

/// Move a paddle and keep it inside the canvas
pub fn clamp_paddle(paddle: Paddle, movement: f32, speed: f32, canvas_height: f32) -> Paddle {
    let max_y = (canvas_height - paddle.height).max(0.0);
    Paddle {
        y: (paddle.y + movement * speed).clamp(0.0, max_y),
        ..paddle
    }
}

/// One tick of ball simulation
///
/// Order: integrate, wall, left paddle, right paddle, scoring. Both paddle
/// checks see the same post-wall ball, so at most one reflection applies.
pub fn simulate_ball(
    ball: Ball,
    left: &Paddle,
    right: &Paddle,
    canvas: &Canvas,
    config: &Config,
) -> BallStep {
    let mut ball = advance_ball(ball);

    let wall = wall_collision(&ball, canvas.height, config);
    if let Some(hit) = wall {
        ball.pos.y = hit.new_y;
        ball.vel.y = hit.new_vy;
    }

    let left_hit = paddle_collision(&ball, left, canvas.width, config);
    let right_hit = paddle_collision(&ball, right, canvas.width, config);
    let paddle_hit = left_hit.or(right_hit);
    if let Some(hit) = paddle_hit {
        ball.pos.x = hit.corrected_x;
        ball.vel = reflect(hit.hit_position, hit.side, ball.vel, config);
    }

    BallStep {
        ball,
        wall_hit: wall.is_some(),
        paddle_hit: paddle_hit.map(|hit| hit.side),
        scored: scoring_side(&ball, canvas.width, config),
    }
}
