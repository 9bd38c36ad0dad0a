//! Match state transitions.
//!
//! `Running` (not paused, not over) and `Paused` toggle back and forth; either
//! can become `Over` once a side reaches the win score, and only
//! [`reset_match`] leaves `Over`.

use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{Ball, Canvas, Config, GameRng, MatchState, Paddle, Side};

/// Serve velocity toward `toward`, at a random angle that is never flat
pub fn launch_velocity<R: Rng>(toward: Side, config: &Config, rng: &mut R) -> Vec2 {
    let speed = config.ball_speed_start;
    let sign = -toward.away_sign();
    let angle: f32 = rng.gen_range(-config.serve_angle_max..=config.serve_angle_max);

    let mut vy = angle.sin() * speed;
    if vy.abs() < config.min_ball_speed_y {
        let up = if vy != 0.0 { vy < 0.0 } else { rng.gen_bool(0.5) };
        vy = if up {
            -config.min_ball_speed_y
        } else {
            config.min_ball_speed_y
        };
    }
    let vx = (speed * speed - vy * vy).max(0.0).sqrt() * sign;

    Vec2::new(vx, vy)
}

/// Put the ball back at the center, heading toward `toward`
pub fn reset_ball(world: &mut World, toward: Side, canvas: &Canvas, config: &Config, rng: &mut GameRng) {
    let pos = Vec2::new(canvas.width / 2.0, canvas.height / 2.0);
    let vel = launch_velocity(toward, config, &mut rng.0);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        *ball = Ball::new(pos, vel);
    }
}

/// Center both paddles vertically
pub fn reset_positions(world: &mut World, canvas: &Canvas, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.paddle_center_y(paddle.height, canvas.height);
    }
}

/// Start a fresh match: zero scores, clear flags, recenter, serve randomly
pub fn reset_match(
    world: &mut World,
    state: &mut MatchState,
    canvas: &Canvas,
    config: &Config,
    rng: &mut GameRng,
) {
    *state = MatchState::new();
    reset_positions(world, canvas, config);

    let toward = if rng.0.gen_bool(0.5) {
        Side::Left
    } else {
        Side::Right
    };
    reset_ball(world, toward, canvas, config, rng);

    tracing::info!(serve = ?toward, "Match reset");
}

/// Register a point for `side`
///
/// Ends the match at the win score. Paddles are recentered and the ball is
/// served toward the side that lost the rally even when the match just ended.
/// Returns `true` if this point ended the match. Does nothing once the match
/// is over.
pub fn score_point(
    world: &mut World,
    state: &mut MatchState,
    side: Side,
    canvas: &Canvas,
    config: &Config,
    rng: &mut GameRng,
) -> bool {
    if state.over {
        return false;
    }

    match side {
        Side::Left => state.score_left = state.score_left.saturating_add(1),
        Side::Right => state.score_right = state.score_right.saturating_add(1),
    }
    tracing::info!(
        scorer = ?side,
        left = state.score_left,
        right = state.score_right,
        "Point scored"
    );

    let winner = state.has_winner(config.win_score);
    if let Some(winner) = winner {
        state.over = true;
        state.paused = true;
        tracing::info!(winner = ?winner, "Match over");
    }

    reset_positions(world, canvas, config);
    reset_ball(world, side.opponent(), canvas, config, rng);

    winner.is_some()
}

/// Flip between running and paused; no effect once the match is over
pub fn toggle_pause(state: &mut MatchState) {
    if state.over {
        return;
    }
    state.paused = !state.paused;
    tracing::debug!(paused = state.paused, "Pause toggled");
}
