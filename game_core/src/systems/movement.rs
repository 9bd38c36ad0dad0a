use hecs::World;

use crate::ai::{ai_move, Difficulty};
use crate::physics::clamp_paddle;
use crate::{Ball, Canvas, Config, GameRng, Paddle, PaddleIntent, Side};

/// Apply paddle movement based on intents
///
/// A pointer position takes over from the keyboard level for that tick.
pub fn move_paddles(world: &mut World, canvas: &Canvas, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if let Some(target_y) = intent.target_y {
            let y = target_y - paddle.height / 2.0;
            paddle.y = config.clamp_paddle_y(y, paddle.height, canvas.height);
        } else if intent.dir != 0 {
            *paddle = clamp_paddle(
                *paddle,
                intent.dir as f32,
                config.paddle_speed,
                canvas.height,
            );
        }
    }
}

/// Let the computer move the right paddle
pub fn move_ai_paddle(
    world: &mut World,
    canvas: &Canvas,
    config: &Config,
    difficulty: Difficulty,
    rng: &mut GameRng,
) {
    let ball = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };
    let Some(ball) = ball else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            let delta = ai_move(&ball, paddle, canvas, difficulty, config, &mut rng.0);
            *paddle = clamp_paddle(*paddle, delta, 1.0, canvas.height);
        }
    }
}
