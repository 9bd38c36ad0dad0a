pub mod actions;
pub mod ai;
pub mod components;
pub mod config;
pub mod engine;
pub mod params;
pub mod physics;
pub mod resources;
pub mod systems;

pub use ai::Difficulty;
pub use components::*;
pub use config::*;
pub use engine::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// Restart and pause edges apply first. Nothing moves while the match is
/// paused or over.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    input: &TickInput,
    state: &mut MatchState,
    canvas: &Canvas,
    config: &Config,
    difficulty: Difficulty,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    // Clear events at start of tick
    events.clear();

    if input.restart {
        actions::reset_match(world, state, canvas, config, rng);
    }
    if input.pause {
        actions::toggle_pause(state);
    }
    if !state.is_running() {
        return false;
    }

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. Move the player paddle from its intent
    move_paddles(world, canvas, config);

    // 3. Move ball and resolve wall/paddle collisions
    check_collisions(world, canvas, config, events);

    // 4. Opponent reacts to where the ball is now
    move_ai_paddle(world, canvas, config, difficulty, rng);

    // 5. Check scoring (ball left the court)
    check_scoring(world, state, canvas, config, events, rng);

    true
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32, height: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y, height), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
