use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply this tick's movement input to the player's paddle intent
pub fn ingest_inputs(world: &mut World, input: &TickInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Left {
            intent.dir = input.dir.clamp(-1, 1);
            intent.target_y = input.touch_y;
        }
    }
}
