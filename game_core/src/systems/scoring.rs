use hecs::World;

use crate::actions::score_point;
use crate::physics::scoring_side;
use crate::{Ball, Canvas, Config, Events, GameRng, MatchState, Side};

/// Check if the ball left the court and register the point
pub fn check_scoring(
    world: &mut World,
    state: &mut MatchState,
    canvas: &Canvas,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let scored = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .and_then(|(_e, ball)| scoring_side(ball, canvas.width, config))
    };
    let Some(side) = scored else {
        return;
    };

    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    if score_point(world, state, side, canvas, config, rng) {
        events.match_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, MatchState, Canvas, Config, Events, GameRng) {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 0.0, 80.0);
        create_paddle(&mut world, Side::Right, 0.0, 80.0);
        (
            world,
            MatchState::new(),
            Canvas::default(),
            Config::new(),
            Events::new(),
            GameRng::new(12345), // Fixed seed for deterministic tests
        )
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, mut state, canvas, config, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-6.0, 250.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &mut state, &canvas, &config, &mut events, &mut rng);

        assert_eq!(state.score_right, 1, "Right player should score");
        assert_eq!(state.score_left, 0);
        assert!(events.right_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, mut state, canvas, config, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(806.0, 250.0), Vec2::new(5.0, 0.0));

        check_scoring(&mut world, &mut state, &canvas, &config, &mut events, &mut rng);

        assert_eq!(state.score_left, 1, "Left player should score");
        assert_eq!(state.score_right, 0);
        assert!(events.left_scored);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, mut state, canvas, config, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-4.0, 250.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &mut state, &canvas, &config, &mut events, &mut rng);

        assert_eq!(state, MatchState::new());
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_final_point_flags_match_over() {
        let (mut world, mut state, canvas, config, mut events, mut rng) = setup_world();
        state.score_left = config.win_score - 1;
        create_ball(&mut world, Vec2::new(806.0, 250.0), Vec2::new(5.0, 0.0));

        check_scoring(&mut world, &mut state, &canvas, &config, &mut events, &mut rng);

        assert!(events.match_over);
        assert!(state.over && state.paused);
    }
}
