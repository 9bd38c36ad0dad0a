use hecs::World;

use crate::physics::simulate_ball;
use crate::{Ball, Canvas, Config, Events, Paddle, Side};

/// Advance the ball one frame and resolve wall and paddle collisions
pub fn check_collisions(world: &mut World, canvas: &Canvas, config: &Config, events: &mut Events) {
    let mut left = None;
    let mut right = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }
    // Without a paddle entity that side simply has nothing to hit
    let off_court = |side| Paddle::new(side, -canvas.height, 0.0);
    let left = left.unwrap_or_else(|| off_court(Side::Left));
    let right = right.unwrap_or_else(|| off_court(Side::Right));

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let step = simulate_ball(*ball, &left, &right, canvas, config);
        *ball = step.ball;

        if step.wall_hit {
            events.ball_hit_wall = true;
            tracing::debug!(y = ball.pos.y, "Ball hit wall");
        }
        if let Some(side) = step.paddle_hit {
            events.ball_hit_paddle = true;
            tracing::debug!(
                paddle = ?side,
                speed = ball.speed(),
                "Ball hit paddle"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Canvas, Events) {
        (World::new(), Config::new(), Canvas::default(), Events::new())
    }

    fn only_ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball exists");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, canvas, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 6.0), Vec2::new(4.0, -3.0));

        check_collisions(&mut world, &canvas, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel, Vec2::new(4.0, 3.0), "Only vertical velocity flips");
        assert_eq!(ball.pos.y, config.ball_radius, "Pushed out of the wall");
        assert!(events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, canvas, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 210.0, 80.0);
        create_paddle(&mut world, Side::Right, 210.0, 80.0);
        create_ball(&mut world, Vec2::new(40.0, 250.0), Vec2::new(-6.0, 0.0));

        check_collisions(&mut world, &canvas, &config, &mut events);

        let ball = only_ball(&world);
        assert!(ball.vel.x > 0.0, "Ball should bounce right after hitting left paddle");
        assert!(ball.pos.x > config.paddle_margin + config.paddle_width);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_speed_increases_on_paddle_hit() {
        let (mut world, config, canvas, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, 210.0, 80.0);
        create_ball(&mut world, Vec2::new(760.0, 230.0), Vec2::new(6.0, 0.0));

        check_collisions(&mut world, &canvas, &config, &mut events);

        let ball = only_ball(&world);
        assert!(ball.vel.x < 0.0);
        let expected = 6.0 * config.ball_speed_increase;
        assert!(
            (ball.speed() - expected).abs() < 1e-3,
            "Ball speed should increase by {}x, got {}",
            config.ball_speed_increase,
            ball.speed()
        );
    }

    #[test]
    fn test_missing_paddles_let_ball_through() {
        let (mut world, config, canvas, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(40.0, 250.0), Vec2::new(-6.0, 0.0));

        check_collisions(&mut world, &canvas, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.x, -6.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, canvas, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 210.0, 80.0);

        check_collisions(&mut world, &canvas, &config, &mut events);

        assert_eq!(events, Events::new());
    }
}
