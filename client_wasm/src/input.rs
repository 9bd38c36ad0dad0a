//! Keyboard and pointer mapping onto engine input

use game_core::{Canvas, Engine, MoveKey};

pub const UP_KEYS: [&str; 3] = ["ArrowUp", "w", "W"];
pub const DOWN_KEYS: [&str; 3] = ["ArrowDown", "s", "S"];
pub const PAUSE_KEYS: [&str; 2] = [" ", "Spacebar"];
pub const RESTART_KEYS: [&str; 2] = ["r", "R"];

/// What a key does in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(MoveKey),
    Pause,
    Restart,
}

/// Map a `KeyboardEvent.key` value to a game action
pub fn key_action(key: &str) -> Option<KeyAction> {
    if UP_KEYS.contains(&key) {
        Some(KeyAction::Move(MoveKey::Up))
    } else if DOWN_KEYS.contains(&key) {
        Some(KeyAction::Move(MoveKey::Down))
    } else if PAUSE_KEYS.contains(&key) {
        Some(KeyAction::Pause)
    } else if RESTART_KEYS.contains(&key) {
        Some(KeyAction::Restart)
    } else {
        None
    }
}

/// Handle key down event
///
/// Auto-repeats are swallowed so holding Space does not flicker the pause
/// state. Returns `true` if the key belongs to the game and the browser
/// default should be suppressed.
pub fn handle_key_down(engine: &mut Engine, key: &str, repeat: bool) -> bool {
    let Some(action) = key_action(key) else {
        return false;
    };
    if repeat {
        return true;
    }
    match action {
        KeyAction::Move(dir) => engine.press(dir),
        KeyAction::Pause => engine.on_pause(true),
        KeyAction::Restart => engine.on_restart(true),
    }
    true
}

/// Handle key up event
pub fn handle_key_up(engine: &mut Engine, key: &str) -> bool {
    match key_action(key) {
        Some(KeyAction::Move(dir)) => {
            engine.release(dir);
            true
        }
        Some(_) => true,
        None => false,
    }
}

/// Paddle target from a pointer position in CSS pixels
///
/// Only the left half of the element steers the player paddle. The result is
/// in court coordinates.
pub fn pointer_target_y(
    offset_x: f32,
    offset_y: f32,
    element_width: f32,
    element_height: f32,
    canvas: &Canvas,
) -> Option<f32> {
    if element_width <= 0.0 || element_height <= 0.0 {
        return None;
    }
    if offset_x < 0.0 || offset_x > element_width / 2.0 {
        return None;
    }
    let y = offset_y / element_height * canvas.height;
    y.is_finite().then_some(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Ball, Side};
    use glam::Vec2;

    fn engine() -> Engine {
        let mut engine = Engine::new(3);
        engine.start();
        // Park the ball far from both paddles
        engine.set_ball(Ball::new(Vec2::new(400.0, 250.0), Vec2::new(0.0, 0.5)));
        engine
    }

    fn left_y(engine: &Engine) -> f32 {
        engine.snapshot().left.y
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_action("ArrowUp"), Some(KeyAction::Move(MoveKey::Up)));
        assert_eq!(key_action("S"), Some(KeyAction::Move(MoveKey::Down)));
        assert_eq!(key_action(" "), Some(KeyAction::Pause));
        assert_eq!(key_action("r"), Some(KeyAction::Restart));
        assert_eq!(key_action("Enter"), None);
    }

    #[test]
    fn test_held_key_moves_until_released() {
        let mut engine = engine();
        let start = left_y(&engine);

        assert!(handle_key_down(&mut engine, "ArrowDown", false));
        engine.tick();
        engine.tick();
        assert_eq!(left_y(&engine), start + 2.0 * engine.config().paddle_speed);

        assert!(handle_key_up(&mut engine, "ArrowDown"));
        engine.tick();
        assert_eq!(left_y(&engine), start + 2.0 * engine.config().paddle_speed);
    }

    #[test]
    fn test_repeat_does_not_retoggle_pause() {
        let mut engine = engine();

        handle_key_down(&mut engine, " ", false);
        engine.tick();
        assert!(engine.match_state().paused);

        assert!(handle_key_down(&mut engine, " ", true));
        engine.tick();
        assert!(engine.match_state().paused, "Repeat ignored");
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let mut engine = engine();
        assert!(!handle_key_down(&mut engine, "Tab", false));
        assert!(!handle_key_up(&mut engine, "Tab"));
    }

    #[test]
    fn test_pointer_target_left_half_only() {
        let canvas = Canvas::default();
        assert_eq!(pointer_target_y(100.0, 200.0, 400.0, 250.0, &canvas), Some(400.0));
        assert_eq!(pointer_target_y(300.0, 200.0, 400.0, 250.0, &canvas), None);
        assert_eq!(pointer_target_y(100.0, 200.0, 0.0, 250.0, &canvas), None);
    }

    #[test]
    fn test_pointer_steers_player_paddle() {
        let mut engine = engine();
        let canvas = engine.canvas();
        let y = pointer_target_y(10.0, 0.0, 800.0, 500.0, &canvas).expect("left half");

        engine.on_touch_move(y);
        engine.tick();

        assert_eq!(engine.snapshot().left.y, 0.0);
        assert_eq!(engine.snapshot().right.side, Side::Right);
    }
}
