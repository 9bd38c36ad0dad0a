use crate::{Params, Side};

/// Drawing surface dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    /// Largest aspect-correct canvas fitting in the available area
    ///
    /// Never smaller than the configured minimum size.
    pub fn fit(available_width: f32, available_height: f32, device_pixel_ratio: f32) -> Self {
        let aspect = Params::CANVAS_ASPECT_RATIO;
        let mut width = available_width.min(available_height * aspect);
        if !width.is_finite() || width < Params::CANVAS_MIN_WIDTH {
            width = Params::CANVAS_MIN_WIDTH;
        }
        let height = (width / aspect).max(Params::CANVAS_MIN_HEIGHT);
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };

        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Params::CANVAS_WIDTH, Params::CANVAS_HEIGHT)
    }
}

/// Score and pause/over flags for the current match
///
/// `over` implies `paused`, and scores stay frozen while `over`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchState {
    pub paused: bool,
    pub over: bool,
    pub score_left: u8,
    pub score_right: u8,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.score_left >= win_score {
            Some(Side::Left)
        } else if self.score_right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Whether the simulation should advance this tick
    pub fn is_running(&self) -> bool {
        !self.paused && !self.over
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A held movement key, already mapped from the raw key code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Up,
    Down,
}

/// Latest input written by the host's event handlers
///
/// Movement is a level (what is held right now); pause and restart are edges
/// that are consumed by the next [`InputIntent::drain`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputIntent {
    up_held: bool,
    down_held: bool,
    pause: bool,
    restart: bool,
    touch_y: Option<f32>,
}

/// Input consumed by one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub dir: i8,
    pub pause: bool,
    pub restart: bool,
    pub touch_y: Option<f32>,
}

impl InputIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: MoveKey) {
        match key {
            MoveKey::Up => self.up_held = true,
            MoveKey::Down => self.down_held = true,
        }
    }

    pub fn release(&mut self, key: MoveKey) {
        match key {
            MoveKey::Up => self.up_held = false,
            MoveKey::Down => self.down_held = false,
        }
    }

    /// Set the movement level directly (-1 up, 0 stop, 1 down)
    pub fn on_move(&mut self, delta: i8) {
        self.up_held = delta < 0;
        self.down_held = delta > 0;
    }

    pub fn on_pause(&mut self, pressed: bool) {
        self.pause |= pressed;
    }

    pub fn on_restart(&mut self, pressed: bool) {
        self.restart |= pressed;
    }

    pub fn on_touch_move(&mut self, y: f32) {
        if y.is_finite() {
            self.touch_y = Some(y);
        }
    }

    /// Current movement level: up decrements, down increments
    pub fn move_dir(&self) -> i8 {
        let mut dir = 0;
        if self.up_held {
            dir -= 1;
        }
        if self.down_held {
            dir += 1;
        }
        dir
    }

    /// Take this tick's input, clearing edge signals and the touch position
    pub fn drain(&mut self) -> TickInput {
        let input = TickInput {
            dir: self.move_dir(),
            pause: self.pause,
            restart: self.restart,
            touch_y: self.touch_y,
        };
        self.pause = false;
        self.restart = false;
        self.touch_y = None;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_winner_left() {
        let state = MatchState {
            score_left: 11,
            ..MatchState::new()
        };
        assert_eq!(state.has_winner(11), Some(Side::Left));
    }

    #[test]
    fn test_has_winner_right() {
        let state = MatchState {
            score_right: 11,
            ..MatchState::new()
        };
        assert_eq!(state.has_winner(11), Some(Side::Right));
    }

    #[test]
    fn test_no_winner_below_threshold() {
        let state = MatchState {
            score_left: 10,
            score_right: 10,
            ..MatchState::new()
        };
        assert_eq!(state.has_winner(11), None);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            left_scored: true,
            right_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
            match_over: true,
        };
        events.clear();
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_move_up_alone() {
        let mut intent = InputIntent::new();
        intent.press(MoveKey::Up);
        assert_eq!(intent.move_dir(), -1);
    }

    #[test]
    fn test_move_up_and_down_cancel() {
        let mut intent = InputIntent::new();
        intent.press(MoveKey::Up);
        intent.press(MoveKey::Down);
        assert_eq!(intent.move_dir(), 0);

        intent.release(MoveKey::Up);
        assert_eq!(intent.move_dir(), 1, "Down still held");
    }

    #[test]
    fn test_move_all_released() {
        let mut intent = InputIntent::new();
        intent.press(MoveKey::Up);
        intent.press(MoveKey::Down);
        intent.release(MoveKey::Down);
        intent.release(MoveKey::Up);
        assert_eq!(intent.move_dir(), 0);
    }

    #[test]
    fn test_repeated_press_does_not_accumulate() {
        let mut intent = InputIntent::new();
        intent.press(MoveKey::Down);
        intent.press(MoveKey::Down);
        intent.press(MoveKey::Up);
        assert_eq!(intent.move_dir(), 0);
    }

    #[test]
    fn test_drain_clears_edges_but_keeps_level() {
        let mut intent = InputIntent::new();
        intent.on_move(1);
        intent.on_pause(true);
        intent.on_restart(true);
        intent.on_touch_move(42.0);

        let first = intent.drain();
        assert_eq!(first.dir, 1);
        assert!(first.pause && first.restart);
        assert_eq!(first.touch_y, Some(42.0));

        let second = intent.drain();
        assert_eq!(second.dir, 1, "Movement persists until changed");
        assert!(!second.pause && !second.restart);
        assert_eq!(second.touch_y, None);
    }

    #[test]
    fn test_canvas_fit_keeps_aspect_and_minimum() {
        let canvas = Canvas::fit(1600.0, 500.0, 2.0);
        assert_eq!(canvas.width, 800.0);
        assert_eq!(canvas.height, 500.0);
        assert_eq!(canvas.device_pixel_ratio, 2.0);

        let tiny = Canvas::fit(100.0, 50.0, f32::NAN);
        assert_eq!(tiny.width, Params::CANVAS_MIN_WIDTH);
        assert_eq!(tiny.height, Params::CANVAS_MIN_HEIGHT);
        assert_eq!(tiny.device_pixel_ratio, 1.0);
    }
}
