use glam::Vec2;

/// Which end of the court something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player
    Right, // Computer
}

impl Side {
    /// The other end of the court
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of travel away from this side's paddle
    pub fn away_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,      // Top edge, clamped to [0, canvas_height - height]
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32, height: f32) -> Self {
        Self { side, y, height }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Movement intent for a player-driven paddle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    pub dir: i8,               // -1 = up, 0 = stop, 1 = down
    pub target_y: Option<f32>, // Pointer Y for this tick (paddle center)
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
