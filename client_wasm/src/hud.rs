//! Text and layout for the court overlay

use game_core::{Side, Snapshot};

/// Centered message drawn over a paused or finished match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub hint: String,
}

pub fn score_text(frame: &Snapshot) -> (String, String) {
    (
        frame.state.score_left.to_string(),
        frame.state.score_right.to_string(),
    )
}

pub fn overlay(frame: &Snapshot) -> Option<Overlay> {
    if frame.state.over {
        let title = match frame.winner {
            Some(Side::Left) => "You win!",
            Some(Side::Right) => "Computer wins",
            None => "Game over",
        };
        Some(Overlay {
            title: title.to_string(),
            hint: "Press R to play again".to_string(),
        })
    } else if frame.state.paused {
        Some(Overlay {
            title: "Paused".to_string(),
            hint: format!(
                "Press Space to resume ({})",
                frame.difficulty.profile().label
            ),
        })
    } else {
        None
    }
}

/// Top edges of the dashed center line segments
pub fn net_segments(canvas_height: f32, segment: f32) -> impl Iterator<Item = f32> {
    let stride = (segment * 2.0).max(1.0);
    let count = (canvas_height / stride).ceil().max(0.0) as usize;
    (0..count).map(move |i| i as f32 * stride)
}
