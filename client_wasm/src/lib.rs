//! Canvas 2D browser client for single-player Pong
//!
//! Input mapping and HUD layout are plain Rust and tested natively; the DOM
//! glue only compiles for wasm32.

mod diag;
pub mod frame;
pub mod hud;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::{resize_canvas, set_difficulty, start_game, stop_game};
#[cfg(target_arch = "wasm32")]
pub use renderer::CanvasRenderer;
