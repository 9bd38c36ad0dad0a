//! Canvas 2D drawing of the court

use std::f64::consts::TAU;

use game_core::{Params, Renderer, Snapshot};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::hud;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the court size
    pub fn resize(&self, width: f32, height: f32) {
        self.canvas.set_width(width.round() as u32);
        self.canvas.set_height(height.round() as u32);
    }

    fn clear(&self, frame: &Snapshot) {
        self.ctx.set_fill_style_str(Params::COLOR_BACKGROUND);
        self.ctx.fill_rect(
            0.0,
            0.0,
            frame.canvas.width as f64,
            frame.canvas.height as f64,
        );
    }

    fn draw_net(&self, frame: &Snapshot) {
        let x = (frame.canvas.width / 2.0 - 1.0) as f64;
        self.ctx.set_fill_style_str(Params::COLOR_NET);
        for top in hud::net_segments(frame.canvas.height, Params::NET_SEGMENT_HEIGHT) {
            self.ctx
                .fill_rect(x, top as f64, 2.0, Params::NET_SEGMENT_HEIGHT as f64);
        }
    }

    fn draw_paddles(&self, frame: &Snapshot) {
        self.ctx.set_fill_style_str(Params::COLOR_FOREGROUND);
        for (x, paddle) in [(frame.left_x, frame.left), (frame.right_x, frame.right)] {
            self.ctx.fill_rect(
                x as f64,
                paddle.y as f64,
                frame.paddle_width as f64,
                paddle.height as f64,
            );
        }
    }

    fn draw_ball(&self, frame: &Snapshot) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(Params::COLOR_FOREGROUND);
        self.ctx.begin_path();
        self.ctx.arc(
            frame.ball.pos.x as f64,
            frame.ball.pos.y as f64,
            frame.ball_radius as f64,
            0.0,
            TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }

    fn draw_scores(&self, frame: &Snapshot) -> Result<(), JsValue> {
        let (left, right) = hud::score_text(frame);
        let width = frame.canvas.width as f64;
        self.ctx.set_fill_style_str(Params::COLOR_FOREGROUND);
        self.ctx.set_font(Params::HUD_FONT);
        self.ctx.set_text_align("center");
        self.ctx.fill_text(&left, width * 0.25, 50.0)?;
        self.ctx.fill_text(&right, width * 0.75, 50.0)?;
        Ok(())
    }

    fn draw_overlay(&self, frame: &Snapshot) -> Result<(), JsValue> {
        let Some(overlay) = hud::overlay(frame) else {
            return Ok(());
        };
        let width = frame.canvas.width as f64;
        let height = frame.canvas.height as f64;

        self.ctx.set_fill_style_str(Params::COLOR_OVERLAY);
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.ctx.set_fill_style_str(Params::COLOR_FOREGROUND);
        self.ctx.set_text_align("center");
        self.ctx.set_font(Params::HUD_FONT);
        self.ctx
            .fill_text(&overlay.title, width / 2.0, height / 2.0 - 10.0)?;
        self.ctx.set_font(Params::OVERLAY_FONT);
        self.ctx
            .fill_text(&overlay.hint, width / 2.0, height / 2.0 + 30.0)?;
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    type Error = JsValue;

    fn draw(&mut self, frame: &Snapshot) -> Result<(), JsValue> {
        self.clear(frame);
        self.draw_net(frame);
        self.draw_paddles(frame);
        self.draw_ball(frame)?;
        self.draw_scores(frame)?;
        self.draw_overlay(frame)
    }

    /// Rectangles only; nothing here can fail
    fn draw_fallback(&mut self, frame: &Snapshot) {
        self.clear(frame);
        self.draw_paddles(frame);
        let r = frame.ball_radius as f64;
        self.ctx.fill_rect(
            frame.ball.pos.x as f64 - r,
            frame.ball.pos.y as f64 - r,
            r * 2.0,
            r * 2.0,
        );
    }
}
