//! Canvas-2D rendering collaborator
//!
//! Draws the actor, the platform sequence and the score onto the board
//! canvas once per frame. Rendering never feeds back into the simulation.

mod sprites;

pub use sprites::Sprites;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            sprites: Sprites::load()?,
        })
    }

    /// Draw one frame of the current state
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        let config = &state.config;
        self.ctx.clear_rect(
            0.0,
            0.0,
            config.board_width as f64,
            config.board_height as f64,
        );

        let actor = &state.actor;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                self.sprites.actor(actor.facing),
                actor.pos.x as f64,
                actor.pos.y as f64,
                ACTOR_WIDTH as f64,
                ACTOR_HEIGHT as f64,
            )?;

        for platform in &state.platforms {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    self.sprites.platform(),
                    platform.pos.x as f64,
                    platform.pos.y as f64,
                    PLATFORM_WIDTH as f64,
                    PLATFORM_HEIGHT as f64,
                )?;
        }

        self.ctx.set_fill_style_str("white");
        self.ctx.set_font("20px sans-serif");
        self.ctx.fill_text(&state.score.to_string(), 5.0, 20.0)?;

        Ok(())
    }
}
