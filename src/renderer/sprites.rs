//! Sprite images fetched by fixed URL
//!
//! Loading is fire-and-forget like any `<img>`: the browser fetches the
//! source in the background and drawing an image that has not arrived
//! yet silently draws nothing.

use wasm_bindgen::JsValue;
use web_sys::HtmlImageElement;

use crate::sim::Facing;

const ACTOR_RIGHT_SRC: &str = "assets/hopper-right.png";
const ACTOR_LEFT_SRC: &str = "assets/hopper-left.png";
const PLATFORM_SRC: &str = "assets/platform.png";

/// The three images the board is drawn with
pub struct Sprites {
    actor_left: HtmlImageElement,
    actor_right: HtmlImageElement,
    platform: HtmlImageElement,
}

impl Sprites {
    pub fn load() -> Result<Self, JsValue> {
        Ok(Self {
            actor_left: load_image(ACTOR_LEFT_SRC)?,
            actor_right: load_image(ACTOR_RIGHT_SRC)?,
            platform: load_image(PLATFORM_SRC)?,
        })
    }

    /// Actor sprite variant for the current facing
    pub fn actor(&self, facing: Facing) -> &HtmlImageElement {
        match facing {
            Facing::Left => &self.actor_left,
            Facing::Right => &self.actor_right,
        }
    }

    pub fn platform(&self) -> &HtmlImageElement {
        &self.platform
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}
