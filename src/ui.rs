//! Terminal-UI collaborator: the game-over overlay
//!
//! Built once per game-over episode (the frame stepper's one-shot guard
//! keeps duplicates out) and dismissed on restart from any trigger.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlElement};

const OVERLAY_ID: &str = "game-over-popup";

/// Build and attach the overlay. `on_restart` runs when the restart
/// control is pressed.
pub fn show_game_over(
    document: &Document,
    on_restart: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    if document.get_element_by_id(OVERLAY_ID).is_some() {
        return Ok(());
    }

    let popup: HtmlElement = document.create_element("div")?.dyn_into()?;
    popup.set_id(OVERLAY_ID);
    popup.set_inner_text("Game Over! ");

    let style = popup.style();
    style.set_property("position", "absolute")?;
    style.set_property("top", "50%")?;
    style.set_property("left", "50%")?;
    style.set_property("transform", "translate(-50%, -50%)")?;
    style.set_property("font-size", "20px")?;
    style.set_property("padding", "20px")?;
    style.set_property("background", "rgba(0,0,0,0.7)")?;
    style.set_property("color", "white")?;
    style.set_property("border-radius", "10px")?;
    style.set_property("text-align", "center")?;

    let button: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
    button.set_inner_text("Restart");
    let button_style = button.style();
    button_style.set_property("margin-top", "10px")?;
    button_style.set_property("padding", "10px 20px")?;
    button_style.set_property("font-size", "18px")?;
    button_style.set_property("border", "none")?;
    button_style.set_property("background-color", "red")?;
    button_style.set_property("color", "white")?;
    button_style.set_property("border-radius", "5px")?;
    button_style.set_property("cursor", "pointer")?;

    let mut on_restart = on_restart;
    let closure = Closure::<dyn FnMut()>::new(move || on_restart());
    button.set_onclick(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    popup.append_child(&button)?;
    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&popup)?;

    Ok(())
}

/// Remove the overlay if present; safe to call repeatedly
pub fn dismiss_game_over(document: &Document) {
    if let Some(popup) = document.get_element_by_id(OVERLAY_ID) {
        popup.remove();
    }
}
