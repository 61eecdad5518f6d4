use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

/// Panel para rutas sin coincidencia
pub fn render_not_found(path: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("not-found")
        .child(ElementBuilder::new("h2")?.text("Page not found").build())?
        .child(
            ElementBuilder::new("p")?
                .text(&format!("No view for {}", path))
                .build(),
        )?
        .build())
}
