use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

/// Vista de ranking: agregada (`category_id == None`) o filtrada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingView {
    pub category_id: Option<String>,
    pub title: String,
}

impl RankingView {
    pub fn aggregate() -> Self {
        Self {
            category_id: None,
            title: "Ranking - All categories".to_string(),
        }
    }

    /// Si el nombre no se conoce (lista aún sin cargar) se muestra el id
    pub fn for_category(id: &str, name: Option<&str>) -> Self {
        Self {
            category_id: Some(id.to_string()),
            title: format!("Ranking - {}", name.unwrap_or(id)),
        }
    }
}

pub fn render_ranking(view: &RankingView) -> Result<Element, JsValue> {
    let mut section = ElementBuilder::new("section")?.class("ranking");
    if let Some(id) = &view.category_id {
        section = section.attr("data-category-id", id)?;
    }
    Ok(section
        .child(ElementBuilder::new("h2")?.text(&view.title).build())?
        .build())
}
