// ============================================================================
// NAV VIEW - Barra de navegación: link "reset" + un link por categoría
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_link_click, ElementBuilder, Listeners};
use crate::models::Category;
use crate::routing::{category_path, ROOT_PATH};
use crate::state::WeakStore;

pub const RESET_LABEL: &str = "Reset";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Clave estable del item (`nav-item-<id>`)
    pub key: String,
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub reset: NavLink,
    pub items: Vec<NavLink>,
    /// Motivo por el que no hay categorías (lista rechazada)
    pub error: Option<String>,
}

/// Descripción de la barra a partir de las categorías, sin tocar el DOM
pub fn describe_nav(categories: &[Category], error: Option<&str>) -> NavView {
    NavView {
        reset: NavLink {
            key: "nav-reset".to_string(),
            href: ROOT_PATH.to_string(),
            label: RESET_LABEL.to_string(),
        },
        items: categories
            .iter()
            .map(|category| NavLink {
                key: format!("nav-item-{}", category.id),
                href: category_path(category),
                label: category.name.clone(),
            })
            .collect(),
        error: error.map(str::to_string),
    }
}

fn render_link(
    link: &NavLink,
    store: &WeakStore,
    listeners: &Listeners,
) -> Result<Element, JsValue> {
    let anchor = ElementBuilder::link(&link.href, &link.label)?
        .attr("data-key", &link.key)?
        .build();
    on_link_click(&anchor, listeners, store.clone(), link.href.clone())?;
    Ok(anchor)
}

pub fn render_nav(
    view: &NavView,
    store: &WeakStore,
    listeners: &Listeners,
) -> Result<Element, JsValue> {
    let mut items = Vec::with_capacity(view.items.len());
    for link in &view.items {
        items.push(
            ElementBuilder::new("li")?
                .attr("data-key", &link.key)?
                .child(render_link(link, store, listeners)?)?
                .build(),
        );
    }

    let mut nav = ElementBuilder::new("nav")?
        .class("app-nav")
        .child(render_link(&view.reset, store, listeners)?)?
        .child(ElementBuilder::new("ul")?.children(items)?.build())?;

    if let Some(error) = &view.error {
        nav = nav.child(
            ElementBuilder::new("p")?
                .class("nav-error")
                .attr("title", error)?
                .text("Categories unavailable")
                .build(),
        )?;
    }

    Ok(nav.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_d_links() {
        let view = describe_nav(
            &[Category::new("1", "All"), Category::new("5", "Books")],
            None,
        );
        let hrefs: Vec<&str> = view.items.iter().map(|link| link.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/all", "/category/5"]);
        assert_eq!(view.items[1].label, "Books");
        assert_eq!(view.items[1].key, "nav-item-5");
    }

    #[test]
    fn test_reset_link_points_to_root() {
        let view = describe_nav(&[], None);
        assert_eq!(view.reset.href, "/");
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_no_link_uses_legacy_path() {
        let view = describe_nav(
            &[Category::new("1", "All"), Category::new("2", "Books")],
            None,
        );
        assert!(view.items.iter().all(|link| link.href != "/category/1"));
    }

    #[test]
    fn test_error_is_carried() {
        let view = describe_nav(&[], Some("category #0 has no id"));
        assert_eq!(view.error.as_deref(), Some("category #0 has no id"));
    }
}
