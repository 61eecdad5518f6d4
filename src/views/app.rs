// ============================================================================
// APP VIEW - Nav + contenido según la instrucción de la ruta
// ============================================================================
// describe_app() es puro (estado -> descripción); render_app() la pasa al DOM.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{ElementBuilder, Listeners};
use crate::models::RouteInstruction;
use crate::routing::ROOT_PATH;
use crate::state::{RootState, Store};
use crate::views::nav::{describe_nav, render_nav, NavView};
use crate::views::not_found::render_not_found;
use crate::views::ranking::{render_ranking, RankingView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Ranking(RankingView),
    /// Raíz: solo la barra de navegación (destino del link "reset")
    Empty,
    NotFound { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppView {
    pub nav: NavView,
    pub content: ContentView,
}

fn describe_content(state: &RootState) -> ContentView {
    match &state.router.instruction {
        RouteInstruction::Aggregate => ContentView::Ranking(RankingView::aggregate()),
        RouteInstruction::Category { id } => {
            ContentView::Ranking(RankingView::for_category(id, state.category_name(id)))
        }
        RouteInstruction::None if state.router.location == ROOT_PATH => ContentView::Empty,
        RouteInstruction::None => ContentView::NotFound {
            path: state.router.location.clone(),
        },
    }
}

pub fn describe_app(state: &RootState) -> AppView {
    AppView {
        nav: describe_nav(&state.categories.items, state.categories.error.as_deref()),
        content: describe_content(state),
    }
}

/// Renderizar la app completa a partir del estado actual del store;
/// los closures de los links quedan en `listeners`
pub fn render_app(store: &Store, listeners: &Listeners) -> Result<Element, JsValue> {
    let view = store.with_state_ref(describe_app);
    let weak = store.downgrade();

    let mut root = ElementBuilder::new("div")?
        .class("App")
        .child(render_nav(&view.nav, &weak, listeners)?)?;

    match &view.content {
        ContentView::Ranking(ranking) => root = root.child(render_ranking(ranking)?)?,
        ContentView::NotFound { path } => root = root.child(render_not_found(path)?)?,
        ContentView::Empty => {}
    }

    Ok(root.build())
}
