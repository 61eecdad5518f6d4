// ============================================================================
// APP - Aplicación principal: store + historial del navegador + DOM
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id, Listeners};
use crate::routing::{BrowserHistory, History};
use crate::services::{load_categories, CategoryService};
use crate::state::{create_store, Action, Store};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    store: Store,
    root: Element,
    /// Closures de click del árbol actual
    listeners: Listeners,
}

impl App {
    /// Crear nueva aplicación montada en `CONFIG.root_element_id`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(&CONFIG.root_element_id).ok_or_else(|| {
            JsValue::from_str(&format!("No #{} element found", CONFIG.root_element_id))
        })?;

        let history = BrowserHistory::new();
        history.install_popstate()?;
        let history: Rc<dyn History> = history;
        let store = create_store(history);

        // Varios cambios en el mismo tick -> un solo render
        let render_scheduled = Rc::new(Cell::new(false));
        store.subscribe(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let flag = render_scheduled.clone();
            Timeout::new(0, move || {
                flag.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        store.dispatch(load_categories(CategoryService::new()));

        Ok(Self {
            store,
            root,
            listeners: Listeners::new(),
        })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render en {}", self.store.with_state_ref(|s| s.router.location.clone()));
        clear_children(&self.root);
        // El árbol anterior ya no está en el DOM
        let dropped = self.listeners.clear();
        log::trace!("🧹 [APP] {} listeners liberados", dropped);
        let view = render_app(&self.store, &self.listeners)?;
        append_child(&self.root, &view)
    }

    /// Navegar desde fuera de la app (añade entrada al historial)
    pub fn navigate(&self, path: &str) {
        self.store.dispatch(Action::Push(path.to_string()));
    }
}
