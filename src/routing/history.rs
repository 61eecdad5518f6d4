// ============================================================================
// HISTORY - Superficie de navegación (navegador o memoria)
// ============================================================================
// GESTIÓN DE LISTENERS:
// - push/replace notifican a los listeners después de cambiar la ubicación.
// - BrowserHistory además escucha `popstate` (atrás/adelante). Ese listener es
//   global (window), así que solo se registra UNA VEZ (flag `popstate_installed`).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::HistoryAction;
use crate::routing::paths::ROOT_PATH;

/// Callback de cambio de ubicación: (ruta nueva, tipo de cambio)
pub type LocationListener = Rc<dyn Fn(&str, HistoryAction)>;

pub trait History {
    /// Ruta actual
    fn location(&self) -> String;
    /// Añade una entrada nueva al historial
    fn push(&self, path: &str) -> Result<(), JsValue>;
    /// Sustituye la entrada actual (no añade entrada)
    fn replace(&self, path: &str) -> Result<(), JsValue>;
    /// Registrar listener de cambios
    fn listen(&self, listener: LocationListener);
}

fn notify_all(listeners: &RefCell<Vec<LocationListener>>, path: &str, action: HistoryAction) {
    // Copia para que un listener pueda navegar de nuevo sin doble borrow
    let snapshot: Vec<LocationListener> = listeners.borrow().clone();
    for listener in snapshot {
        listener(path, action);
    }
}

// ============================================================================
// MEMORY HISTORY
// ============================================================================

/// Historial en memoria (tests y entornos sin navegador)
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    listeners: RefCell<Vec<LocationListener>>,
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial_path.to_string()]),
            index: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Todas las entradas, de la más antigua a la más reciente
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Volver a la entrada anterior; false si ya está en la primera
    pub fn back(&self) -> bool {
        let index = self.index.get();
        if index == 0 {
            return false;
        }
        self.index.set(index - 1);
        let path = self.location();
        notify_all(&self.listeners, &path, HistoryAction::Pop);
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    fn push(&self, path: &str) -> Result<(), JsValue> {
        {
            let mut entries = self.entries.borrow_mut();
            let index = self.index.get();
            // Push descarta las entradas "adelante"
            entries.truncate(index + 1);
            entries.push(path.to_string());
            self.index.set(index + 1);
        }
        notify_all(&self.listeners, path, HistoryAction::Push);
        Ok(())
    }

    fn replace(&self, path: &str) -> Result<(), JsValue> {
        self.entries.borrow_mut()[self.index.get()] = path.to_string();
        notify_all(&self.listeners, path, HistoryAction::Replace);
        Ok(())
    }

    fn listen(&self, listener: LocationListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

// ============================================================================
// BROWSER HISTORY
// ============================================================================

/// Historial del navegador (`window.history` + `popstate`)
pub struct BrowserHistory {
    listeners: RefCell<Vec<LocationListener>>,
    popstate_installed: Cell<bool>,
}

impl BrowserHistory {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            listeners: RefCell::new(Vec::new()),
            popstate_installed: Cell::new(false),
        })
    }

    fn browser_history() -> Result<web_sys::History, JsValue> {
        web_sys::window()
            .ok_or_else(|| JsValue::from_str("No window"))?
            .history()
    }

    /// Escuchar atrás/adelante del navegador (solo una vez)
    pub fn install_popstate(self: &Rc<Self>) -> Result<(), JsValue> {
        if self.popstate_installed.get() {
            log::warn!("⚠️ [HISTORY] popstate ya registrado, ignorando");
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        let weak = Rc::downgrade(self);
        let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
            if let Some(history) = weak.upgrade() {
                let path = history.location();
                log::debug!("⬅️ [HISTORY] popstate -> {}", path);
                notify_all(&history.listeners, &path, HistoryAction::Pop);
            }
        }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        // Listener global de vida igual a la app: forget() es seguro
        closure.forget();
        self.popstate_installed.set(true);
        Ok(())
    }
}

impl History for BrowserHistory {
    fn location(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| ROOT_PATH.to_string())
    }

    fn push(&self, path: &str) -> Result<(), JsValue> {
        Self::browser_history()?.push_state_with_url(&JsValue::NULL, "", Some(path))?;
        notify_all(&self.listeners, path, HistoryAction::Push);
        Ok(())
    }

    fn replace(&self, path: &str) -> Result<(), JsValue> {
        Self::browser_history()?.replace_state_with_url(&JsValue::NULL, "", Some(path))?;
        notify_all(&self.listeners, path, HistoryAction::Replace);
        Ok(())
    }

    fn listen(&self, listener: LocationListener) {
        self.listeners.borrow_mut().push(listener);
    }
}
