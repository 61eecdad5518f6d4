// ============================================================================
// EVENT HANDLING - Clicks y links internos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Estos listeners van sobre elementos que se destruyen en cada render
//   (clear_children). El navegador suelta su lado JS, pero el Box de Rust
//   vive mientras viva el Closure: con forget() se perdería uno por link
//   en cada render.
// - Por eso los closures se guardan en un `Listeners` que el dueño del
//   árbol vacía antes de re-renderizar.
// - Listeners globales (window) NO van aquí: ver BrowserHistory::install_popstate.
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};

use crate::state::{Action, WeakStore};

pub type ClickClosure = Closure<dyn FnMut(MouseEvent)>;

/// Closures vivos del árbol renderizado; clear() los suelta todos
pub struct Listeners<T = ClickClosure> {
    items: RefCell<Vec<T>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
        }
    }

    pub fn keep(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Suelta todos los closures; devuelve cuántos había
    pub fn clear(&self) -> usize {
        let dropped: Vec<T> = self.items.borrow_mut().drain(..).collect();
        dropped.len()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper para crear click handler simple; el closure queda en `listeners`
pub fn on_click<F>(element: &Element, listeners: &Listeners, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure: ClickClosure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    listeners.keep(closure);
    Ok(())
}

/// Datos del click que deciden si lo maneja la app o el navegador
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub default_prevented: bool,
}

impl ClickModifiers {
    pub fn from_event(event: &MouseEvent) -> Self {
        Self {
            button: event.button(),
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
            shift: event.shift_key(),
            alt: event.alt_key(),
            default_prevented: event.default_prevented(),
        }
    }

    /// Solo el click izquierdo sin modificadores navega dentro de la app;
    /// el resto (nueva pestaña, ventana...) se deja al navegador
    pub fn is_plain_left_click(&self) -> bool {
        self.button == 0
            && !self.ctrl
            && !self.meta
            && !self.shift
            && !self.alt
            && !self.default_prevented
    }
}

/// Link interno: un click normal despacha Push(path) en vez de recargar
pub fn on_link_click(
    element: &Element,
    listeners: &Listeners,
    store: WeakStore,
    path: String,
) -> Result<(), JsValue> {
    on_click(element, listeners, move |event: MouseEvent| {
        if !ClickModifiers::from_event(&event).is_plain_left_click() {
            return;
        }
        event.prevent_default();
        if let Some(store) = store.upgrade() {
            log::debug!("🔗 [NAV] Click en link -> {}", path);
            store.dispatch(Action::Push(path.clone()));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_clearing_listeners_drops_them() {
        let marker = Rc::new(());
        let listeners: Listeners<Rc<()>> = Listeners::new();
        listeners.keep(marker.clone());
        listeners.keep(marker.clone());
        assert_eq!(listeners.len(), 2);
        assert_eq!(Rc::strong_count(&marker), 3);

        assert_eq!(listeners.clear(), 2);
        assert!(listeners.is_empty());
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_plain_left_click_is_intercepted() {
        assert!(ClickModifiers::default().is_plain_left_click());
    }

    #[test]
    fn test_modified_or_other_clicks_are_left_to_browser() {
        let cases = [
            ClickModifiers { button: 1, ..Default::default() },
            ClickModifiers { ctrl: true, ..Default::default() },
            ClickModifiers { meta: true, ..Default::default() },
            ClickModifiers { shift: true, ..Default::default() },
            ClickModifiers { alt: true, ..Default::default() },
            ClickModifiers { default_prevented: true, ..Default::default() },
        ];
        for case in cases {
            assert!(!case.is_plain_left_click(), "{:?}", case);
        }
    }
}
