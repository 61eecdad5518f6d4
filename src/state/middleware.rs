// ============================================================================
// MIDDLEWARE - logger, thunk y router (en ese orden)
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::{HistoryAction, RouteInstruction};
use crate::routing::{resolve, History, Resolution};
use crate::state::actions::Action;
use crate::state::store::Store;

/// Redirecciones seguidas antes de rendirse
pub const MAX_REDIRECTS: usize = 8;

/// Siguiente eslabón de la cadena
pub type Next<'a> = &'a dyn Fn(Action);

pub trait Middleware {
    fn name(&self) -> &'static str;
    fn handle(&self, store: &Store, action: Action, next: Next<'_>);
}

// ============================================================================
// LOGGER
// ============================================================================

pub struct LoggerMiddleware;

impl Middleware for LoggerMiddleware {
    fn name(&self) -> &'static str {
        "logger"
    }

    fn handle(&self, store: &Store, action: Action, next: Next<'_>) {
        if !log::log_enabled!(log::Level::Debug) {
            next(action);
            return;
        }

        let label = action.name();
        store.with_state_ref(|prev| log::debug!("📦 [STORE] {} prev state {:?}", label, prev));
        log::debug!("📤 [STORE] {} action {:?}", label, action);
        next(action);
        store.with_state_ref(|state| log::debug!("📥 [STORE] {} next state {:?}", label, state));
    }
}

// ============================================================================
// THUNK
// ============================================================================

pub struct ThunkMiddleware;

impl Middleware for ThunkMiddleware {
    fn name(&self) -> &'static str {
        "thunk"
    }

    fn handle(&self, store: &Store, action: Action, next: Next<'_>) {
        match action {
            // El thunk despacha contra el store completo, no contra `next`
            Action::Thunk(run) => run(store),
            other => next(other),
        }
    }
}

// ============================================================================
// ROUTER
// ============================================================================

/// Conecta el store con el historial:
/// - Push/Replace se ejecutan en el historial y no llegan al reducer
/// - LocationChanged se resuelve; una redirección sustituye la entrada actual
///   y el render solo ocurre con la ubicación final
pub struct RouterMiddleware {
    history: Rc<dyn History>,
    redirects: Cell<usize>,
}

impl RouterMiddleware {
    pub fn new(history: Rc<dyn History>) -> Self {
        Self {
            history,
            redirects: Cell::new(0),
        }
    }

    fn redirect(&self, from: String, to: String, next: Next<'_>) {
        let hops = self.redirects.get() + 1;
        if hops > MAX_REDIRECTS {
            log::error!("❌ [ROUTER] Demasiadas redirecciones, última {} -> {}", from, to);
            self.redirects.set(0);
            next(Action::RouteResolved {
                path: from,
                action: HistoryAction::Replace,
                instruction: RouteInstruction::None,
            });
            return;
        }

        self.redirects.set(hops);
        log::info!("↪️ [ROUTER] Redirigiendo {} -> {}", from, to);
        // replace() notifica al historial -> LocationChanged(to) anidado
        if let Err(e) = self.history.replace(&to) {
            log::error!("❌ [ROUTER] Error sustituyendo entrada {}: {:?}", to, e);
            self.redirects.set(0);
            let instruction = match resolve(&to) {
                Resolution::Render(instruction) => instruction,
                Resolution::Redirect { .. } => RouteInstruction::None,
            };
            next(Action::RouteResolved {
                path: to,
                action: HistoryAction::Replace,
                instruction,
            });
        }
    }
}

impl Middleware for RouterMiddleware {
    fn name(&self) -> &'static str {
        "router"
    }

    fn handle(&self, _store: &Store, action: Action, next: Next<'_>) {
        match action {
            Action::Push(path) => {
                if let Err(e) = self.history.push(&path) {
                    log::error!("❌ [ROUTER] Error navegando a {}: {:?}", path, e);
                }
            }
            Action::Replace(path) => {
                if let Err(e) = self.history.replace(&path) {
                    log::error!("❌ [ROUTER] Error sustituyendo entrada {}: {:?}", path, e);
                }
            }
            Action::LocationChanged { path, action } => match resolve(&path) {
                Resolution::Redirect { to } => self.redirect(path, to, next),
                Resolution::Render(instruction) => {
                    self.redirects.set(0);
                    next(Action::RouteResolved {
                        path,
                        action,
                        instruction,
                    });
                }
            },
            other => next(other),
        }
    }
}

/// Middlewares por defecto, en el orden en que se aplican
pub fn default_middlewares(history: Rc<dyn History>) -> Vec<Box<dyn Middleware>> {
    vec![
        Box::new(LoggerMiddleware),
        Box::new(ThunkMiddleware),
        Box::new(RouterMiddleware::new(history)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::routing::{LocationListener, MemoryHistory, LEGACY_ALL_CATEGORY_PATH};
    use crate::state::actions::thunk;
    use crate::state::create_store;
    use std::cell::RefCell;
    use wasm_bindgen::JsValue;

    /// Historial cuyo replace siempre vuelve a la ruta antigua
    #[derive(Default)]
    struct StickyHistory {
        replaces: Cell<usize>,
        listeners: RefCell<Vec<LocationListener>>,
    }

    impl History for StickyHistory {
        fn location(&self) -> String {
            LEGACY_ALL_CATEGORY_PATH.to_string()
        }

        fn push(&self, _path: &str) -> Result<(), JsValue> {
            Ok(())
        }

        fn replace(&self, _path: &str) -> Result<(), JsValue> {
            self.replaces.set(self.replaces.get() + 1);
            let listeners: Vec<LocationListener> = self.listeners.borrow().clone();
            for listener in listeners {
                listener(LEGACY_ALL_CATEGORY_PATH, HistoryAction::Replace);
            }
            Ok(())
        }

        fn listen(&self, listener: LocationListener) {
            self.listeners.borrow_mut().push(listener);
        }
    }

    /// Historial que arranca en la ruta antigua y no deja sustituir la entrada
    #[derive(Default)]
    struct FailingHistory {
        replaces: Cell<usize>,
    }

    impl History for FailingHistory {
        fn location(&self) -> String {
            LEGACY_ALL_CATEGORY_PATH.to_string()
        }

        fn push(&self, _path: &str) -> Result<(), JsValue> {
            Ok(())
        }

        fn replace(&self, _path: &str) -> Result<(), JsValue> {
            self.replaces.set(self.replaces.get() + 1);
            Err(JsValue::NULL)
        }

        fn listen(&self, _listener: LocationListener) {}
    }

    /// Guarda los nombres de las acciones que llegan a él
    struct Recorder(Rc<RefCell<Vec<&'static str>>>);

    impl Middleware for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn handle(&self, _store: &Store, action: Action, next: Next<'_>) {
            self.0.borrow_mut().push(action.name());
            next(action);
        }
    }

    #[test]
    fn test_default_middleware_order() {
        let history: Rc<dyn History> = Rc::new(MemoryHistory::default());
        let names: Vec<&str> = default_middlewares(history)
            .iter()
            .map(|middleware| middleware.name())
            .collect();
        assert_eq!(names, vec!["logger", "thunk", "router"]);
    }

    #[test]
    fn test_thunk_runs_and_its_dispatches_restart_the_chain() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let store = Store::new(vec![
            Box::new(Recorder(seen.clone())),
            Box::new(ThunkMiddleware),
        ]);

        store.dispatch(thunk(|store| {
            store.dispatch(Action::CategoriesLoaded(vec![Category::new("5", "Books")]));
        }));

        assert_eq!(*seen.borrow(), vec!["THUNK", "CATEGORIES_LOADED"]);
        assert_eq!(store.state().categories.items.len(), 1);
    }

    #[test]
    fn test_logger_passes_actions_through() {
        let store = Store::new(vec![Box::new(LoggerMiddleware)]);
        store.dispatch(Action::CategoriesRejected("bad".into()));
        assert_eq!(store.state().categories.error.as_deref(), Some("bad"));
    }

    #[test]
    fn test_router_swallows_navigation_actions() {
        let history = Rc::new(MemoryHistory::new("/"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let store = Store::new(vec![
            Box::new(RouterMiddleware::new(history.clone())),
            Box::new(Recorder(seen.clone())),
        ]);

        store.dispatch(Action::Push("/all".into()));
        store.dispatch(Action::Replace("/category/5".into()));

        assert_eq!(history.entries(), vec!["/", "/category/5"]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_router_resolves_location_changes() {
        let history = Rc::new(MemoryHistory::new("/"));
        let store = Store::new(vec![Box::new(RouterMiddleware::new(history.clone()))]);

        store.dispatch(Action::LocationChanged {
            path: "/category/5".into(),
            action: HistoryAction::Push,
        });

        let router = store.state().router;
        assert_eq!(router.location, "/category/5");
        assert_eq!(router.instruction, RouteInstruction::Category { id: "5".into() });
    }

    #[test]
    fn test_redirect_replaces_history_entry_without_store_listener() {
        // Sin listener el historial no vuelve a despachar: solo se ve el replace
        let history = Rc::new(MemoryHistory::new("/category/1"));
        let store = Store::new(vec![Box::new(RouterMiddleware::new(history.clone()))]);

        store.dispatch(Action::LocationChanged {
            path: "/category/1".into(),
            action: HistoryAction::Pop,
        });

        assert_eq!(history.entries(), vec!["/all"]);
        assert_eq!(store.state().router.instruction, RouteInstruction::None);
    }

    #[test]
    fn test_redirect_loop_settles_on_none_after_max_redirects() {
        let history = Rc::new(StickyHistory::default());
        let store = create_store(history.clone());

        assert_eq!(history.replaces.get(), MAX_REDIRECTS);
        let router = store.state().router;
        assert_eq!(router.location, LEGACY_ALL_CATEGORY_PATH);
        assert_eq!(router.action, HistoryAction::Replace);
        assert_eq!(router.instruction, RouteInstruction::None);
    }

    #[test]
    fn test_redirect_counter_resets_after_giving_up() {
        let history = Rc::new(StickyHistory::default());
        let store = create_store(history.clone());

        store.dispatch(Action::LocationChanged {
            path: LEGACY_ALL_CATEGORY_PATH.into(),
            action: HistoryAction::Pop,
        });

        assert_eq!(history.replaces.get(), 2 * MAX_REDIRECTS);
        assert_eq!(store.state().router.instruction, RouteInstruction::None);
    }

    #[test]
    fn test_failed_replace_renders_redirect_target() {
        let history = Rc::new(FailingHistory::default());
        let store = create_store(history.clone());

        assert_eq!(history.replaces.get(), 1);
        let router = store.state().router;
        assert_eq!(router.location, "/all");
        assert_eq!(router.action, HistoryAction::Replace);
        assert_eq!(router.instruction, RouteInstruction::Aggregate);
    }
}
