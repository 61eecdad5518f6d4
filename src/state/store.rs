// ============================================================================
// STORE - Estado raíz + cadena de middlewares + subscribers
// ============================================================================
// dispatch(action) recorre los middlewares en orden; el último eslabón es el
// root reducer. Los subscribers se llaman solo si el estado cambió.
// El estado vive en Rc<RefCell>; el borrow nunca se mantiene mientras corren
// middlewares o subscribers, así que pueden volver a despachar.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::state::actions::Action;
use crate::state::middleware::Middleware;
use crate::state::reducers::{root_reducer, RootState};

type Subscriber = Rc<dyn Fn()>;

struct StoreInner {
    state: RefCell<RootState>,
    middlewares: Vec<Box<dyn Middleware>>,
    subscribers: RefCell<Vec<Subscriber>>,
}

#[derive(Clone)]
pub struct Store {
    inner: Rc<StoreInner>,
}

/// Referencia débil al store (para listeners que no deben mantenerlo vivo)
#[derive(Clone)]
pub struct WeakStore(Weak<StoreInner>);

impl WeakStore {
    pub fn upgrade(&self) -> Option<Store> {
        self.0.upgrade().map(|inner| Store { inner })
    }
}

impl Store {
    pub fn new(middlewares: Vec<Box<dyn Middleware>>) -> Self {
        Self::with_state(RootState::default(), middlewares)
    }

    pub fn with_state(state: RootState, middlewares: Vec<Box<dyn Middleware>>) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(state),
                middlewares,
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Copia del estado actual
    pub fn state(&self) -> RootState {
        self.inner.state.borrow().clone()
    }

    /// Leer el estado sin clonarlo
    pub fn with_state_ref<R>(&self, f: impl FnOnce(&RootState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    pub fn dispatch(&self, action: Action) {
        self.run_from(0, action);
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.inner.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn downgrade(&self) -> WeakStore {
        WeakStore(Rc::downgrade(&self.inner))
    }

    fn run_from(&self, index: usize, action: Action) {
        match self.inner.middlewares.get(index) {
            Some(middleware) => {
                let next = |action: Action| self.run_from(index + 1, action);
                middleware.handle(self, action, &next);
            }
            None => self.reduce(action),
        }
    }

    fn reduce(&self, action: Action) {
        if let Action::Thunk(_) = action {
            log::warn!("⚠️ [STORE] Thunk sin middleware de thunks, ignorado");
            return;
        }

        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let next = root_reducer(&state, &action);
            if next != *state {
                *state = next;
                true
            } else {
                false
            }
        };

        if changed {
            self.notify();
        }
    }

    fn notify(&self) {
        let subscribers: Vec<Subscriber> = self.inner.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}
