// ============================================================================
// ACTIONS - Lo que se puede despachar al store
// ============================================================================

use std::fmt;

use crate::models::{Category, HistoryAction, RouteInstruction};
use crate::state::store::Store;

/// Acción diferida: recibe el store y despacha cuando quiera
pub type Thunk = Box<dyn FnOnce(&Store)>;

pub enum Action {
    /// Lista de categorías validada
    CategoriesLoaded(Vec<Category>),
    /// El proveedor entregó una lista inválida
    CategoriesRejected(String),
    /// El historial cambió (aún sin resolver)
    LocationChanged { path: String, action: HistoryAction },
    /// Ubicación ya resuelta a una instrucción de render
    RouteResolved {
        path: String,
        action: HistoryAction,
        instruction: RouteInstruction,
    },
    /// Navegar añadiendo entrada
    Push(String),
    /// Navegar sustituyendo la entrada actual
    Replace(String),
    Thunk(Thunk),
}

impl Action {
    /// Nombre corto para logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::CategoriesLoaded(_) => "CATEGORIES_LOADED",
            Action::CategoriesRejected(_) => "CATEGORIES_REJECTED",
            Action::LocationChanged { .. } => "LOCATION_CHANGED",
            Action::RouteResolved { .. } => "ROUTE_RESOLVED",
            Action::Push(_) => "PUSH",
            Action::Replace(_) => "REPLACE",
            Action::Thunk(_) => "THUNK",
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CategoriesLoaded(categories) => {
                f.debug_tuple("CategoriesLoaded").field(categories).finish()
            }
            Action::CategoriesRejected(reason) => {
                f.debug_tuple("CategoriesRejected").field(reason).finish()
            }
            Action::LocationChanged { path, action } => f
                .debug_struct("LocationChanged")
                .field("path", path)
                .field("action", action)
                .finish(),
            Action::RouteResolved {
                path,
                action,
                instruction,
            } => f
                .debug_struct("RouteResolved")
                .field("path", path)
                .field("action", action)
                .field("instruction", instruction)
                .finish(),
            Action::Push(path) => f.debug_tuple("Push").field(path).finish(),
            Action::Replace(path) => f.debug_tuple("Replace").field(path).finish(),
            Action::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}

/// Envolver un closure como acción diferida
pub fn thunk<F>(f: F) -> Action
where
    F: FnOnce(&Store) + 'static,
{
    Action::Thunk(Box::new(f))
}
