// ============================================================================
// REDUCERS - Estado raíz = categorías + router
// ============================================================================

use crate::models::{Category, HistoryAction, RouteInstruction};
use crate::routing::ROOT_PATH;
use crate::state::actions::Action;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub error: Option<String>,
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouterState {
    pub location: String,
    pub action: HistoryAction,
    pub instruction: RouteInstruction,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            location: ROOT_PATH.to_string(),
            action: HistoryAction::Pop,
            instruction: RouteInstruction::None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub categories: CategoriesState,
    pub router: RouterState,
}

impl RootState {
    /// Nombre de la categoría con ese id, si está cargada
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .items
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.as_str())
    }
}

pub fn categories_reducer(state: &CategoriesState, action: &Action) -> CategoriesState {
    match action {
        Action::CategoriesLoaded(items) => CategoriesState {
            items: items.clone(),
            error: None,
            loaded: true,
        },
        // Una lista inválida no llega a la barra de navegación
        Action::CategoriesRejected(reason) => CategoriesState {
            items: Vec::new(),
            error: Some(reason.clone()),
            loaded: true,
        },
        _ => state.clone(),
    }
}

pub fn router_reducer(state: &RouterState, action: &Action) -> RouterState {
    match action {
        Action::RouteResolved {
            path,
            action,
            instruction,
        } => RouterState {
            location: path.clone(),
            action: *action,
            instruction: instruction.clone(),
        },
        _ => state.clone(),
    }
}

/// Equivalente a combinar los reducers por clave
pub fn root_reducer(state: &RootState, action: &Action) -> RootState {
    RootState {
        categories: categories_reducer(&state.categories, action),
        router: router_reducer(&state.router, action),
    }
}
