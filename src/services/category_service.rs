// ============================================================================
// CATEGORY SERVICE - Proveedor de categorías (valida en la frontera)
// ============================================================================

use crate::config::CONFIG;
use crate::models::{parse_categories, Category, CategoryError};
use crate::state::{thunk, Action};

/// Lista usada cuando no se configura CATEGORIES_JSON
const DEFAULT_CATEGORIES_JSON: &str = r#"[
    { "id": "1", "name": "All" },
    { "id": "2", "name": "Books" },
    { "id": "3", "name": "Music" },
    { "id": "4", "name": "Games" },
    { "id": "5", "name": "Electronics" }
]"#;

pub struct CategoryService {
    source: String,
}

impl CategoryService {
    /// Servicio con la lista configurada en compilación (o la de por defecto)
    pub fn new() -> Self {
        match CONFIG.categories_json.as_deref() {
            Some(json) => Self::from_json(json),
            None => Self::from_json(DEFAULT_CATEGORIES_JSON),
        }
    }

    pub fn from_json(json: &str) -> Self {
        Self {
            source: json.to_string(),
        }
    }

    /// Categorías validadas, en el orden del proveedor
    pub fn fetch_categories(&self) -> Result<Vec<Category>, CategoryError> {
        parse_categories(&self.source)
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}

/// Thunk que carga las categorías en el store
pub fn load_categories(service: CategoryService) -> Action {
    thunk(move |store| match service.fetch_categories() {
        Ok(categories) => {
            log::info!("📋 [CATEGORIES] {} categorías cargadas", categories.len());
            store.dispatch(Action::CategoriesLoaded(categories));
        }
        Err(e) => {
            log::error!("❌ [CATEGORIES] Lista rechazada: {}", e);
            store.dispatch(Action::CategoriesRejected(e.to_string()));
        }
    })
}
