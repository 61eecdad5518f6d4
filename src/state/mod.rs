// ============================================================================
// STATE MODULE - Store con reducers + middlewares, conectado al historial
// ============================================================================

pub mod actions;
pub mod reducers;
pub mod middleware;
pub mod store;

pub use actions::*;
pub use reducers::*;
pub use middleware::*;
pub use store::*;

use std::rc::Rc;

use crate::models::HistoryAction;
use crate::routing::History;

/// Construye el store completo a partir de un historial:
/// middlewares por defecto, listener del historial y ubicación inicial resuelta
pub fn create_store(history: Rc<dyn History>) -> Store {
    let store = Store::new(default_middlewares(history.clone()));

    let weak = store.downgrade();
    history.listen(Rc::new(move |path: &str, action: HistoryAction| {
        if let Some(store) = weak.upgrade() {
            store.dispatch(Action::LocationChanged {
                path: path.to_string(),
                action,
            });
        }
    }));

    store.dispatch(Action::LocationChanged {
        path: history.location(),
        action: HistoryAction::Pop,
    });

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, RouteInstruction};
    use crate::routing::MemoryHistory;
    use std::cell::Cell;

    fn store_at(path: &str) -> (Rc<MemoryHistory>, Store) {
        let history = Rc::new(MemoryHistory::new(path));
        let store = create_store(history.clone());
        (history, store)
    }

    #[test]
    fn test_initial_location_is_resolved() {
        let (_, store) = store_at("/category/5");
        let router = store.state().router;
        assert_eq!(router.location, "/category/5");
        assert_eq!(router.action, HistoryAction::Pop);
        assert_eq!(router.instruction, RouteInstruction::Category { id: "5".into() });
    }

    #[test]
    fn test_scenario_a_category_view() {
        let (_, store) = store_at("/");
        store.dispatch(Action::CategoriesLoaded(vec![
            Category::new("1", "All"),
            Category::new("5", "Books"),
        ]));

        store.dispatch(Action::Push("/category/5".into()));

        assert_eq!(
            store.state().router.instruction,
            RouteInstruction::Category { id: "5".into() }
        );
    }

    #[test]
    fn test_scenario_b_legacy_path_redirects_once() {
        let (history, store) = store_at("/");
        store.dispatch(Action::CategoriesLoaded(vec![
            Category::new("1", "All"),
            Category::new("5", "Books"),
        ]));

        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        store.subscribe(move || counter.set(counter.get() + 1));

        store.dispatch(Action::Push("/category/1".into()));

        // push + un único replace: la entrada antigua no queda en el historial
        assert_eq!(history.entries(), vec!["/", "/all"]);
        let router = store.state().router;
        assert_eq!(router.location, "/all");
        assert_eq!(router.action, HistoryAction::Replace);
        assert_eq!(router.instruction, RouteInstruction::Aggregate);
        // La ruta antigua nunca llega al estado
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn test_scenario_c_all_path_has_no_redirect() {
        let (history, store) = store_at("/");
        store.dispatch(Action::Push("/all".into()));

        assert_eq!(history.entries(), vec!["/", "/all"]);
        let router = store.state().router;
        assert_eq!(router.action, HistoryAction::Push);
        assert_eq!(router.instruction, RouteInstruction::Aggregate);
    }

    #[test]
    fn test_redirect_is_idempotent() {
        let (history, store) = store_at("/category/1");
        assert_eq!(history.entries(), vec!["/all"]);
        assert_eq!(store.state().router.instruction, RouteInstruction::Aggregate);

        // Volver a navegar a la vista canónica no redirige otra vez
        store.dispatch(Action::Replace("/all".into()));
        assert_eq!(history.entries(), vec!["/all"]);
        assert_eq!(store.state().router.instruction, RouteInstruction::Aggregate);
    }

    #[test]
    fn test_unknown_path_settles_on_none() {
        let (_, store) = store_at("/");
        store.dispatch(Action::Push("/unknown".into()));
        let router = store.state().router;
        assert_eq!(router.location, "/unknown");
        assert_eq!(router.instruction, RouteInstruction::None);
    }

    #[test]
    fn test_back_navigation_is_resolved() {
        let (history, store) = store_at("/all");
        store.dispatch(Action::Push("/category/5".into()));
        assert!(history.back());

        let router = store.state().router;
        assert_eq!(router.location, "/all");
        assert_eq!(router.action, HistoryAction::Pop);
        assert_eq!(router.instruction, RouteInstruction::Aggregate);
    }
}
