// ============================================================================
// ROUTING MODULE - Rutas, resolver, links de categoría e historial
// ============================================================================

pub mod paths;
pub mod resolver;
pub mod link;
pub mod history;

pub use paths::*;
pub use resolver::{resolve, match_pattern, Resolution, Route, RouteAction, RouteMatch, ROUTE_TABLE};
pub use link::category_path;
pub use history::{BrowserHistory, History, LocationListener, MemoryHistory};
