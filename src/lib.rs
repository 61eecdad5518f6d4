// ============================================================================
// CATEGORY RANKING - FRONTEND PWA (RUST PURO)
// ============================================================================
// - Routing: resolver de rutas + links de categoría + historial
// - State: store con reducers y middlewares (logger, thunk, router)
// - Services: proveedor de categorías, service workers
// - Views: funciones que describen y renderizan DOM
// ============================================================================

pub mod config;
pub mod models;
pub mod routing;
pub mod state;
pub mod services;
pub mod dom;
pub mod views;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia viva de la app
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Category Ranking - Rust Puro ({})", CONFIG.environment);

    services::unregister_service_workers();

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Navegación llamable desde JavaScript
#[wasm_bindgen]
pub fn navigate(path: &str) {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => app.navigate(path),
        None => log::warn!("⚠️ [NAV] App no está inicializada, ignorando {}", path),
    });
}
