// ============================================================================
// SERVICE WORKER - La app no usa SW: se desregistran los que haya
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerRegistration;

/// Desregistrar todos los service workers del origen (en segundo plano)
pub fn unregister_all() {
    wasm_bindgen_futures::spawn_local(async {
        match unregister_registrations().await {
            Ok(0) => log::debug!("🧹 [SW] Ningún service worker registrado"),
            Ok(count) => log::info!("🧹 [SW] {} service worker(s) desregistrados", count),
            Err(e) => log::warn!("⚠️ [SW] No se pudieron desregistrar: {:?}", e),
        }
    });
}

async fn unregister_registrations() -> Result<usize, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let navigator = window.navigator();
    // Fuera de un contexto seguro (http que no es localhost) no existe
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
        log::debug!("🧹 [SW] navigator.serviceWorker no disponible");
        return Ok(0);
    }
    let container = navigator.service_worker();

    let registrations = JsFuture::from(container.get_registrations()).await?;
    let registrations: js_sys::Array = registrations.dyn_into()?;

    let mut count = 0;
    for entry in registrations.iter() {
        let registration: ServiceWorkerRegistration = entry.dyn_into()?;
        let done = JsFuture::from(registration.unregister()?).await?;
        if done.as_bool().unwrap_or(false) {
            count += 1;
        }
    }
    Ok(count)
}
