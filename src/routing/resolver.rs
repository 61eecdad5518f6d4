// ============================================================================
// ROUTE RESOLVER - Ruta actual -> instrucción de render o redirección
// ============================================================================
// La tabla se evalúa de arriba abajo y gana la primera coincidencia.
// Un patrón coincide si sus segmentos son prefijo de los de la ruta
// (`/all/extra` sigue siendo la vista agregada).
// ============================================================================

use crate::models::RouteInstruction;
use crate::routing::paths::{
    decode_segment, split_segments, ALL_PATH, CATEGORY_PATTERN, LEGACY_ALL_CATEGORY_PATH,
};

/// Qué hacer cuando un patrón coincide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    Aggregate,
    Redirect(&'static str),
    Category,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub pattern: &'static str,
    pub action: RouteAction,
}

pub const ROUTE_TABLE: &[Route] = &[
    Route {
        pattern: ALL_PATH,
        action: RouteAction::Aggregate,
    },
    Route {
        pattern: LEGACY_ALL_CATEGORY_PATH,
        action: RouteAction::Redirect(ALL_PATH),
    },
    Route {
        pattern: CATEGORY_PATTERN,
        action: RouteAction::Category,
    },
];

/// Coincidencia de una ruta contra un patrón
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub pattern: &'static str,
    pub param: Option<String>,
}

/// Resultado de resolver una navegación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(RouteInstruction),
    Redirect { to: String },
}

/// Intenta casar `path` con `pattern`; el parámetro capturado sale decodificado.
/// Un segmento vacío en la posición del parámetro no coincide
pub fn match_pattern(pattern: &'static str, path: &str) -> Option<RouteMatch> {
    let pattern_segments = split_segments(pattern);
    let path_segments = split_segments(path);

    if path_segments.len() < pattern_segments.len() {
        return None;
    }

    let mut param = None;
    for (expected, actual) in pattern_segments.iter().zip(&path_segments) {
        if expected.starts_with(':') && actual.is_empty() {
            return None;
        }
        let actual = decode_segment(actual);
        if expected.starts_with(':') {
            param = Some(actual);
        } else if *expected != actual {
            return None;
        }
    }

    Some(RouteMatch { pattern, param })
}

/// Resuelve la ruta con la primera entrada de ROUTE_TABLE que coincida
pub fn resolve(path: &str) -> Resolution {
    for route in ROUTE_TABLE {
        let Some(matched) = match_pattern(route.pattern, path) else {
            continue;
        };
        log::trace!("🧭 [ROUTER] {} coincide con {}", path, matched.pattern);

        return match route.action {
            RouteAction::Aggregate => Resolution::Render(RouteInstruction::Aggregate),
            RouteAction::Redirect(to) => Resolution::Redirect { to: to.to_string() },
            RouteAction::Category => match matched.param {
                Some(id) => Resolution::Render(RouteInstruction::Category { id }),
                None => continue,
            },
        };
    }

    log::debug!("🔍 [ROUTER] Sin ruta para {}", path);
    Resolution::Render(RouteInstruction::None)
}
