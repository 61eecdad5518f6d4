// ============================================================================
// PATHS - Rutas y plantillas compartidas por el resolver y los links
// ============================================================================

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Raíz (link "reset" de la barra de navegación)
pub const ROOT_PATH: &str = "/";

/// Vista agregada canónica (sin filtro de categoría)
pub const ALL_PATH: &str = "/all";

/// Plantilla por categoría; `:id` es el parámetro
pub const CATEGORY_PATTERN: &str = "/category/:id";

/// Forma antigua de la vista agregada; redirige a ALL_PATH
pub const LEGACY_ALL_CATEGORY_PATH: &str = "/category/1";

/// Bytes que no pueden ir tal cual dentro de un segmento de ruta
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Segmentos de una ruta, sin query ni fragmento. Se ignoran una barra
/// inicial y una final; una barra doble deja un segmento vacío
pub fn split_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').collect()
}

/// Sustituye cada parámetro `:nombre` de la plantilla por `value` codificado
pub fn fill_pattern(pattern: &str, value: &str) -> String {
    let segments: Vec<String> = split_segments(pattern)
        .into_iter()
        .map(|segment| {
            if segment.starts_with(':') {
                encode_segment(value)
            } else {
                segment.to_string()
            }
        })
        .collect();
    format!("/{}", segments.join("/"))
}

pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Decodifica un segmento capturado; si no es UTF-8 válido se deja como vino
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
