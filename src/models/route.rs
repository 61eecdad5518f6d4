use serde::{Deserialize, Serialize};

/// Instrucción de render que produce el router para la capa de vistas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RouteInstruction {
    /// Ranking agregado, sin filtro de categoría
    Aggregate,
    /// Ranking filtrado por categoría
    Category { id: String },
    /// Ninguna ruta coincide
    #[default]
    None,
}

impl RouteInstruction {
    pub fn category_id(&self) -> Option<&str> {
        match self {
            RouteInstruction::Category { id } => Some(id),
            _ => None,
        }
    }
}

/// Cómo cambió la ubicación del historial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HistoryAction {
    Push,
    Replace,
    Pop,
}
