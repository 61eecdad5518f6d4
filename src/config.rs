// ============================================================================
// CONFIG - Configuración de la app (leída en tiempo de compilación)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ROOT_ELEMENT_ID: &str = "root";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// ID del elemento donde se monta la app
    pub root_element_id: String,
    /// Lista de categorías en JSON (`[{"id": "1", "name": "All"}, ...]`)
    pub categories_json: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            enable_logging: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            root_element_id: DEFAULT_ROOT_ELEMENT_ID.to_string(),
            categories_json: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("ROOT_ELEMENT_ID"),
            option_env!("CATEGORIES_JSON"),
        )
    }

    fn from_values(
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        root_element_id: Option<&str>,
        categories_json: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            root_element_id: root_element_id
                .filter(|id| !id.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.root_element_id),
            categories_json: categories_json
                .filter(|json| !json.trim().is_empty())
                .map(str::to_string),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm-logger; valores desconocidos caen en Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
