use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ID reservado: la categoría "todas" (vista agregada)
pub const ALL_CATEGORY_ID: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// true si es la categoría reservada que representa "todas"
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

/// Registro tal como llega del proveedor, antes de validar
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("category #{index} has no id")]
    MissingId { index: usize },

    #[error("category #{index} (id `{id}`) has no name")]
    MissingName { index: usize, id: String },

    /// `.` y `..` no sobreviven como segmento: el navegador los normaliza
    #[error("category #{index} has reserved path id `{id}`")]
    DotSegmentId { index: usize, id: String },

    #[error("duplicate category id `{id}` at #{index}")]
    DuplicateId { index: usize, id: String },

    #[error("invalid category list: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for CategoryError {
    fn from(err: serde_json::Error) -> Self {
        CategoryError::Malformed(err.to_string())
    }
}

impl TryFrom<(usize, RawCategory)> for Category {
    type Error = CategoryError;

    fn try_from((index, raw): (usize, RawCategory)) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(CategoryError::MissingId { index })?;
        if id == "." || id == ".." {
            return Err(CategoryError::DotSegmentId { index, id });
        }
        let name = raw
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| CategoryError::MissingName {
                index,
                id: id.clone(),
            })?;
        Ok(Category { id, name })
    }
}

/// Valida la lista completa: un solo registro inválido rechaza todo
pub fn validate_categories(raw: Vec<RawCategory>) -> Result<Vec<Category>, CategoryError> {
    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(raw.len());

    for (index, record) in raw.into_iter().enumerate() {
        let category = Category::try_from((index, record))?;
        if !seen.insert(category.id.clone()) {
            return Err(CategoryError::DuplicateId {
                index,
                id: category.id,
            });
        }
        categories.push(category);
    }

    Ok(categories)
}

/// Parsear y validar una lista JSON de categorías
pub fn parse_categories(json: &str) -> Result<Vec<Category>, CategoryError> {
    let raw: Vec<RawCategory> = serde_json::from_str(json)?;
    validate_categories(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_list_keeps_order() {
        let categories =
            parse_categories(r#"[{"id":"1","name":"All"},{"id":"5","name":"Books"}]"#).unwrap();
        assert_eq!(
            categories,
            vec![Category::new("1", "All"), Category::new("5", "Books")]
        );
        assert!(categories[0].is_all());
        assert!(!categories[1].is_all());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = parse_categories(r#"[{"name":"Books"}]"#).unwrap_err();
        assert_eq!(err, CategoryError::MissingId { index: 0 });
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = parse_categories(r#"[{"id":"1","name":"All"},{"id":"7","name":"  "}]"#)
            .unwrap_err();
        assert_eq!(
            err,
            CategoryError::MissingName {
                index: 1,
                id: "7".to_string()
            }
        );
    }

    #[test]
    fn test_dot_segment_ids_are_rejected() {
        for id in [".", ".."] {
            let json = format!(r#"[{{"id":"5","name":"Books"}},{{"id":"{}","name":"Up"}}]"#, id);
            let err = parse_categories(&json).unwrap_err();
            assert_eq!(
                err,
                CategoryError::DotSegmentId {
                    index: 1,
                    id: id.to_string()
                }
            );
        }
        // Solo el segmento exacto: los ids con puntos siguen valiendo
        assert!(parse_categories(r#"[{"id":"...","name":"Dots"},{"id":"v.2","name":"V2"}]"#).is_ok());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let err = parse_categories(r#"[{"id":"5","name":"Books"},{"id":"5","name":"Music"}]"#)
            .unwrap_err();
        assert!(matches!(err, CategoryError::DuplicateId { index: 1, .. }));
    }

    #[test]
    fn test_not_a_list_is_malformed() {
        let err = parse_categories(r#"{"id":"5"}"#).unwrap_err();
        assert!(matches!(err, CategoryError::Malformed(_)));
    }
}
