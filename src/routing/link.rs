// ============================================================================
// CATEGORY LINKS - Categoría -> ruta canónica para la navegación
// ============================================================================

use crate::models::Category;
use crate::routing::paths::{fill_pattern, ALL_PATH, CATEGORY_PATTERN};

/// Ruta a usar en el link de una categoría.
/// La categoría reservada apunta directo a ALL_PATH, nunca a la ruta antigua.
pub fn category_path(category: &Category) -> String {
    if category.is_all() {
        ALL_PATH.to_string()
    } else {
        fill_pattern(CATEGORY_PATTERN, &category.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteInstruction;
    use crate::routing::resolver::{resolve, Resolution};

    #[test]
    fn test_reserved_category_links_to_all() {
        assert_eq!(category_path(&Category::new("1", "All")), "/all");
    }

    #[test]
    fn test_other_categories_link_to_template() {
        assert_eq!(category_path(&Category::new("5", "Books")), "/category/5");
        assert_eq!(category_path(&Category::new("10", "Games")), "/category/10");
    }

    #[test]
    fn test_links_resolve_back_to_their_category() {
        let categories = [
            Category::new("5", "Books"),
            Category::new("42", "Music"),
            Category::new("outdoor-gear", "Outdoor"),
            Category::new("a b/c", "Odd"),
            Category::new("ñandú", "Aves"),
        ];
        for category in &categories {
            assert_eq!(
                resolve(&category_path(category)),
                Resolution::Render(RouteInstruction::Category {
                    id: category.id.clone()
                }),
                "category {:?}",
                category
            );
        }
    }

    #[test]
    fn test_reserved_link_needs_no_redirect() {
        let path = category_path(&Category::new("1", "All"));
        assert_eq!(resolve(&path), Resolution::Render(RouteInstruction::Aggregate));
    }
}
