pub mod category;
pub mod route;

pub use category::{
    parse_categories, validate_categories, Category, CategoryError, RawCategory, ALL_CATEGORY_ID,
};
pub use route::{HistoryAction, RouteInstruction};
