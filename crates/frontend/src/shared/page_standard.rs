//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{usecase}--{category}` (e.g. `"u501_create_workspace--usecase"`)
//!   - `data-page-category` with one of the constants below

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Use-case page: a form that performs one action (create workspace).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Builds the page id from the entity and category.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(
            page_id("u501_create_workspace", PAGE_CAT_USECASE),
            "u501_create_workspace--usecase"
        );
    }
}
