//! Page ids and categories.
//!
//! Every top-level view has an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"d401_client--dashboard"`). The category part is also written to
//! `data-page-category`, so styles can target a whole kind of page.
//! The entity part matches the module name, so an id copied from the DOM
//! inspector leads straight to the source.

/// Home / role selection.
pub const PAGE_CAT_LANDING: &str = "landing";

/// Sign-in and sign-up forms.
pub const PAGE_CAT_AUTH: &str = "auth";

/// Role dashboard with a tab strip.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LANDING, PAGE_CAT_AUTH, PAGE_CAT_DASHBOARD];

/// Known category of a well-formed page id.
pub fn category_of(page_id: &str) -> Option<&'static str> {
    let (entity, category) = page_id.split_once("--")?;
    if entity.is_empty() {
        return None;
    }
    ALL_CATEGORIES.iter().copied().find(|known| *known == category)
}

/// CSS class of the page root for a category.
pub fn page_class(category: Option<&str>) -> &'static str {
    match category {
        Some(PAGE_CAT_DASHBOARD) => "page page--dashboard",
        Some(PAGE_CAT_AUTH) => "page page--auth",
        Some(PAGE_CAT_LANDING) => "page page--landing",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("d400_admin--dashboard"), Some(PAGE_CAT_DASHBOARD));
        assert_eq!(category_of("home--landing"), Some(PAGE_CAT_LANDING));
        assert_eq!(category_of("signin--auth"), Some(PAGE_CAT_AUTH));
        assert_eq!(category_of("d400_admin"), None);
        assert_eq!(category_of("--dashboard"), None);
        assert_eq!(category_of("reports--legacy"), None);
    }

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(category_of("d402_customer--dashboard")), "page page--dashboard");
        assert_eq!(page_class(None), "page");
    }
}
