//! Root wrapper for every top-level view.

use leptos::prelude::*;

use super::config::use_config;
use super::page_standard::{category_of, page_class};

/// Browser tab title for a view
fn document_title(app_title: &str, view_title: Option<&str>) -> String {
    match view_title {
        Some(title) if !title.is_empty() => format!("{title} · {app_title}"),
        _ => app_title.to_string(),
    }
}

/// Puts `id`, the category class and `data-page-category` on the root
/// element and sets the document title. The category comes from the id
/// suffix (see `page_standard`).
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"d403_driver--dashboard"`
    page_id: &'static str,
    /// Shown in the browser tab before the app title
    #[prop(optional)]
    title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let category = category_of(page_id);
    if category.is_none() {
        log::warn!("page id {page_id:?} has no known category");
    }

    let app_title = use_config().app.title;
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&document_title(&app_title, title));
    }

    view! {
        <div id=page_id class=page_class(category) data-page-category=category.unwrap_or_default()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("DSS", Some("Driver")), "Driver · DSS");
        assert_eq!(document_title("DSS", Some("")), "DSS");
        assert_eq!(document_title("DSS", None), "DSS");
    }
}
