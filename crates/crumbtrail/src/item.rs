use crate::label::Label;
use maud::{html, Markup, Render};
use serde::Serialize;

/// One entry of a breadcrumb trail: a label and the path it points at.
///
/// Items carry no identity beyond their position in the list they belong to,
/// and no uniqueness constraint applies to `to` or `label`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbItem {
    pub label: Label,
    pub to: String,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<Label>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: to.into(),
        }
    }
}

/// A single breadcrumb entry, usable on its own outside the list component.
///
/// Inactive crumbs render as links; the active crumb renders as static text
/// annotated `aria-current="page"`. The list component goes through this same
/// type for every entry, so standalone usage is styled identically.
///
/// # Example
///
/// ```
/// use crumbtrail::Crumb;
/// use maud::Render;
///
/// let html = Crumb::new("Users", "/users").render().into_string();
/// assert!(html.contains(r#"href="/users""#));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: Label,
    pub to: String,
    pub is_active: bool,
}

impl Crumb {
    /// Creates an inactive (link) crumb.
    pub fn new(label: impl Into<Label>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: to.into(),
            is_active: false,
        }
    }

    /// Builder method to mark this crumb as the current page.
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

impl From<BreadcrumbItem> for Crumb {
    fn from(item: BreadcrumbItem) -> Self {
        Self {
            label: item.label,
            to: item.to,
            is_active: false,
        }
    }
}

impl Render for Crumb {
    fn render(&self) -> Markup {
        html! {
            @if self.is_active {
                span class="breadcrumb-current" aria-current="page" { (self.label) }
            } @else {
                a class="breadcrumb-link" href=(self.to) { (self.label) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inactive_renders_link() {
        let html = Crumb::new("Users", "/users").render().into_string();
        assert_eq!(
            html,
            r#"<a class="breadcrumb-link" href="/users">Users</a>"#
        );
    }

    #[test]
    fn test_active_renders_current_page_text() {
        let html = Crumb::new("Users", "/users").active(true).render().into_string();
        assert_eq!(
            html,
            r#"<span class="breadcrumb-current" aria-current="page">Users</span>"#
        );
        assert!(!html.contains("href"));
    }

    #[test]
    fn test_from_item() {
        let crumb = Crumb::from(BreadcrumbItem::new("A", "/a"));
        assert!(!crumb.is_active);
        assert_eq!(crumb.to, "/a");
    }
}
