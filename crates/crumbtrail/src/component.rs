use crate::item::{BreadcrumbItem, Crumb};
use crate::label::Label;
use maud::{html, Markup, Render};

/// Breadcrumb navigation component.
///
/// Builder-style configuration, every field defaulted. Rendering emits a
/// `<nav aria-label="Breadcrumb">` landmark wrapping an ordered list: every
/// entry but the last is a link, the last is static text annotated
/// `aria-current="page"`, and the separator sits between consecutive
/// entries. Actual page transitions are the host application's business.
///
/// # Example
///
/// ```
/// use crumbtrail::{Breadcrumb, BreadcrumbItem};
///
/// let html = Breadcrumb::new()
///     .items(vec![BreadcrumbItem::new("Users", "/users")])
///     .separator("›")
///     .render()
///     .into_string();
/// assert!(html.contains(r#"aria-label="Breadcrumb""#));
/// ```
#[derive(Debug, Clone)]
pub struct Breadcrumb {
    items: Vec<BreadcrumbItem>,
    separator: Label,
    class_name: String,
    show_home: bool,
}

impl Breadcrumb {
    /// Creates a breadcrumb with the default configuration: no items,
    /// `/` separator, no extra class, home entry shown.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            separator: Label::from("/"),
            class_name: String::new(),
            show_home: true,
        }
    }

    /// Builder method to set the items to display, in order.
    pub fn items(mut self, items: Vec<BreadcrumbItem>) -> Self {
        self.items = items;
        self
    }

    /// Builder method to append a single item.
    pub fn item(mut self, item: BreadcrumbItem) -> Self {
        self.items.push(item);
        self
    }

    /// Builder method to set the separator placed between entries.
    pub fn separator(mut self, separator: impl Into<Label>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method to add an extra class on the `<nav>` element.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Builder method to toggle the fixed home entry (icon linking to `/`).
    pub fn show_home(mut self, show_home: bool) -> Self {
        self.show_home = show_home;
        self
    }

    pub fn render(&self) -> Markup {
        let total = self.items.len() + usize::from(self.show_home);

        html! {
            nav class=(self.nav_class()) aria-label="Breadcrumb" {
                ol class="breadcrumb-list" {
                    @if self.show_home {
                        (self.entry(0, total, &home_item()))
                    }
                    @for (i, item) in self.items.iter().enumerate() {
                        (self.entry(i + usize::from(self.show_home), total, item))
                    }
                }
            }
        }
    }

    fn entry(&self, index: usize, total: usize, item: &BreadcrumbItem) -> Markup {
        let crumb = Crumb::new(item.label.clone(), item.to.clone()).active(index + 1 == total);

        html! {
            li class="breadcrumb-item" {
                @if index > 0 {
                    span class="breadcrumb-separator" aria-hidden="true" { (self.separator) }
                }
                (crumb)
            }
        }
    }

    fn nav_class(&self) -> String {
        if self.class_name.is_empty() {
            "breadcrumb".to_string()
        } else {
            format!("breadcrumb {}", self.class_name)
        }
    }
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Breadcrumb {
    fn render(&self) -> Markup {
        Breadcrumb::render(self)
    }
}

fn home_item() -> BreadcrumbItem {
    BreadcrumbItem::new(Label::Node(home_icon()), "/")
}

/// Inline home glyph used for the fixed first entry.
pub fn home_icon() -> Markup {
    html! {
        svg class="breadcrumb-home" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor" width="16" height="16" aria-hidden="true" {
            path d="M10.707 2.293a1 1 0 0 0-1.414 0l-7 7a1 1 0 0 0 1.414 1.414L4 10.414V17a1 1 0 0 0 1 1h2a1 1 0 0 0 1-1v-2a1 1 0 0 1 1-1h2a1 1 0 0 1 1 1v2a1 1 0 0 0 1 1h2a1 1 0 0 0 1-1v-6.586l.293.293a1 1 0 0 0 1.414-1.414l-7-7Z" {}
        }
    }
}
