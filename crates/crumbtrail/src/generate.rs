use crate::item::BreadcrumbItem;
use crate::path::{self, PathTrail};
use crate::route_map::RouteMap;

/// Derives a breadcrumb trail from a URL path.
///
/// The path is normalized first (leading, trailing, and duplicate slashes
/// are dropped), then each cumulative prefix becomes one item whose label is
/// resolved through `routes`. An empty or all-slash path yields an empty
/// trail rather than an error.
///
/// **Pure function**: no rendering, no I/O; identical inputs always produce
/// structurally identical output.
///
/// # Examples
///
/// ```
/// use crumbtrail::{generate_breadcrumbs, RouteMap};
///
/// let items = generate_breadcrumbs("/users/42", &RouteMap::new().dynamic(":id Detail"));
/// assert_eq!(items[0].to, "/users");
/// assert_eq!(items[1].label.as_str(), "42 Detail");
/// ```
pub fn generate_breadcrumbs(path: &str, routes: &RouteMap) -> Vec<BreadcrumbItem> {
    let canonical = path::normalize(path);
    PathTrail::new(&canonical)
        .map(|prefix| {
            let segment = path::last_segment(prefix);
            BreadcrumbItem::new(routes.resolve(prefix, segment), prefix)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_path_yields_empty_trail() {
        assert_eq!(generate_breadcrumbs("", &RouteMap::new()), vec![]);
        assert_eq!(generate_breadcrumbs("///", &RouteMap::new()), vec![]);
    }

    #[test]
    fn test_default_labels() {
        let items = generate_breadcrumbs("/a/b", &RouteMap::new());
        assert_eq!(
            items,
            vec![
                BreadcrumbItem::new("A", "/a"),
                BreadcrumbItem::new("B", "/a/b"),
            ]
        );
    }

    #[test]
    fn test_slash_noise_normalized() {
        let items = generate_breadcrumbs("a//b/", &RouteMap::new());
        assert_eq!(
            items,
            vec![
                BreadcrumbItem::new("A", "/a"),
                BreadcrumbItem::new("B", "/a/b"),
            ]
        );
    }

    #[test]
    fn test_explicit_label_applies_to_prefix() {
        let routes = RouteMap::new().label("/a", "Section A");
        let items = generate_breadcrumbs("/a/b", &routes);
        assert_eq!(items[0], BreadcrumbItem::new("Section A", "/a"));
        assert_eq!(items[1], BreadcrumbItem::new("B", "/a/b"));
    }

    #[test]
    fn test_dynamic_label_for_numeric_segment() {
        let routes = RouteMap::new().dynamic(":id Detail");
        let items = generate_breadcrumbs("/a/42", &routes);
        assert_eq!(items[1], BreadcrumbItem::new("42 Detail", "/a/42"));
    }

    #[test]
    fn test_idempotent() {
        let routes = RouteMap::new().label("/a", "Section A").dynamic(":id Detail");
        let first = generate_breadcrumbs("/a/42/edit", &routes);
        let second = generate_breadcrumbs("/a/42/edit", &routes);
        assert_eq!(first, second);
    }
}
