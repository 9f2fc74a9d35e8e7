// crumbtrail - breadcrumb navigation with Maud compile-time templates
// Pure rendering and path-derivation helpers; navigation itself belongs to the host app.

pub mod component;
pub mod generate;
pub mod item;
pub mod label;
pub mod path;
pub mod route_map;

// Re-export core types
pub use component::Breadcrumb;
pub use generate::generate_breadcrumbs;
pub use item::{BreadcrumbItem, Crumb};
pub use label::Label;
pub use path::PathTrail;
pub use route_map::{LabelPrecedence, RouteMap};

// Re-export Maud for consumers building custom labels
pub use maud::{html, Markup, PreEscaped, Render};
