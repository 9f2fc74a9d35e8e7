// File: src/route_map.rs
// Purpose: path-to-label lookup table consulted by the breadcrumb generator

use crate::path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder substituted with the digit text of a numeric segment.
pub const DYNAMIC_PLACEHOLDER: &str = ":id";

/// Which labeling rule wins when both apply to a segment.
///
/// The two rules that can collide: an exact `labels` entry for the
/// cumulative path, and the `dynamic` template for an all-digit segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPrecedence {
    /// An exact `labels` entry beats the dynamic template. The default:
    /// a caller who spelled out a label for a specific path meant it.
    #[default]
    ExplicitFirst,
    /// The dynamic template beats an exact entry for all-digit segments.
    /// Matches the legacy behavior where the template overwrote the
    /// already-resolved label unconditionally.
    DynamicFirst,
}

/// Caller-supplied lookup table mapping paths to human-readable labels.
///
/// Deserializable, so it can live in a TOML config file:
///
/// ```toml
/// dynamic = ":id Detail"
///
/// [labels]
/// "/users" = "Our Users"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMap {
    /// Exact cumulative-path to label entries, used verbatim.
    #[serde(default)]
    pub labels: HashMap<String, String>,

    /// Label template for all-digit segments; `:id` is replaced with the
    /// segment's digit text.
    #[serde(default)]
    pub dynamic: Option<String>,

    #[serde(default)]
    pub precedence: LabelPrecedence,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an exact path label.
    pub fn label(mut self, path: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(path.into(), label.into());
        self
    }

    /// Builder method to set the dynamic-segment template.
    pub fn dynamic(mut self, template: impl Into<String>) -> Self {
        self.dynamic = Some(template.into());
        self
    }

    /// Builder method to set the precedence ordering.
    pub fn precedence(mut self, precedence: LabelPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Resolves the display label for one segment.
    ///
    /// `cumulative` is the full path down to and including the segment
    /// (e.g. `/users/42` for segment `42`). Falls back to the segment with
    /// its first character upper-cased when no rule applies.
    pub fn resolve(&self, cumulative: &str, segment: &str) -> String {
        let explicit = self.labels.get(cumulative).cloned();
        let dynamic = self.dynamic_label(segment);

        let resolved = match self.precedence {
            LabelPrecedence::ExplicitFirst => explicit.or(dynamic),
            LabelPrecedence::DynamicFirst => dynamic.or(explicit),
        };

        resolved.unwrap_or_else(|| path::capitalize(segment))
    }

    fn dynamic_label(&self, segment: &str) -> Option<String> {
        if !path::is_numeric(segment) {
            return None;
        }
        self.dynamic
            .as_ref()
            .map(|template| template.replace(DYNAMIC_PLACEHOLDER, segment))
    }
}
