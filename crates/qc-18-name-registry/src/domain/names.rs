//! Full-name parsing and rendering.
//!
//! A full name is `label.namespace`, split at the last `.`. A string without
//! a `.` is a bare label in the reserved bare-name namespace.

use crate::domain::entities::NameKey;

/// Splits `full_name` into `(label, namespace)`.
///
/// Returns `None` for the empty string. Nothing else is validated: the
/// label may itself contain dots (`"foo.bar.baz"` gives `("foo.bar", "baz")`)
/// and either side may be empty.
#[must_use]
pub fn parse_full_name<'a>(full_name: &'a str, bare_namespace: &'a str) -> Option<(&'a str, &'a str)> {
    if full_name.is_empty() {
        return None;
    }
    match full_name.rfind('.') {
        Some(dot) => Some((&full_name[..dot], &full_name[dot + 1..])),
        None => Some((full_name, bare_namespace)),
    }
}

/// Renders a name for display; bare names have no suffix.
#[must_use]
pub fn render_name(name: &NameKey, bare_namespace: &str) -> String {
    if name.namespace == bare_namespace {
        name.label.clone()
    } else {
        name.to_string()
    }
}
