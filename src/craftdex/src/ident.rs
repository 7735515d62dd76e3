//! Identifier normalization
//!
//! Legacy releases encode block variants as `namespace:name:meta`
//! (`minecraft:planks:1`). Modern releases give every variant its own name
//! (`minecraft:spruce_planks`). Normalization maps the former to the latter
//! so that both eras share one catalog key.

use crate::reference::legacy_modern_name;
use crate::version::Era;

/// Namespace assumed for identifiers that carry none
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Outcome of normalizing one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remap {
    /// Canonical identifier
    pub id: String,
    /// The legacy identifier, when a table entry folded it into `id`
    pub legacy: Option<String>,
}

/// Split `namespace:name` into its parts. Identifiers without a namespace
/// get [`DEFAULT_NAMESPACE`].
pub fn split_namespace(id: &str) -> (&str, &str) {
    match id.split_once(':') {
        Some((ns, name)) => (ns, name),
        None => (DEFAULT_NAMESPACE, id),
    }
}

/// The identifier without its namespace prefix
pub fn strip_namespace(id: &str) -> &str {
    split_namespace(id).1
}

/// Parse `namespace:name:meta` where meta is numeric
fn variant_parts(id: &str) -> Option<(&str, &str, u32)> {
    let mut parts = id.split(':');
    let ns = parts.next()?;
    let name = parts.next()?;
    let meta = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((ns, name, meta))
}

/// Normalize an identifier and report whether the legacy table was used.
///
/// Modern-era identifiers and identifiers without a variant suffix pass
/// through untouched. Legacy variants missing from the table lose their meta
/// suffix.
pub fn remap(id: &str, era: Era) -> Remap {
    if era.is_legacy() {
        if let Some((ns, name, meta)) = variant_parts(id) {
            return match legacy_modern_name(name, meta) {
                Some(modern) => Remap {
                    id: format!("{}:{}", ns, modern),
                    legacy: Some(id.to_string()),
                },
                None => Remap {
                    id: format!("{}:{}", ns, name),
                    legacy: None,
                },
            };
        }
    }

    Remap {
        id: id.to_string(),
        legacy: None,
    }
}

/// Canonical identifier for `id` in the given era
pub fn normalize(id: &str, era: Era) -> String {
    remap(id, era).id
}
