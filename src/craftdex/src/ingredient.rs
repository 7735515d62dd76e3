//! Ingredient specifications
//!
//! Raw recipe files describe a crafting input in several shapes: a bare
//! identifier string, an `{"item": ...}` object, a `{"tag": ...}` object, or
//! a list of any of these meaning "one of". [`resolve_ingredient`] folds all
//! of them into the [`Ingredient`] variants.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ident::{remap, Remap};
use crate::version::Era;

/// A crafting input slot
///
/// Serialized as `{"item": ...}`, `{"tag": ...}` or `{"alternatives": [...]}`.
/// An absent or malformed ingredient is `None` at the use site, which is
/// distinct from an empty alternatives list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    /// Exactly one canonical item
    Single { item: String },
    /// Symbolic tag reference, resolved against a version's tag table
    Tag { tag: String },
    /// Any one of the nested entries; entries that failed to resolve stay as
    /// `None`
    Alternatives { alternatives: Vec<Option<Ingredient>> },
}

impl Ingredient {
    pub fn item(id: impl Into<String>) -> Self {
        Ingredient::Single { item: id.into() }
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Ingredient::Tag { tag: tag.into() }
    }

    pub fn alternatives(entries: Vec<Option<Ingredient>>) -> Self {
        Ingredient::Alternatives {
            alternatives: entries,
        }
    }
}

/// Resolve a raw ingredient specification.
///
/// Returns `None` for missing, empty or unrecognised shapes. Pure: the same
/// input and era always give the same result.
pub fn resolve_ingredient(raw: &Value, era: Era) -> Option<Ingredient> {
    resolve_logged(raw, era, &mut Vec::new())
}

/// [`resolve_ingredient`] that also records every legacy identifier the
/// remapping table folded into a canonical one.
pub(crate) fn resolve_logged(raw: &Value, era: Era, remaps: &mut Vec<Remap>) -> Option<Ingredient> {
    match raw {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) if s.starts_with('#') => tag_ref(s),
        Value::String(s) => Some(Ingredient::item(canonical_id(s, era, remaps))),
        Value::Object(obj) => {
            if let Some(item) = obj.get("item").and_then(Value::as_str).filter(|s| !s.is_empty()) {
                let id = with_legacy_data(item, obj.get("data"), era);
                return Some(Ingredient::item(canonical_id(&id, era, remaps)));
            }
            obj.get("tag").and_then(Value::as_str).and_then(tag_ref)
        }
        Value::Array(entries) => Some(Ingredient::alternatives(
            entries
                .iter()
                .map(|entry| resolve_logged(entry, era, remaps))
                .collect(),
        )),
        _ => None,
    }
}

/// Tag reference with any `#` sigil dropped, so both spellings of a tag
/// compare equal.
fn tag_ref(raw: &str) -> Option<Ingredient> {
    let tag = raw.trim_start_matches('#');
    (!tag.is_empty()).then(|| Ingredient::tag(tag))
}

/// Normalize `id`, remembering table hits in `remaps`.
pub(crate) fn canonical_id(id: &str, era: Era, remaps: &mut Vec<Remap>) -> String {
    let remapped = remap(id, era);
    let canonical = remapped.id.clone();
    if remapped.legacy.is_some() {
        remaps.push(remapped);
    }
    canonical
}

/// Legacy files write variants as `{"item": "minecraft:planks", "data": 1}`.
/// Fold the data value into the `name:meta` form the remapper understands.
pub(crate) fn with_legacy_data(item: &str, data: Option<&Value>, era: Era) -> String {
    match data.and_then(Value::as_u64) {
        Some(meta) if era.is_legacy() && item.matches(':').count() <= 1 => {
            let (ns, name) = crate::ident::split_namespace(item);
            format!("{}:{}:{}", ns, name, meta)
        }
        _ => item.to_string(),
    }
}
