//! Recipe parsing
//!
//! Converts one raw recipe file into the canonical [`Recipe`] shape. The
//! raw `type` field selects the payload; everything else about the record
//! (result, group) is shared across kinds.
//!
//! Parsing never fails. An unrecognised `type` yields a recipe with only the
//! shared fields so that one odd file cannot abort a run.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::ident::Remap;
use crate::ingredient::{canonical_id, resolve_logged, with_legacy_data, Ingredient};
use crate::version::Era;

/// Cooking time in ticks when a cooking recipe does not specify one
pub const DEFAULT_COOKING_TIME: u32 = 200;

/// Side length of the crafting grid
pub const GRID_SIZE: usize = 3;

// ============================================================================
// Kinds
// ============================================================================

/// Crafting or processing method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecipeKind {
    Shaped,
    Shapeless,
    Smelting,
    Blasting,
    Smoking,
    Campfire,
    Stonecutting,
    Smithing,
    SmithingTransform,
    SmithingTrim,
    /// Any other raw type, namespace stripped (`crafting_special_armordye`)
    Other(String),
}

impl RecipeKind {
    /// Classify a raw `type` value such as `minecraft:crafting_shaped`.
    pub fn from_type(raw_type: &str) -> Self {
        let name = raw_type.rsplit(':').next().unwrap_or(raw_type);
        match name {
            "crafting_shaped" | "shaped" => RecipeKind::Shaped,
            "crafting_shapeless" | "shapeless" => RecipeKind::Shapeless,
            "smelting" => RecipeKind::Smelting,
            "blasting" => RecipeKind::Blasting,
            "smoking" => RecipeKind::Smoking,
            "campfire_cooking" | "campfire" => RecipeKind::Campfire,
            "stonecutting" => RecipeKind::Stonecutting,
            "smithing" => RecipeKind::Smithing,
            "smithing_transform" => RecipeKind::SmithingTransform,
            "smithing_trim" => RecipeKind::SmithingTrim,
            other => RecipeKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecipeKind::Shaped => "shaped",
            RecipeKind::Shapeless => "shapeless",
            RecipeKind::Smelting => "smelting",
            RecipeKind::Blasting => "blasting",
            RecipeKind::Smoking => "smoking",
            RecipeKind::Campfire => "campfire",
            RecipeKind::Stonecutting => "stonecutting",
            RecipeKind::Smithing => "smithing",
            RecipeKind::SmithingTransform => "smithing_transform",
            RecipeKind::SmithingTrim => "smithing_trim",
            RecipeKind::Other(name) => name,
        }
    }

    pub fn is_cooking(&self) -> bool {
        matches!(
            self,
            RecipeKind::Smelting | RecipeKind::Blasting | RecipeKind::Smoking | RecipeKind::Campfire
        )
    }

    pub fn is_smithing(&self) -> bool {
        matches!(
            self,
            RecipeKind::Smithing | RecipeKind::SmithingTransform | RecipeKind::SmithingTrim
        )
    }
}

impl From<String> for RecipeKind {
    fn from(value: String) -> Self {
        RecipeKind::from_type(&value)
    }
}

impl From<RecipeKind> for String {
    fn from(kind: RecipeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Recipe
// ============================================================================

/// Output of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: String,
    pub count: u32,
}

impl ItemStack {
    pub fn new(item: impl Into<String>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }
}

/// Kind-specific part of a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecipePayload {
    Shaped {
        pattern: Vec<String>,
        key: IndexMap<char, Option<Ingredient>>,
        grid: Vec<Vec<Option<Ingredient>>>,
    },
    Shapeless {
        ingredients: Vec<Option<Ingredient>>,
    },
    Cooking {
        ingredient: Option<Ingredient>,
        experience: f64,
        #[serde(rename = "cookingTime")]
        cooking_time: u32,
    },
    Stonecutting {
        ingredient: Option<Ingredient>,
    },
    Smithing {
        base: Option<Ingredient>,
        addition: Option<Ingredient>,
        /// `None`: the recipe has no template slot. `Some(None)`: the slot
        /// exists but did not resolve.
        #[serde(skip_serializing_if = "Option::is_none")]
        template: Option<Option<Ingredient>>,
    },
    /// Unrecognised kind, no payload
    Unrecognized {},
}

/// Where an ingredient sits inside a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Ingredients,
    Ingredient,
    Key,
    Base,
    Addition,
    Template,
}

/// One canonical crafting or processing definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecipeRecord")]
pub struct Recipe {
    pub id: String,
    pub kind: RecipeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ItemStack>,
    /// Versions in which this exact definition appears, sorted
    pub versions: Vec<String>,
    pub group: Option<String>,
    #[serde(flatten)]
    pub payload: RecipePayload,
}

impl Recipe {
    /// Every ingredient slot, in source order.
    pub fn slots(&self) -> Vec<(Slot, Option<&Ingredient>)> {
        match &self.payload {
            RecipePayload::Shaped { key, .. } => {
                key.values().map(|ing| (Slot::Key, ing.as_ref())).collect()
            }
            RecipePayload::Shapeless { ingredients } => ingredients
                .iter()
                .map(|ing| (Slot::Ingredients, ing.as_ref()))
                .collect(),
            RecipePayload::Cooking { ingredient, .. } | RecipePayload::Stonecutting { ingredient } => {
                vec![(Slot::Ingredient, ingredient.as_ref())]
            }
            RecipePayload::Smithing {
                base,
                addition,
                template,
            } => {
                let mut slots = vec![(Slot::Base, base.as_ref()), (Slot::Addition, addition.as_ref())];
                if let Some(template) = template {
                    slots.push((Slot::Template, template.as_ref()));
                }
                slots
            }
            RecipePayload::Unrecognized {} => Vec::new(),
        }
    }
}

/// Flat on-disk form of [`Recipe`], used to read a written catalog back
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    id: String,
    kind: RecipeKind,
    #[serde(default)]
    result: Option<ItemStack>,
    #[serde(default)]
    versions: Vec<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    pattern: Vec<String>,
    #[serde(default)]
    key: IndexMap<char, Option<Ingredient>>,
    #[serde(default)]
    grid: Vec<Vec<Option<Ingredient>>>,
    #[serde(default)]
    ingredients: Vec<Option<Ingredient>>,
    #[serde(default)]
    ingredient: Option<Ingredient>,
    #[serde(default)]
    experience: f64,
    #[serde(default = "default_cooking_time")]
    cooking_time: u32,
    #[serde(default)]
    base: Option<Ingredient>,
    #[serde(default)]
    addition: Option<Ingredient>,
    #[serde(default, deserialize_with = "present")]
    template: Option<Option<Ingredient>>,
}

fn default_cooking_time() -> u32 {
    DEFAULT_COOKING_TIME
}

/// Distinguish a `null` field from a missing one
fn present<'de, D>(deserializer: D) -> Result<Option<Option<Ingredient>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Ingredient>::deserialize(deserializer).map(Some)
}

impl From<RecipeRecord> for Recipe {
    fn from(r: RecipeRecord) -> Self {
        let payload = match &r.kind {
            RecipeKind::Shaped => RecipePayload::Shaped {
                pattern: r.pattern,
                key: r.key,
                grid: r.grid,
            },
            RecipeKind::Shapeless => RecipePayload::Shapeless {
                ingredients: r.ingredients,
            },
            RecipeKind::Stonecutting => RecipePayload::Stonecutting {
                ingredient: r.ingredient,
            },
            kind if kind.is_cooking() => RecipePayload::Cooking {
                ingredient: r.ingredient,
                experience: r.experience,
                cooking_time: r.cooking_time,
            },
            kind if kind.is_smithing() => RecipePayload::Smithing {
                base: r.base,
                addition: r.addition,
                template: r.template,
            },
            _ => RecipePayload::Unrecognized {},
        };

        Recipe {
            id: r.id,
            kind: r.kind,
            result: r.result,
            versions: r.versions,
            group: r.group,
            payload,
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// A parsed recipe plus the legacy identifiers its parsing folded away
#[derive(Debug, Clone)]
pub struct ParsedRecipe {
    pub recipe: Recipe,
    pub remaps: Vec<Remap>,
}

/// Parse one raw recipe record observed in `version`.
pub fn parse_recipe(raw: &Value, recipe_id: &str, version: &str, era: Era) -> Recipe {
    parse_recipe_logged(raw, recipe_id, version, era).recipe
}

/// [`parse_recipe`] that keeps the remap log for alias bookkeeping.
pub fn parse_recipe_logged(raw: &Value, recipe_id: &str, version: &str, era: Era) -> ParsedRecipe {
    let mut parser = Parser {
        raw,
        era,
        remaps: Vec::new(),
    };

    let kind = RecipeKind::from_type(raw.get("type").and_then(Value::as_str).unwrap_or("unknown"));
    let mut result = parser.result();

    let payload = match &kind {
        RecipeKind::Shaped => parser.shaped(),
        RecipeKind::Shapeless => parser.shapeless(),
        RecipeKind::Stonecutting => {
            result = parser.stonecutting_result();
            RecipePayload::Stonecutting {
                ingredient: parser.ingredient("ingredient"),
            }
        }
        kind if kind.is_cooking() => parser.cooking(),
        kind if kind.is_smithing() => parser.smithing(),
        _ => RecipePayload::Unrecognized {},
    };

    let group = raw
        .get("group")
        .and_then(Value::as_str)
        .filter(|g| !g.is_empty())
        .map(str::to_string);

    ParsedRecipe {
        recipe: Recipe {
            id: recipe_id.to_string(),
            kind,
            result,
            versions: vec![version.to_string()],
            group,
            payload,
        },
        remaps: parser.remaps,
    }
}

static NULL: Value = Value::Null;

struct Parser<'a> {
    raw: &'a Value,
    era: Era,
    remaps: Vec<Remap>,
}

impl<'a> Parser<'a> {
    fn field(&self, name: &str) -> &'a Value {
        self.raw.get(name).unwrap_or(&NULL)
    }

    fn ingredient(&mut self, name: &str) -> Option<Ingredient> {
        let raw = self.field(name);
        resolve_logged(raw, self.era, &mut self.remaps)
    }

    fn item_id(&mut self, id: &str) -> String {
        canonical_id(id, self.era, &mut self.remaps)
    }

    /// Shared result path: string results count 1, object results read
    /// `count` (1 when absent or zero).
    fn result(&mut self) -> Option<ItemStack> {
        match self.field("result") {
            Value::String(s) if !s.is_empty() => Some(ItemStack::new(self.item_id(s), 1)),
            Value::Object(obj) => {
                let item = obj
                    .get("item")
                    .or_else(|| obj.get("id"))
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())?;
                let count = positive_count(obj.get("count")).unwrap_or(1);
                let id = with_legacy_data(item, obj.get("data"), self.era);
                Some(ItemStack::new(self.item_id(&id), count))
            }
            _ => None,
        }
    }

    /// Stonecutting keeps its count on the record itself, beside a plain
    /// string result.
    fn stonecutting_result(&mut self) -> Option<ItemStack> {
        let (item, nested_count) = match self.field("result") {
            Value::String(s) if !s.is_empty() => (s.as_str(), None),
            Value::Object(obj) => (
                obj.get("item")
                    .or_else(|| obj.get("id"))
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())?,
                positive_count(obj.get("count")),
            ),
            _ => return None,
        };
        let count = positive_count(self.raw.get("count"))
            .or(nested_count)
            .unwrap_or(1);
        let item = self.item_id(item);
        Some(ItemStack::new(item, count))
    }

    fn shaped(&mut self) -> RecipePayload {
        let pattern: Vec<String> = self
            .field("pattern")
            .as_array()
            .map(|rows| {
                rows.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let mut key = IndexMap::new();
        if let Some(entries) = self.field("key").as_object() {
            for (glyph, spec) in entries {
                let mut chars = glyph.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    key.insert(c, resolve_logged(spec, self.era, &mut self.remaps));
                }
            }
        }

        let grid = shaped_grid(&pattern, &key);
        RecipePayload::Shaped { pattern, key, grid }
    }

    fn shapeless(&mut self) -> RecipePayload {
        let entries: Vec<&Value> = match (self.field("ingredients"), self.field("ingredient")) {
            (Value::Array(list), _) | (_, Value::Array(list)) => list.iter().collect(),
            (_, Value::Null) => Vec::new(),
            (_, single) => vec![single],
        };
        let ingredients = entries
            .into_iter()
            .map(|entry| resolve_logged(entry, self.era, &mut self.remaps))
            .collect();
        RecipePayload::Shapeless { ingredients }
    }

    fn cooking(&mut self) -> RecipePayload {
        let experience = self.field("experience").as_f64().unwrap_or(0.0);
        let cooking_time = self
            .field("cookingtime")
            .as_u64()
            .filter(|t| *t > 0)
            .and_then(|t| u32::try_from(t).ok())
            .unwrap_or(DEFAULT_COOKING_TIME);
        RecipePayload::Cooking {
            ingredient: self.ingredient("ingredient"),
            experience,
            cooking_time,
        }
    }

    fn smithing(&mut self) -> RecipePayload {
        let base = self.ingredient("base");
        let addition = self.ingredient("addition");
        let template = if self.field("template").is_null() {
            None
        } else {
            Some(self.ingredient("template"))
        };
        RecipePayload::Smithing {
            base,
            addition,
            template,
        }
    }
}

fn positive_count(value: Option<&Value>) -> Option<u32> {
    value
        .and_then(Value::as_u64)
        .filter(|c| *c > 0)
        .and_then(|c| u32::try_from(c).ok())
}

/// Lay a shaped pattern onto the crafting grid.
///
/// Spaces and glyphs missing from `key` become empty cells. Rows and
/// columns are padded on the bottom and right up to [`GRID_SIZE`], keeping
/// the pattern anchored top-left.
pub fn shaped_grid(
    pattern: &[String],
    key: &IndexMap<char, Option<Ingredient>>,
) -> Vec<Vec<Option<Ingredient>>> {
    let mut grid: Vec<Vec<Option<Ingredient>>> = pattern
        .iter()
        .map(|row| {
            row.chars()
                .map(|glyph| match glyph {
                    ' ' => None,
                    c => key.get(&c).cloned().flatten(),
                })
                .collect()
        })
        .collect();

    while grid.len() < GRID_SIZE {
        grid.push(vec![None; GRID_SIZE]);
    }
    for row in &mut grid {
        while row.len() < GRID_SIZE {
            row.push(None);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: &str) -> Option<Ingredient> {
        Some(Ingredient::item(id))
    }

    #[test]
    fn test_kind_from_type() {
        assert_eq!(RecipeKind::from_type("minecraft:crafting_shaped"), RecipeKind::Shaped);
        assert_eq!(RecipeKind::from_type("crafting_shapeless"), RecipeKind::Shapeless);
        assert_eq!(RecipeKind::from_type("minecraft:campfire_cooking"), RecipeKind::Campfire);
        assert_eq!(
            RecipeKind::from_type("minecraft:crafting_special_armordye"),
            RecipeKind::Other("crafting_special_armordye".into())
        );
        assert_eq!(RecipeKind::Campfire.as_str(), "campfire");
    }

    #[test]
    fn test_shaped_two_by_two_grid_is_padded() {
        let raw = json!({
            "type": "minecraft:crafting_shaped",
            "pattern": ["##", "##"],
            "key": {"#": {"item": "minecraft:oak_planks"}},
            "result": {"item": "minecraft:crafting_table"}
        });
        let recipe = parse_recipe(&raw, "minecraft:crafting_table", "1.14", Era::Modern);
        assert_eq!(recipe.result, Some(ItemStack::new("minecraft:crafting_table", 1)));

        let RecipePayload::Shaped { grid, pattern, .. } = &recipe.payload else {
            panic!("expected shaped payload");
        };
        assert_eq!(pattern, &vec!["##".to_string(), "##".to_string()]);
        assert_eq!(grid.len(), 3);
        let planks = item("minecraft:oak_planks");
        assert_eq!(grid[0], vec![planks.clone(), planks.clone(), None]);
        assert_eq!(grid[1], vec![planks.clone(), planks, None]);
        assert_eq!(grid[2], vec![None, None, None]);
    }

    #[test]
    fn test_shaped_blank_and_unknown_glyphs_are_empty() {
        let raw = json!({
            "type": "crafting_shaped",
            "pattern": ["X X", " ? ", "XXX"],
            "key": {"X": "minecraft:iron_ingot"},
            "result": "minecraft:cauldron"
        });
        let recipe = parse_recipe(&raw, "minecraft:cauldron", "1.12", Era::Legacy);
        let RecipePayload::Shaped { grid, .. } = &recipe.payload else {
            panic!("expected shaped payload");
        };
        let iron = item("minecraft:iron_ingot");
        assert_eq!(grid[0], vec![iron.clone(), None, iron.clone()]);
        assert_eq!(grid[1], vec![None, None, None]);
        assert_eq!(grid[2], vec![iron.clone(), iron.clone(), iron]);
    }

    #[test]
    fn test_shaped_key_keeps_source_order() {
        let raw = json!({
            "type": "minecraft:crafting_shaped",
            "pattern": ["ZA"],
            "key": {"Z": {"item": "minecraft:zinc"}, "A": {"item": "minecraft:apple"}},
            "result": {"item": "minecraft:thing"}
        });
        let recipe = parse_recipe(&raw, "minecraft:thing", "1.14", Era::Modern);
        let RecipePayload::Shaped { key, .. } = &recipe.payload else {
            panic!("expected shaped payload");
        };
        let glyphs: Vec<char> = key.keys().copied().collect();
        assert_eq!(glyphs, vec!['Z', 'A']);

        let text = serde_json::to_string(&recipe).unwrap();
        let z = text.find(r#""Z":"#).unwrap();
        let a = text.find(r#""A":"#).unwrap();
        assert!(z < a, "key reordered: {}", text);
    }

    #[test]
    fn test_shapeless_preserves_order_and_failures() {
        let raw = json!({
            "type": "minecraft:crafting_shapeless",
            "ingredients": [{"item": "minecraft:sugar"}, {}, {"tag": "minecraft:eggs"}],
            "result": {"item": "minecraft:pumpkin_pie", "count": 1}
        });
        let recipe = parse_recipe(&raw, "minecraft:pumpkin_pie", "1.20", Era::Modern);
        assert_eq!(
            recipe.payload,
            RecipePayload::Shapeless {
                ingredients: vec![
                    item("minecraft:sugar"),
                    None,
                    Some(Ingredient::tag("minecraft:eggs")),
                ]
            }
        );
    }

    #[test]
    fn test_shapeless_falls_back_to_ingredient_field() {
        let raw = json!({
            "type": "crafting_shapeless",
            "ingredient": ["game:log:0"],
            "result": "game:planks:0"
        });
        let recipe = parse_recipe(&raw, "game:plank_from_log", "1.12", Era::Legacy);
        assert_eq!(recipe.result, Some(ItemStack::new("game:oak_planks", 1)));
        assert_eq!(
            recipe.payload,
            RecipePayload::Shapeless {
                ingredients: vec![item("game:oak_log")]
            }
        );
    }

    #[test]
    fn test_cooking_defaults() {
        let raw = json!({
            "type": "minecraft:smelting",
            "ingredient": {"item": "minecraft:iron_ore"},
            "result": "minecraft:iron_ingot"
        });
        let recipe = parse_recipe(&raw, "minecraft:iron_ingot", "1.14", Era::Modern);
        assert_eq!(
            recipe.payload,
            RecipePayload::Cooking {
                ingredient: item("minecraft:iron_ore"),
                experience: 0.0,
                cooking_time: DEFAULT_COOKING_TIME,
            }
        );

        let raw = json!({
            "type": "minecraft:blasting",
            "ingredient": {"item": "minecraft:iron_ore"},
            "result": "minecraft:iron_ingot",
            "experience": 0.7,
            "cookingtime": 100
        });
        let recipe = parse_recipe(&raw, "minecraft:iron_ingot_blasting", "1.14", Era::Modern);
        assert_eq!(recipe.kind, RecipeKind::Blasting);
        assert_eq!(
            recipe.payload,
            RecipePayload::Cooking {
                ingredient: item("minecraft:iron_ore"),
                experience: 0.7,
                cooking_time: 100,
            }
        );
    }

    #[test]
    fn test_stonecutting_count_from_record() {
        let raw = json!({
            "type": "minecraft:stonecutting",
            "ingredient": {"item": "minecraft:stone"},
            "result": "minecraft:stone_slab",
            "count": 2
        });
        let recipe = parse_recipe(&raw, "minecraft:stone_slab_from_stonecutting", "1.14", Era::Modern);
        assert_eq!(recipe.result, Some(ItemStack::new("minecraft:stone_slab", 2)));

        let raw = json!({
            "type": "minecraft:stonecutting",
            "ingredient": {"item": "minecraft:stone"},
            "result": "minecraft:stone_bricks"
        });
        let recipe = parse_recipe(&raw, "minecraft:stone_bricks_from_stonecutting", "1.14", Era::Modern);
        assert_eq!(recipe.result.map(|r| r.count), Some(1));
    }

    #[test]
    fn test_smithing_template_presence() {
        let without = json!({
            "type": "minecraft:smithing",
            "base": {"item": "minecraft:diamond_sword"},
            "addition": {"item": "minecraft:netherite_ingot"},
            "result": {"item": "minecraft:netherite_sword"}
        });
        let recipe = parse_recipe(&without, "minecraft:netherite_sword_smithing", "1.16", Era::Modern);
        let RecipePayload::Smithing { template, .. } = &recipe.payload else {
            panic!("expected smithing payload");
        };
        assert_eq!(template, &None);
        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json.get("template").is_none());

        let unresolved = json!({
            "type": "minecraft:smithing_transform",
            "template": {"weird": true},
            "base": {"item": "minecraft:diamond_sword"},
            "addition": {"item": "minecraft:netherite_ingot"},
            "result": {"item": "minecraft:netherite_sword"}
        });
        let recipe = parse_recipe(&unresolved, "minecraft:netherite_sword_smithing", "1.20", Era::Modern);
        let RecipePayload::Smithing { template, .. } = &recipe.payload else {
            panic!("expected smithing payload");
        };
        assert_eq!(template, &Some(None));
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json.get("template"), Some(&Value::Null));
    }

    #[test]
    fn test_unrecognised_type_is_partial() {
        let raw = json!({
            "type": "minecraft:crafting_special_bookcloning",
            "group": "books",
            "result": {"item": "minecraft:written_book", "count": 0}
        });
        let recipe = parse_recipe(&raw, "minecraft:book_cloning", "1.14", Era::Modern);
        assert_eq!(recipe.kind, RecipeKind::Other("crafting_special_bookcloning".into()));
        assert_eq!(recipe.payload, RecipePayload::Unrecognized {});
        assert_eq!(recipe.group.as_deref(), Some("books"));
        assert_eq!(recipe.versions, vec!["1.14"]);
        assert_eq!(recipe.result, Some(ItemStack::new("minecraft:written_book", 1)));
        assert!(recipe.slots().is_empty());
    }

    #[test]
    fn test_missing_type_and_result() {
        let recipe = parse_recipe(&json!({}), "minecraft:odd", "1.14", Era::Modern);
        assert_eq!(recipe.kind, RecipeKind::Other("unknown".into()));
        assert!(recipe.result.is_none());
        assert!(recipe.group.is_none());
    }

    #[test]
    fn test_result_id_field_and_remaps() {
        let raw = json!({
            "type": "minecraft:crafting_shapeless",
            "ingredients": [{"item": "minecraft:log", "data": 2}],
            "result": {"item": "minecraft:planks", "data": 2, "count": 4}
        });
        let parsed = parse_recipe_logged(&raw, "minecraft:birch_planks", "1.12.2", Era::Legacy);
        assert_eq!(
            parsed.recipe.result,
            Some(ItemStack::new("minecraft:birch_planks", 4))
        );
        let folded: Vec<&str> = parsed.remaps.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(folded, vec!["minecraft:birch_planks", "minecraft:birch_log"]);

        let raw = json!({
            "type": "minecraft:crafting_shapeless",
            "ingredients": ["minecraft:oak_log"],
            "result": {"id": "minecraft:oak_planks", "count": 4}
        });
        let recipe = parse_recipe(&raw, "minecraft:oak_planks", "1.21", Era::Modern);
        assert_eq!(recipe.result, Some(ItemStack::new("minecraft:oak_planks", 4)));
    }

    #[test]
    fn test_serialized_recipe_reads_back() {
        let raw = json!({
            "type": "minecraft:smoking",
            "ingredient": {"item": "minecraft:beef"},
            "result": "minecraft:cooked_beef",
            "experience": 0.35,
            "cookingtime": 100,
            "group": "food"
        });
        let recipe = parse_recipe(&raw, "minecraft:cooked_beef_from_smoking", "1.14", Era::Modern);
        let text = serde_json::to_string(&recipe).unwrap();
        assert!(text.contains("\"cookingTime\":100"));
        let back: Recipe = serde_json::from_str(&text).unwrap();
        assert_eq!(back, recipe);
    }
}
