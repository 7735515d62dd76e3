//! Reference data for catalog normalization
//!
//! Hardcoded tables for legacy identifier remapping and keyword-based item
//! categories. These never change between runs.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Legacy identifiers
// ============================================================================

/// One legacy `name:meta` variant and its flattened modern name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyVariant {
    pub name: &'static str,
    pub meta: u32,
    pub modern: &'static str,
}

const fn variant(name: &'static str, meta: u32, modern: &'static str) -> LegacyVariant {
    LegacyVariant { name, meta, modern }
}

/// Known legacy variants. Keyed by name and meta only; the namespace is
/// carried over from the identifier being remapped.
pub const LEGACY_VARIANTS: &[LegacyVariant] = &[
    variant("planks", 0, "oak_planks"),
    variant("planks", 1, "spruce_planks"),
    variant("planks", 2, "birch_planks"),
    variant("planks", 3, "jungle_planks"),
    variant("planks", 4, "acacia_planks"),
    variant("planks", 5, "dark_oak_planks"),
    variant("log", 0, "oak_log"),
    variant("log", 1, "spruce_log"),
    variant("log", 2, "birch_log"),
    variant("log", 3, "jungle_log"),
    variant("log2", 0, "acacia_log"),
    variant("log2", 1, "dark_oak_log"),
    variant("sapling", 0, "oak_sapling"),
    variant("sapling", 1, "spruce_sapling"),
    variant("sapling", 2, "birch_sapling"),
    variant("sapling", 3, "jungle_sapling"),
    variant("sapling", 4, "acacia_sapling"),
    variant("sapling", 5, "dark_oak_sapling"),
    variant("stone", 0, "stone"),
    variant("stone", 1, "granite"),
    variant("stone", 2, "polished_granite"),
    variant("stone", 3, "diorite"),
    variant("stone", 4, "polished_diorite"),
    variant("stone", 5, "andesite"),
    variant("stone", 6, "polished_andesite"),
    variant("sandstone", 0, "sandstone"),
    variant("sandstone", 1, "chiseled_sandstone"),
    variant("sandstone", 2, "cut_sandstone"),
    variant("wool", 0, "white_wool"),
    variant("wool", 1, "orange_wool"),
    variant("wool", 2, "magenta_wool"),
    variant("wool", 3, "light_blue_wool"),
    variant("wool", 4, "yellow_wool"),
    variant("wool", 5, "lime_wool"),
    variant("wool", 6, "pink_wool"),
    variant("wool", 7, "gray_wool"),
    variant("wool", 8, "light_gray_wool"),
    variant("wool", 9, "cyan_wool"),
    variant("wool", 10, "purple_wool"),
    variant("wool", 11, "blue_wool"),
    variant("wool", 12, "brown_wool"),
    variant("wool", 13, "green_wool"),
    variant("wool", 14, "red_wool"),
    variant("wool", 15, "black_wool"),
    variant("dye", 4, "lapis_lazuli"),
    variant("dye", 15, "bone_meal"),
];

/// name -> meta -> modern name
static LEGACY_LOOKUP: Lazy<HashMap<&'static str, HashMap<u32, &'static str>>> = Lazy::new(|| {
    let mut lookup: HashMap<&'static str, HashMap<u32, &'static str>> = HashMap::new();
    for v in LEGACY_VARIANTS {
        lookup.entry(v.name).or_default().insert(v.meta, v.modern);
    }
    lookup
});

/// Modern name for a legacy `name:meta` pair
pub fn legacy_modern_name(name: &str, meta: u32) -> Option<&'static str> {
    LEGACY_LOOKUP
        .get(name)
        .and_then(|metas| metas.get(&meta))
        .copied()
}

// ============================================================================
// Categories
// ============================================================================

/// Coarse item classification shown in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BuildingBlocks,
    Combat,
    Tools,
    Food,
    Redstone,
    Transportation,
    Brewing,
    Misc,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::BuildingBlocks => "building_blocks",
            Category::Combat => "combat",
            Category::Tools => "tools",
            Category::Food => "food",
            Category::Redstone => "redstone",
            Category::Transportation => "transportation",
            Category::Brewing => "brewing",
            Category::Misc => "misc",
        }
    }

    /// Single-letter code used by the packed catalog
    pub fn code(self) -> char {
        match self {
            Category::BuildingBlocks => 'b',
            Category::Combat => 'c',
            Category::Tools => 't',
            Category::Food => 'f',
            Category::Redstone => 'r',
            Category::Transportation => 'v',
            Category::Brewing => 'p',
            Category::Misc => 'm',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword -> category associations. Order matters: the first keyword found
/// in the item name wins, so `pickaxe` must precede `axe`.
pub const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    ("planks", Category::BuildingBlocks),
    ("log", Category::BuildingBlocks),
    ("stone", Category::BuildingBlocks),
    ("dirt", Category::BuildingBlocks),
    ("cobblestone", Category::BuildingBlocks),
    ("sand", Category::BuildingBlocks),
    ("gravel", Category::BuildingBlocks),
    ("wool", Category::BuildingBlocks),
    ("glass", Category::BuildingBlocks),
    ("concrete", Category::BuildingBlocks),
    ("terracotta", Category::BuildingBlocks),
    ("sword", Category::Combat),
    ("bow", Category::Combat),
    ("arrow", Category::Combat),
    ("shield", Category::Combat),
    ("armor", Category::Combat),
    ("helmet", Category::Combat),
    ("chestplate", Category::Combat),
    ("leggings", Category::Combat),
    ("boots", Category::Combat),
    ("pickaxe", Category::Tools),
    ("axe", Category::Tools),
    ("shovel", Category::Tools),
    ("hoe", Category::Tools),
    ("fishing_rod", Category::Tools),
    ("flint_and_steel", Category::Tools),
    ("bucket", Category::Tools),
    ("shears", Category::Tools),
    ("food", Category::Food),
    ("apple", Category::Food),
    ("bread", Category::Food),
    ("porkchop", Category::Food),
    ("beef", Category::Food),
    ("chicken", Category::Food),
    ("carrot", Category::Food),
    ("potato", Category::Food),
    ("melon", Category::Food),
    ("redstone", Category::Redstone),
    ("repeater", Category::Redstone),
    ("comparator", Category::Redstone),
    ("piston", Category::Redstone),
    ("observer", Category::Redstone),
    ("hopper", Category::Redstone),
    ("dropper", Category::Redstone),
    ("dispenser", Category::Redstone),
    ("rail", Category::Transportation),
    ("minecart", Category::Transportation),
    ("boat", Category::Transportation),
    ("saddle", Category::Transportation),
    ("potion", Category::Brewing),
    ("brewing_stand", Category::Brewing),
    ("cauldron", Category::Brewing),
    ("enchanting_table", Category::Misc),
    ("anvil", Category::Misc),
    ("beacon", Category::Misc),
    ("torch", Category::Misc),
    ("chest", Category::Misc),
    ("furnace", Category::Misc),
    ("crafting_table", Category::Misc),
];

/// Classify an item by the first keyword contained in its lowercased,
/// namespace-stripped name.
pub fn category_for(item_id: &str) -> Category {
    let name = crate::ident::strip_namespace(item_id).to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Misc)
}
