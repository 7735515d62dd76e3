//! End-to-end catalog builds over in-memory and on-disk assets

use craftdex::{
    build, normalize, AssetSource, Catalog, Era, ExtractedAssets, Ingredient, ItemStack,
    RecipePayload, TagTable, VersionAssets,
};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// A legacy and a modern release with overlapping recipes
fn two_release_tree(root: &Path) {
    write(
        root,
        "1.12.2/assets/minecraft/recipes/oak_planks.json",
        r#"{"type": "crafting_shapeless",
            "ingredients": [{"item": "minecraft:log", "data": 0}],
            "result": {"item": "minecraft:planks", "data": 0, "count": 4}}"#,
    );
    write(
        root,
        "1.12.2/assets/minecraft/recipes/stick.json",
        r##"{"type": "crafting_shaped", "pattern": ["#", "#"],
            "key": {"#": {"item": "minecraft:planks", "data": 0}},
            "result": {"item": "minecraft:stick", "count": 4}}"##,
    );
    write(
        root,
        "1.12.2/assets/minecraft/lang/en_us.lang",
        "item.stick.name=Stick\ntile.wood.name=Wooden Planks\n",
    );

    write(
        root,
        "1.13/data/minecraft/recipes/oak_planks.json",
        r#"{"type": "minecraft:crafting_shapeless",
            "ingredients": [{"item": "minecraft:oak_log"}],
            "result": {"item": "minecraft:oak_planks", "count": 4}}"#,
    );
    write(
        root,
        "1.13/data/minecraft/recipes/stick.json",
        r##"{"type": "minecraft:crafting_shaped", "pattern": ["#", "#"],
            "key": {"#": {"tag": "minecraft:planks"}},
            "result": {"item": "minecraft:stick", "count": 4}}"##,
    );
    write(
        root,
        "1.13/data/minecraft/recipes/glass.json",
        r#"{"type": "minecraft:smelting", "ingredient": {"tag": "minecraft:sand"},
            "result": "minecraft:glass", "experience": 0.1, "cookingtime": 200}"#,
    );
    write(
        root,
        "1.13/data/minecraft/tags/items/planks.json",
        r#"{"values": ["minecraft:oak_planks", "minecraft:spruce_planks"]}"#,
    );
    write(
        root,
        "1.13/assets/minecraft/lang/en_us.json",
        r#"{"item.minecraft.stick": "Stick", "block.minecraft.spruce_planks": "Spruce Planks"}"#,
    );
}

fn build_from_disk(root: &Path) -> Catalog {
    let assets = ExtractedAssets::open(root).unwrap();
    let versions = assets.discover_versions().unwrap();
    build(&versions, &assets)
}

#[test]
fn test_two_release_build() {
    let dir = tempfile::tempdir().unwrap();
    two_release_tree(dir.path());
    let catalog = build_from_disk(dir.path());

    assert_eq!(catalog.versions, strings(&["1.12.2", "1.13"]));

    // planks merged across eras, stick differs (item key vs tag key)
    let planks: Vec<_> = catalog
        .recipes
        .iter()
        .filter(|r| r.id == "minecraft:oak_planks")
        .collect();
    assert_eq!(planks.len(), 1);
    assert_eq!(planks[0].versions, strings(&["1.12.2", "1.13"]));
    assert_eq!(planks[0].result, Some(ItemStack::new("minecraft:oak_planks", 4)));
    assert_eq!(catalog.recipes_for("minecraft:stick").count(), 2);

    let oak = catalog.item("minecraft:oak_planks").unwrap();
    assert_eq!(oak.version_added, "1.12.2");
    assert_eq!(oak.aliases, strings(&["minecraft:planks:0"]));
    assert_eq!(oak.icon_ref, "icons/minecraft/oak_planks.png");

    // spruce planks only appear through the 1.13 tag table
    let spruce = catalog.item("minecraft:spruce_planks").unwrap();
    assert_eq!(spruce.version_added, "1.13");
    assert_eq!(spruce.display_name, "Spruce Planks");

    // the sand tag is unknown, so nothing is registered for it
    assert!(catalog.item("minecraft:sand").is_none());
    assert!(catalog.item("minecraft:glass").is_some());

    // tag ingredients never reach the uses index
    assert_eq!(
        catalog.uses.get("minecraft:oak_planks"),
        Some(&strings(&["minecraft:stick"])[..])
    );
    assert!(catalog.uses.get("minecraft:spruce_planks").is_none());
}

#[test]
fn test_output_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    two_release_tree(dir.path());

    let first = serde_json::to_string_pretty(&build_from_disk(dir.path())).unwrap();
    let second = serde_json::to_string_pretty(&build_from_disk(dir.path())).unwrap();
    assert_eq!(first, second);

    let back: Catalog = serde_json::from_str(&first).unwrap();
    assert_eq!(serde_json::to_string_pretty(&back).unwrap(), first);
}

#[test]
fn test_item_ids_are_unique() {
    let dir = tempfile::tempdir().unwrap();
    two_release_tree(dir.path());
    let catalog = build_from_disk(dir.path());

    let mut seen = HashSet::new();
    for item in &catalog.items {
        assert!(seen.insert(item.id.as_str()), "duplicate item {}", item.id);
    }
}

#[test]
fn test_uses_symmetry() {
    let dir = tempfile::tempdir().unwrap();
    two_release_tree(dir.path());
    let catalog = build_from_disk(dir.path());
    let no_tags = TagTable::new();

    let mut ingredients = HashSet::new();
    for recipe in &catalog.recipes {
        for (_, ingredient) in recipe.slots() {
            for item in craftdex::expand_to_items(ingredient, &no_tags) {
                if let Some(result) = &recipe.result {
                    let uses = catalog.uses.get(&item).unwrap();
                    assert!(uses.contains(&result.item));
                }
                ingredients.insert(item);
            }
        }
    }
    for (item, _) in catalog.uses.iter() {
        assert!(ingredients.contains(item), "stray uses entry {}", item);
    }
}

#[test]
fn test_shaped_grid_padding() {
    let mut source = HashMap::new();
    source.insert(
        "1.14".to_string(),
        VersionAssets::for_version("1.14").with_recipe(
            "minecraft:crafting_table",
            json!({"type": "minecraft:crafting_shaped", "pattern": ["##", "##"],
                   "key": {"#": {"item": "minecraft:oak_planks"}},
                   "result": {"item": "minecraft:crafting_table"}}),
        ),
    );
    let catalog = build(&strings(&["1.14"]), &source);

    let RecipePayload::Shaped { grid, .. } = &catalog.recipes[0].payload else {
        panic!("expected shaped payload");
    };
    let plank = Some(Ingredient::item("minecraft:oak_planks"));
    assert_eq!(
        grid,
        &vec![
            vec![plank.clone(), plank.clone(), None],
            vec![plank.clone(), plank, None],
            vec![None, None, None],
        ]
    );
}

#[test]
fn test_legacy_remap_depends_on_era() {
    assert_eq!(normalize("game:planks:1", Era::Legacy), "game:spruce_planks");
    assert_eq!(normalize("game:planks:1", Era::Modern), "game:planks:1");
}

#[test]
fn test_unknown_tag_expands_to_nothing() {
    let items = craftdex::expand_to_items(
        Some(&Ingredient::tag("minecraft:does_not_exist")),
        &TagTable::new(),
    );
    assert!(items.is_empty());
}

#[test]
fn test_merge_across_differently_named_versions() {
    let mut source = HashMap::new();
    source.insert(
        "V1".to_string(),
        VersionAssets::new(Era::Legacy).with_recipe(
            "game:plank_from_log",
            json!({"type": "crafting_shapeless", "ingredient": ["game:log:0"],
                   "result": "game:planks:0"}),
        ),
    );
    source.insert(
        "V2".to_string(),
        VersionAssets::new(Era::Modern).with_recipe(
            "game:plank_from_log",
            json!({"type": "crafting_shapeless", "ingredients": [{"item": "game:oak_log"}],
                   "result": {"item": "game:oak_planks", "count": 1}}),
        ),
    );

    let catalog = build(&strings(&["V1", "V2"]), &source);

    assert_eq!(catalog.recipes.len(), 1);
    let recipe = &catalog.recipes[0];
    assert_eq!(recipe.result, Some(ItemStack::new("game:oak_planks", 1)));
    assert_eq!(recipe.versions, strings(&["V1", "V2"]));
    assert_eq!(
        catalog.uses.get("game:oak_log"),
        Some(&strings(&["game:oak_planks"])[..])
    );
}

#[test]
fn test_bare_string_legacy_recipe_merges_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "1.12.2/assets/game/recipes/plank_from_log.json",
        r#"{"type": "crafting_shapeless", "ingredient": ["game:log:0"],
            "result": "game:planks:0"}"#,
    );
    write(
        dir.path(),
        "1.13/data/game/recipes/plank_from_log.json",
        r#"{"type": "crafting_shapeless", "ingredients": [{"item": "game:oak_log"}],
            "result": {"item": "game:oak_planks", "count": 1}}"#,
    );

    let assets = ExtractedAssets::open(dir.path()).unwrap().with_namespace("game");
    let versions = assets.discover_versions().unwrap();
    assert_eq!(versions, strings(&["1.12.2", "1.13"]));
    let catalog = build(&versions, &assets);

    assert_eq!(catalog.recipes.len(), 1);
    let recipe = &catalog.recipes[0];
    assert_eq!(recipe.result, Some(ItemStack::new("game:oak_planks", 1)));
    assert_eq!(recipe.versions, strings(&["1.12.2", "1.13"]));
    assert_eq!(
        catalog.uses.get("game:oak_log"),
        Some(&strings(&["game:oak_planks"])[..])
    );

    let planks = catalog.item("game:oak_planks").unwrap();
    assert_eq!(planks.version_added, "1.12.2");
    assert_eq!(planks.aliases, strings(&["game:planks:0"]));
}

#[test]
fn test_missing_version_directory_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    two_release_tree(dir.path());
    let assets = ExtractedAssets::open(dir.path()).unwrap();
    assert!(assets.load_version("1.14").is_none());

    let catalog = build(&strings(&["1.12.2", "1.13", "1.14"]), &assets);
    assert_eq!(catalog.versions.len(), 3);
    assert!(!catalog.recipes.is_empty());
}
