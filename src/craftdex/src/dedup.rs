//! Cross-version recipe merging
//!
//! A recipe that appears unchanged in several versions is kept once, with the
//! union of its versions. Identity covers what the recipe makes and what it
//! consumes: kind, result and the kind-specific ingredient fields. The recipe
//! id, group and cooking numbers do not take part, and the first occurrence
//! keeps its values for them.

use std::collections::{BTreeSet, HashMap};

use crate::ingredient::Ingredient;
use crate::recipe::{ItemStack, Recipe, RecipeKind, RecipePayload};
use crate::uses::UsesIndex;

/// The parts of a recipe that decide whether two are the same
#[derive(Debug, PartialEq, Eq, Hash)]
struct RecipeIdentity<'a> {
    kind: &'a RecipeKind,
    result: Option<&'a ItemStack>,
    inputs: Inputs<'a>,
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum Inputs<'a> {
    Shaped {
        pattern: &'a [String],
        /// Sorted by glyph, so key order in the source does not matter
        key: Vec<(char, Option<&'a Ingredient>)>,
    },
    Shapeless(&'a [Option<Ingredient>]),
    Single(Option<&'a Ingredient>),
    Smithing {
        base: Option<&'a Ingredient>,
        addition: Option<&'a Ingredient>,
        template: Option<Option<&'a Ingredient>>,
    },
    Nothing,
}

impl<'a> RecipeIdentity<'a> {
    fn of(recipe: &'a Recipe) -> Self {
        let inputs = match &recipe.payload {
            RecipePayload::Shaped { pattern, key, .. } => {
                let mut key: Vec<_> = key.iter().map(|(c, i)| (*c, i.as_ref())).collect();
                key.sort_by_key(|(c, _)| *c);
                Inputs::Shaped {
                    pattern: pattern.as_slice(),
                    key,
                }
            }
            RecipePayload::Shapeless { ingredients } => Inputs::Shapeless(ingredients.as_slice()),
            RecipePayload::Cooking { ingredient, .. } | RecipePayload::Stonecutting { ingredient } => {
                Inputs::Single(ingredient.as_ref())
            }
            RecipePayload::Smithing {
                base,
                addition,
                template,
            } => Inputs::Smithing {
                base: base.as_ref(),
                addition: addition.as_ref(),
                template: template.as_ref().map(Option::as_ref),
            },
            RecipePayload::Unrecognized {} => Inputs::Nothing,
        };

        RecipeIdentity {
            kind: &recipe.kind,
            result: recipe.result.as_ref(),
            inputs,
        }
    }
}

/// Merge recipes sharing an identity, keeping first-occurrence order.
pub fn dedupe(recipes: &[Recipe]) -> Vec<Recipe> {
    let mut slots: HashMap<RecipeIdentity<'_>, usize> = HashMap::new();
    let mut merged: Vec<(Recipe, BTreeSet<String>)> = Vec::new();

    for recipe in recipes {
        match slots.get(&RecipeIdentity::of(recipe)) {
            Some(&idx) => merged[idx].1.extend(recipe.versions.iter().cloned()),
            None => {
                slots.insert(RecipeIdentity::of(recipe), merged.len());
                merged.push((recipe.clone(), recipe.versions.iter().cloned().collect()));
            }
        }
    }

    merged
        .into_iter()
        .map(|(mut recipe, versions)| {
            recipe.versions = versions.into_iter().collect();
            recipe
        })
        .collect()
}

/// Build the uses index over already-merged recipes.
pub fn index_uses(recipes: &[Recipe]) -> UsesIndex {
    let mut uses = UsesIndex::new();
    for recipe in recipes {
        uses.add_recipe(recipe);
    }
    uses
}

/// Merge the accumulated recipes and index their uses.
pub fn finalize(recipes: &[Recipe]) -> (Vec<Recipe>, UsesIndex) {
    let merged = dedupe(recipes);
    let uses = index_uses(&merged);
    (merged, uses)
}
