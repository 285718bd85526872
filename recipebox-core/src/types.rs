use std::fmt;

use serde::{Deserialize, Serialize};

use crate::difficulty::{classify, Difficulty};
use crate::error::ValidationError;
use crate::ingredients;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_INGREDIENTS_LEN: usize = 255;

/// Picture reference used when a recipe is created without one.
pub const DEFAULT_PICTURE: &str = "no_picture.jpg";

/// Base path of the recipe collection; detail pages live under it.
pub const DEFAULT_COLLECTION_PATH: &str = "/collection";

/// Store-assigned recipe identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A stored recipe.
///
/// Difficulty and ingredient count are computed on every call and are not
/// part of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Comma-separated, canonically `"a, b, c"`
    pub ingredients: String,
    /// Minutes
    pub cooking_time: u32,
    #[serde(default = "default_picture")]
    pub picture: String,
}

fn default_picture() -> String {
    DEFAULT_PICTURE.to_string()
}

impl Recipe {
    pub fn ingredient_count(&self) -> usize {
        ingredients::count(&self.ingredients)
    }

    pub fn difficulty(&self) -> Difficulty {
        classify(self.cooking_time, self.ingredient_count())
    }

    pub fn ingredient_list(&self) -> Vec<&str> {
        ingredients::list(&self.ingredients)
    }

    /// Path of this recipe's detail page under `collection_path`.
    pub fn detail_path(&self, collection_path: &str) -> String {
        detail_path(collection_path, self.id)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `"<collection_path>/<id>"`, tolerating a trailing slash on the base.
pub fn detail_path(collection_path: &str, id: RecipeId) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}

/// Fields submitted when adding a recipe. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: String,
    pub cooking_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl NewRecipe {
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>, cooking_time: u32) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            cooking_time,
            picture: None,
        }
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    /// Check required fields and length limits (counted in characters).
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name, MAX_NAME_LEN)?;
        check_text("ingredients", &self.ingredients, MAX_INGREDIENTS_LEN)?;
        Ok(())
    }

    /// Attach a store-assigned id.
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            cooking_time: self.cooking_time,
            picture: self
                .picture
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(default_picture),
        }
    }
}

fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    check_len(field, value, max)
}

pub(crate) fn check_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
