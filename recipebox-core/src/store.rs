//! Recipe storage.
//!
//! The pipeline only needs a snapshot of all recipes; stores also look up
//! single recipes for detail pages and create new ones.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::types::{NewRecipe, Recipe, RecipeId};

pub trait RecipeStore {
    /// All recipes, in id order.
    fn all_recipes(&self) -> Result<Vec<Recipe>, StoreError>;

    fn get(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError>;

    /// Validate and store a new recipe, assigning the next id.
    fn create(&mut self, recipe: NewRecipe) -> Result<Recipe, StoreError>;
}

/// Recipes plus the id counter, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    next_id: u64,
    recipes: Vec<Recipe>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            next_id: 1,
            recipes: Vec::new(),
        }
    }
}

impl Snapshot {
    fn insert(&mut self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        recipe.validate()?;

        // Ids never go backwards, even if the file was edited by hand
        let max_existing = self.recipes.iter().map(|r| r.id.0).max().unwrap_or(0);
        let after_existing = max_existing
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted(max_existing))?;
        let id = RecipeId(self.next_id.max(after_existing));
        self.next_id = id
            .0
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted(id.0))?;

        let recipe = recipe.into_recipe(id);
        self.recipes.push(recipe.clone());
        Ok(recipe)
    }

    fn get(&self, id: RecipeId) -> Option<Recipe> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }

    fn sorted(&self) -> Vec<Recipe> {
        let mut recipes = self.recipes.clone();
        recipes.sort_by_key(|r| r.id);
        recipes
    }
}

/// Store kept entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshot.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.recipes.is_empty()
    }
}

impl RecipeStore for MemoryStore {
    fn all_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.snapshot.sorted())
    }

    fn get(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError> {
        Ok(self.snapshot.get(id))
    }

    fn create(&mut self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        self.snapshot.insert(recipe)
    }
}

/// Store backed by a single JSON file, rewritten after every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    snapshot: Snapshot,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let snapshot = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            tracing::debug!(path = %path.display(), "recipe file not found, starting empty");
            Snapshot::default()
        };

        Ok(Self { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.snapshot)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl RecipeStore for JsonFileStore {
    fn all_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.snapshot.sorted())
    }

    fn get(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError> {
        Ok(self.snapshot.get(id))
    }

    fn create(&mut self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let created = self.snapshot.insert(recipe)?;
        self.save()?;
        tracing::info!(
            id = %created.id,
            name = %created.name,
            path = %self.path.display(),
            "recipe saved"
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_memory_store_assigns_ids() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        let tea = store
            .create(NewRecipe::new("Herbal Tea", "leaves, honey", 5))
            .unwrap();
        let toast = store.create(NewRecipe::new("Toast", "bread", 3)).unwrap();

        assert_eq!(tea.id, RecipeId(1));
        assert_eq!(toast.id, RecipeId(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(RecipeId(2)).unwrap(), Some(toast));
        assert_eq!(store.get(RecipeId(9)).unwrap(), None);
    }

    #[test]
    fn test_create_rejects_invalid() {
        let mut store = MemoryStore::new();
        let err = store.create(NewRecipe::new("", "salt", 1)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Required("name"))
        ));
        assert!(store.is_empty());

        // A rejected recipe does not consume an id
        let ok = store.create(NewRecipe::new("Salt", "salt", 1)).unwrap();
        assert_eq!(ok.id, RecipeId(1));
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("recipes.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert!(store.all_recipes().unwrap().is_empty());
        store
            .create(NewRecipe::new("Herbal Tea", "Herbal Tea Leaves, Honey, Hot Water", 5))
            .unwrap();
        store
            .create(NewRecipe::new("Toast", "bread, butter", 3).with_picture("recipes/toast.jpg"))
            .unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let recipes = reopened.all_recipes().unwrap();
        assert_eq!(recipes, store.all_recipes().unwrap());
        assert_eq!(recipes[1].picture, "recipes/toast.jpg");

        let mut reopened = reopened;
        let third = reopened.create(NewRecipe::new("Soup", "water", 20)).unwrap();
        assert_eq!(third.id, RecipeId(3));
    }

    #[test]
    fn test_json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn test_ids_stay_ahead_of_existing_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(
            &path,
            r#"{"next_id": 1, "recipes": [
                {"id": 5, "name": "Toast", "ingredients": "bread", "cooking_time": 3}
            ]}"#,
        )
        .unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        let created = store.create(NewRecipe::new("Tea", "leaves", 4)).unwrap();
        assert_eq!(created.id, RecipeId(6));
    }

    #[test]
    fn test_create_fails_when_ids_run_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let max = u64::MAX;
        fs::write(
            &path,
            format!(
                r#"{{"next_id": 1, "recipes": [
                    {{"id": {max}, "name": "Toast", "ingredients": "bread", "cooking_time": 3}}
                ]}}"#
            ),
        )
        .unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        let err = store.create(NewRecipe::new("Tea", "leaves", 4)).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted(id) if id == u64::MAX));
        assert_eq!(store.all_recipes().unwrap().len(), 1);

        let mut full = MemoryStore {
            snapshot: Snapshot {
                next_id: u64::MAX,
                recipes: Vec::new(),
            },
        };
        assert!(matches!(
            full.create(NewRecipe::new("Tea", "leaves", 4)),
            Err(StoreError::IdsExhausted(_))
        ));
        assert!(full.is_empty());
    }
}
