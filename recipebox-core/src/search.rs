//! Search criteria and the filter step of the search pipeline.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::error::ValidationError;
use crate::types::{check_len, Recipe};

/// Maximum length of the free-text search fields.
pub const MAX_SEARCH_FIELD_LEN: usize = 100;

/// A validated search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "search_by", content = "value")]
pub enum SearchCriterion {
    /// Case-insensitive substring of the name. A blank term matches everything.
    #[serde(rename = "name")]
    ByName(String),
    /// Literal equality with the whole ingredients field, e.g. `"a, b"` does
    /// not match `"a,b"`. This is not a membership search.
    #[serde(rename = "ingredients")]
    ByIngredients(String),
    /// Computed difficulty equals the level.
    #[serde(rename = "difficulty")]
    ByDifficulty(Difficulty),
}

impl SearchCriterion {
    pub fn search_by(&self) -> SearchBy {
        match self {
            SearchCriterion::ByName(_) => SearchBy::Name,
            SearchCriterion::ByIngredients(_) => SearchBy::Ingredients,
            SearchCriterion::ByDifficulty(_) => SearchBy::Difficulty,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            SearchCriterion::ByName(term) => {
                let term = term.trim();
                term.is_empty() || recipe.name.to_lowercase().contains(&term.to_lowercase())
            }
            SearchCriterion::ByIngredients(ingredients) => recipe.ingredients == *ingredients,
            SearchCriterion::ByDifficulty(level) => recipe.difficulty() == *level,
        }
    }

    /// Keep matching recipes, preserving their order.
    pub fn filter<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Search mode discriminator, as offered by the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchBy {
    Name,
    Ingredients,
    Difficulty,
}

impl SearchBy {
    pub const ALL: &'static [SearchBy] = &[
        SearchBy::Name,
        SearchBy::Ingredients,
        SearchBy::Difficulty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchBy::Name => "name",
            SearchBy::Ingredients => "ingredients",
            SearchBy::Difficulty => "difficulty",
        }
    }

    /// Human-readable choice label
    pub fn label(&self) -> &'static str {
        match self {
            SearchBy::Name => "Recipe Name",
            SearchBy::Ingredients => "Ingredients",
            SearchBy::Difficulty => "Difficulty",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SearchBy::Name),
            "ingredients" => Some(SearchBy::Ingredients),
            "difficulty" => Some(SearchBy::Difficulty),
            _ => None,
        }
    }
}

/// Raw search input, one string per form field.
///
/// Only the field selected by `search_by` is used; the others may hold
/// anything that passes the length checks. Text fields are trimmed before
/// they are checked or used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub search_by: String,
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub difficulty: String,
}

impl SearchForm {
    /// Validate the form and build the selected criterion.
    pub fn into_criterion(self) -> Result<SearchCriterion, ValidationError> {
        if self.search_by.is_empty() {
            return Err(ValidationError::Required("search_by"));
        }
        let search_by = SearchBy::from_str(&self.search_by)
            .ok_or_else(|| ValidationError::UnknownSearchMode(self.search_by.clone()))?;

        let search_term = self.search_term.trim();
        let ingredients = self.ingredients.trim();
        let difficulty = self.difficulty.trim();

        check_len("search_term", search_term, MAX_SEARCH_FIELD_LEN)?;
        check_len("ingredients", ingredients, MAX_SEARCH_FIELD_LEN)?;
        let difficulty = if difficulty.is_empty() {
            None
        } else {
            Some(difficulty.parse::<Difficulty>()?)
        };

        match search_by {
            SearchBy::Name => Ok(SearchCriterion::ByName(search_term.to_string())),
            SearchBy::Ingredients => Ok(SearchCriterion::ByIngredients(ingredients.to_string())),
            SearchBy::Difficulty => difficulty
                .map(SearchCriterion::ByDifficulty)
                .ok_or(ValidationError::Required("difficulty")),
        }
    }
}
