use anyhow::{Context, Result};
use recipebox_core::{NewRecipe, RecipeStore};

struct SeedRecipe {
    name: &'static str,
    ingredients: &'static [&'static str],
    cooking_time: u32,
    picture: Option<&'static str>,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Herbal Tea",
        ingredients: &["Herbal Tea Leaves", "Honey", "Hot Water"],
        cooking_time: 5,
        picture: Some("recipes/herbal_tea.jpg"),
    },
    SeedRecipe {
        name: "Ginger Tea",
        ingredients: &["Ginger", "Lemon", "Honey", "Hot Water"],
        cooking_time: 8,
        picture: None,
    },
    SeedRecipe {
        name: "Buttered Toast",
        ingredients: &["Bread", "Butter"],
        cooking_time: 3,
        picture: None,
    },
    SeedRecipe {
        name: "Tomato Soup",
        ingredients: &["Tomatoes", "Onion", "Garlic", "Vegetable Stock", "Cream"],
        cooking_time: 35,
        picture: Some("recipes/tomato_soup.jpg"),
    },
    SeedRecipe {
        name: "Rice Pudding",
        ingredients: &["Rice", "Milk", "Sugar"],
        cooking_time: 40,
        picture: None,
    },
    SeedRecipe {
        name: "Spaghetti Carbonara",
        ingredients: &["Spaghetti", "Pancetta", "Eggs", "Pecorino Romano", "Black Pepper"],
        cooking_time: 20,
        picture: Some("recipes/carbonara.jpg"),
    },
    SeedRecipe {
        name: "Greek Salad",
        ingredients: &["Tomatoes", "Cucumber", "Red Onion", "Feta", "Olives", "Olive Oil"],
        cooking_time: 9,
        picture: None,
    },
    SeedRecipe {
        name: "Boiled Eggs",
        ingredients: &["Eggs", "Water"],
        cooking_time: 10,
        picture: None,
    },
];

impl SeedRecipe {
    fn to_new_recipe(&self) -> NewRecipe {
        let recipe = NewRecipe::new(
            self.name,
            recipebox_core::ingredients::join(self.ingredients),
            self.cooking_time,
        );
        match self.picture {
            Some(picture) => recipe.with_picture(picture),
            None => recipe,
        }
    }
}

/// Add the sample recipes to `store`. Returns how many were added.
pub fn seed(store: &mut impl RecipeStore) -> Result<usize> {
    for sample in SAMPLE_RECIPES {
        let recipe = store
            .create(sample.to_new_recipe())
            .with_context(|| format!("Failed to add sample recipe {}", sample.name))?;
        println!("Added recipe {}: {}", recipe.id, recipe.name);
    }
    Ok(SAMPLE_RECIPES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::{Difficulty, MemoryStore};

    #[test]
    fn test_seed_covers_every_difficulty() {
        let mut store = MemoryStore::new();
        let added = seed(&mut store).unwrap();
        assert_eq!(added, SAMPLE_RECIPES.len());

        let recipes = store.all_recipes().unwrap();
        for level in Difficulty::ALL {
            assert!(
                recipes.iter().any(|r| r.difficulty() == *level),
                "no sample recipe is {}",
                level
            );
        }
    }

    #[test]
    fn test_seed_uses_canonical_ingredients() {
        let recipe = SAMPLE_RECIPES[0].to_new_recipe();
        assert_eq!(recipe.ingredients, "Herbal Tea Leaves, Honey, Hot Water");
        assert_eq!(recipe.picture.as_deref(), Some("recipes/herbal_tea.jpg"));
    }
}
