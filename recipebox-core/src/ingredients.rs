//! Helpers for the comma-separated ingredients field.
//!
//! Recipes keep their ingredients as one string, e.g.
//! `"Herbal Tea Leaves, Honey, Hot Water"`.

/// Separator used when ingredients are written in canonical form.
pub const SEPARATOR: &str = ", ";

/// Number of ingredients, as used for difficulty.
///
/// Splits on the canonical `", "` separator without any cleanup, so
/// `"a,b"` counts as one ingredient and an empty string counts as one.
pub fn count(ingredients: &str) -> usize {
    ingredients.split(SEPARATOR).count()
}

/// Ingredient names for display.
///
/// Splits on any comma, trims whitespace and drops empty entries.
pub fn list(ingredients: &str) -> Vec<&str> {
    ingredients
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Join ingredient names into canonical form.
pub fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_canonical() {
        assert_eq!(count("Herbal Tea Leaves, Honey, Hot Water"), 3);
        assert_eq!(count("ingredient1, ingredient2"), 2);
        assert_eq!(count("salt"), 1);
    }

    #[test]
    fn test_count_requires_space_after_comma() {
        assert_eq!(count("a,b,c"), 1);
        assert_eq!(count("a, b,c"), 2);
    }

    #[test]
    fn test_count_empty_is_one() {
        assert_eq!(count(""), 1);
    }

    #[test]
    fn test_list() {
        assert_eq!(list("flour,  sugar ,eggs"), vec!["flour", "sugar", "eggs"]);
        assert_eq!(list("a, , b,"), vec!["a", "b"]);
        assert!(list("").is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["flour", " sugar", "eggs "]), "flour, sugar, eggs");
        assert_eq!(join::<&str>(&[]), "");
    }
}
