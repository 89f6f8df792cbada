use gastronomia_shared::{
    contains_ignore_case, overlaps, DietaryPreference, Difficulty, Recipe,
};

/// Combined filter criteria for the recipe list. Every populated criterion
/// must pass (logical AND); empty criteria pass everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Case-insensitive substring over name, description, and cuisine.
    pub query: String,
    /// Passes on set overlap with the recipe's preferences.
    pub dietary_preferences: Vec<DietaryPreference>,
    /// Exact, case-sensitive cuisine match; empty means unset.
    pub cuisine: String,
    pub difficulty: Option<Difficulty>,
}

impl RecipeFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.dietary_preferences.is_empty()
            && self.cuisine.is_empty()
            && self.difficulty.is_none()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let matches_query = self.query.is_empty()
            || contains_ignore_case(&recipe.name, &self.query)
            || contains_ignore_case(&recipe.description, &self.query)
            || contains_ignore_case(&recipe.cuisine, &self.query);

        let matches_diet = self.dietary_preferences.is_empty()
            || overlaps(&recipe.dietary_preferences, &self.dietary_preferences);

        let matches_cuisine = self.cuisine.is_empty() || recipe.cuisine == self.cuisine;

        let matches_difficulty = self
            .difficulty
            .is_none_or(|difficulty| recipe.difficulty == difficulty);

        matches_query && matches_diet && matches_cuisine && matches_difficulty
    }
}

/// Apply the filter, preserving the source collection's order.
pub fn filter_recipes(recipes: &[Recipe], filter: &RecipeFilter) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| filter.matches(recipe))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipes() -> Vec<Recipe> {
        vec![
            Recipe {
                name: "Buddha Bowl".to_string(),
                description: "A colorful vegan bowl".to_string(),
                cuisine: "International".to_string(),
                difficulty: Difficulty::Easy,
                dietary_preferences: vec![DietaryPreference::Vegan],
                ..Default::default()
            },
            Recipe {
                name: "Keto Avocado Egg Breakfast".to_string(),
                description: "Low-carb baked eggs".to_string(),
                cuisine: "American".to_string(),
                difficulty: Difficulty::Easy,
                dietary_preferences: vec![DietaryPreference::Keto],
                ..Default::default()
            },
            Recipe {
                name: "Chicken Tikka Masala".to_string(),
                description: "Creamy Indian curry".to_string(),
                cuisine: "Indian".to_string(),
                difficulty: Difficulty::Medium,
                dietary_preferences: vec![DietaryPreference::GlutenFree],
                ..Default::default()
            },
        ]
    }

    #[test]
    fn empty_criteria_return_the_full_set_in_order() {
        let source = recipes();
        let filtered = filter_recipes(&source, &RecipeFilter::default());
        assert_eq!(filtered, source);
    }

    #[test]
    fn query_matches_name_description_and_cuisine() {
        let source = recipes();

        let by_name = filter_recipes(
            &source,
            &RecipeFilter {
                query: "buddha".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Buddha Bowl");

        let by_description = filter_recipes(
            &source,
            &RecipeFilter {
                query: "curry".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_description.len(), 1);

        let by_cuisine = filter_recipes(
            &source,
            &RecipeFilter {
                query: "indian".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_cuisine.len(), 1);
    }

    #[test]
    fn category_match_is_set_overlap() {
        let source = recipes();

        let vegan_only = filter_recipes(
            &source,
            &RecipeFilter {
                dietary_preferences: vec![DietaryPreference::Vegan],
                ..Default::default()
            },
        );
        assert_eq!(vegan_only.len(), 1);
        assert_eq!(vegan_only[0].name, "Buddha Bowl");

        let vegan_or_keto = filter_recipes(
            &source,
            &RecipeFilter {
                dietary_preferences: vec![DietaryPreference::Vegan, DietaryPreference::Keto],
                ..Default::default()
            },
        );
        assert_eq!(vegan_or_keto.len(), 2);
    }

    #[test]
    fn cuisine_match_is_exact_and_case_sensitive() {
        let source = recipes();

        let indian = filter_recipes(
            &source,
            &RecipeFilter {
                cuisine: "Indian".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(indian.len(), 1);

        let lowercase = filter_recipes(
            &source,
            &RecipeFilter {
                cuisine: "indian".to_string(),
                ..Default::default()
            },
        );
        assert!(lowercase.is_empty());
    }

    #[test]
    fn all_criteria_must_pass_together() {
        let source = recipes();

        let filter = RecipeFilter {
            query: "breakfast".to_string(),
            dietary_preferences: vec![DietaryPreference::Keto],
            cuisine: "American".to_string(),
            difficulty: Some(Difficulty::Easy),
        };
        assert_eq!(filter_recipes(&source, &filter).len(), 1);

        let conflicting = RecipeFilter {
            difficulty: Some(Difficulty::Expert),
            ..filter
        };
        assert!(filter_recipes(&source, &conflicting).is_empty());
    }
}
