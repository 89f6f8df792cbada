use gastronomia_shared::{NutritionalInfo, PlannedMeal};

/// Field-wise sum of each meal's recipe nutrition. Summing no meals yields
/// all-zero values; order does not matter.
pub fn total_nutrition(meals: &[PlannedMeal]) -> NutritionalInfo {
    meals.iter().map(|meal| meal.recipe.nutritional_info).sum()
}
