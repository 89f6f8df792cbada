use std::collections::HashMap;

use gastronomia_shared::{MealPlan, PlannedMeal, ShoppingItem};

/// Lowercased ingredient name, the identity used to deduplicate across
/// meals.
fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Merge the ingredients of every planned meal into a deduplicated shopping
/// list.
///
/// Ingredients contribute at their recipe's stored servings; no scaling is
/// applied here. Entries with the same normalized name sum their amounts and
/// keep the first-seen casing and unit. Units are assumed compatible and
/// never validated, so "2 cup" plus "100 g" of the same name sums
/// numerically under the first unit. Output is sorted by display name.
pub fn aggregate(meals: &[PlannedMeal]) -> Vec<ShoppingItem> {
    aggregate_with_previous(meals, &[])
}

/// Same merge as [`aggregate`], but keys that already exist in `previous`
/// keep that entry's id and purchased flag. Brand-new items get a fresh id
/// and start unpurchased; items whose key disappeared are dropped along with
/// their state.
pub fn aggregate_with_previous(
    meals: &[PlannedMeal],
    previous: &[ShoppingItem],
) -> Vec<ShoppingItem> {
    let carried: HashMap<String, &ShoppingItem> = previous
        .iter()
        .map(|item| (normalize_name(&item.name), item))
        .collect();

    let mut items: HashMap<String, ShoppingItem> = HashMap::new();
    for meal in meals {
        for ingredient in &meal.recipe.ingredients {
            let key = normalize_name(&ingredient.name);
            match items.get_mut(&key) {
                Some(existing) => existing.amount += ingredient.amount,
                None => {
                    let mut item = ShoppingItem::new(
                        ingredient.name.clone(),
                        ingredient.amount,
                        ingredient.unit.clone(),
                    );
                    if let Some(prev) = carried.get(&key) {
                        item.id = prev.id;
                        item.is_purchased = prev.is_purchased;
                    }
                    items.insert(key, item);
                }
            }
        }
    }

    let mut list: Vec<ShoppingItem> = items.into_values().collect();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    list
}

/// Derived shopping list of a plan; recomputed on every call, never stored.
pub trait ShoppingListExt {
    fn shopping_list(&self) -> Vec<ShoppingItem>;
}

impl ShoppingListExt for MealPlan {
    fn shopping_list(&self) -> Vec<ShoppingItem> {
        aggregate(&self.meals)
    }
}
