use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::recipe::Recipe;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Fixed ordering for listing a day's meals: Breakfast, Lunch, Dinner,
    /// Snack. Deliberately a priority table, not a sort on the label text.
    pub fn priority(&self) -> u8 {
        match self {
            MealType::Breakfast => 0,
            MealType::Lunch => 1,
            MealType::Dinner => 2,
            MealType::Snack => 3,
        }
    }
}

/// One recipe assigned to a date and meal slot. The recipe is an owned
/// snapshot: later edits to a catalog recipe never retroactively change a
/// past plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub meal_type: MealType,
    pub recipe: Recipe,
}

impl PlannedMeal {
    pub fn new(date: OffsetDateTime, meal_type: MealType, recipe: Recipe) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            meal_type,
            recipe,
        }
    }
}

/// A dated meal plan. The shopping list is always derived from `meals`,
/// never stored alongside them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    pub meals: Vec<PlannedMeal>,
}

impl MealPlan {
    pub fn new(
        name: impl Into<String>,
        start_date: OffsetDateTime,
        end_date: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            end_date,
            meals: Vec::new(),
        }
    }

    /// Functional update: same plan identity, new meal list.
    pub fn with_meals(&self, meals: Vec<PlannedMeal>) -> MealPlan {
        MealPlan {
            id: self.id,
            name: self.name.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            meals,
        }
    }
}

/// A deduplicated shopping list entry. Identity for aggregation purposes is
/// the lowercased ingredient name; the id only tracks the entry the user
/// interacts with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub is_purchased: bool,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit: unit.into(),
            is_purchased: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn meal_type_priority_orders_breakfast_lunch_dinner_snack() {
        let mut types = vec![
            MealType::Snack,
            MealType::Dinner,
            MealType::Breakfast,
            MealType::Lunch,
        ];
        types.sort_by_key(MealType::priority);

        assert_eq!(
            types,
            vec![
                MealType::Breakfast,
                MealType::Lunch,
                MealType::Dinner,
                MealType::Snack,
            ]
        );
    }

    #[test]
    fn with_meals_preserves_plan_identity() {
        let plan = MealPlan::new(
            "Week 1",
            datetime!(2026-03-02 00:00:00 UTC),
            datetime!(2026-03-08 00:00:00 UTC),
        );
        let meal = PlannedMeal::new(
            datetime!(2026-03-02 12:00:00 UTC),
            MealType::Lunch,
            Recipe::default(),
        );

        let updated = plan.with_meals(vec![meal]);
        assert_eq!(updated.id, plan.id);
        assert_eq!(updated.name, plan.name);
        assert_eq!(updated.meals.len(), 1);
        assert!(plan.meals.is_empty());
    }

    #[test]
    fn plan_round_trips_through_json_with_dates() {
        let mut plan = MealPlan::new(
            "Week 1",
            datetime!(2026-03-02 00:00:00 UTC),
            datetime!(2026-03-08 00:00:00 UTC),
        );
        plan.meals.push(PlannedMeal::new(
            datetime!(2026-03-03 08:30:00 UTC),
            MealType::Breakfast,
            Recipe::default(),
        ));

        let encoded = serde_json::to_vec(&plan).unwrap();
        let decoded: MealPlan = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, plan);
    }
}
