use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use uuid::Uuid;

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
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    #[strum(serialize = "Gluten-Free")]
    GlutenFree,
    #[strum(serialize = "Dairy-Free")]
    DairyFree,
    Keto,
    Paleo,
    #[strum(serialize = "Low-Carb")]
    LowCarb,
    #[strum(serialize = "High-Protein")]
    HighProtein,
}

/// Per-serving nutritional values. All fields are grams except `calories`
/// (kcal) and `sodium` (mg), and are never negative.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl NutritionalInfo {
    pub const ZERO: NutritionalInfo = NutritionalInfo {
        calories: 0.0,
        protein: 0.0,
        carbohydrates: 0.0,
        fat: 0.0,
        fiber: 0.0,
        sugar: 0.0,
        sodium: 0.0,
    };
}

impl std::ops::Add for NutritionalInfo {
    type Output = NutritionalInfo;

    fn add(self, other: NutritionalInfo) -> NutritionalInfo {
        NutritionalInfo {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbohydrates: self.carbohydrates + other.carbohydrates,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
        }
    }
}

impl std::iter::Sum for NutritionalInfo {
    fn sum<I: Iterator<Item = NutritionalInfo>>(iter: I) -> NutritionalInfo {
        iter.fold(NutritionalInfo::ZERO, std::ops::Add::add)
    }
}

/// A single recipe ingredient. `unit` is free text ("g", "cup", "tbsp");
/// no canonicalization across unit systems is performed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// An immutable recipe snapshot. Any modification produces a new value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub servings: u32,
    pub image_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub nutritional_info: NutritionalInfo,
    pub tags: Vec<String>,
    pub dietary_preferences: Vec<DietaryPreference>,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            cuisine: String::new(),
            prep_time: 0,
            cook_time: 0,
            difficulty: Difficulty::Easy,
            servings: 1,
            image_url: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            nutritional_info: NutritionalInfo::ZERO,
            tags: Vec::new(),
            dietary_preferences: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_time_sums_prep_and_cook() {
        let recipe = Recipe {
            prep_time: 15,
            cook_time: 25,
            ..Default::default()
        };

        assert_eq!(recipe.total_time(), 40);
    }

    #[test]
    fn nutritional_info_adds_field_wise() {
        let a = NutritionalInfo {
            calories: 300.0,
            protein: 20.0,
            ..NutritionalInfo::ZERO
        };
        let b = NutritionalInfo {
            calories: 200.0,
            sodium: 150.0,
            ..NutritionalInfo::ZERO
        };

        let total = a + b;
        assert_eq!(total.calories, 500.0);
        assert_eq!(total.protein, 20.0);
        assert_eq!(total.sodium, 150.0);
    }

    #[test]
    fn dietary_preference_labels_match_display_strings() {
        assert_eq!(DietaryPreference::GlutenFree.to_string(), "Gluten-Free");
        assert_eq!(
            "High-Protein".parse::<DietaryPreference>().unwrap(),
            DietaryPreference::HighProtein
        );
    }

    #[test]
    fn recipe_round_trips_through_json() {
        let recipe = Recipe {
            name: "Grilled Salmon".to_string(),
            cuisine: "Mediterranean".to_string(),
            ingredients: vec![Ingredient::new("Salmon fillet", 300.0, "g")],
            dietary_preferences: vec![DietaryPreference::GlutenFree],
            ..Default::default()
        };

        let encoded = serde_json::to_vec(&recipe).unwrap();
        let decoded: Recipe = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, recipe);
    }
}
