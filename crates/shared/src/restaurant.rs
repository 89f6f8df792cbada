use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use uuid::Uuid;

use crate::geo::Coordinates;
use crate::recipe::{DietaryPreference, NutritionalInfo};

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
pub enum PriceLevel {
    #[strum(serialize = "$")]
    #[default]
    Budget,
    #[strum(serialize = "$$")]
    Moderate,
    #[strum(serialize = "$$$")]
    Expensive,
    #[strum(serialize = "$$$$")]
    Luxury,
}

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
pub enum HealthGoal {
    #[strum(serialize = "Weight Loss")]
    WeightLoss,
    #[strum(serialize = "Muscle Gain")]
    MuscleGain,
    #[default]
    Maintenance,
    #[strum(serialize = "Healthy Eating")]
    HealthyEating,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub nutritional_info: Option<NutritionalInfo>,
    pub dietary_preferences: Vec<DietaryPreference>,
    pub image_url: Option<String>,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            price: 0.0,
            nutritional_info: None,
            dietary_preferences: Vec::new(),
            image_url: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub price_level: PriceLevel,
    pub image_url: Option<String>,
    pub menu_items: Vec<MenuItem>,
    pub opening_hours: Vec<String>,
}

impl Default for Restaurant {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            cuisine: String::new(),
            address: String::new(),
            coordinates: Coordinates::new(0.0, 0.0),
            phone: None,
            website: None,
            rating: 0.0,
            price_level: PriceLevel::Budget,
            image_url: None,
            menu_items: Vec::new(),
            opening_hours: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_level_displays_dollar_signs() {
        assert_eq!(PriceLevel::Budget.to_string(), "$");
        assert_eq!(PriceLevel::Luxury.to_string(), "$$$$");
        assert_eq!("$$".parse::<PriceLevel>().unwrap(), PriceLevel::Moderate);
    }
}
