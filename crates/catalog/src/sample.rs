use std::time::Duration;

use async_trait::async_trait;

use gastronomia_shared::{
    Coordinates, DietaryPreference, Difficulty, Ingredient, MenuItem, NutritionalInfo,
    PriceLevel, Recipe, Restaurant,
};

use crate::{FetchError, RecipeCatalogSource, RestaurantCatalogSource};

const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Built-in catalog with simulated fetch latency. Stands in for a remote
/// service during development and testing; dropping the fetch future cancels
/// the request.
pub struct StaticCatalog {
    latency: Duration,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl RecipeCatalogSource for StaticCatalog {
    async fn fetch_all(&self) -> Result<Vec<Recipe>, FetchError> {
        tokio::time::sleep(self.latency).await;
        Ok(sample_recipes())
    }
}

#[async_trait]
impl RestaurantCatalogSource for StaticCatalog {
    async fn fetch_all(&self, near: Coordinates) -> Result<Vec<Restaurant>, FetchError> {
        tokio::time::sleep(self.latency).await;
        Ok(sample_restaurants(near))
    }
}

fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "Grilled Salmon with Quinoa".to_string(),
            description: "Perfectly grilled salmon served with fluffy quinoa and roasted vegetables"
                .to_string(),
            cuisine: "Mediterranean".to_string(),
            prep_time: 15,
            cook_time: 25,
            difficulty: Difficulty::Medium,
            servings: 2,
            ingredients: vec![
                Ingredient::new("Salmon fillet", 300.0, "g"),
                Ingredient::new("Quinoa", 1.0, "cup"),
                Ingredient::new("Broccoli", 200.0, "g"),
                Ingredient::new("Olive oil", 2.0, "tbsp"),
                Ingredient::new("Lemon", 1.0, "piece"),
            ],
            instructions: vec![
                "Rinse quinoa and cook according to package directions".to_string(),
                "Season salmon with salt, pepper, and lemon juice".to_string(),
                "Grill salmon for 4-5 minutes on each side".to_string(),
                "Steam broccoli until tender".to_string(),
                "Serve salmon over quinoa with broccoli on the side".to_string(),
            ],
            nutritional_info: NutritionalInfo {
                calories: 520.0,
                protein: 42.0,
                carbohydrates: 45.0,
                fat: 18.0,
                fiber: 8.0,
                sugar: 3.0,
                sodium: 340.0,
            },
            tags: vec![
                "Healthy".to_string(),
                "Quick".to_string(),
                "Dinner".to_string(),
            ],
            dietary_preferences: vec![
                DietaryPreference::GlutenFree,
                DietaryPreference::HighProtein,
            ],
            ..Default::default()
        },
        Recipe {
            name: "Buddha Bowl".to_string(),
            description:
                "A colorful and nutritious vegan bowl with roasted chickpeas, avocado, and tahini dressing"
                    .to_string(),
            cuisine: "International".to_string(),
            prep_time: 20,
            cook_time: 30,
            difficulty: Difficulty::Easy,
            servings: 2,
            ingredients: vec![
                Ingredient::new("Chickpeas", 400.0, "g"),
                Ingredient::new("Sweet potato", 1.0, "large"),
                Ingredient::new("Avocado", 1.0, "piece"),
                Ingredient::new("Kale", 100.0, "g"),
                Ingredient::new("Tahini", 3.0, "tbsp"),
                Ingredient::new("Lemon juice", 2.0, "tbsp"),
            ],
            instructions: vec![
                "Cube sweet potato and toss with olive oil, salt, and pepper".to_string(),
                "Roast sweet potato and chickpeas for 25-30 minutes".to_string(),
                "Mix tahini with lemon juice and water to make dressing".to_string(),
                "Assemble bowls and drizzle with tahini dressing".to_string(),
            ],
            nutritional_info: NutritionalInfo {
                calories: 480.0,
                protein: 16.0,
                carbohydrates: 58.0,
                fat: 22.0,
                fiber: 15.0,
                sugar: 10.0,
                sodium: 280.0,
            },
            tags: vec![
                "Vegan".to_string(),
                "Healthy".to_string(),
                "Lunch".to_string(),
            ],
            dietary_preferences: vec![
                DietaryPreference::Vegan,
                DietaryPreference::Vegetarian,
                DietaryPreference::GlutenFree,
            ],
            ..Default::default()
        },
        Recipe {
            name: "Greek Salad".to_string(),
            description: "Fresh Mediterranean salad with tomatoes, cucumber, feta cheese, and olives"
                .to_string(),
            cuisine: "Greek".to_string(),
            prep_time: 15,
            cook_time: 0,
            difficulty: Difficulty::Easy,
            servings: 2,
            ingredients: vec![
                Ingredient::new("Tomatoes", 3.0, "large"),
                Ingredient::new("Cucumber", 1.0, "large"),
                Ingredient::new("Feta cheese", 150.0, "g"),
                Ingredient::new("Kalamata olives", 100.0, "g"),
                Ingredient::new("Olive oil", 3.0, "tbsp"),
            ],
            instructions: vec![
                "Chop tomatoes and cucumber into chunks".to_string(),
                "Add olives and crumbled feta cheese".to_string(),
                "Drizzle with olive oil, season, and toss gently".to_string(),
            ],
            nutritional_info: NutritionalInfo {
                calories: 320.0,
                protein: 12.0,
                carbohydrates: 15.0,
                fat: 25.0,
                fiber: 4.0,
                sugar: 8.0,
                sodium: 680.0,
            },
            tags: vec![
                "Salad".to_string(),
                "Quick".to_string(),
                "Lunch".to_string(),
            ],
            dietary_preferences: vec![
                DietaryPreference::Vegetarian,
                DietaryPreference::GlutenFree,
                DietaryPreference::LowCarb,
            ],
            ..Default::default()
        },
        Recipe {
            name: "Keto Avocado Egg Breakfast".to_string(),
            description: "Low-carb breakfast with baked eggs in avocado halves".to_string(),
            cuisine: "American".to_string(),
            prep_time: 5,
            cook_time: 15,
            difficulty: Difficulty::Easy,
            servings: 2,
            ingredients: vec![
                Ingredient::new("Avocados", 2.0, "large"),
                Ingredient::new("Eggs", 4.0, "piece"),
                Ingredient::new("Bacon", 4.0, "strips"),
                Ingredient::new("Cheddar cheese", 50.0, "g"),
            ],
            instructions: vec![
                "Cut avocados in half and remove pits".to_string(),
                "Crack an egg into each avocado half".to_string(),
                "Bake for 15 minutes until eggs are set".to_string(),
                "Top with cheese and crispy bacon".to_string(),
            ],
            nutritional_info: NutritionalInfo {
                calories: 450.0,
                protein: 24.0,
                carbohydrates: 12.0,
                fat: 36.0,
                fiber: 7.0,
                sugar: 1.0,
                sodium: 520.0,
            },
            tags: vec![
                "Breakfast".to_string(),
                "Keto".to_string(),
                "Low-Carb".to_string(),
            ],
            dietary_preferences: vec![
                DietaryPreference::Keto,
                DietaryPreference::LowCarb,
                DietaryPreference::GlutenFree,
            ],
            ..Default::default()
        },
    ]
}

fn sample_restaurants(near: Coordinates) -> Vec<Restaurant> {
    vec![
        Restaurant {
            name: "The Green Kitchen".to_string(),
            description: "Farm-to-table restaurant specializing in organic, locally-sourced ingredients"
                .to_string(),
            cuisine: "Contemporary".to_string(),
            address: "123 Main Street".to_string(),
            coordinates: Coordinates::new(near.latitude + 0.001, near.longitude + 0.001),
            phone: Some("+1 (555) 123-4567".to_string()),
            website: Some("https://thegreenkitchen.example.com".to_string()),
            rating: 4.7,
            price_level: PriceLevel::Moderate,
            menu_items: vec![
                MenuItem {
                    name: "Quinoa Power Bowl".to_string(),
                    description: "Mixed greens, roasted vegetables, and tahini dressing".to_string(),
                    price: 14.99,
                    nutritional_info: Some(NutritionalInfo {
                        calories: 420.0,
                        protein: 14.0,
                        carbohydrates: 52.0,
                        fat: 18.0,
                        fiber: 12.0,
                        sugar: 8.0,
                        sodium: 340.0,
                    }),
                    dietary_preferences: vec![
                        DietaryPreference::Vegan,
                        DietaryPreference::Vegetarian,
                        DietaryPreference::GlutenFree,
                    ],
                    ..Default::default()
                },
                MenuItem {
                    name: "Grilled Chicken Salad".to_string(),
                    description: "Free-range chicken breast with seasonal greens".to_string(),
                    price: 16.99,
                    nutritional_info: Some(NutritionalInfo {
                        calories: 380.0,
                        protein: 42.0,
                        carbohydrates: 15.0,
                        fat: 16.0,
                        fiber: 6.0,
                        sugar: 5.0,
                        sodium: 420.0,
                    }),
                    dietary_preferences: vec![
                        DietaryPreference::GlutenFree,
                        DietaryPreference::HighProtein,
                    ],
                    ..Default::default()
                },
            ],
            opening_hours: vec![
                "Mon-Fri: 11:00 AM - 10:00 PM".to_string(),
                "Sat-Sun: 10:00 AM - 11:00 PM".to_string(),
            ],
            ..Default::default()
        },
        Restaurant {
            name: "Spice Route".to_string(),
            description: "Authentic Indian cuisine with a modern twist".to_string(),
            cuisine: "Indian".to_string(),
            address: "456 Oak Avenue".to_string(),
            coordinates: Coordinates::new(near.latitude - 0.002, near.longitude + 0.003),
            phone: Some("+1 (555) 234-5678".to_string()),
            website: Some("https://spiceroute.example.com".to_string()),
            rating: 4.5,
            price_level: PriceLevel::Moderate,
            menu_items: vec![
                MenuItem {
                    name: "Vegetable Curry".to_string(),
                    description: "Mixed vegetables in aromatic curry sauce".to_string(),
                    price: 13.99,
                    nutritional_info: Some(NutritionalInfo {
                        calories: 340.0,
                        protein: 10.0,
                        carbohydrates: 45.0,
                        fat: 14.0,
                        fiber: 8.0,
                        sugar: 12.0,
                        sodium: 680.0,
                    }),
                    dietary_preferences: vec![
                        DietaryPreference::Vegan,
                        DietaryPreference::Vegetarian,
                        DietaryPreference::GlutenFree,
                    ],
                    ..Default::default()
                },
                MenuItem {
                    name: "Tandoori Chicken".to_string(),
                    description: "Clay oven-roasted chicken with traditional spices".to_string(),
                    price: 17.99,
                    nutritional_info: Some(NutritionalInfo {
                        calories: 420.0,
                        protein: 48.0,
                        carbohydrates: 8.0,
                        fat: 20.0,
                        fiber: 2.0,
                        sugar: 4.0,
                        sodium: 820.0,
                    }),
                    dietary_preferences: vec![
                        DietaryPreference::GlutenFree,
                        DietaryPreference::HighProtein,
                    ],
                    ..Default::default()
                },
            ],
            opening_hours: vec!["Daily: 12:00 PM - 10:00 PM".to_string()],
            ..Default::default()
        },
        Restaurant {
            name: "Mediterranean Breeze".to_string(),
            description: "Fresh Mediterranean flavors in a cozy atmosphere".to_string(),
            cuisine: "Mediterranean".to_string(),
            address: "789 Elm Street".to_string(),
            coordinates: Coordinates::new(near.latitude + 0.003, near.longitude - 0.002),
            phone: Some("+1 (555) 345-6789".to_string()),
            rating: 4.8,
            price_level: PriceLevel::Expensive,
            menu_items: vec![
                MenuItem {
                    name: "Grilled Sea Bass".to_string(),
                    description: "Whole sea bass with lemon and herbs".to_string(),
                    price: 28.99,
                    nutritional_info: Some(NutritionalInfo {
                        calories: 380.0,
                        protein: 46.0,
                        carbohydrates: 5.0,
                        fat: 18.0,
                        fiber: 1.0,
                        sugar: 2.0,
                        sodium: 420.0,
                    }),
                    dietary_preferences: vec![
                        DietaryPreference::GlutenFree,
                        DietaryPreference::HighProtein,
                    ],
                    ..Default::default()
                },
                MenuItem {
                    name: "Falafel Platter".to_string(),
                    description: "Crispy falafel with hummus and tabbouleh".to_string(),
                    price: 15.99,
                    nutritional_info: Some(NutritionalInfo {
                        calories: 460.0,
                        protein: 16.0,
                        carbohydrates: 52.0,
                        fat: 22.0,
                        fiber: 12.0,
                        sugar: 6.0,
                        sodium: 680.0,
                    }),
                    dietary_preferences: vec![
                        DietaryPreference::Vegan,
                        DietaryPreference::Vegetarian,
                    ],
                    ..Default::default()
                },
            ],
            opening_hours: vec![
                "Tue-Sun: 5:00 PM - 11:00 PM".to_string(),
                "Closed Monday".to_string(),
            ],
            ..Default::default()
        },
    ]
}
