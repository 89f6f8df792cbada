use gastronomia_shared::{
    contains_ignore_case, Coordinates, HealthGoal, MenuItem, PriceLevel, Restaurant,
    METERS_PER_MILE,
};

/// Combined filter criteria for the restaurant list; logical AND, empty
/// criteria pass everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilter {
    /// Case-insensitive substring over name, description, and cuisine.
    pub query: String,
    /// Exact, case-sensitive cuisine match; empty means unset.
    pub cuisine: String,
    pub price_level: Option<PriceLevel>,
}

impl RestaurantFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.cuisine.is_empty() && self.price_level.is_none()
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let matches_query = self.query.is_empty()
            || contains_ignore_case(&restaurant.name, &self.query)
            || contains_ignore_case(&restaurant.description, &self.query)
            || contains_ignore_case(&restaurant.cuisine, &self.query);

        let matches_cuisine = self.cuisine.is_empty() || restaurant.cuisine == self.cuisine;

        let matches_price = self
            .price_level
            .is_none_or(|price| restaurant.price_level == price);

        matches_query && matches_cuisine && matches_price
    }
}

/// Apply the filter, preserving the source collection's order.
pub fn filter_restaurants(restaurants: &[Restaurant], filter: &RestaurantFilter) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| filter.matches(restaurant))
        .cloned()
        .collect()
}

/// Menu items fitting a health goal. Items without nutrition data count as
/// 1000 calories and 0 g protein, so they fail the calorie cut but also the
/// protein one.
pub fn healthy_options(restaurant: &Restaurant, goal: HealthGoal) -> Vec<MenuItem> {
    restaurant
        .menu_items
        .iter()
        .filter(|item| match goal {
            HealthGoal::WeightLoss => {
                item.nutritional_info.map_or(1000.0, |n| n.calories) < 500.0
            }
            HealthGoal::MuscleGain => item.nutritional_info.map_or(0.0, |n| n.protein) > 30.0,
            HealthGoal::Maintenance => true,
            HealthGoal::HealthyEating => !item.dietary_preferences.is_empty(),
        })
        .cloned()
        .collect()
}

/// Distance from a location to the restaurant, in miles.
pub fn distance_miles(restaurant: &Restaurant, from: Coordinates) -> f64 {
    from.distance_meters(&restaurant.coordinates) / METERS_PER_MILE
}
