mod sample;

pub use sample::StaticCatalog;

use async_trait::async_trait;
use thiserror::Error;

use gastronomia_shared::{
    contains_ignore_case, overlaps, Coordinates, DietaryPreference, Recipe, Restaurant,
};

#[derive(Error, Debug)]
pub enum FetchError {
    /// The source was unreachable or errored; the message is surfaced to the
    /// caller unchanged.
    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait RecipeCatalogSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Recipe>, FetchError>;
}

#[async_trait]
pub trait RestaurantCatalogSource: Send + Sync {
    async fn fetch_all(&self, near: Coordinates) -> Result<Vec<Restaurant>, FetchError>;
}

/// API-style recipe search: matches the query against name and cuisine only
/// (the list-view filter additionally matches descriptions), plus the usual
/// dietary-preference overlap.
pub async fn search_recipes(
    source: &dyn RecipeCatalogSource,
    query: &str,
    dietary_preferences: &[DietaryPreference],
) -> Result<Vec<Recipe>, FetchError> {
    let recipes = source.fetch_all().await?;

    Ok(recipes
        .into_iter()
        .filter(|recipe| {
            let matches_query = query.is_empty()
                || contains_ignore_case(&recipe.name, query)
                || contains_ignore_case(&recipe.cuisine, query);
            let matches_diet = dietary_preferences.is_empty()
                || overlaps(&recipe.dietary_preferences, dietary_preferences);
            matches_query && matches_diet
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn search_matches_name_and_cuisine_but_not_description() {
        let catalog = StaticCatalog::with_latency(Duration::ZERO);

        let by_name = search_recipes(&catalog, "salmon", &[]).await.unwrap();
        assert!(by_name.iter().all(|r| r.name.contains("Salmon")));
        assert!(!by_name.is_empty());

        // "roasted" appears only in descriptions; the API search ignores it.
        let by_description = search_recipes(&catalog, "roasted", &[]).await.unwrap();
        assert!(by_description.is_empty());
    }

    #[tokio::test]
    async fn search_applies_dietary_overlap() {
        let catalog = StaticCatalog::with_latency(Duration::ZERO);

        let vegan = search_recipes(&catalog, "", &[DietaryPreference::Vegan])
            .await
            .unwrap();
        assert!(!vegan.is_empty());
        assert!(vegan
            .iter()
            .all(|r| r.dietary_preferences.contains(&DietaryPreference::Vegan)));
    }
}
