use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::sync::watch;

use gastronomia_catalog::RecipeCatalogSource;
use gastronomia_shared::{Debouncer, DietaryPreference, Difficulty, Recipe};

use crate::filter::{filter_recipes, RecipeFilter};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_FEATURED_COUNT: usize = 5;

const QUICK_TOTAL_TIME: u32 = 30;
const HEALTHY_CALORIES: f64 = 500.0;

/// Snapshot of the browser state, published on every change.
#[derive(Debug, Clone, Default)]
pub struct RecipeListState {
    pub recipes: Vec<Recipe>,
    pub filtered: Vec<Recipe>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Browses a recipe catalog with debounced multi-criteria filtering.
///
/// Criteria setters coalesce through a quiet window: a burst of changes
/// produces exactly one recompute of the latest combined state. Must be
/// created inside a tokio runtime.
pub struct RecipeBrowser {
    source: Arc<dyn RecipeCatalogSource>,
    state: Arc<watch::Sender<RecipeListState>>,
    filter: RecipeFilter,
    debouncer: Debouncer<RecipeFilter>,
}

impl RecipeBrowser {
    pub fn new(source: Arc<dyn RecipeCatalogSource>) -> Self {
        Self::with_debounce(source, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(source: Arc<dyn RecipeCatalogSource>, window: Duration) -> Self {
        let state = Arc::new(watch::channel(RecipeListState::default()).0);
        let debouncer = {
            let state = state.clone();
            Debouncer::spawn(RecipeFilter::default(), window, move |filter| {
                let state = state.clone();
                async move {
                    state.send_modify(|current| {
                        current.filtered = filter_recipes(&current.recipes, &filter);
                    });
                }
            })
        };

        Self {
            source,
            state,
            filter: RecipeFilter::default(),
            debouncer,
        }
    }

    /// Fetch the catalog. On success the filtered view resets to the full
    /// collection; on failure the error message is surfaced unchanged and
    /// previously loaded recipes stay.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) {
        self.state.send_modify(|current| {
            current.is_loading = true;
            current.error = None;
        });

        match self.source.fetch_all().await {
            Ok(recipes) => {
                tracing::info!(count = recipes.len(), "recipe catalog loaded");
                self.state.send_modify(|current| {
                    current.is_loading = false;
                    current.filtered = recipes.clone();
                    current.recipes = recipes;
                });
            }
            Err(err) => {
                tracing::warn!(%err, "recipe catalog fetch failed");
                self.state.send_modify(|current| {
                    current.is_loading = false;
                    current.error = Some(err.to_string());
                });
            }
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.apply();
    }

    pub fn set_dietary_preferences(&mut self, preferences: Vec<DietaryPreference>) {
        self.filter.dietary_preferences = preferences;
        self.apply();
    }

    pub fn set_cuisine(&mut self, cuisine: impl Into<String>) {
        self.filter.cuisine = cuisine.into();
        self.apply();
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.filter.difficulty = difficulty;
        self.apply();
    }

    pub fn clear_filters(&mut self) {
        self.filter = RecipeFilter::default();
        self.apply();
    }

    fn apply(&self) {
        self.debouncer.submit(self.filter.clone());
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    pub fn snapshot(&self) -> RecipeListState {
        self.state.borrow().clone()
    }

    /// Receiver for state snapshots; one value per applied change.
    pub fn subscribe(&self) -> watch::Receiver<RecipeListState> {
        self.state.subscribe()
    }

    /// Distinct cuisines of the unfiltered collection, sorted ascending.
    pub fn cuisines(&self) -> Vec<String> {
        let mut cuisines: Vec<String> = self
            .state
            .borrow()
            .recipes
            .iter()
            .map(|recipe| recipe.cuisine.clone())
            .collect();
        cuisines.sort();
        cuisines.dedup();
        cuisines
    }

    /// Recipes ready in 30 minutes or less, quickest first.
    pub fn quick_recipes(&self) -> Vec<Recipe> {
        let mut quick: Vec<Recipe> = self
            .state
            .borrow()
            .recipes
            .iter()
            .filter(|recipe| recipe.total_time() <= QUICK_TOTAL_TIME)
            .cloned()
            .collect();
        quick.sort_by_key(Recipe::total_time);
        quick
    }

    /// Recipes under 500 calories, in source order.
    pub fn healthy_recipes(&self) -> Vec<Recipe> {
        self.state
            .borrow()
            .recipes
            .iter()
            .filter(|recipe| recipe.nutritional_info.calories < HEALTHY_CALORIES)
            .cloned()
            .collect()
    }

    /// A fresh random sample of the collection; re-randomized on each call.
    pub fn featured_recipes(&self, count: usize) -> Vec<Recipe> {
        let mut pool = self.state.borrow().recipes.clone();
        pool.shuffle(&mut rand::rng());
        pool.truncate(count);
        pool
    }
}
