use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use gastronomia_catalog::RestaurantCatalogSource;
use gastronomia_shared::{Coordinates, Debouncer, PriceLevel, Restaurant};

use crate::filter::{filter_restaurants, RestaurantFilter};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Fallback search location (San Francisco) when the caller has no fix yet.
pub const DEFAULT_LOCATION: Coordinates = Coordinates {
    latitude: 37.7749,
    longitude: -122.4194,
};

/// Snapshot of the finder state, published on every change.
#[derive(Debug, Clone, Default)]
pub struct RestaurantListState {
    pub restaurants: Vec<Restaurant>,
    pub filtered: Vec<Restaurant>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Finds nearby restaurants with debounced multi-criteria filtering. Must be
/// created inside a tokio runtime.
pub struct RestaurantFinder {
    source: Arc<dyn RestaurantCatalogSource>,
    state: Arc<watch::Sender<RestaurantListState>>,
    filter: RestaurantFilter,
    debouncer: Debouncer<RestaurantFilter>,
}

impl RestaurantFinder {
    pub fn new(source: Arc<dyn RestaurantCatalogSource>) -> Self {
        Self::with_debounce(source, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(source: Arc<dyn RestaurantCatalogSource>, window: Duration) -> Self {
        let state = Arc::new(watch::channel(RestaurantListState::default()).0);
        let debouncer = {
            let state = state.clone();
            Debouncer::spawn(RestaurantFilter::default(), window, move |filter| {
                let state = state.clone();
                async move {
                    state.send_modify(|current| {
                        current.filtered = filter_restaurants(&current.restaurants, &filter);
                    });
                }
            })
        };

        Self {
            source,
            state,
            filter: RestaurantFilter::default(),
            debouncer,
        }
    }

    /// Fetch restaurants near the given coordinates. On failure the error
    /// message is surfaced unchanged and previously loaded data stays.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, near: Coordinates) {
        self.state.send_modify(|current| {
            current.is_loading = true;
            current.error = None;
        });

        match self.source.fetch_all(near).await {
            Ok(restaurants) => {
                tracing::info!(count = restaurants.len(), "restaurant catalog loaded");
                self.state.send_modify(|current| {
                    current.is_loading = false;
                    current.filtered = restaurants.clone();
                    current.restaurants = restaurants;
                });
            }
            Err(err) => {
                tracing::warn!(%err, "restaurant catalog fetch failed");
                self.state.send_modify(|current| {
                    current.is_loading = false;
                    current.error = Some(err.to_string());
                });
            }
        }
    }

    /// [`load`](Self::load) at the fallback location.
    pub async fn load_default(&self) {
        self.load(DEFAULT_LOCATION).await;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.apply();
    }

    pub fn set_cuisine(&mut self, cuisine: impl Into<String>) {
        self.filter.cuisine = cuisine.into();
        self.apply();
    }

    pub fn set_price_level(&mut self, price_level: Option<PriceLevel>) {
        self.filter.price_level = price_level;
        self.apply();
    }

    pub fn clear_filters(&mut self) {
        self.filter = RestaurantFilter::default();
        self.apply();
    }

    fn apply(&self) {
        self.debouncer.submit(self.filter.clone());
    }

    pub fn filter(&self) -> &RestaurantFilter {
        &self.filter
    }

    pub fn snapshot(&self) -> RestaurantListState {
        self.state.borrow().clone()
    }

    /// Receiver for state snapshots; one value per applied change.
    pub fn subscribe(&self) -> watch::Receiver<RestaurantListState> {
        self.state.subscribe()
    }

    /// Distinct cuisines of the unfiltered collection, sorted ascending.
    pub fn cuisines(&self) -> Vec<String> {
        let mut cuisines: Vec<String> = self
            .state
            .borrow()
            .restaurants
            .iter()
            .map(|restaurant| restaurant.cuisine.clone())
            .collect();
        cuisines.sort();
        cuisines.dedup();
        cuisines
    }
}
