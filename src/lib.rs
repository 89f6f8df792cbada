pub mod config;
pub mod observability;

pub use gastronomia_catalog as catalog;
pub use gastronomia_mealplan as mealplan;
pub use gastronomia_recipe as recipe;
pub use gastronomia_restaurant as restaurant;
pub use gastronomia_shared as shared;
pub use gastronomia_shopping as shopping;
pub use gastronomia_store as store;
