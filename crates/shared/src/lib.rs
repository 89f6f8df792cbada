mod date;
mod debounce;
mod geo;
mod mealplan;
mod recipe;
mod restaurant;
mod text;

pub use date::*;
pub use debounce::*;
pub use geo::*;
pub use mealplan::*;
pub use recipe::*;
pub use restaurant::*;
pub use text::*;
