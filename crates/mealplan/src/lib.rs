mod error;
mod nutrition;
mod planner;

pub use error::{PlanError, PlanResult};
pub use nutrition::*;
pub use planner::*;
