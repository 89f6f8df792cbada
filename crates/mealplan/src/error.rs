use thiserror::Error;

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("plan end date precedes start date")]
    InvalidDateRange,

    /// A mutating operation was invoked with no current plan. Caller bug;
    /// surfaced as an error instead of a crash.
    #[error("no meal plan is currently selected")]
    NoCurrentPlan,
}
