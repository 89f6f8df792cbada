use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::watch;
use uuid::Uuid;
use validator::Validate;

use gastronomia_shared::{
    same_calendar_day, MealPlan, MealType, NutritionalInfo, PlannedMeal, Recipe, ShoppingItem,
};
use gastronomia_shopping::aggregate_with_previous;
use gastronomia_store::KeyValueStore;

use crate::error::{PlanError, PlanResult};
use crate::nutrition::total_nutrition;

/// Fixed store key for the serialized plan collection.
pub const PLANS_KEY: &str = "meal_plans";

#[derive(Debug, Clone, Validate)]
pub struct CreatePlanInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
}

/// Immutable view of the planner state, published on every change.
#[derive(Debug, Clone, Default)]
pub struct PlannerSnapshot {
    pub plans: Vec<MealPlan>,
    pub current_plan: Option<MealPlan>,
    pub shopping_list: Vec<ShoppingItem>,
}

/// Owns the plan collection and the current plan, applies mutations as
/// functional updates, re-derives the shopping list, and persists after
/// every mutation.
pub struct MealPlanner {
    store: Arc<dyn KeyValueStore>,
    plans: Vec<MealPlan>,
    current_id: Option<Uuid>,
    shopping_list: Vec<ShoppingItem>,
    snapshot_tx: watch::Sender<PlannerSnapshot>,
}

impl MealPlanner {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (snapshot_tx, _) = watch::channel(PlannerSnapshot::default());
        Self {
            store,
            plans: Vec::new(),
            current_id: None,
            shopping_list: Vec::new(),
            snapshot_tx,
        }
    }

    /// Restore the persisted plan collection and select the first plan as
    /// current. Missing state starts empty; unreadable state is discarded
    /// with a warning rather than propagated.
    pub async fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let mut planner = Self::new(store);

        match planner.store.get(PLANS_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<MealPlan>>(&bytes) {
                Ok(plans) => {
                    planner.current_id = plans.first().map(|plan| plan.id);
                    planner.plans = plans;
                    planner.rederive_shopping_list();
                }
                Err(err) => {
                    tracing::warn!(%err, "discarding unreadable meal plan state");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%err, "meal plan state unavailable, starting empty");
            }
        }

        planner.publish();
        planner
    }

    pub fn plans(&self) -> &[MealPlan] {
        &self.plans
    }

    pub fn current_plan(&self) -> Option<&MealPlan> {
        let current_id = self.current_id?;
        self.plans.iter().find(|plan| plan.id == current_id)
    }

    pub fn shopping_list(&self) -> &[ShoppingItem] {
        &self.shopping_list
    }

    /// Receiver for state snapshots; one value per applied change.
    pub fn subscribe(&self) -> watch::Receiver<PlannerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_plan(&mut self, input: CreatePlanInput) -> PlanResult<MealPlan> {
        input.validate()?;
        if input.end_date < input.start_date {
            return Err(PlanError::InvalidDateRange);
        }

        let plan = MealPlan::new(input.name, input.start_date, input.end_date);
        self.plans.push(plan.clone());
        self.current_id = Some(plan.id);
        self.rederive_shopping_list();
        self.persist().await;
        self.publish();

        tracing::info!(plan_id = %plan.id, "created meal plan");
        Ok(plan)
    }

    #[tracing::instrument(skip(self, recipe), fields(recipe = %recipe.name))]
    pub async fn add_meal(
        &mut self,
        recipe: Recipe,
        date: OffsetDateTime,
        meal_type: MealType,
    ) -> PlanResult<PlannedMeal> {
        let Some(current) = self.current_plan().cloned() else {
            tracing::warn!("add_meal invoked with no current plan");
            return Err(PlanError::NoCurrentPlan);
        };

        let meal = PlannedMeal::new(date, meal_type, recipe);
        let mut meals = current.meals.clone();
        meals.push(meal.clone());

        self.replace_plan(current.with_meals(meals));
        self.rederive_shopping_list();
        self.persist().await;
        self.publish();

        Ok(meal)
    }

    /// Remove a planned meal by id; absent ids are a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn remove_meal(&mut self, meal_id: Uuid) -> PlanResult<()> {
        let Some(current) = self.current_plan().cloned() else {
            tracing::warn!("remove_meal invoked with no current plan");
            return Err(PlanError::NoCurrentPlan);
        };

        let mut meals = current.meals.clone();
        meals.retain(|meal| meal.id != meal_id);

        self.replace_plan(current.with_meals(meals));
        self.rederive_shopping_list();
        self.persist().await;
        self.publish();

        Ok(())
    }

    /// Flip the purchased flag on the in-memory derived list. The flag
    /// survives re-aggregation for keys that remain; items that drop out and
    /// come back start unpurchased.
    pub fn toggle_purchased(&mut self, item_id: Uuid) {
        let Some(item) = self
            .shopping_list
            .iter_mut()
            .find(|item| item.id == item_id)
        else {
            return;
        };
        item.is_purchased = !item.is_purchased;
        self.publish();
    }

    /// The current plan's meals on the given calendar day, in meal-type
    /// order (Breakfast, Lunch, Dinner, Snack).
    pub fn meals_for_date(&self, date: OffsetDateTime) -> Vec<PlannedMeal> {
        let Some(plan) = self.current_plan() else {
            return Vec::new();
        };

        let mut meals: Vec<PlannedMeal> = plan
            .meals
            .iter()
            .filter(|meal| same_calendar_day(meal.date, date))
            .cloned()
            .collect();
        meals.sort_by_key(|meal| meal.meal_type.priority());
        meals
    }

    /// Total nutrition of the given day's meals.
    pub fn nutrition_for_date(&self, date: OffsetDateTime) -> NutritionalInfo {
        total_nutrition(&self.meals_for_date(date))
    }

    fn replace_plan(&mut self, updated: MealPlan) {
        if let Some(slot) = self.plans.iter_mut().find(|plan| plan.id == updated.id) {
            *slot = updated;
        }
    }

    fn rederive_shopping_list(&mut self) {
        let meals = self
            .current_plan()
            .map(|plan| plan.meals.clone())
            .unwrap_or_default();
        self.shopping_list = aggregate_with_previous(&meals, &self.shopping_list);
    }

    /// Persist the whole plan collection under [`PLANS_KEY`]. Failures are
    /// logged, not propagated; the in-memory state is already updated and
    /// the next mutation writes again.
    async fn persist(&self) {
        let payload = match serde_json::to_vec(&self.plans) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(%err, "failed to encode meal plans");
                return;
            }
        };

        if let Err(err) = self.store.put(PLANS_KEY, payload).await {
            tracing::warn!(%err, "failed to persist meal plans");
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(PlannerSnapshot {
            plans: self.plans.clone(),
            current_plan: self.current_plan().cloned(),
            shopping_list: self.shopping_list.clone(),
        });
    }
}
