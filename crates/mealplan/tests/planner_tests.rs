use std::sync::Arc;

use gastronomia_mealplan::{CreatePlanInput, MealPlanner, PlanError, PLANS_KEY};
use gastronomia_shared::{Ingredient, MealType, NutritionalInfo, Recipe};
use gastronomia_store::{KeyValueStore, MemoryStore};
use time::macros::datetime;
use time::OffsetDateTime;

fn week_input(name: &str) -> CreatePlanInput {
    CreatePlanInput {
        name: name.to_string(),
        start_date: datetime!(2026-03-02 00:00:00 UTC),
        end_date: datetime!(2026-03-08 00:00:00 UTC),
    }
}

fn salmon_recipe() -> Recipe {
    Recipe {
        name: "Grilled Salmon".to_string(),
        servings: 2,
        ingredients: vec![
            Ingredient::new("Salmon", 150.0, "g"),
            Ingredient::new("Quinoa", 1.0, "cup"),
        ],
        nutritional_info: NutritionalInfo {
            calories: 300.0,
            ..NutritionalInfo::ZERO
        },
        ..Default::default()
    }
}

fn salad_recipe() -> Recipe {
    Recipe {
        name: "Greek Salad".to_string(),
        servings: 2,
        ingredients: vec![
            Ingredient::new("Salmon", 150.0, "g"),
            Ingredient::new("Tomatoes", 3.0, "large"),
        ],
        nutritional_info: NutritionalInfo {
            calories: 200.0,
            ..NutritionalInfo::ZERO
        },
        ..Default::default()
    }
}

const NOON: OffsetDateTime = datetime!(2026-03-03 12:00:00 UTC);

#[tokio::test]
async fn create_plan_sets_it_current_and_persists() {
    let store = Arc::new(MemoryStore::new());
    let mut planner = MealPlanner::new(store.clone());

    let plan = planner.create_plan(week_input("Week 1")).await.unwrap();
    assert_eq!(planner.current_plan().unwrap().id, plan.id);
    assert!(planner.shopping_list().is_empty());
    assert!(store.get(PLANS_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn create_plan_rejects_empty_names_and_inverted_ranges() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));

    let err = planner.create_plan(week_input("")).await.unwrap_err();
    assert!(matches!(err, PlanError::Validation(_)));

    let inverted = CreatePlanInput {
        name: "Backwards".to_string(),
        start_date: datetime!(2026-03-08 00:00:00 UTC),
        end_date: datetime!(2026-03-02 00:00:00 UTC),
    };
    let err = planner.create_plan(inverted).await.unwrap_err();
    assert!(matches!(err, PlanError::InvalidDateRange));
    assert!(planner.plans().is_empty());
}

#[tokio::test]
async fn mutating_without_a_current_plan_is_a_precondition_failure() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));

    let err = planner
        .add_meal(salmon_recipe(), NOON, MealType::Lunch)
        .await
        .unwrap_err();
    assert!(matches!(err, PlanError::NoCurrentPlan));
}

#[tokio::test]
async fn adding_meals_rederives_the_shopping_list() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));
    planner.create_plan(week_input("Week 1")).await.unwrap();

    planner
        .add_meal(salmon_recipe(), NOON, MealType::Lunch)
        .await
        .unwrap();
    planner
        .add_meal(salad_recipe(), NOON, MealType::Dinner)
        .await
        .unwrap();

    let list = planner.shopping_list();
    let salmon = list.iter().find(|i| i.name == "Salmon").unwrap();
    assert_eq!(salmon.amount, 300.0);
    assert_eq!(list.len(), 3);
}

#[tokio::test]
async fn removing_the_only_meal_empties_the_shopping_list() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));
    planner.create_plan(week_input("Week 1")).await.unwrap();

    let meal = planner
        .add_meal(salmon_recipe(), NOON, MealType::Lunch)
        .await
        .unwrap();
    assert!(!planner.shopping_list().is_empty());

    planner.remove_meal(meal.id).await.unwrap();
    assert!(planner.shopping_list().is_empty());
    assert!(planner.current_plan().unwrap().meals.is_empty());
}

#[tokio::test]
async fn removing_an_unknown_meal_is_a_no_op() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));
    planner.create_plan(week_input("Week 1")).await.unwrap();
    planner
        .add_meal(salmon_recipe(), NOON, MealType::Lunch)
        .await
        .unwrap();

    planner.remove_meal(uuid::Uuid::new_v4()).await.unwrap();
    assert_eq!(planner.current_plan().unwrap().meals.len(), 1);
}

#[tokio::test]
async fn toggled_items_keep_their_state_across_a_structural_change() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));
    planner.create_plan(week_input("Week 1")).await.unwrap();
    planner
        .add_meal(salmon_recipe(), NOON, MealType::Lunch)
        .await
        .unwrap();

    let salmon_id = planner
        .shopping_list()
        .iter()
        .find(|i| i.name == "Salmon")
        .unwrap()
        .id;
    planner.toggle_purchased(salmon_id);
    assert!(planner
        .shopping_list()
        .iter()
        .any(|i| i.id == salmon_id && i.is_purchased));

    // Structural change: salmon stays in the plan, tomatoes are new.
    planner
        .add_meal(salad_recipe(), NOON, MealType::Dinner)
        .await
        .unwrap();

    let list = planner.shopping_list();
    let salmon = list.iter().find(|i| i.name == "Salmon").unwrap();
    assert!(salmon.is_purchased);
    assert_eq!(salmon.id, salmon_id);
    assert!(!list.iter().find(|i| i.name == "Tomatoes").unwrap().is_purchased);
}

#[tokio::test]
async fn meals_for_date_filters_and_orders_by_meal_type() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));
    planner.create_plan(week_input("Week 1")).await.unwrap();

    planner
        .add_meal(salad_recipe(), datetime!(2026-03-03 19:00:00 UTC), MealType::Snack)
        .await
        .unwrap();
    planner
        .add_meal(salmon_recipe(), datetime!(2026-03-03 18:00:00 UTC), MealType::Dinner)
        .await
        .unwrap();
    planner
        .add_meal(salmon_recipe(), datetime!(2026-03-03 08:00:00 UTC), MealType::Breakfast)
        .await
        .unwrap();
    planner
        .add_meal(salad_recipe(), datetime!(2026-03-04 12:00:00 UTC), MealType::Lunch)
        .await
        .unwrap();

    let day = planner.meals_for_date(datetime!(2026-03-03 00:00:00 UTC));
    let types: Vec<MealType> = day.iter().map(|m| m.meal_type).collect();
    assert_eq!(
        types,
        vec![MealType::Breakfast, MealType::Dinner, MealType::Snack]
    );
}

#[tokio::test]
async fn nutrition_for_date_sums_that_day_only() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));
    planner.create_plan(week_input("Week 1")).await.unwrap();

    planner
        .add_meal(salmon_recipe(), NOON, MealType::Lunch)
        .await
        .unwrap();
    planner
        .add_meal(salad_recipe(), NOON, MealType::Dinner)
        .await
        .unwrap();
    planner
        .add_meal(salad_recipe(), datetime!(2026-03-04 12:00:00 UTC), MealType::Lunch)
        .await
        .unwrap();

    assert_eq!(planner.nutrition_for_date(NOON).calories, 500.0);
    assert_eq!(
        planner
            .nutrition_for_date(datetime!(2026-03-05 12:00:00 UTC))
            .calories,
        0.0
    );
}

#[tokio::test]
async fn restore_round_trips_plans_through_the_store() {
    let store = Arc::new(MemoryStore::new());

    let mut planner = MealPlanner::new(store.clone());
    planner.create_plan(week_input("Week 1")).await.unwrap();
    planner
        .add_meal(salmon_recipe(), NOON, MealType::Lunch)
        .await
        .unwrap();
    let original = planner.current_plan().unwrap().clone();

    let restored = MealPlanner::restore(store).await;
    assert_eq!(restored.plans().len(), 1);
    assert_eq!(restored.current_plan().unwrap(), &original);
    assert_eq!(restored.shopping_list().len(), 2);
}

#[tokio::test]
async fn restore_recovers_from_corrupt_state() {
    let store = Arc::new(MemoryStore::new());
    store
        .put(PLANS_KEY, b"not json at all".to_vec())
        .await
        .unwrap();

    let planner = MealPlanner::restore(store).await;
    assert!(planner.plans().is_empty());
    assert!(planner.current_plan().is_none());
}

#[tokio::test]
async fn snapshots_are_published_on_every_change() {
    let mut planner = MealPlanner::new(Arc::new(MemoryStore::new()));
    let mut rx = planner.subscribe();

    planner.create_plan(week_input("Week 1")).await.unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().current_plan.is_some());

    planner
        .add_meal(salmon_recipe(), NOON, MealType::Lunch)
        .await
        .unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().shopping_list.len(), 2);
}
