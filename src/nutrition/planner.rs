use std::collections::BTreeSet;

use rand::Rng;
use time::Date;
use tracing::{debug, warn};

use super::calories::calculate_daily_calories;
use super::filter::filter_foods;
use super::macros::calculate_macro_targets;
use super::model::{FoodItem, Meal, MealPlan, MealType, NutrientTotals, PlanTargets, UserProfile};
use super::scorer::{rank, select_best_food};
use crate::catalog::FoodCatalog;

/// Order in which meals appear in a plan.
pub const SLOT_ORDER: [MealType; 4] = [
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Snack,
    MealType::Dinner,
];

pub const MAX_QUICK_SUGGESTIONS: usize = 4;
pub const MAX_ALTERNATIVES: usize = 3;

impl MealType {
    /// Share of the daily calorie target given to this slot.
    pub fn calorie_share(self) -> f64 {
        match self {
            MealType::Breakfast => 0.25,
            MealType::Lunch => 0.35,
            MealType::Dinner => 0.30,
            MealType::Snack => 0.10,
        }
    }

    pub fn time_label(self) -> &'static str {
        match self {
            MealType::Breakfast => "8:00 AM",
            MealType::Lunch => "12:30 PM",
            MealType::Snack => "4:00 PM",
            MealType::Dinner => "7:00 PM",
        }
    }

    /// Slot matching a local hour of day.
    pub fn for_hour(hour: u8) -> Self {
        match hour {
            5..=10 => MealType::Breakfast,
            11..=14 => MealType::Lunch,
            15..=17 => MealType::Snack,
            _ => MealType::Dinner,
        }
    }
}

pub fn slot_target(total_calories: u32, slot: MealType) -> u32 {
    (total_calories as f64 * slot.calorie_share()).round() as u32
}

/// Best-fitting food for a slot, falling back to the first catalog entry of
/// the slot when nothing passes the filter, and to a placeholder when the
/// slot is empty.
pub fn pick_for_slot<R: Rng + ?Sized>(
    profile: &UserProfile,
    catalog: &FoodCatalog,
    slot: MealType,
    target_calories: u32,
    rng: &mut R,
) -> FoodItem {
    let foods = catalog.slot(slot);
    let candidates = filter_foods(foods, profile);
    if let Some(food) = select_best_food(&candidates, profile, target_calories, rng) {
        return food.clone();
    }
    match foods.first() {
        Some(food) => {
            debug!(slot = slot.as_str(), id = %food.id, "no compatible food; using first catalog entry");
            food.clone()
        }
        None => {
            warn!(slot = slot.as_str(), "catalog slot is empty; using placeholder");
            FoodItem::placeholder(slot)
        }
    }
}

/// Builds a full day: targets, one meal per slot, and summed totals.
pub fn generate_daily_meal_plan<R: Rng + ?Sized>(
    profile: &UserProfile,
    catalog: &FoodCatalog,
    date: Date,
    rng: &mut R,
) -> MealPlan {
    let total_calories = calculate_daily_calories(profile);
    let macros = calculate_macro_targets(profile, total_calories);

    let meals: Vec<Meal> = SLOT_ORDER
        .iter()
        .map(|slot| {
            let target = slot_target(total_calories, *slot);
            let mut food = pick_for_slot(profile, catalog, *slot, target, rng);
            food.meal_type = *slot;
            Meal {
                food,
                time: slot.time_label().to_string(),
            }
        })
        .collect();

    let totals = NutrientTotals::of(meals.iter().map(|m| &m.food));
    debug!(
        calories = total_calories,
        planned = totals.calories,
        "meal plan generated"
    );

    MealPlan {
        date,
        meals,
        totals,
        targets: PlanTargets::new(total_calories, macros),
    }
}

/// Other compatible foods for a slot, skipping the one currently planned.
pub fn get_alternatives(
    slot: MealType,
    profile: &UserProfile,
    catalog: &FoodCatalog,
    current_id: Option<&str>,
) -> Vec<FoodItem> {
    filter_foods(catalog.slot(slot), profile)
        .into_iter()
        .filter(|f| Some(f.id.as_str()) != current_id)
        .take(MAX_ALTERNATIVES)
        .cloned()
        .collect()
}

/// Foods for the slot matching `hour`, ranked against that slot's target.
pub fn get_quick_suggestions(
    profile: &UserProfile,
    catalog: &FoodCatalog,
    hour: u8,
) -> Vec<FoodItem> {
    let slot = MealType::for_hour(hour);
    let target = slot_target(calculate_daily_calories(profile), slot);
    let candidates = filter_foods(catalog.slot(slot), profile);
    rank(&candidates, profile, target)
        .into_iter()
        .take(MAX_QUICK_SUGGESTIONS)
        .map(|(food, _)| {
            let mut food = food.clone();
            food.meal_type = slot;
            food
        })
        .collect()
}

/// Nutrients of the plan's meals whose ids are marked consumed.
pub fn consumed_totals(plan: &MealPlan, consumed: &BTreeSet<String>) -> NutrientTotals {
    NutrientTotals::of(
        plan.meals
            .iter()
            .filter(|m| consumed.contains(&m.food.id))
            .map(|m| &m.food),
    )
}
