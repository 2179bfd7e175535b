use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

time::serde::format_description!(plan_date, Date, "[year]-[month]-[day]");

/// Nutritional objective picked during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintain,
    Energy,
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietType {
    Omnivore,
    Vegetarian,
    Vegan,
    Pescatarian,
    Keto,
    Paleo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Athlete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Allergy {
    Nuts,
    Peanuts,
    Dairy,
    Gluten,
    Shellfish,
    Eggs,
    Soy,
    Fish,
}

impl Allergy {
    pub const ALL: [Allergy; 8] = [
        Allergy::Nuts,
        Allergy::Peanuts,
        Allergy::Dairy,
        Allergy::Gluten,
        Allergy::Shellfish,
        Allergy::Eggs,
        Allergy::Soy,
        Allergy::Fish,
    ];
}

/// Shared by the user's budget preference and a food's cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceTier {
    Budget,
    #[default]
    Moderate,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub cuisines: BTreeSet<String>,
    #[serde(default)]
    pub budget: PriceTier,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub age: Option<u32>,
    /// Kilograms.
    pub weight: Option<f64>,
    /// Centimetres.
    pub height: Option<f64>,
    pub gender: Option<Gender>,
}

/// Everything the engine knows about the person it plans for.
///
/// Enumerated fields stay `None` until onboarding fills them in; every engine
/// function treats a missing value as its documented default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub diet_type: Option<DietType>,
    #[serde(default)]
    pub allergies: BTreeSet<Allergy>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

/// Catalog entry. Reference data, never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub meal_type: MealType,
    pub emoji: String,
    pub description: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(default)]
    pub fiber: f64,
    pub prep_time: u32,
    pub diet_types: Vec<DietType>,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    pub cost: PriceTier,
}

impl FoodItem {
    /// Stand-in used when the catalog has nothing at all for a slot.
    pub fn placeholder(meal_type: MealType) -> Self {
        Self {
            id: format!("placeholder-{}", meal_type.as_str()),
            name: "Chef's choice".into(),
            meal_type,
            emoji: "🍽️".into(),
            description: "Pick any balanced option you have at hand.".into(),
            calories: 0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            fiber: 0.0,
            prep_time: 0,
            diet_types: Vec::new(),
            ingredients: Vec::new(),
            cuisines: Vec::new(),
            cost: PriceTier::Budget,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(flatten)]
    pub food: FoodItem,
    pub time: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(default)]
    pub fiber: f64,
}

impl NutrientTotals {
    pub fn add(&mut self, food: &FoodItem) {
        self.calories += food.calories;
        self.protein += food.protein;
        self.carbs += food.carbs;
        self.fats += food.fats;
        self.fiber += food.fiber;
    }

    pub fn of<'a>(foods: impl IntoIterator<Item = &'a FoodItem>) -> Self {
        foods.into_iter().fold(Self::default(), |mut acc, food| {
            acc.add(food);
            acc
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTargets {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl PlanTargets {
    pub fn new(calories: u32, macros: MacroTargets) -> Self {
        Self {
            calories,
            protein: macros.protein,
            carbs: macros.carbs,
            fats: macros.fats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(with = "plan_date")]
    pub date: Date,
    pub meals: Vec<Meal>,
    pub totals: NutrientTotals,
    pub targets: PlanTargets,
}

/// Percentages in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub calories: u8,
    pub protein: u8,
    pub carbs: u8,
    pub fats: u8,
}
