use serde::{Deserialize, Serialize};

use crate::nutrition::model::{FoodItem, MealType, NutrientTotals, PlanTargets, Progress};

#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    /// Local hour 0-23; the server's local hour when absent.
    pub hour: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub consumed: NutrientTotals,
    pub targets: PlanTargets,
    pub progress: Progress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub food_id: String,
    pub consumed: bool,
    pub progress: Progress,
}

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub tip: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub slot: MealType,
    pub items: Vec<FoodItem>,
}
