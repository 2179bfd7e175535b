use super::model::{NutrientTotals, PlanTargets, Progress};

/// `consumed / target` as a whole percentage clamped to `0..=100`.
/// A zero target counts as 0%.
fn percent(consumed: f64, target: f64) -> u8 {
    if target <= 0.0 || !consumed.is_finite() {
        return 0;
    }
    (consumed / target * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn calculate_progress(consumed: &NutrientTotals, targets: &PlanTargets) -> Progress {
    Progress {
        calories: percent(consumed.calories as f64, targets.calories as f64),
        protein: percent(consumed.protein, targets.protein as f64),
        carbs: percent(consumed.carbs, targets.carbs as f64),
        fats: percent(consumed.fats, targets.fats as f64),
    }
}
