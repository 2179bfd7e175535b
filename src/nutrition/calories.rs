use super::model::{ActivityLevel, Gender, Goal, Metrics, UserProfile};

pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }
}

impl Goal {
    /// Daily kcal added to (or removed from) maintenance.
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::WeightLoss => -500.0,
            Goal::MuscleGain => 300.0,
            Goal::Maintain => 0.0,
            Goal::Energy => 100.0,
            Goal::Health => 0.0,
        }
    }
}

/// Body weight used by every formula, falling back to the default when unset.
pub fn weight_kg(metrics: &Metrics) -> f64 {
    metrics
        .weight
        .filter(|w| *w > 0.0)
        .unwrap_or(DEFAULT_WEIGHT_KG)
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
///
/// `BMR = 10 * weight + 6.25 * height - 5 * age + s`, with `s = +5` for men and
/// `-161` otherwise. Missing metrics use a 30 year old, 70 kg, 170 cm male.
pub fn basal_metabolic_rate(metrics: &Metrics) -> f64 {
    let weight = weight_kg(metrics);
    let height = metrics
        .height
        .filter(|h| *h > 0.0)
        .unwrap_or(DEFAULT_HEIGHT_CM);
    let age = metrics.age.filter(|a| *a > 0).unwrap_or(DEFAULT_AGE) as f64;
    let offset = match metrics.gender.unwrap_or(Gender::Male) {
        Gender::Male => 5.0,
        Gender::Female | Gender::Other => -161.0,
    };
    10.0 * weight + 6.25 * height - 5.0 * age + offset
}

/// Daily energy target: BMR scaled by activity, shifted by goal, rounded.
///
/// Clamped at zero; only nonsensical metrics could push it below.
pub fn calculate_daily_calories(profile: &UserProfile) -> u32 {
    let multiplier = profile
        .activity_level
        .map(ActivityLevel::multiplier)
        .unwrap_or(DEFAULT_ACTIVITY_MULTIPLIER);
    let adjustment = profile.goal.map(Goal::calorie_adjustment).unwrap_or(0.0);
    let kcal = (basal_metabolic_rate(&profile.metrics) * multiplier + adjustment).round();
    kcal.max(0.0) as u32
}
