use rand::{seq::SliceRandom, Rng};

use super::model::{Goal, UserProfile};

const WEIGHT_LOSS: &[&str] = &[
    "Drink a glass of water before meals to help with portion control.",
    "Focus on protein-rich foods to stay fuller longer.",
    "Try eating slowly - it takes 20 minutes to feel full!",
    "Swap refined carbs for whole grains.",
    "Add more fiber-rich vegetables to your plate.",
];

const MUSCLE_GAIN: &[&str] = &[
    "Aim for 1.6-2.2g of protein per kg of body weight.",
    "Don't skip post-workout nutrition!",
    "Complex carbs fuel intense workouts.",
    "Healthy fats support hormone production.",
    "Consistency is key - stick to your meal plan!",
];

const ENERGY: &[&str] = &[
    "Start your day with a balanced breakfast.",
    "Include iron-rich foods for sustained energy.",
    "Stay hydrated throughout the day.",
    "Complex carbs provide steady energy release.",
    "Small, frequent meals maintain energy levels.",
];

const HEALTH: &[&str] = &[
    "Eat the rainbow - varied colors mean varied nutrients.",
    "Include fermented foods for gut health.",
    "Choose whole foods over processed options.",
    "Don't forget your omega-3 fatty acids!",
    "Mindful eating improves digestion.",
];

const MAINTAIN: &[&str] = &[
    "Listen to your hunger cues.",
    "Balance your plate with all food groups.",
    "Stay active to maintain your metabolism.",
    "Plan meals ahead to avoid impulse eating.",
    "Enjoy treats in moderation.",
];

/// Tip list for a goal; the health list when no goal is set.
pub fn tips_for(goal: Option<Goal>) -> &'static [&'static str] {
    match goal {
        Some(Goal::WeightLoss) => WEIGHT_LOSS,
        Some(Goal::MuscleGain) => MUSCLE_GAIN,
        Some(Goal::Energy) => ENERGY,
        Some(Goal::Maintain) => MAINTAIN,
        Some(Goal::Health) | None => HEALTH,
    }
}

pub fn get_daily_tip<R: Rng + ?Sized>(profile: &UserProfile, rng: &mut R) -> &'static str {
    tips_for(profile.goal)
        .choose(rng)
        .copied()
        .unwrap_or(HEALTH[0])
}
