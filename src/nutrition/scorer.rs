use rand::{seq::SliceRandom, Rng};

use super::model::{FoodItem, Goal, UserProfile};

pub const BASE_SCORE: f64 = 100.0;
/// How many of the best-scored foods take part in the random pick.
pub const TOP_CHOICES: usize = 3;

/// Fit of a food to the profile for a slot targeting `target_calories`.
pub fn score_food(food: &FoodItem, profile: &UserProfile, target_calories: u32) -> f64 {
    let mut score = BASE_SCORE;

    let preferred = &profile.preferences.cuisines;
    if food.cuisines.iter().any(|c| preferred.contains(c)) {
        score += 20.0;
    }
    if food.cost == profile.preferences.budget {
        score += 10.0;
    }

    let deviation = (food.calories as f64 - target_calories as f64).abs();
    score -= deviation / 10.0;

    match profile.goal {
        Some(Goal::MuscleGain) if food.protein >= 25.0 => score += 15.0,
        Some(Goal::WeightLoss) if food.calories < 400 => score += 10.0,
        Some(Goal::Energy) if food.carbs >= 40.0 => score += 10.0,
        _ => {}
    }

    score
}

/// Candidates with scores, best first. Ties keep catalog order.
pub fn rank<'a>(
    candidates: &[&'a FoodItem],
    profile: &UserProfile,
    target_calories: u32,
) -> Vec<(&'a FoodItem, f64)> {
    let mut scored: Vec<(&FoodItem, f64)> = candidates
        .iter()
        .map(|f| (*f, score_food(f, profile, target_calories)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
}

pub fn top_choices<'a>(
    candidates: &[&'a FoodItem],
    profile: &UserProfile,
    target_calories: u32,
) -> Vec<&'a FoodItem> {
    rank(candidates, profile, target_calories)
        .into_iter()
        .take(TOP_CHOICES)
        .map(|(food, _)| food)
        .collect()
}

/// Uniform pick among the top-scored candidates, `None` when there are none.
pub fn select_best_food<'a, R: Rng + ?Sized>(
    candidates: &[&'a FoodItem],
    profile: &UserProfile,
    target_calories: u32,
    rng: &mut R,
) -> Option<&'a FoodItem> {
    top_choices(candidates, profile, target_calories)
        .choose(rng)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::model::{MealType, PriceTier};
    use rand::{rngs::StdRng, SeedableRng};

    fn item(id: &str, calories: u32, protein: f64, carbs: f64) -> FoodItem {
        let mut f = FoodItem::placeholder(MealType::Lunch);
        f.id = id.into();
        f.calories = calories;
        f.protein = protein;
        f.carbs = carbs;
        f.cost = PriceTier::Premium;
        f
    }

    #[test]
    fn calorie_distance_is_penalised() {
        let profile = UserProfile::default();
        let near = item("near", 500, 10.0, 10.0);
        let far = item("far", 800, 10.0, 10.0);
        assert_eq!(score_food(&near, &profile, 500), 100.0);
        assert_eq!(score_food(&far, &profile, 500), 70.0);
    }

    #[test]
    fn preferences_add_bonuses() {
        let mut profile = UserProfile::default();
        profile.preferences.cuisines.insert("italian".into());
        profile.preferences.budget = PriceTier::Premium;
        let mut food = item("pasta", 500, 10.0, 10.0);
        food.cuisines = vec!["italian".into()];
        assert_eq!(score_food(&food, &profile, 500), 130.0);
    }

    #[test]
    fn goal_bonuses() {
        let food = item("x", 350, 30.0, 45.0);
        let with_goal = |goal| UserProfile {
            goal: Some(goal),
            ..Default::default()
        };
        assert_eq!(score_food(&food, &with_goal(Goal::MuscleGain), 350), 115.0);
        assert_eq!(score_food(&food, &with_goal(Goal::WeightLoss), 350), 110.0);
        assert_eq!(score_food(&food, &with_goal(Goal::Energy), 350), 110.0);
        assert_eq!(score_food(&food, &with_goal(Goal::Health), 350), 100.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let a = item("a", 400, 0.0, 0.0);
        let b = item("b", 600, 0.0, 0.0);
        let c = item("c", 500, 0.0, 0.0);
        let ranked = rank(&[&a, &b, &c], &UserProfile::default(), 500);
        let ids: Vec<&str> = ranked.iter().map(|(f, _)| f.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn pick_always_comes_from_top_three() {
        let foods: Vec<FoodItem> = (0..6)
            .map(|i| item(&format!("f{i}"), 300 + i * 100, 0.0, 0.0))
            .collect();
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let profile = UserProfile::default();
        let top: Vec<&str> = top_choices(&refs, &profile, 300)
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(top, vec!["f0", "f1", "f2"]);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pick = select_best_food(&refs, &profile, 300, &mut rng).unwrap();
            assert!(top.contains(&pick.id.as_str()));
        }
    }

    #[test]
    fn empty_candidates_yield_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_best_food(&[], &UserProfile::default(), 500, &mut rng).is_none());
    }
}
