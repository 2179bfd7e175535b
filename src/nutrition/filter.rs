use super::model::{Allergy, FoodItem, PriceTier, UserProfile};
use crate::catalog::allergen_keywords;

/// Keeps the foods a profile can eat, in catalog order.
pub fn filter_foods<'a>(foods: &'a [FoodItem], profile: &UserProfile) -> Vec<&'a FoodItem> {
    foods.iter().filter(|f| is_compatible(f, profile)).collect()
}

pub fn is_compatible(food: &FoodItem, profile: &UserProfile) -> bool {
    if let Some(diet) = profile.diet_type {
        if !food.diet_types.contains(&diet) {
            return false;
        }
    }
    if profile
        .allergies
        .iter()
        .any(|allergy| contains_allergen(food, *allergy))
    {
        return false;
    }
    !(profile.preferences.budget == PriceTier::Budget && food.cost == PriceTier::Premium)
}

/// Case-insensitive substring match of every ingredient against the allergy's keywords.
pub fn contains_allergen(food: &FoodItem, allergy: Allergy) -> bool {
    let keywords = allergen_keywords(allergy);
    food.ingredients.iter().any(|ingredient| {
        let ingredient = ingredient.to_lowercase();
        keywords.iter().any(|k| ingredient.contains(&k.to_lowercase()))
    })
}
