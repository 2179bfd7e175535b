use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::intent::{detect_intent, extract_food_phrase, Intent};
use crate::catalog::FoodCatalog;
use crate::nutrition::{
    calories::{calculate_daily_calories, weight_kg},
    filter::filter_foods,
    model::{DietType, FoodItem, Goal, MealType, UserProfile},
    planner::{get_quick_suggestions, pick_for_slot, slot_target},
    scorer::select_best_food,
    tips::get_daily_tip,
};

const GREETINGS: &[&str] = &[
    "Hey there! 👋 How can I help you eat better today?",
    "Hi! Ready to make some healthy choices? What's on your mind?",
    "Hello! I'm here to help with your nutrition. Ask me anything!",
    "Hey! 🌿 What can I help you with today?",
];

const FALLBACKS: &[&str] = &[
    "I'm not quite sure about that, but I can help you with meal suggestions, nutrition advice, or finding healthy alternatives. What would you like?",
    "Hmm, let me think differently... I can suggest meals, give nutrition tips, or help you swap unhealthy foods. What interests you?",
    "I'm still learning! Try asking me about what to eat, healthy alternatives, or nutrition tips.",
];

/// Grams of protein per kg of body weight used for the daily recommendation.
const PROTEIN_PER_KG: f64 = 1.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub intent: Intent,
    pub text: String,
    pub suggestions: Vec<String>,
}

fn reply(intent: Intent, text: impl Into<String>, suggestions: &[&str]) -> ChatResponse {
    ChatResponse {
        intent,
        text: text.into(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn format_meal_suggestion(food: &FoodItem) -> String {
    format!(
        "{} **{}**\n{}\n\n📊 {} kcal | 🥩 {}g protein | ⏱️ {} min",
        food.emoji, food.name, food.description, food.calories, food.protein, food.prep_time
    )
}

fn diet_label(diet: Option<DietType>) -> &'static str {
    match diet {
        Some(DietType::Omnivore) => "omnivore",
        Some(DietType::Vegetarian) => "vegetarian",
        Some(DietType::Vegan) => "vegan",
        Some(DietType::Pescatarian) => "pescatarian",
        Some(DietType::Keto) => "keto",
        Some(DietType::Paleo) => "paleo",
        None => "dietary",
    }
}

/// Rule-based nutrition assistant over a catalog at a given local hour.
pub struct ChatEngine<'a> {
    catalog: &'a FoodCatalog,
    hour: u8,
}

impl<'a> ChatEngine<'a> {
    pub fn new(catalog: &'a FoodCatalog, hour: u8) -> Self {
        Self { catalog, hour }
    }

    pub fn generate_response<R: Rng + ?Sized>(
        &self,
        message: &str,
        profile: &UserProfile,
        rng: &mut R,
    ) -> ChatResponse {
        let intent = detect_intent(message);
        debug!(?intent, hour = self.hour, "chat intent detected");
        self.respond(intent, message, profile, rng)
    }

    pub fn initial_message(&self, profile: &UserProfile) -> ChatResponse {
        let greeting = match self.hour {
            5..=11 => "Good morning",
            12..=16 => "Good afternoon",
            17..=20 => "Good evening",
            _ => "Hey there",
        };
        let name = match profile.name.trim() {
            "" => "there",
            n => n,
        };
        reply(
            Intent::Greeting,
            format!(
                "{greeting}, {name}! 👋\n\nI'm your personal nutrition assistant. Ask me anything about:\n\n🍽️ **Meal suggestions** - \"What should I eat?\"\n🔄 **Healthy swaps** - \"Alternative to chips?\"\n💡 **Nutrition tips** - \"Give me a tip\"\n\nHow can I help you today?"
            ),
            &[
                "What should I eat now?",
                "Give me a nutrition tip",
                "Healthy snack ideas",
            ],
        )
    }

    fn slot_meal<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        slot: MealType,
        rng: &mut R,
    ) -> FoodItem {
        let target = slot_target(calculate_daily_calories(profile), slot);
        pick_for_slot(profile, self.catalog, slot, target, rng)
    }

    fn respond<R: Rng + ?Sized>(
        &self,
        intent: Intent,
        message: &str,
        profile: &UserProfile,
        rng: &mut R,
    ) -> ChatResponse {
        match intent {
            Intent::Greeting => reply(
                intent,
                *GREETINGS.choose(rng).unwrap_or(&GREETINGS[0]),
                &["What should I eat now?", "Give me a tip", "Healthy snack ideas"],
            ),
            Intent::MealSuggestion => {
                let meal = get_quick_suggestions(profile, self.catalog, self.hour)
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| self.slot_meal(profile, MealType::for_hour(self.hour), rng));
                reply(
                    intent,
                    format!(
                        "Based on your preferences and the time of day, I'd suggest:\n\n{}\n\nWant more options or something different?",
                        format_meal_suggestion(&meal)
                    ),
                    &["Show me more options", "Something lighter", "Something else"],
                )
            }
            Intent::Breakfast => {
                let meal = self.slot_meal(profile, MealType::Breakfast, rng);
                reply(
                    intent,
                    format!(
                        "Rise and shine! ☀️ Here's a great breakfast idea for you:\n\n{}\n\nThis fits perfectly with your {} preferences!",
                        format_meal_suggestion(&meal),
                        diet_label(profile.diet_type)
                    ),
                    &["Other breakfast options", "Something quick", "More protein"],
                )
            }
            Intent::Lunch => {
                let meal = self.slot_meal(profile, MealType::Lunch, rng);
                reply(
                    intent,
                    format!(
                        "Time for a midday boost! 🌞 Try this:\n\n{}\n\nIt'll keep you energized through the afternoon!",
                        format_meal_suggestion(&meal)
                    ),
                    &["Other lunch ideas", "Something light", "High protein option"],
                )
            }
            Intent::Dinner => {
                let meal = self.slot_meal(profile, MealType::Dinner, rng);
                reply(
                    intent,
                    format!(
                        "For a satisfying dinner, how about:\n\n{}\n\nPerfect way to end your day! 🌙",
                        format_meal_suggestion(&meal)
                    ),
                    &["Other dinner ideas", "Something simple", "Vegetarian option"],
                )
            }
            Intent::Snack => self.snack(profile, rng),
            Intent::Alternative => self.alternative(message),
            Intent::Tip => reply(
                intent,
                format!(
                    "💡 **Nutrition Tip:**\n\n{}\n\nWant another tip or need meal suggestions?",
                    get_daily_tip(profile, rng)
                ),
                &["Another tip", "Meal suggestion", "Ask something else"],
            ),
            Intent::Calories => reply(
                intent,
                format!(
                    "Tracking calories is great for awareness! 📊\n\nBased on your profile, I recommend around **{} kcal** per day.\n\nBreakdown:\n• Breakfast: ~25%\n• Lunch: ~35%\n• Dinner: ~30%\n• Snacks: ~10%\n\nWant me to suggest meals that fit this?",
                    calculate_daily_calories(profile)
                ),
                &["Suggest meals", "How to count easier", "Macro breakdown"],
            ),
            Intent::Protein => {
                let focus = if profile.goal == Some(Goal::MuscleGain) {
                    "building muscle"
                } else {
                    "staying healthy"
                };
                let grams = (weight_kg(&profile.metrics) * PROTEIN_PER_KG).round();
                reply(
                    intent,
                    format!(
                        "Protein is essential! 💪\n\nFor your goal of {focus}, aim for about **{grams}g of protein** daily.\n\nGreat protein sources:\n• 🍗 Chicken breast (31g per 100g)\n• 🥚 Eggs (6g each)\n• 🫘 Lentils (9g per 100g)\n• 🐟 Salmon (25g per 100g)"
                    ),
                    &["High protein meals", "Vegetarian protein", "Protein timing"],
                )
            }
            Intent::WeightLoss => reply(
                intent,
                "For healthy weight loss, focus on: 🎯\n\n1. **Calorie deficit** - Eat slightly less than you burn\n2. **Protein priority** - Keeps you full longer\n3. **Whole foods** - Avoid processed items\n4. **Stay hydrated** - Often thirst feels like hunger\n\nWant me to suggest some weight-loss friendly meals?",
                &["Low calorie meals", "High protein options", "Filling foods"],
            ),
            Intent::Energy => reply(
                intent,
                "Need an energy boost? ⚡ Try these tips:\n\n1. **Complex carbs** - Oatmeal, whole grains\n2. **Iron-rich foods** - Spinach, lentils\n3. **B vitamins** - Eggs, lean meats\n4. **Stay hydrated** - Dehydration causes fatigue\n5. **Small, regular meals** - Avoid energy crashes\n\nWant an energizing meal suggestion?",
                &["Energy-boosting meal", "Morning routine", "Afternoon slump help"],
            ),
            Intent::Thanks => reply(
                intent,
                "You're welcome! 😊 I'm always here to help you make healthier choices. Feel free to ask me anything anytime!",
                &["Another question", "Meal suggestion", "Bye for now"],
            ),
            Intent::Goodbye => reply(
                intent,
                "Take care! 👋 Remember to stay hydrated and enjoy your meals. See you next time! 🌿",
                &["Actually, one more thing", "Bye!"],
            ),
            Intent::Unknown => reply(
                intent,
                *FALLBACKS.choose(rng).unwrap_or(&FALLBACKS[0]),
                &["What should I eat?", "Healthy alternative", "Give me a tip"],
            ),
        }
    }

    fn snack<R: Rng + ?Sized>(&self, profile: &UserProfile, rng: &mut R) -> ChatResponse {
        let target = slot_target(calculate_daily_calories(profile), MealType::Snack);
        let candidates = filter_foods(self.catalog.slot(MealType::Snack), profile);
        match select_best_food(&candidates, profile, target, rng) {
            Some(snack) => reply(
                Intent::Snack,
                format!(
                    "Need a snack? Try this healthy option: 🍎\n\n{}\n\nLight, nutritious, and satisfying!",
                    format_meal_suggestion(snack)
                ),
                &["More snack ideas", "Something sweet", "High protein snack"],
            ),
            None => reply(
                Intent::Snack,
                "For a healthy snack, try:\n\n🥜 A handful of mixed nuts (180 kcal)\n🍎 Apple with peanut butter (200 kcal)\n🥕 Hummus with veggies (150 kcal)\n\nWhich sounds good?",
                &["Tell me more about nuts", "Something sweeter", "Low calorie option"],
            ),
        }
    }

    fn alternative(&self, message: &str) -> ChatResponse {
        let food = extract_food_phrase(message)
            .or_else(|| self.catalog.mentioned_food(&message.to_lowercase()).map(str::to_string));
        if let Some((food, swap)) = food
            .as_deref()
            .and_then(|f| self.catalog.alternative_for(f).map(|swap| (f, swap)))
        {
            return reply(
                Intent::Alternative,
                format!(
                    "Great question! Instead of **{food}**, try **{swap}**! 🔄\n\nIt's a much healthier choice that still satisfies that craving. Would you like more details?"
                ),
                &["More alternatives", "Why is it better?", "Other swaps"],
            );
        }
        reply(
            Intent::Alternative,
            "I can help you find healthier alternatives! Tell me what food you'd like to replace. For example:\n\n• \"What can I have instead of chips?\"\n• \"Healthy alternative to soda\"\n• \"Swap for ice cream\"",
            &["Alternative to chips", "Replace soda", "Healthy dessert"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::model::{Allergy, Metrics};
    use rand::{rngs::StdRng, SeedableRng};

    fn engine(catalog: &FoodCatalog) -> ChatEngine<'_> {
        ChatEngine::new(catalog, 9)
    }

    #[test]
    fn swap_request_names_the_alternative() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let res = engine(&catalog).generate_response(
            "instead of chips",
            &UserProfile::default(),
            &mut rng,
        );
        assert_eq!(res.intent, Intent::Alternative);
        assert!(res
            .text
            .contains(catalog.alternative_for("chips").unwrap()));
        assert_eq!(
            res.suggestions,
            vec!["More alternatives", "Why is it better?", "Other swaps"]
        );
    }

    #[test]
    fn mentioned_food_is_found_without_a_pattern() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let res = engine(&catalog).generate_response(
            "is soda unhealthy",
            &UserProfile::default(),
            &mut rng,
        );
        assert_eq!(res.intent, Intent::Alternative);
        assert!(res.text.contains("**soda**"));
    }

    #[test]
    fn unknown_swap_gets_generic_template() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let res = engine(&catalog).generate_response(
            "instead of kale",
            &UserProfile::default(),
            &mut rng,
        );
        assert_eq!(res.intent, Intent::Alternative);
        assert_eq!(
            res.suggestions,
            vec!["Alternative to chips", "Replace soda", "Healthy dessert"]
        );
    }

    #[test]
    fn unknown_text_gets_fallback() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(4);
        let res = engine(&catalog).generate_response("zzz", &UserProfile::default(), &mut rng);
        assert_eq!(res.intent, Intent::Unknown);
        assert!(FALLBACKS.contains(&res.text.as_str()));
        assert_eq!(res.suggestions.len(), 3);
    }

    #[test]
    fn breakfast_respects_restrictions() {
        let catalog = FoodCatalog::builtin();
        let mut profile = UserProfile {
            diet_type: Some(DietType::Vegan),
            ..Default::default()
        };
        profile.allergies.insert(Allergy::Soy);
        let mut rng = StdRng::seed_from_u64(2);
        let res = engine(&catalog).generate_response("breakfast please", &profile, &mut rng);
        assert_eq!(res.intent, Intent::Breakfast);
        // b3 is the only vegan breakfast without soy
        assert!(res.text.contains("Overnight Oats"), "{}", res.text);
        assert!(res.text.contains("your vegan preferences"));
    }

    #[test]
    fn protein_estimate_uses_weight() {
        let catalog = FoodCatalog::builtin();
        let profile = UserProfile {
            goal: Some(Goal::MuscleGain),
            metrics: Metrics {
                weight: Some(80.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let res = engine(&catalog).generate_response("protein?", &profile, &mut rng);
        assert!(res.text.contains("**128g of protein**"));
        assert!(res.text.contains("building muscle"));
    }

    #[test]
    fn calories_reply_uses_calorie_model() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(2);
        let res = engine(&catalog).generate_response(
            "how many calories",
            &UserProfile::default(),
            &mut rng,
        );
        assert!(res.text.contains("**2507 kcal**"));
    }

    #[test]
    fn snack_without_candidates_uses_canned_list() {
        let mut catalog = FoodCatalog::builtin();
        catalog.snacks.clear();
        let mut rng = StdRng::seed_from_u64(2);
        let res = engine(&catalog).generate_response("snack", &UserProfile::default(), &mut rng);
        assert_eq!(res.intent, Intent::Snack);
        assert!(res.text.contains("Hummus with veggies"));
    }

    #[test]
    fn meal_suggestion_survives_empty_slot() {
        let mut catalog = FoodCatalog::builtin();
        catalog.breakfast.clear();
        let mut rng = StdRng::seed_from_u64(2);
        let res = engine(&catalog).generate_response(
            "what should i eat",
            &UserProfile::default(),
            &mut rng,
        );
        assert_eq!(res.intent, Intent::MealSuggestion);
        assert!(res.text.contains("Chef's choice"));
    }

    #[test]
    fn every_reply_has_text_and_few_chips() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(8);
        for text in [
            "hi", "hungry", "breakfast", "lunch", "dinner", "snack", "swap", "tip",
            "kcal", "muscle", "slim", "energy", "thanks", "bye", "???",
        ] {
            let res = engine(&catalog).generate_response(text, &UserProfile::default(), &mut rng);
            assert!(!res.text.is_empty(), "{text}");
            assert!(res.suggestions.len() <= 3, "{text}");
        }
    }

    #[test]
    fn initial_message_greets_by_time_and_name() {
        let catalog = FoodCatalog::builtin();
        let profile = UserProfile {
            name: "Sam".into(),
            ..Default::default()
        };
        let morning = ChatEngine::new(&catalog, 7).initial_message(&profile);
        assert!(morning.text.starts_with("Good morning, Sam!"));
        assert_eq!(morning.suggestions.len(), 3);

        let late = ChatEngine::new(&catalog, 23).initial_message(&UserProfile::default());
        assert!(late.text.starts_with("Hey there, there!"));
    }
}
