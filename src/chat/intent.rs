use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    Greeting,
    MealSuggestion,
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Alternative,
    Tip,
    Calories,
    Protein,
    WeightLoss,
    Energy,
    Thanks,
    Goodbye,
    Unknown,
}

lazy_static! {
    /// Evaluated top to bottom; the first match wins, so overlapping phrases
    /// resolve to whichever intent is listed earlier.
    static ref INTENT_RULES: Vec<(Intent, Regex)> = vec![
        (Intent::Greeting, Regex::new(r"^(hi|hello|hey|good morning|good afternoon|good evening)").unwrap()),
        (Intent::MealSuggestion, Regex::new(r"(what should i eat|suggest|recommend|meal|food ideas|hungry|eating)").unwrap()),
        (Intent::Breakfast, Regex::new(r"(breakfast|morning meal|what.*eat.*morning)").unwrap()),
        (Intent::Lunch, Regex::new(r"(lunch|midday|afternoon meal)").unwrap()),
        (Intent::Dinner, Regex::new(r"(dinner|evening meal|supper)").unwrap()),
        (Intent::Snack, Regex::new(r"(snack|something light|small bite|hungry but)").unwrap()),
        (Intent::Alternative, Regex::new(r"(replace|swap|instead of|alternative|healthier|unhealthy|bad food)").unwrap()),
        (Intent::Tip, Regex::new(r"(tip|advice|help|suggest|how to|should i)").unwrap()),
        (Intent::Calories, Regex::new(r"(calories|calorie|kcal|how many cal)").unwrap()),
        (Intent::Protein, Regex::new(r"(protein|muscle|amino|gains)").unwrap()),
        (Intent::WeightLoss, Regex::new(r"(lose weight|weight loss|diet|slim|cut)").unwrap()),
        (Intent::Energy, Regex::new(r"(energy|tired|fatigue|boost|wake up)").unwrap()),
        (Intent::Thanks, Regex::new(r"(thank|thanks|appreciate|helpful)").unwrap()),
        (Intent::Goodbye, Regex::new(r"(bye|goodbye|see you|later|done)").unwrap()),
    ];

    static ref FOOD_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)instead of (.+?)(?:\?|$|\.)").unwrap(),
        Regex::new(r"(?i)replace (.+?)(?:\?|$|\.|with)").unwrap(),
        Regex::new(r"(?i)swap (.+?)(?:\?|$|\.)").unwrap(),
        Regex::new(r"(?i)alternative (?:to|for) (.+?)(?:\?|$|\.)").unwrap(),
        Regex::new(r"(?i)healthier (?:than|version of) (.+?)(?:\?|$|\.)").unwrap(),
    ];
}

pub fn detect_intent(message: &str) -> Intent {
    let text = message.trim().to_lowercase();
    INTENT_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(&text))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown)
}

/// Food phrase named by a swap request ("instead of X", "replace X", ...),
/// lower-cased and trimmed.
pub fn extract_food_phrase(message: &str) -> Option<String> {
    FOOD_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(message))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_lowercase())
        .filter(|phrase| !phrase.is_empty())
}
