use super::HealthySwap;
use crate::nutrition::model::{
    DietType::{self, Keto, Omnivore, Paleo, Pescatarian, Vegan, Vegetarian},
    FoodItem, MealType,
    PriceTier::{self, Budget, Moderate, Premium},
};

/// kcal, protein, carbs, fats, fiber
type Macros = (u32, f64, f64, f64, f64);

#[allow(clippy::too_many_arguments)]
fn food(
    id: &str,
    meal_type: MealType,
    name: &str,
    emoji: &str,
    description: &str,
    (calories, protein, carbs, fats, fiber): Macros,
    prep_time: u32,
    diet_types: &[DietType],
    ingredients: &[&str],
    cuisines: &[&str],
    cost: PriceTier,
) -> FoodItem {
    FoodItem {
        id: id.into(),
        name: name.into(),
        meal_type,
        emoji: emoji.into(),
        description: description.into(),
        calories,
        protein,
        carbs,
        fats,
        fiber,
        prep_time,
        diet_types: diet_types.to_vec(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        cuisines: cuisines.iter().map(|s| s.to_string()).collect(),
        cost,
    }
}

pub(super) fn breakfast() -> Vec<FoodItem> {
    use MealType::Breakfast as B;
    vec![
        food(
            "b1", B, "Greek Yogurt Parfait", "🥣",
            "Creamy Greek yogurt layered with berries, crunchy granola and a drizzle of honey.",
            (320, 18.0, 42.0, 9.0, 5.0), 5,
            &[Omnivore, Vegetarian, Pescatarian],
            &["greek yogurt", "mixed berries", "granola", "honey", "sliced almonds"],
            &["american", "mediterranean"], Budget,
        ),
        food(
            "b2", B, "Veggie Egg Scramble", "🍳",
            "Fluffy scrambled eggs with spinach, peppers and onion cooked in olive oil.",
            (350, 24.0, 12.0, 22.0, 4.0), 10,
            &[Omnivore, Vegetarian, Pescatarian, Keto, Paleo],
            &["eggs", "spinach", "bell pepper", "onion", "olive oil"],
            &["american"], Budget,
        ),
        food(
            "b3", B, "Overnight Oats with Banana", "🌾",
            "Rolled oats soaked overnight with chia seeds, banana and a pinch of cinnamon.",
            (380, 12.0, 62.0, 10.0, 8.0), 5,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["rolled oats", "oat drink", "banana", "chia seeds", "cinnamon"],
            &["american"], Budget,
        ),
        food(
            "b4", B, "Avocado Toast with Poached Egg", "🥑",
            "Whole grain toast topped with smashed avocado, a poached egg and chili flakes.",
            (420, 16.0, 38.0, 24.0, 10.0), 10,
            &[Omnivore, Vegetarian, Pescatarian],
            &["whole grain bread", "avocado", "eggs", "cherry tomatoes", "chili flakes"],
            &["american", "mediterranean"], Moderate,
        ),
        food(
            "b5", B, "Tofu Breakfast Burrito", "🌯",
            "Scrambled tofu, black beans and salsa wrapped in a warm tortilla.",
            (450, 22.0, 48.0, 18.0, 9.0), 15,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["flour tortilla", "tofu", "black beans", "salsa", "avocado"],
            &["mexican"], Budget,
        ),
        food(
            "b6", B, "Smoked Salmon Bagel", "🥯",
            "Toasted bagel with cream cheese, smoked salmon, capers and red onion.",
            (480, 28.0, 50.0, 16.0, 3.0), 5,
            &[Omnivore, Pescatarian],
            &["bagel", "smoked salmon", "cream cheese", "capers", "red onion"],
            &["american"], Premium,
        ),
        food(
            "b7", B, "Masala Omelette", "🍳",
            "Spiced omelette with tomato, onion, green chili and fresh coriander.",
            (300, 20.0, 8.0, 21.0, 2.0), 10,
            &[Omnivore, Vegetarian, Pescatarian, Keto, Paleo],
            &["eggs", "tomato", "onion", "green chili", "coriander", "ghee"],
            &["indian"], Budget,
        ),
    ]
}

pub(super) fn lunch() -> Vec<FoodItem> {
    use MealType::Lunch as L;
    vec![
        food(
            "l1", L, "Quinoa Buddha Bowl", "🥗",
            "Quinoa with roasted sweet potato, chickpeas and kale under a tahini dressing.",
            (520, 18.0, 68.0, 20.0, 12.0), 20,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["quinoa", "chickpeas", "sweet potato", "kale", "tahini"],
            &["mediterranean"], Moderate,
        ),
        food(
            "l2", L, "Grilled Chicken Salad", "🥗",
            "Grilled chicken breast over crisp greens with cucumber, tomato and avocado.",
            (450, 40.0, 18.0, 24.0, 6.0), 15,
            &[Omnivore, Keto, Paleo],
            &["chicken breast", "mixed greens", "cucumber", "cherry tomatoes", "avocado", "olive oil"],
            &["american", "mediterranean"], Moderate,
        ),
        food(
            "l3", L, "Lentil Soup with Bread", "🍲",
            "Hearty red lentil soup with carrots and cumin, served with whole wheat bread.",
            (480, 24.0, 70.0, 10.0, 18.0), 30,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["red lentils", "carrots", "celery", "cumin", "whole wheat bread"],
            &["mediterranean", "middleEastern"], Budget,
        ),
        food(
            "l4", L, "Salmon Poke Bowl", "🍣",
            "Fresh salmon over sushi rice with edamame, seaweed and sesame.",
            (580, 35.0, 60.0, 20.0, 5.0), 15,
            &[Omnivore, Pescatarian],
            &["salmon", "sushi rice", "edamame", "seaweed", "soy sauce", "sesame seeds"],
            &["japanese", "asian"], Premium,
        ),
        food(
            "l5", L, "Caprese Pasta Salad", "🍝",
            "Whole wheat pasta tossed with mozzarella, tomatoes, basil and olive oil.",
            (540, 20.0, 66.0, 22.0, 7.0), 20,
            &[Omnivore, Vegetarian, Pescatarian],
            &["whole wheat pasta", "mozzarella", "tomatoes", "basil", "olive oil"],
            &["italian"], Budget,
        ),
        food(
            "l6", L, "Chicken Burrito Bowl", "🌯",
            "Brown rice, seasoned chicken, black beans, corn, salsa and cheddar.",
            (620, 42.0, 64.0, 18.0, 11.0), 25,
            &[Omnivore],
            &["brown rice", "chicken thigh", "black beans", "corn", "salsa", "cheddar cheese"],
            &["mexican"], Moderate,
        ),
        food(
            "l7", L, "Falafel Wrap", "🧆",
            "Crispy falafel in a whole wheat pita with hummus, lettuce and tahini.",
            (560, 20.0, 64.0, 24.0, 11.0), 15,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["falafel", "whole wheat pita", "hummus", "lettuce", "tomato", "tahini"],
            &["middleEastern"], Budget,
        ),
    ]
}

pub(super) fn dinner() -> Vec<FoodItem> {
    use MealType::Dinner as D;
    vec![
        food(
            "d1", D, "Baked Salmon with Asparagus", "🐟",
            "Lemon garlic salmon fillet baked alongside tender asparagus.",
            (520, 40.0, 18.0, 30.0, 6.0), 25,
            &[Omnivore, Pescatarian, Keto, Paleo],
            &["salmon fillet", "asparagus", "lemon", "garlic", "olive oil"],
            &["mediterranean"], Premium,
        ),
        food(
            "d2", D, "Chickpea Curry", "🍛",
            "Chickpeas and spinach simmered in a spiced tomato and coconut sauce with basmati rice.",
            (560, 20.0, 72.0, 20.0, 16.0), 30,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["chickpeas", "coconut", "tomatoes", "spinach", "basmati rice", "curry spices"],
            &["indian"], Budget,
        ),
        food(
            "d3", D, "Turkey Meatballs with Zucchini Noodles", "🍝",
            "Lean turkey meatballs in marinara over spiralized zucchini.",
            (480, 38.0, 20.0, 26.0, 5.0), 30,
            &[Omnivore, Keto, Paleo],
            &["ground turkey", "zucchini", "marinara sauce", "garlic", "eggs"],
            &["italian"], Moderate,
        ),
        food(
            "d4", D, "Tofu Stir-Fry", "🥡",
            "Crispy tofu with broccoli and peppers in a ginger glaze over brown rice.",
            (500, 26.0, 52.0, 20.0, 8.0), 20,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["tofu", "broccoli", "bell pepper", "brown rice", "soy sauce", "ginger"],
            &["asian"], Budget,
        ),
        food(
            "d5", D, "Steak with Sweet Potato", "🥩",
            "Seared sirloin with roasted sweet potato and garlic green beans.",
            (650, 45.0, 40.0, 32.0, 7.0), 30,
            &[Omnivore, Paleo],
            &["sirloin steak", "sweet potato", "green beans", "garlic", "olive oil"],
            &["american"], Premium,
        ),
        food(
            "d6", D, "Vegetable Lasagna", "🍝",
            "Layers of pasta, ricotta, spinach and zucchini baked in marinara.",
            (580, 28.0, 60.0, 24.0, 8.0), 45,
            &[Omnivore, Vegetarian, Pescatarian],
            &["lasagna noodles", "ricotta cheese", "spinach", "zucchini", "marinara sauce", "mozzarella"],
            &["italian"], Moderate,
        ),
        food(
            "d7", D, "Shrimp Tacos", "🌮",
            "Chili-lime shrimp in corn tortillas with crunchy cabbage slaw and avocado.",
            (490, 32.0, 48.0, 18.0, 7.0), 20,
            &[Omnivore, Pescatarian],
            &["shrimp", "corn tortillas", "cabbage slaw", "lime", "avocado"],
            &["mexican"], Moderate,
        ),
        food(
            "d8", D, "Black Bean Stuffed Peppers", "🫑",
            "Bell peppers filled with black beans, brown rice, corn and salsa.",
            (430, 18.0, 58.0, 12.0, 14.0), 35,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["bell peppers", "black beans", "brown rice", "corn", "tomato salsa", "cumin"],
            &["mexican"], Budget,
        ),
    ]
}

pub(super) fn snacks() -> Vec<FoodItem> {
    use MealType::Snack as S;
    vec![
        food(
            "s1", S, "Apple with Peanut Butter", "🍎",
            "Crisp apple slices with a spoonful of natural peanut butter.",
            (200, 5.0, 25.0, 9.0, 5.0), 2,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["apple", "peanut butter"],
            &["american"], Budget,
        ),
        food(
            "s2", S, "Hummus & Veggies", "🥕",
            "Creamy hummus with carrot, cucumber and pepper sticks.",
            (150, 6.0, 18.0, 7.0, 6.0), 5,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["hummus", "carrots", "cucumber", "bell pepper"],
            &["mediterranean", "middleEastern"], Budget,
        ),
        food(
            "s3", S, "Mixed Nuts", "🥜",
            "A small handful of almonds, walnuts and cashews.",
            (180, 6.0, 6.0, 16.0, 3.0), 1,
            &[Omnivore, Vegetarian, Vegan, Pescatarian, Keto, Paleo],
            &["almonds", "walnuts", "cashews"],
            &["american"], Moderate,
        ),
        food(
            "s4", S, "Greek Yogurt with Honey", "🍯",
            "Thick Greek yogurt with honey and a dusting of cinnamon.",
            (160, 15.0, 18.0, 3.0, 0.0), 2,
            &[Omnivore, Vegetarian, Pescatarian],
            &["greek yogurt", "honey", "cinnamon"],
            &["mediterranean"], Budget,
        ),
        food(
            "s5", S, "Steamed Edamame", "🫛",
            "Warm edamame pods sprinkled with sea salt.",
            (190, 17.0, 14.0, 8.0, 8.0), 5,
            &[Omnivore, Vegetarian, Vegan, Pescatarian],
            &["edamame", "sea salt"],
            &["japanese", "asian"], Budget,
        ),
        food(
            "s6", S, "Cheese & Olives", "🫒",
            "Cubes of aged cheddar with marinated olives.",
            (210, 10.0, 4.0, 17.0, 1.0), 2,
            &[Omnivore, Vegetarian, Pescatarian, Keto],
            &["cheddar cheese", "olives"],
            &["mediterranean"], Moderate,
        ),
        food(
            "s7", S, "Hard-Boiled Eggs", "🥚",
            "Two hard-boiled eggs with sea salt and cracked pepper.",
            (140, 12.0, 1.0, 10.0, 0.0), 12,
            &[Omnivore, Vegetarian, Pescatarian, Keto, Paleo],
            &["eggs", "sea salt", "black pepper"],
            &["american"], Budget,
        ),
    ]
}

pub(super) fn healthy_swaps() -> Vec<HealthySwap> {
    [
        ("chips", "air-popped popcorn or baked veggie chips"),
        ("soda", "sparkling water with a splash of fruit juice"),
        ("candy", "fresh fruit or a few dates"),
        ("ice cream", "frozen banana nice cream or Greek yogurt with berries"),
        ("white bread", "whole grain or sourdough bread"),
        ("white rice", "brown rice or cauliflower rice"),
        ("fries", "oven-baked sweet potato wedges"),
        ("pizza", "a whole wheat flatbread loaded with vegetables"),
        ("cookies", "oat and banana cookies"),
        ("burger", "a turkey or black bean burger in a lettuce wrap"),
        ("pasta", "whole wheat pasta or zucchini noodles"),
        ("chocolate", "a square of dark chocolate (70% or more)"),
        ("donuts", "a whole grain banana muffin"),
        ("energy drink", "green tea or a black coffee"),
        ("sugar", "a little honey or fresh fruit"),
    ]
    .into_iter()
    .map(|(food, alternative)| HealthySwap {
        food: food.into(),
        alternative: alternative.into(),
    })
    .collect()
}
