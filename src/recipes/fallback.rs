//! Static recipes served when the recipe API is unavailable.

use crate::models::{Difficulty, Recipe};

struct FallbackRecipe {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    cook_time: u32,
    servings: u32,
    difficulty: Difficulty,
    rating: f64,
    image: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
}

const FALLBACK_RECIPES: &[FallbackRecipe] = &[
    FallbackRecipe {
        id: "1",
        title: "Quick Chicken Fried Rice",
        description: "Delicious fried rice with chicken, eggs, and vegetables. Perfect for using up leftover rice.",
        cook_time: 15,
        servings: 4,
        difficulty: Difficulty::Easy,
        rating: 4.5,
        image: "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=400",
        ingredients: &[
            "chicken breast",
            "cooked rice",
            "eggs",
            "soy sauce",
            "mixed vegetables",
            "garlic",
            "ginger",
        ],
        instructions: &[
            "Heat oil in a large pan or wok over high heat",
            "Add diced chicken and cook until golden brown",
            "Push chicken to one side, scramble eggs on the other side",
            "Add rice, breaking up any clumps",
            "Stir in vegetables, soy sauce, garlic, and ginger",
            "Cook for 3-4 minutes until heated through",
        ],
    },
    FallbackRecipe {
        id: "2",
        title: "Creamy Tomato Pasta",
        description: "Rich and creamy pasta with fresh tomatoes, garlic, and herbs. Ready in under 20 minutes.",
        cook_time: 18,
        servings: 3,
        difficulty: Difficulty::Easy,
        rating: 4.3,
        image: "https://images.unsplash.com/photo-1621996346565-e3dbc353d2e5?w=400",
        ingredients: &[
            "pasta",
            "canned tomatoes",
            "heavy cream",
            "garlic",
            "basil",
            "parmesan cheese",
            "olive oil",
        ],
        instructions: &[
            "Cook pasta according to package directions",
            "Heat olive oil in a large pan, add minced garlic",
            "Add canned tomatoes and simmer for 5 minutes",
            "Stir in heavy cream and fresh basil",
            "Add cooked pasta and toss to combine",
            "Serve with grated parmesan cheese",
        ],
    },
    FallbackRecipe {
        id: "3",
        title: "Mediterranean Chicken Salad",
        description: "Fresh and healthy salad with grilled chicken, olives, feta cheese, and Mediterranean vegetables.",
        cook_time: 12,
        servings: 2,
        difficulty: Difficulty::Easy,
        rating: 4.7,
        image: "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=400",
        ingredients: &[
            "chicken breast",
            "mixed greens",
            "cherry tomatoes",
            "cucumber",
            "red onion",
            "feta cheese",
            "olives",
            "olive oil",
            "lemon juice",
        ],
        instructions: &[
            "Season and grill chicken breast until cooked through",
            "Let chicken rest, then slice into strips",
            "Combine mixed greens, tomatoes, cucumber, and red onion",
            "Add sliced chicken, feta cheese, and olives",
            "Drizzle with olive oil and lemon juice",
            "Toss gently and serve immediately",
        ],
    },
];

impl FallbackRecipe {
    fn to_recipe(&self, user_ingredients: &[String]) -> Recipe {
        Recipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            rating: self.rating,
            image: Some(self.image.to_string()),
            ingredients: self.ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: Some(self.instructions.iter().map(|s| s.to_string()).collect()),
            match_percentage: None,
            nutrition: None,
        }
        .with_match(user_ingredients)
    }
}

/// The full fallback dataset, scored against `user_ingredients`
pub fn fallback_recipes(user_ingredients: &[String]) -> Vec<Recipe> {
    FALLBACK_RECIPES
        .iter()
        .map(|r| r.to_recipe(user_ingredients))
        .collect()
}

/// A single fallback recipe by id
pub fn fallback_recipe(id: &str, user_ingredients: &[String]) -> Option<Recipe> {
    FALLBACK_RECIPES
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.to_recipe(user_ingredients))
}
