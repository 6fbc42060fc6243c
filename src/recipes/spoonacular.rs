//! Wire types of the Spoonacular recipes API and conversion into [`Recipe`].

use serde::Deserialize;

use crate::constants::{DESCRIPTION_MAX_CHARS, MIN_INSTRUCTION_STEP_CHARS};
use crate::models::{match_percentage, Difficulty, Nutrition, Recipe};

/// Full recipe payload (`/{id}/information`, `complexSearch` results)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpoonacularRecipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    pub nutrition: Option<NutritionBlock>,
    #[serde(default)]
    pub spoonacular_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedIngredient {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NutritionBlock {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
}

/// Entry of a `findByIngredients` response; only the id is used
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientHit {
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComplexSearchResponse {
    #[serde(default)]
    pub results: Vec<SpoonacularRecipe>,
}

impl NutritionBlock {
    fn amount(&self, name: &str) -> f64 {
        self.nutrients
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.amount)
            .unwrap_or(0.0)
    }
}

/// Convert an API recipe, scoring it against `user_ingredients`
pub fn convert(recipe: SpoonacularRecipe, user_ingredients: &[String]) -> Recipe {
    let ingredients: Vec<String> = recipe
        .extended_ingredients
        .into_iter()
        .map(|i| i.name)
        .collect();

    let nutrition = recipe.nutrition.as_ref().map(|n| Nutrition {
        calories: n.amount("Calories"),
        protein: n.amount("Protein"),
        carbs: n.amount("Carbohydrates"),
        fat: n.amount("Fat"),
    });

    Recipe {
        id: recipe.id.to_string(),
        title: recipe.title,
        description: describe(&recipe.summary),
        cook_time: recipe.ready_in_minutes,
        servings: recipe.servings,
        difficulty: Difficulty::classify(recipe.ready_in_minutes, ingredients.len()),
        rating: five_star(recipe.spoonacular_score),
        image: recipe.image,
        instructions: recipe.instructions.as_deref().and_then(split_instructions),
        match_percentage: match_percentage(user_ingredients, &ingredients),
        nutrition,
        ingredients,
    }
}

/// Plain-text teaser from an HTML summary
fn describe(summary: &str) -> String {
    let text: String = strip_tags(summary)
        .chars()
        .take(DESCRIPTION_MAX_CHARS)
        .collect();
    format!("{text}...")
}

/// Remove closed `<...>` tags. A `<` that is never closed is kept as text.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
                tag.clear();
            } else {
                tag.push(c);
            }
        } else if c == '<' {
            in_tag = true;
            tag.push(c);
        } else {
            out.push(c);
        }
    }
    if in_tag {
        out.push_str(&tag);
    }
    out
}

/// Score out of 100 to a five-star rating with one decimal
fn five_star(score: f64) -> f64 {
    ((score / 20.0) * 10.0).round() / 10.0
}

fn split_instructions(text: &str) -> Option<Vec<String>> {
    if text.trim().is_empty() {
        return None;
    }
    Some(
        text.split('.')
            .map(str::trim)
            .filter(|step| step.chars().count() > MIN_INSTRUCTION_STEP_CHARS)
            .map(str::to_string)
            .collect(),
    )
}
