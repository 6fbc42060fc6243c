use serde::{Deserialize, Serialize};

use crate::constants::{
    HARD_COOK_TIME_MINUTES, HARD_INGREDIENT_COUNT, MEDIUM_COOK_TIME_MINUTES,
    MEDIUM_INGREDIENT_COUNT,
};

/// Recipe as served to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Total time in minutes
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    /// Five-star scale, one decimal
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    /// Share of the caller's ingredients this recipe uses, 0..=100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Difficulty tier derived from cook time and ingredient count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn classify(cook_time: u32, ingredient_count: usize) -> Self {
        if cook_time > HARD_COOK_TIME_MINUTES || ingredient_count > HARD_INGREDIENT_COUNT {
            Difficulty::Hard
        } else if cook_time > MEDIUM_COOK_TIME_MINUTES
            || ingredient_count > MEDIUM_INGREDIENT_COUNT
        {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    /// Parse a tier name, ignoring case. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Percentage of `user_ingredients` found among `recipe_ingredients`.
///
/// An ingredient counts as found when either name contains the other,
/// ignoring case. Returns `None` for an empty user list.
pub fn match_percentage<U, R>(user_ingredients: &[U], recipe_ingredients: &[R]) -> Option<u32>
where
    U: AsRef<str>,
    R: AsRef<str>,
{
    if user_ingredients.is_empty() {
        return None;
    }

    let recipe: Vec<String> = recipe_ingredients
        .iter()
        .map(|r| r.as_ref().to_lowercase())
        .collect();

    let found = user_ingredients
        .iter()
        .map(|u| u.as_ref().to_lowercase())
        .filter(|u| recipe.iter().any(|r| r.contains(u.as_str()) || u.contains(r.as_str())))
        .count();

    let ratio = found as f64 / user_ingredients.len() as f64;
    Some((ratio * 100.0).round() as u32)
}

impl Recipe {
    /// Recompute the match percentage against the caller's ingredients
    pub fn with_match(mut self, user_ingredients: &[String]) -> Self {
        self.match_percentage = match_percentage(user_ingredients, &self.ingredients);
        self
    }
}
