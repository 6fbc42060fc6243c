pub mod favorite;
pub mod history;
pub mod ingredient;
pub mod profile;
pub mod recipe;

pub use favorite::{FavoriteRecipe, NewFavoriteRecipe};
pub use history::{NewRecipeHistory, RecipeHistory};
pub use ingredient::{NewUserIngredient, UserIngredient};
pub use profile::{NewProfile, Profile};
pub use recipe::{match_percentage, Difficulty, Nutrition, Recipe};
