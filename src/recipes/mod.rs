//! Recipe data access: Spoonacular client with a static fallback.
//!
//! Search functions never fail. Any upstream problem is logged and the
//! caller receives the fallback dataset instead.

pub mod fallback;
pub mod spoonacular;

use std::time::Duration;

use futures::future::join_all;
use thiserror::Error;

use crate::config::Config;
use crate::constants::{DEFAULT_RESULT_COUNT, MAX_DETAIL_LOOKUPS};
use crate::models::{Difficulty, Recipe};

pub use fallback::{fallback_recipe, fallback_recipes};
use spoonacular::{ComplexSearchResponse, IngredientHit, SpoonacularRecipe};

/// Failure talking to the recipe API
#[derive(Error, Debug)]
pub enum RecipeApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed: {0}")]
    Status(reqwest::StatusCode),
}

/// Optional search narrowing, shared by both search modes
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub max_ready_time: Option<u32>,
    pub diet: Option<String>,
    /// Only sent on ingredient searches
    pub intolerances: Option<String>,
    pub number: Option<u32>,
    /// Applied locally after retrieval
    pub difficulty: Option<Difficulty>,
}

impl SearchOptions {
    fn number(&self) -> u32 {
        self.number
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_RESULT_COUNT)
    }

    /// Keep only recipes satisfying the local filters
    pub fn retain(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        recipes
            .into_iter()
            .filter(|r| self.difficulty.map_or(true, |d| r.difficulty == d))
            .filter(|r| self.max_ready_time.map_or(true, |max| r.cook_time <= max))
            .collect()
    }
}

/// Client for the Spoonacular recipes API
#[derive(Debug, Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RecipeClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(format!("quickrecipes-server/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            http,
            base_url: config.spoonacular_base_url.clone(),
            api_key: config.spoonacular_api_key.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Recipes using the given ingredients, scored by match percentage
    pub async fn search_by_ingredients(
        &self,
        ingredients: &[String],
        options: &SearchOptions,
    ) -> Vec<Recipe> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("Spoonacular API key not found, returning fallback recipes");
            return options.retain(fallback_recipes(ingredients));
        };

        match self
            .try_search_by_ingredients(api_key, ingredients, options)
            .await
        {
            Ok(recipes) => options.retain(recipes),
            Err(e) => {
                tracing::error!("Error searching recipes by ingredients: {}", e);
                options.retain(fallback_recipes(ingredients))
            }
        }
    }

    /// Free-text recipe search; results carry no match percentage
    pub async fn search_by_query(&self, query: &str, options: &SearchOptions) -> Vec<Recipe> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("Spoonacular API key not found, returning fallback recipes");
            return options.retain(fallback_recipes(&[]));
        };

        match self.try_search_by_query(api_key, query, options).await {
            Ok(recipes) => options.retain(recipes),
            Err(e) => {
                tracing::error!("Error searching recipes by query: {}", e);
                options.retain(fallback_recipes(&[]))
            }
        }
    }

    /// Single recipe by id, resolved against the fallback set when the API
    /// is unavailable
    pub async fn recipe_details(&self, id: &str, ingredients: &[String]) -> Option<Recipe> {
        if let Some(api_key) = self.api_key.as_deref() {
            match self.fetch_details(api_key, id).await {
                Ok(raw) => return Some(spoonacular::convert(raw, ingredients)),
                Err(e) => tracing::error!("Error fetching recipe {}: {}", id, e),
            }
        }
        fallback_recipe(id, ingredients)
    }

    async fn try_search_by_ingredients(
        &self,
        api_key: &str,
        ingredients: &[String],
        options: &SearchOptions,
    ) -> Result<Vec<Recipe>, RecipeApiError> {
        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", api_key.to_string()),
            ("ingredients", ingredients.join(",")),
            ("number", options.number().to_string()),
            ("ranking", "2".to_string()),
            ("ignorePantry", "true".to_string()),
        ];
        if let Some(max) = options.max_ready_time {
            params.push(("maxReadyTime", max.to_string()));
        }
        if let Some(diet) = &options.diet {
            params.push(("diet", diet.clone()));
        }
        if let Some(intolerances) = &options.intolerances {
            params.push(("intolerances", intolerances.clone()));
        }

        let resp = self
            .http
            .get(format!("{}/findByIngredients", self.base_url))
            .query(&params)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(RecipeApiError::Status(resp.status()));
        }
        let hits: Vec<IngredientHit> = resp.json().await?;

        let lookups = hits.iter().take(MAX_DETAIL_LOOKUPS).map(|hit| async move {
            let id = hit.id.to_string();
            match self.fetch_details(api_key, &id).await {
                Ok(raw) => Some(spoonacular::convert(raw, ingredients)),
                Err(e) => {
                    tracing::error!("Error fetching recipe {}: {}", id, e);
                    None
                }
            }
        });

        Ok(join_all(lookups).await.into_iter().flatten().collect())
    }

    async fn try_search_by_query(
        &self,
        api_key: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Recipe>, RecipeApiError> {
        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", api_key.to_string()),
            ("query", query.to_string()),
            ("number", options.number().to_string()),
            ("addRecipeInformation", "true".to_string()),
        ];
        if let Some(max) = options.max_ready_time {
            params.push(("maxReadyTime", max.to_string()));
        }
        if let Some(diet) = &options.diet {
            params.push(("diet", diet.clone()));
        }

        let resp = self
            .http
            .get(format!("{}/complexSearch", self.base_url))
            .query(&params)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(RecipeApiError::Status(resp.status()));
        }
        let data: ComplexSearchResponse = resp.json().await?;

        Ok(data
            .results
            .into_iter()
            .map(|r| spoonacular::convert(r, &[]))
            .collect())
    }

    async fn fetch_details(
        &self,
        api_key: &str,
        id: &str,
    ) -> Result<SpoonacularRecipe, RecipeApiError> {
        let resp = self
            .http
            .get(format!("{}/{}/information", self.base_url, id))
            .query(&[("apiKey", api_key), ("includeNutrition", "true")])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(RecipeApiError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> RecipeClient {
        RecipeClient {
            http: reqwest::Client::new(),
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: None,
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_yields_fallback() {
        let client = offline_client();
        let recipes = client
            .search_by_ingredients(&["garlic".to_string()], &SearchOptions::default())
            .await;
        let scores: Vec<_> = recipes.iter().map(|r| r.match_percentage).collect();
        assert_eq!(scores, vec![Some(100), Some(100), Some(0)]);

        let recipes = client
            .search_by_query("pasta", &SearchOptions::default())
            .await;
        assert_eq!(recipes.len(), 3);
        assert!(recipes.iter().all(|r| r.match_percentage.is_none()));
    }

    #[tokio::test]
    async fn test_unreachable_api_yields_fallback() {
        let client = RecipeClient {
            api_key: Some("key".to_string()),
            ..offline_client()
        };
        let recipes = client
            .search_by_ingredients(&["eggs".to_string()], &SearchOptions::default())
            .await;
        assert_eq!(recipes.len(), 3);
    }

    #[test]
    fn test_retain_applies_local_filters() {
        let options = SearchOptions {
            max_ready_time: Some(15),
            ..Default::default()
        };
        let titles: Vec<_> = options
            .retain(fallback_recipes(&[]))
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Quick Chicken Fried Rice", "Mediterranean Chicken Salad"]
        );

        let options = SearchOptions {
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        };
        assert!(options.retain(fallback_recipes(&[])).is_empty());
    }

    #[test]
    fn test_default_number() {
        assert_eq!(SearchOptions::default().number(), DEFAULT_RESULT_COUNT);
        let options = SearchOptions {
            number: Some(0),
            ..Default::default()
        };
        assert_eq!(options.number(), DEFAULT_RESULT_COUNT);
    }
}
