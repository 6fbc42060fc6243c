use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::auth::Authenticated;
use crate::constants::{ERR_SEARCH_BODY_REQUIRED, ERR_SEARCH_PARAMS_REQUIRED};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::ingredient::{normalize_list, parse_ingredient_list};
use crate::models::{Difficulty, Recipe};
use crate::recipes::SearchOptions;
use crate::AppState;

/// Query string of `GET /api/recipes/search`.
///
/// Everything arrives as text; numbers that fail to parse are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub ingredients: Option<String>,
    pub query: Option<String>,
    pub max_ready_time: Option<String>,
    pub diet: Option<String>,
    pub intolerances: Option<String>,
    pub number: Option<String>,
    pub difficulty: Option<String>,
}

impl SearchParams {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            max_ready_time: parse_lenient(self.max_ready_time.as_deref()),
            diet: non_empty(self.diet.as_deref()),
            intolerances: non_empty(self.intolerances.as_deref()),
            number: parse_lenient(self.number.as_deref()),
            difficulty: self.difficulty.as_deref().and_then(Difficulty::parse),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub ingredients: Option<Vec<String>>,
    pub query: Option<String>,
    #[serde(default)]
    pub filters: Option<SearchFilters>,
}

/// Body filters. Numbers may arrive as JSON numbers or numeric strings;
/// anything else is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub max_ready_time: Option<u32>,
    pub diet: Option<String>,
    pub intolerances: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub number: Option<u32>,
    pub difficulty: Option<String>,
}

fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => parse_lenient(Some(s.as_str())),
        _ => None,
    })
}

impl From<SearchFilters> for SearchOptions {
    fn from(filters: SearchFilters) -> Self {
        SearchOptions {
            max_ready_time: filters.max_ready_time,
            diet: non_empty(filters.diet.as_deref()),
            intolerances: non_empty(filters.intolerances.as_deref()),
            number: filters.number,
            difficulty: filters.difficulty.as_deref().and_then(Difficulty::parse),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub recipes: Vec<Recipe>,
    pub count: usize,
}

impl From<Vec<Recipe>> for SearchResponse {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self {
            count: recipes.len(),
            recipes,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RecipeParams {
    /// Comma separated; used to score the recipe
    pub ingredients: Option<String>,
}

/// Search recipes from query string parameters
///
/// GET /api/recipes/search?ingredients=chicken,rice&maxReadyTime=30
pub async fn search_recipes_get(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let options = params.options();
    let ingredients = params
        .ingredients
        .as_deref()
        .map(parse_ingredient_list)
        .unwrap_or_default();
    let query = non_empty(params.query.as_deref());

    run_search(&state, ingredients, query, &options, ERR_SEARCH_PARAMS_REQUIRED).await
}

/// Search recipes from a JSON body
///
/// POST /api/recipes/search {"ingredients": [...], "query": "...", "filters": {...}}
pub async fn search_recipes_post(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>> {
    let Json(payload) = payload?;
    let options: SearchOptions = payload.filters.unwrap_or_default().into();
    let ingredients = normalize_list(&payload.ingredients.unwrap_or_default());
    let query = non_empty(payload.query.as_deref());

    run_search(&state, ingredients, query, &options, ERR_SEARCH_BODY_REQUIRED).await
}

/// Ingredient search over the caller's saved pantry
///
/// GET /api/recipes/suggestions
pub async fn pantry_suggestions(
    State(state): State<AppState>,
    auth: Authenticated,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let pool = state.db()?;
    let pantry = db::ingredients::names(pool, auth.user.id).await?;
    if pantry.is_empty() {
        return Err(AppError::InvalidInput(
            "Add ingredients to your pantry first".to_string(),
        ));
    }

    let recipes = state
        .recipes
        .search_by_ingredients(&pantry, &params.options())
        .await;
    tracing::info!(
        "Pantry suggestions for user {}: {} recipes",
        auth.user.id,
        recipes.len()
    );
    Ok(Json(recipes.into()))
}

/// Single recipe by id
///
/// GET /api/recipes/:id?ingredients=a,b
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RecipeParams>,
) -> Result<Json<Recipe>> {
    let ingredients = params
        .ingredients
        .as_deref()
        .map(parse_ingredient_list)
        .unwrap_or_default();

    state
        .recipes
        .recipe_details(&id, &ingredients)
        .await
        .map(Json)
        .ok_or(AppError::RecipeNotFound)
}

async fn run_search(
    state: &AppState,
    ingredients: Vec<String>,
    query: Option<String>,
    options: &SearchOptions,
    missing_message: &str,
) -> Result<Json<SearchResponse>> {
    let recipes = if !ingredients.is_empty() {
        state
            .recipes
            .search_by_ingredients(&ingredients, options)
            .await
    } else if let Some(query) = query {
        state.recipes.search_by_query(&query, options).await
    } else {
        return Err(AppError::InvalidInput(missing_message.to_string()));
    };

    tracing::info!("Recipe search returned {} recipes", recipes.len());
    Ok(Json(recipes.into()))
}

fn parse_lenient(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse().ok())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
