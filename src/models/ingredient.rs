use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::ERR_INGREDIENT_NAME_REQUIRED;
use crate::error::{AppError, Result};

/// Pantry entry owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserIngredient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_name: String,
    pub quantity: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUserIngredient {
    pub ingredient_name: String,
    pub quantity: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

impl NewUserIngredient {
    /// Trim the name and optional quantity; an empty name is rejected
    pub fn normalized(self) -> Result<Self> {
        let ingredient_name = normalize_name(&self.ingredient_name)
            .ok_or_else(|| AppError::InvalidInput(ERR_INGREDIENT_NAME_REQUIRED.to_string()))?;

        let quantity = self
            .quantity
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());

        Ok(Self {
            ingredient_name,
            quantity,
            expiry_date: self.expiry_date,
        })
    }
}

/// Trimmed ingredient name, or `None` if nothing is left
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Split a comma separated ingredient list, dropping blank entries
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(normalize_name).collect()
}

/// Trim every name and drop blanks. Duplicates are kept so scores match the
/// comma separated form.
pub fn normalize_list<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .filter_map(|n| normalize_name(n.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredient_list() {
        assert_eq!(
            parse_ingredient_list(" chicken, rice ,,eggs,  "),
            vec!["chicken", "rice", "eggs"]
        );
        assert!(parse_ingredient_list(" , ").is_empty());
    }

    #[test]
    fn test_normalize_list_keeps_duplicates() {
        let names = ["tomato", " tomato ", "Tomato", ""];
        assert_eq!(normalize_list(&names), vec!["tomato", "tomato", "Tomato"]);
    }

    #[test]
    fn test_list_forms_agree() {
        let names = ["pasta", "pasta ", " salmon"];
        assert_eq!(
            normalize_list(&names),
            parse_ingredient_list("pasta, pasta ,salmon")
        );
    }

    #[test]
    fn test_normalized_rejects_blank_name() {
        let input = NewUserIngredient {
            ingredient_name: "   ".into(),
            quantity: None,
            expiry_date: None,
        };
        assert!(matches!(input.normalized(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_normalized_trims_fields() {
        let input = NewUserIngredient {
            ingredient_name: " basil ".into(),
            quantity: Some("  ".into()),
            expiry_date: None,
        };
        let normalized = input.normalized().unwrap();
        assert_eq!(normalized.ingredient_name, "basil");
        assert!(normalized.quantity.is_none());
    }
}
