//! Wire Format
//!
//! Serde mirrors of TheMealDB JSON and their conversion into domain models.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::models::{Category, Ingredient, MealDetail, MealSummary};

/// Number of `strIngredientN` / `strMeasureN` slots in a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// `categories.php` response
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<WireCategory>>,
}

/// `filter.php`, `search.php`, `lookup.php` response (`meals` is `null` when nothing matched)
#[derive(Debug, Default, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<WireMeal>>,
}

#[derive(Debug, Deserialize)]
pub struct WireCategory {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumb: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Everything else, including the numbered ingredient/measure slots
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl WireMeal {
    /// Trimmed text of a numbered slot such as `strIngredient3`; empty when missing or null
    fn slot(&self, prefix: &str, n: usize) -> &str {
        self.extra
            .get(&format!("{}{}", prefix, n))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("")
    }
}

/// Collect filled ingredient slots 1..=20 in order; a slot counts only if its name is non-blank
pub fn extract_ingredients(meal: &WireMeal) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|n| {
            let name = meal.slot("strIngredient", n);
            if name.is_empty() {
                return None;
            }
            Some(Ingredient {
                name: name.to_string(),
                measure: meal.slot("strMeasure", n).to_string(),
            })
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Category {
            name: wire.name,
            thumbnail_url: wire.thumb.unwrap_or_default(),
        }
    }
}

impl From<WireMeal> for MealSummary {
    fn from(wire: WireMeal) -> Self {
        MealSummary {
            id: wire.id,
            name: wire.name.unwrap_or_default(),
            thumbnail_url: wire.thumb.unwrap_or_default(),
            area: non_blank(wire.area),
            category: non_blank(wire.category),
        }
    }
}

impl From<WireMeal> for MealDetail {
    fn from(mut wire: WireMeal) -> Self {
        let ingredients = extract_ingredients(&wire);
        let instructions = wire.instructions.take().unwrap_or_default();
        let video_url = non_blank(wire.youtube.take());
        let source_url = non_blank(wire.source.take());
        MealDetail {
            summary: MealSummary::from(wire),
            instructions,
            video_url,
            source_url,
            ingredients,
        }
    }
}
