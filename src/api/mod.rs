//! Recipe API Client
//!
//! Read-only access to TheMealDB. Every failure is logged and downgraded to an
//! empty (or absent) result, so callers never handle errors.

mod error;
mod wire;

use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::models::{Category, MealDetail, MealSummary};

pub use error::{ApiError, ApiResult};
use wire::{CategoriesEnvelope, MealsEnvelope};

/// Source of recipe data used by the page controllers
#[allow(async_fn_in_trait)]
pub trait MealSource {
    async fn list_categories(&self) -> Vec<Category>;

    async fn list_meals_by_category(&self, category: &str) -> Vec<MealSummary>;

    async fn search_meals(&self, query: &str) -> Vec<MealSummary>;

    async fn get_meal_by_id(&self, id: &str) -> Option<MealDetail>;
}

/// HTTP client for the recipe API (browser `fetch` under wasm32)
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/{endpoint}` with at most one query parameter and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, param: Option<(&str, &str)>) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("[API] GET {} {:?}", url, param);

        let mut request = self.http.get(&url);
        if let Some(pair) = param {
            request = request.query(&[pair]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        decode(&body)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    Ok(serde_json::from_str(body)?)
}

/// Downgrade a failed request to an empty value, logging the cause
pub(crate) fn settle<T: Default>(operation: &str, result: ApiResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("[API] {} failed: {}", operation, e);
            T::default()
        }
    }
}

impl MealSource for ApiClient {
    async fn list_categories(&self) -> Vec<Category> {
        let envelope: CategoriesEnvelope = settle("list_categories", self.get_json("categories.php", None).await);
        envelope
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect()
    }

    async fn list_meals_by_category(&self, category: &str) -> Vec<MealSummary> {
        let envelope: MealsEnvelope = settle(
            "list_meals_by_category",
            self.get_json("filter.php", Some(("c", category))).await,
        );
        summaries(envelope)
    }

    async fn search_meals(&self, query: &str) -> Vec<MealSummary> {
        let envelope: MealsEnvelope = settle("search_meals", self.get_json("search.php", Some(("s", query))).await);
        summaries(envelope)
    }

    async fn get_meal_by_id(&self, id: &str) -> Option<MealDetail> {
        let envelope: MealsEnvelope = settle("get_meal_by_id", self.get_json("lookup.php", Some(("i", id))).await);
        envelope
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(MealDetail::from)
    }
}

fn summaries(envelope: MealsEnvelope) -> Vec<MealSummary> {
    envelope
        .meals
        .unwrap_or_default()
        .into_iter()
        .map(MealSummary::from)
        .collect()
}
