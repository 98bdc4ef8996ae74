//! In-memory `MealSource` for controller tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::api::MealSource;
use crate::models::{Category, MealDetail, MealSummary};

/// Canned responses; anything not registered behaves like a failed request (empty/absent)
#[derive(Default)]
pub struct FakeSource {
    pub categories: Vec<Category>,
    pub by_category: HashMap<String, Vec<MealSummary>>,
    pub searches: HashMap<String, Vec<MealSummary>>,
    pub details: HashMap<String, MealDetail>,
    /// Every call as "op:arg", in order
    pub calls: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn with_categories(names: &[&str]) -> Self {
        Self {
            categories: names.iter().map(|n| category(n)).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl MealSource for FakeSource {
    async fn list_categories(&self) -> Vec<Category> {
        self.record("categories".to_string());
        self.categories.clone()
    }

    async fn list_meals_by_category(&self, category: &str) -> Vec<MealSummary> {
        self.record(format!("filter:{}", category));
        self.by_category.get(category).cloned().unwrap_or_default()
    }

    async fn search_meals(&self, query: &str) -> Vec<MealSummary> {
        self.record(format!("search:{}", query));
        self.searches.get(query).cloned().unwrap_or_default()
    }

    async fn get_meal_by_id(&self, id: &str) -> Option<MealDetail> {
        self.record(format!("lookup:{}", id));
        self.details.get(id).cloned()
    }
}

pub fn category(name: &str) -> Category {
    Category {
        name: name.to_string(),
        thumbnail_url: format!("https://img/{}.png", name.to_lowercase()),
    }
}

pub fn meal(id: &str, name: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: format!("https://img/{}.jpg", id),
        area: None,
        category: None,
    }
}

/// `count` meals with ids `{prefix}-0`, `{prefix}-1`, ...
pub fn meals(prefix: &str, count: usize) -> Vec<MealSummary> {
    (0..count)
        .map(|i| meal(&format!("{}-{}", prefix, i), &format!("{} meal {}", prefix, i)))
        .collect()
}
