//! Frontend Models
//!
//! Domain records rendered by the pages. Built from API responses in `api::wire`.

/// Meal category (e.g. "Seafood")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub thumbnail_url: String,
}

/// Minimal meal record used in grid listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub area: Option<String>,
    pub category: Option<String>,
}

/// One filled ingredient slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// May be empty
    pub measure: String,
}

/// Full meal record for the detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetail {
    pub summary: MealSummary,
    pub instructions: String,
    pub video_url: Option<String>,
    pub source_url: Option<String>,
    /// In slot order, blank slots excluded
    pub ingredients: Vec<Ingredient>,
}

impl MealDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn name(&self) -> &str {
        &self.summary.name
    }
}
