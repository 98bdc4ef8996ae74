//! Meal Listing Page
//!
//! Shows meals for a category, a search, or a small sample across categories.

use futures::stream::{self, StreamExt};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, MealSource};
use crate::config::{SAMPLE_CATEGORIES, SAMPLE_PER_CATEGORY};
use crate::models::{Category, MealSummary};
use crate::query::QueryParams;
use crate::render::{self, GridFragment};

/// What the listing shows; `category` wins over `search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingFilter {
    Category(String),
    Search(String),
    Sample,
}

impl ListingFilter {
    pub fn from_params(params: &QueryParams) -> Self {
        if let Some(category) = params.get_trimmed("category") {
            return Self::Category(category);
        }
        if let Some(query) = params.get_trimmed("search") {
            return Self::Search(query);
        }
        Self::Sample
    }

    pub fn heading(&self) -> String {
        match self {
            Self::Category(name) => format!("{} Meals", name),
            Self::Search(query) => format!("Results for \"{}\"", query),
            Self::Sample => "Featured Meals".to_string(),
        }
    }
}

/// Up to 3 meals from each of the first 6 categories, fetched one category at a time.
/// A category whose fetch fails contributes nothing.
pub async fn sample_meals<S: MealSource>(source: &S, categories: &[Category]) -> Vec<MealSummary> {
    stream::iter(categories.iter().take(SAMPLE_CATEGORIES))
        .then(move |category| async move {
            let meals = source.list_meals_by_category(&category.name).await;
            stream::iter(meals.into_iter().take(SAMPLE_PER_CATEGORY))
        })
        .flatten()
        .take(SAMPLE_CATEGORIES * SAMPLE_PER_CATEGORY)
        .collect()
        .await
}

pub async fn load_listing<S: MealSource>(source: &S, filter: &ListingFilter) -> Vec<MealSummary> {
    match filter {
        ListingFilter::Category(name) => source.list_meals_by_category(name).await,
        ListingFilter::Search(query) => source.search_meals(query).await,
        ListingFilter::Sample => {
            let categories = source.list_categories().await;
            sample_meals(source, &categories).await
        }
    }
}

#[component]
pub fn ListingPage(client: ApiClient, params: QueryParams) -> impl IntoView {
    let filter = ListingFilter::from_params(&params);
    let heading = filter.heading();
    // None while loading
    let (grid, set_grid) = signal::<Option<GridFragment>>(None);

    Effect::new(move |_| {
        let client = client.clone();
        let filter = filter.clone();
        spawn_local(async move {
            let meals = load_listing(&client, &filter).await;
            log::debug!("[Listing] {:?}: {} meals", filter, meals.len());
            set_grid.set(Some(render::meal_grid(&meals)));
        });
    });

    let loading = move || grid.with(Option::is_none);
    let grid_hidden = move || grid.with(|g| g.as_ref().map_or(true, |g| g.show_no_results));
    let no_results_hidden = move || !grid.with(|g| g.as_ref().is_some_and(|g| g.show_no_results));
    let markup = move || grid.with(|g| g.as_ref().map(|g| g.markup.clone()).unwrap_or_default());

    view! {
        <section class="listing">
            <h2 id="listingTitle">{heading}</h2>
            <p class="loading" class:hidden=move || !loading()>"Loading meals..."</p>
            <div id="mealsGrid" class="grid" class:hidden=grid_hidden inner_html=markup></div>
            <p id="noResults" class="no-results" class:hidden=no_results_hidden>"No meals found."</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{meal, meals, FakeSource};
    use futures::executor::block_on;

    #[test]
    fn test_filter_priority() {
        let both = QueryParams::parse("?search=pie&category=Beef");
        assert_eq!(ListingFilter::from_params(&both), ListingFilter::Category("Beef".into()));

        let search = QueryParams::parse("?search=+pie+&category=");
        assert_eq!(ListingFilter::from_params(&search), ListingFilter::Search("pie".into()));

        assert_eq!(ListingFilter::from_params(&QueryParams::parse("")), ListingFilter::Sample);
    }

    #[test]
    fn test_headings() {
        assert_eq!(ListingFilter::Category("Beef".into()).heading(), "Beef Meals");
        assert_eq!(ListingFilter::Search("pie".into()).heading(), "Results for \"pie\"");
        assert_eq!(ListingFilter::Sample.heading(), "Featured Meals");
    }

    #[test]
    fn test_category_listing_renders_tile_per_meal() {
        let mut source = FakeSource::default();
        source.by_category.insert("Seafood".into(), vec![meal("52802", "Fish pie"), meal("52959", "Baked salmon")]);

        let filter = ListingFilter::Category("Seafood".into());
        let grid = render::meal_grid(&block_on(load_listing(&source, &filter)));

        assert!(!grid.show_no_results);
        assert_eq!(grid.markup.matches("meal-card").count(), 2);
        assert!(grid.markup.contains(r#"href="meal-details.html?id=52802""#));
        assert!(grid.markup.contains(r#"href="meal-details.html?id=52959""#));
        assert_eq!(source.calls(), vec!["filter:Seafood"]);
    }

    #[test]
    fn test_failed_search_shows_no_results() {
        let source = FakeSource::default();
        let filter = ListingFilter::Search("nothing".into());
        let grid = render::meal_grid(&block_on(load_listing(&source, &filter)));
        assert!(grid.markup.is_empty());
        assert!(grid.show_no_results);
        assert_eq!(source.calls(), vec!["search:nothing"]);
    }

    #[test]
    fn test_sample_takes_three_from_first_six_categories_in_order() {
        let mut source = FakeSource::with_categories(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        for name in ["A", "B", "D", "E", "F", "G", "H"] {
            source.by_category.insert(name.into(), meals(name, 5));
        }
        // "C" is left unregistered, like a category whose fetch failed

        let sampled = block_on(load_listing(&source, &ListingFilter::Sample));
        let ids: Vec<_> = sampled.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["A-0", "A-1", "A-2", "B-0", "B-1", "B-2", "D-0", "D-1", "D-2", "E-0", "E-1", "E-2", "F-0", "F-1", "F-2"]
        );
        assert_eq!(
            source.calls(),
            vec!["categories", "filter:A", "filter:B", "filter:C", "filter:D", "filter:E", "filter:F"]
        );
    }

    #[test]
    fn test_sample_keeps_short_categories() {
        let mut source = FakeSource::with_categories(&["A", "B"]);
        source.by_category.insert("A".into(), meals("A", 1));
        source.by_category.insert("B".into(), meals("B", 2));

        let sampled = block_on(load_listing(&source, &ListingFilter::Sample));
        let ids: Vec<_> = sampled.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["A-0", "B-0", "B-1"]);
    }

    #[test]
    fn test_sample_without_categories_is_empty() {
        let source = FakeSource::default();
        assert!(block_on(load_listing(&source, &ListingFilter::Sample)).is_empty());
        assert_eq!(source.calls(), vec!["categories"]);
    }
}
