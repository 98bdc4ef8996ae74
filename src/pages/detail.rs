//! Meal Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, MealSource};
use crate::models::MealDetail;
use crate::query::QueryParams;
use crate::render;

pub const NO_SELECTION_MESSAGE: &str = "No meal selected.";
pub const NOT_FOUND_MESSAGE: &str = "Meal not found.";

/// Outcome of resolving the `id` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    NoSelection,
    NotFound,
    Found(MealDetail),
}

impl DetailView {
    pub fn markup(&self) -> String {
        match self {
            Self::NoSelection => render::message(NO_SELECTION_MESSAGE),
            Self::NotFound => render::message(NOT_FOUND_MESSAGE),
            Self::Found(meal) => render::meal_detail(meal),
        }
    }
}

pub async fn load_detail<S: MealSource>(source: &S, id: Option<&str>) -> DetailView {
    let Some(id) = id else {
        return DetailView::NoSelection;
    };
    match source.get_meal_by_id(id).await {
        Some(meal) => DetailView::Found(meal),
        None => DetailView::NotFound,
    }
}

#[component]
pub fn DetailPage(client: ApiClient, params: QueryParams) -> impl IntoView {
    let id = params.get_trimmed("id");
    let (markup, set_markup) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let client = client.clone();
        let id = id.clone();
        spawn_local(async move {
            let view = load_detail(&client, id.as_deref()).await;
            if let DetailView::Found(meal) = &view {
                document().set_title(&format!("{} | Meal Explorer", meal.name()));
            }
            log::debug!("[Detail] id={:?} found={}", id, matches!(view, DetailView::Found(_)));
            set_markup.set(Some(view.markup()));
        });
    });

    view! {
        <section class="detail">
            <p class="loading" class:hidden=move || markup.with(Option::is_some)>"Loading meal..."</p>
            <div id="mealDetail" inner_html=move || markup.get().unwrap_or_default()></div>
        </section>
    }
}
