//! Home Page
//!
//! Grid of all categories, each linking to its listing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, MealSource};
use crate::render::{self, GridFragment};

#[component]
pub fn HomePage(client: ApiClient) -> impl IntoView {
    let (grid, set_grid) = signal::<Option<GridFragment>>(None);

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            let categories = client.list_categories().await;
            log::debug!("[Home] Loaded {} categories", categories.len());
            set_grid.set(Some(render::category_grid(&categories)));
        });
    });

    let markup = move || grid.with(|g| g.as_ref().map(|g| g.markup.clone()).unwrap_or_default());
    let empty = move || grid.with(|g| g.as_ref().is_some_and(|g| g.show_no_results));

    view! {
        <section class="home">
            <h2>"Browse by Category"</h2>
            <p class="loading" class:hidden=move || grid.with(Option::is_some)>"Loading categories..."</p>
            <div id="categoryGrid" class="grid" class:hidden=empty inner_html=markup></div>
            <p class="no-results" class:hidden=move || !empty()>"No categories available."</p>
        </section>
    }
}
