//! Meal Explorer App
//!
//! Shared page chrome plus the controller for the current page role.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, MealSource};
use crate::components::{OffcanvasMenu, SiteHeader};
use crate::config::{AppConfig, PageRole};
use crate::models::Category;
use crate::pages::{DetailPage, HomePage, ListingPage};
use crate::query;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = ApiClient::new(&config);
    let params = query::current_params();

    // State
    let (menu_open, set_menu_open) = signal(false);
    let (menu_categories, set_menu_categories) = signal(Vec::<Category>::new());

    // Fill the offcanvas category list on mount
    let menu_client = client.clone();
    Effect::new(move |_| {
        let client = menu_client.clone();
        spawn_local(async move {
            let loaded = client.list_categories().await;
            log::debug!("[App] Loaded {} menu categories", loaded.len());
            set_menu_categories.set(loaded);
        });
    });

    let page = match config.role {
        PageRole::Home => view! { <HomePage client=client /> }.into_any(),
        PageRole::Listing => view! { <ListingPage client=client params=params /> }.into_any(),
        PageRole::Detail => view! { <DetailPage client=client params=params /> }.into_any(),
    };

    view! {
        <SiteHeader menu_open=menu_open set_menu_open=set_menu_open />
        <OffcanvasMenu open=menu_open set_open=set_menu_open categories=menu_categories />
        <main class="page">{page}</main>
    }
}
