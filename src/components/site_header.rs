//! Site Header Component
//!
//! Menu toggle, home link, and the meal search form shared by every page.

use leptos::prelude::*;

use crate::config::HOME_PAGE;
use crate::query::{navigate, search_destination};

/// Header bar; the menu button toggles the offcanvas panel
#[component]
pub fn SiteHeader(
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    // Blank queries are ignored
    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(url) = search_destination(&query.get()) {
            navigate(&url);
        }
    };

    view! {
        <header class="site-header">
            <button
                id="hamburger"
                class="hamburger"
                type="button"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <a class="brand" href=HOME_PAGE>"Meal Explorer"</a>
            <form id="searchForm" class="search-form" on:submit=on_search>
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Search meals..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
        </header>
    }
}
