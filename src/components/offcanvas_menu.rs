//! Offcanvas Menu Component
//!
//! Slide-in panel listing every category for quick navigation.

use leptos::prelude::*;

use crate::models::Category;
use crate::query::{category_url, navigate};

#[component]
pub fn OffcanvasMenu(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    categories: ReadSignal<Vec<Category>>,
) -> impl IntoView {
    let panel_class = move || {
        if open.get() {
            "offcanvas open"
        } else {
            "offcanvas"
        }
    };

    view! {
        <aside id="offcanvas" class=panel_class>
            <button
                id="closeOff"
                class="close-off"
                type="button"
                aria-label="Close menu"
                on:click=move |_| set_open.set(false)
            >
                "×"
            </button>
            <h3>"Categories"</h3>
            <ul id="categoryListOff" class="category-list">
                <For
                    each=move || categories.get()
                    key=|category| category.name.clone()
                    children=move |category| {
                        let name = category.name;
                        let url = category_url(&name);
                        let label = name.clone();
                        view! {
                            <li
                                data-cat=name
                                on:click=move |_| {
                                    set_open.set(false);
                                    navigate(&url);
                                }
                            >
                                {label}
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}
