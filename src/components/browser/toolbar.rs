//! File view toolbar: search box and sort select.
//!
//! Both write straight into the view state; the file list re-derives its
//! tiles on every change.

use leptos::prelude::*;
use leptos_icons::Icon;

use shelf_core::SortMode;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    view! {
        <div class=css::toolbar>
            <SearchBar />
            <SortSelect />
        </div>
    }
}

#[component]
fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <label class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                class=css::searchInput
                type="search"
                placeholder="Search files..."
                aria-label="Search files"
                prop:value=move || ctx.view.with(|v| v.search.clone())
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn SortSelect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_change = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<SortMode>() {
            Ok(mode) => ctx.set_sort_mode(mode),
            Err(e) => web_sys::console::warn_1(&e.into()),
        }
    };

    view! {
        <select
            class=css::sort
            aria-label="Sort files"
            prop:value=move || ctx.view.with(|v| v.sort_mode.as_str())
            on:change=on_change
        >
            {SortMode::ALL
                .into_iter()
                .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
                .collect_view()}
        </select>
    }
}
