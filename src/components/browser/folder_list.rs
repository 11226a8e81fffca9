//! Folder grid.
//!
//! One tile per non-empty category in catalog order. While the listing is
//! loading, or when it failed or shelved nothing, a [`Notice`] takes the
//! grid's place.

use leptos::prelude::*;
use leptos_icons::Icon;

use shelf_core::format::format_count;
use shelf_core::{Category, LoadState};

use super::notice::{Notice, Tone};
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/folder_list.module.css");

#[component]
pub fn FolderList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::grid role="list" aria-label="Folders">
            {move || ctx.load.with(|load| match load {
                LoadState::Loading => view! {
                    <Notice icon=ic::SPINNER message="Loading files..." tone=Tone::Loading />
                }
                .into_any(),
                LoadState::Failed => view! {
                    <Notice
                        icon=ic::ERROR
                        message="Error loading files. Please try again later."
                        tone=Tone::Error
                    />
                }
                .into_any(),
                LoadState::Ready(library) if library.is_empty() => view! {
                    <Notice icon=ic::FOLDER_OPEN message="No files to show yet." />
                }
                .into_any(),
                LoadState::Ready(library) => library
                    .folders()
                    .into_iter()
                    .map(|(category, count)| view! { <FolderTile category=category count=count /> })
                    .collect_view()
                    .into_any(),
            })}
        </div>
    }
}

#[component]
fn FolderTile(category: Category, count: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::folder_icon(Some(category));
    let aria_label = format!("Folder: {} ({})", category.label(), format_count(count));

    view! {
        <button
            class=css::tile
            role="listitem"
            aria-label=aria_label
            on:click=move |_| ctx.open_folder(category)
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name>{category.label()}</span>
            <span class=css::count>{format_count(count)}</span>
        </button>
    }
}
