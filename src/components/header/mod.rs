//! Page header.
//!
//! Back button (file view only), current location title, and theme toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let folder = Memo::new(move |_| ctx.view.with(|v| v.current_folder()));

    let on_back = move |_: leptos::ev::MouseEvent| ctx.go_back();

    view! {
        <header class=css::header>
            <div class=css::navSlot>
                <Show when=move || folder.get().is_some()>
                    <button class=css::backButton on:click=on_back title="Back to folders">
                        <Icon icon=ic::CHEVRON_LEFT />
                        <span class=css::backLabel>"Back"</span>
                    </button>
                </Show>
            </div>

            <div class=css::title>
                <h1 class=css::titleLabel>
                    {move || match folder.get() {
                        Some(category) => category.label().to_string(),
                        None => APP_NAME.to_string(),
                    }}
                </h1>
                <Show when=move || folder.get().is_none()>
                    <p class=css::tagline>{APP_TAGLINE}</p>
                </Show>
            </div>

            <ThemeToggle />
        </header>
    }
}

/// Light/dark switch. Shows a sun in light mode and a moon in dark mode.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_light = Signal::derive(move || ctx.theme.get().is_light());

    view! {
        <button
            class=css::themeToggle
            on:click=move |_| ctx.toggle_theme()
            title=move || if is_light.get() { "Switch to dark mode" } else { "Switch to light mode" }
        >
            {move || if is_light.get() {
                view! { <Icon icon=ic::SUN /> }.into_any()
            } else {
                view! { <Icon icon=ic::MOON /> }.into_any()
            }}
            <span class=css::themeLabel>"Toggle Theme"</span>
        </button>
    }
}
