//! Centered icon + message block used for loading, error, and empty states.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

stylance::import_crate_style!(css, "src/components/browser/notice.module.css");

/// Visual tone of a [`Notice`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Loading,
    Error,
}

#[component]
pub fn Notice(
    icon: IconData,
    #[prop(into)] message: String,
    #[prop(optional)] tone: Tone,
) -> impl IntoView {
    let (class, icon_class) = match tone {
        Tone::Neutral => (css::notice.to_string(), css::icon.to_string()),
        Tone::Loading => (
            css::notice.to_string(),
            format!("{} {}", css::icon, css::spin),
        ),
        Tone::Error => (
            format!("{} {}", css::notice, css::error),
            css::icon.to_string(),
        ),
    };

    view! {
        <div class=class role="status">
            <span class=icon_class aria-hidden="true"><Icon icon=icon /></span>
            <p class=css::message>{message}</p>
        </div>
    }
}
