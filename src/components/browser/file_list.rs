//! File tiles for the open folder.
//!
//! Renders [`AppContext::visible_files`] (sorted, then filtered). Audio files
//! get an inline player; every tile has a download link.

use leptos::prelude::*;
use leptos_icons::Icon;

use shelf_core::{EmptyReason, FileDescriptor, LoadState};

use super::notice::Notice;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let files = Memo::new(move |_| ctx.visible_files());
    let empty_reason = Memo::new(move |_| {
        ctx.load.with(|load| match load {
            LoadState::Ready(library) => ctx.view.with(|v| v.empty_reason(library)),
            LoadState::Loading | LoadState::Failed => Some(EmptyReason::EmptyFolder),
        })
    });

    view! {
        <div class=css::list role="list" aria-label="Files">
            <For
                each=move || files.get()
                key=|file| (file.name.clone(), file.sha.clone())
                children=move |file| view! { <FileTile file=file /> }
            />
            {move || empty_reason.get().map(|reason| {
                let message = match reason {
                    EmptyReason::EmptyFolder => "This folder is empty".to_string(),
                    EmptyReason::NoMatches => ctx
                        .view
                        .with(|v| format!("No files match \"{}\"", v.search)),
                };
                view! { <Notice icon=ic::FOLDER_OPEN message=message /> }
            })}
        </div>
    }
}

#[component]
fn FileTile(file: FileDescriptor) -> impl IntoView {
    let extension = file.extension();
    let icon = ic::file_icon(file.category());
    let href = file.href().to_string();
    let audio_mime = file.audio_mime();
    let aria_label = format!("File: {}", file.name);

    view! {
        <div class=css::tile role="listitem" aria-label=aria_label>
            <div class=css::info>
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::name title=file.name.clone()>{file.name.clone()}</span>
                <span class=css::badge>{format!(".{}", extension)}</span>
                <span class=css::size>{file.size_formatted.clone()}</span>
            </div>

            {audio_mime.map(|mime| view! {
                <audio class=css::player controls=true preload="none">
                    <source src=href.clone() type=mime />
                    "Your browser does not support the audio element."
                </audio>
            })}

            <a class=css::download href=href.clone() download=file.name.clone()>
                <Icon icon=ic::DOWNLOAD />
                "Download"
            </a>
        </div>
    }
}
