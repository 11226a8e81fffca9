//! Page shell.
//!
//! Header on top, then either the folder grid or the toolbar plus file list,
//! depending on the current [`Screen`].

use leptos::prelude::*;

use shelf_core::Screen;

use crate::app::AppContext;
use crate::components::browser::{FileList, FolderList, Toolbar};
use crate::components::header::Header;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let screen = Memo::new(move |_| ctx.view.with(|v| v.screen));

    view! {
        <div class=css::page>
            <Header />

            <main class=css::main>
                {move || match screen.get() {
                    Screen::Browsing => view! { <FolderList /> }.into_any(),
                    Screen::Inspecting(_) => view! {
                        <Toolbar />
                        <FileList />
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
