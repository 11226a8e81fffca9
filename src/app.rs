//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! startup listing load, following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use shelf_core::{
    Category, FileDescriptor, Library, LoadState, LocalStorage, SortMode, Theme, ViewState,
};

use crate::components::Shell;
use crate::config::{APP_NAME, LIGHT_MODE_CLASS, LISTING_URL, THEME_STORAGE_KEY};
use crate::utils::{dom, fetch_listing};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by every component
/// with `use_context::<AppContext>()`. All UI transitions go through the
/// methods below so the [`ViewState`] stays the single source of truth for
/// what is on screen.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Startup fetch progress and, once ready, the classified library.
    pub load: RwSignal<LoadState>,
    /// Current screen, sort mode, and search term.
    pub view: RwSignal<ViewState>,
    /// Active color theme (mirrored to localStorage).
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Creates the context, restoring the persisted theme.
    pub fn new() -> Self {
        Self {
            load: RwSignal::new(LoadState::Loading),
            view: RwSignal::new(ViewState::default()),
            theme: RwSignal::new(Theme::load(&LocalStorage, THEME_STORAGE_KEY)),
        }
    }

    pub fn open_folder(&self, category: Category) {
        self.view.update(|v| v.open(category));
    }

    pub fn go_back(&self) {
        self.view.update(|v| v.back());
    }

    pub fn set_search(&self, term: String) {
        self.view.update(|v| v.set_search(term));
    }

    pub fn set_sort_mode(&self, mode: SortMode) {
        self.view.update(|v| v.set_sort_mode(mode));
    }

    /// Flip the theme and persist the new choice.
    ///
    /// A failed write is logged; the page still switches theme.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        if let Err(e) = next.save(&LocalStorage, THEME_STORAGE_KEY) {
            web_sys::console::warn_1(&format!("Theme not saved: {}", e).into());
        }
        self.theme.set(next);
    }

    /// Files the file view should render right now.
    pub fn visible_files(&self) -> Vec<FileDescriptor> {
        self.load.with(|load| match load {
            LoadState::Ready(library) => self.view.with(|v| v.visible_files(library)),
            LoadState::Loading | LoadState::Failed => Vec::new(),
        })
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Fetch and classify the listing once, then publish the result.
fn load_library(ctx: AppContext) {
    spawn_local(async move {
        let start = js_sys::Date::now();
        web_sys::console::log_1(&format!("Fetching listing from {}", LISTING_URL).into());

        match fetch_listing(LISTING_URL).await {
            Ok(entries) => {
                let total = entries.len();
                let library = Library::classify(entries);
                let summary = library
                    .folders()
                    .iter()
                    .map(|(category, count)| format!("{}: {}", category, count))
                    .collect::<Vec<_>>()
                    .join(", ");

                web_sys::console::log_1(
                    &format!(
                        "Shelved {} of {} entries in {:.0}ms ({})",
                        library.len(),
                        total,
                        js_sys::Date::now() - start,
                        summary
                    )
                    .into(),
                );
                ctx.load.set(LoadState::Ready(library));
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Error fetching repository contents: {}", e).into(),
                );
                ctx.load.set(LoadState::Failed);
            }
        }
    });
}

/// Keep `document.title` and the `<body>` theme class in sync with state.
fn setup_document_effects(ctx: AppContext) {
    Effect::new(move || {
        let title = ctx.view.with(|v| v.page_title(APP_NAME));
        dom::set_title(&title);
    });

    Effect::new(move || {
        dom::set_body_class(LIGHT_MODE_CLASS, ctx.theme.get().is_light());
    });
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the one-shot listing load
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    setup_document_effects(ctx);
    load_library(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #121212;
                    color: #e0e0e0;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            margin: 0 0 1rem 0;
                            padding-left: 1.5rem;
                            color: #ff6b6b;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #4a90e2;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
