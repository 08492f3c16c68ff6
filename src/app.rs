//! App Root Component
//!
//! Main application component with routing, global providers, and the
//! sequential content-load pipeline that runs once a session exists.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AuthModal, DailyToast, Nav, Toast};
use crate::pages::{About, Categories, Home};
use crate::state::daily::{build_toast_items, ToastTheme};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::rotation::ToastRotation;
use crate::state::session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state and the rotation handle to all components
    provide_global_state();
    provide_context(ToastRotation::new());

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let rotation = use_context::<ToastRotation>().expect("ToastRotation not found");

    // Restore a persisted session before anything renders content
    if let Some(user) = session::load_session() {
        state.user.set(Some(user));
        spawn_local(load_content(state.clone(), rotation));
    }

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/categories" view=Categories />
                        <Route path="/about" view=About />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Rotating daily banner (home tab only)
                <DailyToast />

                // Transient notifications
                <Toast />

                // Auth modal covers the app while logged out
                {move || {
                    state.user.get().is_none().then(|| view! { <AuthModal /> })
                }}
            </div>
        </Router>
    }
}

/// Load everything the views read, strictly in sequence: thoughts, app info,
/// daily content, then start toast rotation. Each step tolerates failure on
/// its own; a failed fetch leaves placeholder state behind and moves on.
pub async fn load_content(state: GlobalState, rotation: ToastRotation) {
    state.loading.set(true);

    match api::fetch_thoughts().await {
        Ok(thoughts) => {
            let showing_first = !thoughts.is_empty();
            state.thoughts.set(thoughts);
            state.thoughts_failed.set(false);
            state.cursor.set(0);
            // The first thought renders right away and counts as a view
            state.viewed_count.set(if showing_first { 1 } else { 0 });
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load thoughts: {}", e).into());
            state.thoughts.set(Vec::new());
            state.thoughts_failed.set(true);
            state.cursor.set(0);
            state.viewed_count.set(0);
        }
    }

    match api::fetch_app_info().await {
        Ok(info) => state.app_info.set(info),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load app info: {}", e).into());
        }
    }

    match api::fetch_daily_content().await {
        Ok(Some(doc)) => {
            state
                .toast_theme
                .set(ToastTheme::from_name(doc.theme.as_deref().unwrap_or("")));
            state.toast_items.set(build_toast_items(&doc));
            state.toast_index.set(0);
        }
        Ok(None) => {
            state.toast_theme.set(ToastTheme::Default);
            state.toast_items.set(Vec::new());
            state.toast_index.set(0);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load daily content: {}", e).into());
            state.toast_theme.set(ToastTheme::Default);
            state.toast_items.set(Vec::new());
            state.toast_index.set(0);
        }
    }

    state.loading.set(false);

    // Stays idle when the item list came up empty
    rotation.start(&state);
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
