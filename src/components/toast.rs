//! Toast Components
//!
//! Two unrelated banners share this module: transient success/error
//! notifications, and the rotating daily-content toast themed by the
//! `daily_content` document.

use leptos::*;
use leptos_router::use_location;

use crate::state::global::GlobalState;

/// Transient notification container (auth results, load failures)
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (icon, bg_class) = match variant {
        ToastVariant::Success => ("✓", "bg-green-600"),
        ToastVariant::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

/// Rotating daily-content banner.
///
/// Renders only while the home tab is active. Navigating away hides the
/// banner without touching the rotation timer, so coming back shows
/// whichever item the cycle has reached.
#[component]
pub fn DailyToast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();

    view! {
        {move || {
            if location.pathname.get() != "/" {
                return view! {}.into_view();
            }

            let items = state.toast_items.get();
            if items.is_empty() {
                return view! {}.into_view();
            }

            let item = items[state.toast_index.get() % items.len()].clone();
            let theme = state.toast_theme.get();

            view! {
                <div
                    class="fixed top-5 left-5 z-50 w-72 rounded-2xl px-4 py-4 text-sm
                           leading-relaxed shadow-2xl border border-white/15 pointer-events-none"
                    style=theme.style()
                >
                    <p class="flex items-start space-x-2">
                        <span class="text-lg">{item.kind.icon()}</span>
                        <span>
                            <strong>{item.kind.label()}": "</strong>
                            {item.content}
                        </span>
                    </p>
                </div>
            }.into_view()
        }}
    }
}
