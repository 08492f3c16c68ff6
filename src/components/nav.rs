//! Navigation Component
//!
//! Header navigation bar with brand, tab links, and the user bar.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;
use crate::state::rotation::ToastRotation;
use crate::state::session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let rotation = use_context::<ToastRotation>().expect("ToastRotation not found");

    let state_for_logout = state.clone();
    let log_out = move |_: web_sys::MouseEvent| {
        rotation.stop();
        session::clear_session();
        state_for_logout.reset_to_logged_out();
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💭"</span>
                        <span class="text-xl font-bold text-white">"Daily Thought"</span>
                    </A>

                    // Tab links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/categories" label="Categories" />
                        <NavLink href="/about" label="About" />
                    </div>

                    // User bar, only while logged in
                    {move || {
                        state.user.get().map(|user| view! {
                            <div class="flex items-center space-x-3">
                                <span class="text-sm text-gray-300">{user.name}</span>
                                <button
                                    on:click=log_out.clone()
                                    class="px-3 py-2 rounded-lg text-sm font-medium text-gray-300
                                           hover:text-white hover:bg-gray-700 transition-colors"
                                >
                                    "Log Out"
                                </button>
                            </div>
                        })
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
