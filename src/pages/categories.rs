//! Categories Page
//!
//! Filtered view of the thought sequence with a tri-state selector:
//! everything, text only, or images only.

use leptos::*;

use crate::components::{DownloadButton, Loading};
use crate::state::global::{GlobalState, Thought, ThoughtFilter, ThoughtKind};

/// Categories page component
#[component]
pub fn Categories() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let filter = state.filter;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Categories"</h1>
                    <p class="text-gray-400 mt-1">"Browse thoughts by type"</p>
                </div>

                // Filter selector
                <select
                    on:change=move |ev| filter.set(ThoughtFilter::from_value(&event_target_value(&ev)))
                    prop:value=move || filter.get().value()
                    class="bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="all">"All Thoughts"</option>
                    <option value="text">"Text Only"</option>
                    <option value="images">"Images Only"</option>
                </select>
            </div>

            // Filtered list
            <section class="space-y-4">
                {
                    let state = state.clone();
                    move || filtered_view(&state)
                }
            </section>
        </div>
    }
}

fn filtered_view(state: &GlobalState) -> View {
    if state.user.get().is_none() {
        return placeholder("Please log in to see filtered thoughts.");
    }
    if state.loading.get() {
        return view! { <Loading /> }.into_view();
    }

    let filtered = state.filtered_thoughts();
    if filtered.is_empty() {
        return placeholder("No thoughts match this filter.");
    }

    filtered
        .into_iter()
        .map(|thought| view! { <FilteredItem thought=thought /> })
        .collect_view()
}

/// Single entry in the filtered list
#[component]
fn FilteredItem(thought: Thought) -> impl IntoView {
    let body = match thought.kind {
        ThoughtKind::Image => view! {
            <img
                src=thought.content.clone()
                alt="Filtered Thought Image"
                class="max-w-full max-h-40 rounded-lg mb-3"
            />
        }
        .into_view(),
        ThoughtKind::Text => view! {
            <p class="mb-3">{thought.content.clone()}</p>
        }
        .into_view(),
    };

    // Downloads are offered for images only here; text stays read-only
    let download = (thought.kind == ThoughtKind::Image)
        .then(|| view! { <DownloadButton thought=thought.clone() compact=true /> });

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            {body}
            <div class="flex items-center justify-between">
                <span class="text-xs text-gray-500 capitalize">{thought.category.clone()}</span>
                {download}
            </div>
        </div>
    }
}

fn placeholder(message: &'static str) -> View {
    view! {
        <p class="text-gray-400">{message}</p>
    }
    .into_view()
}
