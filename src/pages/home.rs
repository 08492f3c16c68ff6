//! Home Page
//!
//! Pager over the thought sequence: one thought at a time with previous/next
//! controls, a position counter, and a download action.

use leptos::*;

use crate::components::{DownloadButton, Loading};
use crate::state::global::{GlobalState, ThoughtKind};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let controls_disabled = {
        let state = state.clone();
        move || state.thoughts.get().is_empty()
    };

    let state_for_prev = state.clone();
    let state_for_next = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Daily Thought"</h1>
                    <p class="text-gray-400 mt-1">"A little something for today"</p>
                </div>

                // Position counter
                <div class="text-sm text-gray-400">
                    {
                        let state = state.clone();
                        move || state.counter_label()
                    }
                </div>
            </div>

            // Thought display
            <section class="bg-gray-800 rounded-xl p-6 min-h-[16rem] flex items-center justify-center">
                {
                    let state = state.clone();
                    move || thought_view(&state)
                }
            </section>

            // Pager controls
            <div class="flex items-center justify-center space-x-3">
                <button
                    on:click=move |_| state_for_prev.retreat()
                    disabled=controls_disabled.clone()
                    class="px-5 py-3 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                           disabled:text-gray-600 rounded-lg font-medium transition-colors"
                >
                    "← Previous"
                </button>

                {
                    let state = state.clone();
                    move || {
                        state.current_thought().map(|thought| view! {
                            <DownloadButton thought=thought />
                        })
                    }
                }

                <button
                    on:click=move |_| state_for_next.advance()
                    disabled=controls_disabled.clone()
                    class="px-5 py-3 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                           disabled:text-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Next →"
                </button>
            </div>
        </div>
    }
}

/// Body of the thought display area for the current state
fn thought_view(state: &GlobalState) -> View {
    if state.user.get().is_none() {
        return placeholder("Please log in to see thoughts.");
    }
    if state.loading.get() {
        return view! { <Loading /> }.into_view();
    }
    if state.thoughts_failed.get() {
        return placeholder("Failed to load thoughts.");
    }

    match state.current_thought() {
        None => placeholder("No thoughts available yet."),
        Some(thought) => match thought.kind {
            ThoughtKind::Image => view! {
                <img
                    src=thought.content
                    alt="Daily Image"
                    class="max-w-full h-auto rounded-xl shadow-lg"
                />
            }
            .into_view(),
            ThoughtKind::Text => view! {
                <p class="text-xl leading-relaxed max-w-xl text-center">
                    {thought.content}
                </p>
            }
            .into_view(),
        },
    }
}

fn placeholder(message: &'static str) -> View {
    view! {
        <p class="text-gray-400">{message}</p>
    }
    .into_view()
}
