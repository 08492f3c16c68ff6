//! About Page
//!
//! Read-only app details from the `app_info/details` document. Every field
//! shows a placeholder until the record arrives.

use leptos::*;

use crate::state::global::{AppInfo, GlobalState};

/// About page component
#[component]
pub fn About() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let info = state.app_info;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"About"</h1>
                <p class="text-gray-400 mt-1">"App details and credits"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <div class="space-y-1">
                    <InfoRow label="Developer" value=move || field(&info.get(), |i| &i.developer) />
                    <InfoRow label="Version" value=move || field(&info.get(), |i| &i.version) />
                    <InfoRow label="Build Number" value=move || field(&info.get(), |i| &i.build_number) />
                    <InfoRow label="Minimum OS" value=move || field(&info.get(), |i| &i.min_os) />
                </div>
            </section>

            <section class="bg-gray-800 rounded-xl p-6 text-gray-300">
                <p>
                    "Daily Thought shows a rotating collection of quotes and images, "
                    "with a fresh themed highlight every day."
                </p>
            </section>
        </div>
    }
}

/// App-info field or the loading placeholder
fn field(info: &Option<AppInfo>, pick: impl Fn(&AppInfo) -> &str) -> String {
    info.as_ref()
        .map(|i| pick(i).to_string())
        .unwrap_or_else(|| "Loading...".to_string())
}

#[component]
fn InfoRow(
    label: &'static str,
    value: impl Fn() -> String + 'static,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
            <span class="text-gray-400">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    }
}
