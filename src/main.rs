//! Daily Thought Viewer
//!
//! Client for browsing a remote collection of thoughts, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Name/email login and signup against a remote document store
//! - One-at-a-time paging through text and image thoughts, with downloads
//! - Category filtering (all / text / images)
//! - A themed daily toast that rotates through quote, tip, and achievement
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It has no server logic of its own; all persistence and
//! querying goes to the document store's REST API over HTTP, and the active
//! session lives in browser local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
