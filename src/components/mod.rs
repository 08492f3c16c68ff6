//! UI Components
//!
//! Reusable Leptos components for the viewer.

pub mod auth;
pub mod download;
pub mod loading;
pub mod nav;
pub mod toast;

pub use auth::AuthModal;
pub use download::DownloadButton;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::{DailyToast, Toast};
