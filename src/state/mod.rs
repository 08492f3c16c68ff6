//! State Management
//!
//! Global application state, session persistence, daily content, and the
//! toast rotation timer.

pub mod daily;
pub mod global;
pub mod rotation;
pub mod session;

pub use daily::{build_toast_items, DailyContentDoc, DailyToastItem, ToastKind, ToastTheme};
pub use global::{provide_global_state, AppInfo, AuthMode, GlobalState, Thought, ThoughtFilter, ThoughtKind};
pub use rotation::ToastRotation;
pub use session::SessionUser;
