//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use super::daily::{DailyToastItem, ToastTheme};
use super::session::SessionUser;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Logged-in user, if any
    pub user: RwSignal<Option<SessionUser>>,
    /// Current mode of the auth form
    pub auth_mode: RwSignal<AuthMode>,
    /// Loaded thought sequence, in store order
    pub thoughts: RwSignal<Vec<Thought>>,
    /// Set when the thought fetch failed (distinct from an empty collection)
    pub thoughts_failed: RwSignal<bool>,
    /// Cursor into the thought sequence
    pub cursor: RwSignal<usize>,
    /// How many thought renders this session has shown (informational)
    pub viewed_count: RwSignal<u32>,
    /// Active filter on the categories page
    pub filter: RwSignal<ThoughtFilter>,
    /// App info record for the about page
    pub app_info: RwSignal<Option<AppInfo>>,
    /// Items cycled through by the daily toast
    pub toast_items: RwSignal<Vec<DailyToastItem>>,
    /// Rotation index into `toast_items`
    pub toast_index: RwSignal<usize>,
    /// Theme captured when the daily content was loaded
    pub toast_theme: RwSignal<ToastTheme>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for transient toasts)
    pub success: RwSignal<Option<String>>,
}

/// A single displayable thought from the store
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Thought {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ThoughtKind,
    pub content: String,
    #[serde(default)]
    pub category: String,
}

/// Thought payload variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThoughtKind {
    Text,
    Image,
}

/// Singleton app-info record, display-only
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AppInfo {
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "buildNumber")]
    pub build_number: String,
    #[serde(default, rename = "minOS")]
    pub min_os: String,
}

/// Which mode the login/signup form is in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back!",
            AuthMode::Signup => "Join Us!",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Please log in to continue.",
            AuthMode::Signup => "Create an account to get started.",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Log In",
            AuthMode::Signup => "Sign Up",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Signup => "Already have an account?",
        }
    }

    /// Label of the link that toggles to the other mode
    pub fn switch_label(self) -> &'static str {
        self.toggled().submit_label()
    }
}

/// Tri-state selector on the categories page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThoughtFilter {
    #[default]
    All,
    Text,
    Images,
}

impl ThoughtFilter {
    /// Parse the selector's form value; anything unknown falls back to All
    pub fn from_value(value: &str) -> Self {
        match value {
            "text" => ThoughtFilter::Text,
            "images" => ThoughtFilter::Images,
            _ => ThoughtFilter::All,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ThoughtFilter::All => "all",
            ThoughtFilter::Text => "text",
            ThoughtFilter::Images => "images",
        }
    }

    pub fn matches(self, kind: ThoughtKind) -> bool {
        match self {
            ThoughtFilter::All => true,
            ThoughtFilter::Text => kind == ThoughtKind::Text,
            ThoughtFilter::Images => kind == ThoughtKind::Image,
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        user: create_rw_signal(None),
        auth_mode: create_rw_signal(AuthMode::Login),
        thoughts: create_rw_signal(Vec::new()),
        thoughts_failed: create_rw_signal(false),
        cursor: create_rw_signal(0),
        viewed_count: create_rw_signal(0),
        filter: create_rw_signal(ThoughtFilter::All),
        app_info: create_rw_signal(None),
        toast_items: create_rw_signal(Vec::new()),
        toast_index: create_rw_signal(0),
        toast_theme: create_rw_signal(ToastTheme::Default),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Thought currently under the cursor
    pub fn current_thought(&self) -> Option<Thought> {
        let thoughts = self.thoughts.get();
        if thoughts.is_empty() {
            return None;
        }
        thoughts.get(self.cursor.get() % thoughts.len()).cloned()
    }

    /// Advance the cursor with wraparound; no-op on an empty sequence
    pub fn advance(&self) {
        let len = self.thoughts.get_untracked().len();
        if len == 0 {
            return;
        }
        self.cursor.update(|i| *i = step_forward(*i, len));
        self.viewed_count.update(|c| *c += 1);
    }

    /// Retreat the cursor with wraparound; no-op on an empty sequence
    pub fn retreat(&self) {
        let len = self.thoughts.get_untracked().len();
        if len == 0 {
            return;
        }
        self.cursor.update(|i| *i = step_back(*i, len));
        self.viewed_count.update(|c| *c += 1);
    }

    /// Position display for the pager, e.g. "2 of 7"
    pub fn counter_label(&self) -> String {
        counter_text(self.cursor.get(), self.thoughts.get().len())
    }

    /// Thoughts visible under the active filter, store order preserved
    pub fn filtered_thoughts(&self) -> Vec<Thought> {
        let filter = self.filter.get();
        self.thoughts
            .get()
            .into_iter()
            .filter(|t| filter.matches(t.kind))
            .collect()
    }

    /// Reset everything a session populated back to logged-out defaults
    pub fn reset_to_logged_out(&self) {
        self.user.set(None);
        self.auth_mode.set(AuthMode::Login);
        self.thoughts.set(Vec::new());
        self.thoughts_failed.set(false);
        self.cursor.set(0);
        self.viewed_count.set(0);
        self.filter.set(ThoughtFilter::All);
        self.app_info.set(None);
        self.toast_items.set(Vec::new());
        self.toast_index.set(0);
        self.toast_theme.set(ToastTheme::Default);
        self.loading.set(false);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Next cursor position, wrapping past the end
pub fn step_forward(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Previous cursor position, wrapping below zero
pub fn step_back(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

fn counter_text(cursor: usize, len: usize) -> String {
    if len == 0 {
        "0 of 0".to_string()
    } else {
        format!("{} of {}", cursor + 1, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_thoughts() -> Vec<Thought> {
        vec![
            Thought {
                id: "t1".to_string(),
                kind: ThoughtKind::Text,
                content: "Hi".to_string(),
                category: "general".to_string(),
            },
            Thought {
                id: "t2".to_string(),
                kind: ThoughtKind::Image,
                content: "u.jpg".to_string(),
                category: "scenery".to_string(),
            },
            Thought {
                id: "t3".to_string(),
                kind: ThoughtKind::Text,
                content: "Bye".to_string(),
                category: "general".to_string(),
            },
        ]
    }

    #[test]
    fn test_step_wraps_at_both_ends() {
        assert_eq!(step_forward(2, 3), 0);
        assert_eq!(step_back(0, 3), 2);
    }

    #[test]
    fn test_step_round_trips() {
        for len in 1..5 {
            for start in 0..len {
                assert_eq!(step_back(step_forward(start, len), len), start);
                assert_eq!(step_forward(step_back(start, len), len), start);
            }
        }
    }

    #[test]
    fn test_counter_text() {
        assert_eq!(counter_text(0, 0), "0 of 0");
        assert_eq!(counter_text(0, 2), "1 of 2");
        assert_eq!(counter_text(1, 2), "2 of 2");
    }

    #[test]
    fn test_two_thought_walkthrough() {
        // "1 of 2" -> next -> "2 of 2" -> next wraps to "1 of 2"
        let len = 2;
        let mut cursor = 0;
        assert_eq!(counter_text(cursor, len), "1 of 2");
        cursor = step_forward(cursor, len);
        assert_eq!(counter_text(cursor, len), "2 of 2");
        cursor = step_forward(cursor, len);
        assert_eq!(counter_text(cursor, len), "1 of 2");
    }

    #[test]
    fn test_filter_matches() {
        let thoughts = sample_thoughts();

        let text: Vec<_> = thoughts
            .iter()
            .filter(|t| ThoughtFilter::Text.matches(t.kind))
            .collect();
        assert_eq!(text.len(), 2);
        assert!(text.iter().all(|t| t.kind == ThoughtKind::Text));

        let images: Vec<_> = thoughts
            .iter()
            .filter(|t| ThoughtFilter::Images.matches(t.kind))
            .collect();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, "t2");

        let all: Vec<_> = thoughts
            .iter()
            .filter(|t| ThoughtFilter::All.matches(t.kind))
            .collect();
        assert_eq!(all.len(), 3);
        // Store order preserved
        assert_eq!(all[0].id, "t1");
        assert_eq!(all[2].id, "t3");
    }

    #[test]
    fn test_filter_from_value() {
        assert_eq!(ThoughtFilter::from_value("text"), ThoughtFilter::Text);
        assert_eq!(ThoughtFilter::from_value("images"), ThoughtFilter::Images);
        assert_eq!(ThoughtFilter::from_value("all"), ThoughtFilter::All);
        assert_eq!(ThoughtFilter::from_value("bogus"), ThoughtFilter::All);
    }

    #[test]
    fn test_auth_mode_copy_swaps() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggled(), AuthMode::Login);
        assert_ne!(AuthMode::Login.title(), AuthMode::Signup.title());
        assert_eq!(AuthMode::Login.switch_label(), "Sign Up");
    }
}
