//! Auth Modal Component
//!
//! Login/signup form shown over the app while no session exists. Submitting
//! looks the user up in the store by name and email; signup falls back to
//! inserting a new record when the lookup comes back empty.

use leptos::*;

use crate::api;
use crate::app::load_content;
use crate::state::global::{AuthMode, GlobalState};
use crate::state::rotation::ToastRotation;
use crate::state::session::{self, SessionUser};

/// Modal overlay with the login/signup form
#[component]
pub fn AuthModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let rotation = use_context::<ToastRotation>().expect("ToastRotation not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let mode = state.auth_mode;

    let switch_mode = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        mode.update(|m| *m = m.toggled());
        // Entering signup starts from a blank form
        if mode.get_untracked() == AuthMode::Signup {
            set_name.set(String::new());
            set_email.set(String::new());
        }
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = name.get().trim().to_string();
        let email = email.get().trim().to_lowercase();

        if name.is_empty() || email.is_empty() {
            state_for_submit.show_error("Please fill in all fields.");
            return;
        }

        set_submitting.set(true);

        let state = state_for_submit.clone();
        let rotation = rotation.clone();
        spawn_local(async move {
            let current_mode = state.auth_mode.get_untracked();
            if let Some((user, message)) = authenticate(&state, current_mode, &name, &email).await {
                session::save_session(&user);
                state.user.set(Some(user));
                state.show_success(message);
                load_content(state.clone(), rotation).await;
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 z-40 bg-gray-900/80 backdrop-blur-sm flex items-center justify-center px-4">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md border border-gray-700 shadow-2xl">
                <h2 class="text-2xl font-bold text-center">
                    {move || mode.get().title()}
                </h2>
                <p class="text-gray-400 text-center mt-1 mb-6">
                    {move || mode.get().subtitle()}
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if submitting.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>

                <p class="text-sm text-gray-400 text-center mt-6">
                    {move || mode.get().switch_prompt()}
                    " "
                    <a
                        href="#"
                        on:click=switch_mode
                        class="text-primary-400 hover:text-primary-300 font-medium"
                    >
                        {move || mode.get().switch_label()}
                    </a>
                </p>
            </div>
        </div>
    }
}

/// Run the store side of login/signup.
///
/// Returns the adopted user and a success message, or `None` after surfacing
/// the failure as a transient notification. Signup with an existing
/// name/email pair adopts that record instead of inserting a duplicate.
async fn authenticate(
    state: &GlobalState,
    mode: AuthMode,
    name: &str,
    email: &str,
) -> Option<(SessionUser, &'static str)> {
    match api::find_user(name, email).await {
        Ok(Some(user)) => Some((
            user,
            match mode {
                AuthMode::Login => "Login Success! Now, you can use the App.",
                AuthMode::Signup => "Account found! Welcome back.",
            },
        )),
        Ok(None) => match mode {
            AuthMode::Login => {
                state.show_error("No account found with that name and email.");
                None
            }
            AuthMode::Signup => match api::create_user(name, email).await {
                Ok(user) => Some((user, "Sign Up Successful! Welcome!")),
                Err(e) => {
                    state.show_error(&format!("Auth failed: {}", e));
                    None
                }
            },
        },
        Err(e) => {
            state.show_error(&format!("Auth failed: {}", e));
            None
        }
    }
}
