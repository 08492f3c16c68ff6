//! Session Persistence
//!
//! The adopted user is kept in browser local storage under a fixed key so a
//! reload lands back in the logged-in state without another store lookup.

/// Local storage key holding the serialized session
pub const SESSION_STORAGE_KEY: &str = "daily_thought_user";

/// The locally persisted identity of the logged-in user
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Restore the persisted session, if any
pub fn load_session() -> Option<SessionUser> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            // Unreadable session data is treated as logged out
            web_sys::console::error_1(&format!("Stored session unreadable: {}", e).into());
            None
        }
    }
}

/// Persist an adopted session
pub fn save_session(user: &SessionUser) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(SESSION_STORAGE_KEY, &json);
            }
        }
    }
}

/// Remove the persisted session at logout
pub fn clear_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_wire_format() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id":"u1","name":"Ann","email":"a@x.com"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "a@x.com");

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"email\":\"a@x.com\""));
    }
}
