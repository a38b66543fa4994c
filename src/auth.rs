//! Auth Session Bridge
//!
//! Read-only access to the session owned by the external identity
//! provider. The provider script manages sign-in, token refresh, and
//! persistence; this module only reads the cached session record, notifies
//! subscribers when it changes, and clears it on sign-out. Provider
//! internals are out of scope.

use std::cell::{Cell, RefCell};

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Local storage key the identity provider persists the session under.
const SESSION_KEY: &str = "fundingsense_session";

/// Default hosted sign-in page of the identity provider.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:8000/auth/sign-in";

/// Signed-in user as supplied by the identity provider.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Two-letter fallback for the avatar when no image is set.
    pub fn avatar_initials(&self) -> String {
        self.email.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Provider-owned session record. The UI holds a read-only cached copy for
/// the component's lifetime and only ever reads `user`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Session {
    pub user: User,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

fn parse_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// One-shot read of the current session, if any.
pub fn get_session() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    parse_session(&raw)
}

type AuthCallback = Box<dyn Fn(Option<Session>)>;

thread_local! {
    static SUBSCRIBERS: RefCell<Vec<(u32, AuthCallback)>> = RefCell::new(Vec::new());
    static NEXT_ID: Cell<u32> = Cell::new(0);
}

/// Handle returned by [`on_auth_state_change`]; callers must unsubscribe
/// on teardown or the callback outlives its view.
pub struct AuthSubscription {
    id: u32,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        SUBSCRIBERS.with(|subs| {
            subs.borrow_mut().retain(|(id, _)| *id != self.id);
        });
    }
}

/// Subscribe to sign-in/sign-out events. The callback must be idempotent:
/// it fires on every auth event, including repeats of the current state.
pub fn on_auth_state_change(callback: impl Fn(Option<Session>) + 'static) -> AuthSubscription {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    SUBSCRIBERS.with(|subs| {
        subs.borrow_mut().push((id, Box::new(callback)));
    });
    AuthSubscription { id }
}

fn dispatch(session: Option<Session>) {
    SUBSCRIBERS.with(|subs| {
        for (_, callback) in subs.borrow().iter() {
            callback(session.clone());
        }
    });
}

/// Re-read the session and fan it out to all subscribers.
fn notify_all() {
    dispatch(get_session());
}

/// Clear the cached session and notify subscribers.
pub fn sign_out() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
    dispatch(None);
}

/// Navigate to the provider's hosted sign-in page.
pub fn redirect_to_sign_in() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(DEFAULT_AUTH_URL);
    }
}

/// Watch for session changes written by the provider in this or another
/// tab. Installed once at app start; the listener lives for the lifetime
/// of the page.
pub fn init_storage_listener() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_storage = Closure::wrap(Box::new(move |event: web_sys::StorageEvent| {
        if event.key().as_deref() == Some(SESSION_KEY) {
            notify_all();
        }
    }) as Box<dyn FnMut(web_sys::StorageEvent)>);

    if window
        .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&"Failed to install auth storage listener".into());
    }
    on_storage.forget();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_parse_session_reads_user_fields() {
        let raw = r#"{
            "user": {
                "id": "u-42",
                "email": "founder@example.com",
                "user_metadata": {"avatar_url": "https://cdn/a.png"}
            },
            "expires_at": 1767225600
        }"#;

        let session = parse_session(raw).unwrap();
        assert_eq!(session.user.id, "u-42");
        assert_eq!(session.user.email, "founder@example.com");
        assert_eq!(
            session.user.user_metadata.avatar_url.as_deref(),
            Some("https://cdn/a.png")
        );
    }

    #[test]
    fn test_parse_session_tolerates_missing_metadata() {
        let raw = r#"{"user": {"id": "u-1", "email": "a@b.c"}}"#;
        let session = parse_session(raw).unwrap();
        assert_eq!(session.user.user_metadata.avatar_url, None);
        assert_eq!(session.expires_at, None);

        assert!(parse_session("not json").is_none());
    }

    #[test]
    fn test_avatar_initials_come_from_email() {
        let user = User {
            id: "u-1".to_string(),
            email: "founder@example.com".to_string(),
            user_metadata: UserMetadata::default(),
        };
        assert_eq!(user.avatar_initials(), "FO");
    }

    #[test]
    fn test_subscription_fires_until_unsubscribed() {
        let calls = Rc::new(Cell::new(0));

        let calls_a = Rc::clone(&calls);
        let sub_a = on_auth_state_change(move |_| calls_a.set(calls_a.get() + 1));
        let calls_b = Rc::clone(&calls);
        let sub_b = on_auth_state_change(move |_| calls_b.set(calls_b.get() + 1));

        dispatch(None);
        assert_eq!(calls.get(), 2);

        sub_a.unsubscribe();
        dispatch(None);
        assert_eq!(calls.get(), 3);

        sub_b.unsubscribe();
        dispatch(None);
        assert_eq!(calls.get(), 3);
    }
}
