// ============================================================================
// SESSION STATE - UI-wide state: theme, identity, transient UI flags
// ============================================================================
// `SessionStore` is the only writer. Every mutation goes through
// `dispatch`, produces a fresh `Rc<SessionState>` snapshot and notifies
// subscribers. Theme and token survive restarts through `KeyValueStore`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::models::UserInfo;
use crate::services::token::{resolve_token, TokenError};
use crate::state::reactivity::{Subscribers, SubscriptionId};
use crate::theme::Theme;
use crate::utils::constants::{STORAGE_KEY_THEME, STORAGE_KEY_TOKEN};
use crate::utils::storage::{KeyValueStore, StorageError};
use crate::utils::timezone::resolve_timezone;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Immutable snapshot of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub timezone: String,
    pub theme: Option<Theme>,
    pub user_info: Option<UserInfo>,
    pub reload: bool,
    pub breadcrumb: Option<Vec<String>>,
    pub menu_collapsed: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.user_info.is_some()
    }
}

/// Named mutations of [`SessionState`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    ChangeTheme(String),
    SaveToken(String),
    ClearToken,
    SetReload(bool),
    SetBreadcrumb(Vec<String>),
    ToggleMenuCollapsed,
}

pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    state: RefCell<Rc<SessionState>>,
    subscribers: Subscribers<Rc<SessionState>>,
    restore_error: RefCell<Option<Rc<TokenError>>>,
}

impl SessionStore {
    /// Restores theme and identity from `storage`.
    ///
    /// A persisted token that does not decode leaves the store logged out;
    /// the failure is kept in [`restore_error`](Self::restore_error) and the
    /// stored value is left as it is.
    pub fn open(storage: Rc<dyn KeyValueStore>) -> Self {
        let theme = storage
            .get(STORAGE_KEY_THEME)
            .and_then(|value| Theme::parse(&value));

        let (user_info, restore_error) = match storage.get(STORAGE_KEY_TOKEN) {
            None => (None, None),
            Some(token) => match resolve_token(&token) {
                Ok(info) => {
                    log::info!("✅ Session restored for {}", info.user_id);
                    (Some(info), None)
                }
                Err(e) => {
                    log::warn!("⚠️ Persisted token could not be decoded: {}", e);
                    (None, Some(Rc::new(e)))
                }
            },
        };

        let state = SessionState {
            timezone: resolve_timezone(),
            theme,
            user_info,
            reload: false,
            breadcrumb: None,
            menu_collapsed: false,
        };

        Self {
            storage,
            state: RefCell::new(Rc::new(state)),
            subscribers: Subscribers::new(),
            restore_error: RefCell::new(restore_error),
        }
    }

    /// Store backed by the browser's localStorage.
    pub fn open_browser() -> Self {
        Self::open(Rc::new(crate::utils::storage::BrowserStorage::new()))
    }

    pub fn snapshot(&self) -> Rc<SessionState> {
        self.state.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in()
    }

    /// Why the persisted token failed to decode at startup. Cleared by the
    /// next `save_token` or `clear_token`.
    pub fn restore_error(&self) -> Option<Rc<TokenError>> {
        self.restore_error.borrow().clone()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Rc<SessionState>) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    /// Applies `action` and returns the new snapshot. On error nothing
    /// changes and nobody is notified.
    pub fn dispatch(&self, action: SessionAction) -> Result<Rc<SessionState>, SessionError> {
        let mut next = (*self.snapshot()).clone();

        match action {
            SessionAction::ChangeTheme(value) => match Theme::parse(&value) {
                Some(theme) => {
                    self.storage.set(STORAGE_KEY_THEME, theme.as_str())?;
                    next.theme = Some(theme);
                    log::info!("🎨 Theme set to {}", theme.as_str());
                }
                None => {
                    self.storage.remove(STORAGE_KEY_THEME)?;
                    next.theme = None;
                    log::info!("🎨 Theme reset to default");
                }
            },
            SessionAction::SaveToken(token) => {
                let info = resolve_token(&token)?;
                self.storage.set(STORAGE_KEY_TOKEN, &token)?;
                log::info!("🔐 Logged in as {}", info.user_id);
                next.user_info = Some(info);
                self.restore_error.borrow_mut().take();
            }
            SessionAction::ClearToken => {
                self.storage.remove(STORAGE_KEY_TOKEN)?;
                next.user_info = None;
                self.restore_error.borrow_mut().take();
                log::info!("👋 Logged out");
            }
            SessionAction::SetReload(value) => next.reload = value,
            SessionAction::SetBreadcrumb(items) => next.breadcrumb = Some(items),
            SessionAction::ToggleMenuCollapsed => next.menu_collapsed = !next.menu_collapsed,
        }

        let next = Rc::new(next);
        *self.state.borrow_mut() = next.clone();
        self.subscribers.notify(&next);
        Ok(next)
    }

    pub fn change_theme(&self, value: &str) -> Result<Rc<SessionState>, SessionError> {
        self.dispatch(SessionAction::ChangeTheme(value.to_string()))
    }

    pub fn save_token(&self, token: &str) -> Result<Rc<SessionState>, SessionError> {
        self.dispatch(SessionAction::SaveToken(token.to_string()))
    }

    pub fn clear_token(&self) -> Result<Rc<SessionState>, SessionError> {
        self.dispatch(SessionAction::ClearToken)
    }

    pub fn set_reload(&self, value: bool) -> Rc<SessionState> {
        self.dispatch_infallible(SessionAction::SetReload(value))
    }

    pub fn set_breadcrumb(&self, items: Vec<String>) -> Rc<SessionState> {
        self.dispatch_infallible(SessionAction::SetBreadcrumb(items))
    }

    pub fn toggle_menu_collapsed(&self) -> Rc<SessionState> {
        self.dispatch_infallible(SessionAction::ToggleMenuCollapsed)
    }

    // In-memory actions never touch storage or tokens
    fn dispatch_infallible(&self, action: SessionAction) -> Rc<SessionState> {
        match self.dispatch(action) {
            Ok(state) => state,
            Err(e) => {
                log::error!("❌ In-memory session update failed: {}", e);
                self.snapshot()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use std::cell::Cell;

    fn token_for(sub: &str) -> String {
        let payload = serde_json::json!({ "sub": sub, "roleId": 1 });
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap()),
            URL_SAFE_NO_PAD.encode(b"sig")
        )
    }

    fn store_with(storage: &Rc<MemoryStorage>) -> SessionStore {
        SessionStore::open(storage.clone())
    }

    #[test]
    fn fresh_store_is_logged_out_with_defaults() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage);
        let state = store.snapshot();

        assert!(!state.is_logged_in());
        assert_eq!(state.theme, None);
        assert!(!state.reload);
        assert_eq!(state.breadcrumb, None);
        assert!(!state.menu_collapsed);
        assert!(!state.timezone.is_empty());
        assert!(store.restore_error().is_none());
    }

    #[test]
    fn persisted_values_are_restored() {
        let token = token_for("alice");
        let storage = Rc::new(MemoryStorage::with_entries([
            (STORAGE_KEY_THEME, "dark"),
            (STORAGE_KEY_TOKEN, token.as_str()),
        ]));
        let store = store_with(&storage);
        let state = store.snapshot();

        assert_eq!(state.theme, Some(Theme::Dark));
        assert_eq!(state.user_info.as_ref().map(|u| u.user_id.as_str()), Some("alice"));
        assert_eq!(state.user_info.as_ref().map(|u| u.token.as_str()), Some(token.as_str()));
    }

    #[test]
    fn unknown_persisted_theme_means_default() {
        let storage = Rc::new(MemoryStorage::with_entries([(STORAGE_KEY_THEME, "light")]));
        assert_eq!(store_with(&storage).snapshot().theme, None);
    }

    #[test]
    fn malformed_persisted_token_is_surfaced_not_fatal() {
        let storage = Rc::new(MemoryStorage::with_entries([(STORAGE_KEY_TOKEN, "garbage")]));
        let store = store_with(&storage);

        assert!(!store.is_logged_in());
        assert!(matches!(
            store.restore_error().as_deref(),
            Some(TokenError::Malformed { segments: 1 })
        ));
        // left for the caller to decide
        assert!(storage.contains(STORAGE_KEY_TOKEN));
    }

    #[test]
    fn login_after_failed_restore_clears_restore_error() {
        let storage = Rc::new(MemoryStorage::with_entries([(STORAGE_KEY_TOKEN, "garbage")]));
        let store = store_with(&storage);
        assert!(store.restore_error().is_some());

        store.save_token(&token_for("carol")).unwrap();
        assert!(store.is_logged_in());
        assert!(store.restore_error().is_none());
    }

    #[test]
    fn logout_after_failed_restore_clears_restore_error() {
        let storage = Rc::new(MemoryStorage::with_entries([(STORAGE_KEY_TOKEN, "a.b")]));
        let store = store_with(&storage);
        assert!(store.restore_error().is_some());

        store.clear_token().unwrap();
        assert!(store.restore_error().is_none());
        assert!(!storage.contains(STORAGE_KEY_TOKEN));
    }

    #[test]
    fn dark_then_light_round_trip() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage);

        let state = store.change_theme("dark").unwrap();
        assert_eq!(state.theme, Some(Theme::Dark));
        assert_eq!(storage.get(STORAGE_KEY_THEME).as_deref(), Some("dark"));

        let state = store.change_theme("light").unwrap();
        assert_eq!(state.theme, None);
        assert!(!storage.contains(STORAGE_KEY_THEME));
    }

    #[test]
    fn save_then_clear_round_trip() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage);
        let token = token_for("bob");

        let state = store.save_token(&token).unwrap();
        assert!(state.is_logged_in());
        assert_eq!(state.user_info.as_ref().unwrap().user_id, "bob");
        assert_eq!(storage.get(STORAGE_KEY_TOKEN), Some(token));

        let state = store.clear_token().unwrap();
        assert!(!state.is_logged_in());
        assert!(!store.is_logged_in());
        assert!(!storage.contains(STORAGE_KEY_TOKEN));
    }

    #[test]
    fn malformed_token_is_rejected_without_side_effects() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage);
        let before = store.snapshot();

        let result = store.save_token("not-a-token");
        assert!(matches!(result, Err(SessionError::Token(_))));
        assert!(!storage.contains(STORAGE_KEY_TOKEN));
        assert!(Rc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn ui_flags_mutate_in_memory() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage);

        assert!(store.set_reload(true).reload);
        let crumbs = vec!["Problems".to_string(), "A + B".to_string()];
        assert_eq!(store.set_breadcrumb(crumbs.clone()).breadcrumb, Some(crumbs));
        assert!(store.toggle_menu_collapsed().menu_collapsed);
        assert!(!store.toggle_menu_collapsed().menu_collapsed);
        assert!(!storage.contains(STORAGE_KEY_THEME));
    }

    #[test]
    fn snapshots_are_not_shared_between_mutations() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage);

        let first = store.snapshot();
        let second = store.set_reload(true);
        assert!(!first.reload);
        assert!(second.reload);
    }

    #[test]
    fn subscribers_see_every_successful_mutation() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage);
        let calls = Rc::new(Cell::new(0));
        let last_collapsed = Rc::new(Cell::new(false));

        let (c, l) = (calls.clone(), last_collapsed.clone());
        let id = store.subscribe(move |state| {
            c.set(c.get() + 1);
            l.set(state.menu_collapsed);
        });

        store.toggle_menu_collapsed();
        assert_eq!(calls.get(), 1);
        assert!(last_collapsed.get());

        let _ = store.save_token("bad");
        assert_eq!(calls.get(), 1);

        store.unsubscribe(id);
        store.set_reload(true);
        assert_eq!(calls.get(), 1);
    }
}
