#[cfg(test)]
use std::cell::RefCell;
use std::rc::Rc;

const TOKEN_KEY: &str = "token";

/// Where the bearer token lives between page loads.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    /// `remember` keeps the token across browser restarts.
    fn save(&self, token: &str, remember: bool);
    fn clear(&self);
}

/// Shared handle placed in the Dioxus context.
#[derive(Clone)]
pub struct Session(pub Rc<dyn SessionStore>);

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Session(Rc::new(store))
    }

    pub fn token(&self) -> Option<String> {
        self.0.token()
    }

    pub fn save(&self, token: &str, remember: bool) {
        self.0.save(token, remember)
    }

    pub fn clear(&self) {
        self.0.clear()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// `localStorage` when remembered, `sessionStorage` otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn session() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSessionStore {
    fn token(&self) -> Option<String> {
        [Self::local(), Self::session()]
            .into_iter()
            .flatten()
            .find_map(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn save(&self, token: &str, remember: bool) {
        let storage = if remember { Self::local() } else { Self::session() };
        match storage {
            Some(s) => {
                if s.set_item(TOKEN_KEY, token).is_err() {
                    tracing::warn!(remember, "Failed to persist session token");
                }
            }
            None => tracing::warn!(remember, "Browser storage unavailable"),
        }
    }

    fn clear(&self) {
        for storage in [Self::local(), Self::session()].into_iter().flatten() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
    remembered: RefCell<bool>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn remembered(&self) -> bool {
        *self.remembered.borrow()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str, remember: bool) {
        *self.token.borrow_mut() = Some(token.to_string());
        *self.remembered.borrow_mut() = remember;
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.remembered.borrow_mut() = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::default();
        assert!(store.token().is_none());
        store.save("abc", true);
        assert_eq!(store.token().as_deref(), Some("abc"));
        assert!(store.remembered());
        store.clear();
        assert!(store.token().is_none());
        assert!(!store.remembered());
    }

    #[test]
    fn test_session_handle_delegates() {
        let session = Session::new(MemorySessionStore::default());
        assert!(!session.is_authenticated());
        session.save("tok", false);
        assert!(session.is_authenticated());
        let cloned = session.clone();
        cloned.clear();
        assert!(!session.is_authenticated());
    }
}
