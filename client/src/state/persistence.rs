//! Durable storage behind the session store.
//!
//! DESIGN
//! ======
//! `Session` never touches browser APIs directly. It writes through a
//! [`SessionPersistence`] so tests and SSR can inject an in-memory store while
//! the browser build uses the cookie + `localStorage` pair.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::PersistenceConfig;
use crate::util::{cookie, storage};

/// Where the raw token and the logged-in hint survive a page reload.
pub trait SessionPersistence {
    /// Persist the raw token for the cookie lifetime.
    fn store_token(&self, token: &str);
    /// Previously stored token, if any.
    fn load_token(&self) -> Option<String>;
    fn clear_token(&self);
    /// Write the UI-only "logged in" hint.
    fn mark_logged_in(&self);
    fn clear_logged_in(&self);
    fn is_marked_logged_in(&self) -> bool;
}

/// Cookie + `localStorage` persistence used by the app.
#[derive(Clone, Debug, Default)]
pub struct BrowserPersistence {
    config: PersistenceConfig,
}

impl BrowserPersistence {
    pub fn new(config: PersistenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PersistenceConfig {
        &self.config
    }
}

impl SessionPersistence for BrowserPersistence {
    fn store_token(&self, token: &str) {
        cookie::write_cookie(&cookie::set_cookie_string(
            &self.config.cookie_name,
            token,
            self.config.cookie_max_age_secs(),
        ));
    }

    fn load_token(&self) -> Option<String> {
        cookie::read_cookie(&self.config.cookie_name)
    }

    fn clear_token(&self) {
        cookie::write_cookie(&cookie::delete_cookie_string(&self.config.cookie_name));
    }

    fn mark_logged_in(&self) {
        storage::set_item(&self.config.logged_in_key, "true");
    }

    fn clear_logged_in(&self) {
        storage::remove_item(&self.config.logged_in_key);
    }

    fn is_marked_logged_in(&self) -> bool {
        storage::get_item(&self.config.logged_in_key).as_deref() == Some("true")
    }
}

#[derive(Debug, Default)]
struct MemorySlots {
    token: Option<String>,
    logged_in: bool,
}

/// Process-local persistence. Clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence {
    slots: Rc<RefCell<MemorySlots>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with a token as if a previous page had logged in.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::default();
        store.slots.borrow_mut().token = Some(token.into());
        store.slots.borrow_mut().logged_in = true;
        store
    }
}

impl SessionPersistence for MemoryPersistence {
    fn store_token(&self, token: &str) {
        self.slots.borrow_mut().token = Some(token.to_owned());
    }

    fn load_token(&self) -> Option<String> {
        self.slots.borrow().token.clone()
    }

    fn clear_token(&self) {
        self.slots.borrow_mut().token = None;
    }

    fn mark_logged_in(&self) {
        self.slots.borrow_mut().logged_in = true;
    }

    fn clear_logged_in(&self) {
        self.slots.borrow_mut().logged_in = false;
    }

    fn is_marked_logged_in(&self) -> bool {
        self.slots.borrow().logged_in
    }
}
