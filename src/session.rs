//! Session persistence.
//!
//! The bearer token lives in exactly one configured substrate (cookie or
//! localStorage); the account email always sits in localStorage, since it
//! is display identity rather than a secret. Reads never fail: missing or
//! malformed state simply means "not signed in".

use stayhub_shared::config::TokenStore;
use stayhub_shared::{EMAIL_STORAGE_KEY, TOKEN_COOKIE, TOKEN_STORAGE_KEY, Credential};

use crate::web::LocalStorage;
use crate::web::cookie;

#[cfg(test)]
mod tests;

/// Lifetime of the session cookie (one day).
const TOKEN_COOKIE_MAX_AGE: u32 = 86_400;

/// Storage substrate behind the credential store.
///
/// Adapters move raw strings only; what counts as "signed in" is decided by
/// [`CredentialStore`] on top.
pub trait SessionStorageAdapter {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    /// Removes the token from every substrate it could live in, not just
    /// the active one; switching `TokenStore` between releases must not
    /// strand a stale token.
    fn clear_token(&self);
    fn email(&self) -> Option<String>;
    fn set_email(&self, email: &str);
    fn clear_email(&self);
}

/// Browser-backed adapter for the substrate selected by configuration.
pub struct WebSessionStorage {
    token_store: TokenStore,
}

impl WebSessionStorage {
    pub fn new(token_store: TokenStore) -> Self {
        Self { token_store }
    }
}

impl SessionStorageAdapter for WebSessionStorage {
    fn token(&self) -> Option<String> {
        match self.token_store {
            TokenStore::Cookie => cookie::get(TOKEN_COOKIE),
            TokenStore::LocalStorage => LocalStorage::get(TOKEN_STORAGE_KEY),
        }
    }

    fn set_token(&self, token: &str) {
        match self.token_store {
            TokenStore::Cookie => cookie::set(TOKEN_COOKIE, token, TOKEN_COOKIE_MAX_AGE),
            TokenStore::LocalStorage => {
                LocalStorage::set(TOKEN_STORAGE_KEY, token);
            }
        }
    }

    fn clear_token(&self) {
        cookie::delete(TOKEN_COOKIE);
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }

    fn email(&self) -> Option<String> {
        LocalStorage::get(EMAIL_STORAGE_KEY)
    }

    fn set_email(&self, email: &str) {
        LocalStorage::set(EMAIL_STORAGE_KEY, email);
    }

    fn clear_email(&self) {
        LocalStorage::delete(EMAIL_STORAGE_KEY);
    }
}

/// Reads and writes the persisted session through one adapter.
///
/// Token presence is the single source of truth for "signed in"; there is
/// no separate logged-in flag to fall out of sync with it.
pub struct CredentialStore<S> {
    storage: S,
}

impl<S: SessionStorageAdapter> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn token(&self) -> Option<String> {
        self.storage.token().filter(|token| !token.is_empty())
    }

    /// Current credential, if a session token is present.
    pub fn read(&self) -> Option<Credential> {
        let token = self.token()?;
        Some(Credential::new(token, self.storage.email()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persists a credential. Writes are independent per field; no
    /// atomicity across substrates is implied.
    pub fn write(&self, credential: &Credential) {
        self.storage.set_token(&credential.token);
        match &credential.email {
            Some(email) => self.storage.set_email(email),
            None => self.storage.clear_email(),
        }
    }

    /// Removes every persisted session field.
    pub fn clear(&self) {
        self.storage.clear_token();
        self.storage.clear_email();
    }
}
