//! # Session storage: the key/value seam between the client and the browser
//!
//! The SanArte client keeps exactly two values between page loads: the bearer
//! `token` and the JSON-serialised `user` returned by the login endpoint. Both
//! live behind the [`SessionStorage`] trait so the same session logic runs
//! against the browser's `localStorage` ([`crate::LocalStorage`], web only) or
//! an in-memory map ([`crate::MemoryStorage`], native builds and tests).
//!
//! The trait is synchronous because `localStorage` is. Writes never fail from
//! the caller's point of view; an unavailable backend degrades to "nothing
//! stored", which the rest of the client treats as signed out.

/// Synchronous string key/value storage.
pub trait SessionStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}
