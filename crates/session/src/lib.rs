//! Client session state and persistence.
//!
//! A session is the bearer token plus the cached user profile the backend
//! returns at login. Both travel together: the store only accepts and clears
//! whole sessions, so a token can never be persisted without its user record
//! (or the other way round).

pub mod secret;
pub mod session;
pub mod store;

pub use {
    secret::{serialize_option_secret, serialize_secret},
    session::Session,
    store::{FileStore, MemoryStore, SessionStore, StoreError},
};
