//! Secret handling utilities.
//!
//! Re-exports secrecy types used when handling the database URL and other
//! sensitive values.

pub use secrecy::{ExposeSecret, SecretBox, SecretString};
