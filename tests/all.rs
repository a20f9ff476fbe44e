//! Integration tests for the deck, gestures, responsive modes and the
//! contact form, driven through the public `App` API.
//!
//! Suites live in `suite/`; fixtures in `common/`.

mod common;
mod suite;
