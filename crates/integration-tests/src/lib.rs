//! Integration tests for the Delights by Jummy backend.
//!
//! The suites under `tests/` build the real router in-process against a
//! temporary data directory and drive it with `tower::ServiceExt::oneshot`,
//! so they need no running server, no network, and no environment setup.
//!
//! `supabase_live.rs` additionally holds `#[ignore]`d smoke tests that run
//! against a deployed instance when `DELIGHTS_BASE_URL` is set.

#![cfg_attr(not(test), forbid(unsafe_code))]
