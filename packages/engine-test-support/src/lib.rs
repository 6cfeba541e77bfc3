//! Engine test support utilities
//!
//! Shared by the engine's unit tests, its integration tests and the
//! simulator's tests: one logging bootstrap and one proptest configuration.

pub mod logging;
pub mod proptest_prelude;
