//! Re-exports used by this crate's exported macros. Not public API.

pub use alloc::sync::Arc;
