//! Blogdesk response cache.
//!
//! Memoizes decoded API responses per endpoint so repeated reads of the same
//! resource cost one network round-trip. Writers invalidate the keys they
//! make stale; nothing expires on its own.

pub mod keys;
mod lock;
mod store;

pub use store::ResponseCache;
