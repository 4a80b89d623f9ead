//! Infrastructure layer providing external service integrations.
//!
//! The only external concern in the mockup is loading and saving the
//! mock catalog as JSON.

pub mod persistence;

pub use persistence::*;
