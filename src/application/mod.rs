//! Application layer managing state and workflows.
//!
//! This module coordinates between the domain layer and presentation
//! layer: the top-level [`App`] state, session and cart operations, and
//! the tick timers driving the simulated delivery progress.

pub mod state;
pub mod timers;

pub use state::*;
pub use timers::*;
