//! Actor+Relay dataflow primitives.
//!
//! - [`Relay`] carries events from UI handlers.
//! - [`Actor`] owns a piece of state and the task that updates it.

pub mod actor;
pub mod relay;

pub use actor::Actor;
pub use relay::{Relay, relay};
