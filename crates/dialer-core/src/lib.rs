//! dialer-core: data model, managers, and capabilities for the dialer app.
//!
//! Each manager (call log, contact directory, favorites, dial buffer) owns its
//! collection exclusively and exposes its operations as the only mutation
//! surface. Managers never call each other; [`phone::Phone`] bundles one of
//! each together with the navigation state for a presentation layer.

pub mod call_log;
pub mod config;
pub mod confirm;
pub mod contacts;
pub mod dial;
pub mod dial_buffer;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod nav;
pub mod phone;
pub mod seed;
pub mod validate;

pub use error::DialerError;

