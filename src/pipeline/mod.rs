//! Pipeline module - roster extraction, persistence, and comparison

pub mod compare;
pub mod error;
pub mod extract;
pub mod roster;
pub mod store;

pub use compare::*;
pub use error::*;
pub use extract::*;
pub use roster::*;
pub use store::*;
