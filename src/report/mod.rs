//! Report module - rendering comparison results and exporting records

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
