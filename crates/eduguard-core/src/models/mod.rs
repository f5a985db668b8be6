//! Data models for the application
//!
//! Request-scoped upload types, analysis results, storage addressing and the dashboard
//! record. Nothing here is persisted.

mod analysis;
mod dashboard;
mod object_key;
mod upload;

pub use analysis::*;
pub use dashboard::*;
pub use object_key::*;
pub use upload::*;
