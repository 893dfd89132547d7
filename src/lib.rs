//! SpringBok ERP
//!
//! Facade over the workspace crates:
//! - [`design_system`] - Glass design system (tokens, effects, style registry)
//! - [`services`] - Auth and file-storage interfaces

pub use design_system;
pub use services;
